use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a001_item::Item;
use contracts::shared::config::EngineConfig;

/// Форма списка номенклатуры
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<Item> {
    ListController::for_form(mock::items(), config, store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_search_by_category() {
        let owner = leptos::prelude::Owner::new();
        owner.set();
        let list = create_list_state(&EngineConfig::default(), &FilterStateStore::new());
        list.set_search("accessories");
        let codes: Vec<String> = list.visible().into_iter().map(|i| i.code).collect();
        assert_eq!(codes, vec!["ITEM003", "ITEM004"]);
    }
}
