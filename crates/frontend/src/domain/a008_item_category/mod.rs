use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a008_item_category::ItemCategory;
use contracts::shared::config::EngineConfig;

/// Форма списка категорий номенклатуры
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<ItemCategory> {
    ListController::for_form(mock::item_categories(), config, store)
}
