use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a011_pick_list::PickList;
use contracts::shared::config::EngineConfig;

/// Форма листов подбора по маршрутам
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<PickList> {
    ListController::for_form(mock::pick_lists(), config, store)
}

/// Отметить строку подобранной (или снять отметку)
pub fn toggle_picked(list: &ListController<PickList>, pick_list_id: &str, item_id: &str) -> bool {
    let mut toggled = false;
    let found = list.update_record(pick_list_id, |pick_list| toggled = pick_list.toggle_picked(item_id));
    if !found || !toggled {
        log::warn!("Pick list item {}/{} not found", pick_list_id, item_id);
    }
    found && toggled
}

/// Вес листа, округлённый до сотых для вывода
pub fn total_weight(pick_list: &PickList) -> String {
    format!("{:.2}", pick_list.total_weight())
}
