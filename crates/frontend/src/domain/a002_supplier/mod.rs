use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a002_supplier::Supplier;
use contracts::shared::config::EngineConfig;

/// Форма списка поставщиков
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<Supplier> {
    ListController::for_form(mock::suppliers(), config, store)
}
