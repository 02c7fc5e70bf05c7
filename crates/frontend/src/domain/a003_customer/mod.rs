use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a003_customer::Customer;
use contracts::shared::config::EngineConfig;

/// Форма списка клиентов
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<Customer> {
    ListController::for_form(mock::customers(), config, store)
}
