pub mod details_state;

use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a005_sales_order::SalesOrder;
use contracts::shared::config::EngineConfig;

pub use details_state::SalesOrderDetails;

pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<SalesOrder> {
    ListController::for_form(mock::sales_orders(), config, store)
}
