pub mod details_state;

use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a004_purchase_order::PurchaseOrder;
use contracts::shared::config::EngineConfig;

pub use details_state::{HeaderDate, PurchaseOrderDetails, PurchaseOrderHeaderState};

/// Форма списка заказов поставщикам
pub fn create_list_state(
    config: &EngineConfig,
    store: &FilterStateStore,
) -> ListController<PurchaseOrder> {
    ListController::for_form(mock::purchase_orders(), config, store)
}
