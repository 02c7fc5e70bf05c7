pub mod details_state;

use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a006_route::Route;
use contracts::shared::config::EngineConfig;

pub use details_state::RouteDetails;

/// Форма списка маршрутов
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<Route> {
    ListController::for_form(mock::routes(), config, store)
}
