use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use contracts::domain::a006_route::RouteCustomer;
use contracts::shared::config::EngineConfig;
use contracts::shared::list::{next_numeric_id, ListRecord};
use leptos::prelude::*;

/// Карточка маршрута: таблица точек доставки со строкой фильтров
#[derive(Clone, Copy)]
pub struct RouteDetails {
    pub customers: ListController<RouteCustomer>,
    pub is_editing: RwSignal<bool>,
}

impl RouteDetails {
    /// "new" и неизвестный маршрут открываются пустыми в режиме редактирования
    pub fn load(route_id: &str, config: &EngineConfig) -> Self {
        let known = mock::routes().iter().any(|r| r.id == route_id);
        let (customers, is_editing) = if known {
            (mock::route_customers(), false)
        } else {
            if route_id != "new" {
                log::warn!("Route {} not found, opening an empty route", route_id);
            }
            (Vec::new(), true)
        };

        Self {
            customers: ListController::new(customers, config.filters.options()),
            is_editing: RwSignal::new(is_editing),
        }
    }

    pub fn set_editing(&self, is_editing: bool) {
        self.is_editing.set(is_editing);
    }

    /// Пустая точка в конец таблицы; возвращает её id
    pub fn add_customer(&self) -> String {
        let id = self
            .customers
            .state
            .with(|s| next_numeric_id(s.records.iter().map(|c| c.row_id())));
        self.customers.add_record(RouteCustomer::blank(id.clone()));
        id
    }
}
