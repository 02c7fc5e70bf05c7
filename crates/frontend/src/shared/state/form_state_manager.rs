use contracts::domain::common::AggregateRoot;
use contracts::shared::list::FilterSet;
use serde_json::Value;
use std::collections::HashMap;

/// FilterStateStore keeps each form's filter row across tab switches.
/// States are stored in memory as JSON and restored when the tab is reopened.
#[derive(Clone, Debug, Default)]
pub struct FilterStateStore {
    states: HashMap<String, Value>,
}

impl FilterStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the raw state for a specific form
    pub fn get_state(&self, form_key: &str) -> Option<&Value> {
        self.states.get(form_key)
    }

    /// Set the raw state for a specific form
    pub fn set_state(&mut self, form_key: String, state: Value) {
        self.states.insert(form_key, state);
    }

    /// Save the filter row of a form
    pub fn save_filters(&mut self, form_key: &str, filters: &FilterSet) {
        match serde_json::to_value(filters) {
            Ok(value) => {
                self.states.insert(form_key.to_string(), value);
            }
            Err(e) => log::warn!("Failed to save filters for {}: {}", form_key, e),
        }
    }

    /// Load the filter row of a form; a stale or broken state is dropped
    pub fn load_filters(&self, form_key: &str) -> Option<FilterSet> {
        let value = self.states.get(form_key)?;
        match serde_json::from_value::<FilterSet>(value.clone()) {
            Ok(filters) => Some(filters),
            Err(e) => {
                log::warn!("Ignoring saved filters for {}: {}", form_key, e);
                None
            }
        }
    }

    /// Save the list form filters of an aggregate
    pub fn save_list_filters<A: AggregateRoot>(&mut self, filters: &FilterSet) {
        self.save_filters(&A::list_form_key(), filters);
    }

    pub fn load_list_filters<A: AggregateRoot>(&self) -> Option<FilterSet> {
        self.load_filters(&A::list_form_key())
    }

    /// Remove the state for a specific form
    pub fn remove_state(&mut self, form_key: &str) {
        self.states.remove(form_key);
    }

    /// Clear all states
    pub fn clear_all(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_route::Route;
    use contracts::shared::list::{FilterOperator, ListRecord};

    #[test]
    fn test_filters_survive_tab_switch() {
        let mut store = FilterStateStore::new();
        let mut filters = FilterSet::for_columns(Route::columns());
        filters.set_operator("distance", FilterOperator::GreaterThan);
        filters.set_operand("distance", "250");
        filters.set_status("Active");

        store.save_list_filters::<Route>(&filters);
        assert!(store.get_state("a006_route_list").is_some());
        assert_eq!(store.load_list_filters::<Route>(), Some(filters));

        store.remove_state("a006_route_list");
        assert_eq!(store.load_list_filters::<Route>(), None);
    }

    #[test]
    fn test_saved_json_shape() {
        let mut store = FilterStateStore::new();
        let mut filters = FilterSet::new();
        filters.set_operator("total", "lessThanOrEqual");
        filters.set_operand("total", "1000");
        store.save_filters("a005_sales_order_list", &filters);

        let value = store.get_state("a005_sales_order_list").unwrap();
        assert_eq!(value["predicates"]["total"]["operator"], "lessThanOrEqual");
        assert_eq!(value["status"], "all");
    }

    #[test]
    fn test_broken_state_is_ignored() {
        let mut store = FilterStateStore::new();
        store.set_state("form".to_string(), serde_json::json!({"predicates": 42}));
        assert_eq!(store.load_filters("form"), None);
        store.clear_all();
        assert!(store.get_state("form").is_none());
    }
}
