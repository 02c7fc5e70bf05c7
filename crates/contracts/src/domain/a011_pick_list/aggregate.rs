use crate::domain::common::AggregateRoot;
use crate::enums::PickListStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Строка листа подбора
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickListItem {
    pub id: String,
    pub item_code: String,
    pub item_name: String,
    pub quantity: f64,
    pub location: String,
    pub picked: bool,
    /// Вес единицы, кг
    pub weight: f64,
}

/// Лист подбора по маршруту
///
/// Счётчики `total_items` / `picked_items` не хранятся, а считаются по строкам,
/// поэтому отметка «подобрано» сразу отражается в прогрессе.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickList {
    pub id: String,
    pub route_id: String,
    pub route_name: String,
    pub status: PickListStatus,
    pub created_date: String,
    pub items: Vec<PickListItem>,
}

impl PickList {
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn picked_items(&self) -> usize {
        self.items.iter().filter(|item| item.picked).count()
    }

    /// Переключить отметку; `false`, если строки с таким id нет
    pub fn toggle_picked(&mut self, item_id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == item_id) {
            Some(item) => {
                item.picked = !item.picked;
                true
            }
            None => false,
        }
    }

    /// Общий вес: сумма `weight * quantity`
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(|item| item.weight * item.quantity).sum()
    }
}

pub const PICK_LIST_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("id", "Pick List").searchable(),
    ColumnMetadata::text("routeId", "Route").searchable(),
    ColumnMetadata::text("routeName", "Route Name").searchable(),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::date("createdDate", "Created"),
    ColumnMetadata::numeric("totalItems", "Items"),
    ColumnMetadata::numeric("pickedItems", "Picked"),
];

impl ListRecord for PickList {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "routeId" => Some(FieldValue::from(&self.route_id)),
            "routeName" => Some(FieldValue::from(&self.route_name)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "createdDate" => Some(FieldValue::from(&self.created_date)),
            "totalItems" => Some(FieldValue::from(self.total_items() as f64)),
            "pickedItems" => Some(FieldValue::from(self.picked_items() as f64)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        PICK_LIST_COLUMNS
    }
}

impl AggregateRoot for PickList {
    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "pick_list"
    }

    fn element_name() -> &'static str {
        "Pick List"
    }

    fn list_name() -> &'static str {
        "Pick Lists by Route"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_view, FilterSet};

    fn line(id: &str, quantity: f64, weight: f64, picked: bool) -> PickListItem {
        PickListItem {
            id: id.to_string(),
            item_code: format!("ITEM{}", id),
            item_name: format!("Item {}", id),
            quantity,
            location: "A1-B2".to_string(),
            picked,
            weight,
        }
    }

    fn pick_list(id: &str, route_id: &str, status: PickListStatus) -> PickList {
        PickList {
            id: id.to_string(),
            route_id: route_id.to_string(),
            route_name: "Downtown Route".to_string(),
            status,
            created_date: "2024-01-15".to_string(),
            items: vec![line("1", 5.0, 2.5, true), line("2", 10.0, 0.1, false)],
        }
    }

    #[test]
    fn test_toggle_picked_recounts() {
        let mut list = pick_list("PL-001", "RT-001", PickListStatus::InProgress);
        assert_eq!(list.picked_items(), 1);
        assert!(list.toggle_picked("2"));
        assert_eq!(list.picked_items(), 2);
        assert!(list.toggle_picked("1"));
        assert_eq!(list.picked_items(), 1);
        assert!(!list.toggle_picked("99"));
        assert_eq!(list.total_items(), 2);
    }

    #[test]
    fn test_total_weight() {
        let list = pick_list("PL-001", "RT-001", PickListStatus::Pending);
        assert!((list.total_weight() - 13.5).abs() < 1e-9);
    }

    #[test]
    fn test_search_and_status_filter() {
        let lists = vec![
            pick_list("PL-001", "RT-001", PickListStatus::InProgress),
            pick_list("PL-002", "RT-002", PickListStatus::Pending),
            pick_list("PL-003", "RT-001", PickListStatus::Completed),
        ];
        let mut filters = FilterSet::for_columns(PickList::columns());
        filters.set_search("rt-001");
        assert_eq!(filter_view(&lists, &filters).len(), 2);

        filters.set_status("In Progress");
        let ids: Vec<&str> = filter_view(&lists, &filters).iter().map(|l| l.row_id()).collect();
        assert_eq!(ids, vec!["PL-001"]);
    }
}
