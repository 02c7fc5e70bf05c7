use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::lookup::MasterDataEntry;
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Номенклатура (строка списка Items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub code: String,
    pub name: String,
    pub category: String,
    pub unit_price: f64,
    pub stock: f64,
    pub status: ActivityStatus,
}

pub const ITEM_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("code", "Item Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("category", "Category").searchable(),
    ColumnMetadata::numeric("unitPrice", "Unit Price"),
    ColumnMetadata::numeric("stock", "Stock"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for Item {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "code" => Some(FieldValue::from(&self.code)),
            "name" => Some(FieldValue::from(&self.name)),
            "category" => Some(FieldValue::from(&self.category)),
            "unitPrice" => Some(FieldValue::from(self.unit_price)),
            "stock" => Some(FieldValue::from(self.stock)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        ITEM_COLUMNS
    }
}

impl AggregateRoot for Item {
    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "item"
    }

    fn element_name() -> &'static str {
        "Item"
    }

    fn list_name() -> &'static str {
        "Items"
    }
}

/// Запись справочника номенклатуры для подстановки в строки заказов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemMasterEntry {
    pub item_code: String,
    pub description: String,
    pub unit_price: f64,
}

impl ItemMasterEntry {
    pub fn new(item_code: impl Into<String>, description: impl Into<String>, unit_price: f64) -> Self {
        Self {
            item_code: item_code.into(),
            description: description.into(),
            unit_price,
        }
    }
}

impl MasterDataEntry for ItemMasterEntry {
    fn code(&self) -> &str {
        &self.item_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_view, FilterOperator, FilterSet};

    fn items() -> Vec<Item> {
        let item = |id: &str, code: &str, name: &str, category: &str, price: f64, stock: f64, status| Item {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            unit_price: price,
            stock,
            status,
        };
        vec![
            item("1", "ITEM001", "Business Laptop Pro 15\"", "Electronics", 1200.0, 25.0, ActivityStatus::Active),
            item("2", "ITEM002", "27\" 4K Monitor", "Electronics", 350.0, 45.0, ActivityStatus::Active),
            item("5", "ITEM005", "USB-C to HDMI Cable 2m", "Cables", 25.0, 200.0, ActivityStatus::Inactive),
        ]
    }

    #[test]
    fn test_item_filters() {
        let items = items();
        let mut filters = FilterSet::for_columns(Item::columns());
        filters.set_operand("unitPrice", "300");
        filters.set_operator("unitPrice", FilterOperator::GreaterThan);
        let ids: Vec<&str> = filter_view(&items, &filters).iter().map(|i| i.row_id()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        filters.clear();
        filters.set_status("inactive");
        let ids: Vec<&str> = filter_view(&items, &filters).iter().map(|i| i.row_id()).collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn test_item_serde_camel_case() {
        let json = serde_json::to_value(&items()[0]).unwrap();
        assert_eq!(json["unitPrice"], 1200.0);
        assert_eq!(json["status"], "Active");
        assert_eq!(Item::list_form_key(), "a001_item_list");
    }
}
