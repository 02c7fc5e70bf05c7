use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Категория номенклатуры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub item_count: f64,
    pub status: ActivityStatus,
}

pub const ITEM_CATEGORY_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("code", "Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("description", "Description").searchable(),
    ColumnMetadata::numeric("itemCount", "Items"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for ItemCategory {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "code" => Some(FieldValue::from(&self.code)),
            "name" => Some(FieldValue::from(&self.name)),
            "description" => Some(FieldValue::from(&self.description)),
            "itemCount" => Some(FieldValue::from(self.item_count)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        ITEM_CATEGORY_COLUMNS
    }
}

impl AggregateRoot for ItemCategory {
    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "item_category"
    }

    fn element_name() -> &'static str {
        "Item Category"
    }

    fn list_name() -> &'static str {
        "Item Categories"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{delete_selected, filter_view, FilterSet, SelectionSet};

    fn category(id: &str, code: &str, name: &str, description: &str, status: ActivityStatus) -> ItemCategory {
        ItemCategory {
            id: id.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            item_count: 0.0,
            status,
        }
    }

    #[test]
    fn test_filter_select_all_and_delete() {
        let mut categories = vec![
            category("1", "CAT001", "Electronics", "Electronic devices and components", ActivityStatus::Active),
            category("2", "CAT002", "Accessories", "Computer and electronic accessories", ActivityStatus::Active),
            category("5", "CAT005", "Furniture", "Office and workstation furniture", ActivityStatus::Inactive),
        ];

        let mut filters = FilterSet::for_columns(ItemCategory::columns());
        filters.set_operand("description", "electronic");
        let visible: Vec<String> = filter_view(&categories, &filters)
            .iter()
            .map(|c| c.row_id().to_string())
            .collect();
        assert_eq!(visible, vec!["1", "2"]);

        let mut selection = SelectionSet::new();
        selection.select_all(true, visible.iter().map(String::as_str));
        assert_eq!(delete_selected(&mut categories, &mut selection), 2);
        assert_eq!(categories[0].name, "Furniture");
        assert!(selection.is_empty());
    }
}
