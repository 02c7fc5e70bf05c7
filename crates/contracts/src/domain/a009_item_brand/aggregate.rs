use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Бренд (торговая марка) номенклатуры
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBrand {
    pub id: String,
    pub code: String,
    pub name: String,
    pub manufacturer: String,
    pub country: String,
    pub item_count: f64,
    pub status: ActivityStatus,
}

pub const ITEM_BRAND_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("code", "Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("manufacturer", "Manufacturer").searchable(),
    ColumnMetadata::text("country", "Country"),
    ColumnMetadata::numeric("itemCount", "Items"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for ItemBrand {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "code" => Some(FieldValue::from(&self.code)),
            "name" => Some(FieldValue::from(&self.name)),
            "manufacturer" => Some(FieldValue::from(&self.manufacturer)),
            "country" => Some(FieldValue::from(&self.country)),
            "itemCount" => Some(FieldValue::from(self.item_count)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        ITEM_BRAND_COLUMNS
    }
}

impl AggregateRoot for ItemBrand {
    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "item_brand"
    }

    fn element_name() -> &'static str {
        "Item Brand"
    }

    fn list_name() -> &'static str {
        "Item Brands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::{filter_view, FilterSet};

    #[test]
    fn test_country_and_status_filters() {
        let brand = |id: &str, name: &str, country: &str, status| ItemBrand {
            id: id.to_string(),
            code: format!("BRD00{}", id),
            name: name.to_string(),
            manufacturer: format!("{} Inc.", name),
            country: country.to_string(),
            item_count: 10.0,
            status,
        };
        let brands = vec![
            brand("1", "Dell", "USA", ActivityStatus::Active),
            brand("3", "Lenovo", "China", ActivityStatus::Active),
            brand("5", "Samsung", "South Korea", ActivityStatus::Inactive),
        ];

        let mut filters = FilterSet::for_columns(ItemBrand::columns());
        filters.set_operand("country", "usa");
        let ids: Vec<&str> = filter_view(&brands, &filters).iter().map(|b| b.row_id()).collect();
        assert_eq!(ids, vec!["1"]);

        filters.clear();
        filters.set_status("Inactive");
        let ids: Vec<&str> = filter_view(&brands, &filters).iter().map(|b| b.row_id()).collect();
        assert_eq!(ids, vec!["5"]);
        assert_eq!(ItemBrand::list_form_key(), "a009_item_brand_list");
    }
}
