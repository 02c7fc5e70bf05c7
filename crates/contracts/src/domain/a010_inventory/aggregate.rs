use crate::domain::common::AggregateRoot;
use crate::enums::StockStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Складской остаток позиции
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub on_hand: f64,
    pub reserved: f64,
    pub available: f64,
    pub reorder_point: f64,
    pub unit_cost: f64,
    /// Ячейка склада (например, "A1-B2")
    pub location: String,
    pub last_updated: String,
}

impl InventoryItem {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_levels(self.available, self.reorder_point)
    }

    /// Стоимость остатка: `on_hand * unit_cost`
    pub fn stock_value(&self) -> f64 {
        self.on_hand * self.unit_cost
    }
}

pub const INVENTORY_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("sku", "SKU").searchable(),
    ColumnMetadata::text("name", "Product").searchable(),
    ColumnMetadata::text("category", "Category"),
    ColumnMetadata::numeric("onHand", "On Hand"),
    ColumnMetadata::numeric("reserved", "Reserved"),
    ColumnMetadata::numeric("available", "Available"),
    ColumnMetadata::numeric("reorderPoint", "Reorder Point"),
    ColumnMetadata::numeric("unitCost", "Unit Cost"),
    ColumnMetadata::text("location", "Location"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for InventoryItem {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "sku" => Some(FieldValue::from(&self.sku)),
            "name" => Some(FieldValue::from(&self.name)),
            "category" => Some(FieldValue::from(&self.category)),
            "onHand" => Some(FieldValue::from(self.on_hand)),
            "reserved" => Some(FieldValue::from(self.reserved)),
            "available" => Some(FieldValue::from(self.available)),
            "reorderPoint" => Some(FieldValue::from(self.reorder_point)),
            "unitCost" => Some(FieldValue::from(self.unit_cost)),
            "location" => Some(FieldValue::from(&self.location)),
            "lastUpdated" => Some(FieldValue::from(&self.last_updated)),
            "status" => Some(FieldValue::from(self.stock_status().as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.stock_status().as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        INVENTORY_COLUMNS
    }
}

impl AggregateRoot for InventoryItem {
    fn aggregate_index() -> &'static str {
        "a010"
    }

    fn collection_name() -> &'static str {
        "inventory"
    }

    fn element_name() -> &'static str {
        "Inventory Item"
    }

    fn list_name() -> &'static str {
        "Inventory"
    }
}

/// Карточки над таблицей остатков; считаются по всем позициям, без учёта фильтров
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_items: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_value: f64,
}

impl InventorySummary {
    pub fn from_items(items: &[InventoryItem]) -> Self {
        items.iter().fold(Self::default(), |mut acc, item| {
            acc.total_items += 1;
            match item.stock_status() {
                StockStatus::LowStock => acc.low_stock += 1,
                StockStatus::OutOfStock => acc.out_of_stock += 1,
                StockStatus::InStock => {}
            }
            acc.total_value += item.stock_value();
            acc
        })
    }
}
