use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::lookup::MasterDataEntry;
use crate::shared::metadata::ColumnMetadata;
use serde::{Deserialize, Serialize};

/// Поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub supplier_code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub status: ActivityStatus,
    pub total_purchases: f64,
    /// Дата последней закупки (YYYY-MM-DD или "-")
    pub last_purchase_date: String,
}

pub const SUPPLIER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("supplierCode", "Supplier Code").searchable(),
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("email", "Email").searchable(),
    ColumnMetadata::text("phone", "Phone"),
    ColumnMetadata::text("city", "City").searchable(),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::numeric("totalPurchases", "Total Purchases"),
    ColumnMetadata::date("lastPurchaseDate", "Last Purchase"),
];

impl ListRecord for Supplier {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "supplierCode" => Some(FieldValue::from(&self.supplier_code)),
            "name" => Some(FieldValue::from(&self.name)),
            "email" => Some(FieldValue::from(&self.email)),
            "phone" => Some(FieldValue::from(&self.phone)),
            "address" => Some(FieldValue::from(&self.address)),
            "city" => Some(FieldValue::from(&self.city)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "totalPurchases" => Some(FieldValue::from(self.total_purchases)),
            "lastPurchaseDate" => Some(FieldValue::from(&self.last_purchase_date)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        SUPPLIER_COLUMNS
    }
}

impl AggregateRoot for Supplier {
    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "supplier"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }
}

/// Запись справочника поставщиков для шапки заказа поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorMasterEntry {
    pub vendor_code: String,
    /// Краткое имя (например, "TSI")
    pub vendor: String,
    pub vendor_name: String,
    pub vendor_address: String,
}

impl VendorMasterEntry {
    pub fn new(
        vendor_code: impl Into<String>,
        vendor: impl Into<String>,
        vendor_name: impl Into<String>,
        vendor_address: impl Into<String>,
    ) -> Self {
        Self {
            vendor_code: vendor_code.into(),
            vendor: vendor.into(),
            vendor_name: vendor_name.into(),
            vendor_address: vendor_address.into(),
        }
    }
}

impl MasterDataEntry for VendorMasterEntry {
    fn code(&self) -> &str {
        &self.vendor_code
    }
}
