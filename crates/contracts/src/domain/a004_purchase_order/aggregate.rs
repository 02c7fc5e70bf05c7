use crate::domain::a002_supplier::VendorMasterEntry;
use crate::domain::common::AggregateRoot;
use crate::enums::{OrderLineStatus, PurchaseOrderStatus};
use crate::shared::calc::{EditableLine, LineChange, OrderLineBase, OrderTotals};
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::lookup::{normalize_code, Lookup, Resolution};
use crate::shared::metadata::ColumnMetadata;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Заказ поставщику (строка списка Purchase Orders)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub vendor: String,
    pub vendor_name: String,
    pub order_date: String,
    pub expected_date: String,
    pub status: PurchaseOrderStatus,
    pub total: f64,
    /// Количество позиций
    #[serde(rename = "items")]
    pub item_count: f64,
}

pub const PURCHASE_ORDER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("id", "PO Number").searchable(),
    ColumnMetadata::text("vendor", "Vendor").searchable(),
    ColumnMetadata::text("vendorName", "Vendor Name").searchable(),
    ColumnMetadata::date("orderDate", "Order Date"),
    ColumnMetadata::date("expectedDate", "Expected Date"),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::numeric("total", "Total"),
    ColumnMetadata::numeric("items", "Items"),
];

impl ListRecord for PurchaseOrder {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "vendor" => Some(FieldValue::from(&self.vendor)),
            "vendorName" => Some(FieldValue::from(&self.vendor_name)),
            "orderDate" => Some(FieldValue::from(&self.order_date)),
            "expectedDate" => Some(FieldValue::from(&self.expected_date)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "total" => Some(FieldValue::from(self.total)),
            "items" => Some(FieldValue::from(self.item_count)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        PURCHASE_ORDER_COLUMNS
    }
}

impl AggregateRoot for PurchaseOrder {
    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "purchase_order"
    }

    fn element_name() -> &'static str {
        "Purchase Order"
    }

    fn list_name() -> &'static str {
        "Purchase Orders"
    }
}

/// Шапка документа «Заказ поставщику»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderHeader {
    pub id: String,
    pub vendor_code: String,
    pub vendor: String,
    pub vendor_name: String,
    pub vendor_address: String,
    pub order_date: String,
    pub expected_date: String,
    pub status: PurchaseOrderStatus,
    pub currency: String,
    pub payment_terms: String,
    pub delivery_terms: String,
    pub notes: String,
}

impl PurchaseOrderHeader {
    /// Новый черновик: даты заказа и поставки - сегодня
    pub fn new_draft(today: NaiveDate, date_format: &str) -> Self {
        let today = today.format(date_format).to_string();
        Self {
            id: String::new(),
            vendor_code: String::new(),
            vendor: String::new(),
            vendor_name: String::new(),
            vendor_address: String::new(),
            order_date: today.clone(),
            expected_date: today,
            status: PurchaseOrderStatus::Draft,
            currency: "USD".to_string(),
            payment_terms: "Net 30".to_string(),
            delivery_terms: "FOB Destination".to_string(),
            notes: String::new(),
        }
    }

    /// Ввод кода поставщика: найден - подставляются имя и адрес,
    /// не найден - код сохраняется как введён, зависимые поля очищаются
    pub fn resolve_vendor<L>(&mut self, code: &str, vendors: &L) -> LineChange
    where
        L: Lookup<Entry = VendorMasterEntry>,
    {
        match vendors.resolve(&normalize_code(code)) {
            Resolution::Found(entry) => {
                self.vendor_code = entry.vendor_code;
                self.vendor = entry.vendor;
                self.vendor_name = entry.vendor_name;
                self.vendor_address = entry.vendor_address;
                LineChange::Resolved
            }
            Resolution::NotFound => {
                self.vendor_code = code.to_string();
                self.vendor.clear();
                self.vendor_name.clear();
                self.vendor_address.clear();
                LineChange::Cleared
            }
        }
    }

    /// Итоги документа по текущим строкам (доставки у закупки нет).
    /// В шапке не хранятся: считаются при каждом чтении.
    pub fn totals(lines: &[PurchaseOrderLine], tax_rate: f64) -> OrderTotals {
        OrderTotals::from_lines(lines, tax_rate, 0.0)
    }
}

/// Строка табличной части заказа поставщику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderLine {
    #[serde(flatten)]
    pub base: OrderLineBase,
    #[serde(default)]
    pub received_qty: f64,
    #[serde(default)]
    pub status: OrderLineStatus,
}

impl PurchaseOrderLine {
    pub fn new(base: OrderLineBase) -> Self {
        Self {
            base,
            received_qty: 0.0,
            status: OrderLineStatus::Pending,
        }
    }

    /// Приёмка: статус строки следует за принятым количеством
    pub fn set_received_qty(&mut self, received_qty: f64) {
        self.received_qty = received_qty;
        self.sync_derived();
    }
}

pub const PURCHASE_ORDER_LINE_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("itemCode", "Item Code").searchable(),
    ColumnMetadata::text("description", "Description").searchable(),
    ColumnMetadata::numeric("quantity", "Quantity"),
    ColumnMetadata::numeric("unitPrice", "Unit Price"),
    ColumnMetadata::numeric("discount", "Discount %"),
    ColumnMetadata::numeric("lineTotal", "Line Total"),
    ColumnMetadata::numeric("receivedQty", "Received"),
    ColumnMetadata::status("status", "Status"),
];

impl EditableLine for PurchaseOrderLine {
    fn base(&self) -> &OrderLineBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OrderLineBase {
        &mut self.base
    }

    fn blank(id: String) -> Self {
        Self::new(OrderLineBase::new(id))
    }

    fn sync_derived(&mut self) {
        self.status = OrderLineStatus::from_received(self.received_qty, self.base.quantity());
    }
}

impl ListRecord for PurchaseOrderLine {
    fn row_id(&self) -> &str {
        &self.base.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "receivedQty" => Some(FieldValue::from(self.received_qty)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => self.base.field_value(field),
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        PURCHASE_ORDER_LINE_COLUMNS
    }
}
