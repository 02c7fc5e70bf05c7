use crate::domain::common::AggregateRoot;
use crate::enums::{SalesOrderPriority, SalesOrderStatus, SalesOrderType, ShipmentLineStatus};
use crate::shared::calc::{EditableLine, OrderLineBase, OrderTotals};
use crate::shared::list::{FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Заказ клиента (строка списка Sales Orders)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: String,
    pub customer: String,
    pub order_date: String,
    pub delivery_date: String,
    pub status: SalesOrderStatus,
    #[serde(rename = "type")]
    pub order_type: SalesOrderType,
    pub total: f64,
    #[serde(rename = "items")]
    pub item_count: f64,
}

pub const SALES_ORDER_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("id", "SO Number").searchable(),
    ColumnMetadata::text("customer", "Customer").searchable(),
    ColumnMetadata::date("orderDate", "Order Date"),
    ColumnMetadata::date("deliveryDate", "Delivery Date"),
    ColumnMetadata::status("status", "Status"),
    ColumnMetadata::text("type", "Type"),
    ColumnMetadata::numeric("total", "Total"),
    ColumnMetadata::numeric("items", "Items"),
];

impl ListRecord for SalesOrder {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "customer" => Some(FieldValue::from(&self.customer)),
            "orderDate" => Some(FieldValue::from(&self.order_date)),
            "deliveryDate" => Some(FieldValue::from(&self.delivery_date)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            "type" => Some(FieldValue::from(self.order_type.as_str())),
            "total" => Some(FieldValue::from(self.total)),
            "items" => Some(FieldValue::from(self.item_count)),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        SALES_ORDER_COLUMNS
    }
}

impl AggregateRoot for SalesOrder {
    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "sales_order"
    }

    fn element_name() -> &'static str {
        "Sales Order"
    }

    fn list_name() -> &'static str {
        "Sales Orders"
    }
}

/// Шапка документа «Заказ клиента»
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderHeader {
    pub id: String,
    pub customer: String,
    pub customer_address: String,
    pub order_date: String,
    pub delivery_date: String,
    pub status: SalesOrderStatus,
    #[serde(rename = "type")]
    pub order_type: SalesOrderType,
    pub currency: String,
    pub payment_terms: String,
    pub delivery_terms: String,
    pub sales_rep: String,
    pub priority: SalesOrderPriority,
    pub notes: String,
    pub shipping_amount: f64,
}

impl SalesOrderHeader {
    pub fn new_draft(today: NaiveDate, date_format: &str, shipping_amount: f64) -> Self {
        let today = today.format(date_format).to_string();
        Self {
            id: String::new(),
            customer: String::new(),
            customer_address: String::new(),
            order_date: today.clone(),
            delivery_date: today,
            status: SalesOrderStatus::Draft,
            order_type: SalesOrderType::Wholesale,
            currency: "USD".to_string(),
            payment_terms: "Net 15".to_string(),
            delivery_terms: "FOB Origin".to_string(),
            sales_rep: String::new(),
            priority: SalesOrderPriority::Medium,
            notes: String::new(),
            shipping_amount,
        }
    }

    /// Итоги по текущим строкам; доставка берётся из шапки
    pub fn totals(&self, lines: &[SalesOrderLine], tax_rate: f64) -> OrderTotals {
        OrderTotals::from_lines(lines, tax_rate, self.shipping_amount)
    }
}

/// Строка табличной части заказа клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderLine {
    #[serde(flatten)]
    pub base: OrderLineBase,
    #[serde(default)]
    pub shipped_qty: f64,
    #[serde(default)]
    pub status: ShipmentLineStatus,
}

impl SalesOrderLine {
    pub fn new(base: OrderLineBase) -> Self {
        Self {
            base,
            shipped_qty: 0.0,
            status: ShipmentLineStatus::Pending,
        }
    }
}

pub const SALES_ORDER_LINE_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("itemCode", "Item Code").searchable(),
    ColumnMetadata::text("description", "Description").searchable(),
    ColumnMetadata::numeric("quantity", "Quantity"),
    ColumnMetadata::numeric("unitPrice", "Unit Price"),
    ColumnMetadata::numeric("discount", "Discount %"),
    ColumnMetadata::numeric("lineTotal", "Line Total"),
    ColumnMetadata::numeric("shippedQty", "Shipped"),
    ColumnMetadata::status("status", "Status"),
];

impl EditableLine for SalesOrderLine {
    fn base(&self) -> &OrderLineBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut OrderLineBase {
        &mut self.base
    }

    fn blank(id: String) -> Self {
        Self::new(OrderLineBase::new(id))
    }
}

impl ListRecord for SalesOrderLine {
    fn row_id(&self) -> &str {
        &self.base.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "shippedQty" => Some(FieldValue::from(self.shipped_qty)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => self.base.field_value(field),
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        SALES_ORDER_LINE_COLUMNS
    }
}
