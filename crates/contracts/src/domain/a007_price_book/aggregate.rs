use crate::domain::common::AggregateRoot;
use crate::enums::ActivityStatus;
use crate::shared::list::{next_numeric_id, FieldValue, ListRecord};
use crate::shared::metadata::ColumnMetadata;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Итоговая цена позиции прайс-листа: `base_price * (1 - discount_percent / 100)`
pub fn final_price(base_price: f64, discount_percent: f64) -> f64 {
    base_price * (1.0 - discount_percent / 100.0)
}

/// Прайс-лист (строка списка Price Books)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBook {
    pub id: String,
    pub name: String,
    pub description: String,
    pub currency: String,
    pub item_count: f64,
    pub valid_from: String,
    pub valid_to: String,
    pub status: ActivityStatus,
}

pub const PRICE_BOOK_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("name", "Name").searchable(),
    ColumnMetadata::text("description", "Description").searchable(),
    ColumnMetadata::text("currency", "Currency"),
    ColumnMetadata::numeric("itemCount", "Items"),
    ColumnMetadata::date("validFrom", "Valid From"),
    ColumnMetadata::date("validTo", "Valid To"),
    ColumnMetadata::status("status", "Status"),
];

impl ListRecord for PriceBook {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "name" => Some(FieldValue::from(&self.name)),
            "description" => Some(FieldValue::from(&self.description)),
            "currency" => Some(FieldValue::from(&self.currency)),
            "itemCount" => Some(FieldValue::from(self.item_count)),
            "validFrom" => Some(FieldValue::from(&self.valid_from)),
            "validTo" => Some(FieldValue::from(&self.valid_to)),
            "status" => Some(FieldValue::from(self.status.as_str())),
            _ => None,
        }
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }

    fn columns() -> &'static [ColumnMetadata] {
        PRICE_BOOK_COLUMNS
    }
}

impl AggregateRoot for PriceBook {
    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "price_book"
    }

    fn element_name() -> &'static str {
        "Price Book"
    }

    fn list_name() -> &'static str {
        "Price Books"
    }
}

/// Позиция прайс-листа; итоговая цена пересчитывается при каждом изменении
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "PriceBookItemInput")]
pub struct PriceBookItem {
    /// ID строки внутри прайс-листа
    pub id: String,
    pub item_code: String,
    pub item_name: String,
    base_price: f64,
    discount_percent: f64,
    final_price: f64,
}

// Итоговая цена из входных данных игнорируется
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceBookItemInput {
    #[serde(default)]
    id: String,
    #[serde(default)]
    item_code: String,
    #[serde(default)]
    item_name: String,
    #[serde(default)]
    base_price: f64,
    #[serde(default)]
    discount_percent: f64,
}

impl From<PriceBookItemInput> for PriceBookItem {
    fn from(input: PriceBookItemInput) -> Self {
        PriceBookItem::new(
            input.id,
            input.item_code,
            input.item_name,
            input.base_price,
            input.discount_percent,
        )
    }
}

impl PriceBookItem {
    pub fn new(
        id: impl Into<String>,
        item_code: impl Into<String>,
        item_name: impl Into<String>,
        base_price: f64,
        discount_percent: f64,
    ) -> Self {
        Self {
            id: id.into(),
            item_code: item_code.into(),
            item_name: item_name.into(),
            base_price,
            discount_percent,
            final_price: final_price(base_price, discount_percent),
        }
    }

    /// Пустая позиция (кнопка «Добавить позицию»)
    pub fn blank(id: impl Into<String>) -> Self {
        Self::new(id, "", "", 0.0, 0.0)
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn final_price(&self) -> f64 {
        self.final_price
    }

    pub fn set_base_price(&mut self, base_price: f64) {
        self.base_price = base_price;
        self.final_price = final_price(self.base_price, self.discount_percent);
    }

    pub fn set_discount_percent(&mut self, discount_percent: f64) {
        self.discount_percent = discount_percent;
        self.final_price = final_price(self.base_price, self.discount_percent);
    }
}

pub const PRICE_BOOK_ITEM_COLUMNS: &[ColumnMetadata] = &[
    ColumnMetadata::text("itemCode", "Item Code").searchable(),
    ColumnMetadata::text("itemName", "Item Name").searchable(),
    ColumnMetadata::numeric("basePrice", "Base Price"),
    ColumnMetadata::numeric("discountPercent", "Discount %"),
    ColumnMetadata::numeric("finalPrice", "Final Price"),
];

impl ListRecord for PriceBookItem {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "itemCode" => Some(FieldValue::from(&self.item_code)),
            "itemName" => Some(FieldValue::from(&self.item_name)),
            "basePrice" => Some(FieldValue::from(self.base_price)),
            "discountPercent" => Some(FieldValue::from(self.discount_percent)),
            "finalPrice" => Some(FieldValue::from(self.final_price)),
            _ => None,
        }
    }

    fn columns() -> &'static [ColumnMetadata] {
        PRICE_BOOK_ITEM_COLUMNS
    }
}

/// Прайс-лист с позициями (карточка)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBookData {
    pub id: String,
    pub name: String,
    pub description: String,
    pub currency: String,
    pub valid_from: String,
    pub valid_to: String,
    pub status: ActivityStatus,
    pub items: Vec<PriceBookItem>,
}

impl PriceBookData {
    /// Добавить пустую позицию с очередным ID
    pub fn add_blank_item(&mut self) -> String {
        let id = next_numeric_id(self.items.iter().map(|i| i.id.as_str()));
        self.items.push(PriceBookItem::blank(id.clone()));
        id
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut PriceBookItem> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Новый прайс-лист: действует с сегодняшнего дня 365 дней
    pub fn new_empty(today: NaiveDate, date_format: &str) -> Self {
        let valid_to = today.checked_add_days(Days::new(365)).unwrap_or(today);
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            currency: "USD".to_string(),
            valid_from: today.format(date_format).to_string(),
            valid_to: valid_to.format(date_format).to_string(),
            status: ActivityStatus::Active,
            items: Vec::new(),
        }
    }
}
