use crate::shared::data::mock;
use chrono::NaiveDate;
use contracts::domain::a007_price_book::{PriceBookData, PriceBookItem};
use contracts::shared::config::EngineConfig;
use contracts::shared::list::{matches_search, parse_number_or_zero};
use leptos::prelude::*;

/// Редактируемое поле позиции прайс-листа
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceField {
    ItemCode,
    ItemName,
    BasePrice,
    DiscountPercent,
}

#[derive(Clone, Debug)]
pub struct PriceBookState {
    pub data: PriceBookData,
    pub is_editing: bool,
}

/// Карточка прайс-листа
#[derive(Clone)]
pub struct PriceBookDetails {
    pub state: RwSignal<PriceBookState>,
    price_book_id: String,
    date_format: String,
}

impl PriceBookDetails {
    /// "new" и неизвестный ID - пустой прайс-лист в режиме редактирования
    pub fn load(price_book_id: &str, config: &EngineConfig, today: NaiveDate) -> Self {
        let details = Self {
            state: RwSignal::new(PriceBookState {
                data: PriceBookData::new_empty(today, &config.dates.format),
                is_editing: true,
            }),
            price_book_id: price_book_id.to_string(),
            date_format: config.dates.format.clone(),
        };
        details.reload(today);
        details
    }

    fn reload(&self, today: NaiveDate) {
        let loaded = if self.price_book_id == "new" {
            None
        } else {
            let found = mock::price_book_data(&self.price_book_id);
            if found.is_none() {
                log::warn!("Price book {} not found, opening an empty one", self.price_book_id);
            }
            found
        };
        let is_editing = loaded.is_none();
        let data = loaded.unwrap_or_else(|| PriceBookData::new_empty(today, &self.date_format));
        self.state.set(PriceBookState { data, is_editing });
    }

    pub fn set_editing(&self, is_editing: bool) {
        self.state.update(|s| s.is_editing = is_editing);
    }

    /// «Отмена»: вернуть сохранённую версию
    pub fn cancel(&self, today: NaiveDate) {
        self.reload(today);
    }

    pub fn data(&self) -> PriceBookData {
        self.state.with(|s| s.data.clone())
    }

    /// «Добавить позицию»; возвращает ID новой строки
    pub fn add_item(&self) -> String {
        let mut id = String::new();
        self.state.update(|s| id = s.data.add_blank_item());
        id
    }

    pub fn remove_item(&self, item_id: &str) -> bool {
        let mut removed = false;
        self.state.update(|s| {
            let before = s.data.items.len();
            s.data.items.retain(|i| i.id != item_id);
            removed = s.data.items.len() != before;
        });
        removed
    }

    /// Ввод в поле позиции; итоговая цена пересчитывается сразу
    pub fn set_item_field(&self, item_id: &str, field: PriceField, input: &str) -> bool {
        let mut found = false;
        self.state.update(|s| {
            let Some(item) = s.data.item_mut(item_id) else {
                return;
            };
            found = true;
            match field {
                PriceField::ItemCode => item.item_code = input.to_string(),
                PriceField::ItemName => item.item_name = input.to_string(),
                PriceField::BasePrice => item.set_base_price(parse_number_or_zero(input)),
                PriceField::DiscountPercent => item.set_discount_percent(parse_number_or_zero(input)),
            }
        });
        found
    }

    /// Позиции, подходящие под строку поиска (по коду и названию)
    pub fn search_items(&self, query: &str) -> Vec<PriceBookItem> {
        self.state.with(|s| {
            s.data
                .items
                .iter()
                .filter(|i| matches_search(*i, query))
                .cloned()
                .collect()
        })
    }

    pub fn final_prices(&self) -> Vec<f64> {
        self.state
            .with(|s| s.data.items.iter().map(PriceBookItem::final_price).collect())
    }
}
