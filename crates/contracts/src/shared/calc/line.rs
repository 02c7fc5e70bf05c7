use super::totals::line_total;
use crate::domain::a001_item::ItemMasterEntry;
use crate::shared::list::{next_numeric_id, parse_number_or_zero, FieldValue};
use crate::shared::lookup::{normalize_code, Lookup, Resolution};
use serde::{Deserialize, Serialize};

/// Редактируемое поле строки документа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineField {
    ItemCode,
    Description,
    Quantity,
    UnitPrice,
    Discount,
}

impl LineField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineField::ItemCode => "itemCode",
            LineField::Description => "description",
            LineField::Quantity => "quantity",
            LineField::UnitPrice => "unitPrice",
            LineField::Discount => "discount",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "itemCode" => Some(LineField::ItemCode),
            "description" => Some(LineField::Description),
            "quantity" => Some(LineField::Quantity),
            "unitPrice" => Some(LineField::UnitPrice),
            "discount" => Some(LineField::Discount),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            LineField::Quantity | LineField::UnitPrice | LineField::Discount
        )
    }
}

/// Изменение одного поля строки
#[derive(Debug, Clone, PartialEq)]
pub enum LineEdit {
    ItemCode(String),
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
    Discount(f64),
}

impl LineEdit {
    /// Изменение из текста поля ввода; нечисловой текст в числовом поле даёт 0
    pub fn from_input(field: LineField, input: &str) -> Self {
        match field {
            LineField::ItemCode => LineEdit::ItemCode(input.to_string()),
            LineField::Description => LineEdit::Description(input.to_string()),
            LineField::Quantity => LineEdit::Quantity(parse_number_or_zero(input)),
            LineField::UnitPrice => LineEdit::UnitPrice(parse_number_or_zero(input)),
            LineField::Discount => LineEdit::Discount(parse_number_or_zero(input)),
        }
    }

    /// Изменение числового поля готовым значением; для текстовых полей `None`
    pub fn with_number(field: LineField, value: f64) -> Option<Self> {
        match field {
            LineField::Quantity => Some(LineEdit::Quantity(value)),
            LineField::UnitPrice => Some(LineEdit::UnitPrice(value)),
            LineField::Discount => Some(LineEdit::Discount(value)),
            LineField::ItemCode | LineField::Description => None,
        }
    }

    pub fn field(&self) -> LineField {
        match self {
            LineEdit::ItemCode(_) => LineField::ItemCode,
            LineEdit::Description(_) => LineField::Description,
            LineEdit::Quantity(_) => LineField::Quantity,
            LineEdit::UnitPrice(_) => LineField::UnitPrice,
            LineEdit::Discount(_) => LineField::Discount,
        }
    }
}

/// Что произошло со строкой после изменения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// Изменено текстовое поле, суммы не затронуты
    Updated,
    /// Изменено числовое поле, сумма строки пересчитана
    Recomputed,
    /// Код найден в справочнике, зависимые поля заполнены
    Resolved,
    /// Код не найден, зависимые поля очищены
    Cleared,
}

/// Общая часть строки заказа (закупка и продажа)
///
/// Сумма строки хранится, но не задаётся снаружи: любое изменение
/// количества, цены или скидки пересчитывает её.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "OrderLineInput")]
pub struct OrderLineBase {
    pub id: String,
    item_code: String,
    description: String,
    quantity: f64,
    unit_price: f64,
    #[serde(rename = "discount")]
    discount_percent: f64,
    line_total: f64,
}

// Входной формат без суммы строки: при загрузке сумма пересчитывается
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderLineInput {
    id: String,
    #[serde(default)]
    item_code: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    quantity: f64,
    #[serde(default)]
    unit_price: f64,
    #[serde(default)]
    discount: f64,
}

impl From<OrderLineInput> for OrderLineBase {
    fn from(input: OrderLineInput) -> Self {
        OrderLineBase::from_values(
            input.id,
            input.item_code,
            input.description,
            input.quantity,
            input.unit_price,
            input.discount,
        )
    }
}

impl OrderLineBase {
    /// Пустая строка (кнопка «Добавить»)
    pub fn new(id: impl Into<String>) -> Self {
        Self::from_values(id, "", "", 0.0, 0.0, 0.0)
    }

    pub fn from_values(
        id: impl Into<String>,
        item_code: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
        discount_percent: f64,
    ) -> Self {
        Self {
            id: id.into(),
            item_code: item_code.into(),
            description: description.into(),
            quantity,
            unit_price,
            discount_percent,
            line_total: line_total(quantity, unit_price, discount_percent),
        }
    }

    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    pub fn line_total(&self) -> f64 {
        self.line_total
    }

    /// Текущее значение числового поля
    pub fn number(&self, field: LineField) -> Option<f64> {
        match field {
            LineField::Quantity => Some(self.quantity),
            LineField::UnitPrice => Some(self.unit_price),
            LineField::Discount => Some(self.discount_percent),
            LineField::ItemCode | LineField::Description => None,
        }
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_unit_price(&mut self, unit_price: f64) {
        self.unit_price = unit_price;
        self.recompute();
    }

    pub fn set_discount_percent(&mut self, discount_percent: f64) {
        self.discount_percent = discount_percent;
        self.recompute();
    }

    /// Значение поля строки для фильтра и сортировки табличной части
    pub fn field_value(&self, field: &str) -> Option<FieldValue<'_>> {
        match field {
            "id" => Some(FieldValue::from(&self.id)),
            "itemCode" => Some(FieldValue::from(&self.item_code)),
            "description" => Some(FieldValue::from(&self.description)),
            "quantity" => Some(FieldValue::from(self.quantity)),
            "unitPrice" => Some(FieldValue::from(self.unit_price)),
            "discount" => Some(FieldValue::from(self.discount_percent)),
            "lineTotal" => Some(FieldValue::from(self.line_total)),
            _ => None,
        }
    }

    fn recompute(&mut self) {
        self.line_total = line_total(self.quantity, self.unit_price, self.discount_percent);
    }

    /// Ввод кода номенклатуры: поиск в справочнике по коду в верхнем регистре.
    ///
    /// Найден - подставляются описание и цена, сумма пересчитывается.
    /// Не найден - описание и цена очищаются, устаревшие значения не остаются.
    pub fn resolve_item_code<L>(&mut self, code: &str, items: &L) -> LineChange
    where
        L: Lookup<Entry = ItemMasterEntry>,
    {
        match items.resolve(&normalize_code(code)) {
            Resolution::Found(entry) => {
                self.item_code = entry.item_code;
                self.description = entry.description;
                self.unit_price = entry.unit_price;
                self.recompute();
                LineChange::Resolved
            }
            Resolution::NotFound => {
                self.item_code = code.to_string();
                self.description.clear();
                self.unit_price = 0.0;
                self.recompute();
                LineChange::Cleared
            }
        }
    }

    pub fn apply<L>(&mut self, edit: LineEdit, items: &L) -> LineChange
    where
        L: Lookup<Entry = ItemMasterEntry>,
    {
        match edit {
            LineEdit::ItemCode(code) => self.resolve_item_code(&code, items),
            LineEdit::Description(text) => {
                self.set_description(text);
                LineChange::Updated
            }
            LineEdit::Quantity(v) => {
                self.set_quantity(v);
                LineChange::Recomputed
            }
            LineEdit::UnitPrice(v) => {
                self.set_unit_price(v);
                LineChange::Recomputed
            }
            LineEdit::Discount(v) => {
                self.set_discount_percent(v);
                LineChange::Recomputed
            }
        }
    }
}

/// Строка документа, редактируемая в табличной части
pub trait EditableLine {
    fn base(&self) -> &OrderLineBase;

    fn base_mut(&mut self) -> &mut OrderLineBase;

    /// Новая пустая строка с заданным ID
    fn blank(id: String) -> Self
    where
        Self: Sized;

    /// Пересчёт полей строки, зависящих от базовых (например, статуса приёмки)
    fn sync_derived(&mut self) {}
}

/// Применить изменение к строке с указанным ID; `None`, если строки нет
pub fn apply_line_edit<T, L>(
    lines: &mut [T],
    line_id: &str,
    edit: LineEdit,
    items: &L,
) -> Option<LineChange>
where
    T: EditableLine,
    L: Lookup<Entry = ItemMasterEntry>,
{
    let line = lines.iter_mut().find(|l| l.base().id == line_id)?;
    let change = line.base_mut().apply(edit, items);
    line.sync_derived();
    Some(change)
}

/// ID для новой строки: на единицу больше максимального числового ID
pub fn new_line_id<T: EditableLine>(lines: &[T]) -> String {
    next_numeric_id(lines.iter().map(|l| l.base().id.as_str()))
}

pub fn blank_line<T: EditableLine>(lines: &[T]) -> T {
    T::blank(new_line_id(lines))
}
