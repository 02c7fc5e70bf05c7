use serde::{Deserialize, Serialize};

/// Сумма строки: `quantity * unit_price * (1 - discount_percent / 100)`.
///
/// Скидка не ограничивается диапазоном [0, 100]: отрицательная даёт наценку,
/// больше 100 - отрицательную сумму.
pub fn line_total(quantity: f64, unit_price: f64, discount_percent: f64) -> f64 {
    quantity * unit_price * (1.0 - discount_percent / 100.0)
}

/// Итоги документа; всегда считаются заново из текущих строк
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub total: f64,
}

impl OrderTotals {
    pub fn from_line_totals<I>(line_totals: I, tax_rate: f64, shipping_amount: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let subtotal: f64 = line_totals.into_iter().sum();
        let tax_amount = subtotal * tax_rate;
        Self {
            subtotal,
            tax_amount,
            shipping_amount,
            total: subtotal + tax_amount + shipping_amount,
        }
    }

    pub fn from_lines<L: super::EditableLine>(lines: &[L], tax_rate: f64, shipping_amount: f64) -> Self {
        Self::from_line_totals(
            lines.iter().map(|l| l.base().line_total()),
            tax_rate,
            shipping_amount,
        )
    }
}
