use crate::shared::data::mock::{self, ITEM_MASTER};
use crate::shared::line_editor::LineEditorController;
use chrono::NaiveDate;
use contracts::domain::a005_sales_order::{SalesOrderHeader, SalesOrderLine};
use contracts::shared::calc::{LineChange, LineField, OrderTotals};
use contracts::shared::config::EngineConfig;
use contracts::shared::edit::DateFieldEdit;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SalesOrderHeaderState {
    pub header: SalesOrderHeader,
    pub delivery_date: DateFieldEdit,
    pub is_editing: bool,
}

/// Карточка заказа клиента
#[derive(Clone)]
pub struct SalesOrderDetails {
    pub header: RwSignal<SalesOrderHeaderState>,
    pub lines: LineEditorController<SalesOrderLine>,
    date_format: String,
}

impl SalesOrderDetails {
    /// "new" - пустой черновик в режиме редактирования
    pub fn load(order_id: &str, config: &EngineConfig, today: NaiveDate) -> Self {
        let draft = || {
            SalesOrderHeader::new_draft(
                today,
                &config.dates.format,
                config.orders.default_shipping_amount,
            )
        };
        let (header, lines, is_editing) = if order_id == "new" {
            (draft(), Vec::new(), true)
        } else {
            match mock::sales_order_header(order_id) {
                Some(header) => (header, mock::sales_order_lines(), false),
                None => {
                    log::warn!("Sales order {} not found, opening a draft", order_id);
                    (draft(), Vec::new(), true)
                }
            }
        };

        Self {
            lines: LineEditorController::new(lines, config),
            header: RwSignal::new(SalesOrderHeaderState {
                delivery_date: DateFieldEdit::new(header.delivery_date.clone()),
                header,
                is_editing,
            }),
            date_format: config.dates.format.clone(),
        }
    }

    pub fn set_shipping_amount(&self, amount: f64) -> OrderTotals {
        self.header.update(|s| s.header.shipping_amount = amount);
        self.totals()
    }

    pub fn focus_delivery_date(&self) {
        self.header.update(|s| s.delivery_date.focus());
    }

    pub fn input_delivery_date(&self, text: &str) {
        self.header.update(|s| s.delivery_date.set_input(text));
    }

    pub fn blur_delivery_date(&self, today: NaiveDate) -> String {
        let mut value = String::new();
        self.header.update(|s| {
            value = s
                .delivery_date
                .blur_date(today, &self.date_format)
                .to_string();
            s.header.delivery_date = value.clone();
        });
        value
    }

    pub fn edit_line(&self, line_id: &str, field: LineField, input: &str) -> Option<LineChange> {
        self.lines.edit(line_id, field, input, &*ITEM_MASTER)
    }

    pub fn blur_line_field(&self, line_id: &str, field: LineField) -> Option<LineChange> {
        self.lines.blur(line_id, field, &*ITEM_MASTER)
    }

    pub fn delete_selected_lines(&self) -> usize {
        self.lines.delete_selected()
    }

    /// Итоги: налог от суммы строк плюс доставка из шапки
    pub fn totals(&self) -> OrderTotals {
        self.header.with(|s| {
            self.lines
                .with_lines(|lines, tax_rate| s.header.totals(lines, tax_rate))
        })
    }
}
