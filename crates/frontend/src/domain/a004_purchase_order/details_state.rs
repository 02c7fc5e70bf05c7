use crate::shared::data::mock::{self, ITEM_MASTER, VENDOR_MASTER};
use crate::shared::line_editor::LineEditorController;
use chrono::NaiveDate;
use contracts::domain::a004_purchase_order::{PurchaseOrderHeader, PurchaseOrderLine};
use contracts::shared::calc::{LineChange, LineField, OrderTotals};
use contracts::shared::config::EngineConfig;
use contracts::shared::edit::DateFieldEdit;
use leptos::prelude::*;

/// Поле даты шапки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderDate {
    Order,
    Expected,
}

#[derive(Clone, Debug)]
pub struct PurchaseOrderHeaderState {
    pub header: PurchaseOrderHeader,
    pub order_date: DateFieldEdit,
    pub expected_date: DateFieldEdit,
    pub is_editing: bool,
}

impl PurchaseOrderHeaderState {
    fn new(header: PurchaseOrderHeader, is_editing: bool) -> Self {
        Self {
            order_date: DateFieldEdit::new(header.order_date.clone()),
            expected_date: DateFieldEdit::new(header.expected_date.clone()),
            header,
            is_editing,
        }
    }

    fn date_mut(&mut self, which: HeaderDate) -> &mut DateFieldEdit {
        match which {
            HeaderDate::Order => &mut self.order_date,
            HeaderDate::Expected => &mut self.expected_date,
        }
    }
}

/// Карточка заказа поставщику: шапка и табличная часть
#[derive(Clone)]
pub struct PurchaseOrderDetails {
    pub header: RwSignal<PurchaseOrderHeaderState>,
    pub lines: LineEditorController<PurchaseOrderLine>,
    date_format: String,
}

impl PurchaseOrderDetails {
    /// "new" - пустой черновик в режиме редактирования
    pub fn load(order_id: &str, config: &EngineConfig, today: NaiveDate) -> Self {
        let draft = || PurchaseOrderHeader::new_draft(today, &config.dates.format);
        let (header, lines, is_editing) = if order_id == "new" {
            (draft(), Vec::new(), true)
        } else {
            match mock::purchase_order_header(order_id) {
                Some(header) => (header, mock::purchase_order_lines(), false),
                None => {
                    log::warn!("Purchase order {} not found, opening a draft", order_id);
                    (draft(), Vec::new(), true)
                }
            }
        };

        Self {
            header: RwSignal::new(PurchaseOrderHeaderState::new(header, is_editing)),
            lines: LineEditorController::new(lines, config),
            date_format: config.dates.format.clone(),
        }
    }

    pub fn set_editing(&self, is_editing: bool) {
        self.header.update(|s| s.is_editing = is_editing);
    }

    /// Ввод кода поставщика с подстановкой из справочника
    pub fn set_vendor_code(&self, code: &str) -> LineChange {
        let mut change = LineChange::Cleared;
        self.header
            .update(|s| change = s.header.resolve_vendor(code, &*VENDOR_MASTER));
        change
    }

    pub fn focus_date(&self, which: HeaderDate) {
        self.header.update(|s| s.date_mut(which).focus());
    }

    pub fn input_date(&self, which: HeaderDate, text: &str) {
        self.header.update(|s| s.date_mut(which).set_input(text));
    }

    /// Уход фокуса с даты: "+N"/"-N" от сегодняшней даты, пустой ввод - прежнее значение
    pub fn blur_date(&self, which: HeaderDate, today: NaiveDate) -> String {
        let mut value = String::new();
        self.header.update(|s| {
            value = s.date_mut(which).blur_date(today, &self.date_format).to_string();
            match which {
                HeaderDate::Order => s.header.order_date = value.clone(),
                HeaderDate::Expected => s.header.expected_date = value.clone(),
            }
        });
        value
    }

    /// Ввод в поле строки с подстановкой из справочника номенклатуры
    pub fn edit_line(&self, line_id: &str, field: LineField, input: &str) -> Option<LineChange> {
        self.lines.edit(line_id, field, input, &*ITEM_MASTER)
    }

    pub fn blur_line_field(&self, line_id: &str, field: LineField) -> Option<LineChange> {
        self.lines.blur(line_id, field, &*ITEM_MASTER)
    }

    pub fn delete_selected_lines(&self) -> usize {
        self.lines.delete_selected()
    }

    /// Приёмка строки: статус строки пересчитывается по принятому количеству
    pub fn receive_line(&self, line_id: &str, received_qty: f64) -> bool {
        self.lines
            .update_line(line_id, |line| line.set_received_qty(received_qty))
    }

    /// Итоги документа по текущим строкам
    pub fn totals(&self) -> OrderTotals {
        self.lines
            .with_lines(|lines, tax_rate| PurchaseOrderHeader::totals(lines, tax_rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::OrderLineStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_load_existing_order() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("PO-001", &EngineConfig::default(), today());

        let state = details.header.get();
        assert!(!state.is_editing);
        assert_eq!(state.header.vendor_name, "Tech Supplies Inc");
        // 12000 + 4987.5 + 875 + 1602 + 750
        let totals = details.totals();
        assert!((totals.subtotal - 20214.5).abs() < 1e-9);
        assert!((totals.tax_amount - 2021.45).abs() < 1e-9);
    }

    #[test]
    fn test_new_order_is_empty_draft() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("new", &EngineConfig::default(), today());
        let state = details.header.get();
        assert!(state.is_editing);
        assert_eq!(state.header.order_date, "2024-01-15");
        assert_eq!(details.totals().total, 0.0);
        assert!(details.lines.lines().is_empty());
    }

    #[test]
    fn test_vendor_lookup() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("new", &EngineConfig::default(), today());

        assert_eq!(details.set_vendor_code("vend004"), LineChange::Resolved);
        assert_eq!(details.header.get().header.vendor, "IPC");
        assert_eq!(details.set_vendor_code("VEND0"), LineChange::Cleared);
        let header = details.header.get().header;
        assert_eq!(header.vendor_code, "VEND0");
        assert_eq!(header.vendor_address, "");
    }

    #[test]
    fn test_date_shortcuts() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("PO-001", &EngineConfig::default(), today());

        details.focus_date(HeaderDate::Expected);
        details.input_date(HeaderDate::Expected, "+3");
        assert_eq!(details.blur_date(HeaderDate::Expected, today()), "2024-01-18");

        details.focus_date(HeaderDate::Order);
        assert_eq!(details.blur_date(HeaderDate::Order, today()), "2024-01-15");

        let header = details.header.get().header;
        assert_eq!(header.expected_date, "2024-01-18");
    }

    #[test]
    fn test_line_edits_update_totals() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("PO-001", &EngineConfig::default(), today());

        details.edit_line("5", LineField::Quantity, "0");
        assert!((details.totals().subtotal - 19464.5).abs() < 1e-9);

        details.lines.select_row("1", true);
        assert_eq!(details.delete_selected_lines(), 1);
        assert!((details.totals().subtotal - 7464.5).abs() < 1e-9);
    }

    #[test]
    fn test_totals_follow_direct_line_editor_changes() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("PO-001", &EngineConfig::default(), today());

        let id = details.lines.add_line();
        details.lines.edit(&id, LineField::ItemCode, "laptop001", &*ITEM_MASTER);
        details.lines.edit(&id, LineField::Quantity, "1", &*ITEM_MASTER);

        let totals = details.totals();
        assert_eq!(totals, details.lines.totals());
        assert!((totals.subtotal - 21414.5).abs() < 1e-9);

        details.lines.select_all(true);
        details.lines.delete_selected();
        assert_eq!(details.totals().total, 0.0);
    }

    #[test]
    fn test_receive_line_status() {
        let owner = Owner::new();
        owner.set();
        let details = PurchaseOrderDetails::load("PO-001", &EngineConfig::default(), today());

        assert!(details.receive_line("1", 10.0));
        assert_eq!(details.lines.lines()[0].status, OrderLineStatus::Received);

        details.edit_line("1", LineField::Quantity, "12");
        assert_eq!(details.lines.lines()[0].status, OrderLineStatus::Partial);
        assert!(!details.receive_line("99", 1.0));
    }
}
