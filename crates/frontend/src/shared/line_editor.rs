//! Табличная часть документа: строки, ввод в числовые поля, итоги

use super::list_state::ListState;
use contracts::domain::a001_item::ItemMasterEntry;
use contracts::shared::calc::{
    apply_line_edit, blank_line, EditableLine, LineChange, LineEdit, LineField, OrderTotals,
};
use contracts::shared::config::EngineConfig;
use contracts::shared::edit::NumericFieldEdit;
use contracts::shared::list::{CheckboxState, FilterOperator, ListRecord};
use contracts::shared::lookup::Lookup;
use leptos::prelude::*;
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct LineEditorState<L> {
    pub grid: ListState<L>,
    /// Числовые поля, находящиеся в редактировании: (ID строки, поле)
    pub edits: HashMap<(String, LineField), NumericFieldEdit>,
    pub tax_rate: f64,
}

impl<L: EditableLine + ListRecord> LineEditorState<L> {
    fn line(&self, line_id: &str) -> Option<&L> {
        self.grid.records.iter().find(|l| l.base().id == line_id)
    }

    /// Итоги без доставки
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::from_lines(&self.grid.records, self.tax_rate, 0.0)
    }
}

pub struct LineEditorController<L: Send + Sync + 'static> {
    pub state: RwSignal<LineEditorState<L>>,
}

impl<L: Send + Sync + 'static> Clone for LineEditorController<L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Send + Sync + 'static> Copy for LineEditorController<L> {}

impl<L> LineEditorController<L>
where
    L: EditableLine + ListRecord + Clone + Send + Sync + 'static,
{
    pub fn new(lines: Vec<L>, config: &EngineConfig) -> Self {
        Self {
            state: RwSignal::new(LineEditorState {
                grid: ListState::new(lines, config.filters.options()),
                edits: HashMap::new(),
                tax_rate: config.orders.tax_rate,
            }),
        }
    }

    pub fn lines(&self) -> Vec<L> {
        self.state.with(|s| s.grid.records.clone())
    }

    /// Чтение строк без копирования; второй аргумент - ставка налога
    pub fn with_lines<R>(&self, f: impl FnOnce(&[L], f64) -> R) -> R {
        self.state.with(|s| f(&s.grid.records, s.tax_rate))
    }

    /// Изменить строку вне полей ввода (например, принятое количество)
    pub fn update_line(&self, line_id: &str, f: impl FnOnce(&mut L)) -> bool {
        let mut found = false;
        self.state.update(|s| {
            if let Some(line) = s.grid.records.iter_mut().find(|l| l.base().id == line_id) {
                f(line);
                line.sync_derived();
                found = true;
            }
        });
        found
    }

    /// Строки после фильтров табличной части
    pub fn visible(&self) -> Vec<L> {
        self.state
            .with(|s| s.grid.visible().into_iter().cloned().collect())
    }

    /// «Добавить»: пустая строка с очередным ID
    pub fn add_line(&self) -> String {
        let mut id = String::new();
        self.state.update(|s| {
            let line: L = blank_line(&s.grid.records);
            id = line.base().id.clone();
            s.grid.records.push(line);
        });
        id
    }

    /// Ввод в поле строки без режима фокуса (код, описание, числа при наборе)
    pub fn edit<I>(&self, line_id: &str, field: LineField, input: &str, items: &I) -> Option<LineChange>
    where
        I: Lookup<Entry = ItemMasterEntry>,
    {
        let mut change = None;
        self.state.update(|s| {
            s.edits.remove(&(line_id.to_string(), field));
            change = apply_line_edit(
                &mut s.grid.records,
                line_id,
                LineEdit::from_input(field, input),
                items,
            );
        });
        change
    }

    /// Фокус на числовом поле: запомнить значение, очистить ввод
    pub fn focus(&self, line_id: &str, field: LineField) {
        self.state.update(|s| {
            let Some(value) = s.line(line_id).and_then(|l| l.base().number(field)) else {
                return;
            };
            s.edits
                .entry((line_id.to_string(), field))
                .or_insert_with(|| NumericFieldEdit::new(value))
                .focus();
        });
    }

    pub fn input(&self, line_id: &str, field: LineField, text: &str) {
        self.state.update(|s| {
            if let Some(edit) = s.edits.get_mut(&(line_id.to_string(), field)) {
                edit.set_input(text);
            }
        });
    }

    /// Уход фокуса: пустой или нулевой ввод возвращает прежнее значение
    pub fn blur<I>(&self, line_id: &str, field: LineField, items: &I) -> Option<LineChange>
    where
        I: Lookup<Entry = ItemMasterEntry>,
    {
        let mut change = None;
        self.state.update(|s| {
            let Some(mut edit) = s.edits.remove(&(line_id.to_string(), field)) else {
                return;
            };
            let value = edit.blur();
            if let Some(line_edit) = LineEdit::with_number(field, value) {
                change = apply_line_edit(&mut s.grid.records, line_id, line_edit, items);
            }
        });
        change
    }

    /// Текст поля ввода: ввод во время редактирования, иначе значение строки
    pub fn display(&self, line_id: &str, field: LineField) -> String {
        self.state.with(|s| {
            if let Some(edit) = s.edits.get(&(line_id.to_string(), field)) {
                return edit.display();
            }
            let Some(line) = s.line(line_id) else {
                return String::new();
            };
            let base = line.base();
            match field {
                LineField::ItemCode => base.item_code().to_string(),
                LineField::Description => base.description().to_string(),
                _ => base.number(field).map(|v| v.to_string()).unwrap_or_default(),
            }
        })
    }

    pub fn totals(&self) -> OrderTotals {
        self.state.with(|s| s.totals())
    }

    pub fn set_operand(&self, field: &str, value: &str) {
        self.state.update(|s| s.grid.filters.set_operand(field, value));
    }

    pub fn set_operator(&self, field: &str, operator: &str) {
        self.state
            .update(|s| s.grid.filters.set_operator(field, FilterOperator::from(operator)));
    }

    pub fn set_status(&self, status: &str) {
        self.state.update(|s| s.grid.filters.set_status(status));
    }

    pub fn select_all(&self, checked: bool) {
        self.state.update(|s| s.grid.select_all(checked));
    }

    pub fn select_row(&self, line_id: &str, checked: bool) {
        self.state
            .update(|s| s.grid.selection.select_row(line_id, checked));
    }

    pub fn header_state(&self) -> CheckboxState {
        self.state.with(|s| s.grid.header_state())
    }

    /// Удалить отмеченные строки вместе с их незавершённым вводом
    pub fn delete_selected(&self) -> usize {
        let mut removed = 0;
        self.state.update(|s| {
            removed = s.grid.delete_selected();
            let LineEditorState { grid, edits, .. } = s;
            edits.retain(|(id, _), _| grid.records.iter().any(|l| &l.base().id == id));
        });
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::mock::{self, ITEM_MASTER};
    use contracts::domain::a004_purchase_order::PurchaseOrderLine;

    fn editor() -> LineEditorController<PurchaseOrderLine> {
        LineEditorController::new(mock::purchase_order_lines(), &EngineConfig::default())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_focus_blur_restores_quantity() {
        let owner = Owner::new();
        owner.set();
        let lines = editor();

        lines.focus("3", LineField::Quantity);
        assert_eq!(lines.display("3", LineField::Quantity), "");
        assert_eq!(lines.blur("3", LineField::Quantity, &*ITEM_MASTER), Some(LineChange::Recomputed));
        assert_eq!(lines.display("3", LineField::Quantity), "25");
        assert!(approx(lines.lines()[2].base().line_total(), 875.0));
    }

    #[test]
    fn test_typed_value_recomputes_totals() {
        let owner = Owner::new();
        owner.set();
        let lines = editor();
        let before = lines.totals();

        lines.focus("1", LineField::Discount);
        lines.input("1", LineField::Discount, "10");
        lines.blur("1", LineField::Discount, &*ITEM_MASTER);

        let after = lines.totals();
        assert!(approx(before.subtotal - after.subtotal, 1200.0));
        assert!(approx(after.tax_amount, after.subtotal * 0.10));
        assert!(approx(after.total, after.subtotal + after.tax_amount));
    }

    #[test]
    fn test_add_line_and_resolve_code() {
        let owner = Owner::new();
        owner.set();
        let lines = editor();

        let id = lines.add_line();
        assert_eq!(id, "6");
        assert_eq!(
            lines.edit(&id, LineField::ItemCode, "cable005", &*ITEM_MASTER),
            Some(LineChange::Resolved)
        );
        lines.edit(&id, LineField::Quantity, "4", &*ITEM_MASTER);
        assert_eq!(lines.display(&id, LineField::UnitPrice), "25");
        assert!(approx(lines.lines()[5].base().line_total(), 100.0));

        assert_eq!(
            lines.edit(&id, LineField::ItemCode, "NOPE", &*ITEM_MASTER),
            Some(LineChange::Cleared)
        );
        assert_eq!(lines.display(&id, LineField::Description), "");
        assert_eq!(lines.lines()[5].base().line_total(), 0.0);
    }

    #[test]
    fn test_delete_selected_lines_drops_pending_edits() {
        let owner = Owner::new();
        owner.set();
        let lines = editor();

        lines.focus("2", LineField::Quantity);
        lines.select_row("2", true);
        lines.select_row("4", true);
        assert_eq!(lines.header_state(), CheckboxState::Indeterminate);
        assert_eq!(lines.delete_selected(), 2);
        assert_eq!(lines.lines().len(), 3);
        assert!(lines.state.with(|s| s.edits.is_empty()));
        // после удаления ID не переиспользуются
        assert_eq!(lines.add_line(), "6");
    }

    #[test]
    fn test_line_filters() {
        let owner = Owner::new();
        owner.set();
        let lines = editor();
        lines.set_operator("discount", "greaterThan");
        lines.set_operand("discount", "0");
        let ids: Vec<String> = lines.visible().into_iter().map(|l| l.base.id).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }
}
