//! Пересчёт производных полей строк документов и итогов

mod line;
mod totals;

pub use line::{
    apply_line_edit, blank_line, new_line_id, EditableLine, LineChange, LineEdit, LineField,
    OrderLineBase,
};
pub use totals::{line_total, OrderTotals};
