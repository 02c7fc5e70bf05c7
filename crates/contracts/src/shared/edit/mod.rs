//! Состояния редактируемых полей: снимок значения при фокусе и восстановление при уходе

mod date_shortcut;
mod field_edit;

pub use date_shortcut::{
    interpret_date_input, parse_date_shortcut, resolve_date_input, today_utc, DateInput,
    DATE_FORMAT,
};
pub use field_edit::{DateFieldEdit, FieldEdit, NumericFieldEdit};
