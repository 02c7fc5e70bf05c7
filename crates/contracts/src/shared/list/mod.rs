//! Универсальный движок списочных форм: фильтры по колонкам, быстрый поиск,
//! сортировка и набор выбранных строк.
//!
//! Все функции чистые: состояние (записи, фильтры, выбор) хранит вызывающий слой.

mod error;
mod field_value;
mod filter;
mod record;
mod search;
mod selection;
mod sort;

pub use error::ListError;
pub use field_value::{parse_number, parse_number_or_zero, FieldValue};
pub use filter::{
    filter_list, filter_view, matches_predicate, FieldPredicate, FilterOperator, FilterOptions,
    FilterSet, StatusFilter, UnknownOperatorPolicy,
};
pub use record::{next_numeric_id, ListRecord};
pub use search::matches_search;
pub use selection::{delete_selected, CheckboxState, SelectionSet};
pub use sort::{compare_values, sort_list, sort_view, SortState};

#[cfg(test)]
pub(crate) mod test_support;
