use super::{FieldValue, ListRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Текущая сортировка списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: String::new(),
            ascending: true,
        }
    }
}

impl SortState {
    pub fn new(field: impl Into<String>, ascending: bool) -> Self {
        Self {
            field: field.into(),
            ascending,
        }
    }

    /// Клик по заголовку: та же колонка меняет направление, новая - по возрастанию
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }

    pub fn is_active(&self) -> bool {
        !self.field.is_empty()
    }

    /// Индикатор сортировки для заголовка колонки
    pub fn indicator(&self, field: &str) -> &'static str {
        if self.field == field {
            if self.ascending {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Сравнение значений колонки: числа численно, текст без учёта регистра,
/// число раньше текста, отсутствующее значение - в конце
pub fn compare_values(a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(FieldValue::Number(x)), Some(FieldValue::Number(y))) => {
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Number(_)), Some(FieldValue::Text(_))) => Ordering::Less,
        (Some(FieldValue::Text(_)), Some(FieldValue::Number(_))) => Ordering::Greater,
        (Some(FieldValue::Text(x)), Some(FieldValue::Text(y))) => {
            x.to_lowercase().cmp(&y.to_lowercase())
        }
    }
}

fn compare_records<T: ListRecord>(a: &T, b: &T, sort: &SortState) -> Ordering {
    let cmp = compare_values(a.field_value(&sort.field), b.field_value(&sort.field));
    if sort.ascending {
        cmp
    } else {
        cmp.reverse()
    }
}

/// Сортирует записи на месте (устойчиво); пустое поле сортировки - без изменений
pub fn sort_list<T: ListRecord>(items: &mut [T], sort: &SortState) {
    if !sort.is_active() {
        return;
    }
    items.sort_by(|a, b| compare_records(a, b, sort));
}

/// Сортирует отфильтрованное представление
pub fn sort_view<T: ListRecord>(items: &mut [&T], sort: &SortState) {
    if !sort.is_active() {
        return;
    }
    items.sort_by(|a, b| compare_records(*a, *b, sort));
}
