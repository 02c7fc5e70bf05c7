use super::date_shortcut::resolve_date_input;
use crate::shared::list::parse_number_or_zero;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Состояние поля ввода: `Committed` -> фокус -> `Editing` -> уход фокуса -> `Committed`.
///
/// При фокусе текущее значение запоминается, а поле показывается пустым.
/// Что станет значением после ухода фокуса, решает функция фиксации
/// (см. [`FieldEdit::blur_with`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FieldEdit<T> {
    Committed { value: T },
    Editing { snapshot: T, input: String },
}

/// Числовое поле строки (количество, скидка)
pub type NumericFieldEdit = FieldEdit<f64>;

/// Поле даты в шапке документа
pub type DateFieldEdit = FieldEdit<String>;

impl<T: Clone> FieldEdit<T> {
    pub fn new(value: T) -> Self {
        FieldEdit::Committed { value }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FieldEdit::Editing { .. })
    }

    /// Зафиксированное значение; во время редактирования - снимок
    pub fn value(&self) -> &T {
        match self {
            FieldEdit::Committed { value } => value,
            FieldEdit::Editing { snapshot, .. } => snapshot,
        }
    }

    /// Фокус: запомнить значение, очистить ввод. Повторный фокус ничего не меняет.
    pub fn focus(&mut self) {
        if let FieldEdit::Committed { value } = self {
            *self = FieldEdit::Editing {
                snapshot: value.clone(),
                input: String::new(),
            };
        }
    }

    /// Набор текста (без фокуса поле сначала переходит в редактирование)
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.focus();
        if let FieldEdit::Editing { input, .. } = self {
            *input = text.into();
        }
    }

    /// Значение задано снаружи (например, подставлено из справочника)
    pub fn set_value(&mut self, value: T) {
        *self = FieldEdit::Committed { value };
    }

    /// Отмена редактирования: вернуть снимок
    pub fn cancel(&mut self) {
        if let FieldEdit::Editing { snapshot, .. } = self {
            *self = FieldEdit::Committed {
                value: snapshot.clone(),
            };
        }
    }

    /// Уход фокуса: `commit(input, snapshot)` даёт новое значение
    pub fn blur_with<F>(&mut self, commit: F) -> &T
    where
        F: FnOnce(&str, &T) -> T,
    {
        if let FieldEdit::Editing { snapshot, input } = self {
            let value = commit(input, snapshot);
            *self = FieldEdit::Committed { value };
        }
        self.value()
    }
}

impl FieldEdit<f64> {
    /// Пустой или нулевой ввод возвращает ненулевой снимок, а не фиксирует 0
    pub fn blur(&mut self) -> f64 {
        *self.blur_with(|input, snapshot| {
            let parsed = parse_number_or_zero(input);
            if parsed == 0.0 && *snapshot != 0.0 {
                *snapshot
            } else {
                parsed
            }
        })
    }

    /// Текст в поле ввода
    pub fn display(&self) -> String {
        match self {
            FieldEdit::Committed { value } => value.to_string(),
            FieldEdit::Editing { input, .. } => input.clone(),
        }
    }
}

impl FieldEdit<String> {
    /// Уход фокуса с поля даты: быстрый ввод, литерал или восстановление снимка
    pub fn blur_date(&mut self, today: NaiveDate, format: &str) -> &str {
        self.blur_with(|input, previous| resolve_date_input(input, previous, today, format))
    }

    pub fn display(&self) -> &str {
        match self {
            FieldEdit::Committed { value } => value,
            FieldEdit::Editing { input, .. } => input,
        }
    }
}
