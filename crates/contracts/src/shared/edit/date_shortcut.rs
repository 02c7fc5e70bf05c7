//! Быстрый ввод дат: `+3` - через три дня от сегодня, `-2` - два дня назад

use chrono::{Days, NaiveDate, Utc};

/// Формат дат в полях шапки документа
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Интерпретация содержимого поля даты
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// Пустой ввод (или только пробелы)
    Empty,
    /// Смещение в днях, развёрнутое в дату
    Shortcut(NaiveDate),
    /// Любой другой текст, принимается как есть
    Literal(String),
}

/// Сегодняшняя дата по UTC
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Разбор ввода вида `^[+-]\d+$` в дату относительно `today`
pub fn parse_date_shortcut(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (digits, forward) = if let Some(rest) = input.strip_prefix('+') {
        (rest, true)
    } else if let Some(rest) = input.strip_prefix('-') {
        (rest, false)
    } else {
        return None;
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let days = Days::new(digits.parse::<u64>().ok()?);
    if forward {
        today.checked_add_days(days)
    } else {
        today.checked_sub_days(days)
    }
}

pub fn interpret_date_input(input: &str, today: NaiveDate) -> DateInput {
    if input.trim().is_empty() {
        return DateInput::Empty;
    }
    match parse_date_shortcut(input, today) {
        Some(date) => DateInput::Shortcut(date),
        None => DateInput::Literal(input.to_string()),
    }
}

/// Значение поля даты после ухода фокуса: пустой ввод возвращает `previous`
pub fn resolve_date_input(input: &str, previous: &str, today: NaiveDate, format: &str) -> String {
    match interpret_date_input(input, today) {
        DateInput::Empty => previous.to_string(),
        DateInput::Shortcut(date) => date.format(format).to_string(),
        DateInput::Literal(text) => text,
    }
}
