use std::fmt;

/// Значение поля записи, как его видит движок фильтрации
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Текстовое представление в нижнем регистре (для текстовых операторов)
    pub fn to_filter_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Числовое значение; текст разбирается по префиксу, как в поле ввода
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_nan() => None,
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => parse_number(s),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            // -0 показывается как 0
            FieldValue::Number(n) if *n == 0.0 => f.write_str("0"),
            FieldValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

/// Разбор числа по самому длинному допустимому префиксу.
///
/// Ведущие пробелы пропускаются, хвост после числа игнорируется:
/// `"12abc"` -> `12.0`, `"abc"` -> `None`, `""` -> `None`.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits + frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Числовое поле ввода: всё, что не разобралось, считается нулём
pub fn parse_number_or_zero(input: &str) -> f64 {
    parse_number(input).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_plain() {
        assert_eq!(parse_number("42"), Some(42.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("  7"), Some(7.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_number_prefix() {
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("2024-01-15"), Some(2024.0));
        assert_eq!(parse_number("5e"), Some(5.0));
    }

    #[test]
    fn test_parse_number_failures() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number_or_zero("n/a"), 0.0);
    }

    #[test]
    fn test_filter_text_of_numbers() {
        assert_eq!(FieldValue::Number(1200.0).to_filter_text(), "1200");
        assert_eq!(FieldValue::Number(4987.5).to_filter_text(), "4987.5");
        assert_eq!(FieldValue::Text("LAPTOP001").to_filter_text(), "laptop001");
    }

    #[test]
    fn test_negative_zero_shown_as_zero() {
        use crate::shared::calc::line_total;
        use crate::shared::list::{matches_predicate, FieldPredicate, FilterOperator, UnknownOperatorPolicy};

        let total = line_total(0.0, 100.0, 150.0);
        assert!(total.is_sign_negative());
        assert_eq!(FieldValue::Number(total).to_string(), "0");

        let equals_zero = FieldPredicate::new(FilterOperator::Equals, "0");
        assert!(matches_predicate(&FieldValue::Number(total), &equals_zero, UnknownOperatorPolicy::PassThrough));
        assert_eq!(FieldValue::Number(-2.5).to_string(), "-2.5");
    }
}
