use super::{search::matches_search, FieldValue, ListError, ListRecord};
use crate::shared::metadata::{find_column, ColumnKind, ColumnMetadata};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Оператор фильтра колонки
///
/// Идентификаторы совпадают со значениями выпадающего списка в строке фильтров.
/// Нераспознанный идентификатор сохраняется как `Unknown`, чтобы поведение
/// определяла [`UnknownOperatorPolicy`], а не разбор.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    Contains,
    StartsWith,
    EndsWith,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Unknown(String),
}

impl FilterOperator {
    /// Операторы для текстовых колонок
    pub fn text_operators() -> [FilterOperator; 5] {
        [
            FilterOperator::Equals,
            FilterOperator::NotEquals,
            FilterOperator::Contains,
            FilterOperator::StartsWith,
            FilterOperator::EndsWith,
        ]
    }

    /// Операторы для числовых колонок
    pub fn numeric_operators() -> [FilterOperator; 6] {
        [
            FilterOperator::Equals,
            FilterOperator::NotEquals,
            FilterOperator::GreaterThan,
            FilterOperator::GreaterThanOrEqual,
            FilterOperator::LessThan,
            FilterOperator::LessThanOrEqual,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "notEquals",
            FilterOperator::Contains => "contains",
            FilterOperator::StartsWith => "startsWith",
            FilterOperator::EndsWith => "endsWith",
            FilterOperator::GreaterThan => "greaterThan",
            FilterOperator::GreaterThanOrEqual => "greaterThanOrEqual",
            FilterOperator::LessThan => "lessThan",
            FilterOperator::LessThanOrEqual => "lessThanOrEqual",
            FilterOperator::Unknown(name) => name,
        }
    }

    /// Подпись для выпадающего списка
    pub fn label(&self) -> &str {
        match self {
            FilterOperator::Equals => "Equals",
            FilterOperator::NotEquals => "Does Not Equal",
            FilterOperator::Contains => "Contains",
            FilterOperator::StartsWith => "Starts With",
            FilterOperator::EndsWith => "Ends With",
            FilterOperator::GreaterThan => "Greater Than",
            FilterOperator::GreaterThanOrEqual => "Greater Than or Equal",
            FilterOperator::LessThan => "Less Than",
            FilterOperator::LessThanOrEqual => "Less Than or Equal",
            FilterOperator::Unknown(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FilterOperator::Unknown(_))
    }

    /// Оператор сравнивает строки (equals/notEquals годятся для обоих видов колонок)
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            FilterOperator::Equals
                | FilterOperator::NotEquals
                | FilterOperator::Contains
                | FilterOperator::StartsWith
                | FilterOperator::EndsWith
        )
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FilterOperator::Equals
                | FilterOperator::NotEquals
                | FilterOperator::GreaterThan
                | FilterOperator::GreaterThanOrEqual
                | FilterOperator::LessThan
                | FilterOperator::LessThanOrEqual
        )
    }
}

impl From<&str> for FilterOperator {
    fn from(value: &str) -> Self {
        match value {
            "equals" => FilterOperator::Equals,
            "notEquals" => FilterOperator::NotEquals,
            "contains" => FilterOperator::Contains,
            "startsWith" => FilterOperator::StartsWith,
            "endsWith" => FilterOperator::EndsWith,
            "greaterThan" => FilterOperator::GreaterThan,
            "greaterThanOrEqual" => FilterOperator::GreaterThanOrEqual,
            "lessThan" => FilterOperator::LessThan,
            "lessThanOrEqual" => FilterOperator::LessThanOrEqual,
            other => FilterOperator::Unknown(other.to_string()),
        }
    }
}

impl From<String> for FilterOperator {
    fn from(value: String) -> Self {
        FilterOperator::from(value.as_str())
    }
}

impl From<FilterOperator> for String {
    fn from(value: FilterOperator) -> Self {
        match value {
            FilterOperator::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Строгий разбор: неизвестный идентификатор -> ошибка
impl FromStr for FilterOperator {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match FilterOperator::from(s) {
            FilterOperator::Unknown(name) => Err(ListError::UnknownOperator(name)),
            known => Ok(known),
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Что делать с предикатом, оператор которого не распознан
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownOperatorPolicy {
    /// Предикат не ограничивает выборку
    #[default]
    PassThrough,
    /// Предикат отсекает все строки
    Reject,
}

impl UnknownOperatorPolicy {
    fn passes(self) -> bool {
        matches!(self, UnknownOperatorPolicy::PassThrough)
    }
}

/// Условие фильтра одной колонки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub operator: FilterOperator,
    #[serde(default)]
    pub operand: String,
}

impl FieldPredicate {
    pub fn new(operator: FilterOperator, operand: impl Into<String>) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }

    /// Пустой операнд означает «без ограничения»
    pub fn is_active(&self) -> bool {
        !self.operand.is_empty()
    }
}

/// Фильтр по статусу: точное совпадение без учёта регистра или «all»
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub const ALL: &'static str = "all";

    pub fn matches(&self, status: Option<&str>) -> bool {
        match (self, status) {
            (StatusFilter::All, _) => true,
            // записи без поля статуса фильтр по статусу не ограничивает
            (StatusFilter::Only(_), None) => true,
            (StatusFilter::Only(wanted), Some(actual)) => actual.to_lowercase() == wanted.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == Self::ALL {
            StatusFilter::All
        } else {
            StatusFilter::Only(value)
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        StatusFilter::from(value.to_string())
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        match value {
            StatusFilter::All => StatusFilter::ALL.to_string(),
            StatusFilter::Only(status) => status,
        }
    }
}

/// Настройки фильтрации, приходящие из конфигурации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub unknown_operator: UnknownOperatorPolicy,
    /// Минимальная длина строки быстрого поиска (короче - поиск не применяется)
    #[serde(default)]
    pub search_min_len: usize,
}

/// Состояние строки фильтров одной формы списка
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    #[serde(default)]
    pub predicates: BTreeMap<String, FieldPredicate>,
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub options: FilterOptions,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Строка фильтров по умолчанию для набора колонок:
    /// пустые операнды, операторы по виду колонки, статус «all»
    pub fn for_columns(columns: &[ColumnMetadata]) -> Self {
        let predicates = columns
            .iter()
            .filter_map(|column| {
                column
                    .default_operator()
                    .map(|op| (column.name.to_string(), FieldPredicate::new(op, "")))
            })
            .collect();

        Self {
            predicates,
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn predicate(&self, field: &str) -> Option<&FieldPredicate> {
        self.predicates.get(field)
    }

    /// Обновить операнд; оператор остаётся прежним (или `contains` для новой колонки)
    pub fn set_operand(&mut self, field: &str, operand: impl Into<String>) {
        let operand = operand.into();
        self.predicates
            .entry(field.to_string())
            .and_modify(|p| p.operand = operand.clone())
            .or_insert_with(|| FieldPredicate::new(FilterOperator::Contains, operand));
    }

    /// Обновить оператор; операнд остаётся прежним
    pub fn set_operator(&mut self, field: &str, operator: impl Into<FilterOperator>) {
        let operator = operator.into();
        self.predicates
            .entry(field.to_string())
            .and_modify(|p| p.operator = operator.clone())
            .or_insert_with(|| FieldPredicate::new(operator, ""));
    }

    pub fn set_predicate(&mut self, field: &str, predicate: FieldPredicate) {
        self.predicates.insert(field.to_string(), predicate);
    }

    pub fn set_status(&mut self, status: impl Into<StatusFilter>) {
        self.status = status.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Сбросить все ограничения, сохранив выбранные операторы
    pub fn clear(&mut self) {
        for predicate in self.predicates.values_mut() {
            predicate.operand.clear();
        }
        self.status = StatusFilter::All;
        self.search.clear();
    }

    /// Есть ли хоть одно действующее ограничение
    pub fn is_active(&self) -> bool {
        self.predicates.values().any(FieldPredicate::is_active)
            || !self.status.is_all()
            || self.search_applies()
    }

    fn search_applies(&self) -> bool {
        let query = self.search.trim();
        !query.is_empty() && query.chars().count() >= self.options.search_min_len
    }

    /// Проходит ли запись все условия
    pub fn matches<T: ListRecord>(&self, record: &T) -> bool {
        let predicates_hold = self
            .predicates
            .iter()
            .filter(|(_, p)| p.is_active())
            .all(|(field, p)| match record.field_value(field) {
                Some(value) => matches_predicate(&value, p, self.options.unknown_operator),
                None => false,
            });

        predicates_hold
            && self.status.matches(record.status())
            && (!self.search_applies() || matches_search(record, self.search.trim()))
    }

    /// Строгая проверка набора фильтров против колонок формы
    pub fn validate(&self, columns: &[ColumnMetadata]) -> Result<(), ListError> {
        for (field, predicate) in &self.predicates {
            let column = find_column(columns, field).ok_or_else(|| ListError::UnknownField {
                field: field.clone(),
            })?;

            if let FilterOperator::Unknown(name) = &predicate.operator {
                log::warn!("Filter on '{}' uses unknown operator '{}'", field, name);
                return Err(ListError::UnknownOperator(name.clone()));
            }

            if !column.kind.accepts(&predicate.operator) {
                return Err(ListError::OperatorKindMismatch {
                    field: field.clone(),
                    operator: predicate.operator.to_string(),
                    kind: column.kind.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// Проверить одно значение против условия колонки
pub fn matches_predicate(
    value: &FieldValue<'_>,
    predicate: &FieldPredicate,
    policy: UnknownOperatorPolicy,
) -> bool {
    if predicate.operand.is_empty() {
        return true;
    }

    let val = value.to_filter_text();
    let filter = predicate.operand.to_lowercase();

    match &predicate.operator {
        FilterOperator::Equals => val == filter,
        FilterOperator::NotEquals => val != filter,
        FilterOperator::Contains => val.contains(&filter),
        FilterOperator::StartsWith => val.starts_with(&filter),
        FilterOperator::EndsWith => val.ends_with(&filter),
        FilterOperator::GreaterThan => compare_numbers(value, &filter, |a, b| a > b),
        FilterOperator::GreaterThanOrEqual => compare_numbers(value, &filter, |a, b| a >= b),
        FilterOperator::LessThan => compare_numbers(value, &filter, |a, b| a < b),
        FilterOperator::LessThanOrEqual => compare_numbers(value, &filter, |a, b| a <= b),
        FilterOperator::Unknown(name) => {
            log::debug!("Unknown filter operator '{}', policy {:?}", name, policy);
            policy.passes()
        }
    }
}

// Любая сторона не разобралась как число -> условие ложно
fn compare_numbers(value: &FieldValue<'_>, filter: &str, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (value.as_number(), super::parse_number(filter)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

/// Отфильтрованное представление: ссылки на подходящие записи в исходном порядке
pub fn filter_view<'a, T: ListRecord>(records: &'a [T], filters: &FilterSet) -> Vec<&'a T> {
    records.iter().filter(|r| filters.matches(*r)).collect()
}

/// Фильтрует список, забирая владение
pub fn filter_list<T: ListRecord>(items: Vec<T>, filters: &FilterSet) -> Vec<T> {
    if !filters.is_active() {
        return items;
    }
    items.into_iter().filter(|r| filters.matches(r)).collect()
}

impl ColumnKind {
    /// Применим ли оператор к колонке этого вида
    pub fn accepts(&self, operator: &FilterOperator) -> bool {
        match self {
            ColumnKind::Text | ColumnKind::Date => operator.is_text(),
            ColumnKind::Numeric => operator.is_numeric(),
            ColumnKind::Status => false,
        }
    }

    pub fn default_operator(&self) -> Option<FilterOperator> {
        match self {
            ColumnKind::Text | ColumnKind::Date => Some(FilterOperator::Contains),
            ColumnKind::Numeric => Some(FilterOperator::Equals),
            ColumnKind::Status => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::{row, rows, Row};
    use proptest::prelude::*;

    fn ids(view: &[&Row]) -> Vec<String> {
        view.iter().map(|r| r.id.clone()).collect()
    }

    fn with(field: &str, op: FilterOperator, operand: &str) -> FilterSet {
        let mut filters = FilterSet::new();
        filters.set_predicate(field, FieldPredicate::new(op, operand));
        filters
    }

    #[test]
    fn test_default_row_for_columns() {
        let filters = FilterSet::for_columns(Row::columns());
        assert_eq!(
            filters.predicate("name").map(|p| &p.operator),
            Some(&FilterOperator::Contains)
        );
        assert_eq!(
            filters.predicate("qty").map(|p| &p.operator),
            Some(&FilterOperator::Equals)
        );
        assert!(filters.predicate("status").is_none());
        assert!(filters.status.is_all());
        assert!(!filters.is_active());
    }

    #[test]
    fn test_text_operators_are_case_insensitive() {
        let rows = rows();
        let view = filter_view(&rows, &with("code", FilterOperator::StartsWith, "mo"));
        assert_eq!(ids(&view), vec!["2", "3"]);

        let view = filter_view(&rows, &with("name", FilterOperator::EndsWith, "USB-C"));
        assert_eq!(ids(&view), vec!["3"]);

        let view = filter_view(&rows, &with("code", FilterOperator::Equals, "cable005"));
        assert_eq!(ids(&view), vec!["4"]);

        let view = filter_view(&rows, &with("code", FilterOperator::NotEquals, "cable005"));
        assert_eq!(ids(&view), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_numeric_operators() {
        let rows = rows();
        let cases = [
            (FilterOperator::GreaterThan, "15", vec!["3", "4"]),
            (FilterOperator::GreaterThanOrEqual, "15", vec!["2", "3", "4"]),
            (FilterOperator::LessThan, "15", vec!["1"]),
            (FilterOperator::LessThanOrEqual, "15", vec!["1", "2"]),
            (FilterOperator::Equals, "25", vec!["3"]),
        ];
        for (op, operand, expected) in cases {
            let view = filter_view(&rows, &with("qty", op.clone(), operand));
            assert_eq!(ids(&view), expected, "operator {}", op);
        }
    }

    #[test]
    fn test_equals_on_numbers_compares_text() {
        // "10.0" как строка не равно "10"
        let rows = rows();
        let view = filter_view(&rows, &with("qty", FilterOperator::Equals, "10.0"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_non_numeric_operand_excludes_everything() {
        let rows = rows();
        for op in [
            FilterOperator::GreaterThan,
            FilterOperator::GreaterThanOrEqual,
            FilterOperator::LessThan,
            FilterOperator::LessThanOrEqual,
        ] {
            let view = filter_view(&rows, &with("qty", op, "abc"));
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_non_numeric_field_value_excludes_row() {
        let rows = vec![row("1", "A", "n/a", 1.0, "Active")];
        let view = filter_view(&rows, &with("name", FilterOperator::GreaterThan, "0"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_status_filter() {
        let rows = rows();
        let mut filters = FilterSet::new();
        filters.set_status("inactive");
        assert_eq!(ids(&filter_view(&rows, &filters)), vec!["3"]);

        filters.set_status(StatusFilter::ALL);
        assert_eq!(filter_view(&rows, &filters).len(), 4);

        // никакой семантики «содержит» у статуса нет
        filters.set_status("Act");
        assert!(filter_view(&rows, &filters).is_empty());
    }

    #[test]
    fn test_all_sentinel_is_exact() {
        assert!(StatusFilter::from("").is_all());
        assert!(StatusFilter::from("all").is_all());
        assert_eq!(StatusFilter::from("ALL"), StatusFilter::Only("ALL".to_string()));
    }

    #[test]
    fn test_unknown_operator_policy() {
        let rows = rows();
        let mut filters = with("name", FilterOperator::from("fuzzy"), "zzz");
        assert_eq!(filter_view(&rows, &filters).len(), 4);

        filters.options.unknown_operator = UnknownOperatorPolicy::Reject;
        assert!(filter_view(&rows, &filters).is_empty());
    }

    #[test]
    fn test_unknown_field_with_operand_excludes() {
        let rows = rows();
        let view = filter_view(&rows, &with("weight", FilterOperator::Contains, "1"));
        assert!(view.is_empty());
    }

    #[test]
    fn test_predicates_and_search_combine() {
        let rows = rows();
        let mut filters = with("qty", FilterOperator::GreaterThan, "12");
        filters.set_search("usb");
        assert_eq!(ids(&filter_view(&rows, &filters)), vec!["3", "4"]);

        filters.options.search_min_len = 4;
        // запрос короче порога не применяется
        assert_eq!(ids(&filter_view(&rows, &filters)), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_clear_keeps_operators() {
        let mut filters = FilterSet::for_columns(Row::columns());
        filters.set_operator("qty", "greaterThan");
        filters.set_operand("qty", "5");
        filters.set_status("Active");
        filters.set_search("x");
        filters.clear();

        assert!(!filters.is_active());
        assert_eq!(
            filters.predicate("qty").map(|p| &p.operator),
            Some(&FilterOperator::GreaterThan)
        );
    }

    #[test]
    fn test_filter_list_owned() {
        let kept = filter_list(rows(), &with("code", FilterOperator::Contains, "00"));
        assert_eq!(kept.len(), 4);
        let kept = filter_list(rows(), &with("code", FilterOperator::Contains, "mouse"));
        assert_eq!(kept, vec![rows()[2].clone()]);
    }

    #[test]
    fn test_validate() {
        let columns = Row::columns();
        assert_eq!(FilterSet::for_columns(columns).validate(columns), Ok(()));

        let filters = with("weight", FilterOperator::Equals, "");
        assert_eq!(
            filters.validate(columns),
            Err(ListError::UnknownField {
                field: "weight".into()
            })
        );

        let filters = with("name", FilterOperator::from("fuzzy"), "");
        assert_eq!(
            filters.validate(columns),
            Err(ListError::UnknownOperator("fuzzy".into()))
        );

        let filters = with("name", FilterOperator::GreaterThan, "");
        assert!(matches!(
            filters.validate(columns),
            Err(ListError::OperatorKindMismatch { kind: "text", .. })
        ));
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("lessThanOrEqual".parse::<FilterOperator>(), Ok(FilterOperator::LessThanOrEqual));
        assert_eq!(
            "between".parse::<FilterOperator>(),
            Err(ListError::UnknownOperator("between".into()))
        );
        assert_eq!(String::from(FilterOperator::NotEquals), "notEquals");
        assert_eq!(FilterOperator::StartsWith.label(), "Starts With");
    }

    #[test]
    fn test_filter_set_json_shape() {
        let mut filters = FilterSet::new();
        filters.set_operator("qty", FilterOperator::GreaterThanOrEqual);
        filters.set_operand("qty", "10");
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(json["predicates"]["qty"]["operator"], "greaterThanOrEqual");
        assert_eq!(json["status"], "all");

        let back: FilterSet = serde_json::from_value(json).unwrap();
        assert_eq!(back, filters);
    }

    fn arb_row() -> impl Strategy<Value = Row> {
        (
            "[0-9]{1,4}",
            "[A-Z]{3,8}[0-9]{3}",
            "[A-Za-z ]{0,20}",
            0u32..1000,
            prop_oneof![Just("Active"), Just("Inactive"), Just("Pending")],
        )
            .prop_map(|(id, code, name, qty, status)| row(&id, &code, &name, f64::from(qty), status))
    }

    fn arb_filters() -> impl Strategy<Value = FilterSet> {
        (
            "[a-z]{0,3}",
            prop_oneof![
                Just(FilterOperator::Contains),
                Just(FilterOperator::StartsWith),
                Just(FilterOperator::NotEquals)
            ],
            "[0-9]{0,3}",
            prop_oneof![
                Just(FilterOperator::GreaterThan),
                Just(FilterOperator::LessThanOrEqual),
                Just(FilterOperator::Equals)
            ],
            prop_oneof![Just("all"), Just("Active"), Just("pending")],
        )
            .prop_map(|(name, name_op, qty, qty_op, status)| {
                let mut filters = FilterSet::new();
                filters.set_predicate("name", FieldPredicate::new(name_op, name));
                filters.set_predicate("qty", FieldPredicate::new(qty_op, qty));
                filters.set_status(status);
                filters
            })
    }

    proptest! {
        #[test]
        fn prop_empty_operands_return_everything(rows in prop::collection::vec(arb_row(), 0..20)) {
            let filters = FilterSet::for_columns(Row::columns());
            let view = filter_view(&rows, &filters);
            prop_assert_eq!(view.len(), rows.len());
            prop_assert!(view.iter().zip(rows.iter()).all(|(a, b)| std::ptr::eq(*a, b)));
        }

        #[test]
        fn prop_contains_own_value(rows in prop::collection::vec(arb_row(), 1..20), pick in any::<prop::sample::Index>()) {
            let target = &rows[pick.index(rows.len())];
            let filters = with("name", FilterOperator::Contains, &target.name.to_uppercase());
            let view = filter_view(&rows, &filters);
            prop_assert!(view.iter().any(|r| std::ptr::eq(*r, target)));
        }

        #[test]
        fn prop_non_numeric_operand_excludes(rows in prop::collection::vec(arb_row(), 0..20), operand in "[a-z]{1,6}") {
            let view = filter_view(&rows, &with("qty", FilterOperator::GreaterThan, &operand));
            prop_assert!(view.is_empty());
        }

        #[test]
        fn prop_filter_is_idempotent(rows in prop::collection::vec(arb_row(), 0..20), filters in arb_filters()) {
            let once: Vec<Row> = filter_view(&rows, &filters).into_iter().cloned().collect();
            let twice: Vec<Row> = filter_view(&once, &filters).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_filter_preserves_order(rows in prop::collection::vec(arb_row(), 0..20), filters in arb_filters()) {
            let view = filter_view(&rows, &filters);
            let positions: Vec<usize> = view
                .iter()
                .map(|r| rows.iter().position(|x| std::ptr::eq(x, *r)).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_select_all_round_trip(
            rows in prop::collection::vec(arb_row(), 0..20),
            prior in prop::collection::vec("[0-9]{1,3}", 0..10),
        ) {
            let mut selection = crate::shared::list::SelectionSet::new();
            for id in &prior {
                selection.select_row(id, true);
            }
            selection.select_all(true, rows.iter().map(|r| r.row_id()));
            selection.select_all(false, rows.iter().map(|r| r.row_id()));
            prop_assert!(selection.is_empty());
        }
    }
}
