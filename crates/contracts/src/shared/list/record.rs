use super::FieldValue;
use crate::shared::metadata::ColumnMetadata;

/// Строка списочной формы
///
/// Любая сущность, которую показывает таблица с фильтрами и чекбоксами.
pub trait ListRecord {
    /// Уникальный идентификатор строки (ключ набора выбранных строк)
    fn row_id(&self) -> &str;

    /// Значение поля по имени колонки; `None`, если такого поля нет
    fn field_value(&self, field: &str) -> Option<FieldValue<'_>>;

    /// Значение поля статуса для фильтра по статусу
    fn status(&self) -> Option<&str> {
        None
    }

    /// Колонки формы списка
    fn columns() -> &'static [ColumnMetadata]
    where
        Self: Sized;
}

/// Следующий ID строки: на единицу больше максимального числового ID.
/// Нечисловые ID не учитываются, после удаления строк ID не переиспользуются.
pub fn next_numeric_id<'a, I>(ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = ids
        .into_iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_numeric_id() {
        assert_eq!(next_numeric_id(Vec::<&str>::new()), "1");
        assert_eq!(next_numeric_id(["1", "4", "2"]), "5");
        assert_eq!(next_numeric_id(["PLI-001", "", "3"]), "4");
    }
}
