use super::ListRecord;

/// Быстрый поиск: запрос содержится хотя бы в одной колонке с признаком `searchable`
pub fn matches_search<T: ListRecord>(record: &T, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    T::columns()
        .iter()
        .filter(|column| column.searchable)
        .filter_map(|column| record.field_value(column.name))
        .any(|value| value.to_filter_text().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::{rows, Row};

    #[test]
    fn test_search_matches_any_searchable_column() {
        let rows = rows();
        let hits: Vec<&str> = rows
            .iter()
            .filter(|r| matches_search(*r, "monitor"))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(hits, vec!["2"]);

        // код тоже участвует в поиске
        assert!(matches_search(&rows[0], "LAPTOP"));
    }

    #[test]
    fn test_search_ignores_non_searchable_columns() {
        // количество 25 есть только в числовой колонке без признака поиска
        assert!(!rows().iter().any(|r: &Row| matches_search(r, "25")));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(rows().iter().all(|r| matches_search(r, "   ")));
    }
}
