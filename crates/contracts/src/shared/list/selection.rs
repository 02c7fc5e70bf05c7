use super::ListRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Состояние чекбокса в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Набор выбранных строк (ID из отмеченных чекбоксов)
///
/// Набор не подрезается автоматически при смене фильтров: после изменения
/// фильтра в нём могут остаться ID строк, которых уже нет в представлении.
/// Кому нужно «выбрано = видно», вызывает [`SelectionSet::prune_to`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// «Выбрать все»: ровно ID текущего представления (true) или пусто (false)
    pub fn select_all<I>(&mut self, checked: bool, view_ids: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.ids.clear();
        if checked {
            self.ids
                .extend(view_ids.into_iter().map(|id| id.as_ref().to_string()));
        }
    }

    /// Отметить или снять одну строку
    pub fn select_row(&mut self, id: &str, checked: bool) {
        if checked {
            self.ids.insert(id.to_string());
        } else {
            self.ids.remove(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Оставить только ID, присутствующие в представлении; возвращает число удалённых
    pub fn prune_to<I>(&mut self, view_ids: I) -> usize
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let visible: HashSet<String> = view_ids
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();
        let before = self.ids.len();
        self.ids.retain(|id| visible.contains(id));
        before - self.ids.len()
    }

    /// Состояние чекбокса «выбрать все» для текущего представления
    pub fn header_state<I>(&self, view_ids: I) -> CheckboxState
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut total = 0usize;
        let mut selected = 0usize;
        for id in view_ids {
            total += 1;
            if self.ids.contains(id.as_ref()) {
                selected += 1;
            }
        }

        if total == 0 || selected == 0 {
            CheckboxState::Unchecked
        } else if selected == total {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    }
}

/// Удалить выбранные записи из коллекции и очистить выбор
pub fn delete_selected<T: ListRecord>(records: &mut Vec<T>, selection: &mut SelectionSet) -> usize {
    let before = records.len();
    records.retain(|r| !selection.contains(r.row_id()));
    let removed = before - records.len();
    selection.clear();
    if removed > 0 {
        log::info!("Deleted {} selected row(s)", removed);
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::test_support::rows;
    use crate::shared::list::{filter_view, FilterOperator, FilterSet};

    #[test]
    fn test_select_all_uses_filtered_view() {
        let rows = rows();
        let mut filters = FilterSet::new();
        filters.set_operator("qty", FilterOperator::GreaterThan);
        filters.set_operand("qty", "12");
        let view = filter_view(&rows, &filters);

        let mut selection = SelectionSet::new();
        selection.select_row("1", true);
        selection.select_all(true, view.iter().map(|r| r.row_id()));

        assert_eq!(selection.len(), view.len());
        assert!(!selection.contains("1"));
        assert!(view.iter().all(|r| selection.contains(r.row_id())));
    }

    #[test]
    fn test_select_row_toggles() {
        let mut selection = SelectionSet::new();
        selection.select_row("7", true);
        selection.select_row("7", true);
        assert_eq!(selection.len(), 1);
        selection.select_row("7", false);
        assert!(selection.is_empty());
        selection.select_row("missing", false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_selection_not_pruned_on_filter_change() {
        let rows = rows();
        let mut selection = SelectionSet::new();
        selection.select_all(true, rows.iter().map(|r| r.row_id()));

        let mut filters = FilterSet::new();
        filters.set_operand("name", "monitor");
        let view = filter_view(&rows, &filters);
        assert_eq!(view.len(), 1);

        // выбор остался прежним
        assert_eq!(selection.len(), rows.len());
        assert_eq!(
            selection.header_state(view.iter().map(|r| r.row_id())),
            CheckboxState::Checked
        );

        let removed = selection.prune_to(view.iter().map(|r| r.row_id()));
        assert_eq!(removed, rows.len() - 1);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_header_state() {
        let ids = ["1", "2", "3"];
        let mut selection = SelectionSet::new();
        assert_eq!(selection.header_state(ids), CheckboxState::Unchecked);
        selection.select_row("2", true);
        assert_eq!(selection.header_state(ids), CheckboxState::Indeterminate);
        selection.select_all(true, ids);
        assert_eq!(selection.header_state(ids), CheckboxState::Checked);
        assert_eq!(
            selection.header_state(Vec::<&str>::new()),
            CheckboxState::Unchecked
        );
    }

    #[test]
    fn test_delete_selected() {
        let mut rows = rows();
        let mut selection = SelectionSet::new();
        selection.select_row("1", true);
        selection.select_row("3", true);
        selection.select_row("99", true);

        let removed = delete_selected(&mut rows, &mut selection);
        assert_eq!(removed, 2);
        assert!(selection.is_empty());
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }
}
