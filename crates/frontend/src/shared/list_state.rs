//! Состояние списочной формы: записи, строка фильтров, сортировка, выбор строк

use super::state::FilterStateStore;
use contracts::domain::common::AggregateRoot;
use contracts::shared::config::EngineConfig;
use contracts::shared::list::{
    delete_selected, filter_view, sort_view, CheckboxState, FilterOperator, FilterOptions,
    FilterSet, ListRecord, SelectionSet, SortState,
};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub records: Vec<T>,
    pub filters: FilterSet,
    pub sort: SortState,
    pub selection: SelectionSet,
}

impl<T: ListRecord> ListState<T> {
    pub fn new(records: Vec<T>, options: FilterOptions) -> Self {
        Self {
            records,
            filters: FilterSet::for_columns(T::columns()).with_options(options),
            sort: SortState::default(),
            selection: SelectionSet::new(),
        }
    }

    /// Отфильтрованное и отсортированное представление
    pub fn visible(&self) -> Vec<&T> {
        let mut view = filter_view(&self.records, &self.filters);
        sort_view(&mut view, &self.sort);
        view
    }

    pub fn visible_ids(&self) -> Vec<String> {
        self.visible()
            .iter()
            .map(|r| r.row_id().to_string())
            .collect()
    }

    pub fn select_all(&mut self, checked: bool) {
        let ids = self.visible_ids();
        self.selection.select_all(checked, ids);
    }

    pub fn header_state(&self) -> CheckboxState {
        self.selection.header_state(self.visible_ids())
    }

    pub fn delete_selected(&mut self) -> usize {
        delete_selected(&mut self.records, &mut self.selection)
    }
}

/// Реактивный контроллер списка: все изменения проходят через `RwSignal`
pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: ListRecord + Clone + Send + Sync + 'static,
{
    pub fn new(records: Vec<T>, options: FilterOptions) -> Self {
        Self {
            state: RwSignal::new(ListState::new(records, options)),
        }
    }

    pub fn set_operand(&self, field: &str, value: &str) {
        self.state.update(|s| s.filters.set_operand(field, value));
    }

    /// Оператор приходит строкой из выпадающего списка
    pub fn set_operator(&self, field: &str, operator: &str) {
        self.state
            .update(|s| s.filters.set_operator(field, FilterOperator::from(operator)));
    }

    pub fn set_status(&self, status: &str) {
        self.state.update(|s| s.filters.set_status(status));
    }

    pub fn set_search(&self, query: &str) {
        self.state.update(|s| s.filters.set_search(query));
    }

    pub fn clear_filters(&self) {
        self.state.update(|s| s.filters.clear());
    }

    pub fn filters(&self) -> FilterSet {
        self.state.with(|s| s.filters.clone())
    }

    /// Восстановить строку фильтров (например, из хранилища вкладок)
    pub fn restore_filters(&self, filters: FilterSet) {
        self.state.update(|s| s.filters = filters);
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.sort.toggle(field));
    }

    pub fn sort_indicator(&self, field: &str) -> &'static str {
        self.state.with(|s| s.sort.indicator(field))
    }

    pub fn visible(&self) -> Vec<T> {
        self.state
            .with(|s| s.visible().into_iter().cloned().collect())
    }

    pub fn select_all(&self, checked: bool) {
        self.state.update(|s| s.select_all(checked));
    }

    pub fn select_row(&self, id: &str, checked: bool) {
        self.state.update(|s| s.selection.select_row(id, checked));
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.with(|s| s.selection.contains(id))
    }

    pub fn selected_count(&self) -> usize {
        self.state.with(|s| s.selection.len())
    }

    pub fn header_state(&self) -> CheckboxState {
        self.state.with(|s| s.header_state())
    }

    /// Убрать из выбора строки, скрытые фильтром
    pub fn prune_selection(&self) -> usize {
        let mut removed = 0;
        self.state.update(|s| {
            let ids = s.visible_ids();
            removed = s.selection.prune_to(ids);
        });
        removed
    }

    pub fn delete_selected(&self) -> usize {
        let mut removed = 0;
        self.state.update(|s| removed = s.delete_selected());
        removed
    }

    /// Изменить запись по id; `false`, если записи нет
    pub fn update_record(&self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        let mut found = false;
        self.state.update(|s| {
            if let Some(record) = s.records.iter_mut().find(|r| r.row_id() == id) {
                f(record);
                found = true;
            }
        });
        found
    }

    pub fn add_record(&self, record: T) {
        self.state.update(|s| s.records.push(record));
    }

    /// Все записи без учёта фильтров
    pub fn records(&self) -> Vec<T> {
        self.state.with(|s| s.records.clone())
    }

    pub fn len(&self) -> usize {
        self.state.with(|s| s.records.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ListController<T>
where
    T: ListRecord + AggregateRoot + Clone + Send + Sync + 'static,
{
    /// Список формы агрегата; строка фильтров восстанавливается из хранилища вкладок
    pub fn for_form(records: Vec<T>, config: &EngineConfig, store: &FilterStateStore) -> Self {
        let options = config.filters.options();
        let list = Self::new(records, options);
        if let Some(filters) = store.load_list_filters::<T>() {
            log::debug!("Restoring filters for {}", T::list_form_key());
            list.restore_filters(filters.with_options(options));
        }
        list
    }

    /// Сохранить строку фильтров перед закрытием вкладки
    pub fn save_filters(&self, store: &mut FilterStateStore) {
        store.save_list_filters::<T>(&self.filters());
    }
}
