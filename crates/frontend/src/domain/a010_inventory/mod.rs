use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a010_inventory::{InventoryItem, InventorySummary};
use contracts::shared::config::EngineConfig;
use contracts::shared::list::StatusFilter;
use leptos::prelude::*;

/// Форма остатков на складе
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<InventoryItem> {
    ListController::for_form(mock::inventory(), config, store)
}

/// Выпадающий список категорий: «all» снимает ограничение, иначе точное совпадение
pub fn set_category_filter(list: &ListController<InventoryItem>, category: &str) {
    if category.is_empty() || category == StatusFilter::ALL {
        list.set_operand("category", "");
    } else {
        list.set_operator("category", "equals");
        list.set_operand("category", category);
    }
}

/// Значения для выпадающего списка категорий, в порядке первого появления
pub fn categories(list: &ListController<InventoryItem>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in list.records() {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

/// Карточки сводки по всем позициям склада
pub fn summary(list: &ListController<InventoryItem>) -> InventorySummary {
    list.state.with(|s| InventorySummary::from_items(&s.records))
}
