/// Трейт для корня агрегата
///
/// Статические метаданные сущности: индекс, имена для UI и ключи форм.
/// Ключи форм используются хранилищем состояния фильтров вкладок.
pub trait AggregateRoot {
    /// Индекс агрегата в системе (например, "a004")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции (например, "purchase_order")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Purchase Order")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Purchase Orders")
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a004_purchase_order")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Ключ формы списка (например, "a004_purchase_order_list")
    fn list_form_key() -> String {
        format!("{}_list", Self::full_name())
    }

    /// Ключ формы документа/элемента (например, "a004_purchase_order_details_PO-001")
    fn details_form_key(id: &str) -> String {
        format!("{}_details_{}", Self::full_name(), id)
    }
}
