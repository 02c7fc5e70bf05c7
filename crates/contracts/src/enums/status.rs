use serde::{Deserialize, Serialize};

/// Статус справочных записей (номенклатура, поставщики, клиенты, прайс-листы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Active,
    Inactive,
    Pending,
}

impl ActivityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityStatus::Active => "Active",
            ActivityStatus::Inactive => "Inactive",
            ActivityStatus::Pending => "Pending",
        }
    }

    /// Значения для выпадающего списка фильтра
    pub fn all() -> Vec<ActivityStatus> {
        vec![
            ActivityStatus::Active,
            ActivityStatus::Inactive,
            ActivityStatus::Pending,
        ]
    }
}

/// Статус заказа поставщику
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Received,
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Draft",
            PurchaseOrderStatus::Pending => "Pending",
            PurchaseOrderStatus::Approved => "Approved",
            PurchaseOrderStatus::Received => "Received",
            PurchaseOrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<PurchaseOrderStatus> {
        vec![
            PurchaseOrderStatus::Draft,
            PurchaseOrderStatus::Pending,
            PurchaseOrderStatus::Approved,
            PurchaseOrderStatus::Received,
            PurchaseOrderStatus::Cancelled,
        ]
    }
}

/// Статус заказа клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SalesOrderStatus {
    #[default]
    Draft,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

impl SalesOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderStatus::Draft => "Draft",
            SalesOrderStatus::Confirmed => "Confirmed",
            SalesOrderStatus::Shipped => "Shipped",
            SalesOrderStatus::Delivered => "Delivered",
            SalesOrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn all() -> Vec<SalesOrderStatus> {
        vec![
            SalesOrderStatus::Draft,
            SalesOrderStatus::Confirmed,
            SalesOrderStatus::Shipped,
            SalesOrderStatus::Delivered,
            SalesOrderStatus::Cancelled,
        ]
    }
}

/// Тип продажи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalesOrderType {
    #[default]
    Wholesale,
    Retail,
}

impl SalesOrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderType::Wholesale => "wholesale",
            SalesOrderType::Retail => "retail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SalesOrderPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl SalesOrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            SalesOrderPriority::Low => "Low",
            SalesOrderPriority::Medium => "Medium",
            SalesOrderPriority::High => "High",
        }
    }
}

/// Статус маршрута доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RouteStatus {
    #[default]
    Active,
    Inactive,
    Paused,
    Archived,
}

impl RouteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStatus::Active => "Active",
            RouteStatus::Inactive => "Inactive",
            RouteStatus::Paused => "Paused",
            RouteStatus::Archived => "Archived",
        }
    }

    pub fn all() -> Vec<RouteStatus> {
        vec![
            RouteStatus::Active,
            RouteStatus::Inactive,
            RouteStatus::Paused,
            RouteStatus::Archived,
        ]
    }
}

/// Статус приёмки строки заказа поставщику
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderLineStatus {
    #[default]
    Pending,
    Partial,
    Received,
}

impl OrderLineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderLineStatus::Pending => "pending",
            OrderLineStatus::Partial => "partial",
            OrderLineStatus::Received => "received",
        }
    }

    /// Статус по принятому количеству
    pub fn from_received(received_qty: f64, quantity: f64) -> Self {
        if received_qty <= 0.0 {
            OrderLineStatus::Pending
        } else if received_qty < quantity {
            OrderLineStatus::Partial
        } else {
            OrderLineStatus::Received
        }
    }
}

/// Статус отгрузки строки заказа клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentLineStatus {
    #[default]
    Pending,
    Partial,
    Shipped,
    Delivered,
}

impl ShipmentLineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentLineStatus::Pending => "pending",
            ShipmentLineStatus::Partial => "partial",
            ShipmentLineStatus::Shipped => "shipped",
            ShipmentLineStatus::Delivered => "delivered",
        }
    }
}

/// Уровень остатка на складе, вычисляется из доступного количества
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Нет доступного остатка - Out of Stock, не выше точки заказа - Low Stock
    pub fn from_levels(available: f64, reorder_point: f64) -> Self {
        if available == 0.0 {
            StockStatus::OutOfStock
        } else if available <= reorder_point {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }
}

/// Статус листа сборки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PickListStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl PickListStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PickListStatus::Pending => "Pending",
            PickListStatus::InProgress => "In Progress",
            PickListStatus::Completed => "Completed",
            PickListStatus::OnHold => "On Hold",
        }
    }

    pub fn all() -> Vec<PickListStatus> {
        vec![
            PickListStatus::Pending,
            PickListStatus::InProgress,
            PickListStatus::Completed,
            PickListStatus::OnHold,
        ]
    }
}

/// Роль пользователя в распределении доступа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::User => "user",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::User]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

/// Статус доставки клиенту на маршруте
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteStopStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl RouteStopStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteStopStatus::Pending => "pending",
            RouteStopStatus::InTransit => "in-transit",
            RouteStopStatus::Delivered => "delivered",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_names_match_ui_values() {
        assert_eq!(
            serde_json::to_string(&PurchaseOrderStatus::Approved).unwrap(),
            "\"Approved\""
        );
        assert_eq!(serde_json::to_string(&SalesOrderType::Retail).unwrap(), "\"retail\"");
        assert_eq!(
            serde_json::from_str::<OrderLineStatus>("\"partial\"").unwrap(),
            OrderLineStatus::Partial
        );
        for status in RouteStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_line_status_from_received() {
        assert_eq!(OrderLineStatus::from_received(0.0, 10.0), OrderLineStatus::Pending);
        assert_eq!(OrderLineStatus::from_received(4.0, 10.0), OrderLineStatus::Partial);
        assert_eq!(OrderLineStatus::from_received(10.0, 10.0), OrderLineStatus::Received);
    }

    #[test]
    fn test_stock_status_levels() {
        assert_eq!(StockStatus::from_levels(0.0, 10.0), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_levels(12.0, 25.0), StockStatus::LowStock);
        assert_eq!(StockStatus::from_levels(6.0, 6.0), StockStatus::LowStock);
        assert_eq!(StockStatus::from_levels(37.0, 20.0), StockStatus::InStock);
    }

    #[test]
    fn test_multi_word_status_names() {
        assert_eq!(
            serde_json::to_string(&PickListStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::from_str::<RouteStopStatus>("\"in-transit\"").unwrap(),
            RouteStopStatus::InTransit
        );
        for status in PickListStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(UserStatus::Active.toggled(), UserStatus::Inactive);
        assert_eq!(serde_json::to_string(&StockStatus::OutOfStock).unwrap(), "\"Out of Stock\"");
    }
}
