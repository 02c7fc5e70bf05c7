pub mod status;

pub use status::{
    ActivityStatus, OrderLineStatus, PickListStatus, PurchaseOrderStatus, RouteStatus,
    RouteStopStatus, SalesOrderPriority, SalesOrderStatus, SalesOrderType, ShipmentLineStatus,
    StockStatus, UserRole, UserStatus,
};
