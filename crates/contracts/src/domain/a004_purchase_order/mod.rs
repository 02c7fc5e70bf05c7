pub mod aggregate;

pub use aggregate::{
    PurchaseOrder, PurchaseOrderHeader, PurchaseOrderLine, PURCHASE_ORDER_COLUMNS,
    PURCHASE_ORDER_LINE_COLUMNS,
};
