pub mod aggregate;

pub use aggregate::{
    SalesOrder, SalesOrderHeader, SalesOrderLine, SALES_ORDER_COLUMNS, SALES_ORDER_LINE_COLUMNS,
};
