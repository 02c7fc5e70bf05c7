pub mod aggregate;

pub use aggregate::{Route, RouteCustomer, ROUTE_COLUMNS, ROUTE_CUSTOMER_COLUMNS};
