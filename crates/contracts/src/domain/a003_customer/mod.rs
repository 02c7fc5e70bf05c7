pub mod aggregate;

pub use aggregate::{Customer, CUSTOMER_COLUMNS};
