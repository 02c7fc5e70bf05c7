pub mod aggregate;

pub use aggregate::{Supplier, VendorMasterEntry, SUPPLIER_COLUMNS};
