pub mod aggregate;

pub use aggregate::{Item, ItemMasterEntry, ITEM_COLUMNS};
