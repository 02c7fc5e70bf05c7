pub mod aggregate;

pub use aggregate::{InventoryItem, InventorySummary, INVENTORY_COLUMNS};
