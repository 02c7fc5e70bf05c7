pub mod aggregate;

pub use aggregate::{ItemCategory, ITEM_CATEGORY_COLUMNS};
