pub mod aggregate;

pub use aggregate::{ItemBrand, ITEM_BRAND_COLUMNS};
