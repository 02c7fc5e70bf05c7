pub mod aggregate;

pub use aggregate::{PickList, PickListItem, PICK_LIST_COLUMNS};
