pub mod aggregate;

pub use aggregate::{Permission, Permissions, UserAccess, USER_ACCESS_COLUMNS};
