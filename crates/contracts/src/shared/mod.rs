pub mod calc;
pub mod config;
pub mod edit;
pub mod list;
pub mod lookup;
pub mod metadata;
