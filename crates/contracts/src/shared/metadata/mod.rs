//! Метаданные колонок списочных форм
//!
//! Все типы используют 'static для доступа к константам без затрат во время выполнения.
//!
//! ## Использование
//!
//! ```rust,ignore
//! use contracts::shared::metadata::ColumnMetadata;
//!
//! for column in Item::columns() {
//!     println!("{}: {}", column.name, column.label);
//! }
//! ```

mod column;

pub use column::{find_column, ColumnKind, ColumnMetadata};
