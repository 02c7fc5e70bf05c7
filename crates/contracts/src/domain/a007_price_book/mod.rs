pub mod aggregate;

pub use aggregate::{
    final_price, PriceBook, PriceBookData, PriceBookItem, PRICE_BOOK_COLUMNS,
    PRICE_BOOK_ITEM_COLUMNS,
};
