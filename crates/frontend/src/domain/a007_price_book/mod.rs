pub mod details_state;

use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a007_price_book::PriceBook;
use contracts::shared::config::EngineConfig;

pub use details_state::{PriceBookDetails, PriceBookState, PriceField};

pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<PriceBook> {
    ListController::for_form(mock::price_books(), config, store)
}
