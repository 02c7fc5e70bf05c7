use crate::shared::data::mock;
use crate::shared::list_state::ListController;
use crate::shared::state::FilterStateStore;
use contracts::domain::a009_item_brand::ItemBrand;
use contracts::shared::config::EngineConfig;

/// Форма списка брендов
pub fn create_list_state(config: &EngineConfig, store: &FilterStateStore) -> ListController<ItemBrand> {
    ListController::for_form(mock::item_brands(), config, store)
}
