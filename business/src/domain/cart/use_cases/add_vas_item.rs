use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::use_cases::add_item::ItemAdded;
use crate::domain::cart::value_objects::{CategoryId, ItemId, Quantity, SellerId};

/// Request to attach a value-added service to a default item already in the
/// cart. `item_id` names the default item, `vas_item_id` the service itself.
#[derive(Debug, Clone, Default)]
pub struct AddVasItemParams {
    pub item_id: Option<ItemId>,
    pub vas_item_id: Option<ItemId>,
    pub category_id: Option<CategoryId>,
    pub seller_id: Option<SellerId>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<Quantity>,
}

#[async_trait]
pub trait AddVasItemUseCase: Send + Sync {
    async fn execute(&self, params: AddVasItemParams) -> Result<ItemAdded, CartError>;
}
