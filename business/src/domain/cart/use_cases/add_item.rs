use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::value_objects::{CategoryId, ItemId, Quantity, SellerId};

/// Request to add a default or digital item. Fields stay optional so that
/// missing values are reported by validation instead of deserialization.
#[derive(Debug, Clone, Default)]
pub struct AddItemParams {
    pub item_id: Option<ItemId>,
    pub category_id: Option<CategoryId>,
    pub seller_id: Option<SellerId>,
    pub price: Option<BigDecimal>,
    pub quantity: Option<Quantity>,
}

/// Confirmation of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemAdded {
    pub item_id: ItemId,
    pub message: String,
}

impl ItemAdded {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            message: format!("Item with id: {} successfully added to cart", item_id),
        }
    }
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<ItemAdded, CartError>;
}
