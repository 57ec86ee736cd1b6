use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::value_objects::ItemId;

pub struct RemoveItemParams {
    pub item_id: ItemId,
}

#[async_trait]
pub trait RemoveItemUseCase: Send + Sync {
    /// Returns the confirmation message.
    async fn execute(&self, params: RemoveItemParams) -> Result<String, CartError>;
}
