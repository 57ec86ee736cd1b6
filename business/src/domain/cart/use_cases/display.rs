use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartView;

#[async_trait]
pub trait DisplayCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartView, CartError>;
}
