use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

#[async_trait]
pub trait ResetCartUseCase: Send + Sync {
    /// Returns the confirmation message.
    async fn execute(&self) -> Result<String, CartError>;
}
