use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCart;
use crate::domain::cart::use_cases::reset::ResetCartUseCase;
use crate::domain::logger::Logger;

pub struct ResetCartUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResetCartUseCase for ResetCartUseCaseImpl {
    async fn execute(&self) -> Result<String, CartError> {
        self.logger.info("Resetting cart");
        self.cart.lock().await.reset();

        let message = "The cart has been successfully reset".to_string();
        self.logger.info(&message);
        Ok(message)
    }
}
