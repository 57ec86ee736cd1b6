use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartView, SharedCart};
use crate::domain::cart::promotion::calculate_max_promotion;
use crate::domain::cart::use_cases::display::DisplayCartUseCase;
use crate::domain::logger::Logger;

/// Re-evaluates the best promotion on every call so the view always reflects
/// the current cart contents.
pub struct DisplayCartUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DisplayCartUseCase for DisplayCartUseCaseImpl {
    async fn execute(&self) -> Result<CartView, CartError> {
        self.logger.info("Displaying cart");
        let mut cart = self.cart.lock().await;

        let promotion = calculate_max_promotion(cart.items(), cart.total_price());
        match &promotion {
            Some(promotion) => self.logger.debug(&format!(
                "Applying promotion {} with discount {}",
                promotion.id, promotion.discount
            )),
            None => self.logger.debug("No promotion applies to the cart"),
        }
        cart.apply_promotion(promotion);

        let view = cart.view();
        self.logger.info(&format!(
            "Displayed cart with {} items, total price {}",
            view.items.len(),
            view.total_price
        ));
        Ok(view)
    }
}
