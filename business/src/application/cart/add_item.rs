use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::item::Item;
use crate::domain::cart::model::SharedCart;
use crate::domain::cart::use_cases::add_item::{AddItemParams, AddItemUseCase, ItemAdded};
use crate::domain::cart::validator::validate_item_request;
use crate::domain::logger::Logger;

pub struct AddItemUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<ItemAdded, CartError> {
        self.logger
            .info(&format!("Adding item to cart: {:?}", params));

        let mut cart = self.cart.lock().await;
        let details = validate_item_request(&cart, &params).inspect_err(|err| {
            self.logger
                .error(&format!("Rejected item {:?}: {}", params, err))
        })?;

        let added = ItemAdded::new(details.item_id);
        cart.add_item(Item::from_details(details));

        self.logger.info(&added.message);
        Ok(added)
    }
}
