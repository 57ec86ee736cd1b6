use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCart;
use crate::domain::cart::use_cases::add_item::ItemAdded;
use crate::domain::cart::use_cases::add_vas_item::{AddVasItemParams, AddVasItemUseCase};
use crate::domain::cart::validator::validate_vas_item_request;
use crate::domain::logger::Logger;

pub struct AddVasItemUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddVasItemUseCase for AddVasItemUseCaseImpl {
    async fn execute(&self, params: AddVasItemParams) -> Result<ItemAdded, CartError> {
        self.logger
            .info(&format!("Adding vas item to cart: {:?}", params));

        let mut cart = self.cart.lock().await;
        let validated = validate_vas_item_request(&cart, &params).inspect_err(|err| {
            self.logger
                .error(&format!("Rejected vas item {:?}: {}", params, err))
        })?;

        let added = ItemAdded::new(validated.vas_item.details.item_id);
        cart.add_vas_item(validated.default_item_id, validated.vas_item)?;

        self.logger.info(&added.message);
        Ok(added)
    }
}
