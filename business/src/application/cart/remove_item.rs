use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::SharedCart;
use crate::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveItemUseCaseImpl {
    pub cart: SharedCart,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemUseCase for RemoveItemUseCaseImpl {
    async fn execute(&self, params: RemoveItemParams) -> Result<String, CartError> {
        self.logger
            .info(&format!("Removing item from cart: {}", params.item_id));

        self.cart
            .lock()
            .await
            .remove_item(params.item_id)
            .inspect_err(|err| self.logger.error(&err.to_string()))?;

        let message = format!(
            "Item with id {} is successfully removed from cart",
            params.item_id
        );
        self.logger.info(&message);
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::item::{Item, ItemDetails, VasItem};
    use crate::domain::cart::model::Cart;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn details(item_id: i64, category_id: i64, price: i64, quantity: i64) -> ItemDetails {
        ItemDetails {
            item_id,
            category_id,
            seller_id: 10,
            price: BigDecimal::from(price),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_decrease_item_count_when_item_removed() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 100, 3)));
        cart.add_item(Item::from_details(details(2, 1001, 100, 5)));
        let cart = cart.shared();
        let use_case = RemoveItemUseCaseImpl {
            cart: cart.clone(),
            logger: mock_logger(),
        };

        let message = use_case
            .execute(RemoveItemParams { item_id: 1 })
            .await
            .unwrap();

        assert_eq!(message, "Item with id 1 is successfully removed from cart");
        assert_eq!(cart.lock().await.item_count(), 5);
    }

    #[tokio::test]
    async fn should_remove_vas_items_with_their_default_item() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 1000, 1)));
        cart.add_item(Item::from_details(details(2, 1001, 100, 5)));
        cart.add_vas_item(1, VasItem::new(details(12, 3242, 100, 2)))
            .unwrap();
        let cart = cart.shared();
        let use_case = RemoveItemUseCaseImpl {
            cart: cart.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(RemoveItemParams { item_id: 1 })
            .await
            .unwrap();

        let cart = cart.lock().await;
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total_price(), &BigDecimal::from(500));
        assert_eq!(cart.items()[0].details().quantity, 5);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_absent() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 100, 1)));
        let use_case = RemoveItemUseCaseImpl {
            cart: cart.shared(),
            logger: mock_logger(),
        };

        let result = use_case.execute(RemoveItemParams { item_id: 125 }).await;

        let err = result.unwrap_err();
        assert_eq!(err, CartError::ItemNotFound(125));
        assert_eq!(err.to_string(), "There is no item with id: 125 in your cart");
    }

    #[tokio::test]
    async fn should_unset_cart_type_when_last_digital_item_removed() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 7889, 100, 1)));
        let cart = cart.shared();
        let use_case = RemoveItemUseCaseImpl {
            cart: cart.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(RemoveItemParams { item_id: 1 })
            .await
            .unwrap();

        assert!(cart.lock().await.cart_type().is_none());
    }

    #[tokio::test]
    async fn should_unset_cart_type_when_last_default_item_removed() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 100, 1)));
        let cart = cart.shared();
        let use_case = RemoveItemUseCaseImpl {
            cart: cart.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(RemoveItemParams { item_id: 1 })
            .await
            .unwrap();

        let cart = cart.lock().await;
        assert!(cart.is_empty());
        assert!(cart.cart_type().is_none());
    }
}
