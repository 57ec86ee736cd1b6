use std::sync::Arc;

use logger::TracingLogger;

use business::application::cart::add_item::AddItemUseCaseImpl;
use business::application::cart::add_vas_item::AddVasItemUseCaseImpl;
use business::application::cart::display::DisplayCartUseCaseImpl;
use business::application::cart::remove_item::RemoveItemUseCaseImpl;
use business::application::cart::reset::ResetCartUseCaseImpl;
use business::domain::cart::model::Cart;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    /// Wires every cart use case to one shared in-memory cart.
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        let cart = Cart::new().shared();

        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let add_vas_item_use_case = Arc::new(AddVasItemUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveItemUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let reset_use_case = Arc::new(ResetCartUseCaseImpl {
            cart: cart.clone(),
            logger: logger.clone(),
        });
        let display_use_case = Arc::new(DisplayCartUseCaseImpl { cart, logger });

        let cart_api = crate::api::cart::routes::CartApi::new(
            add_item_use_case,
            add_vas_item_use_case,
            remove_item_use_case,
            reset_use_case,
            display_use_case,
        );

        Self {
            health_api,
            cart_api,
        }
    }
}
