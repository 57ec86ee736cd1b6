use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::AddItemUseCase;
use business::domain::cart::use_cases::add_vas_item::AddVasItemUseCase;
use business::domain::cart::use_cases::display::DisplayCartUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveItemParams, RemoveItemUseCase};
use business::domain::cart::use_cases::reset::ResetCartUseCase;

use crate::api::cart::dto::{AddItemRequest, AddVasItemRequest, BasicResponse, CartResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddItemUseCase>,
    add_vas_item_use_case: Arc<dyn AddVasItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveItemUseCase>,
    reset_use_case: Arc<dyn ResetCartUseCase>,
    display_use_case: Arc<dyn DisplayCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddItemUseCase>,
        add_vas_item_use_case: Arc<dyn AddVasItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveItemUseCase>,
        reset_use_case: Arc<dyn ResetCartUseCase>,
        display_use_case: Arc<dyn DisplayCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            add_vas_item_use_case,
            remove_item_use_case,
            reset_use_case,
            display_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints operating on the single in-memory cart.
#[OpenApi]
impl CartApi {
    /// Add an item
    ///
    /// Adds a default or digital item, or increases its quantity when it is
    /// already in the cart.
    #[oai(path = "/api/v1/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddItemRequest>) -> AddItemResponse {
        match self.add_item_use_case.execute(body.0.into()).await {
            Ok(added) => AddItemResponse::Created(Json(BasicResponse::success(added.message))),
            Err(err) => AddItemResponse::BadRequest(err.into_error_response().1),
        }
    }

    /// Add a VAS item
    ///
    /// Attaches a value-added service item to a default item in the cart.
    #[oai(path = "/api/v1/cart/vas_items", method = "post", tag = "ApiTags::Cart")]
    async fn add_vas_item(&self, body: Json<AddVasItemRequest>) -> AddItemResponse {
        match self.add_vas_item_use_case.execute(body.0.into()).await {
            Ok(added) => AddItemResponse::Created(Json(BasicResponse::success(added.message))),
            Err(err) => AddItemResponse::BadRequest(err.into_error_response().1),
        }
    }

    /// Remove an item
    ///
    /// Removing a default item also removes its VAS items. A VAS item id
    /// removes that VAS item from every default item it is attached to.
    #[oai(path = "/api/v1/cart/items/:item_id", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, item_id: Path<i64>) -> RemoveItemResponse {
        match self
            .remove_item_use_case
            .execute(RemoveItemParams { item_id: item_id.0 })
            .await
        {
            Ok(message) => RemoveItemResponse::Ok(Json(BasicResponse::success(message))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveItemResponse::NotFound(json),
                    _ => RemoveItemResponse::BadRequest(json),
                }
            }
        }
    }

    /// Reset the cart
    #[oai(path = "/api/v1/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn reset(&self) -> ResetCartResponse {
        match self.reset_use_case.execute().await {
            Ok(message) => ResetCartResponse::Ok(Json(BasicResponse::success(message))),
            Err(err) => ResetCartResponse::InternalError(err.into_error_response().1),
        }
    }

    /// Display the cart
    ///
    /// Returns the items with the best applicable promotion deducted from the
    /// total price.
    #[oai(path = "/api/v1/cart", method = "get", tag = "ApiTags::Cart")]
    async fn display(&self) -> DisplayCartResponse {
        match self.display_use_case.execute().await {
            Ok(view) => DisplayCartResponse::Ok(Json(view.into())),
            Err(err) => DisplayCartResponse::InternalError(err.into_error_response().1),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<BasicResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveItemResponse {
    #[oai(status = 200)]
    Ok(Json<BasicResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResetCartResponse {
    #[oai(status = 200)]
    Ok(Json<BasicResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DisplayCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
