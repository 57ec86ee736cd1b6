use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem_openapi::Object;

use business::domain::cart::item::{Item, ItemDetails, VasItem};
use business::domain::cart::model::CartView;
use business::domain::cart::use_cases::add_item::AddItemParams;
use business::domain::cart::use_cases::add_vas_item::AddVasItemParams;

/// Every field is optional on the wire so that missing values reach the
/// validator and come back as a malformed-request error.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub item_id: Option<i64>,
    pub category_id: Option<i64>,
    pub seller_id: Option<i64>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl From<AddItemRequest> for AddItemParams {
    fn from(request: AddItemRequest) -> Self {
        Self {
            item_id: request.item_id,
            category_id: request.category_id,
            seller_id: request.seller_id,
            price: request.price.and_then(to_decimal),
            quantity: request.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddVasItemRequest {
    /// Id of the default item the VAS item is attached to
    pub item_id: Option<i64>,
    pub vas_item_id: Option<i64>,
    pub category_id: Option<i64>,
    pub seller_id: Option<i64>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl From<AddVasItemRequest> for AddVasItemParams {
    fn from(request: AddVasItemRequest) -> Self {
        Self {
            item_id: request.item_id,
            vas_item_id: request.vas_item_id,
            category_id: request.category_id,
            seller_id: request.seller_id,
            price: request.price.and_then(to_decimal),
            quantity: request.quantity,
        }
    }
}

/// Goes through the shortest decimal rendering of the float so `0.1` stays
/// `0.1` instead of its binary expansion. Non-finite values are dropped.
fn to_decimal(price: f64) -> Option<BigDecimal> {
    BigDecimal::from_str(&price.to_string()).ok()
}

fn to_float(amount: &BigDecimal) -> f64 {
    amount.to_f64().unwrap_or_default()
}

#[derive(Debug, Clone, Object)]
pub struct BasicResponse {
    pub message: String,
    pub result: bool,
}

impl BasicResponse {
    pub fn success(message: String) -> Self {
        Self {
            message,
            result: true,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct VasItemResponse {
    pub item_id: i64,
    pub category_id: i64,
    pub seller_id: i64,
    pub price: f64,
    pub quantity: i64,
}

impl From<&VasItem> for VasItemResponse {
    fn from(vas_item: &VasItem) -> Self {
        let ItemDetails {
            item_id,
            category_id,
            seller_id,
            price,
            quantity,
        } = &vas_item.details;
        Self {
            item_id: *item_id,
            category_id: *category_id,
            seller_id: *seller_id,
            price: to_float(price),
            quantity: *quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub item_id: i64,
    pub category_id: i64,
    pub seller_id: i64,
    pub price: f64,
    pub quantity: i64,
    /// VAS items attached to a default item; always empty for digital items
    pub vas_items: Vec<VasItemResponse>,
}

impl From<&Item> for CartItemResponse {
    fn from(item: &Item) -> Self {
        let details = item.details();
        Self {
            item_id: details.item_id,
            category_id: details.category_id,
            seller_id: details.seller_id,
            price: to_float(&details.price),
            quantity: details.quantity,
            vas_items: item.vas_items().iter().map(VasItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Cart total with the applied discount deducted
    pub total_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub applied_promotion_id: Option<i64>,
    pub total_discount: f64,
}

impl From<CartView> for CartResponse {
    fn from(view: CartView) -> Self {
        Self {
            items: view.items.iter().map(CartItemResponse::from).collect(),
            total_price: to_float(&view.total_price),
            applied_promotion_id: view.applied_promotion_id,
            total_discount: to_float(&view.total_discount),
        }
    }
}
