//! Admission checks run against the current cart before any mutation.
//!
//! Checks run in a fixed order (malformed fields, reserved ids, cart-wide
//! capacity, per-item capacity, relational rules) and the first failing rule
//! is reported. On success the request is returned in its parsed form.

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::constants::{
    MAX_CART_TOTAL_PRICE, MAX_TOTAL_ITEM_COUNT, MAX_UNIQUE_ITEM_COUNT,
    MAX_VAS_QUANTITY_PER_DEFAULT_ITEM, VAS_ELIGIBLE_CATEGORY_IDS, VAS_ITEM_CATEGORY_ID,
    VAS_ITEM_SELLER_ID,
};
use super::errors::{CartError, InvalidItemError, InvalidStateError};
use super::item::{ItemDetails, VasItem};
use super::model::Cart;
use super::use_cases::add_item::AddItemParams;
use super::use_cases::add_vas_item::AddVasItemParams;
use super::value_objects::{CategoryId, ItemId, ItemKind, Quantity, SellerId};

/// A VAS request that passed validation, with the default item it attaches to.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedVasItem {
    pub default_item_id: ItemId,
    pub vas_item: VasItem,
}

pub fn validate_item_request(cart: &Cart, params: &AddItemParams) -> Result<ItemDetails, CartError> {
    let reasons = invalid_reasons(
        params.item_id,
        params.category_id,
        params.seller_id,
        params.price.as_ref(),
        params.quantity,
    );
    let details = match (
        params.item_id,
        params.category_id,
        params.seller_id,
        &params.price,
        params.quantity,
    ) {
        (Some(item_id), Some(category_id), Some(seller_id), Some(price), Some(quantity))
            if reasons.is_empty() =>
        {
            ItemDetails {
                item_id,
                category_id,
                seller_id,
                price: price.clone(),
                quantity,
            }
        }
        _ => return Err(CartError::MalformedRequest(reasons)),
    };

    if details.category_id == VAS_ITEM_CATEGORY_ID {
        return Err(InvalidItemError::ReservedCategory(details.category_id).into());
    }
    if details.seller_id == VAS_ITEM_SELLER_ID {
        return Err(InvalidItemError::ReservedSeller(details.seller_id).into());
    }
    check_cart_capacity(cart, &details)?;

    let kind = ItemKind::for_category(details.category_id);
    let existing = cart.find_item(details.item_id);
    let existing_quantity = existing.map(|item| item.details().quantity).unwrap_or(0);
    check_item_quantity(kind, existing_quantity, details.quantity)?;

    if let Some(cart_type) = cart.cart_type()
        && !cart_type.accepts(kind)
    {
        return Err(InvalidStateError::CartTypeConflict(cart_type).into());
    }

    // Increments of an item already in the cart never hit the unique cap.
    if existing.is_none() && cart.unique_item_count() >= MAX_UNIQUE_ITEM_COUNT {
        return Err(InvalidStateError::UniqueItemCountExceeded.into());
    }

    Ok(details)
}

pub fn validate_vas_item_request(
    cart: &Cart,
    params: &AddVasItemParams,
) -> Result<ValidatedVasItem, CartError> {
    let mut reasons = invalid_reasons(
        params.item_id,
        params.category_id,
        params.seller_id,
        params.price.as_ref(),
        params.quantity,
    );
    if params.vas_item_id.is_none() {
        reasons.push("VasItem ID is required".to_string());
    }
    let (default_item_id, details) = match (
        params.item_id,
        params.vas_item_id,
        params.category_id,
        params.seller_id,
        &params.price,
        params.quantity,
    ) {
        (
            Some(default_item_id),
            Some(vas_item_id),
            Some(category_id),
            Some(seller_id),
            Some(price),
            Some(quantity),
        ) if reasons.is_empty() => (
            default_item_id,
            ItemDetails {
                item_id: vas_item_id,
                category_id,
                seller_id,
                price: price.clone(),
                quantity,
            },
        ),
        _ => return Err(CartError::MalformedRequest(reasons)),
    };

    if details.category_id != VAS_ITEM_CATEGORY_ID {
        return Err(InvalidItemError::VasCategoryMismatch(details.category_id).into());
    }
    if details.seller_id != VAS_ITEM_SELLER_ID {
        return Err(InvalidItemError::VasSellerMismatch(details.seller_id).into());
    }
    check_cart_capacity(cart, &details)?;
    check_item_quantity(
        ItemKind::VasItem,
        cart.vas_quantity(details.item_id),
        details.quantity,
    )?;

    let default_item = cart
        .find_default_item(default_item_id)
        .ok_or(InvalidItemError::DefaultItemMissing(default_item_id))?;

    if !VAS_ELIGIBLE_CATEGORY_IDS.contains(&default_item.details.category_id) {
        return Err(
            InvalidItemError::CategoryNotVasEligible(default_item.details.category_id).into(),
        );
    }
    if default_item
        .vas_quantity(details.item_id)
        .checked_add(details.quantity)
        .is_none_or(|quantity| quantity > MAX_VAS_QUANTITY_PER_DEFAULT_ITEM)
    {
        return Err(InvalidStateError::VasQuantityExceeded.into());
    }
    if details.price > default_item.details.price {
        return Err(InvalidItemError::VasPriceTooHigh {
            vas_price: details.price,
            default_price: default_item.details.price.clone(),
        }
        .into());
    }

    Ok(ValidatedVasItem {
        default_item_id,
        vas_item: VasItem::new(details),
    })
}

/// Every missing or non-positive field, in request field order.
fn invalid_reasons(
    item_id: Option<ItemId>,
    category_id: Option<CategoryId>,
    seller_id: Option<SellerId>,
    price: Option<&BigDecimal>,
    quantity: Option<Quantity>,
) -> Vec<String> {
    let mut reasons = Vec::new();
    if item_id.is_none() {
        reasons.push("Item ID is required".to_string());
    }
    if category_id.is_none() {
        reasons.push("Category ID is required".to_string());
    }
    if seller_id.is_none() {
        reasons.push("Seller ID is required".to_string());
    }
    if !price.is_some_and(|price| *price > BigDecimal::zero()) {
        reasons.push("Price must be greater than 0".to_string());
    }
    if !quantity.is_some_and(|quantity| quantity > 0) {
        reasons.push("Quantity must be greater than 0".to_string());
    }
    reasons
}

fn check_cart_capacity(cart: &Cart, details: &ItemDetails) -> Result<(), CartError> {
    // Quantities are unbounded on input; an overflowing sum is over any cap.
    if cart
        .item_count()
        .checked_add(details.quantity)
        .is_none_or(|count| count > MAX_TOTAL_ITEM_COUNT)
    {
        return Err(InvalidStateError::TotalItemCountExceeded.into());
    }
    if cart.total_price() + details.line_total() > BigDecimal::from(MAX_CART_TOTAL_PRICE) {
        return Err(InvalidStateError::TotalPriceExceeded.into());
    }
    Ok(())
}

fn check_item_quantity(
    kind: ItemKind,
    existing_quantity: Quantity,
    requested_quantity: Quantity,
) -> Result<(), CartError> {
    if existing_quantity
        .checked_add(requested_quantity)
        .is_none_or(|quantity| quantity > kind.max_quantity())
    {
        return Err(InvalidStateError::ItemQuantityExceeded {
            kind,
            max: kind.max_quantity(),
        }
        .into());
    }
    Ok(())
}
