use bigdecimal::BigDecimal;

use super::constants::{
    MAX_CART_TOTAL_PRICE, MAX_TOTAL_ITEM_COUNT, MAX_UNIQUE_ITEM_COUNT,
    MAX_VAS_QUANTITY_PER_DEFAULT_ITEM, VAS_ELIGIBLE_CATEGORY_IDS, VAS_ITEM_CATEGORY_ID,
    VAS_ITEM_SELLER_ID,
};
use super::value_objects::{CartType, CategoryId, ItemId, ItemKind, Quantity, SellerId};

/// Errors returned by every cart operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("Invalid request parameter(s). Fail reason: [{}]", .0.join(", "))]
    MalformedRequest(Vec<String>),
    #[error(transparent)]
    InvalidItem(#[from] InvalidItemError),
    #[error(transparent)]
    InvalidState(#[from] InvalidStateError),
    #[error("There is no item with id: {0} in your cart")]
    ItemNotFound(ItemId),
}

/// Structural or relational rule violations of a single item.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidItemError {
    #[error("Cannot add item with categoryId: {0}. This categoryId is only for VasItems")]
    ReservedCategory(CategoryId),
    #[error("Cannot add item with sellerId: {0}. This sellerId is only for VasItems")]
    ReservedSeller(SellerId),
    #[error(
        "Cannot add VasItem with categoryId: {0}. VasItems should have categoryId of {expected}",
        expected = VAS_ITEM_CATEGORY_ID
    )]
    VasCategoryMismatch(CategoryId),
    #[error(
        "Cannot add item with sellerId: {0}. VasItems should have sellerId of {expected}",
        expected = VAS_ITEM_SELLER_ID
    )]
    VasSellerMismatch(SellerId),
    #[error("There is no default item in your cart with the given id: {0}")]
    DefaultItemMissing(ItemId),
    #[error(
        "You can only add vasItem to default items with category ids: {eligible:?}",
        eligible = VAS_ELIGIBLE_CATEGORY_IDS
    )]
    CategoryNotVasEligible(CategoryId),
    #[error(
        "VasItem price cannot be more than default item price. VasItem price: {vas_price}, Default item price: {default_price}"
    )]
    VasPriceTooHigh {
        vas_price: BigDecimal,
        default_price: BigDecimal,
    },
}

/// Capacity, ceiling and cart-type violations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidStateError {
    #[error("There can be maximum {max} items in the cart", max = MAX_TOTAL_ITEM_COUNT)]
    TotalItemCountExceeded,
    #[error("Cart total can be maximum {max}", max = MAX_CART_TOTAL_PRICE)]
    TotalPriceExceeded,
    #[error("Each {kind} can be added maximum of {max} times to the cart.")]
    ItemQuantityExceeded { kind: ItemKind, max: Quantity },
    #[error(
        "Cart cannot hold both digital and default items. Current cart is holding {0} items."
    )]
    CartTypeConflict(CartType),
    #[error(
        "There can be maximum {max} unique items in the cart",
        max = MAX_UNIQUE_ITEM_COUNT
    )]
    UniqueItemCountExceeded,
    #[error(
        "You cannot add more than {max} VasItem to default items",
        max = MAX_VAS_QUANTITY_PER_DEFAULT_ITEM
    )]
    VasQuantityExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_list_every_malformed_field_in_message() {
        let err = CartError::MalformedRequest(vec![
            "Item ID is required".to_string(),
            "Price must be greater than 0".to_string(),
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid request parameter(s). Fail reason: [Item ID is required, Price must be greater than 0]"
        );
    }

    #[test]
    fn should_render_capacity_messages() {
        let err: CartError = InvalidStateError::TotalItemCountExceeded.into();
        assert_eq!(err.to_string(), "There can be maximum 30 items in the cart");

        let err: CartError = InvalidStateError::TotalPriceExceeded.into();
        assert_eq!(err.to_string(), "Cart total can be maximum 500000");

        let err: CartError = InvalidStateError::ItemQuantityExceeded {
            kind: ItemKind::DigitalItem,
            max: 5,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Each digital_item can be added maximum of 5 times to the cart."
        );
    }

    #[test]
    fn should_name_current_cart_type_on_conflict() {
        let err = InvalidStateError::CartTypeConflict(CartType::Digital);

        assert_eq!(
            err.to_string(),
            "Cart cannot hold both digital and default items. Current cart is holding digital items."
        );
    }

    #[test]
    fn should_render_vas_eligibility_message() {
        let err = InvalidItemError::CategoryNotVasEligible(2002);

        assert_eq!(
            err.to_string(),
            "You can only add vasItem to default items with category ids: [1001, 3004]"
        );
    }

    #[test]
    fn should_name_both_prices_when_vas_price_too_high() {
        let err = InvalidItemError::VasPriceTooHigh {
            vas_price: BigDecimal::from(200),
            default_price: BigDecimal::from(100),
        };

        assert_eq!(
            err.to_string(),
            "VasItem price cannot be more than default item price. VasItem price: 200, Default item price: 100"
        );
    }

    #[test]
    fn should_render_not_found_message() {
        assert_eq!(
            CartError::ItemNotFound(125).to_string(),
            "There is no item with id: 125 in your cart"
        );
    }
}
