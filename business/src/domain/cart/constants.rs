//! Business limits and reserved identifiers of the cart.

use super::value_objects::{CategoryId, PromotionId, Quantity, SellerId};

pub const MAX_UNIQUE_ITEM_COUNT: i64 = 10;
pub const MAX_TOTAL_ITEM_COUNT: Quantity = 30;
pub const MAX_CART_TOTAL_PRICE: i64 = 500_000;

pub const DEFAULT_ITEM_MAX_QUANTITY: Quantity = 10;

pub const DIGITAL_ITEM_CATEGORY_ID: CategoryId = 7889;
pub const DIGITAL_ITEM_MAX_QUANTITY: Quantity = 5;

pub const VAS_ITEM_CATEGORY_ID: CategoryId = 3242;
pub const VAS_ITEM_SELLER_ID: SellerId = 5003;
pub const VAS_ITEM_MAX_QUANTITY: Quantity = 10;
/// Categories of default items that accept value-added services.
pub const VAS_ELIGIBLE_CATEGORY_IDS: [CategoryId; 2] = [1001, 3004];
pub const MAX_VAS_QUANTITY_PER_DEFAULT_ITEM: Quantity = 3;

pub const SAME_SELLER_PROMOTION_ID: PromotionId = 9909;
pub const SAME_SELLER_DISCOUNT_PERCENTAGE: i64 = 10;

pub const CATEGORY_PROMOTION_ID: PromotionId = 5676;
pub const CATEGORY_PROMOTION_CATEGORY_ID: CategoryId = 3003;
pub const CATEGORY_DISCOUNT_PERCENTAGE: i64 = 5;

pub const TOTAL_PRICE_PROMOTION_ID: PromotionId = 1232;
/// Ascending spend thresholds. Crossing threshold `i` grants `TOTAL_PRICE_DISCOUNTS[i + 1]`.
pub const TOTAL_PRICE_THRESHOLDS: [i64; 3] = [5_000, 10_000, 50_000];
pub const TOTAL_PRICE_DISCOUNTS: [i64; 4] = [250, 500, 1_000, 2_000];
