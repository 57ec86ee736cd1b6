use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::constants::{
    CATEGORY_DISCOUNT_PERCENTAGE, CATEGORY_PROMOTION_CATEGORY_ID, CATEGORY_PROMOTION_ID,
    SAME_SELLER_DISCOUNT_PERCENTAGE, SAME_SELLER_PROMOTION_ID, TOTAL_PRICE_DISCOUNTS,
    TOTAL_PRICE_PROMOTION_ID, TOTAL_PRICE_THRESHOLDS,
};
use super::item::{Item, ItemDetails};
use super::value_objects::PromotionId;

/// A promotion chosen for the cart and the amount it takes off.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    pub id: PromotionId,
    pub discount: BigDecimal,
}

/// Picks the single largest discount among the same-seller, category and
/// total-price promotions.
///
/// Candidates are compared with a strict `>` in that order, so the earlier one
/// wins a tie. A discount larger than `total_price` is discarded and no
/// promotion applies.
pub fn calculate_max_promotion(items: &[Item], total_price: &BigDecimal) -> Option<Promotion> {
    let candidates = [
        (SAME_SELLER_PROMOTION_ID, same_seller_discount(items, total_price)),
        (CATEGORY_PROMOTION_ID, category_discount(items)),
        (TOTAL_PRICE_PROMOTION_ID, total_price_discount(total_price)),
    ];

    let mut best: Option<Promotion> = None;
    for (id, discount) in candidates {
        let current = best
            .as_ref()
            .map(|promotion| promotion.discount.clone())
            .unwrap_or_else(BigDecimal::zero);
        if discount > current {
            best = Some(Promotion { id, discount });
        }
    }

    best.filter(|promotion| &promotion.discount <= total_price)
}

fn percentage_of(amount: &BigDecimal, percentage: i64) -> BigDecimal {
    amount * BigDecimal::from(percentage) / BigDecimal::from(100)
}

/// 10% of the total when at least two items are in the cart and all of them
/// come from one seller. VAS items never count towards the seller check.
fn same_seller_discount(items: &[Item], total_price: &BigDecimal) -> BigDecimal {
    let mut sellers = items.iter().map(|item| item.details().seller_id);
    let first = sellers.next();
    let single_seller = match first {
        Some(seller_id) => sellers.all(|other| other == seller_id),
        None => false,
    };

    if items.len() > 1 && single_seller {
        percentage_of(total_price, SAME_SELLER_DISCOUNT_PERCENTAGE)
    } else {
        BigDecimal::zero()
    }
}

/// 5% of the subtotal of items in the promoted category.
fn category_discount(items: &[Item]) -> BigDecimal {
    let subtotal: BigDecimal = items
        .iter()
        .flat_map(|item| {
            std::iter::once(item.details())
                .chain(item.vas_items().iter().map(|vas| &vas.details))
        })
        .filter(|details| details.category_id == CATEGORY_PROMOTION_CATEGORY_ID)
        .map(ItemDetails::line_total)
        .sum();

    percentage_of(&subtotal, CATEGORY_DISCOUNT_PERCENTAGE)
}

/// Fixed discount stepping up with each threshold crossed. Carts below the
/// lowest threshold still get the smallest discount.
fn total_price_discount(total_price: &BigDecimal) -> BigDecimal {
    let crossed = TOTAL_PRICE_THRESHOLDS
        .iter()
        .filter(|threshold| *total_price >= BigDecimal::from(**threshold))
        .count();

    TOTAL_PRICE_DISCOUNTS
        .get(crossed)
        .map(|discount| BigDecimal::from(*discount))
        .unwrap_or_else(BigDecimal::zero)
}
