use std::sync::Arc;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use tokio::sync::Mutex;

use super::errors::{CartError, InvalidItemError};
use super::item::{DefaultItem, Item, ItemDetails, VasItem};
use super::promotion::Promotion;
use super::value_objects::{CartType, ItemId, ItemKind, PromotionId, Quantity};

/// The cart shared by the use cases. Holding the lock across a whole
/// operation serializes validate-then-mutate sequences on one cart.
pub type SharedCart = Arc<Mutex<Cart>>;

/// Shopping cart aggregate with running totals.
///
/// Totals are maintained incrementally on every mutation. VAS quantities are
/// counted once, through the default item they are attached to.
#[derive(Debug, Clone)]
pub struct Cart {
    items: Vec<Item>,
    item_count: Quantity,
    unique_item_count: i64,
    total_price: BigDecimal,
    applied_promotion: Option<Promotion>,
    cart_type: Option<CartType>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            item_count: 0,
            unique_item_count: 0,
            total_price: BigDecimal::zero(),
            applied_promotion: None,
            cart_type: None,
        }
    }

    pub fn shared(self) -> SharedCart {
        Arc::new(Mutex::new(self))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item_count(&self) -> Quantity {
        self.item_count
    }

    pub fn unique_item_count(&self) -> i64 {
        self.unique_item_count
    }

    pub fn total_price(&self) -> &BigDecimal {
        &self.total_price
    }

    /// `None` while the cart is empty.
    pub fn cart_type(&self) -> Option<CartType> {
        self.cart_type
    }

    pub fn applied_promotion(&self) -> Option<&Promotion> {
        self.applied_promotion.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds a top-level (default or digital) item by id.
    pub fn find_item(&self, item_id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id() == item_id)
    }

    pub fn find_default_item(&self, item_id: ItemId) -> Option<&DefaultItem> {
        self.items.iter().find_map(|item| match item {
            Item::Default(default_item) if default_item.details.item_id == item_id => {
                Some(default_item)
            }
            _ => None,
        })
    }

    fn find_default_item_mut(&mut self, item_id: ItemId) -> Option<&mut DefaultItem> {
        self.items.iter_mut().find_map(|item| match item {
            Item::Default(default_item) if default_item.details.item_id == item_id => {
                Some(default_item)
            }
            _ => None,
        })
    }

    /// Cumulative quantity of a VAS identity across every default item.
    pub fn vas_quantity(&self, vas_item_id: ItemId) -> Quantity {
        self.items
            .iter()
            .filter_map(|item| match item {
                Item::Default(default_item) => Some(default_item.vas_quantity(vas_item_id)),
                Item::Digital(_) => None,
            })
            .sum()
    }

    /// Adds a default or digital item, accumulating onto an existing entry
    /// with the same id.
    ///
    /// The stored unit price is the one of the first add. A repeat add at a
    /// different price still charges its own `price * quantity` to the total,
    /// so removing the entry later subtracts at the stored price and leaves
    /// the difference in `total_price` until the next reset.
    pub fn add_item(&mut self, item: Item) {
        let details = item.details();
        self.total_price += details.line_total();
        self.item_count += details.quantity;
        self.cart_type = Some(CartType::for_kind(item.kind()));

        let quantity = details.quantity;
        let item_id = item.item_id();
        match self
            .items
            .iter_mut()
            .find(|existing| existing.item_id() == item_id)
        {
            Some(existing) => existing.details_mut().quantity += quantity,
            None => {
                self.items.push(item);
                self.unique_item_count += 1;
            }
        }
    }

    /// Attaches a VAS item to the default item with `default_item_id`.
    pub fn add_vas_item(
        &mut self,
        default_item_id: ItemId,
        vas_item: VasItem,
    ) -> Result<(), CartError> {
        let line_total = vas_item.details.line_total();
        let quantity = vas_item.details.quantity;

        let default_item = self
            .find_default_item_mut(default_item_id)
            .ok_or(InvalidItemError::DefaultItemMissing(default_item_id))?;
        default_item.attach(vas_item);

        self.total_price += line_total;
        self.item_count += quantity;
        self.cart_type = Some(CartType::for_kind(ItemKind::VasItem));
        Ok(())
    }

    /// Removes the item with `item_id`.
    ///
    /// Top-level items are matched first; removing a default item also drops
    /// its attached VAS items from the totals. Otherwise the id is resolved as
    /// a VAS identity and detached from every default item carrying it.
    pub fn remove_item(&mut self, item_id: ItemId) -> Result<(), CartError> {
        if let Some(position) = self.items.iter().position(|item| item.item_id() == item_id) {
            let removed = self.items.remove(position);
            self.subtract(removed.details());
            self.unique_item_count -= 1;
            for vas_item in removed.vas_items() {
                self.subtract(&vas_item.details);
            }
        } else {
            let detached: Vec<ItemDetails> = self
                .items
                .iter_mut()
                .filter_map(|item| match item {
                    Item::Default(default_item) => Some(default_item),
                    Item::Digital(_) => None,
                })
                .flat_map(|default_item| {
                    let (removed, kept) = std::mem::take(&mut default_item.vas_items)
                        .into_iter()
                        .partition::<Vec<_>, _>(|vas| vas.details.item_id == item_id);
                    default_item.vas_items = kept;
                    removed.into_iter().map(|vas| vas.details)
                })
                .collect();

            if detached.is_empty() {
                return Err(CartError::ItemNotFound(item_id));
            }
            for details in &detached {
                self.subtract(details);
            }
        }

        if self.items.is_empty() {
            self.cart_type = None;
        }
        Ok(())
    }

    fn subtract(&mut self, details: &ItemDetails) {
        self.total_price -= details.line_total();
        self.item_count -= details.quantity;
    }

    /// Returns the cart to its empty initial state.
    pub fn reset(&mut self) {
        *self = Cart::new();
    }

    pub fn apply_promotion(&mut self, promotion: Option<Promotion>) {
        self.applied_promotion = promotion;
    }

    /// Read view of the cart with the applied promotion deducted.
    pub fn view(&self) -> CartView {
        let total_discount = self
            .applied_promotion
            .as_ref()
            .map(|promotion| promotion.discount.clone())
            .unwrap_or_else(BigDecimal::zero);

        CartView {
            items: self.items.clone(),
            total_price: &self.total_price - &total_discount,
            applied_promotion_id: self.applied_promotion.as_ref().map(|promotion| promotion.id),
            total_discount,
        }
    }
}

/// What `display` hands back to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Top-level items; VAS items appear nested under their default item.
    pub items: Vec<Item>,
    /// Cart total after discount.
    pub total_price: BigDecimal,
    pub applied_promotion_id: Option<PromotionId>,
    pub total_discount: BigDecimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::value_objects::{CategoryId, SellerId};

    fn details(
        item_id: ItemId,
        category_id: CategoryId,
        seller_id: SellerId,
        price: i64,
        quantity: Quantity,
    ) -> ItemDetails {
        ItemDetails {
            item_id,
            category_id,
            seller_id,
            price: BigDecimal::from(price),
            quantity,
        }
    }

    fn vas(vas_item_id: ItemId, price: i64, quantity: Quantity) -> VasItem {
        VasItem::new(details(vas_item_id, 3242, 5003, price, quantity))
    }

    #[test]
    fn should_keep_first_unit_price_when_readded_at_different_price() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 100, 1)));
        cart.add_item(Item::from_details(details(1, 1001, 10, 200, 1)));

        assert_eq!(cart.items()[0].details().price, BigDecimal::from(100));
        assert_eq!(cart.items()[0].details().quantity, 2);
        assert_eq!(cart.total_price(), &BigDecimal::from(300));

        cart.remove_item(1).unwrap();

        assert!(cart.is_empty());
        assert_eq!(cart.total_price(), &BigDecimal::from(100));

        cart.reset();

        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn should_start_empty_without_cart_type() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.unique_item_count(), 0);
        assert_eq!(cart.total_price(), &BigDecimal::zero());
        assert!(cart.cart_type().is_none());
        assert!(cart.applied_promotion().is_none());
    }

    #[test]
    fn should_accumulate_quantity_when_same_item_added_twice() {
        let mut cart = Cart::new();

        cart.add_item(Item::from_details(details(1, 1001, 10, 100, 2)));
        cart.add_item(Item::from_details(details(1, 1001, 10, 100, 2)));

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].details().quantity, 4);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total_price(), &BigDecimal::from(400));
    }

    #[test]
    fn should_track_digital_cart_type() {
        let mut cart = Cart::new();

        cart.add_item(Item::from_details(details(1, 7889, 10, 100, 1)));

        assert_eq!(cart.cart_type(), Some(CartType::Digital));
    }

    #[test]
    fn should_count_vas_quantity_once() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 1)));

        cart.add_vas_item(1, vas(12, 100, 2)).unwrap();

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_price(), &BigDecimal::from(1200));
        assert_eq!(cart.vas_quantity(12), 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn should_reject_vas_item_without_default_item() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 7889, 10, 1000, 1)));

        let result = cart.add_vas_item(1, vas(12, 100, 1));

        assert_eq!(
            result.unwrap_err(),
            CartError::InvalidItem(InvalidItemError::DefaultItemMissing(1))
        );
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn should_cascade_vas_items_when_default_item_removed() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 1)));
        cart.add_item(Item::from_details(details(2, 1001, 10, 500, 5)));
        cart.add_vas_item(1, vas(12, 100, 3)).unwrap();

        cart.remove_item(1).unwrap();

        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_price(), &BigDecimal::from(2500));
        assert_eq!(cart.vas_quantity(12), 0);
    }

    #[test]
    fn should_detach_vas_item_when_removed_by_vas_id() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 1)));
        cart.add_vas_item(1, vas(12, 100, 2)).unwrap();

        cart.remove_item(12).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total_price(), &BigDecimal::from(1000));
        assert!(cart.items()[0].vas_items().is_empty());
        assert_eq!(cart.cart_type(), Some(CartType::Default));
    }

    #[test]
    fn should_return_not_found_when_removing_unknown_id() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 1)));

        assert_eq!(cart.remove_item(125), Err(CartError::ItemNotFound(125)));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn should_unset_cart_type_when_last_item_removed() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 7889, 10, 100, 1)));

        cart.remove_item(1).unwrap();

        assert!(cart.is_empty());
        assert!(cart.cart_type().is_none());
    }

    #[test]
    fn should_clear_everything_on_reset() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 100, 3)));
        cart.apply_promotion(Some(Promotion {
            id: 1232,
            discount: BigDecimal::from(250),
        }));

        cart.reset();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_price(), &BigDecimal::zero());
        assert!(cart.applied_promotion().is_none());
        assert!(cart.cart_type().is_none());
    }

    #[test]
    fn should_deduct_discount_in_view() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 3)));
        cart.apply_promotion(Some(Promotion {
            id: 1232,
            discount: BigDecimal::from(250),
        }));

        let view = cart.view();

        assert_eq!(view.total_price, BigDecimal::from(2750));
        assert_eq!(view.total_discount, BigDecimal::from(250));
        assert_eq!(view.applied_promotion_id, Some(1232));
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn should_report_zero_discount_in_view_without_promotion() {
        let mut cart = Cart::new();
        cart.add_item(Item::from_details(details(1, 1001, 10, 1000, 1)));

        let view = cart.view();

        assert_eq!(view.total_price, BigDecimal::from(1000));
        assert_eq!(view.total_discount, BigDecimal::zero());
        assert!(view.applied_promotion_id.is_none());
    }
}
