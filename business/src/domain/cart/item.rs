use bigdecimal::BigDecimal;

use super::value_objects::{CategoryId, ItemId, ItemKind, Quantity, SellerId};

/// Attributes shared by every kind of item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub item_id: ItemId,
    pub category_id: CategoryId,
    pub seller_id: SellerId,
    /// Unit price.
    pub price: BigDecimal,
    pub quantity: Quantity,
}

impl ItemDetails {
    /// Price multiplied by quantity.
    pub fn line_total(&self) -> BigDecimal {
        &self.price * BigDecimal::from(self.quantity)
    }
}

/// A value-added service attached to a default item.
///
/// Its `item_id` is the VAS identity, which never collides with the id of the
/// default item owning it.
#[derive(Debug, Clone, PartialEq)]
pub struct VasItem {
    pub details: ItemDetails,
}

impl VasItem {
    pub fn new(details: ItemDetails) -> Self {
        Self { details }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultItem {
    pub details: ItemDetails,
    pub vas_items: Vec<VasItem>,
}

impl DefaultItem {
    pub fn new(details: ItemDetails) -> Self {
        Self {
            details,
            vas_items: Vec::new(),
        }
    }

    /// Quantity of the attached VAS item with the given id, zero when absent.
    pub fn vas_quantity(&self, vas_item_id: ItemId) -> Quantity {
        self.vas_items
            .iter()
            .filter(|vas| vas.details.item_id == vas_item_id)
            .map(|vas| vas.details.quantity)
            .sum()
    }

    /// Accumulates onto an already attached VAS item or attaches a new one.
    pub fn attach(&mut self, vas_item: VasItem) {
        match self
            .vas_items
            .iter_mut()
            .find(|vas| vas.details.item_id == vas_item.details.item_id)
        {
            Some(existing) => existing.details.quantity += vas_item.details.quantity,
            None => self.vas_items.push(vas_item),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DigitalItem {
    pub details: ItemDetails,
}

/// A top-level cart entry. VAS items are never top-level; they live inside
/// the [`DefaultItem`] they belong to.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Default(DefaultItem),
    Digital(DigitalItem),
}

impl Item {
    /// Builds the item variant matching the category of `details`.
    ///
    /// VAS categories are rejected by the validator before conversion, so they
    /// fall through to a default item here.
    pub fn from_details(details: ItemDetails) -> Self {
        match ItemKind::for_category(details.category_id) {
            ItemKind::DigitalItem => Item::Digital(DigitalItem { details }),
            ItemKind::DefaultItem | ItemKind::VasItem => Item::Default(DefaultItem::new(details)),
        }
    }

    pub fn details(&self) -> &ItemDetails {
        match self {
            Item::Default(item) => &item.details,
            Item::Digital(item) => &item.details,
        }
    }

    pub fn details_mut(&mut self) -> &mut ItemDetails {
        match self {
            Item::Default(item) => &mut item.details,
            Item::Digital(item) => &mut item.details,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Default(_) => ItemKind::DefaultItem,
            Item::Digital(_) => ItemKind::DigitalItem,
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.details().item_id
    }

    pub fn vas_items(&self) -> &[VasItem] {
        match self {
            Item::Default(item) => &item.vas_items,
            Item::Digital(_) => &[],
        }
    }
}
