use super::constants::{
    DEFAULT_ITEM_MAX_QUANTITY, DIGITAL_ITEM_CATEGORY_ID, DIGITAL_ITEM_MAX_QUANTITY,
    VAS_ITEM_CATEGORY_ID, VAS_ITEM_MAX_QUANTITY,
};

pub type ItemId = i64;
pub type CategoryId = i64;
pub type SellerId = i64;
pub type Quantity = i64;
pub type PromotionId = i64;

/// The three kinds of purchasable units a cart can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    DefaultItem,
    DigitalItem,
    VasItem,
}

impl ItemKind {
    /// Classifies an item by its category id.
    pub fn for_category(category_id: CategoryId) -> Self {
        match category_id {
            DIGITAL_ITEM_CATEGORY_ID => ItemKind::DigitalItem,
            VAS_ITEM_CATEGORY_ID => ItemKind::VasItem,
            _ => ItemKind::DefaultItem,
        }
    }

    /// Maximum cumulative quantity of a single item identity of this kind.
    pub fn max_quantity(&self) -> Quantity {
        match self {
            ItemKind::DefaultItem => DEFAULT_ITEM_MAX_QUANTITY,
            ItemKind::DigitalItem => DIGITAL_ITEM_MAX_QUANTITY,
            ItemKind::VasItem => VAS_ITEM_MAX_QUANTITY,
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::DefaultItem => write!(f, "default_item"),
            ItemKind::DigitalItem => write!(f, "digital_item"),
            ItemKind::VasItem => write!(f, "vas_item"),
        }
    }
}

/// What a non-empty cart currently holds. A cart never mixes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartType {
    Digital,
    Default,
}

impl CartType {
    pub fn for_kind(kind: ItemKind) -> Self {
        match kind {
            ItemKind::DigitalItem => CartType::Digital,
            ItemKind::DefaultItem | ItemKind::VasItem => CartType::Default,
        }
    }

    pub fn accepts(&self, kind: ItemKind) -> bool {
        *self == CartType::for_kind(kind)
    }
}

impl std::fmt::Display for CartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartType::Digital => write!(f, "digital"),
            CartType::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_item_kind_by_category() {
        assert_eq!(ItemKind::for_category(7889), ItemKind::DigitalItem);
        assert_eq!(ItemKind::for_category(3242), ItemKind::VasItem);
        assert_eq!(ItemKind::for_category(1001), ItemKind::DefaultItem);
    }

    #[test]
    fn should_expose_per_kind_quantity_caps() {
        assert_eq!(ItemKind::DefaultItem.max_quantity(), 10);
        assert_eq!(ItemKind::DigitalItem.max_quantity(), 5);
        assert_eq!(ItemKind::VasItem.max_quantity(), 10);
    }

    #[test]
    fn should_display_item_kind_in_snake_case() {
        assert_eq!(ItemKind::DigitalItem.to_string(), "digital_item");
        assert_eq!(ItemKind::VasItem.to_string(), "vas_item");
    }

    #[test]
    fn should_treat_vas_items_as_default_cart_content() {
        assert!(CartType::Default.accepts(ItemKind::VasItem));
        assert!(CartType::Default.accepts(ItemKind::DefaultItem));
        assert!(!CartType::Default.accepts(ItemKind::DigitalItem));
        assert!(CartType::Digital.accepts(ItemKind::DigitalItem));
    }
}
