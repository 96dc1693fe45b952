//! Shopping cart of customized dishes awaiting submission.

use crate::models::OrderItem;

/// Ordered list of cart items. The same dish may appear several times, with the same or
/// different customizations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<OrderItem>,
}

impl Cart {
    /// An empty cart
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in the order they were added
    #[must_use]
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Number of items, counting duplicates
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the cart.
    pub fn add(&mut self, item: OrderItem) {
        self.items.push(item);
    }

    /// Removes the first item equal to `item` in every field, including customization.
    /// Returns whether anything was removed; duplicates after the first are kept.
    pub fn remove(&mut self, item: &OrderItem) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Empties the cart, handing back its items in order.
    pub fn take(&mut self) -> Vec<OrderItem> {
        std::mem::take(&mut self.items)
    }
}
