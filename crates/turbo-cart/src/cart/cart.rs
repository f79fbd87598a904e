//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// A product entry in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier; unique within a cart.
    pub id: ProductId,
    /// Product name (copied on first add).
    pub name: String,
    /// Unit price (copied on first add).
    pub price: Money,
    /// Image URI.
    pub image: String,
    /// Units available, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item for a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            stock: product.stock,
            quantity: 1,
        }
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// Outcome of [`Cart::set_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// No item with that id.
    Unknown,
    /// The requested quantity was non-positive and the item was removed.
    Removed,
    /// The quantity is now exactly this value.
    Set(u32),
}

/// An ordered collection of line items, at most one per product id.
///
/// Serializes as a bare JSON array of line items. Deserializing rejects
/// arrays with repeated ids, zero quantities or negative prices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// An existing entry only has its quantity bumped; its name, price,
    /// image and stock stay as first recorded. Returns the new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.items.push(LineItem::from_product(product));
        1
    }

    /// Remove an item. Returns whether it was present.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Set an item's quantity to exactly `quantity`.
    ///
    /// Non-positive quantities remove the item. Quantities above `u32::MAX`
    /// are clamped.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> QuantityUpdate {
        let Some(pos) = self.items.iter().position(|i| &i.id == id) else {
            return QuantityUpdate::Unknown;
        };

        if quantity <= 0 {
            self.items.remove(pos);
            return QuantityUpdate::Removed;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        self.items[pos].quantity = quantity;
        QuantityUpdate::Set(quantity)
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get an item by id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Check whether an item is present.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price times quantity over all items.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.quantity == 0 {
                return Err(CartError::ZeroQuantity(item.id.clone()));
            }
            if item.price.is_negative() {
                return Err(CartError::NegativePrice(item.id.clone()));
            }
            if !seen.insert(&item.id) {
                return Err(CartError::DuplicateLineItem(item.id.clone()));
            }
        }
        Ok(Self { items })
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
