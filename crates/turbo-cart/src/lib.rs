//! Shopping cart state, pricing and snapshot persistence.
//!
//! This crate provides the cart core of turbo-cart:
//!
//! - **Cart**: line items keyed by product id, quantities, subtotal
//! - **Pricing**: flat shipping waived above a threshold, locale-grouped prices
//! - **Store**: a [`CartStore`] that persists every change and notifies listeners
//! - **View**: a [`CartView`] render model for whatever surface draws the cart
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cart::prelude::*;
//! use turbo_cache::MemoryStore;
//!
//! let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
//!
//! let cuy = Product::new("cuy-premium-001", "Cuyes Premium", Money::new(40000), "cuyes.jpg");
//! store.add_item(&cuy)?;
//! store.add_item(&cuy)?;
//!
//! assert_eq!(store.get_total_items(), 2);
//! println!("Total: {}", store.format_price(store.get_total())); // "$ 95.000"
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod store;
pub mod view;

pub use cart::{Cart, CartSummary, LineItem, ShippingPolicy};
pub use catalog::{Catalog, Product};
pub use checkout::CheckoutAck;
pub use error::CartError;
pub use ids::ProductId;
pub use money::{Money, PriceFormat};
pub use store::{CartEvent, CartStore, ListenerId, StoreConfig, DEFAULT_SLOT};
pub use view::{CartRow, CartView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CartError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Money, PriceFormat};

    // Cart
    pub use crate::cart::{
        Cart, CartSummary, LineItem, QuantityUpdate, ShippingPolicy, FLAT_SHIPPING_FEE,
        FREE_SHIPPING_THRESHOLD,
    };

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Store
    pub use crate::checkout::CheckoutAck;
    pub use crate::store::{CartEvent, CartStore, ListenerId, StoreConfig, DEFAULT_SLOT};
    pub use crate::view::{CartRow, CartView};
}
