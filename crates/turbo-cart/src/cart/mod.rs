//! Shopping cart module.
//!
//! Contains the cart, its line items, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, LineItem, QuantityUpdate};
pub use pricing::{CartSummary, ShippingPolicy, FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD};
