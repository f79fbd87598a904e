//! Client-side checkout acknowledgment.
//!
//! Checkout does not reserve stock, charge anything or change the cart. It
//! only confirms the total the customer is about to pay.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cart::{Cart, CartSummary, ShippingPolicy};
use crate::money::{Money, PriceFormat};

/// Acknowledgment of a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutAck {
    /// Amount due, shipping included.
    pub total: Money,
    /// `total` rendered for display.
    pub total_text: String,
    /// Number of units purchased.
    pub total_items: u64,
    /// When the checkout was acknowledged.
    pub acknowledged_at: DateTime<Utc>,
}

impl CheckoutAck {
    /// Acknowledge a checkout of `cart`.
    ///
    /// Returns `None` for an empty cart.
    pub fn for_cart(cart: &Cart, policy: &ShippingPolicy, format: &PriceFormat) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }

        let summary = CartSummary::compute(cart, policy);
        Some(Self {
            total: summary.total,
            total_text: format.format(summary.total),
            total_items: summary.total_items,
            acknowledged_at: Utc::now(),
        })
    }

    /// Thank-you line shown to the customer.
    pub fn message(&self) -> String {
        format!("Thanks for your purchase! Total: {}", self.total_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_empty_cart_has_no_checkout() {
        let ack = CheckoutAck::for_cart(
            &Cart::new(),
            &ShippingPolicy::default(),
            &PriceFormat::es_co(),
        );
        assert!(ack.is_none());
    }

    #[test]
    fn test_checkout_total_includes_shipping() {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", Money::new(10000), "a.jpg"));

        let ack = CheckoutAck::for_cart(&cart, &ShippingPolicy::default(), &PriceFormat::es_co())
            .unwrap();

        assert_eq!(ack.total, Money::new(25000));
        assert_eq!(ack.total_items, 1);
        assert_eq!(ack.message(), "Thanks for your purchase! Total: $ 25.000");
    }
}
