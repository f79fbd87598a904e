//! Cart pricing calculations.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Subtotal above which shipping is free.
pub const FREE_SHIPPING_THRESHOLD: Money = Money::new(500_000);

/// Flat shipping fee charged at or below the threshold.
pub const FLAT_SHIPPING_FEE: Money = Money::new(15_000);

/// Flat-fee shipping waived above a subtotal threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Subtotals strictly greater than this ship free.
    pub free_threshold: Money,
    /// Fee charged otherwise.
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            free_threshold: FREE_SHIPPING_THRESHOLD,
            flat_fee: FLAT_SHIPPING_FEE,
        }
    }
}

impl ShippingPolicy {
    /// Create a policy.
    pub fn new(free_threshold: Money, flat_fee: Money) -> Self {
        Self {
            free_threshold,
            flat_fee,
        }
    }

    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal > self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }
}

/// Derived totals for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl CartSummary {
    /// Compute the totals of a cart under a shipping policy.
    pub fn compute(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.subtotal();
        let shipping = policy.shipping_for(subtotal);
        Self {
            total_items: cart.total_items(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Check if shipping was waived.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
