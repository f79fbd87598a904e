//! Render model for a cart.
//!
//! [`CartView`] is everything a rendering surface needs to draw the cart:
//! the header badge, one row per line item, the empty-state switch and the
//! summary block. It holds display strings only, so surfaces don't need to
//! know about pricing rules.

use crate::cart::{Cart, CartSummary, LineItem, ShippingPolicy};
use crate::ids::ProductId;
use crate::money::PriceFormat;
use serde::Serialize;

/// Stock shown when a line item has no (or zero) stock figure.
pub const DEFAULT_AVAILABILITY: u32 = 10;

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRow {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price_text: String,
    pub quantity: u32,
    pub availability_text: String,
}

impl CartRow {
    fn render(item: &LineItem, format: &PriceFormat) -> Self {
        let available = item
            .stock
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_AVAILABILITY);
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            image: item.image.clone(),
            price_text: format.format(item.price),
            quantity: item.quantity,
            availability_text: format!("+{available} available"),
        }
    }
}

/// Rendered state of the whole cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    /// Header count; `None` hides the badge.
    pub count_badge: Option<u64>,
    pub rows: Vec<CartRow>,
    /// Show the empty-state placeholder instead of rows.
    pub is_empty: bool,
    pub subtotal_text: String,
    pub shipping_text: String,
    pub total_text: String,
    pub checkout_enabled: bool,
}

impl CartView {
    /// Render a cart.
    pub fn render(cart: &Cart, policy: &ShippingPolicy, format: &PriceFormat) -> Self {
        let summary = CartSummary::compute(cart, policy);
        Self {
            count_badge: (summary.total_items > 0).then_some(summary.total_items),
            rows: cart
                .items()
                .iter()
                .map(|item| CartRow::render(item, format))
                .collect(),
            is_empty: cart.is_empty(),
            subtotal_text: format.format(summary.subtotal),
            shipping_text: format.format(summary.shipping),
            total_text: format.format(summary.total),
            checkout_enabled: !cart.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::money::Money;

    #[test]
    fn test_empty_view() {
        let view = CartView::render(
            &Cart::new(),
            &ShippingPolicy::default(),
            &PriceFormat::es_co(),
        );

        assert_eq!(view.count_badge, None);
        assert!(view.rows.is_empty());
        assert!(view.is_empty);
        assert!(!view.checkout_enabled);
        assert_eq!(view.subtotal_text, "$ 0");
        assert_eq!(view.shipping_text, "$ 15.000");
        assert_eq!(view.total_text, "$ 15.000");
    }

    #[test]
    fn test_view_rows_and_summary() {
        let mut cart = Cart::new();
        let cuy = Product::new("cuy", "Cuyes Premium", Money::new(40000), "cuyes.jpg")
            .with_stock(15);
        cart.add(&cuy);
        cart.add(&cuy);

        let view = CartView::render(&cart, &ShippingPolicy::default(), &PriceFormat::es_co());

        assert_eq!(view.count_badge, Some(2));
        assert!(view.checkout_enabled);
        assert_eq!(view.rows.len(), 1);

        let row = &view.rows[0];
        assert_eq!(row.price_text, "$ 40.000");
        assert_eq!(row.quantity, 2);
        assert_eq!(row.availability_text, "+15 available");

        assert_eq!(view.subtotal_text, "$ 80.000");
        assert_eq!(view.total_text, "$ 95.000");
    }

    #[test]
    fn test_default_availability() {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", Money::new(1), "a.jpg"));
        cart.add(&Product::new("b", "B", Money::new(1), "b.jpg").with_stock(0));

        let view = CartView::render(&cart, &ShippingPolicy::default(), &PriceFormat::es_co());
        assert_eq!(view.rows[0].availability_text, "+10 available");
        assert_eq!(view.rows[1].availability_text, "+10 available");
    }
}
