//! Binds cart change notifications to terminal rendering.

use console::style;
use turbo_cache::KvStore;
use turbo_cart::{
    CartEvent, CartStore, CartView, ListenerId, PriceFormat, ShippingPolicy, StoreConfig,
};

use crate::output::{count_badge, Output};

const ROW_WIDTHS: [usize; 4] = [24, 12, 9, 16];

/// Re-renders the cart whenever the store reports a change.
#[derive(Debug, Clone)]
pub struct ViewBinder {
    output: Output,
    shipping: ShippingPolicy,
    format: PriceFormat,
}

impl ViewBinder {
    /// Create a binder rendering with the store's pricing settings.
    pub fn new(output: Output, config: &StoreConfig) -> Self {
        Self {
            output,
            shipping: config.shipping,
            format: config.format.clone(),
        }
    }

    /// Subscribe to `store`; every change redraws the cart.
    pub fn attach<S: KvStore>(self, store: &mut CartStore<S>) -> ListenerId {
        store.subscribe(move |event, cart| {
            self.output.debug(&describe(event));
            let view = CartView::render(cart, &self.shipping, &self.format);
            self.render(&view);
        })
    }

    /// Draw a cart view.
    pub fn render(&self, view: &CartView) {
        if self.output.is_json() {
            self.output.json(view);
            return;
        }

        self.output.header(&format!("Cart {}", count_badge(view.count_badge)));

        if view.is_empty {
            self.output.info("Your cart is empty.");
        } else {
            println!();
            self.output.table_row(&["PRODUCT", "PRICE", "QTY", "AVAILABILITY"], &ROW_WIDTHS);
            for row in &view.rows {
                let quantity = format!("− {} +", row.quantity);
                self.output.table_row(
                    &[&row.name, &row.price_text, &quantity, &row.availability_text],
                    &ROW_WIDTHS,
                );
                self.output.debug(&format!("{} ({})", row.id, row.image));
            }
        }

        println!();
        self.output.kv("Subtotal", &view.subtotal_text);
        self.output.kv("Shipping", &view.shipping_text);
        self.output.kv("Total", &style(&view.total_text).bold().to_string());

        let checkout = if view.checkout_enabled {
            style("ready").green().to_string()
        } else {
            style("disabled").dim().to_string()
        };
        self.output.kv("Checkout", &checkout);
    }
}

/// One-line description of a cart event.
pub fn describe(event: &CartEvent) -> String {
    match event {
        CartEvent::Reloaded => "cart reloaded from storage".to_string(),
        CartEvent::ItemAdded { id, quantity } => format!("added {} (now {})", id, quantity),
        CartEvent::ItemRemoved { id, existed: true } => format!("removed {}", id),
        CartEvent::ItemRemoved { id, existed: false } => format!("{} was not in the cart", id),
        CartEvent::QuantityChanged { id, quantity } => {
            format!("{} quantity set to {}", id, quantity)
        }
        CartEvent::Cleared => "cart cleared".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use turbo_cache::MemoryStore;
    use turbo_cart::{Money, Product, ProductId};

    #[test]
    fn test_describe_events() {
        let id = ProductId::new("a");
        assert_eq!(
            describe(&CartEvent::ItemAdded {
                id: id.clone(),
                quantity: 2
            }),
            "added a (now 2)"
        );
        assert_eq!(
            describe(&CartEvent::ItemRemoved { id, existed: false }),
            "a was not in the cart"
        );
    }

    #[test]
    fn test_attach_registers_listener() {
        let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
        let binder = ViewBinder::new(Output::new(false, true), store.config());
        let id = binder.attach(&mut store);

        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        store.subscribe(move |_, _| counter.set(counter.get() + 1));

        store
            .add_item(&Product::new("a", "A", Money::new(1), "a.jpg"))
            .unwrap();
        assert_eq!(calls.get(), 1);
        assert!(store.unsubscribe(id));
    }
}
