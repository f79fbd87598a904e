//! Persisted cart store with change notifications.
//!
//! [`CartStore`] owns the cart for one session. Every mutation rewrites the
//! whole snapshot through the injected [`KvStore`] and then notifies
//! subscribers, which is how view layers learn they need to re-render.

use std::fmt;

use turbo_cache::{Cache, KvStore};

use crate::cart::{Cart, CartSummary, QuantityUpdate, ShippingPolicy};
use crate::catalog::Product;
use crate::checkout::CheckoutAck;
use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::{Money, PriceFormat};
use crate::view::CartView;

/// Storage slot holding the cart snapshot.
pub const DEFAULT_SLOT: &str = "shoppingCart";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage key of the snapshot.
    pub slot: String,
    /// Shipping rules.
    pub shipping: ShippingPolicy,
    /// Price rendering.
    pub format: PriceFormat,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            shipping: ShippingPolicy::default(),
            format: PriceFormat::default(),
        }
    }
}

impl StoreConfig {
    /// Set the storage slot.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self
    }

    /// Set the shipping policy.
    pub fn with_shipping(mut self, shipping: ShippingPolicy) -> Self {
        self.shipping = shipping;
        self
    }

    /// Set the price format.
    pub fn with_format(mut self, format: PriceFormat) -> Self {
        self.format = format;
        self
    }
}

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart was replaced by the persisted snapshot.
    Reloaded,
    /// One unit of a product was added.
    ItemAdded { id: ProductId, quantity: u32 },
    /// A remove was requested; `existed` tells whether anything was deleted.
    ItemRemoved { id: ProductId, existed: bool },
    /// An item's quantity was set.
    QuantityChanged { id: ProductId, quantity: u32 },
    /// All items were removed.
    Cleared,
}

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Cart state bound to a snapshot store.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::open(MemoryStore::new(), StoreConfig::default());
/// store.subscribe(|event, cart| println!("{event:?}: {} items", cart.total_items()));
///
/// store.add_item(&product)?;
/// println!("Total: {}", store.format_price(store.get_total()));
/// ```
pub struct CartStore<S> {
    cart: Cart,
    cache: Cache<S>,
    config: StoreConfig,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<S: KvStore> CartStore<S> {
    /// Create a store and load the persisted cart.
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let cache = Cache::new(storage);
        let cart = read_snapshot(&cache, &config.slot);
        tracing::debug!(
            slot = %config.slot,
            items = cart.len(),
            "cart store opened"
        );
        Self {
            cart,
            cache,
            config,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Read the persisted snapshot.
    ///
    /// Missing, unreadable or malformed snapshots yield an empty cart. The
    /// in-memory cart is left untouched; see [`CartStore::reload`].
    pub fn load(&self) -> Cart {
        read_snapshot(&self.cache, &self.config.slot)
    }

    /// Replace the in-memory cart with the persisted snapshot.
    pub fn reload(&mut self) {
        self.cart = self.load();
        self.notify(&CartEvent::Reloaded);
    }

    /// Add one unit of `product`.
    ///
    /// A product already in the cart only gets its quantity bumped.
    pub fn add_item(&mut self, product: &Product) -> Result<(), CartError> {
        let quantity = self.cart.add(product);
        tracing::debug!(product = %product.id, quantity, "item added");
        self.commit(CartEvent::ItemAdded {
            id: product.id.clone(),
            quantity,
        })
    }

    /// Remove an item.
    ///
    /// Removing an absent id changes nothing but still persists and
    /// notifies.
    pub fn remove_item(&mut self, id: &ProductId) -> Result<(), CartError> {
        let existed = self.cart.remove(id);
        tracing::debug!(product = %id, existed, "item removed");
        self.commit(CartEvent::ItemRemoved {
            id: id.clone(),
            existed,
        })
    }

    /// Set an item's quantity to exactly `quantity`.
    ///
    /// Unknown ids are ignored without persisting. A non-positive quantity
    /// behaves exactly like [`CartStore::remove_item`].
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        match self.cart.set_quantity(id, quantity) {
            QuantityUpdate::Unknown => {
                tracing::debug!(product = %id, "quantity update for unknown item ignored");
                Ok(())
            }
            QuantityUpdate::Removed => {
                tracing::debug!(product = %id, existed = true, "item removed");
                self.commit(CartEvent::ItemRemoved {
                    id: id.clone(),
                    existed: true,
                })
            }
            QuantityUpdate::Set(quantity) => {
                tracing::debug!(product = %id, quantity, "quantity updated");
                self.commit(CartEvent::QuantityChanged {
                    id: id.clone(),
                    quantity,
                })
            }
        }
    }

    /// Increase an item's quantity by one.
    pub fn increase_quantity(&mut self, id: &ProductId) -> Result<(), CartError> {
        match self.cart.get(id) {
            Some(item) => {
                let next = i64::from(item.quantity) + 1;
                self.update_quantity(id, next)
            }
            None => Ok(()),
        }
    }

    /// Decrease an item's quantity by one, removing it at zero.
    pub fn decrease_quantity(&mut self, id: &ProductId) -> Result<(), CartError> {
        match self.cart.get(id) {
            Some(item) => {
                let next = i64::from(item.quantity) - 1;
                self.update_quantity(id, next)
            }
            None => Ok(()),
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) -> Result<(), CartError> {
        self.cart.clear();
        tracing::debug!("cart cleared");
        self.commit(CartEvent::Cleared)
    }

    /// Sum of all quantities.
    pub fn get_total_items(&self) -> u64 {
        self.cart.total_items()
    }

    /// Sum of price times quantity.
    pub fn get_subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Shipping charged for the current subtotal.
    pub fn get_shipping(&self) -> Money {
        self.config.shipping.shipping_for(self.get_subtotal())
    }

    /// Subtotal plus shipping.
    pub fn get_total(&self) -> Money {
        self.get_subtotal() + self.get_shipping()
    }

    /// Render an amount with the configured price format.
    pub fn format_price(&self, amount: Money) -> String {
        self.config.format.format(amount)
    }

    /// All derived totals at once.
    pub fn summary(&self) -> CartSummary {
        CartSummary::compute(&self.cart, &self.config.shipping)
    }

    /// Render model of the current cart.
    pub fn view(&self) -> CartView {
        CartView::render(&self.cart, &self.config.shipping, &self.config.format)
    }

    /// Acknowledge a checkout. `None` when the cart is empty.
    pub fn checkout(&self) -> Option<CheckoutAck> {
        let ack = CheckoutAck::for_cart(&self.cart, &self.config.shipping, &self.config.format);
        if let Some(ref ack) = ack {
            tracing::info!(
                total = ack.total.amount(),
                items = ack.total_items,
                "checkout acknowledged"
            );
        }
        ack
    }

    /// Register a change listener.
    ///
    /// Listeners run after each mutation, in registration order, with the
    /// event and the updated cart.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() < len_before
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The underlying storage.
    pub fn storage(&self) -> &S {
        self.cache.store()
    }

    /// Mutable access to the underlying storage.
    ///
    /// Writes made here are not seen until [`CartStore::reload`].
    pub fn storage_mut(&mut self) -> &mut S {
        self.cache.store_mut()
    }

    /// Consume the store and return its storage.
    pub fn into_storage(self) -> S {
        self.cache.into_inner()
    }

    /// Persist the snapshot, then notify.
    ///
    /// Listeners run even when the write fails, since the in-memory cart has
    /// already changed.
    fn commit(&mut self, event: CartEvent) -> Result<(), CartError> {
        let persisted = self.cache.set(&self.config.slot, &self.cart);
        if let Err(ref e) = persisted {
            tracing::error!(slot = %self.config.slot, error = %e, "failed to persist cart");
        }
        self.notify(&event);
        persisted.map_err(CartError::from)
    }

    fn notify(&mut self, event: &CartEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event, &self.cart);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("cache", &self.cache)
            .field("config", &self.config)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn read_snapshot<S: KvStore>(cache: &Cache<S>, slot: &str) -> Cart {
    match cache.get::<Cart>(slot) {
        Ok(Some(cart)) => cart,
        Ok(None) => {
            tracing::debug!(slot, "no cart snapshot, starting empty");
            Cart::new()
        }
        Err(e) => {
            tracing::warn!(
                slot,
                malformed = e.is_malformed(),
                error = %e,
                "discarding cart snapshot, starting empty"
            );
            Cart::new()
        }
    }
}
