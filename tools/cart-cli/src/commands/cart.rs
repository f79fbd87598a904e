//! Cart mutation and display commands.

use anyhow::{Context as _, Result};
use turbo_cache::FileStore;
use turbo_cart::{CartStore, ProductId};

use super::{ItemArgs, SetArgs};
use crate::binder::ViewBinder;
use crate::context::Context;

/// Open the store with the cart view bound to its change notifications.
fn bound_store(ctx: &Context) -> Result<CartStore<FileStore>> {
    let mut store = ctx.open_store()?;
    let binder = ViewBinder::new(ctx.output.clone(), store.config());
    binder.attach(&mut store);
    Ok(store)
}

/// Add one unit of a catalog product.
pub fn add(args: ItemArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(args.id);
    let product = catalog
        .require(&id)
        .context("Run `turbo-cart catalog` to list product ids")?;

    let mut store = bound_store(ctx)?;
    store
        .add_item(product)
        .with_context(|| format!("Failed to save cart after adding {}", id))?;

    ctx.output.toast(&format!("{} added to cart", product.name));
    Ok(())
}

/// Remove a line item.
pub fn remove(args: ItemArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let mut store = bound_store(ctx)?;
    if !store.cart().contains(&id) {
        ctx.output.warn(&format!("{} is not in the cart", id));
    }
    store
        .remove_item(&id)
        .with_context(|| format!("Failed to save cart after removing {}", id))
}

/// Increase a line item's quantity by one.
pub fn increase(args: ItemArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let mut store = bound_store(ctx)?;
    if !warn_if_absent(&store, &id, ctx) {
        return Ok(());
    }
    store
        .increase_quantity(&id)
        .with_context(|| format!("Failed to save cart after updating {}", id))
}

/// Decrease a line item's quantity by one.
pub fn decrease(args: ItemArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let mut store = bound_store(ctx)?;
    if !warn_if_absent(&store, &id, ctx) {
        return Ok(());
    }
    store
        .decrease_quantity(&id)
        .with_context(|| format!("Failed to save cart after updating {}", id))
}

/// Set a line item's quantity.
pub fn set(args: SetArgs, ctx: &Context) -> Result<()> {
    let id = ProductId::new(args.id);
    let mut store = bound_store(ctx)?;
    if !warn_if_absent(&store, &id, ctx) {
        return Ok(());
    }
    store
        .update_quantity(&id, args.quantity)
        .with_context(|| format!("Failed to save cart after updating {}", id))
}

/// Show the cart.
pub fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let binder = ViewBinder::new(ctx.output.clone(), store.config());
    binder.render(&store.view());
    Ok(())
}

/// Remove every line item.
pub fn clear(ctx: &Context) -> Result<()> {
    let mut store = bound_store(ctx)?;
    store.clear().context("Failed to save cleared cart")
}

/// Quantity changes on absent items are ignored by the store and draw
/// nothing, so say so. Returns whether the item is present.
fn warn_if_absent(store: &CartStore<FileStore>, id: &ProductId, ctx: &Context) -> bool {
    if store.cart().contains(id) {
        return true;
    }
    ctx.output.warn(&format!("{} is not in the cart", id));
    false
}
