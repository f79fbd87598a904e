//! Checkout command.

use anyhow::{Context as _, Result};
use chrono::Local;
use dialoguer::Confirm;

use super::CheckoutArgs;
use crate::binder::ViewBinder;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if store.cart().is_empty() {
        ctx.output.warn("Your cart is empty. Add a product before checking out.");
        return Ok(());
    }

    let binder = ViewBinder::new(ctx.output.clone(), store.config());
    if !ctx.output.is_json() {
        binder.render(&store.view());
    }

    // Confirmation
    if !args.yes && !ctx.output.is_json() {
        println!();
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Pay {}?",
                store.format_price(store.get_total())
            ))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let Some(ack) = store.checkout() else {
        ctx.output.warn("Your cart is empty.");
        return Ok(());
    };

    if ctx.output.is_json() {
        ctx.output.json(&ack);
    } else {
        println!();
        ctx.output.success(&ack.message());
        ctx.output.kv("Items", &ack.total_items.to_string());
        ctx.output.kv(
            "At",
            &ack.acknowledged_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
        );
    }

    if args.clear {
        store.clear().context("Failed to clear cart after checkout")?;
        ctx.output.info("Cart cleared.");
    }

    Ok(())
}
