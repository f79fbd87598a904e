//! Catalog listing.

use anyhow::Result;
use serde::Serialize;

use crate::context::Context;

/// A catalog entry as printed in JSON mode.
#[derive(Serialize)]
struct CatalogEntry<'a> {
    id: &'a str,
    name: &'a str,
    price: i64,
    price_text: String,
    stock: Option<u32>,
    in_cart: u32,
}

/// Run the catalog command.
pub fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let store = ctx.open_store()?;

    let entries: Vec<CatalogEntry<'_>> = catalog
        .products()
        .iter()
        .map(|product| CatalogEntry {
            id: product.id.as_str(),
            name: &product.name,
            price: product.price.amount(),
            price_text: store.format_price(product.price),
            stock: product.stock,
            in_cart: store.cart().get(&product.id).map_or(0, |item| item.quantity),
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&entries);
        return Ok(());
    }

    ctx.output.header("Catalog");

    if entries.is_empty() {
        ctx.output.info("No products configured.");
        return Ok(());
    }

    println!();
    let widths = [26, 24, 12, 8];
    ctx.output.table_row(&["ID", "PRODUCT", "PRICE", "IN CART"], &widths);
    for entry in &entries {
        let in_cart = if entry.in_cart == 0 {
            "-".to_string()
        } else {
            entry.in_cart.to_string()
        };
        ctx.output.table_row(&[entry.id, entry.name, &entry.price_text, &in_cart], &widths);
    }

    println!();
    ctx.output.info("Run `turbo-cart add <id>` to put a product in the cart.");

    Ok(())
}
