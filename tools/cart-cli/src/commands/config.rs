//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES, DATA_DIR_ENV};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_paths(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    // Store section
    ctx.output.info("");
    ctx.output.info("[store]");
    if let Some(ref dir) = ctx.config.store.dir {
        ctx.output.kv("dir", &dir.display().to_string());
    }
    ctx.output.kv("slot", &ctx.config.store.slot);

    // Pricing section
    let pricing = &ctx.config.pricing;
    let format = pricing.price_format();
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv(
        "free_shipping_threshold",
        &format.format(turbo_cart::Money::new(pricing.free_shipping_threshold)),
    );
    ctx.output.kv(
        "flat_shipping_fee",
        &format.format(turbo_cart::Money::new(pricing.flat_shipping_fee)),
    );
    ctx.output.kv("locale", &pricing.locale);
    ctx.output.kv("symbol", &format.symbol);

    // Catalog
    ctx.output.info("");
    ctx.output.info("[catalog]");
    for product in &ctx.config.catalog.products {
        ctx.output.list_item(&format!("{} ({})", product.name, product.id));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn show_paths(ctx: &Context) -> Result<()> {
    let config = ctx.config_path.as_ref().map(|path| path.display().to_string());
    let data_dir = ctx.data_dir();
    let snapshot = data_dir.join(format!("{}.json", ctx.config.store.slot));

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config": config,
            "data_dir": data_dir,
            "snapshot": snapshot,
        }));
        return Ok(());
    }

    ctx.output.kv("config", config.as_deref().unwrap_or("(defaults)"));
    ctx.output.kv("data_dir", &data_dir.display().to_string());
    ctx.output.kv("snapshot", &snapshot.display().to_string());
    if std::env::var_os(DATA_DIR_ENV).is_some() {
        ctx.output.debug(&format!("data_dir taken from {}", DATA_DIR_ENV));
    }

    Ok(())
}
