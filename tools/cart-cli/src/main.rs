//! turbo-cart - Terminal storefront for the shopping cart.
//!
//! Commands:
//! - `turbo-cart catalog` - List products
//! - `turbo-cart add` - Add a product to the cart
//! - `turbo-cart remove` - Remove a line item
//! - `turbo-cart increase` / `decrease` / `set` - Change a quantity
//! - `turbo-cart show` - Show the cart
//! - `turbo-cart checkout` - Acknowledge the order total
//! - `turbo-cart clear` - Empty the cart
//! - `turbo-cart config` - Manage configuration

mod binder;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckoutArgs, ConfigArgs, ItemArgs, SetArgs};

/// turbo-cart - Browse the catalog and manage a persistent shopping cart
#[derive(Parser)]
#[command(name = "turbo-cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the products on offer
    Catalog,

    /// Add a product to the cart
    Add(ItemArgs),

    /// Remove a line item from the cart
    Remove(ItemArgs),

    /// Increase a line item's quantity by one
    Increase(ItemArgs),

    /// Decrease a line item's quantity by one
    Decrease(ItemArgs),

    /// Set a line item's quantity (zero or less removes it)
    Set(SetArgs),

    /// Show the cart
    Show,

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Remove every line item
    Clear,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog => commands::catalog::run(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Increase(args) => commands::cart::increase(args, &ctx),
        Commands::Decrease(args) => commands::cart::decrease(args, &ctx),
        Commands::Set(args) => commands::cart::set(args, &ctx),
        Commands::Show => commands::cart::show(&ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
