//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_cart::{Catalog, Money, PriceFormat, Product, ShippingPolicy, StoreConfig};

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["turbo-cart.toml", ".turbo-cart.toml", "turbo-cart.json"];

/// Environment variable overriding the snapshot directory.
pub const DATA_DIR_ENV: &str = "TURBO_CART_DATA_DIR";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Snapshot storage.
    #[serde(default)]
    pub store: StoreSection,

    /// Pricing and formatting.
    #[serde(default)]
    pub pricing: PricingSection,

    /// Products offered by the storefront.
    #[serde(default)]
    pub catalog: CatalogSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Store settings for the cart core.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::default()
            .with_slot(self.store.slot.clone())
            .with_shipping(self.pricing.shipping_policy())
            .with_format(self.pricing.price_format())
    }

    /// Build the product catalog.
    pub fn build_catalog(&self) -> Result<Catalog> {
        Catalog::new(self.catalog.products.clone()).context("Invalid catalog in config")
    }
}

/// Snapshot storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    /// Directory holding snapshot files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Slot name of the cart snapshot.
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_slot() -> String {
    turbo_cart::DEFAULT_SLOT.to_string()
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            dir: None,
            slot: default_slot(),
        }
    }
}

/// Pricing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSection {
    /// Subtotals strictly above this ship free.
    #[serde(default = "default_threshold")]
    pub free_shipping_threshold: i64,

    /// Shipping fee otherwise.
    #[serde(default = "default_fee")]
    pub flat_shipping_fee: i64,

    /// Locale used for digit grouping.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Currency marker override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

fn default_threshold() -> i64 {
    turbo_cart::cart::FREE_SHIPPING_THRESHOLD.amount()
}

fn default_fee() -> i64 {
    turbo_cart::cart::FLAT_SHIPPING_FEE.amount()
}

fn default_locale() -> String {
    "es-CO".to_string()
}

impl Default for PricingSection {
    fn default() -> Self {
        Self {
            free_shipping_threshold: default_threshold(),
            flat_shipping_fee: default_fee(),
            locale: default_locale(),
            symbol: None,
        }
    }
}

impl PricingSection {
    /// Shipping policy described by this section.
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy::new(
            Money::new(self.free_shipping_threshold),
            Money::new(self.flat_shipping_fee),
        )
    }

    /// Price format described by this section.
    pub fn price_format(&self) -> PriceFormat {
        let format = PriceFormat::from_locale(&self.locale);
        match self.symbol {
            Some(ref symbol) => format.with_symbol(symbol.clone()),
            None => format,
        }
    }
}

/// Catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Product records.
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            products: default_products(),
        }
    }
}

/// The storefront's stock products.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new(
            "cuy-premium-001",
            "Cuyes Premium",
            Money::new(40000),
            "../images/cuyes.jpg",
        )
        .with_stock(15),
        Product::new(
            "hortalizas-organicas-002",
            "Hortalizas Orgánicas",
            Money::new(10000),
            "../images/hortalizas.jpg",
        )
        .with_stock(50),
        Product::new(
            "abono-organico-003",
            "Abono Orgánico",
            Money::new(15000),
            "../images/abono.jpg",
        )
        .with_stock(30),
    ]
}

/// Generate a default turbo-cart.toml config file.
pub fn generate_default_config() -> String {
    r#"# turbo-cart configuration

[store]
# dir = "/home/me/.local/share/turbo-cart"
slot = "shoppingCart"

[pricing]
free_shipping_threshold = 500000
flat_shipping_fee = 15000
locale = "es-CO"
# symbol = "$"

[[catalog.products]]
id = "cuy-premium-001"
name = "Cuyes Premium"
price = 40000
image = "../images/cuyes.jpg"
stock = 15

[[catalog.products]]
id = "hortalizas-organicas-002"
name = "Hortalizas Orgánicas"
price = 10000
image = "../images/hortalizas.jpg"
stock = 50

[[catalog.products]]
id = "abono-organico-003"
name = "Abono Orgánico"
price = 15000
image = "../images/abono.jpg"
stock = 30
"#
    .to_string()
}
