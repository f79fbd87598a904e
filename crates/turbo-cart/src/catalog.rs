//! Product catalog.
//!
//! Products are addressed by their explicit [`ProductId`]; nothing in the
//! cart depends on the order products are listed in.

use crate::error::CartError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product record as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URI.
    pub image: String,
    /// Units available, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

impl Product {
    /// Create a product without stock information.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
            stock: None,
        }
    }

    /// Set the available stock.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = Some(stock);
        self
    }
}

/// An ordered set of products with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(products: Vec<Product>) -> Result<Self, CartError> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if product.price.is_negative() {
                return Err(CartError::NegativePrice(product.id.clone()));
            }
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(CartError::DuplicateProduct(product.id.clone()));
            }
        }
        Ok(Self { products, index })
    }

    /// Look up a product.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).and_then(|&pos| self.products.get(pos))
    }

    /// Look up a product, failing if it isn't listed.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CartError> {
        self.get(id).ok_or_else(|| CartError::ProductNotFound(id.clone()))
    }

    /// Products in declaration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new("cuy-premium-001", "Cuyes Premium", Money::new(40000), "cuyes.jpg")
                .with_stock(15),
            Product::new("abono-organico-003", "Abono Orgánico", Money::new(15000), "abono.jpg"),
        ]
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = Catalog::new(sample()).unwrap();

        let product = catalog.get(&ProductId::new("abono-organico-003")).unwrap();
        assert_eq!(product.name, "Abono Orgánico");
        assert_eq!(product.stock, None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_require_missing() {
        let catalog = Catalog::new(sample()).unwrap();
        let err = catalog.require(&ProductId::new("nope")).unwrap_err();
        assert!(matches!(err, CartError::ProductNotFound(id) if id.as_str() == "nope"));
    }

    #[test]
    fn test_catalog_rejects_duplicates() {
        let mut products = sample();
        products.push(products[0].clone());

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CartError::DuplicateProduct(_)));
    }

    #[test]
    fn test_catalog_rejects_negative_price() {
        let mut products = sample();
        products.push(Product::new("refund", "Refund", Money::new(-1), "r.jpg"));

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CartError::NegativePrice(id) if id.as_str() == "refund"));
    }

    #[test]
    fn test_product_deserialize_without_stock() {
        let json = r#"{"id":"x","name":"X","price":500,"image":"x.png"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.stock, None);
        assert_eq!(product.price, Money::new(500));
    }
}
