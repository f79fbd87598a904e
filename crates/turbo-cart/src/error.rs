//! Cart error types.

use thiserror::Error;
use turbo_cache::CacheError;

use crate::ids::ProductId;

/// Errors that can occur in cart operations.
///
/// Cart mutations themselves never fail on bad input: unknown ids are
/// no-ops and non-positive quantities remove the item. What remains is
/// storage failure and catalog or snapshot validation.
#[derive(Error, Debug)]
pub enum CartError {
    /// Snapshot could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] CacheError),

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog products share an id.
    #[error("Duplicate product in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Two line items share an id.
    #[error("Duplicate line item: {0}")]
    DuplicateLineItem(ProductId),

    /// A line item carries a zero quantity.
    #[error("Line item {0} has zero quantity")]
    ZeroQuantity(ProductId),

    /// A product or line item carries a negative price.
    #[error("{0} has a negative price")]
    NegativePrice(ProductId),
}
