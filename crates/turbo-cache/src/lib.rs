//! Type-safe key-value snapshot storage for turbo-cart.
//!
//! Provides a small [`KvStore`] capability with an in-memory and a
//! directory-backed implementation, plus a [`Cache`] wrapper that adds
//! automatic JSON serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cache::{Cache, FileStore};
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct CartItem {
//!     id: String,
//!     quantity: u32,
//! }
//!
//! let mut cache = Cache::new(FileStore::open("/tmp/turbo-cart")?);
//!
//! // Store a value
//! cache.set("shoppingCart", &items)?;
//!
//! // Retrieve a value
//! let items: Option<Vec<CartItem>> = cache.get("shoppingCart")?;
//!
//! // Delete a value
//! cache.delete("shoppingCart")?;
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KvStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
