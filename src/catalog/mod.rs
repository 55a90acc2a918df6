//! Product Catalog Module
//!
//! This module contains the read-only product catalog:
//! - Domain models (Product, catalog file layout)
//! - The catalog store with name lookup and loading

pub mod models;
pub mod store;

// Re-export commonly used types for convenience
pub use models::Product;
pub use store::{Catalog, SharedCatalog};
