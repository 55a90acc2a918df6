//! Catalog Domain Models
//!
//! Products and the on-disk shape of a catalog file.

use serde::{Deserialize, Serialize};

// =============================================================================
// Built-in Catalog
// =============================================================================

/// Products available when no catalog is injected, as `(name, unit price)`.
pub const BUILTIN_PRODUCTS: &[(&str, f64)] = &[
    ("apple", 1.0),
    ("banana", 0.5),
    ("orange", 1.5),
    ("grape", 2.0),
];

// =============================================================================
// Catalog Domain Models
// =============================================================================

/// A product that can be placed in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Name of the product, unique within a catalog
    pub name: String,

    /// Unit price, never negative
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Contents of a JSON or TOML catalog file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Products listed in the file
    #[serde(default)]
    pub products: Vec<Product>,
}
