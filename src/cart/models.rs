//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the shopping cart
//! business domain.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// =============================================================================
// Constants
// =============================================================================

/// Tax rate applied by `vat_default` when nothing else is configured
pub const DEFAULT_VAT_RATE: f64 = 0.15;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One product's aggregated quantity within a cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product shared with the catalog
    pub product: Arc<Product>,

    /// Always positive while the line is in a cart
    pub quantity: i64,
}

impl CartLine {
    pub fn name(&self) -> &str {
        &self.product.name
    }

    pub fn total_price(&self) -> f64 {
        self.quantity as f64 * self.product.price
    }
}

/// A cart line as presented to callers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartView {
    /// Name of the product
    pub item: String,

    /// Units in the cart
    pub quantity: i64,

    /// Unit price from the catalog
    pub price_per_unit: f64,

    /// `quantity * price_per_unit`
    pub total_price: f64,
}

impl From<&CartLine> for CartView {
    fn from(line: &CartLine) -> Self {
        Self {
            item: line.product.name.clone(),
            quantity: line.quantity,
            price_per_unit: line.product.price,
            total_price: line.total_price(),
        }
    }
}

/// What a call to `add` or `remove` did to the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was created with this quantity
    Added { quantity: i64 },

    /// An existing line now holds this quantity
    Updated { quantity: i64 },

    /// The line was deleted
    Removed,

    /// The product is not in the catalog; nothing changed
    UnknownProduct,

    /// The product is not in the cart; nothing changed
    NotInCart,

    /// A non-positive quantity was added for a product not in the cart
    Ignored,
}

impl CartEvent {
    /// Returns true when the cart contents changed.
    pub fn changed(&self) -> bool {
        matches!(
            self,
            CartEvent::Added { .. } | CartEvent::Updated { .. } | CartEvent::Removed
        )
    }
}

/// Totals for a cart, used by the CLI report
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartView>,
    pub total_price: f64,
    pub total_quantity: i64,
    pub vat: f64,
}
