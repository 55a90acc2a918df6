//! Shopping Cart State Management
//!
//! This module holds the cart itself: an ordered list of lines over a
//! shared catalog.

use super::{
    helpers::find_line,
    models::{CartEvent, CartLine, CartSummary, CartView, DEFAULT_VAT_RATE},
};
use crate::catalog::{Catalog, SharedCatalog};
use std::sync::Arc;
use tracing::{info, warn};

// =============================================================================
// Cart State
// =============================================================================

/// An in-memory cart over one catalog.
///
/// Lines keep insertion order. Every line refers to a product of `catalog`
/// and holds a positive quantity.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    /// Catalog that products are looked up in
    catalog: SharedCatalog,

    /// Lines in the order they were first added
    lines: Vec<CartLine>,

    /// Rate used by `vat_default`
    vat_rate: f64,
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }
}

impl ShoppingCart {
    /// Creates an empty cart over `catalog`
    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            lines: Vec::new(),
            vat_rate: DEFAULT_VAT_RATE,
        }
    }

    /// Replaces the rate used by `vat_default`
    pub fn with_vat_rate(mut self, vat_rate: f64) -> Self {
        self.vat_rate = vat_rate;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of `name` in the cart, 0 when absent
    pub fn quantity_of(&self, name: &str) -> i64 {
        find_line(&self.lines, name)
            .map(|idx| self.lines[idx].quantity)
            .unwrap_or(0)
    }

    /// Adds `quantity` units of `name`.
    ///
    /// Unknown products are ignored. A non-positive quantity on an existing
    /// line is applied, deleting the line if it drops to zero or below.
    pub fn add(&mut self, name: &str, quantity: i64) -> CartEvent {
        let Some(product) = self.catalog.get(name) else {
            info!("Product does not exist in catalog.");
            return CartEvent::UnknownProduct;
        };

        match find_line(&self.lines, name) {
            None if quantity <= 0 => {
                warn!("Ignored non-positive quantity {} for {}.", quantity, name);
                CartEvent::Ignored
            }
            None => {
                self.lines.push(CartLine { product, quantity });
                info!("Added {} of {} to cart.", quantity, name);
                CartEvent::Added { quantity }
            }
            Some(idx) => self.adjust(idx, quantity),
        }
    }

    /// Takes one unit of `name` out of the cart.
    pub fn remove(&mut self, name: &str) -> CartEvent {
        if !self.catalog.contains(name) {
            info!("Product does not exist in catalog.");
            return CartEvent::UnknownProduct;
        }

        match find_line(&self.lines, name) {
            Some(idx) => self.adjust(idx, -1),
            None => CartEvent::NotInCart,
        }
    }

    fn adjust(&mut self, idx: usize, delta: i64) -> CartEvent {
        let line = &mut self.lines[idx];
        line.quantity = line.quantity.saturating_add(delta);

        if line.quantity <= 0 {
            let removed = self.lines.remove(idx);
            info!("Removed {} from cart.", removed.name());
            CartEvent::Removed
        } else {
            info!("Updated {} quantity to {}.", line.name(), line.quantity);
            CartEvent::Updated {
                quantity: line.quantity,
            }
        }
    }

    /// Sum of quantity times unit price over all lines
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::total_price).sum()
    }

    /// Sum of quantities over all lines, saturating at `i64::MAX`
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Cart contents in insertion order
    pub fn view(&self) -> Vec<CartView> {
        self.lines.iter().map(CartView::from).collect()
    }

    /// Tax computed on the number of items, not on their price.
    ///
    /// See [`ShoppingCart::vat_on_price`] for the monetary variant.
    pub fn vat(&self, rate: f64) -> f64 {
        self.total_quantity() as f64 * rate
    }

    /// `vat` at the cart's configured rate (0.15 unless overridden)
    pub fn vat_default(&self) -> f64 {
        self.vat(self.vat_rate)
    }

    /// Tax computed on the total price.
    pub fn vat_on_price(&self, rate: f64) -> f64 {
        self.total_price() * rate
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.view(),
            total_price: self.total_price(),
            total_quantity: self.total_quantity(),
            vat: self.vat_default(),
        }
    }
}
