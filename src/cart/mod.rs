//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart business logic, including:
//! - Domain models (CartLine, CartView, CartEvent)
//! - Business logic helpers (line lookup, formatting)
//! - Cart state and its operations

pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use models::{CartEvent, CartLine, CartSummary, CartView, DEFAULT_VAT_RATE};
pub use state::ShoppingCart;
