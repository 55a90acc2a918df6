//! Shopping Cart Library
//!
//! This library provides an in-memory shopping cart over a read-only
//! product catalog.

// Domain modules
pub mod cart;
pub mod catalog;

// Infrastructure
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;

pub use cart::{CartEvent, CartView, ShoppingCart};
pub use catalog::{Catalog, Product};
pub use config::CartConfig;
pub use error::{CartError, Result};
