//! Cart configuration loaded from TOML.
//!
//! ```toml
//! vat_rate = 0.2
//! catalog = "catalog.json"
//!
//! [[products]]
//! name = "kiwi"
//! price = 0.75
//! ```
//!
//! Inline `products` win over `catalog`; with neither the built-in catalog
//! is used.

use crate::cart::DEFAULT_VAT_RATE;
use crate::catalog::{Catalog, Product};
use crate::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_vat_rate() -> f64 {
    DEFAULT_VAT_RATE
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartConfig {
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,
    pub catalog: Option<PathBuf>,
    pub products: Option<Vec<Product>>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            catalog: None,
            products: None,
        }
    }
}

impl CartConfig {
    /// Reads and validates a TOML config file.
    ///
    /// A relative `catalog` path is resolved against the config file's
    /// directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config: CartConfig = toml::from_str(&content)?;

        if let (Some(catalog), Some(dir)) = (config.catalog.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.vat_rate.is_finite() || self.vat_rate < 0.0 {
            return Err(CartError::config(format!(
                "vat_rate must be a non-negative number, got {}",
                self.vat_rate
            )));
        }
        Ok(())
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        match (&self.products, &self.catalog) {
            (Some(products), _) => Catalog::from_products(products.iter().cloned()),
            (None, Some(path)) => Catalog::load(path),
            (None, None) => Ok(Catalog::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: CartConfig = toml::from_str("").unwrap();
        assert_eq!(config, CartConfig::default());
        assert_eq!(config.build_catalog().unwrap().len(), 4);
    }

    #[test]
    fn test_inline_products() {
        let config: CartConfig = toml::from_str(
            r#"
            vat_rate = 0.2

            [[products]]
            name = "kiwi"
            price = 0.75
            "#,
        )
        .unwrap();

        assert_eq!(config.vat_rate, 0.2);
        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("kiwi").unwrap().price, 0.75);
    }

    #[test]
    fn test_inline_products_win_over_catalog_file() {
        let config: CartConfig = toml::from_str(
            r#"
            catalog = "/nonexistent/catalog.json"

            [[products]]
            name = "kiwi"
            price = 0.75
            "#,
        )
        .unwrap();

        let catalog = config.build_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains("kiwi"));
    }

    #[test]
    fn test_catalog_file_wins_over_builtin() {
        let config = CartConfig {
            catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..CartConfig::default()
        };
        assert!(matches!(config.build_catalog(), Err(CartError::Io(_))));
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let config = CartConfig {
            vat_rate: -0.1,
            ..CartConfig::default()
        };
        assert!(matches!(config.validate(), Err(CartError::Config { .. })));
    }
}
