//! Read-only product lookup.
//!
//! A [`Catalog`] is built once, either from the built-in product list, an
//! injected product list or a catalog file, and never changes afterwards.
//! Products are handed out as `Arc<Product>` so cart lines share them.

use super::models::{CatalogFile, Product, BUILTIN_PRODUCTS};
use crate::error::{CartError, Result};
use std::{collections::HashMap, path::Path, sync::Arc};

/// Catalog shared between carts
pub type SharedCatalog = Arc<Catalog>;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: HashMap<String, Arc<Product>>,
}

impl Catalog {
    /// The catalog used when nothing else is configured.
    pub fn builtin() -> Self {
        let products = BUILTIN_PRODUCTS
            .iter()
            .map(|(name, price)| (name.to_string(), Arc::new(Product::new(*name, *price))))
            .collect();
        Self { products }
    }

    /// Builds a catalog from an injected product list.
    ///
    /// Fails on an empty name, a negative or non-finite price, or a name that
    /// appears twice.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut map = HashMap::new();
        for product in products {
            validate_product(&product)?;
            if map.contains_key(&product.name) {
                return Err(CartError::invalid_product(
                    product.name,
                    "listed more than once",
                ));
            }
            map.insert(product.name.clone(), Arc::new(product));
        }
        Ok(Self { products: map })
    }

    /// Loads a catalog file, picking the format from the extension
    /// (`.json` or `.toml`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file: CatalogFile = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => {
                return Err(CartError::config(format!(
                    "unsupported catalog format: {}",
                    path.display()
                )))
            }
        };

        tracing::debug!(
            "Loaded {} product(s) from {}",
            file.products.len(),
            path.display()
        );
        Self::from_products(file.products)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Product>> {
        self.products.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products, sorted by name.
    pub fn products(&self) -> Vec<Arc<Product>> {
        let mut products: Vec<_> = self.products.values().cloned().collect();
        products.sort_by(|a, b| a.name.cmp(&b.name));
        products
    }
}

fn validate_product(product: &Product) -> Result<()> {
    if product.name.trim().is_empty() {
        return Err(CartError::invalid_product(&product.name, "name is empty"));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CartError::invalid_product(
            &product.name,
            format!("price {} is not a non-negative number", product.price),
        ));
    }
    Ok(())
}
