use crate::cart::{CartEvent, ShoppingCart};
use crate::config::CartConfig;
use crate::error::{CartError, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug, Clone)]
#[command(name = "shopping-cart")]
#[command(about = "Apply add/remove operations to an in-memory cart and print its totals")]
pub struct CliArgs {
    /// TOML config file (vat_rate, catalog, products)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON or TOML catalog file, overrides the config's catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// VAT rate, overrides the config's vat_rate
    #[arg(long)]
    pub vat_rate: Option<f64>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the catalog and exit
    #[arg(long)]
    pub list_catalog: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Operations applied in order: `add:<name>:<qty>`, `add:<name>` (one unit) or `remove:<name>`
    pub operations: Vec<Operation>,
}

impl CliArgs {
    /// Merges the config file with command line overrides.
    pub fn resolve_config(&self) -> Result<CartConfig> {
        let mut config = match &self.config {
            Some(path) => CartConfig::load(path)?,
            None => CartConfig::default(),
        };

        if let Some(catalog) = &self.catalog {
            config.catalog = Some(catalog.clone());
            config.products = None;
        }
        if let Some(rate) = self.vat_rate {
            config.vat_rate = rate;
        }

        config.validate()?;
        Ok(config)
    }

    /// The operations to run, falling back to the demo sequence.
    pub fn operations_or_demo(&self) -> Vec<Operation> {
        if self.operations.is_empty() {
            demo_operations()
        } else {
            self.operations.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { name: String, quantity: i64 },
    Remove { name: String },
}

impl Operation {
    pub fn apply(&self, cart: &mut ShoppingCart) -> CartEvent {
        match self {
            Operation::Add { name, quantity } => cart.add(name, *quantity),
            Operation::Remove { name } => cart.remove(name),
        }
    }
}

impl FromStr for Operation {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            ["add", name, quantity] if !name.is_empty() => {
                let quantity = quantity.parse::<i64>().map_err(|e| {
                    CartError::config(format!("invalid quantity '{}': {}", quantity, e))
                })?;
                Ok(Operation::Add {
                    name: name.to_string(),
                    quantity,
                })
            }
            ["add", name] if !name.is_empty() => Ok(Operation::Add {
                name: name.to_string(),
                quantity: 1,
            }),
            ["remove", name] if !name.is_empty() => Ok(Operation::Remove {
                name: name.to_string(),
            }),
            _ => Err(CartError::config(format!(
                "invalid operation '{}', expected add:<name>:<qty>, add:<name> or remove:<name>",
                s
            ))),
        }
    }
}

pub fn demo_operations() -> Vec<Operation> {
    vec![
        Operation::Add {
            name: "apple".into(),
            quantity: 2,
        },
        Operation::Add {
            name: "banana".into(),
            quantity: 3,
        },
        Operation::Remove {
            name: "apple".into(),
        },
    ]
}
