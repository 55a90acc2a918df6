//! Shopping Cart Business Logic Helpers
//!
//! This module contains helper functions for cart operations and formatting.

use super::models::{CartLine, CartView};

/// Finds the index of the line holding `name`.
pub fn find_line(lines: &[CartLine], name: &str) -> Option<usize> {
    lines.iter().position(|line| line.name() == name)
}

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x apple, 1x banana"`.
pub fn format_item_summary(items: &[CartView]) -> String {
    items
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use std::sync::Arc;

    fn line(name: &str, price: f64, quantity: i64) -> CartLine {
        CartLine {
            product: Arc::new(Product::new(name, price)),
            quantity,
        }
    }

    #[test]
    fn test_find_line() {
        let lines = vec![line("apple", 1.0, 2), line("banana", 0.5, 1)];
        assert_eq!(find_line(&lines, "banana"), Some(1));
        assert_eq!(find_line(&lines, "grape"), None);
    }

    #[test]
    fn test_format_item_summary() {
        let lines = [line("apple", 1.0, 2), line("banana", 0.5, 1)];
        let views: Vec<CartView> = lines.iter().map(CartView::from).collect();
        assert_eq!(format_item_summary(&views), "2x apple, 1x banana");
        assert_eq!(format_item_summary(&[]), "");
    }
}
