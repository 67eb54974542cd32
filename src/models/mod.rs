//! Domain models for the catalog import pipeline.
//!
//! A [`ProductRecord`] is the normalized form of one catalog line, in the
//! shape of the `productos` table the generated script inserts into. Records
//! are transient: built per line, rendered into a tuple, then dropped.

use serde::{Deserialize, Serialize};

use crate::parser::ParsedLine;
use crate::transform::classify::classify;

/// Unit of measure stamped on every imported product.
pub const UNIT: &str = "unidad";

/// A normalized product, ready to render as one `VALUES` tuple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product name, trimmed.
    pub name: String,
    /// Stock-keeping unit code; the conflict key downstream.
    pub sku: String,
    /// Assigned category (department or keyword heuristic).
    pub category: String,
    /// Units in stock.
    pub stock: i64,
    /// Retail price, whole currency units.
    pub retail_price: i64,
    /// Wholesale price, whole currency units.
    pub wholesale_price: i64,
    /// Synthesized "name - category" text.
    pub description: String,
    /// Always [`UNIT`].
    pub unit: String,
    /// Always `true`; deactivation is a downstream concern.
    pub active: bool,
}

impl ProductRecord {
    /// Build a record from a parsed catalog line.
    ///
    /// Returns `None` when the name or SKU is empty after trimming, the only
    /// condition that rejects a line outright. Numeric fields were already
    /// coerced by the parser and cannot reject anything here.
    pub fn from_line(line: &ParsedLine) -> Option<Self> {
        if line.name.is_empty() || line.sku.is_empty() {
            return None;
        }

        let category = classify(&line.name, &line.department);
        let description = format!("{} - {}", line.name, category);

        Some(Self {
            name: line.name.clone(),
            sku: line.sku.clone(),
            category,
            stock: line.stock,
            retail_price: line.retail_price,
            wholesale_price: line.wholesale_price,
            description,
            unit: UNIT.to_string(),
            active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(sku: &str, name: &str, department: &str) -> ParsedLine {
        ParsedLine {
            sku: sku.to_string(),
            name: name.to_string(),
            cost_price: 100,
            retail_price: 250,
            wholesale_price: 200,
            stock: 7,
            min_stock: 1,
            department: department.to_string(),
        }
    }

    #[test]
    fn test_builds_record_with_constants() {
        let record = ProductRecord::from_line(&line("A1", "Aceite 10W40", "Lubricantes")).unwrap();
        assert_eq!(record.sku, "A1");
        assert_eq!(record.category, "Lubricantes");
        assert_eq!(record.description, "Aceite 10W40 - Lubricantes");
        assert_eq!(record.unit, UNIT);
        assert!(record.active);
        assert_eq!(record.retail_price, 250);
    }

    #[test]
    fn test_rejects_empty_name_or_sku() {
        assert!(ProductRecord::from_line(&line("", "Aceite", "Lubricantes")).is_none());
        assert!(ProductRecord::from_line(&line("A1", "", "Lubricantes")).is_none());
    }

    #[test]
    fn test_serializes_to_json() {
        let record = ProductRecord::from_line(&line("A1", "Aceite", "Lubricantes")).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"sku\":\"A1\""));
        assert!(json.contains("\"active\":true"));
    }
}
