//! Tab-delimited catalog line parsing.
//!
//! Splits each export line into its eight fixed-position fields, trims
//! whitespace, strips currency formatting and coerces numeric fields.
//! Parsing never fails a run: every line produces a tagged [`LineOutcome`]
//! so callers can account for what was skipped and why.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum number of tab-separated fields a data line must have.
pub const MIN_FIELDS: usize = 8;

/// Currency symbols and thousands separators stripped from price fields.
static PRICE_NOISE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,]").expect("Invalid price pattern"));

/// A normalized catalog line, fields trimmed and numerics coerced.
///
/// Field order in the export: code, name, cost price, retail price,
/// wholesale price, stock, minimum stock, department. Cost price and minimum
/// stock are normalized along with the rest even though the generated script
/// does not use them; the `parse` debug command exposes the full row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLine {
    pub sku: String,
    pub name: String,
    pub cost_price: i64,
    pub retail_price: i64,
    pub wholesale_price: i64,
    pub stock: i64,
    pub min_stock: i64,
    pub department: String,
}

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// First line of the file (column headers).
    Header,
    /// Empty or whitespace-only line.
    Blank,
    /// Line starting with the `#` comment marker.
    Comment,
    /// Fewer than eight tab-separated fields.
    TooFewFields,
    /// Name or SKU empty after trimming.
    MissingNameOrSku,
}

impl SkipReason {
    /// Human-readable description for the console skip report.
    pub fn describe(&self) -> &'static str {
        match self {
            SkipReason::Header => "header row",
            SkipReason::Blank => "blank line",
            SkipReason::Comment => "comment line",
            SkipReason::TooFewFields => "fewer than 8 fields",
            SkipReason::MissingNameOrSku => "missing name or SKU",
        }
    }
}

/// Outcome of parsing one raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The line split into the eight expected fields.
    Parsed(ParsedLine),
    /// The line produced nothing.
    Skipped(SkipReason),
}

/// Parse one raw export line at 0-based position `index`.
///
/// The first line is always the header row. Blank lines and lines starting
/// with `#` are skipped, as are lines with fewer than [`MIN_FIELDS`] fields.
pub fn parse_line(raw: &str, index: usize) -> LineOutcome {
    if index == 0 {
        return LineOutcome::Skipped(SkipReason::Header);
    }
    if raw.trim().is_empty() {
        return LineOutcome::Skipped(SkipReason::Blank);
    }
    if raw.starts_with('#') {
        return LineOutcome::Skipped(SkipReason::Comment);
    }

    let fields: Vec<&str> = raw.trim().split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return LineOutcome::Skipped(SkipReason::TooFewFields);
    }

    LineOutcome::Parsed(ParsedLine {
        sku: fields[0].trim().to_string(),
        name: fields[1].trim().to_string(),
        cost_price: parse_price(fields[2]),
        retail_price: parse_price(fields[3]),
        wholesale_price: parse_price(fields[4]),
        stock: parse_count(fields[5]),
        min_stock: parse_count(fields[6]),
        department: fields[7].trim().to_string(),
    })
}

/// Coerce a price field: strip `$` and thousands separators, truncate to an
/// integer. Malformed or empty text degrades to zero for that field only.
pub fn parse_price(raw: &str) -> i64 {
    coerce_numeric(&PRICE_NOISE.replace_all(raw.trim(), ""))
}

/// Coerce a count field: strip thousands separators, truncate to an integer.
pub fn parse_count(raw: &str) -> i64 {
    coerce_numeric(&raw.trim().replace(',', ""))
}

fn coerce_numeric(cleaned: &str) -> i64 {
    if cleaned.is_empty() {
        return 0;
    }
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0)
}
