use anyhow::{Context, Result};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single (size, price) row of the price document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PriceEntry {
    #[serde(alias = "talla")]
    pub size: String,
    #[serde(alias = "precio")]
    pub price: f64,
}

impl PriceEntry {
    pub fn new(size: impl Into<String>, price: f64) -> Self {
        Self {
            size: size.into(),
            price,
        }
    }
}

// Rows stay untyped so one bad row cannot reject the whole document.
#[derive(Deserialize, Debug, Default)]
struct PriceDocument {
    #[serde(default, alias = "precios")]
    prices: Vec<Value>,
}

fn row_field<'v>(row: &'v Value, name: &str, alias: &str) -> Option<&'v Value> {
    row.get(name).or_else(|| row.get(alias))
}

/// The ordered price list plus its size -> price index.
///
/// Document order is kept for rendering. The index is built by iterating in
/// that order, so when a size appears twice the last entry wins the lookup
/// while the table still shows both rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceList {
    entries: Vec<PriceEntry>,
    by_size: HashMap<String, f64>,
}

impl PriceList {
    pub fn from_entries(entries: Vec<PriceEntry>) -> Self {
        let by_size = entries
            .iter()
            .map(|entry| (entry.size.clone(), entry.price))
            .collect();
        Self { entries, by_size }
    }

    /// Parses the price document row by row.
    ///
    /// Rows without a text size are dropped. A row whose price is not a number
    /// is dropped from the table and clears that size from the index, so the
    /// size reads as unpriced while every other row keeps working.
    pub fn from_json(text: &str) -> Result<Self> {
        let document: PriceDocument =
            serde_json::from_str(text).context("price document has an unexpected shape")?;

        let mut entries = Vec::with_capacity(document.prices.len());
        let mut by_size = HashMap::new();
        for (idx, row) in document.prices.iter().enumerate() {
            let Some(size) = row_field(row, "size", "talla").and_then(Value::as_str) else {
                log::warn!("Price row {} has no size, skipped: {}", idx, row);
                continue;
            };
            match row_field(row, "price", "precio").and_then(Value::as_f64) {
                Some(price) => {
                    by_size.insert(size.to_string(), price);
                    entries.push(PriceEntry::new(size, price));
                }
                None => {
                    log::warn!("Price row {} for size {} has no numeric price, skipped", idx, size);
                    by_size.remove(size);
                }
            }
        }
        Ok(Self { entries, by_size })
    }

    pub fn price_for(&self, size: &str) -> Option<f64> {
        self.by_size.get(size).copied()
    }

    pub fn entries(&self) -> &[PriceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sizes listed more than once, in order of first repetition.
    pub fn duplicate_sizes(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.size.as_str())
            .duplicates()
            .collect()
    }
}
