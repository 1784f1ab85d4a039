// src/input.rs
//! Option batch loading.
//!
//! The input document is a JSON array of records. Field access is
//! positional over the record object's keys in sorted order: index 0 is
//! years to expiry, index 1 the stock price, index 2 the strike price.
//! `serde_json`'s default object map is ordered by key, which gives
//! exactly this contract regardless of the textual field order.

use crate::error::{BenchError, BenchResult};
use serde::Serialize;
use serde_json::Value;
use std::fs;

/// One European call option, immutable once loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptionRecord {
    #[serde(rename = "optionyears")]
    pub years_to_expiry: f64,
    #[serde(rename = "stockprice")]
    pub stock_price: f64,
    #[serde(rename = "strikeprice")]
    pub strike_price: f64,
}

/// Load an option batch from a JSON file
///
/// Read failure, parse failure or a malformed document are all fatal.
pub fn load_options(path: &str) -> BenchResult<Vec<OptionRecord>> {
    let text = fs::read_to_string(path).map_err(|e| BenchError::InputError {
        path: path.to_string(),
        reason: e.to_string(),
    })?;
    parse_records(&text)
}

/// Parse an option batch from JSON text
pub fn parse_records(text: &str) -> BenchResult<Vec<OptionRecord>> {
    let document: Value = serde_json::from_str(text).map_err(|e| BenchError::MalformedInput {
        reason: e.to_string(),
    })?;

    let root = document
        .as_array()
        .ok_or_else(|| BenchError::MalformedInput {
            reason: "document root is not an array".to_string(),
        })?;

    let mut records = Vec::with_capacity(root.len());
    for (index, element) in root.iter().enumerate() {
        records.push(parse_record(index, element)?);
    }
    Ok(records)
}

fn parse_record(index: usize, element: &Value) -> BenchResult<OptionRecord> {
    let object = element
        .as_object()
        .ok_or_else(|| BenchError::MalformedInput {
            reason: format!("record {} is not an object", index),
        })?;

    // Positional access over the key-sorted object fields.
    let mut fields = object.values();
    let mut next_number = |position: usize| -> BenchResult<f64> {
        fields
            .next()
            .and_then(Value::as_f64)
            .ok_or_else(|| BenchError::MalformedInput {
                reason: format!("record {} has no numeric field at index {}", index, position),
            })
    };

    Ok(OptionRecord {
        years_to_expiry: next_number(0)?,
        stock_price: next_number(1)?,
        strike_price: next_number(2)?,
    })
}

/// Render a record slice to the accepted document format
///
/// The serialized key names sort into the positional order the loader
/// expects, so output of this function always round-trips.
pub fn records_to_json(records: &[OptionRecord]) -> String {
    serde_json::to_string(records).expect("option records always serialize")
}
