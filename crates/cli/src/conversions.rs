//! Conversions between DynamoDB attribute values and CLI input/output.
//!
//! Pure functions, testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use docgate::Item;
use serde_json::{Map, Number, Value};

use crate::error::{CliError, Result};

/// Parse `NAME=VALUE` pairs into a key of string attributes.
pub fn parse_key(pairs: &[String]) -> Result<Item> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((name, value)) if !name.is_empty() => {
                Ok((name.to_string(), AttributeValue::S(value.to_string())))
            }
            _ => Err(CliError::InvalidKey(pair.clone())),
        })
        .collect()
}

/// Convert a DynamoDB item to a JSON object.
pub fn item_to_json(item: &Item) -> Value {
    let mut object = Map::new();
    // Sorted so output is stable between runs.
    let mut names: Vec<&String> = item.keys().collect();
    names.sort();
    for name in names {
        object.insert(name.clone(), attribute_to_json(&item[name]));
    }
    Value::Object(object)
}

/// Convert a single attribute value to JSON.
///
/// Numbers that do not fit a JSON number are kept as strings; binary values
/// are base64 encoded.
pub fn attribute_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number_to_json(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::B(blob) => blob_to_json(blob),
        AttributeValue::Ss(values) => values.iter().cloned().map(Value::String).collect(),
        AttributeValue::Ns(values) => values.iter().map(|n| number_to_json(n)).collect(),
        AttributeValue::Bs(values) => values.iter().map(blob_to_json).collect(),
        AttributeValue::L(values) => values.iter().map(attribute_to_json).collect(),
        AttributeValue::M(map) => item_to_json(map),
        _ => Value::Null,
    }
}

fn blob_to_json(blob: &Blob) -> Value {
    let bytes: &[u8] = blob.as_ref();
    Value::String(STANDARD.encode(bytes))
}

// DynamoDB numbers carry up to 38 digits. Anything that does not survive the
// trip through i64, u64 or f64 unchanged is kept as its original text.
fn number_to_json(n: &str) -> Value {
    if let Ok(int) = n.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(uint) = n.parse::<u64>() {
        return Value::Number(uint.into());
    }
    n.parse::<f64>()
        .ok()
        .filter(|float| float.to_string() == n)
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}

/// Convert a list of items to a JSON array.
pub fn items_to_json(items: &[HashMap<String, AttributeValue>]) -> Value {
    Value::Array(items.iter().map(item_to_json).collect())
}
