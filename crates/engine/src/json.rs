//! Recursive JSON flattening.
//!
//! Turns an arbitrary decoded JSON document into a flat map from dotted /
//! indexed address strings to typed values: objects contribute `<key>.`
//! segments, arrays contribute `<index>.` segments, and scalar leaves emit
//! the accumulated address with the trailing separator stripped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::value::Value;

/// Flatten a decoded JSON value under `prefix`.
///
/// Only the four scalar JSON types plus objects and arrays are accepted;
/// `null` fails with [`ConfigError::InvalidType`]. When two branches produce
/// the same address (for instance a literal `"a.b"` member next to a nested
/// `a.b`), the later-visited branch silently wins; with `serde_json`'s
/// default map this visit order is lexical by member name.
pub fn flatten(data: &serde_json::Value, prefix: &str) -> Result<BTreeMap<String, Value>, ConfigError> {
    let mut result = BTreeMap::new();
    match data {
        serde_json::Value::Object(members) => {
            for (key, val) in members {
                let nested = format!("{prefix}{key}.");
                result.extend(flatten(val, &nested)?);
            }
        }
        serde_json::Value::Array(items) => {
            for (index, val) in items.iter().enumerate() {
                let nested = format!("{prefix}{index}.");
                result.extend(flatten(val, &nested)?);
            }
        }
        serde_json::Value::String(s) => {
            result.insert(leaf_address(prefix), Value::Str(s.clone()));
        }
        serde_json::Value::Number(n) => {
            let value = match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or_default()),
            };
            result.insert(leaf_address(prefix), value);
        }
        serde_json::Value::Bool(b) => {
            result.insert(leaf_address(prefix), Value::Bool(*b));
        }
        serde_json::Value::Null => {
            return Err(ConfigError::InvalidType {
                path: leaf_address(prefix),
            });
        }
    }
    Ok(result)
}

fn leaf_address(prefix: &str) -> String {
    prefix.strip_suffix('.').unwrap_or(prefix).to_string()
}

/// Read a JSON file and flatten it into an address → value map.
pub fn parse_json_file(path: &Path) -> Result<BTreeMap<String, Value>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let data: serde_json::Value =
        serde_json::from_str(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })?;
    flatten(&data, "")
}
