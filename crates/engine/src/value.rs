//! Typed configuration values.
//!
//! A [`Value`] is a closed variant over the four supported configuration
//! types. Coercions between tags produce new values and never retag an
//! existing one; the textual grammar used by [`std::fmt::Display`] and
//! [`Value::set_from_str`] is decimal integers, decimal floats, and the
//! case-sensitive `true`/`false` literals.

use std::fmt;

use crate::error::ConfigError;

/// A generic configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Parse a boolean from its textual form.
///
/// Accepts the `true`/`false` literals as well as numeric text, which is
/// interpreted as "nonzero".
fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "true" => Some(true),
        "false" => Some(false),
        _ => s.parse::<f64>().ok().map(|f| f != 0.0),
    }
}

impl Value {
    /// Name of this value's tag, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
        }
    }

    /// Coerce to an integer. Floats truncate, booleans map to 1/0, strings
    /// must parse as a decimal integer.
    pub fn to_int(&self) -> Result<i64, ConfigError> {
        match self {
            Value::Str(s) => s
                .parse::<i64>()
                .map_err(|_| ConfigError::conversion(s.clone(), "int")),
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(*f as i64),
            Value::Bool(b) => Ok(i64::from(*b)),
        }
    }

    /// Coerce to a float. Integers widen exactly, booleans map to 1/0,
    /// strings must parse as a decimal float.
    pub fn to_float(&self) -> Result<f64, ConfigError> {
        match self {
            Value::Str(s) => s
                .parse::<f64>()
                .map_err(|_| ConfigError::conversion(s.clone(), "float")),
            Value::Int(i) => Ok(*i as f64),
            Value::Float(f) => Ok(*f),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        }
    }

    /// Coerce to a boolean. Numerics are "nonzero"; strings accept the
    /// `true`/`false` literals or numeric text.
    pub fn to_bool(&self) -> Result<bool, ConfigError> {
        match self {
            Value::Str(s) => {
                parse_bool(s).ok_or_else(|| ConfigError::conversion(s.clone(), "bool"))
            }
            Value::Int(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0),
            Value::Bool(b) => Ok(*b),
        }
    }

    /// Re-populate this value in its own tag by parsing `s`.
    ///
    /// The tag never changes; a string that does not parse under the
    /// receiver's grammar leaves the value untouched and fails.
    pub fn set_from_str(&mut self, s: &str) -> Result<(), ConfigError> {
        match self {
            Value::Str(v) => {
                *v = s.to_string();
                Ok(())
            }
            Value::Int(v) => {
                *v = s
                    .parse::<i64>()
                    .map_err(|_| ConfigError::conversion(s, "int"))?;
                Ok(())
            }
            Value::Float(v) => {
                *v = s
                    .parse::<f64>()
                    .map_err(|_| ConfigError::conversion(s, "float"))?;
                Ok(())
            }
            Value::Bool(v) => {
                *v = parse_bool(s).ok_or_else(|| ConfigError::conversion(s, "bool"))?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            // f64's Display renders the shortest decimal form that parses
            // back to the same bits, so text round-trips are exact.
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

const FLOAT_MAX_ULP: u64 = 2;
const FLOAT_EPSILON: f64 = 1e-9;

/// Combined epsilon / ULP comparison for floats.
///
/// Two floats compare equal when their absolute difference is within a small
/// epsilon or when they are at most two representable values apart. NaN,
/// infinities, and sign mismatches never compare equal. Use this instead of
/// `==` wherever a float has passed through decimal formatting.
pub fn almost_equal(f1: f64, f2: f64) -> bool {
    if f1.is_nan() || f2.is_nan() || f1.is_infinite() || f2.is_infinite() {
        return false;
    }
    if (f1 < 0.0) != (f2 < 0.0) {
        return false;
    }
    let b1 = f1.to_bits();
    let b2 = f2.to_bits();
    if b1 == b2 {
        return true;
    }
    if (f1 - f2).abs() <= FLOAT_EPSILON * FLOAT_MAX_ULP as f64 {
        return true;
    }
    b1.abs_diff(b2) <= FLOAT_MAX_ULP
}
