//! Property-based tests for typed values and flattening.
//!
//! These verify that every value tag round-trips through its textual form
//! and that flattening a flat object is lossless, using randomly generated
//! inputs to catch edge cases unit tests miss.

use std::collections::BTreeMap;

use proptest::prelude::*;

use confstack::{Value, almost_equal, flatten};

/// Finite floats; NaN and infinities are outside the textual grammar.
fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

proptest! {
    #[test]
    fn prop_int_round_trips_through_text(n in any::<i64>()) {
        let original = Value::Int(n);
        let mut fresh = Value::Int(0);
        fresh.set_from_str(&original.to_string()).unwrap();
        prop_assert_eq!(fresh, original);
    }

    #[test]
    fn prop_float_round_trips_through_text(f in finite_f64()) {
        let original = Value::Float(f);
        let mut fresh = Value::Float(0.0);
        fresh.set_from_str(&original.to_string()).unwrap();
        prop_assert!(almost_equal(fresh.to_float().unwrap(), f));
    }

    #[test]
    fn prop_bool_round_trips_through_text(b in any::<bool>()) {
        let original = Value::Bool(b);
        let mut fresh = Value::Bool(false);
        fresh.set_from_str(&original.to_string()).unwrap();
        prop_assert_eq!(fresh, original);
    }

    #[test]
    fn prop_string_round_trips_through_text(s in ".*") {
        let original = Value::Str(s.clone());
        let mut fresh = Value::Str(String::new());
        fresh.set_from_str(&original.to_string()).unwrap();
        prop_assert_eq!(fresh, original);
    }

    #[test]
    fn prop_int_to_float_widening_is_exact(n in -(1i64 << 53)..(1i64 << 53)) {
        let widened = Value::Int(n).to_float().unwrap();
        prop_assert_eq!(widened as i64, n);
    }

    #[test]
    fn prop_numeric_to_bool_is_nonzero(n in any::<i64>()) {
        prop_assert_eq!(Value::Int(n).to_bool().unwrap(), n != 0);
    }

    #[test]
    fn prop_flatten_flat_object_is_lossless(
        members in prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", any::<i64>(), 1..16)
    ) {
        let object = serde_json::Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::json!(*v)))
                .collect(),
        );
        let result = flatten(&object, "").unwrap();
        let expected: BTreeMap<String, Value> = members
            .iter()
            .map(|(k, v)| (k.clone(), Value::Int(*v)))
            .collect();
        prop_assert_eq!(result, expected);
    }
}
