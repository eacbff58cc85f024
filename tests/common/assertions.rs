//! Assertion utilities for testing.

use serde_json::Value;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that every element of a JSON array is an object with exactly one key,
/// and return those keys in order.
pub fn single_key_objects(json: &Value) -> Vec<String> {
    let array = json.as_array().expect("response is not a JSON array");
    array
        .iter()
        .map(|entry| {
            let object = entry.as_object().expect("array entry is not an object");
            assert_eq!(object.len(), 1, "expected a single-key object, got {}", entry);
            object.keys().next().cloned().unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_single_key_objects() {
        let keys = single_key_objects(&json!([{"a": 1}, {"a": 2}, {"b": null}]));
        assert_eq!(keys, vec!["a", "a", "b"]);
    }
}
