//! # Fallback Estimator
//!
//! When the prediction endpoint cannot be reached, the UI still shows a
//! plausible number. It is derived from the selection by a seedless string
//! hash, so the same selection always shows the same value.

use crate::types::{PredictionResult, SelectionTuple};

/// Lower bound of the unscaled fallback yield, in tons per hectare.
pub const BASE_YIELD: f64 = 2.0;

/// A 32-bit signed rolling hash (`acc * 31 + c`) over the UTF-16 code units of
/// the input, wrapping on overflow.
pub fn string_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hashes the four selection fields concatenated in order.
pub fn selection_hash(selection: &SelectionTuple) -> i32 {
    let joined = format!(
        "{}{}{}{}",
        selection.crop, selection.region, selection.year, selection.scenario
    );
    string_hash(&joined)
}

/// The unscaled fallback yield, in `[2.0, 3.0)`.
pub fn base_yield(selection: &SelectionTuple) -> f64 {
    // Widen before `abs` so that `i32::MIN` stays positive.
    let hash = i64::from(selection_hash(selection)).abs();
    BASE_YIELD + (hash % 100) as f64 / 100.0
}

/// Derives the sample value shown when the live prediction is unavailable.
pub fn estimate(selection: &SelectionTuple) -> PredictionResult {
    let key = selection.scenario_key();
    PredictionResult {
        predicted_yield: base_yield(selection) * key.fallback_multiplier(),
        confidence: key.confidence(),
        is_fallback: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_hash_matches_reference_values() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        // 'a' * 31 + 'b'
        assert_eq!(string_hash("ab"), 3105);
        assert_eq!(string_hash("hello"), 99_162_322);
    }

    #[test]
    fn test_string_hash_wraps_on_overflow() {
        let long = "coffeedak-lak2026baseline".repeat(8);
        // Must not panic in debug builds and must stay stable.
        assert_eq!(string_hash(&long), string_hash(&long));
    }

    #[test]
    fn test_string_hash_uses_utf16_code_units() {
        // U+0110 (Đ) is one UTF-16 unit with value 272.
        assert_eq!(string_hash("Đ"), 272);
        // U+1F33E is a surrogate pair: 0xD83C, 0xDF3E.
        let expected = 0xD83Ci32.wrapping_mul(31).wrapping_add(0xDF3E);
        assert_eq!(string_hash("\u{1F33E}"), expected);
    }

    #[test]
    fn test_unknown_scenario_is_not_scaled() {
        let selection = SelectionTuple::new("coffee", "dak-lak", 2026, "hail");
        let result = estimate(&selection);
        assert_eq!(result.predicted_yield, base_yield(&selection));
    }
}
