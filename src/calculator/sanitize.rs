//! Free-form numeric input coercion

/// Coerce raw field text into an integer within `min..=max`.
///
/// Non-digit characters are dropped, so `"1,000"` reads as 1000. Empty input
/// or anything below `min` becomes `min`; anything above `max` becomes `max`.
/// The `min` check runs first, so an inverted range yields `max`.
pub fn sanitize(raw: &str, min: u32, max: u32) -> u32 {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let trimmed = digits.trim_start_matches('0');

    let value = if digits.is_empty() {
        None
    } else if trimmed.is_empty() {
        Some(0)
    } else {
        // Longer than u64 can hold is past any u32 bound anyway
        Some(trimmed.parse::<u64>().unwrap_or(u64::MAX))
    };

    let mut result = match value {
        Some(v) if v >= u64::from(min) => v,
        _ => u64::from(min),
    };
    if result > u64::from(max) {
        result = u64::from(max);
    }
    result as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_strips_leading_zeros() {
        assert_eq!(sanitize("007", 0, 100), 7);
        assert_eq!(sanitize("000", 0, 100), 0);
        assert_eq!(sanitize("0", 0, 100), 0);
    }

    #[test]
    fn test_empty_is_min() {
        assert_eq!(sanitize("", 5, 100), 5);
        assert_eq!(sanitize("abc", 1, 120), 1);
    }

    #[test]
    fn test_clamps_to_bounds() {
        assert_eq!(sanitize("99999", 0, 100), 100);
        assert_eq!(sanitize("0", 1, 120), 1);
        assert_eq!(sanitize("121", 1, 120), 120);
    }

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(sanitize("1,000,000", 0, 500_000_000), 1_000_000);
        assert_eq!(sanitize(" 4 2 ", 0, 100), 42);
        assert_eq!(sanitize("-15", 0, 100), 15);
        assert_eq!(sanitize("1.5", 0, 100), 15);
    }

    #[test]
    fn test_ignores_non_ascii_digits() {
        assert_eq!(sanitize("٣", 1, 120), 1);
        assert_eq!(sanitize("1٣2", 1, 120), 12);
    }

    #[test]
    fn test_huge_input_saturates() {
        let long = "9".repeat(40);
        assert_eq!(sanitize(&long, 0, 500_000_000), 500_000_000);
        assert_eq!(sanitize("18446744073709551616", 0, 10), 10);
    }

    #[test]
    fn test_inverted_range_yields_max() {
        assert_eq!(sanitize("50", 100, 10), 10);
        assert_eq!(sanitize("", 100, 10), 10);
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*", min in 0u32..1000, span in 0u32..1_000_000) {
            let max = min + span;
            let once = sanitize(&raw, min, max);
            prop_assert_eq!(sanitize(&once.to_string(), min, max), once);
        }

        #[test]
        fn sanitize_stays_in_bounds(raw in "[0-9a-z,]{0,20}", min in 0u32..1000, span in 0u32..1_000_000) {
            let max = min + span;
            let value = sanitize(&raw, min, max);
            prop_assert!(value >= min && value <= max);
        }
    }
}
