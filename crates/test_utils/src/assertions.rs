//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for premium results that give
//! more meaningful error messages than standard assertions.

use domain_rating::Premium;
use rust_decimal::Decimal;

/// Asserts that a premium's derived total matches the expected amount
///
/// # Panics
///
/// Panics with a breakdown of base rate and adjustments if the totals differ
pub fn assert_premium_total(premium: &Premium, expected: Decimal) {
    assert_eq!(
        premium.total(),
        expected,
        "Premium total mismatch: base_rate={}, adjustments={:?}",
        premium.base_rate(),
        premium.adjustments()
    );
}

/// Asserts that a premium carries exactly one adjustment with the given label
/// and amount
///
/// # Panics
///
/// Panics if the label is absent, duplicated, or carries a different amount
pub fn assert_has_adjustment(premium: &Premium, label: &str, amount: Decimal) {
    let matching: Vec<_> = premium
        .adjustments()
        .iter()
        .filter(|a| a.label == label)
        .collect();

    assert_eq!(
        matching.len(),
        1,
        "Expected exactly one '{}' adjustment, found {}: {:?}",
        label,
        matching.len(),
        premium.adjustments()
    );
    assert_eq!(
        matching[0].amount, amount,
        "Adjustment '{}' amount mismatch: expected {}, got {}",
        label, amount, matching[0].amount
    );
}

/// Asserts that a premium carries no adjustment with the given label
///
/// # Panics
///
/// Panics if an adjustment with the label is present
pub fn assert_no_adjustment(premium: &Premium, label: &str) {
    assert!(
        premium.adjustments().iter().all(|a| a.label != label),
        "Expected no '{}' adjustment, got {:?}",
        label,
        premium.adjustments()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_premium() -> Premium {
        let mut premium = Premium::new();
        premium.set_base_rate(dec!(1000.0));
        premium.add_adjustment("Surcharge", dec!(300.0), "sample");
        premium
    }

    #[test]
    fn test_assert_premium_total() {
        assert_premium_total(&sample_premium(), dec!(1300.0));
    }

    #[test]
    #[should_panic(expected = "Premium total mismatch")]
    fn test_assert_premium_total_panics_on_mismatch() {
        assert_premium_total(&sample_premium(), dec!(999.0));
    }

    #[test]
    fn test_assert_has_adjustment() {
        assert_has_adjustment(&sample_premium(), "Surcharge", dec!(300.0));
    }

    #[test]
    #[should_panic(expected = "Expected exactly one")]
    fn test_assert_has_adjustment_panics_when_absent() {
        assert_has_adjustment(&sample_premium(), "Discount", dec!(0.0));
    }

    #[test]
    fn test_assert_no_adjustment() {
        assert_no_adjustment(&sample_premium(), "Discount");
    }
}
