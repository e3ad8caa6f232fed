//! Premium accumulation
//!
//! This module holds the per-rating accumulator and its adjustment records.
//! A fresh `Premium` is created for every rating call; rules set the base
//! rate and append adjustments, and the total is derived on demand.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named, explained delta applied on top of the base rate
///
/// Amounts may be negative, though no standard rule produces one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    /// Short label identifying the adjustment (e.g. "Accident History Surcharge")
    pub label: String,
    /// Amount added to the premium
    pub amount: Decimal,
    /// Human-readable explanation of why the adjustment applies
    pub explanation: String,
}

/// The computed output of a rating call
///
/// A premium is a base rate plus an ordered, append-only list of
/// adjustments. Adjustments appear in rule evaluation order and are never
/// removed or rewritten once appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    base_rate: Decimal,
    adjustments: Vec<Adjustment>,
}

impl Premium {
    /// Creates an empty premium with a zero base rate and no adjustments
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the base rate
    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    /// Returns the adjustments in insertion order
    pub fn adjustments(&self) -> &[Adjustment] {
        &self.adjustments
    }

    /// Sets the base rate
    ///
    /// Last write wins; the standard rule set contains exactly one rule
    /// that sets the base rate.
    pub fn set_base_rate(&mut self, base_rate: Decimal) {
        self.base_rate = base_rate;
    }

    /// Appends an adjustment
    pub fn add_adjustment(
        &mut self,
        label: impl Into<String>,
        amount: Decimal,
        explanation: impl Into<String>,
    ) {
        self.adjustments.push(Adjustment {
            label: label.into(),
            amount,
            explanation: explanation.into(),
        });
    }

    /// Calculates the total premium
    ///
    /// # Returns
    ///
    /// Base rate plus the sum of all adjustment amounts
    pub fn total(&self) -> Decimal {
        self.base_rate + self.adjustments.iter().map(|a| a.amount).sum::<Decimal>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_premium() {
        let premium = Premium::new();

        assert_eq!(premium.base_rate(), dec!(0));
        assert!(premium.adjustments().is_empty());
        assert_eq!(premium.total(), dec!(0));
    }

    #[test]
    fn test_total_is_base_plus_adjustments() {
        let mut premium = Premium::new();
        premium.set_base_rate(dec!(1000.0));
        premium.add_adjustment("Surcharge A", dec!(900.0), "first");
        premium.add_adjustment("Discount B", dec!(-150.0), "second");

        assert_eq!(premium.total(), dec!(1750.0));
    }

    #[test]
    fn test_adjustments_keep_insertion_order() {
        let mut premium = Premium::new();
        premium.add_adjustment("first", dec!(1.0), "one");
        premium.add_adjustment("second", dec!(2.0), "two");
        premium.add_adjustment("third", dec!(3.0), "three");

        let labels: Vec<&str> = premium.adjustments().iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_zero_valued_adjustment_is_kept() {
        let mut premium = Premium::new();
        premium.add_adjustment("Adult Driver Adjustment", dec!(0.0), "standard");

        assert_eq!(premium.adjustments().len(), 1);
        assert_eq!(premium.total(), dec!(0.0));
    }

    #[test]
    fn test_serialized_shape_for_audit_output() {
        let mut premium = Premium::new();
        premium.set_base_rate(dec!(600.0));
        premium.add_adjustment("Young Adult Driver Surcharge", dec!(900.0), "moderate risk");

        let json = serde_json::to_value(&premium).unwrap();
        assert_eq!(json["base_rate"], "600.0");
        assert_eq!(json["adjustments"][0]["label"], "Young Adult Driver Surcharge");
        assert_eq!(json["adjustments"][0]["amount"], "900.0");
        assert_eq!(json["adjustments"][0]["explanation"], "moderate risk");
    }

    #[test]
    fn test_set_base_rate_last_write_wins() {
        let mut premium = Premium::new();
        premium.set_base_rate(dec!(600.0));
        premium.set_base_rate(dec!(1800.0));

        assert_eq!(premium.base_rate(), dec!(1800.0));
    }
}
