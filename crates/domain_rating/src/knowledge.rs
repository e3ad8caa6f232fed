//! Rating knowledge base
//!
//! This module holds the fixed table of named numeric constants that rule
//! actions read during rating. The table is populated once at engine
//! construction and read-only thereafter.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RatingError;

/// Named numeric constants used by rule actions
///
/// Keys are namespaced by category: `baseRate.*`, `ageFactor.*`, and
/// `accidentSurcharge.*`. Looking up a key that was never registered is a
/// configuration defect and fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    entries: HashMap<String, Decimal>,
}

impl KnowledgeBase {
    /// Creates the standard knowledge base used by the standard rule set
    pub fn standard() -> Self {
        let mut entries = HashMap::new();

        entries.insert("baseRate.sedan".to_string(), dec!(1000.0));
        entries.insert("baseRate.suv".to_string(), dec!(600.0));
        entries.insert("baseRate.luxury".to_string(), dec!(1500.0));
        entries.insert("baseRate.sports".to_string(), dec!(1800.0));

        entries.insert("ageFactor.young".to_string(), dec!(1000.0));
        entries.insert("ageFactor.youngAdult".to_string(), dec!(900.0));
        entries.insert("ageFactor.adult".to_string(), dec!(0.0));
        entries.insert("ageFactor.senior".to_string(), dec!(450.0));

        entries.insert("accidentSurcharge.perAccident".to_string(), dec!(300.0));

        Self { entries }
    }

    /// Looks up an entry, failing fast if the key was never registered
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MissingKnowledgeEntry`] for unknown keys.
    pub fn get(&self, key: &str) -> Result<Decimal, RatingError> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| RatingError::missing_entry(key))
    }

    /// Returns true if the key is registered
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}
