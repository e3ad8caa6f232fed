//! Vehicle categorization
//!
//! This module classifies a vehicle into a rating category from its make
//! and model. Classification is a fixed priority chain with case-insensitive
//! substring matching; it always produces a category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating categories for vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    /// Luxury makes (Lexus, BMW, Mercedes)
    Luxury,
    /// Sports models (Mustang, Camaro, Corvette)
    Sports,
    /// SUV models (CRV, RAV4, Highlander)
    Suv,
    /// Everything else
    Sedan,
}

impl VehicleCategory {
    /// Returns the key fragment used in `baseRate.<category>` lookups
    pub fn knowledge_key(&self) -> &'static str {
        match self {
            VehicleCategory::Luxury => "luxury",
            VehicleCategory::Sports => "sports",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Sedan => "sedan",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.knowledge_key())
    }
}

/// Determines the rating category for a vehicle
///
/// Matching is case-insensitive and by substring, first match wins:
///
/// 1. Luxury makes
/// 2. Sports models
/// 3. SUV models
/// 4. Sedan otherwise
pub fn categorize(make: &str, model: &str) -> VehicleCategory {
    let make = make.to_lowercase();
    let model = model.to_lowercase();

    const LUXURY_MAKES: [&str; 3] = ["lexus", "bmw", "mercedes"];
    const SPORTS_MODELS: [&str; 3] = ["mustang", "camaro", "corvette"];
    const SUV_MODELS: [&str; 3] = ["crv", "rav4", "highlander"];

    if LUXURY_MAKES.iter().any(|m| make.contains(m)) {
        VehicleCategory::Luxury
    } else if SPORTS_MODELS.iter().any(|m| model.contains(m)) {
        VehicleCategory::Sports
    } else if SUV_MODELS.iter().any(|m| model.contains(m)) {
        VehicleCategory::Suv
    } else {
        VehicleCategory::Sedan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luxury_makes() {
        assert_eq!(categorize("BMW", "X5"), VehicleCategory::Luxury);
        assert_eq!(categorize("Lexus", "RX350"), VehicleCategory::Luxury);
        assert_eq!(categorize("Mercedes-Benz", "C300"), VehicleCategory::Luxury);
    }

    #[test]
    fn test_sports_models() {
        assert_eq!(categorize("Ford", "Mustang"), VehicleCategory::Sports);
        assert_eq!(categorize("Chevrolet", "Camaro"), VehicleCategory::Sports);
        assert_eq!(categorize("Chevrolet", "Corvette"), VehicleCategory::Sports);
    }

    #[test]
    fn test_suv_models() {
        assert_eq!(categorize("Honda", "CRV"), VehicleCategory::Suv);
        assert_eq!(categorize("Toyota", "RAV4"), VehicleCategory::Suv);
        assert_eq!(categorize("Toyota", "Highlander"), VehicleCategory::Suv);
    }

    #[test]
    fn test_sedan_fallback() {
        assert_eq!(categorize("Toyota", "Camry"), VehicleCategory::Sedan);
        assert_eq!(categorize("Honda", "Civic"), VehicleCategory::Sedan);
        assert_eq!(categorize("", ""), VehicleCategory::Sedan);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("bmw", "x5"), VehicleCategory::Luxury);
        assert_eq!(categorize("FORD", "MUSTANG"), VehicleCategory::Sports);
        assert_eq!(categorize("honda", "CrV"), VehicleCategory::Suv);
    }

    #[test]
    fn test_substring_matching() {
        // "Mustang Mach-E" still contains "mustang"
        assert_eq!(categorize("Ford", "Mustang Mach-E"), VehicleCategory::Sports);
        assert_eq!(categorize("Honda", "CR-V"), VehicleCategory::Sedan);
    }

    #[test]
    fn test_make_takes_priority_over_model() {
        // Luxury make wins even with a sports model name
        assert_eq!(categorize("BMW", "Mustang"), VehicleCategory::Luxury);
        // Sports model wins over SUV model when both would match
        assert_eq!(categorize("Ford", "Mustang RAV4"), VehicleCategory::Sports);
    }
}
