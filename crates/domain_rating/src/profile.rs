//! Driver profile and age classification
//!
//! This module holds the caller-supplied input to a rating call and the
//! age-band classification used by the age factor rule.

use serde::{Deserialize, Serialize};

/// Driver profile submitted for rating
///
/// The engine only reads the profile; ownership stays with the caller.
/// Age and accident count are unsigned, so negative inputs are
/// unrepresentable and no runtime validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverProfile {
    /// Driver age in whole years
    pub age: u32,
    /// Number of at-fault accidents in the last five years
    pub accidents_in_last_five_years: u32,
    /// Vehicle manufacturer (e.g. "Toyota")
    pub vehicle_make: String,
    /// Vehicle model (e.g. "Camry")
    pub vehicle_model: String,
}

impl DriverProfile {
    /// Creates a new driver profile
    pub fn new(
        age: u32,
        accidents_in_last_five_years: u32,
        vehicle_make: impl Into<String>,
        vehicle_model: impl Into<String>,
    ) -> Self {
        Self {
            age,
            accidents_in_last_five_years,
            vehicle_make: vehicle_make.into(),
            vehicle_model: vehicle_model.into(),
        }
    }
}

/// Age bands used by the age factor rule
///
/// The bands are total over `u32`: every age falls in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBracket {
    /// Under 20
    Young,
    /// 20 to 24
    YoungAdult,
    /// 25 to 64
    Adult,
    /// 65 and older
    Senior,
}

impl AgeBracket {
    /// Returns the bracket containing the given age
    pub fn for_age(age: u32) -> Self {
        if age < 20 {
            AgeBracket::Young
        } else if age < 25 {
            AgeBracket::YoungAdult
        } else if age >= 65 {
            AgeBracket::Senior
        } else {
            AgeBracket::Adult
        }
    }

    /// Returns the knowledge base key holding this bracket's surcharge amount
    pub fn knowledge_key(&self) -> &'static str {
        match self {
            AgeBracket::Young => "ageFactor.young",
            AgeBracket::YoungAdult => "ageFactor.youngAdult",
            AgeBracket::Adult => "ageFactor.adult",
            AgeBracket::Senior => "ageFactor.senior",
        }
    }

    /// Returns the adjustment label for this bracket
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Young => "Young Driver Surcharge",
            AgeBracket::YoungAdult => "Young Adult Driver Surcharge",
            AgeBracket::Adult => "Adult Driver Adjustment",
            AgeBracket::Senior => "Senior Driver Surcharge",
        }
    }

    /// Returns the human-readable explanation for this bracket's adjustment
    pub fn explanation(&self) -> &'static str {
        match self {
            AgeBracket::Young => "Driver is under 20, higher risk category.",
            AgeBracket::YoungAdult => "Driver is between 20 and 24, moderate risk category.",
            AgeBracket::Adult => "Driver is 25-64, standard risk category.",
            AgeBracket::Senior => "Driver is 65 or older, senior risk category.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_boundaries() {
        assert_eq!(AgeBracket::for_age(0), AgeBracket::Young);
        assert_eq!(AgeBracket::for_age(19), AgeBracket::Young);
        assert_eq!(AgeBracket::for_age(20), AgeBracket::YoungAdult);
        assert_eq!(AgeBracket::for_age(24), AgeBracket::YoungAdult);
        assert_eq!(AgeBracket::for_age(25), AgeBracket::Adult);
        assert_eq!(AgeBracket::for_age(64), AgeBracket::Adult);
        assert_eq!(AgeBracket::for_age(65), AgeBracket::Senior);
        assert_eq!(AgeBracket::for_age(100), AgeBracket::Senior);
    }

    #[test]
    fn test_bracket_knowledge_keys() {
        assert_eq!(AgeBracket::Young.knowledge_key(), "ageFactor.young");
        assert_eq!(AgeBracket::YoungAdult.knowledge_key(), "ageFactor.youngAdult");
        assert_eq!(AgeBracket::Adult.knowledge_key(), "ageFactor.adult");
        assert_eq!(AgeBracket::Senior.knowledge_key(), "ageFactor.senior");
    }

    #[test]
    fn test_profile_construction() {
        let profile = DriverProfile::new(30, 0, "Toyota", "Camry");
        assert_eq!(profile.age, 30);
        assert_eq!(profile.accidents_in_last_five_years, 0);
        assert_eq!(profile.vehicle_make, "Toyota");
        assert_eq!(profile.vehicle_model, "Camry");
    }
}
