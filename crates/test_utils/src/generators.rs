//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use domain_rating::DriverProfile;
use proptest::prelude::*;

/// Make/model pairs covering every rating category chain
const KNOWN_VEHICLES: &[(&str, &str)] = &[
    ("Lexus", "ES350"),
    ("BMW", "X5"),
    ("Mercedes", "C300"),
    ("Ford", "Mustang"),
    ("Chevrolet", "Camaro"),
    ("Chevrolet", "Corvette"),
    ("Honda", "CRV"),
    ("Toyota", "RAV4"),
    ("Toyota", "Highlander"),
    ("Toyota", "Camry"),
    ("Honda", "Civic"),
];

/// Strategy for generating driver ages across all rating brackets
pub fn age_strategy() -> impl Strategy<Value = u32> {
    0u32..=110u32
}

/// Strategy for generating accident counts, zero included
pub fn accidents_strategy() -> impl Strategy<Value = u32> {
    0u32..=10u32
}

/// Strategy for generating vehicle make/model pairs
///
/// Draws mostly from each rating category's named chain, mixed with
/// arbitrary alphabetic strings so the sedan fallback is exercised too.
pub fn vehicle_strategy() -> impl Strategy<Value = (String, String)> {
    let known = proptest::sample::select(KNOWN_VEHICLES)
        .prop_map(|(make, model)| (make.to_string(), model.to_string()));
    let arbitrary = ("[A-Za-z]{2,10}", "[A-Za-z]{2,10}");

    prop_oneof![
        3 => known,
        1 => arbitrary,
    ]
}

/// Strategy for generating complete driver profiles
pub fn driver_profile_strategy() -> impl Strategy<Value = DriverProfile> {
    (age_strategy(), accidents_strategy(), vehicle_strategy()).prop_map(
        |(age, accidents, (make, model))| DriverProfile::new(age, accidents, make, model),
    )
}
