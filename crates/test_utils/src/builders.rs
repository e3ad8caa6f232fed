//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use domain_rating::DriverProfile;

/// Builder for constructing test driver profiles
///
/// Defaults to a 30-year-old sedan driver with a clean record.
pub struct DriverProfileBuilder {
    age: u32,
    accidents_in_last_five_years: u32,
    vehicle_make: String,
    vehicle_model: String,
}

impl Default for DriverProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DriverProfileBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            age: 30,
            accidents_in_last_five_years: 0,
            vehicle_make: "Toyota".to_string(),
            vehicle_model: "Camry".to_string(),
        }
    }

    /// Sets the driver age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Sets the accident count for the last five years
    pub fn with_accidents(mut self, accidents: u32) -> Self {
        self.accidents_in_last_five_years = accidents;
        self
    }

    /// Sets the vehicle make
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.vehicle_make = make.into();
        self
    }

    /// Sets the vehicle model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.vehicle_model = model.into();
        self
    }

    /// Sets both make and model
    pub fn with_vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.vehicle_make = make.into();
        self.vehicle_model = model.into();
        self
    }

    /// Builds the driver profile
    pub fn build(self) -> DriverProfile {
        DriverProfile::new(
            self.age,
            self.accidents_in_last_five_years,
            self.vehicle_make,
            self.vehicle_model,
        )
    }
}
