//! Pre-built Test Fixtures
//!
//! Provides ready-to-use driver profiles for common rating scenarios.
//! These fixtures are designed to be consistent and predictable for unit tests.

use domain_rating::DriverProfile;

/// Fixture for driver profile test data
pub struct ProfileFixtures;

impl ProfileFixtures {
    /// Adult sedan driver with a clean record (rates to the sedan base only)
    pub fn adult_sedan() -> DriverProfile {
        DriverProfile::new(30, 0, "Toyota", "Camry")
    }

    /// Teen sports-car driver with one accident
    pub fn teen_sports() -> DriverProfile {
        DriverProfile::new(17, 1, "Ford", "Mustang")
    }

    /// Senior luxury driver with three accidents
    pub fn senior_luxury() -> DriverProfile {
        DriverProfile::new(70, 3, "BMW", "X5")
    }

    /// Young adult SUV driver with a clean record
    pub fn young_adult_suv() -> DriverProfile {
        DriverProfile::new(22, 0, "Honda", "CRV")
    }

    /// Driver at the boundary of the young/young-adult brackets
    pub fn boundary_twenty() -> DriverProfile {
        DriverProfile::new(20, 0, "Honda", "Civic")
    }

    /// Driver at the boundary of the adult/senior brackets
    pub fn boundary_sixty_five() -> DriverProfile {
        DriverProfile::new(65, 0, "Honda", "Civic")
    }
}
