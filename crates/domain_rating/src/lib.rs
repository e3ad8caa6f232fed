//! Motor Rating Domain
//!
//! This crate implements premium rating for motor insurance driver profiles.
//! A rating run applies an ordered sequence of rules; each rule pairs a
//! condition over the profile with an action that contributes a base rate or
//! a labeled, explained adjustment to the premium accumulator.
//!
//! # Architecture
//!
//! The domain layer is infrastructure-agnostic, containing only rating logic:
//! - **Knowledge Base**: the fixed table of named numeric constants read by
//!   rule actions, populated once at engine construction
//! - **Rules**: condition/action pairs evaluated strictly in registration
//!   order
//! - **Premium**: the per-call accumulator holding a base rate and an
//!   append-only adjustment list; the total is derived, never stored
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(22, 0, "Honda", "CRV");
//!
//! let premium = engine.calculate_premium(&profile)?;
//! assert_eq!(premium.adjustments().len(), 1);
//! # Ok::<(), domain_rating::RatingError>(())
//! ```

pub mod engine;
pub mod error;
pub mod knowledge;
pub mod premium;
pub mod profile;
pub mod vehicle;

pub use engine::{RatingEngine, Rule};
pub use error::RatingError;
pub use knowledge::KnowledgeBase;
pub use premium::{Adjustment, Premium};
pub use profile::{AgeBracket, DriverProfile};
pub use vehicle::{categorize, VehicleCategory};
