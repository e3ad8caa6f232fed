//! Rating engine
//!
//! This module pairs the knowledge base with the ordered rule table and
//! runs the rating loop. Each rule couples a condition over the driver
//! profile with an action that mutates the premium accumulator; rating a
//! profile evaluates every rule in registration order and applies the
//! actions whose conditions match.
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{DriverProfile, RatingEngine};
//!
//! let engine = RatingEngine::new();
//! let profile = DriverProfile::new(30, 0, "Toyota", "Camry");
//!
//! let premium = engine.calculate_premium(&profile)?;
//! println!("total: {}", premium.total());
//! # Ok::<(), domain_rating::RatingError>(())
//! ```

use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::error::RatingError;
use crate::knowledge::KnowledgeBase;
use crate::premium::Premium;
use crate::profile::{AgeBracket, DriverProfile};
use crate::vehicle;

type Condition = Box<dyn Fn(&DriverProfile) -> bool + Send + Sync>;
type Action =
    Box<dyn Fn(&KnowledgeBase, &DriverProfile, &mut Premium) -> Result<(), RatingError> + Send + Sync>;

/// A single rating rule: a named condition/action pair
///
/// The name exists for diagnostics and traceability. Actions receive the
/// knowledge base explicitly so rules stay plain records without captured
/// engine state.
pub struct Rule {
    name: &'static str,
    condition: Condition,
    action: Action,
}

impl Rule {
    /// Creates a new rule
    pub fn new(
        name: &'static str,
        condition: impl Fn(&DriverProfile) -> bool + Send + Sync + 'static,
        action: impl Fn(&KnowledgeBase, &DriverProfile, &mut Premium) -> Result<(), RatingError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            name,
            condition: Box::new(condition),
            action: Box::new(action),
        }
    }

    /// Returns the rule name
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Engine that rates driver profiles against the standard rule set
///
/// The knowledge base and rule table are built once at construction and
/// never mutated afterwards, so a constructed engine can be shared across
/// threads (e.g. behind an `Arc`) without locking. Each rating call owns
/// its own [`Premium`] accumulator exclusively.
pub struct RatingEngine {
    knowledge: KnowledgeBase,
    rules: Vec<Rule>,
}

impl RatingEngine {
    /// Creates an engine with the standard knowledge base and rule set
    pub fn new() -> Self {
        Self {
            knowledge: KnowledgeBase::standard(),
            rules: standard_rules(),
        }
    }

    /// Rates a driver profile
    ///
    /// Evaluates every rule's condition in registration order and applies
    /// the matching actions to a fresh premium accumulator. All applicable
    /// rules run to completion; no rule short-circuits another.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MissingKnowledgeEntry`] if a rule action
    /// references an unregistered knowledge base key. No partial premium is
    /// returned on failure.
    pub fn calculate_premium(&self, profile: &DriverProfile) -> Result<Premium, RatingError> {
        let mut premium = Premium::new();

        for rule in &self.rules {
            if (rule.condition)(profile) {
                debug!(rule = rule.name, "applying rating rule");
                (rule.action)(&self.knowledge, profile, &mut premium)?;
            } else {
                trace!(rule = rule.name, "rating rule skipped");
            }
        }

        Ok(premium)
    }

    /// Returns the rule names in registration order
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name)
    }

    /// Returns the knowledge base
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the standard rule table, in evaluation order
fn standard_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "base rate",
            |_| true,
            |kb, profile, premium| {
                let category = vehicle::categorize(&profile.vehicle_make, &profile.vehicle_model);
                let base_rate = kb.get(&format!("baseRate.{}", category.knowledge_key()))?;
                premium.set_base_rate(base_rate);
                Ok(())
            },
        ),
        Rule::new(
            "age factor",
            |_| true,
            |kb, profile, premium| {
                let bracket = AgeBracket::for_age(profile.age);
                let amount = kb.get(bracket.knowledge_key())?;
                premium.add_adjustment(bracket.label(), amount, bracket.explanation());
                Ok(())
            },
        ),
        Rule::new(
            "accident history",
            |profile| profile.accidents_in_last_five_years > 0,
            |kb, profile, premium| {
                let accidents = profile.accidents_in_last_five_years;
                let per_accident = kb.get("accidentSurcharge.perAccident")?;
                let surcharge = Decimal::from(accidents) * per_accident;
                premium.add_adjustment(
                    "Accident History Surcharge",
                    surcharge,
                    format!("{} accident(s) in the last five years.", accidents),
                );
                Ok(())
            },
        ),
    ]
}
