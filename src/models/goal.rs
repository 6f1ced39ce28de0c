//! Savings goal model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Progress milestones (percent) at which a goal notification fires
pub const MILESTONES: [u32; 4] = [50, 75, 90, 100];

/// A savings goal
///
/// `current_amount` is derived by the goal progress updater, not set by
/// the user. It is persisted alongside the rest of the goal but is
/// recomputed on every relevant state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name
    pub name: String,

    /// Target amount (expected > 0)
    pub target_amount: Money,

    /// Accumulated amount, derived from savings-bucket spending
    #[serde(default)]
    pub current_amount: Money,

    /// Target date
    pub deadline: NaiveDate,
}

impl Goal {
    /// Create a new goal with zero progress
    pub fn new(name: impl Into<String>, target_amount: Money, deadline: NaiveDate) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            current_amount: Money::zero(),
            deadline,
        }
    }

    /// Progress toward the target as a percentage
    ///
    /// A non-positive target is treated as 0% progress so the ratio never
    /// produces NaN or infinity.
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount.cents() <= 0 {
            return 0.0;
        }
        self.current_amount.cents() as f64 / self.target_amount.cents() as f64 * 100.0
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} ({:.0}%)",
            self.name,
            self.current_amount,
            self.target_amount,
            self.progress_percent()
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}
