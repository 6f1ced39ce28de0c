//! Budget rule model
//!
//! A named percentage split of income across the needs/wants/savings
//! buckets. Percentages are deliberately not validated to sum to 100;
//! the catalog rules do, but imported custom rules may not.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named percentage split of income across the three buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRule {
    /// Rule name as shown to the user
    pub name: String,

    /// Percentage of income allocated to needs
    pub needs: u32,

    /// Percentage of income allocated to wants
    pub wants: u32,

    /// Percentage of income allocated to savings
    pub savings: u32,
}

impl BudgetRule {
    /// Create a new rule
    pub fn new(name: impl Into<String>, needs: u32, wants: u32, savings: u32) -> Self {
        Self {
            name: name.into(),
            needs,
            wants,
            savings,
        }
    }

    /// The fixed catalog of selectable rules
    pub fn catalog() -> Vec<BudgetRule> {
        vec![
            BudgetRule::new("50/30/20 Rule", 50, 30, 20),
            BudgetRule::new("70/20/10 Rule", 70, 20, 10),
            BudgetRule::new("80/20 Rule (Savings-focused)", 80, 0, 20),
        ]
    }

    /// The default rule for fresh and recovered state
    pub fn default_rule() -> BudgetRule {
        BudgetRule::new("50/30/20 Rule", 50, 30, 20)
    }

    /// Look up a catalog rule by (case-insensitive) name prefix
    pub fn from_catalog(name: &str) -> Option<BudgetRule> {
        let needle = name.to_lowercase();
        Self::catalog()
            .into_iter()
            .find(|r| r.name.to_lowercase().starts_with(&needle))
    }
}

impl Default for BudgetRule {
    fn default() -> Self {
        Self::default_rule()
    }
}

impl fmt::Display for BudgetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}% needs, {}% wants, {}% savings)",
            self.name, self.needs, self.wants, self.savings
        )
    }
}
