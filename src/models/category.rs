//! Category model
//!
//! Categories classify expense transactions into one of three budget
//! buckets (needs/wants/savings). Deleting a category does not cascade to
//! transactions referencing it; dangling references render as
//! "Uncategorized".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Budget bucket classification of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Bucket {
    Needs,
    Wants,
    Savings,
}

impl Bucket {
    /// Human-readable label, used in budget-exceeded messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Needs => "Needs",
            Self::Wants => "Wants",
            Self::Savings => "Savings",
        }
    }

    /// Stable lowercase key for notification de-duplication
    pub fn key(&self) -> &'static str {
        match self {
            Self::Needs => "needs",
            Self::Wants => "wants",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A spending category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Symbolic reference to a presentation asset
    #[serde(default)]
    pub icon: String,

    /// Budget bucket this category belongs to
    #[serde(rename = "type")]
    pub bucket: Bucket,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, icon: impl Into<String>, bucket: Bucket) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: icon.into(),
            bucket,
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The seeded category list used for fresh and recovered state
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Salary", "salary", Bucket::Savings),
        Category::new("Groceries", "groceries", Bucket::Needs),
        Category::new("Transport", "transport", Bucket::Needs),
        Category::new("Bills", "bills", Bucket::Needs),
        Category::new("Shopping", "shopping", Bucket::Wants),
        Category::new("Dining Out", "restaurant", Bucket::Wants),
        Category::new("Savings", "savings", Bucket::Savings),
        Category::new("Gift", "gift", Bucket::Wants),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
