//! Transaction model
//!
//! Represents a single income or expense entry. Transactions are immutable
//! once created except via explicit update or delete by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Transaction amount (non-negative; the kind carries the sign)
    pub amount: Money,

    /// Category reference (dangling references are tolerated and render
    /// as "Uncategorized")
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// When the transaction occurred
    pub date: DateTime<Utc>,

    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Create a new transaction dated now
    pub fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category_id: None,
            date: Utc::now(),
            description: String::new(),
        }
    }

    /// Create a transaction with all common fields
    pub fn with_details(
        kind: TransactionKind,
        amount: Money,
        category_id: Option<CategoryId>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category_id,
            date,
            description: description.into(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Check if the transaction date falls inside a calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount cannot be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
