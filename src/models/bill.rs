//! Recurring bill model
//!
//! A bill is a recurring monthly obligation. No history of past
//! occurrences is kept; only the day of the month it falls due.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BillId;
use super::money::Money;

/// A recurring monthly bill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Unique identifier
    pub id: BillId,

    /// Bill name (e.g., "Netflix")
    pub name: String,

    /// Amount due each month
    pub amount: Money,

    /// Day of the month the bill is due (1-31)
    pub day_of_month: u32,
}

impl Bill {
    /// Create a new bill
    pub fn new(name: impl Into<String>, amount: Money, day_of_month: u32) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            day_of_month,
        }
    }

    /// The due date of this bill within the given calendar month
    ///
    /// Days 29-31 are clamped to the month's last day, so a bill due on
    /// the 31st falls due on Feb 28 (or 29) in February.
    pub fn due_date_in(&self, year: i32, month: u32) -> Option<NaiveDate> {
        let day = self.day_of_month.clamp(1, days_in_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), BillValidationError> {
        if self.name.trim().is_empty() {
            return Err(BillValidationError::EmptyName);
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(BillValidationError::InvalidDayOfMonth(self.day_of_month));
        }
        Ok(())
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (due day {})",
            self.name, self.amount, self.day_of_month
        )
    }
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1);
    match (first, next) {
        (Some(a), Some(b)) => b.signed_duration_since(a).num_days() as u32,
        _ => 30,
    }
}

/// Validation errors for bills
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillValidationError {
    EmptyName,
    InvalidDayOfMonth(u32),
}

impl fmt::Display for BillValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Bill name cannot be empty"),
            Self::InvalidDayOfMonth(day) => {
                write!(f, "Bill day of month must be 1-31, got {}", day)
            }
        }
    }
}

impl std::error::Error for BillValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_due_date() {
        let bill = Bill::new("Netflix", Money::from_cents(1599), 28);
        assert_eq!(
            bill.due_date_in(2025, 1),
            NaiveDate::from_ymd_opt(2025, 1, 28)
        );
    }

    #[test]
    fn test_due_date_clamps_to_month_end() {
        let bill = Bill::new("Rent", Money::from_cents(120_000), 31);
        assert_eq!(
            bill.due_date_in(2025, 2),
            NaiveDate::from_ymd_opt(2025, 2, 28)
        );
        assert_eq!(
            bill.due_date_in(2024, 2),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_validation() {
        assert!(Bill::new("Netflix", Money::from_cents(1599), 1)
            .validate()
            .is_ok());
        assert!(matches!(
            Bill::new("Netflix", Money::from_cents(1599), 0).validate(),
            Err(BillValidationError::InvalidDayOfMonth(0))
        ));
        assert!(matches!(
            Bill::new("Netflix", Money::from_cents(1599), 32).validate(),
            Err(BillValidationError::InvalidDayOfMonth(32))
        ));
    }

    #[test]
    fn test_wire_format() {
        let bill = Bill::new("Netflix", Money::from_cents(1599), 28);
        let json = serde_json::to_string(&bill).unwrap();
        assert!(json.contains("\"dayOfMonth\":28"));
    }
}
