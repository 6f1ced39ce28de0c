//! Application state aggregate
//!
//! `AppState` is the unit of persistence and of import/export. Every
//! field carries a serde default so a partial snapshot loads with each
//! missing field independently falling back, never failing outright.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::bill::Bill;
use super::budget_rule::BudgetRule;
use super::category::{default_categories, Bucket, Category};
use super::goal::Goal;
use super::ids::CategoryId;
use super::notification::Notification;
use super::settings::Settings;
use super::transaction::Transaction;

/// The aggregate root holding all domain collections
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub goals: Vec<Goal>,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub budget_rule: BudgetRule,

    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub notifications: Vec<Notification>,

    #[serde(default)]
    pub bills: Vec<Bill>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            goals: Vec::new(),
            categories: default_categories(),
            budget_rule: BudgetRule::default_rule(),
            settings: Settings::default(),
            notifications: Vec::new(),
            bills: Vec::new(),
        }
    }
}

impl AppState {
    /// Map from category id to its bucket, for expense classification
    pub fn bucket_map(&self) -> HashMap<CategoryId, Bucket> {
        self.categories.iter().map(|c| (c.id, c.bucket)).collect()
    }

    /// Look up a category name; dangling references resolve to
    /// "Uncategorized"
    pub fn category_name(&self, id: Option<CategoryId>) -> &str {
        id.and_then(|id| self.categories.iter().find(|c| c.id == id))
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }

    /// Re-sort transactions newest-first by date
    pub fn sort_transactions(&mut self) {
        self.transactions.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Merge newly generated notifications into history, newest-first
    pub fn merge_notifications(&mut self, new: Vec<Notification>) {
        if new.is_empty() {
            return;
        }
        self.notifications.extend(new);
        self.notifications
            .sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    /// Count of unread notifications
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::money::Money;
    use crate::models::notification::{Notification, NotificationKind};
    use crate::models::transaction::TransactionKind;
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_default_state_is_seeded() {
        let state = AppState::default();
        assert!(state.transactions.is_empty());
        assert!(state.goals.is_empty());
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.budget_rule.name, "50/30/20 Rule");
        assert_eq!(state.settings.currency, "USD");
    }

    #[test]
    fn test_partial_snapshot_defaults_field_by_field() {
        // Only transactions present; every other field falls back
        let json = r#"{"transactions": []}"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert_eq!(state.categories.len(), 8);
        assert_eq!(state.budget_rule, BudgetRule::default_rule());
        assert!(state.bills.is_empty());
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_category_name_dangling_reference() {
        let state = AppState::default();
        assert_eq!(state.category_name(None), "Uncategorized");
        assert_eq!(state.category_name(Some(CategoryId::new())), "Uncategorized");

        let known = state.categories[1].id;
        assert_eq!(state.category_name(Some(known)), "Groceries");
    }

    #[test]
    fn test_sort_transactions_newest_first() {
        let mut state = AppState::default();
        let older = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let newer = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

        let mut a = Transaction::new(TransactionKind::Expense, Money::from_cents(100));
        a.date = older;
        let mut b = Transaction::new(TransactionKind::Expense, Money::from_cents(200));
        b.date = newer;

        state.transactions = vec![a, b];
        state.sort_transactions();
        assert_eq!(state.transactions[0].date, newer);
    }

    #[test]
    fn test_merge_notifications_sorted_newest_first() {
        let mut state = AppState::default();
        let now = Utc::now();

        state.notifications.push(Notification::new(
            NotificationKind::BillDue,
            "old",
            now - Duration::hours(1),
            "k1",
        ));
        state.merge_notifications(vec![Notification::new(
            NotificationKind::GoalMilestone,
            "new",
            now,
            "k2",
        )]);

        assert_eq!(state.notifications.len(), 2);
        assert_eq!(state.notifications[0].message, "new");
        assert_eq!(state.unread_count(), 2);
    }
}
