//! Goal progress updater
//!
//! Recomputes each goal's accumulated amount from savings-bucket spending
//! using an equal split across all defined goals. This is a destructive
//! recomputation: per-goal contribution history is not tracked.

use crate::models::{AppState, Money};
use crate::services::metrics;

/// Recompute every goal's `current_amount`
///
/// The total historical expense in savings-bucket categories is divided
/// evenly across all goals, and each goal's amount is capped at its
/// target. Runs whenever transactions or the goal set change; a no-op
/// when there are no goals.
pub fn recompute_progress(state: &mut AppState) {
    if state.goals.is_empty() {
        return;
    }

    let buckets = state.bucket_map();
    let saved = metrics::bucket_spend_all(&state.transactions, &buckets).savings;
    let share = saved.split_evenly(state.goals.len());

    for goal in &mut state.goals {
        goal.current_amount = share.min(goal.target_amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Transaction, TransactionKind};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn goal(name: &str, target_cents: i64) -> Goal {
        Goal::new(
            name,
            Money::from_cents(target_cents),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        )
    }

    fn savings_expense(state: &AppState, cents: i64) -> Transaction {
        let savings_cat = state
            .categories
            .iter()
            .find(|c| c.name == "Savings")
            .unwrap()
            .id;
        Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(cents),
            Some(savings_cat),
            Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            "transfer to savings",
        )
    }

    #[test]
    fn test_equal_split_across_goals() {
        let mut state = AppState::default();
        state.goals.push(goal("Vacation", 100_000));
        state.goals.push(goal("Laptop", 100_000));
        let txn = savings_expense(&state, 30_000);
        state.transactions.push(txn);

        recompute_progress(&mut state);

        // $300 split two ways: $150 each
        assert_eq!(state.goals[0].current_amount.cents(), 15_000);
        assert_eq!(state.goals[1].current_amount.cents(), 15_000);
    }

    #[test]
    fn test_share_capped_at_target() {
        let mut state = AppState::default();
        state.goals.push(goal("Small", 10_000));
        state.goals.push(goal("Large", 100_000));
        let txn = savings_expense(&state, 30_000);
        state.transactions.push(txn);

        recompute_progress(&mut state);

        assert_eq!(state.goals[0].current_amount.cents(), 10_000); // capped
        assert_eq!(state.goals[1].current_amount.cents(), 15_000);
    }

    #[test]
    fn test_recomputation_is_destructive() {
        let mut state = AppState::default();
        state.goals.push(goal("Vacation", 100_000));
        state.goals[0].current_amount = Money::from_cents(99_999);

        // No savings spend on record: progress resets to zero
        recompute_progress(&mut state);
        assert_eq!(state.goals[0].current_amount, Money::zero());
    }

    #[test]
    fn test_no_goals_is_a_noop() {
        let mut state = AppState::default();
        let txn = savings_expense(&state, 30_000);
        state.transactions.push(txn);

        recompute_progress(&mut state);
        assert!(state.goals.is_empty());
    }

    #[test]
    fn test_non_savings_spend_does_not_count() {
        let mut state = AppState::default();
        state.goals.push(goal("Vacation", 100_000));
        let groceries = state.categories[1].id;
        state.transactions.push(Transaction::with_details(
            TransactionKind::Expense,
            Money::from_cents(50_000),
            Some(groceries),
            Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            "Groceries",
        ));

        recompute_progress(&mut state);
        assert_eq!(state.goals[0].current_amount, Money::zero());
    }
}
