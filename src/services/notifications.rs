//! Notification generator
//!
//! A recompute pass run after any change to transactions, goals, bills,
//! the budget rule, or categories. It is a pure function of the current
//! state and existing notification history; the caller merges the
//! returned batch.
//!
//! De-duplication is structural: each candidate carries a key of
//! (type, subject, period-or-milestone) and is suppressed iff an existing
//! notification carries the same key. Bill and budget keys embed the
//! calendar month and so re-fire monthly; milestone keys do not and fire
//! at most once ever per goal and threshold.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, Utc};

use crate::models::notification::{bill_due_key, budget_exceeded_key, goal_milestone_key};
use crate::models::{AppState, Bucket, Notification, NotificationKind, MILESTONES};
use crate::services::metrics;

/// Scan bills, budget actuals, and goal progress and synthesize the
/// notifications not yet present in history
pub fn generate(state: &AppState, now: DateTime<Utc>) -> Vec<Notification> {
    let existing: HashSet<&str> = state
        .notifications
        .iter()
        .filter_map(|n| n.dedup_key.as_deref())
        .collect();

    let today = now.date_naive();
    let (year, month) = (today.year(), today.month());
    let mut batch = Vec::new();

    // Rule 1: bills falling due within the next week
    for bill in &state.bills {
        let Some(due) = bill.due_date_in(year, month) else {
            continue;
        };
        let days_until = (due - today).num_days();
        if !(1..=7).contains(&days_until) {
            continue;
        }
        let key = bill_due_key(bill.id, year, month);
        if existing.contains(key.as_str()) {
            continue;
        }
        batch.push(Notification::new(
            NotificationKind::BillDue,
            format!(
                "Upcoming bill: {} is due in {} day{}.",
                bill.name,
                days_until,
                if days_until == 1 { "" } else { "s" }
            ),
            now,
            key,
        ));
    }

    // Rule 2: needs/wants spend exceeding a positive monthly budget
    let income = metrics::total_income(&state.transactions, year, month);
    let targets = metrics::budget_targets(income, &state.budget_rule);
    let spend = metrics::bucket_spend(&state.transactions, &state.bucket_map(), year, month);
    let symbol = state.settings.currency_symbol();

    for bucket in [Bucket::Needs, Bucket::Wants] {
        let budget = targets.get(bucket);
        let spent = spend.get(bucket);
        if !budget.is_positive() || spent <= budget {
            continue;
        }
        let key = budget_exceeded_key(bucket, year, month);
        if existing.contains(key.as_str()) {
            continue;
        }
        batch.push(Notification::new(
            NotificationKind::BudgetExceeded,
            format!(
                "You have exceeded your {} budget for this month: {} spent of {}.",
                bucket.label(),
                spent.format_with_symbol(symbol),
                budget.format_with_symbol(symbol),
            ),
            now,
            key,
        ));
    }

    // Rule 3: goal progress milestones, once ever per threshold
    for goal in &state.goals {
        let progress = goal.progress_percent();
        for milestone in MILESTONES {
            if progress < milestone as f64 {
                continue;
            }
            let key = goal_milestone_key(goal.id, milestone);
            if existing.contains(key.as_str()) {
                continue;
            }
            batch.push(Notification::new(
                NotificationKind::GoalMilestone,
                format!(
                    "Congratulations! You've reached {}% of your goal \"{}\".",
                    milestone, goal.name
                ),
                now,
                key,
            ));
        }
    }

    batch
}
