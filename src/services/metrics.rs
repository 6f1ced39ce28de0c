//! Derived-metrics engine
//!
//! Pure, side-effect-free aggregation over the transaction list and
//! category map: balance, income totals, per-bucket spend, budget targets
//! and linear end-of-month projections.

use std::collections::HashMap;

use crate::models::{Bucket, BudgetRule, CategoryId, Money, Transaction};

/// Per-bucket expense totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketSpend {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
    /// Expense total whose category is missing or unknown
    pub uncategorized: Money,
}

impl BucketSpend {
    /// The amount spent in a given bucket
    pub fn get(&self, bucket: Bucket) -> Money {
        match bucket {
            Bucket::Needs => self.needs,
            Bucket::Wants => self.wants,
            Bucket::Savings => self.savings,
        }
    }

    /// Total expense across all buckets plus the uncategorized remainder
    pub fn total(&self) -> Money {
        self.needs + self.wants + self.savings + self.uncategorized
    }
}

/// Per-bucket budget targets derived from income and the active rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketTargets {
    pub needs: Money,
    pub wants: Money,
    pub savings: Money,
}

impl BucketTargets {
    /// The target for a given bucket
    pub fn get(&self, bucket: Bucket) -> Money {
        match bucket {
            Bucket::Needs => self.needs,
            Bucket::Wants => self.wants,
            Bucket::Savings => self.savings,
        }
    }
}

/// Overall balance: income minus expense over the entire history
pub fn balance(transactions: &[Transaction]) -> Money {
    transactions.iter().fold(Money::zero(), |acc, t| {
        if t.is_income() {
            acc + t.amount
        } else {
            acc - t.amount
        }
    })
}

/// Income total within a calendar month
pub fn total_income(transactions: &[Transaction], year: i32, month: u32) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_income() && t.in_month(year, month))
        .map(|t| t.amount)
        .sum()
}

/// Per-bucket expense totals within a calendar month
pub fn bucket_spend(
    transactions: &[Transaction],
    buckets: &HashMap<CategoryId, Bucket>,
    year: i32,
    month: u32,
) -> BucketSpend {
    accumulate(
        transactions
            .iter()
            .filter(|t| t.is_expense() && t.in_month(year, month)),
        buckets,
    )
}

/// Per-bucket expense totals over the entire history
pub fn bucket_spend_all(
    transactions: &[Transaction],
    buckets: &HashMap<CategoryId, Bucket>,
) -> BucketSpend {
    accumulate(transactions.iter().filter(|t| t.is_expense()), buckets)
}

fn accumulate<'a>(
    expenses: impl Iterator<Item = &'a Transaction>,
    buckets: &HashMap<CategoryId, Bucket>,
) -> BucketSpend {
    let mut spend = BucketSpend::default();
    for t in expenses {
        match t.category_id.and_then(|id| buckets.get(&id)) {
            Some(Bucket::Needs) => spend.needs += t.amount,
            Some(Bucket::Wants) => spend.wants += t.amount,
            Some(Bucket::Savings) => spend.savings += t.amount,
            None => spend.uncategorized += t.amount,
        }
    }
    spend
}

/// Budget targets for a month's income under the active rule
///
/// No clamping: a rule whose percentages exceed 100 in total is accepted
/// as-is.
pub fn budget_targets(income: Money, rule: &BudgetRule) -> BucketTargets {
    BucketTargets {
        needs: income.percent(rule.needs),
        wants: income.percent(rule.wants),
        savings: income.percent(rule.savings),
    }
}

/// Linear end-of-month projection of spending
///
/// Returns `None` when no projection is available: before any day of the
/// month has elapsed, or once the month is in its final elapsed day or
/// has ended.
pub fn month_end_projection(
    spent: Money,
    elapsed_days: u32,
    days_in_month: u32,
) -> Option<Money> {
    if elapsed_days == 0 || elapsed_days >= days_in_month {
        return None;
    }
    let daily_average = spent.cents() as f64 / elapsed_days as f64;
    let remaining = (days_in_month - elapsed_days) as f64;
    let projected = spent.cents() as f64 + daily_average * remaining;
    Some(Money::from_cents(projected.round() as i64))
}

/// Expense totals per category within a calendar month, for reports
///
/// Transactions with a missing or dangling category are grouped under
/// `None`.
pub fn expense_by_category(
    transactions: &[Transaction],
    known: &HashMap<CategoryId, Bucket>,
    year: i32,
    month: u32,
) -> HashMap<Option<CategoryId>, Money> {
    let mut totals: HashMap<Option<CategoryId>, Money> = HashMap::new();
    for t in transactions
        .iter()
        .filter(|t| t.is_expense() && t.in_month(year, month))
    {
        let key = t.category_id.filter(|id| known.contains_key(id));
        *totals.entry(key).or_insert_with(Money::zero) += t.amount;
    }
    totals
}
