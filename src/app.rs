//! Application state container
//!
//! Owns the `AppState` and runs every mutation to completion: apply the
//! change, recompute goal progress, regenerate notifications, then
//! persist. Mutations are synchronous and never overlap. A persistence
//! write failure is logged and swallowed; the mutation itself still
//! succeeds.

use std::io::Write;

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{FinTrackError, FinTrackResult};
use crate::export;
use crate::models::{
    AppState, Bill, BillId, Bucket, BudgetRule, Category, CategoryId, Goal, GoalId, Money,
    NotificationId, Settings, Transaction, TransactionId, TransactionKind,
};
use crate::services::{goals, notifications};
use crate::storage::Store;

/// The application: state plus its persistence adapter
pub struct App {
    state: AppState,
    store: Store,
}

impl App {
    /// Open the application, loading the persisted snapshot
    pub fn open(store: Store) -> Self {
        let state = store.load();
        Self { state, store }
    }

    /// Read access to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    // --- transactions ---

    /// Record a transaction and return its id
    pub fn add_transaction(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        category_id: Option<CategoryId>,
        date: DateTime<Utc>,
        description: impl Into<String>,
    ) -> FinTrackResult<TransactionId> {
        let txn = Transaction::with_details(kind, amount, category_id, date, description);
        txn.validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let id = txn.id;
        self.state.transactions.push(txn);
        self.state.sort_transactions();
        self.after_mutation();
        Ok(id)
    }

    /// Replace an existing transaction by id
    pub fn update_transaction(&mut self, updated: Transaction) -> FinTrackResult<()> {
        updated
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let slot = self
            .state
            .transactions
            .iter_mut()
            .find(|t| t.id == updated.id)
            .ok_or_else(|| FinTrackError::transaction_not_found(updated.id.to_string()))?;
        *slot = updated;
        self.state.sort_transactions();
        self.after_mutation();
        Ok(())
    }

    /// Delete a transaction by id
    pub fn delete_transaction(&mut self, id: TransactionId) -> FinTrackResult<()> {
        let before = self.state.transactions.len();
        self.state.transactions.retain(|t| t.id != id);
        if self.state.transactions.len() == before {
            return Err(FinTrackError::transaction_not_found(id.to_string()));
        }
        self.after_mutation();
        Ok(())
    }

    // --- goals ---

    /// Add a savings goal with zero progress
    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
    ) -> FinTrackResult<GoalId> {
        let goal = Goal::new(name, target_amount, deadline);
        goal.validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let id = goal.id;
        self.state.goals.push(goal);
        self.after_mutation();
        Ok(id)
    }

    /// Delete a goal by id
    pub fn delete_goal(&mut self, id: GoalId) -> FinTrackResult<()> {
        let before = self.state.goals.len();
        self.state.goals.retain(|g| g.id != id);
        if self.state.goals.len() == before {
            return Err(FinTrackError::goal_not_found(id.to_string()));
        }
        self.after_mutation();
        Ok(())
    }

    // --- bills ---

    /// Add a recurring monthly bill
    pub fn add_bill(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        day_of_month: u32,
    ) -> FinTrackResult<BillId> {
        let bill = Bill::new(name, amount, day_of_month);
        bill.validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let id = bill.id;
        self.state.bills.push(bill);
        self.after_mutation();
        Ok(id)
    }

    /// Delete a bill by id
    pub fn delete_bill(&mut self, id: BillId) -> FinTrackResult<()> {
        let before = self.state.bills.len();
        self.state.bills.retain(|b| b.id != id);
        if self.state.bills.len() == before {
            return Err(FinTrackError::bill_not_found(id.to_string()));
        }
        self.after_mutation();
        Ok(())
    }

    // --- categories ---

    /// Add a spending category
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        icon: impl Into<String>,
        bucket: Bucket,
    ) -> FinTrackResult<CategoryId> {
        let category = Category::new(name, icon, bucket);
        category
            .validate()
            .map_err(|e| FinTrackError::Validation(e.to_string()))?;

        let id = category.id;
        self.state.categories.push(category);
        self.after_mutation();
        Ok(id)
    }

    /// Delete a category by id
    ///
    /// Transactions referencing it are left untouched; the dangling
    /// reference renders as "Uncategorized" and contributes to no bucket.
    pub fn delete_category(&mut self, id: CategoryId) -> FinTrackResult<()> {
        let before = self.state.categories.len();
        self.state.categories.retain(|c| c.id != id);
        if self.state.categories.len() == before {
            return Err(FinTrackError::category_not_found(id.to_string()));
        }
        self.after_mutation();
        Ok(())
    }

    // --- rule and settings ---

    /// Select the active budget rule
    pub fn set_budget_rule(&mut self, rule: BudgetRule) {
        self.state.budget_rule = rule;
        self.after_mutation();
    }

    /// Update presentation settings
    pub fn update_settings(&mut self, settings: Settings) {
        self.state.settings = settings;
        // Settings are presentation-only; no recompute pass needed
        self.persist();
    }

    // --- notifications ---

    /// Mark one notification as read
    pub fn mark_read(&mut self, id: NotificationId) -> FinTrackResult<()> {
        let notification = self
            .state
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| FinTrackError::NotFound {
                entity_type: "Notification",
                identifier: id.to_string(),
            })?;
        notification.mark_read();
        self.persist();
        Ok(())
    }

    /// Mark every notification as read
    pub fn mark_all_read(&mut self) {
        for n in &mut self.state.notifications {
            n.mark_read();
        }
        self.persist();
    }

    // --- snapshot operations ---

    /// Write the full snapshot to `writer`
    pub fn export_to<W: Write>(&self, writer: &mut W) -> FinTrackResult<()> {
        export::export_snapshot(&self.state, writer, true)
    }

    /// Replace all state from an exported snapshot
    ///
    /// Validates first; on failure nothing changes.
    pub fn import(&mut self, raw: &str) -> FinTrackResult<()> {
        let mut imported = export::import_snapshot(raw)?;
        imported.sort_transactions();
        self.state = imported;
        self.after_mutation();
        Ok(())
    }

    /// Clear persisted state and reinitialize to defaults
    pub fn erase_all(&mut self) -> FinTrackResult<()> {
        self.store.erase_all()?;
        self.state = AppState::default();
        Ok(())
    }

    // --- internals ---

    /// The recompute pass run after every state-affecting mutation
    fn after_mutation(&mut self) {
        goals::recompute_progress(&mut self.state);
        let batch = notifications::generate(&self.state, Utc::now());
        self.state.merge_notifications(batch);
        self.persist();
    }

    /// Persist the snapshot; write failures are logged, not fatal
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!(error = %e, "failed to persist snapshot, continuing");
        }
    }
}
