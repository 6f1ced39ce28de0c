//! Core data models for fintrack

pub mod bill;
pub mod budget_rule;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod notification;
pub mod settings;
pub mod state;
pub mod transaction;

pub use bill::{days_in_month, Bill};
pub use budget_rule::BudgetRule;
pub use category::{default_categories, Bucket, Category};
pub use goal::{Goal, MILESTONES};
pub use ids::{BillId, CategoryId, GoalId, NotificationId, TransactionId};
pub use money::Money;
pub use notification::{Notification, NotificationKind};
pub use settings::Settings;
pub use state::AppState;
pub use transaction::{Transaction, TransactionKind};
