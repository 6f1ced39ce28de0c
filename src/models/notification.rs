//! Notification model
//!
//! Notifications are synthesized by the generator pass and kept
//! newest-first in history. De-duplication uses a structural key
//! (type + subject + period or milestone) rather than message text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BillId, GoalId, NotificationId};
use super::category::Bucket;

/// What triggered a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    BillDue,
    BudgetExceeded,
    GoalMilestone,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BillDue => write!(f, "Bill due"),
            Self::BudgetExceeded => write!(f, "Budget exceeded"),
            Self::GoalMilestone => write!(f, "Goal milestone"),
        }
    }
}

/// A user-facing notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Unique identifier
    pub id: NotificationId,

    /// Trigger type
    #[serde(rename = "type")]
    pub kind: NotificationKind,

    /// User-facing message
    pub message: String,

    /// When the notification was generated
    pub timestamp: DateTime<Utc>,

    /// Whether the user has seen it
    #[serde(default)]
    pub is_read: bool,

    /// Structural de-duplication key; absent on notifications imported
    /// from snapshots that predate this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedup_key: Option<String>,
}

impl Notification {
    /// Create a new unread notification timestamped at `now`
    pub fn new(
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
        dedup_key: impl Into<String>,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            timestamp: now,
            is_read: false,
            dedup_key: Some(dedup_key.into()),
        }
    }

    /// Mark as read
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

/// De-dup key for a bill-due notification: one per bill per calendar month
pub fn bill_due_key(bill_id: BillId, year: i32, month: u32) -> String {
    format!("bill-due:{}:{:04}-{:02}", bill_id.as_uuid(), year, month)
}

/// De-dup key for a budget-exceeded notification: one per bucket per month
pub fn budget_exceeded_key(bucket: Bucket, year: i32, month: u32) -> String {
    format!("budget-exceeded:{}:{:04}-{:02}", bucket.key(), year, month)
}

/// De-dup key for a goal milestone: one per goal per threshold, ever
pub fn goal_milestone_key(goal_id: GoalId, milestone: u32) -> String {
    format!("goal-milestone:{}:{}", goal_id.as_uuid(), milestone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let now = Utc::now();
        let n = Notification::new(NotificationKind::BillDue, "Upcoming bill", now, "k");
        assert!(!n.is_read);
        assert_eq!(n.timestamp, now);
        assert_eq!(n.dedup_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_mark_read() {
        let mut n = Notification::new(NotificationKind::GoalMilestone, "50%", Utc::now(), "k");
        n.mark_read();
        assert!(n.is_read);
    }

    #[test]
    fn test_dedup_keys_are_stable() {
        let bill = BillId::new();
        assert_eq!(
            bill_due_key(bill, 2025, 3),
            format!("bill-due:{}:2025-03", bill.as_uuid())
        );

        assert_eq!(
            budget_exceeded_key(Bucket::Needs, 2025, 12),
            "budget-exceeded:needs:2025-12"
        );

        let goal = GoalId::new();
        assert_eq!(
            goal_milestone_key(goal, 75),
            format!("goal-milestone:{}:75", goal.as_uuid())
        );
    }

    #[test]
    fn test_legacy_snapshot_without_dedup_key_parses() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "type": "BILL_DUE",
            "message": "Upcoming bill: Netflix is due in 3 days.",
            "timestamp": "2025-01-25T10:00:00Z",
            "isRead": false
        }"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.kind, NotificationKind::BillDue);
        assert!(n.dedup_key.is_none());
    }
}
