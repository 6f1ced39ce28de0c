//! Financial tip collaborator
//!
//! The outbound AI-tip call is an opaque collaborator: given a goal it
//! returns a short text suggestion, or a fallback string when the backing
//! service is unavailable. Providers are infallible by contract; failures
//! surface as the fallback text, never as an error.

use crate::models::Goal;

/// Fixed message a provider returns when no tip can be produced
pub const FALLBACK_TIP: &str =
    "Sorry, I couldn't fetch a tip right now. Please try again later.";

/// Source of short motivational tips for a savings goal
pub trait TipProvider {
    /// Produce a tip for the given goal. Must not fail; implementations
    /// return [`FALLBACK_TIP`] when the underlying service errors.
    fn tip(&self, goal: &Goal) -> String;
}

/// Offline provider backed by a small set of canned suggestions
///
/// Stands in for the network-backed advisor when no API key is
/// configured. Deterministic per goal so repeated requests are stable.
#[derive(Debug, Default)]
pub struct CannedTips;

const CANNED: [&str; 4] = [
    "Automate a small weekly transfer toward this goal; consistency beats size.",
    "Review one recurring subscription this week and redirect it to your goal.",
    "Round up everyday purchases and sweep the difference into your goal.",
    "Set a mid-point reward for yourself; milestones make the target feel closer.",
];

impl TipProvider for CannedTips {
    fn tip(&self, goal: &Goal) -> String {
        let idx = goal
            .name
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_add(b as usize))
            % CANNED.len();
        format!("{} (toward \"{}\")", CANNED[idx], goal.name)
    }
}

/// The provider used when no external advisor is wired in
///
/// The network-backed advisor is an external collaborator and lives
/// outside this crate; callers plug it in through [`TipProvider`].
pub fn default_provider() -> Box<dyn TipProvider> {
    Box::new(CannedTips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn goal(name: &str) -> Goal {
        Goal::new(
            name,
            Money::from_cents(100_000),
            NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
        )
    }

    #[test]
    fn test_canned_tips_are_deterministic() {
        let provider = CannedTips;
        let g = goal("Vacation");
        assert_eq!(provider.tip(&g), provider.tip(&g));
    }

    #[test]
    fn test_tip_mentions_goal_name() {
        let provider = CannedTips;
        assert!(provider.tip(&goal("Emergency Fund")).contains("Emergency Fund"));
    }

    #[test]
    fn test_default_provider_never_panics() {
        let provider = default_provider();
        let text = provider.tip(&goal("Laptop"));
        assert!(!text.is_empty());
    }
}
