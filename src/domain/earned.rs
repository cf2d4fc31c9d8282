use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Action;

/// A badge a pet has earned.
///
/// Created at most once per (pet, badge) pair; the engine never deletes one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarnedBadge {
    pub id: String,
    pub badge_id: String,
    pub pet_id: String,
    pub earned_at: DateTime<Utc>,
    /// Context describing the action that completed the badge, when known
    pub triggered_by: Option<String>,
}

impl EarnedBadge {
    pub fn new(
        badge_id: &str,
        pet_id: &str,
        earned_at: DateTime<Utc>,
        trigger: Option<&Action>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            badge_id: badge_id.to_string(),
            pet_id: pet_id.to_string(),
            earned_at,
            triggered_by: trigger.map(trigger_context),
        }
    }
}

/// Build the `triggered_by` context from the completing action
fn trigger_context(action: &Action) -> String {
    format!(
        "{} ({:+} pts): {}",
        action.action_id, action.points, action.action_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_context_format() {
        let action = Action {
            pet_id: "rex".to_string(),
            action_id: "walk".to_string(),
            points: 5,
            timestamp: Utc::now(),
            action_text: "Evening walk".to_string(),
        };
        let earned = EarnedBadge::new("on_a_roll", "rex", Utc::now(), Some(&action));
        assert_eq!(
            earned.triggered_by.as_deref(),
            Some("walk (+5 pts): Evening walk")
        );
    }

    #[test]
    fn test_no_trigger_leaves_context_empty() {
        let earned = EarnedBadge::new("on_a_roll", "rex", Utc::now(), None);
        assert!(earned.triggered_by.is_none());
        assert!(!earned.id.is_empty());
    }
}
