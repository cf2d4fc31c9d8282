//! Badge detection
//!
//! Finds badges newly satisfied by the current action log. The idempotency
//! guard makes awarding at-most-once: a badge already in the earned set is
//! never re-emitted, no matter how far the log has grown past its target.

use chrono::{DateTime, Utc};

use super::catalog::CATALOG;
use super::progress::calculate_progress;
use crate::domain::{Action, EarnedBadge, Pet};

/// Detect badges this pet has newly completed.
///
/// Returns zero or more badges; a single action can complete several at once
/// (an action-count badge and a combo badge, say). Callers persist the result
/// and feed it back through the earned set on the next pass.
pub fn detect_new_badges(
    pet: &Pet,
    actions: &[Action],
    earned: &[EarnedBadge],
    trigger: Option<&Action>,
    now: DateTime<Utc>,
) -> Vec<EarnedBadge> {
    let mut new_badges = Vec::new();

    for badge in CATALOG {
        let already_earned = earned
            .iter()
            .any(|e| e.badge_id == badge.id && e.pet_id == pet.id);
        if already_earned {
            continue;
        }

        let progress = calculate_progress(pet, badge, actions, now);
        if progress.completed {
            tracing::debug!(badge = badge.id, pet = %pet.id, "badge unlocked");
            new_badges.push(EarnedBadge::new(badge.id, &pet.id, now, trigger));
        }
    }

    new_badges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids;
    use chrono::{Duration, TimeZone};

    fn pet() -> Pet {
        Pet {
            id: "rex".to_string(),
            name: "Rex".to_string(),
            age_in_months: 24,
        }
    }

    fn action(action_id: &str, points: i64, ts: DateTime<Utc>) -> Action {
        Action {
            pet_id: "rex".to_string(),
            action_id: action_id.to_string(),
            points,
            timestamp: ts,
            action_text: action_id.replace('_', " "),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_detection_is_idempotent() {
        let actions = vec![action(ids::BATH, 10, now())];
        let first_pass = detect_new_badges(&pet(), &actions, &[], None, now());
        assert!(first_pass.iter().any(|e| e.badge_id == "first_bath"));

        // Feed the results back: the second pass must emit nothing
        let second_pass = detect_new_badges(&pet(), &actions, &first_pass, None, now());
        assert!(second_pass.is_empty());
    }

    #[test]
    fn test_no_double_award_on_growing_log() {
        let already = vec![EarnedBadge::new("good_day", "rex", now(), None)];
        // Way past the 20-point day target, but the badge is already earned
        let actions: Vec<Action> = (0..20).map(|_| action(ids::WALK, 5, now())).collect();
        let detected = detect_new_badges(&pet(), &actions, &already, None, now());
        assert!(detected.iter().all(|e| e.badge_id != "good_day"));
    }

    #[test]
    fn test_single_action_completes_several_badges() {
        // Two prior walks today, then a third: completes both the hat_trick
        // combo and the 20-point good_day in the same pass.
        let mut actions = vec![
            action(ids::WALK, 8, now() - Duration::hours(3)),
            action(ids::WALK, 8, now() - Duration::hours(2)),
        ];
        let third = action(ids::WALK, 8, now());
        actions.push(third.clone());

        let detected = detect_new_badges(&pet(), &actions, &[], Some(&third), now());
        let ids_found: Vec<&str> = detected.iter().map(|e| e.badge_id.as_str()).collect();
        assert!(ids_found.contains(&"hat_trick"));
        assert!(ids_found.contains(&"good_day"));

        for earned in &detected {
            assert_eq!(earned.pet_id, "rex");
            assert_eq!(earned.earned_at, now());
            assert_eq!(earned.triggered_by.as_deref(), Some("walk (+8 pts): walk"));
        }
    }

    #[test]
    fn test_earned_set_is_scoped_per_pet() {
        // "mia" earning first_bath must not block "rex"
        let earned = vec![EarnedBadge::new("first_bath", "mia", now(), None)];
        let actions = vec![action(ids::BATH, 10, now())];
        let detected = detect_new_badges(&pet(), &actions, &earned, None, now());
        assert!(detected.iter().any(|e| e.badge_id == "first_bath"));
    }
}
