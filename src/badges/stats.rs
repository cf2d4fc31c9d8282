//! Derived badge aggregates for the stats screen

use serde::{Deserialize, Serialize};

use super::catalog::{badge_by_id, BadgeCategory, Rarity, CATALOG};
use crate::domain::EarnedBadge;

/// How many recently earned badges the stats screen shows
const RECENT_BADGES: usize = 5;

/// Aggregate badge counts for one pet
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BadgeStats {
    pub earned_count: usize,
    pub total_count: usize,
    /// Earned share of the catalog, 0-100
    pub completion_percentage: u32,
    /// (rarity, earned count), in rarity order
    pub by_rarity: Vec<(Rarity, usize)>,
    /// (category, earned count), in catalog category order
    pub by_category: Vec<(BadgeCategory, usize)>,
    /// Most recently earned first
    pub recent: Vec<EarnedBadge>,
}

/// Compute aggregates over a pet's earned badges.
///
/// Earned records whose badge id no longer exists in the catalog still count
/// toward the totals but fall out of the rarity/category breakdowns.
pub fn badge_stats(earned: &[EarnedBadge], pet_id: &str) -> BadgeStats {
    let mut pet_earned: Vec<&EarnedBadge> =
        earned.iter().filter(|e| e.pet_id == pet_id).collect();
    pet_earned.sort_by_key(|e| std::cmp::Reverse(e.earned_at));

    let by_rarity = Rarity::all()
        .iter()
        .map(|&rarity| {
            let count = pet_earned
                .iter()
                .filter(|e| badge_by_id(&e.badge_id).is_some_and(|b| b.rarity == rarity))
                .count();
            (rarity, count)
        })
        .collect();

    let by_category = BadgeCategory::all()
        .iter()
        .map(|&category| {
            let count = pet_earned
                .iter()
                .filter(|e| badge_by_id(&e.badge_id).is_some_and(|b| b.category == category))
                .count();
            (category, count)
        })
        .collect();

    let total_count = CATALOG.len();
    let earned_count = pet_earned.len();

    BadgeStats {
        earned_count,
        total_count,
        completion_percentage: ((earned_count * 100) / total_count.max(1)).min(100) as u32,
        by_rarity,
        by_category,
        recent: pet_earned
            .into_iter()
            .take(RECENT_BADGES)
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn earned_at(badge_id: &str, pet_id: &str, days_ago: i64) -> EarnedBadge {
        let ts = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap() - Duration::days(days_ago);
        EarnedBadge::new(badge_id, pet_id, ts, None)
    }

    #[test]
    fn test_stats_counts_by_rarity_and_category() {
        let earned = vec![
            earned_at("first_bath", "rex", 3),  // common, hygiene
            earned_at("on_a_roll", "rex", 2),   // common, streak
            earned_at("clean_week", "rex", 1),  // epic, streak
            earned_at("first_bath", "mia", 0),  // other pet, excluded
        ];
        let stats = badge_stats(&earned, "rex");

        assert_eq!(stats.earned_count, 3);
        assert_eq!(stats.total_count, CATALOG.len());
        assert!(stats.completion_percentage > 0);

        let common = stats.by_rarity.iter().find(|(r, _)| *r == Rarity::Common);
        assert_eq!(common.map(|(_, c)| *c), Some(2));
        let epic = stats.by_rarity.iter().find(|(r, _)| *r == Rarity::Epic);
        assert_eq!(epic.map(|(_, c)| *c), Some(1));

        let streak = stats
            .by_category
            .iter()
            .find(|(c, _)| *c == BadgeCategory::Streak);
        assert_eq!(streak.map(|(_, c)| *c), Some(2));
    }

    #[test]
    fn test_recent_is_newest_first_and_capped() {
        let earned: Vec<EarnedBadge> = ["first_bath", "on_a_roll", "good_day", "hat_trick",
            "first_friend", "trick_star", "week_one"]
            .iter()
            .enumerate()
            .map(|(i, id)| earned_at(id, "rex", i as i64))
            .collect();

        let stats = badge_stats(&earned, "rex");
        assert_eq!(stats.recent.len(), RECENT_BADGES);
        assert_eq!(stats.recent[0].badge_id, "first_bath");
        for pair in stats.recent.windows(2) {
            assert!(pair[0].earned_at >= pair[1].earned_at);
        }
    }

    #[test]
    fn test_empty_earned_set() {
        let stats = badge_stats(&[], "rex");
        assert_eq!(stats.earned_count, 0);
        assert_eq!(stats.completion_percentage, 0);
        assert!(stats.recent.is_empty());
    }
}
