//! Badge definitions and metadata
//!
//! The catalog is static and versioned with the crate: ids must stay stable
//! within a release so persisted `EarnedBadge.badge_id` references remain
//! valid. Names, descriptions, and icons are presentation content only.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::requirement::{Requirement, StreakKind, TimeBasedKind, TimeWindow};
use crate::domain::{ids, AgeGroup};

/// Badge rarity, ordered common < rare < epic < legendary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Rare => "rare",
            Self::Epic => "epic",
            Self::Legendary => "legendary",
        }
    }

    pub fn all() -> &'static [Rarity] {
        &[Self::Common, Self::Rare, Self::Epic, Self::Legendary]
    }
}

/// Badge category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Hygiene,
    Behavior,
    Training,
    Social,
    Streak,
    Special,
}

impl BadgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hygiene => "hygiene",
            Self::Behavior => "behavior",
            Self::Training => "training",
            Self::Social => "social",
            Self::Streak => "streak",
            Self::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hygiene => "Hygiene",
            Self::Behavior => "Behavior",
            Self::Training => "Training",
            Self::Social => "Social",
            Self::Streak => "Streaks",
            Self::Special => "Special",
        }
    }

    pub fn all() -> &'static [BadgeCategory] {
        &[
            Self::Hygiene,
            Self::Behavior,
            Self::Training,
            Self::Social,
            Self::Streak,
            Self::Special,
        ]
    }
}

/// Badge definition with all metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub category: BadgeCategory,
    pub requirement: Requirement,
}

/// All badge definitions
pub static CATALOG: &[Badge] = &[
    // === HYGIENE ===
    Badge {
        id: "first_bath",
        name: "Fresh Start",
        description: "Give your pet their first bath",
        icon: "🛁",
        rarity: Rarity::Common,
        category: BadgeCategory::Hygiene,
        requirement: Requirement::SpecificAction {
            action_id: ids::BATH,
            age_group: None,
        },
    },
    Badge {
        id: "squeaky_clean",
        name: "Squeaky Clean",
        description: "Three baths within a month",
        icon: "🧼",
        rarity: Rarity::Rare,
        category: BadgeCategory::Hygiene,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::BATH],
            count: 3,
            window: Some(TimeWindow::Month),
        },
    },
    Badge {
        id: "grooming_routine",
        name: "Grooming Routine",
        description: "Ten grooming sessions within a month",
        icon: "✂️",
        rarity: Rarity::Rare,
        category: BadgeCategory::Hygiene,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::BATH, ids::BRUSHING, ids::NAIL_TRIM, ids::TEETH_BRUSHING],
            count: 10,
            window: Some(TimeWindow::Month),
        },
    },
    Badge {
        id: "pearly_whites",
        name: "Pearly Whites",
        description: "Brush your pet's teeth five times in a week",
        icon: "🦷",
        rarity: Rarity::Epic,
        category: BadgeCategory::Hygiene,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::TEETH_BRUSHING],
            count: 5,
            window: Some(TimeWindow::Week),
        },
    },
    // === BEHAVIOR ===
    Badge {
        id: "potty_rookie",
        name: "Potty Rookie",
        description: "Ten successful potty trips outside",
        icon: "🌱",
        rarity: Rarity::Common,
        category: BadgeCategory::Behavior,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::POTTY_OUTSIDE, ids::POOP_OUTSIDE],
            count: 10,
            window: None,
        },
    },
    Badge {
        id: "potty_pro",
        name: "Potty Pro",
        description: "One hundred successful potty trips outside",
        icon: "🏆",
        rarity: Rarity::Epic,
        category: BadgeCategory::Behavior,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::POTTY_OUTSIDE, ids::POOP_OUTSIDE],
            count: 100,
            window: None,
        },
    },
    Badge {
        id: "good_day",
        name: "Good Day",
        description: "Earn 20 points in a single day",
        icon: "☀️",
        rarity: Rarity::Common,
        category: BadgeCategory::Behavior,
        requirement: Requirement::PointsTotal {
            points: 20,
            window: Some(TimeWindow::Day),
        },
    },
    Badge {
        id: "busy_week",
        name: "Busy Week",
        description: "Earn 100 points in a week",
        icon: "📅",
        rarity: Rarity::Rare,
        category: BadgeCategory::Behavior,
        requirement: Requirement::PointsTotal {
            points: 100,
            window: Some(TimeWindow::Week),
        },
    },
    Badge {
        id: "point_collector",
        name: "Point Collector",
        description: "Accumulate 500 points",
        icon: "💰",
        rarity: Rarity::Rare,
        category: BadgeCategory::Behavior,
        requirement: Requirement::PointsTotal {
            points: 500,
            window: None,
        },
    },
    Badge {
        id: "point_hoarder",
        name: "Point Hoarder",
        description: "Accumulate 2000 points",
        icon: "👑",
        rarity: Rarity::Legendary,
        category: BadgeCategory::Behavior,
        requirement: Requirement::PointsTotal {
            points: 2000,
            window: None,
        },
    },
    // === TRAINING ===
    Badge {
        id: "early_learner",
        name: "Early Learner",
        description: "Master Sit while still a puppy",
        icon: "🎓",
        rarity: Rarity::Rare,
        category: BadgeCategory::Training,
        requirement: Requirement::SpecificAction {
            action_id: ids::TRAINING_SIT,
            age_group: Some(AgeGroup::Chiot),
        },
    },
    Badge {
        id: "recall_ready",
        name: "Recall Ready",
        description: "Practice recall ten times",
        icon: "📣",
        rarity: Rarity::Common,
        category: BadgeCategory::Training,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::TRAINING_RECALL],
            count: 10,
            window: None,
        },
    },
    Badge {
        id: "trick_star",
        name: "Trick Star",
        description: "Learn five new tricks",
        icon: "🌟",
        rarity: Rarity::Rare,
        category: BadgeCategory::Training,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::NEW_TRICK],
            count: 5,
            window: None,
        },
    },
    Badge {
        id: "obedience_week",
        name: "Obedience Week",
        description: "Fifteen training sessions in a week",
        icon: "🎯",
        rarity: Rarity::Epic,
        category: BadgeCategory::Training,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::TRAINING_SIT, ids::TRAINING_STAY, ids::TRAINING_RECALL],
            count: 15,
            window: Some(TimeWindow::Week),
        },
    },
    // === SOCIAL ===
    Badge {
        id: "first_friend",
        name: "First Friend",
        description: "Meet another dog",
        icon: "🐕",
        rarity: Rarity::Common,
        category: BadgeCategory::Social,
        requirement: Requirement::SpecificAction {
            action_id: ids::MEET_DOG,
            age_group: None,
        },
    },
    Badge {
        id: "social_butterfly",
        name: "Social Butterfly",
        description: "Twenty social outings",
        icon: "🦋",
        rarity: Rarity::Rare,
        category: BadgeCategory::Social,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::DOG_PARK, ids::MEET_DOG, ids::MEET_PEOPLE],
            count: 20,
            window: None,
        },
    },
    Badge {
        id: "park_regular",
        name: "Park Regular",
        description: "Four dog park visits in a week",
        icon: "🌳",
        rarity: Rarity::Rare,
        category: BadgeCategory::Social,
        requirement: Requirement::ActionCount {
            action_ids: &[ids::DOG_PARK],
            count: 4,
            window: Some(TimeWindow::Week),
        },
    },
    Badge {
        id: "checkup_champ",
        name: "Checkup Champ",
        description: "A vet visit in your pet's senior years",
        icon: "🩺",
        rarity: Rarity::Rare,
        category: BadgeCategory::Social,
        requirement: Requirement::SpecificAction {
            action_id: ids::VET_VISIT,
            age_group: Some(AgeGroup::Senior),
        },
    },
    // === STREAK ===
    Badge {
        id: "on_a_roll",
        name: "On a Roll",
        description: "Three active days in a row",
        icon: "🔥",
        rarity: Rarity::Common,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 3,
            kind: StreakKind::Daily { action_ids: &[] },
        },
    },
    Badge {
        id: "dedicated_week",
        name: "Dedicated Week",
        description: "Seven active days in a row",
        icon: "📆",
        rarity: Rarity::Rare,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 7,
            kind: StreakKind::Daily { action_ids: &[] },
        },
    },
    Badge {
        id: "unstoppable",
        name: "Unstoppable",
        description: "Thirty active days in a row",
        icon: "⚡",
        rarity: Rarity::Legendary,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 30,
            kind: StreakKind::Daily { action_ids: &[] },
        },
    },
    Badge {
        id: "walk_week",
        name: "Walk Week",
        description: "A walk every day for seven days",
        icon: "🚶",
        rarity: Rarity::Epic,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 7,
            kind: StreakKind::Daily {
                action_ids: &[ids::WALK],
            },
        },
    },
    Badge {
        id: "clean_week",
        name: "Clean Week",
        description: "Seven accident-free days",
        icon: "✨",
        rarity: Rarity::Epic,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 7,
            kind: StreakKind::Clean,
        },
    },
    Badge {
        id: "clean_month",
        name: "Clean Month",
        description: "Thirty accident-free days",
        icon: "🏅",
        rarity: Rarity::Legendary,
        category: BadgeCategory::Streak,
        requirement: Requirement::Streak {
            days: 30,
            kind: StreakKind::Clean,
        },
    },
    // === SPECIAL ===
    Badge {
        id: "hat_trick",
        name: "Hat Trick",
        description: "Three actions in one day",
        icon: "🎩",
        rarity: Rarity::Common,
        category: BadgeCategory::Special,
        requirement: Requirement::Combo { count: 3 },
    },
    Badge {
        id: "super_day",
        name: "Super Day",
        description: "Five actions in one day",
        icon: "💪",
        rarity: Rarity::Rare,
        category: BadgeCategory::Special,
        requirement: Requirement::Combo { count: 5 },
    },
    Badge {
        id: "marathon_day",
        name: "Marathon Day",
        description: "Ten actions in one day",
        icon: "🏃",
        rarity: Rarity::Epic,
        category: BadgeCategory::Special,
        requirement: Requirement::Combo { count: 10 },
    },
    Badge {
        id: "week_one",
        name: "Week One",
        description: "Active during your pet's first week",
        icon: "🐾",
        rarity: Rarity::Common,
        category: BadgeCategory::Special,
        requirement: Requirement::TimeBased {
            kind: TimeBasedKind::FirstWeek,
        },
    },
];

static BADGE_INDEX: Lazy<HashMap<&'static str, &'static Badge>> =
    Lazy::new(|| CATALOG.iter().map(|b| (b.id, b)).collect());

/// Look up a badge definition by its stable id
pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGE_INDEX.get(id).copied()
}

/// All badges in a category, in catalog order
pub fn badges_in_category(category: BadgeCategory) -> Vec<&'static Badge> {
    CATALOG.iter().filter(|b| b.category == category).collect()
}

/// All badges of a rarity, in catalog order
pub fn badges_with_rarity(rarity: Rarity) -> Vec<&'static Badge> {
    CATALOG.iter().filter(|b| b.rarity == rarity).collect()
}

/// Catalog authoring defects. Caught by the test suite, never at runtime.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate badge id `{0}`")]
    DuplicateId(&'static str),
    #[error("badge `{0}` has a zero target")]
    ZeroTarget(&'static str),
    #[error("badge `{0}` has an empty action-id set")]
    EmptyActionSet(&'static str),
}

/// Check the catalog for authoring defects
pub fn validate_catalog() -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for badge in CATALOG {
        if !seen.insert(badge.id) {
            return Err(CatalogError::DuplicateId(badge.id));
        }
        match badge.requirement {
            Requirement::ActionCount { action_ids, count, .. } => {
                if action_ids.is_empty() {
                    return Err(CatalogError::EmptyActionSet(badge.id));
                }
                if count == 0 {
                    return Err(CatalogError::ZeroTarget(badge.id));
                }
            }
            Requirement::PointsTotal { points, .. } => {
                if points <= 0 {
                    return Err(CatalogError::ZeroTarget(badge.id));
                }
            }
            Requirement::Streak { days, .. } => {
                if days == 0 {
                    return Err(CatalogError::ZeroTarget(badge.id));
                }
            }
            Requirement::SpecificAction { action_id, .. } => {
                if action_id.is_empty() {
                    return Err(CatalogError::EmptyActionSet(badge.id));
                }
            }
            Requirement::Combo { count } => {
                if count == 0 {
                    return Err(CatalogError::ZeroTarget(badge.id));
                }
            }
            Requirement::TimeBased { .. } => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        validate_catalog().unwrap();
    }

    #[test]
    fn test_badge_lookup() {
        let badge = badge_by_id("first_bath").unwrap();
        assert_eq!(badge.name, "Fresh Start");
        assert!(badge_by_id("no_such_badge").is_none());
    }

    #[test]
    fn test_every_category_and_rarity_represented() {
        for &category in BadgeCategory::all() {
            assert!(
                !badges_in_category(category).is_empty(),
                "no badges in {}",
                category.as_str()
            );
        }
        for &rarity in Rarity::all() {
            assert!(
                !badges_with_rarity(rarity).is_empty(),
                "no badges with rarity {}",
                rarity.as_str()
            );
        }
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Epic);
        assert!(Rarity::Epic < Rarity::Legendary);
    }
}
