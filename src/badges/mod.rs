//! Badge engine: catalog, progress calculation, and detection
//!
//! Evaluates a pet's append-only action log against the static badge catalog.
//! Everything is a pure function over in-memory collections; the engine is
//! cheap enough to run on every state change.
//!
//! # Usage
//!
//! ```ignore
//! let mut engine = BadgeEngine::new(actions, earned);
//!
//! // After the UI logs a new action:
//! let new_badges = engine.detect_new_badges(&pet, Some(&latest_action));
//! persist(&new_badges);
//! engine.record_earned(new_badges);
//!
//! // Progress widgets and the stats screen:
//! let progress = engine.all_progress(&pet);
//! let stats = engine.badge_stats(&pet.id);
//! ```

mod calendar;
mod catalog;
mod detector;
mod progress;
mod requirement;
mod stats;

pub use catalog::{
    badge_by_id, badges_in_category, badges_with_rarity, validate_catalog, Badge, BadgeCategory,
    CatalogError, Rarity, CATALOG,
};
pub use detector::detect_new_badges;
pub use progress::{calculate_progress, BadgeProgress};
pub use requirement::{
    Requirement, StreakKind, TimeBasedKind, TimeWindow, ACCIDENT_ACTION_IDS, CLEAN_ACTION_IDS,
};
pub use stats::BadgeStats;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::domain::{Action, EarnedBadge, Pet};

/// Stateless badge engine over caller-supplied snapshots.
///
/// Holds nothing beyond the two collections it was constructed with and
/// performs no I/O. Callers reconstruct it (or feed it updates through
/// [`BadgeEngine::record_action`] and [`BadgeEngine::record_earned`])
/// whenever the action log or earned set changes.
pub struct BadgeEngine {
    actions: Vec<Action>,
    earned: Vec<EarnedBadge>,
}

impl BadgeEngine {
    pub fn new(actions: Vec<Action>, earned: Vec<EarnedBadge>) -> Self {
        tracing::debug!(
            actions = actions.len(),
            earned = earned.len(),
            "badge engine ready"
        );
        Self { actions, earned }
    }

    /// Build an engine from the JSON payloads the host app bridge ships
    pub fn from_json(actions_json: &str, earned_json: &str) -> Result<Self> {
        let actions: Vec<Action> =
            serde_json::from_str(actions_json).context("parse action log")?;
        let earned: Vec<EarnedBadge> =
            serde_json::from_str(earned_json).context("parse earned badges")?;
        Ok(Self::new(actions, earned))
    }

    /// Progress for every catalog badge, in catalog order
    pub fn all_progress(&self, pet: &Pet) -> Vec<BadgeProgress> {
        self.all_progress_at(pet, Utc::now())
    }

    pub fn all_progress_at(&self, pet: &Pet, now: DateTime<Utc>) -> Vec<BadgeProgress> {
        CATALOG
            .iter()
            .map(|badge| calculate_progress(pet, badge, &self.actions, now))
            .collect()
    }

    /// Badges newly satisfied by the current log, respecting the
    /// at-most-once guard over the earned set
    pub fn detect_new_badges(&self, pet: &Pet, trigger: Option<&Action>) -> Vec<EarnedBadge> {
        self.detect_new_badges_at(pet, trigger, Utc::now())
    }

    pub fn detect_new_badges_at(
        &self,
        pet: &Pet,
        trigger: Option<&Action>,
        now: DateTime<Utc>,
    ) -> Vec<EarnedBadge> {
        detect_new_badges(pet, &self.actions, &self.earned, trigger, now)
    }

    /// Append a newly logged action to the snapshot
    pub fn record_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Feed freshly persisted badges back into the snapshot so repeated
    /// detection on a reused engine stays idempotent
    pub fn record_earned(&mut self, badges: Vec<EarnedBadge>) {
        self.earned.extend(badges);
    }

    /// All badges this pet has earned, in insertion order
    pub fn earned_badges(&self, pet_id: &str) -> Vec<&EarnedBadge> {
        self.earned.iter().filter(|e| e.pet_id == pet_id).collect()
    }

    /// Aggregate counts for the stats screen
    pub fn badge_stats(&self, pet_id: &str) -> BadgeStats {
        stats::badge_stats(&self.earned, pet_id)
    }
}
