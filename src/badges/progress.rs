//! Badge progress calculation
//!
//! Pure functions from (pet, badge, action log, now) to a progress record.
//! Each requirement variant has its own matching algorithm. All of them are
//! total: an empty log yields zero progress, targets are floored at 1, and
//! nothing here panics on caller data.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::{actions_by_day, local_day};
use super::catalog::Badge;
use super::requirement::{
    Requirement, StreakKind, TimeBasedKind, TimeWindow, ACCIDENT_ACTION_IDS, CLEAN_ACTION_IDS,
};
use crate::domain::{Action, AgeGroup, Pet};

/// How far back the streak walk looks, in days
const STREAK_LOOKBACK_DAYS: u32 = 30;

/// Progress of one pet toward one badge. Recomputed on demand, never stored
/// independently of its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeProgress {
    pub badge_id: String,
    pub pet_id: String,
    pub current: u32,
    /// Always at least 1
    pub target: u32,
    /// 0-100, clamped
    pub percentage: u32,
    pub completed: bool,
    /// Remaining-amount hint for display; absent once completed and for
    /// binary rules
    pub next_milestone: Option<String>,
}

impl BadgeProgress {
    fn new(
        badge: &Badge,
        pet: &Pet,
        current: u32,
        target: u32,
        milestone: Option<String>,
    ) -> Self {
        let target = target.max(1);
        let completed = current >= target;
        Self {
            badge_id: badge.id.to_string(),
            pet_id: pet.id.clone(),
            current,
            target,
            percentage: (current.saturating_mul(100) / target).min(100),
            completed,
            next_milestone: if completed { None } else { milestone },
        }
    }
}

/// Compute `pet`'s progress toward `badge` from the full action log.
///
/// `now` anchors every time window; live callers pass `Utc::now()`.
pub fn calculate_progress(
    pet: &Pet,
    badge: &Badge,
    actions: &[Action],
    now: DateTime<Utc>,
) -> BadgeProgress {
    match badge.requirement {
        Requirement::ActionCount {
            action_ids,
            count,
            window,
        } => {
            let current = count_actions(pet, actions, action_ids, window, now);
            let remaining = count.saturating_sub(current);
            let milestone = Some(match window {
                Some(w) => format!("{remaining} more actions {}", w.label()),
                None => format!("{remaining} more actions"),
            });
            BadgeProgress::new(badge, pet, current, count, milestone)
        }
        Requirement::PointsTotal { points, window } => {
            let total = points_total(pet, actions, window, now);
            let current = u32::try_from(total).unwrap_or(u32::MAX);
            let target = u32::try_from(points).unwrap_or(u32::MAX);
            let milestone = Some(format!("{} more points", target.saturating_sub(current)));
            BadgeProgress::new(badge, pet, current, target, milestone)
        }
        Requirement::Streak { days, kind } => {
            let current = streak_length(pet, actions, kind, now);
            let milestone = Some(format!("{} more days", days.saturating_sub(current)));
            BadgeProgress::new(badge, pet, current, days, milestone)
        }
        Requirement::SpecificAction {
            action_id,
            age_group,
        } => {
            let matched = has_specific_action(pet, actions, action_id, age_group);
            BadgeProgress::new(badge, pet, matched as u32, 1, None)
        }
        Requirement::Combo { count } => {
            let current = combo_today(pet, actions, now);
            let milestone = Some(format!(
                "{} more actions today",
                count.saturating_sub(current)
            ));
            BadgeProgress::new(badge, pet, current, count, milestone)
        }
        Requirement::TimeBased {
            kind: TimeBasedKind::FirstWeek,
        } => {
            let within = within_first_week(pet, actions, now);
            BadgeProgress::new(badge, pet, within as u32, 1, None)
        }
    }
}

/// Count window-restricted actions whose id is in the rule's set
fn count_actions(
    pet: &Pet,
    actions: &[Action],
    action_ids: &[&str],
    window: Option<TimeWindow>,
    now: DateTime<Utc>,
) -> u32 {
    let cutoff = window.map(|w| w.start(now));
    actions
        .iter()
        .filter(|a| a.pet_id == pet.id)
        .filter(|a| action_ids.contains(&a.action_id.as_str()))
        .filter(|a| cutoff.map_or(true, |c| a.timestamp >= c))
        .count() as u32
}

/// Fold points chronologically, clamping the running total at zero. A bad
/// day reduces progress, but the reported total never goes negative.
fn points_total(
    pet: &Pet,
    actions: &[Action],
    window: Option<TimeWindow>,
    now: DateTime<Utc>,
) -> i64 {
    let cutoff = window.map(|w| w.start(now));
    let mut in_window: Vec<&Action> = actions
        .iter()
        .filter(|a| a.pet_id == pet.id)
        .filter(|a| cutoff.map_or(true, |c| a.timestamp >= c))
        .collect();
    in_window.sort_by_key(|a| a.timestamp);
    in_window
        .iter()
        .fold(0i64, |acc, a| (acc + a.points).max(0))
}

/// Walk backward day-by-day from today counting consecutive qualifying days.
///
/// A day counts when it has at least one qualifying action and no
/// disqualifying action; the walk breaks on the first disqualifier or the
/// first day without a qualifying action. Day 0 is forgiving: any activity
/// holds today's slot, and an empty day 0 is skipped rather than breaking,
/// since the day is still in progress when the engine runs.
fn streak_length(pet: &Pet, actions: &[Action], kind: StreakKind, now: DateTime<Utc>) -> u32 {
    let by_day = actions_by_day(actions, &pet.id);
    let today = local_day(now);
    let mut streak = 0u32;

    for offset in 0..STREAK_LOOKBACK_DAYS {
        let day = today - Duration::days(offset as i64);
        let day_actions = by_day.get(&day).map(Vec::as_slice).unwrap_or(&[]);

        if day_actions.iter().any(|a| is_accident(a)) {
            break;
        }
        if day_actions.iter().any(|a| qualifies(a, kind)) {
            streak += 1;
        } else if offset == 0 {
            if !day_actions.is_empty() {
                streak += 1;
            }
        } else {
            break;
        }
    }

    streak
}

fn qualifies(action: &Action, kind: StreakKind) -> bool {
    match kind {
        StreakKind::Daily { action_ids } => {
            action.is_positive()
                && (action_ids.is_empty() || action_ids.contains(&action.action_id.as_str()))
        }
        StreakKind::Clean => {
            action.is_positive() && CLEAN_ACTION_IDS.contains(&action.action_id.as_str())
        }
    }
}

fn is_accident(action: &Action) -> bool {
    ACCIDENT_ACTION_IDS.contains(&action.action_id.as_str())
}

/// Did the pet ever log this exact action, with the optional age gate applied
/// against the pet's current age group
fn has_specific_action(
    pet: &Pet,
    actions: &[Action],
    action_id: &str,
    age_group: Option<AgeGroup>,
) -> bool {
    if let Some(group) = age_group {
        if pet.age_group() != group {
            return false;
        }
    }
    actions
        .iter()
        .any(|a| a.pet_id == pet.id && a.action_id == action_id)
}

/// Count today's strictly positive actions
fn combo_today(pet: &Pet, actions: &[Action], now: DateTime<Utc>) -> u32 {
    let today = local_day(now);
    actions
        .iter()
        .filter(|a| a.pet_id == pet.id && a.is_positive())
        .filter(|a| local_day(a.timestamp) == today)
        .count() as u32
}

/// True when `now` falls within 7 days of the pet's very first logged action
fn within_first_week(pet: &Pet, actions: &[Action], now: DateTime<Utc>) -> bool {
    actions
        .iter()
        .filter(|a| a.pet_id == pet.id)
        .map(|a| a.timestamp)
        .min()
        .map_or(false, |first| now - first <= Duration::days(7))
}
