//! Badge requirement rules
//!
//! Each badge carries exactly one requirement variant; the progress
//! calculator dispatches on it. Rule parameters reference the static action
//! vocabulary in [`crate::domain::ids`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::calendar::start_of_local_day;
use crate::domain::{ids, AgeGroup};

/// Potty actions that count as "clean" for clean streaks
pub const CLEAN_ACTION_IDS: &[&str] = &[ids::POTTY_OUTSIDE, ids::POOP_OUTSIDE];

/// Accident actions; any of these breaks a streak for the day it falls on
pub const ACCIDENT_ACTION_IDS: &[&str] = &[ids::ACCIDENT_PEE, ids::ACCIDENT_POOP];

/// Rolling time window for count and points rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeWindow {
    /// Since local midnight
    Day,
    /// Trailing 7 days
    Week,
    /// Trailing 30 days
    Month,
}

impl TimeWindow {
    /// Inclusive lower bound of the window ending at `now`
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Day => start_of_local_day(now),
            Self::Week => now - Duration::days(7),
            Self::Month => now - Duration::days(30),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "today",
            Self::Week => "this week",
            Self::Month => "this month",
        }
    }
}

/// Which actions sustain a streak day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakKind {
    /// Listed actions with positive points qualify; an empty list accepts any
    /// positive action. Accidents break the streak.
    Daily { action_ids: &'static [&'static str] },
    /// Accident-free potty days: clean actions qualify, accidents break
    Clean,
}

/// Rules anchored to the pet's history rather than a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBasedKind {
    /// Within 7 days of the pet's very first logged action
    FirstWeek,
}

/// Completion rule for a badge. Exactly one variant per badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Count matching actions inside a window (all time when `window` is None)
    ActionCount {
        action_ids: &'static [&'static str],
        count: u32,
        window: Option<TimeWindow>,
    },
    /// Accumulate points inside a window. The running total is clamped at
    /// zero: negative actions reduce progress but never drive it below zero.
    PointsTotal {
        points: i64,
        window: Option<TimeWindow>,
    },
    /// Consecutive qualifying days, walked backward from today
    Streak { days: u32, kind: StreakKind },
    /// A single exact action, optionally gated on the pet's current age group
    SpecificAction {
        action_id: &'static str,
        age_group: Option<AgeGroup>,
    },
    /// Several positive actions on the same local calendar day
    Combo { count: u32 },
    /// See [`TimeBasedKind`]
    TimeBased { kind: TimeBasedKind },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_window_start_ordering() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let day = TimeWindow::Day.start(now);
        let week = TimeWindow::Week.start(now);
        let month = TimeWindow::Month.start(now);
        assert!(day <= now);
        assert!(week < day);
        assert!(month < week);
        assert_eq!(week, now - Duration::days(7));
        assert_eq!(month, now - Duration::days(30));
    }

    #[test]
    fn test_accident_and_clean_sets_disjoint() {
        for id in CLEAN_ACTION_IDS {
            assert!(!ACCIDENT_ACTION_IDS.contains(id));
        }
    }
}
