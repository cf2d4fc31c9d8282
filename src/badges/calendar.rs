//! Local-calendar helpers for badge time windows
//!
//! Every day boundary in the engine uses the device-local timezone: a "day"
//! is a local calendar day and the day window starts at local midnight.
//! Instants themselves stay in UTC.

use std::collections::HashMap;

use chrono::{DateTime, Local, LocalResult, NaiveDate, Utc};

use crate::domain::Action;

/// Local calendar day containing the given instant.
pub fn local_day(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&Local).date_naive()
}

/// Start of the local calendar day containing `now`, as a UTC instant.
pub fn start_of_local_day(now: DateTime<Utc>) -> DateTime<Utc> {
    let Some(midnight) = local_day(now).and_hms_opt(0, 0, 0) else {
        return now;
    };
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Local midnight skipped by a DST jump
        LocalResult::None => now,
    }
}

/// Group one pet's actions by local calendar day.
pub fn actions_by_day<'a>(
    actions: &'a [Action],
    pet_id: &str,
) -> HashMap<NaiveDate, Vec<&'a Action>> {
    let mut by_day: HashMap<NaiveDate, Vec<&Action>> = HashMap::new();
    for action in actions.iter().filter(|a| a.pet_id == pet_id) {
        by_day.entry(local_day(action.timestamp)).or_default().push(action);
    }
    by_day
}
