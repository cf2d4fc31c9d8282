use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged care event for a pet.
///
/// The action log is append-only: entries are never mutated or deleted, and
/// the log is the sole source of truth for badge progress. Point deltas may
/// be negative (accidents).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub pet_id: String,
    /// Action-type key, see [`ids`]
    pub action_id: String,
    pub points: i64,
    pub timestamp: DateTime<Utc>,
    /// Display label, denormalized at logging time
    pub action_text: String,
}

impl Action {
    pub fn is_positive(&self) -> bool {
        self.points > 0
    }
}

/// Action-type vocabulary shared with the host app.
///
/// Point values live on each logged [`Action`]; these constants only give
/// requirement rules stable keys to match on.
pub mod ids {
    // Hygiene
    pub const BATH: &str = "bath";
    pub const BRUSHING: &str = "brushing";
    pub const TEETH_BRUSHING: &str = "teeth_brushing";
    pub const NAIL_TRIM: &str = "nail_trim";

    // Daily care
    pub const WALK: &str = "walk";
    pub const MEAL: &str = "meal";
    pub const PLAY_SESSION: &str = "play_session";

    // Potty tracking
    pub const POTTY_OUTSIDE: &str = "potty_outside";
    pub const POOP_OUTSIDE: &str = "poop_outside";
    pub const ACCIDENT_PEE: &str = "accident_pee";
    pub const ACCIDENT_POOP: &str = "accident_poop";

    // Training
    pub const TRAINING_SIT: &str = "training_sit";
    pub const TRAINING_STAY: &str = "training_stay";
    pub const TRAINING_RECALL: &str = "training_recall";
    pub const NEW_TRICK: &str = "new_trick";

    // Social
    pub const DOG_PARK: &str = "dog_park";
    pub const MEET_DOG: &str = "meet_dog";
    pub const MEET_PEOPLE: &str = "meet_people";
    pub const VET_VISIT: &str = "vet_visit";
}
