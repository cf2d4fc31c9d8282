//! PawTrack - Pet care gamification engine
//!
//! PawTrack turns everyday pet care into a game: the host app logs actions
//! (walks, baths, potty trips, training sessions) and this crate evaluates
//! them against a static badge catalog, computing per-badge progress and
//! detecting newly earned badges.
//!
//! ## Usage
//!
//! ```ignore
//! let engine = BadgeEngine::new(actions, earned);
//!
//! // Progress for every catalog badge (progress widgets, detail screens)
//! let progress = engine.all_progress(&pet);
//!
//! // Badges newly satisfied after the latest action (celebration modal)
//! let new_badges = engine.detect_new_badges(&pet, Some(&action));
//! ```
//!
//! The engine performs no I/O. The caller owns the action log and the
//! earned-badge set, persists whatever `detect_new_badges` returns, and feeds
//! the updated collections back in on the next state change.

pub mod badges;
pub mod domain;

pub use badges::BadgeEngine;
pub use domain::*;
