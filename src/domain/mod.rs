//! Core domain types for PawTrack

mod action;
mod earned;
mod pet;

pub use action::{ids, Action};
pub use earned::EarnedBadge;
pub use pet::{AgeGroup, Pet};
