//! Section assignment domain models.
//!
//! Provides the core data types for describing an assignment problem
//! (who wants which section, how big each section may get, who is pinned)
//! and its solution.
//!
//! # Concepts
//!
//! | Type | Role |
//! |------|------|
//! | Section | One of five fixed, capacity-bounded groups |
//! | Person | Roster entry with two preferences and an optional veto |
//! | ContinuityItem | Hard pin of a person to a section |
//! | RestrictionPriorities | Ranks that select the placement strategy |
//! | Assignment | Section → ordered members |

mod assignment;
mod continuity;
mod person;
mod priority;
mod section;

pub use assignment::Assignment;
pub use continuity::ContinuityItem;
pub use person::{Person, NO_VETO};
pub use priority::{RestrictionPriorities, Strategy, UNRANKED};
pub use section::{Capacities, Section, SectionLimit, SectionLimits};
