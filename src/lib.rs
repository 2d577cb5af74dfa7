//! Section assignment for the U-Engine ecosystem.
//!
//! Places a roster of people into five fixed, capacity-bounded sections,
//! honoring continuity pins, ranked preferences, and vetoes, and reports
//! how well the result satisfies everyone.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `SectionLimits`, `Person`,
//!   `ContinuityItem`, `RestrictionPriorities`, `Strategy`, `Assignment`
//! - **`assigner`**: The assignment heuristic (strict-limits and
//!   preference-first strategies), statistics, and manual moves
//! - **`validation`**: Input integrity checks (duplicate names, incomplete
//!   or inconsistent limits)
//! - **`session`**: Aggregate of the stored inputs and latest result for
//!   one roster
//! - **`error`**: `AssignError` and the `AssignResult` alias
//!
//! # Guarantees
//!
//! Every person is placed exactly once. Pins always win. Section `max` is
//! respected except by the forced least-full fallback; section `min` is
//! advisory and only reported. The heuristic is greedy and randomized, not
//! optimal.

pub mod assigner;
pub mod error;
pub mod models;
pub mod session;
pub mod validation;

pub use assigner::{
    assign, assign_with_rng, move_person, recompute_statistics, AssignRequest, AssignmentOutcome,
    AssignmentStatistics, SectionAssigner,
};
pub use error::{AssignError, AssignResult};
