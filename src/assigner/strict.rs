//! Strict-limits strategy.
//!
//! # Algorithm
//!
//! 1. Shuffle the unpinned people uniformly.
//! 2. For each person in that order, take the first of:
//!    first choice if open, second choice if open, first open non-vetoed
//!    section in canonical order.
//! 3. Otherwise force into the least-full section.
//!
//! Each placement is visible to the next person's capacity check.
//!
//! # Complexity
//! O(n * s) where n = people, s = sections (5).

use rand::seq::SliceRandom;
use rand::Rng;

use super::place_fallback;
use crate::models::{Assignment, Capacities, Person};

/// Places `pool` into `assignment`, respecting `max` until every section
/// the person may use is full.
///
/// Names of force-placed people are appended to `forced`.
pub(crate) fn assign_strict<R: Rng + ?Sized>(
    assignment: &mut Assignment,
    mut pool: Vec<Person>,
    capacities: &Capacities,
    rng: &mut R,
    forced: &mut Vec<String>,
) {
    pool.shuffle(rng);

    for person in pool {
        if assignment.has_room(person.first_choice, capacities) {
            assignment.place(person.first_choice, person);
        } else if assignment.has_room(person.second_choice, capacities) {
            assignment.place(person.second_choice, person);
        } else {
            place_fallback(assignment, capacities, person, forced);
        }
    }
}
