//! Continuity pin resolution.
//!
//! Pins are applied in input order before any strategy runs. A pin takes
//! the first roster entry with a matching name; pins for unknown names, or
//! for someone already pinned, are skipped.

use std::collections::HashSet;

use tracing::debug;

use crate::models::{Assignment, ContinuityItem, Person};

/// Applies pins to a fresh assignment.
///
/// Returns the partially filled assignment and the unpinned people in
/// their original order.
pub(crate) fn resolve_pins(
    people: &[Person],
    continuity: &[ContinuityItem],
) -> (Assignment, Vec<Person>) {
    let mut assignment = Assignment::new();
    let mut pinned: HashSet<&str> = HashSet::new();

    for item in continuity {
        let Some(person) = people.iter().find(|p| p.name == item.name) else {
            debug!(name = %item.name, section = %item.section, "pin names nobody in the roster, skipped");
            continue;
        };
        if !pinned.insert(person.name.as_str()) {
            debug!(name = %item.name, section = %item.section, "person already pinned, later pin skipped");
            continue;
        }
        assignment.place(item.section, person.clone());
    }

    let pool = people
        .iter()
        .filter(|p| !pinned.contains(p.name.as_str()))
        .cloned()
        .collect();

    (assignment, pool)
}
