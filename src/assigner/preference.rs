//! Preference-priority strategy.
//!
//! # Algorithm
//!
//! 1. **First choice.** Group people by first choice. For each section,
//!    `available = max - current`. If demand fits, everyone is admitted;
//!    otherwise a uniformly random subset of exactly `available` people.
//!    A section's batch depends only on its own occupancy, so the order in
//!    which sections are processed does not matter.
//! 2. **Second choice.** Remaining people, in roster order, take their
//!    second choice while it has room.
//! 3. **Anything open.** First open non-vetoed section in canonical order,
//!    else the least-full section.
//!
//! # Complexity
//! O(n * s) where n = people, s = sections (5).

use rand::seq::index;
use rand::Rng;
use tracing::debug;

use super::place_fallback;
use crate::models::{Assignment, Capacities, Person, Section};

/// Places `pool` into `assignment`, giving contested capacity to first
/// choices before second choices.
///
/// Names of force-placed people are appended to `forced`.
pub(crate) fn assign_preference_first<R: Rng + ?Sized>(
    assignment: &mut Assignment,
    pool: Vec<Person>,
    capacities: &Capacities,
    rng: &mut R,
    forced: &mut Vec<String>,
) {
    let mut pool: Vec<Option<Person>> = pool.into_iter().map(Some).collect();

    // Phase 1
    for section in Section::ALL {
        let wanting: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter_map(|(i, p)| match p {
                Some(p) if p.first_choice == section => Some(i),
                _ => None,
            })
            .collect();
        if wanting.is_empty() {
            continue;
        }

        // Pins may already have overfilled the section.
        let available = capacities
            .max(section)
            .saturating_sub(assignment.count(section));
        let admitted = if wanting.len() <= available {
            wanting
        } else {
            debug!(
                section = %section,
                demand = wanting.len(),
                available,
                "first-choice demand exceeds room, drawing at random"
            );
            let mut picked: Vec<usize> = index::sample(rng, wanting.len(), available)
                .iter()
                .map(|k| wanting[k])
                .collect();
            picked.sort_unstable();
            picked
        };

        for i in admitted {
            if let Some(person) = pool[i].take() {
                assignment.place(section, person);
            }
        }
    }

    // Phase 2
    let mut unplaced = Vec::new();
    for person in pool.into_iter().flatten() {
        if assignment.has_room(person.second_choice, capacities) {
            assignment.place(person.second_choice, person);
        } else {
            unplaced.push(person);
        }
    }

    // Phase 3
    debug!(remaining = unplaced.len(), "placing people without an open preference");
    for person in unplaced {
        place_fallback(assignment, capacities, person, forced);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionLimits;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn caps(limits: &SectionLimits) -> Capacities {
        Capacities::from_limits(limits).unwrap()
    }

    fn run(pool: Vec<Person>, limits: &SectionLimits, seed: u64) -> (Assignment, Vec<String>) {
        let mut assignment = Assignment::new();
        let mut forced = Vec::new();
        let mut rng = SmallRng::seed_from_u64(seed);
        assign_preference_first(&mut assignment, pool, &caps(limits), &mut rng, &mut forced);
        (assignment, forced)
    }

    #[test]
    fn test_two_people_one_seat() {
        let limits = SectionLimits::uniform(0, 5).with_limit(Section::Colonia, 0, 1);
        let pool = vec![
            Person::new("A", Section::Colonia, Section::Tropa),
            Person::new("B", Section::Colonia, Section::Tropa),
        ];
        for seed in 0..20 {
            let (assignment, forced) = run(pool.clone(), &limits, seed);
            assert_eq!(assignment.count(Section::Colonia), 1);
            assert_eq!(assignment.count(Section::Tropa), 1);
            assert_eq!(assignment.total(), 2);
            assert!(forced.is_empty());
        }
    }

    #[test]
    fn test_random_subset_is_not_positional() {
        let limits = SectionLimits::uniform(0, 5).with_limit(Section::Colonia, 0, 1);
        let pool = vec![
            Person::new("A", Section::Colonia, Section::Tropa),
            Person::new("B", Section::Colonia, Section::Tropa),
        ];
        let winners: std::collections::HashSet<String> = (0..64)
            .map(|seed| run(pool.clone(), &limits, seed).0.members(Section::Colonia)[0].name.clone())
            .collect();
        assert_eq!(winners.len(), 2, "both people should win for some seed");
    }

    #[test]
    fn test_first_choice_beats_earlier_second_choice() {
        // A only wants Tropa as second choice, B wants it first.
        // Under this strategy B gets Tropa even though A comes first.
        let limits = SectionLimits::uniform(0, 5)
            .with_limit(Section::Tropa, 0, 1)
            .with_limit(Section::Clan, 0, 0);
        let pool = vec![
            Person::new("A", Section::Clan, Section::Tropa),
            Person::new("B", Section::Tropa, Section::Clan),
        ];
        let (assignment, _) = run(pool, &limits, 0);
        assert_eq!(assignment.section_of("B"), Some(Section::Tropa));
        assert_eq!(assignment.section_of("A"), Some(Section::Colonia));
    }

    #[test]
    fn test_second_choice_sequential() {
        let limits = SectionLimits::uniform(0, 5)
            .with_limit(Section::Clan, 0, 0)
            .with_limit(Section::Esculta, 0, 1);
        let pool = vec![
            Person::new("A", Section::Clan, Section::Esculta),
            Person::new("B", Section::Clan, Section::Esculta).with_veto(Section::Colonia),
        ];
        let (assignment, forced) = run(pool, &limits, 0);
        assert_eq!(assignment.section_of("A"), Some(Section::Esculta));
        assert_eq!(assignment.section_of("B"), Some(Section::Manada));
        assert!(forced.is_empty());
    }

    #[test]
    fn test_overfilled_by_pins_admits_nobody() {
        let limits = SectionLimits::uniform(0, 5).with_limit(Section::Tropa, 0, 1);
        let mut assignment = Assignment::new();
        assignment.place(Section::Tropa, Person::new("Pin1", Section::Clan, Section::Clan));
        assignment.place(Section::Tropa, Person::new("Pin2", Section::Clan, Section::Clan));
        let pool = vec![Person::new("A", Section::Tropa, Section::Manada)];
        let mut rng = SmallRng::seed_from_u64(0);
        assign_preference_first(&mut assignment, pool, &caps(&limits), &mut rng, &mut Vec::new());

        assert_eq!(assignment.count(Section::Tropa), 2);
        assert_eq!(assignment.section_of("A"), Some(Section::Manada));
    }

    #[test]
    fn test_overflow_forced_into_least_full() {
        let limits = SectionLimits::uniform(0, 1);
        let pool: Vec<Person> = (0..6)
            .map(|i| Person::new(format!("P{i}"), Section::Tropa, Section::Tropa))
            .collect();
        let (assignment, forced) = run(pool, &limits, 5);
        assert_eq!(assignment.total(), 6);
        assert_eq!(forced.len(), 1);
        assert_eq!(assignment.count(Section::Colonia), 2);
    }
}
