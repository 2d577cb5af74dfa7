//! Section assignment and statistics.
//!
//! # Algorithm
//!
//! 1. Validate the roster and capacity table.
//! 2. Resolve continuity pins (hard, before anything else).
//! 3. Run the strategy selected by the restriction priorities:
//!    - [`Strategy::StrictLimits`]: random order, each person takes the
//!      best open option.
//!    - [`Strategy::PreferenceFirst`]: first choices in batches (random
//!      draw on overflow), then second choices, then anything open.
//! 4. Anyone left without an open, non-vetoed section is forced into the
//!    least-full section. Nobody is ever dropped.
//!
//! The algorithm is a greedy, randomized heuristic. It is not optimal.
//!
//! # Randomness
//!
//! Every entry point has a variant taking `&mut impl Rng`, so callers can
//! supply a seeded generator and get reproducible runs.

mod pins;
mod preference;
mod statistics;
mod strict;

pub use statistics::{AssignmentStatistics, Satisfaction, SatisfactionStats};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AssignError, AssignResult};
use crate::models::{
    Assignment, Capacities, ContinuityItem, Person, RestrictionPriorities, Section, SectionLimits,
    Strategy,
};
use crate::validation::validate_input;

/// Input container for an assignment run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// Roster to place.
    pub people: Vec<Person>,
    /// Capacity per section.
    pub limits: SectionLimits,
    /// Hard pins, applied in order.
    #[serde(default)]
    pub continuity_list: Vec<ContinuityItem>,
    /// Restriction ranks (selects the strategy).
    #[serde(default)]
    pub priorities: RestrictionPriorities,
    /// Seed for reproducible runs. `None` = seeded from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AssignRequest {
    /// Creates a request with no pins and default priorities.
    pub fn new(people: Vec<Person>, limits: SectionLimits) -> Self {
        Self {
            people,
            limits,
            continuity_list: Vec::new(),
            priorities: RestrictionPriorities::default(),
            seed: None,
        }
    }

    /// Sets the continuity list.
    pub fn with_continuity(mut self, continuity_list: Vec<ContinuityItem>) -> Self {
        self.continuity_list = continuity_list;
        self
    }

    /// Sets the restriction priorities.
    pub fn with_priorities(mut self, priorities: RestrictionPriorities) -> Self {
        self.priorities = priorities;
        self
    }

    /// Fixes the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of an assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutcome {
    /// Section → members.
    pub assignments: Assignment,
    /// Statistics over `assignments`.
    pub statistics: AssignmentStatistics,
    /// Strategy that produced it.
    pub strategy: Strategy,
    /// People placed by the forced fallback, ignoring capacity and veto.
    pub forced: Vec<String>,
}

/// Section assigner.
///
/// Holds the capacity table, continuity list, and priorities; assigns
/// any roster against them.
///
/// # Example
///
/// ```
/// use u_assign::assigner::SectionAssigner;
/// use u_assign::models::{ContinuityItem, Person, Section, SectionLimits};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let people = vec![
///     Person::new("Ana", Section::Tropa, Section::Esculta).with_veto(Section::Colonia),
///     Person::new("Luis", Section::Manada, Section::Colonia),
/// ];
/// let assigner = SectionAssigner::new(SectionLimits::uniform(0, 10))
///     .with_continuity(vec![ContinuityItem::new("Luis", Section::Clan)]);
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let outcome = assigner.assign_with_rng(&people, &mut rng).unwrap();
/// assert_eq!(outcome.assignments.section_of("Luis"), Some(Section::Clan));
/// assert_eq!(outcome.assignments.section_of("Ana"), Some(Section::Tropa));
/// assert_eq!(outcome.statistics.assigned, 2);
/// ```
#[derive(Debug, Clone)]
pub struct SectionAssigner {
    limits: SectionLimits,
    continuity: Vec<ContinuityItem>,
    priorities: RestrictionPriorities,
}

impl SectionAssigner {
    /// Creates an assigner with no pins and default priorities.
    pub fn new(limits: SectionLimits) -> Self {
        Self {
            limits,
            continuity: Vec::new(),
            priorities: RestrictionPriorities::default(),
        }
    }

    /// Sets the continuity list.
    pub fn with_continuity(mut self, continuity: Vec<ContinuityItem>) -> Self {
        self.continuity = continuity;
        self
    }

    /// Sets the restriction priorities.
    pub fn with_priorities(mut self, priorities: RestrictionPriorities) -> Self {
        self.priorities = priorities;
        self
    }

    /// Strategy the configured priorities select.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_priorities(&self.priorities)
    }

    /// Assigns using an OS-seeded generator.
    pub fn assign(&self, people: &[Person]) -> AssignResult<AssignmentOutcome> {
        self.assign_with_rng(people, &mut rand::rng())
    }

    /// Assigns using the given random source.
    ///
    /// Fails with [`AssignError::MissingInput`] on an empty roster and
    /// with [`AssignError::Invalid`] if validation fails. Otherwise every
    /// person is placed.
    pub fn assign_with_rng<R: Rng + ?Sized>(
        &self,
        people: &[Person],
        rng: &mut R,
    ) -> AssignResult<AssignmentOutcome> {
        if people.is_empty() {
            return Err(AssignError::MissingInput("people"));
        }
        validate_input(people, &self.limits, &self.continuity).map_err(AssignError::Invalid)?;
        let capacities = Capacities::from_limits(&self.limits)?;
        let strategy = self.strategy();

        let (mut assignment, pool) = pins::resolve_pins(people, &self.continuity);
        let pinned = assignment.total();
        let mut forced = Vec::new();

        match strategy {
            Strategy::StrictLimits => {
                strict::assign_strict(&mut assignment, pool, &capacities, rng, &mut forced)
            }
            Strategy::PreferenceFirst => preference::assign_preference_first(
                &mut assignment,
                pool,
                &capacities,
                rng,
                &mut forced,
            ),
        }

        let statistics = AssignmentStatistics::calculate(&assignment, people, &self.limits);
        info!(
            ?strategy,
            people = people.len(),
            pinned,
            forced = forced.len(),
            within_limits = statistics.within_limits,
            "assignment complete"
        );

        Ok(AssignmentOutcome {
            assignments: assignment,
            statistics,
            strategy,
            forced,
        })
    }

    /// Assigns from a request, honoring its seed if set.
    pub fn assign_request(request: &AssignRequest) -> AssignResult<AssignmentOutcome> {
        let assigner = SectionAssigner::new(request.limits.clone())
            .with_continuity(request.continuity_list.clone())
            .with_priorities(request.priorities);
        match request.seed {
            Some(seed) => assigner.assign_with_rng(&request.people, &mut SmallRng::seed_from_u64(seed)),
            None => assigner.assign(&request.people),
        }
    }
}

/// Runs a full assignment with an OS-seeded generator.
pub fn assign(
    people: &[Person],
    limits: &SectionLimits,
    continuity: &[ContinuityItem],
    priorities: &RestrictionPriorities,
) -> AssignResult<AssignmentOutcome> {
    assign_with_rng(people, limits, continuity, priorities, &mut rand::rng())
}

/// Runs a full assignment with the given random source.
pub fn assign_with_rng<R: Rng + ?Sized>(
    people: &[Person],
    limits: &SectionLimits,
    continuity: &[ContinuityItem],
    priorities: &RestrictionPriorities,
    rng: &mut R,
) -> AssignResult<AssignmentOutcome> {
    SectionAssigner::new(limits.clone())
        .with_continuity(continuity.to_vec())
        .with_priorities(*priorities)
        .assign_with_rng(people, rng)
}

/// Recomputes statistics from scratch. Pure; no randomness.
pub fn recompute_statistics(
    assignment: &Assignment,
    people: &[Person],
    limits: &SectionLimits,
) -> AssignmentStatistics {
    AssignmentStatistics::calculate(assignment, people, limits)
}

/// Returns a copy of `assignment` with `name` moved from `from` to the end
/// of `to`.
///
/// Capacity is not checked. Fails with [`AssignError::NotFound`] if `name`
/// is not in `from`.
pub fn move_person(
    assignment: &Assignment,
    name: &str,
    from: Section,
    to: Section,
) -> AssignResult<Assignment> {
    let mut moved = assignment.clone();
    moved.move_person(name, from, to)?;
    Ok(moved)
}

/// Last-resort placement: first open non-vetoed section in canonical
/// order, else the least-full section regardless of capacity and veto.
pub(crate) fn place_fallback(
    assignment: &mut Assignment,
    capacities: &Capacities,
    person: Person,
    forced: &mut Vec<String>,
) {
    if let Some(section) = assignment.first_open_allowed(&person, capacities) {
        assignment.place(section, person);
        return;
    }
    let section = assignment.least_full();
    warn!(
        name = %person.name,
        section = %section,
        vetoed = person.vetoes(section),
        "no open section, forcing into least-full"
    );
    forced.push(person.name.clone());
    assignment.place(section, person);
}
