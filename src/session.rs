//! Session aggregate.
//!
//! Holds everything a persistence layer keeps for one roster: the people,
//! the capacity table, the continuity list, the priorities, and the latest
//! assignment. Storage itself is the caller's concern; this type only
//! enforces which inputs must be present and keeps statistics in step
//! with manual edits.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::assigner::{self, AssignmentOutcome, AssignmentStatistics, SectionAssigner};
use crate::error::{AssignError, AssignResult};
use crate::models::{ContinuityItem, Person, RestrictionPriorities, Section, SectionLimits};

/// Stored state for one assignment session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Session identifier.
    pub session_id: String,
    /// Roster to assign.
    #[serde(default)]
    pub people: Vec<Person>,
    /// Capacity table. Required before assigning.
    #[serde(default)]
    pub limits: Option<SectionLimits>,
    /// Continuity pins.
    #[serde(default)]
    pub continuity_list: Vec<ContinuityItem>,
    /// `None` = default priorities.
    #[serde(default)]
    pub priorities: Option<RestrictionPriorities>,
    /// Latest assignment with its statistics.
    #[serde(default)]
    pub current_assignment: Option<AssignmentOutcome>,
}

impl SessionData {
    /// Creates an empty session.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Default::default()
        }
    }

    /// Replaces the roster.
    pub fn with_people(mut self, people: Vec<Person>) -> Self {
        self.people = people;
        self
    }

    /// Sets the capacity table.
    pub fn with_limits(mut self, limits: SectionLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Replaces the continuity list.
    pub fn with_continuity(mut self, continuity_list: Vec<ContinuityItem>) -> Self {
        self.continuity_list = continuity_list;
        self
    }

    /// Sets the restriction priorities.
    pub fn with_priorities(mut self, priorities: RestrictionPriorities) -> Self {
        self.priorities = Some(priorities);
        self
    }

    /// Priorities in effect (configured or default).
    pub fn effective_priorities(&self) -> RestrictionPriorities {
        self.priorities.unwrap_or_default()
    }

    fn require_limits(&self) -> AssignResult<&SectionLimits> {
        self.limits
            .as_ref()
            .ok_or(AssignError::MissingInput("section limits"))
    }

    /// Runs the assignment with an OS-seeded generator and stores it.
    pub fn run_assignment(&mut self) -> AssignResult<&AssignmentOutcome> {
        self.run_assignment_with_rng(&mut rand::rng())
    }

    /// Runs the assignment with the given random source and stores it.
    ///
    /// Fails with [`AssignError::MissingInput`] if the roster is empty or
    /// no limits are configured. On failure the previous assignment is kept.
    pub fn run_assignment_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> AssignResult<&AssignmentOutcome> {
        if self.people.is_empty() {
            return Err(AssignError::MissingInput("people"));
        }
        let limits = self.require_limits()?;
        let outcome = SectionAssigner::new(limits.clone())
            .with_continuity(self.continuity_list.clone())
            .with_priorities(self.effective_priorities())
            .assign_with_rng(&self.people, rng)?;
        let stored = self.current_assignment.insert(outcome);
        Ok(&*stored)
    }

    /// Latest statistics, if an assignment exists.
    pub fn statistics(&self) -> Option<&AssignmentStatistics> {
        self.current_assignment.as_ref().map(|o| &o.statistics)
    }

    /// Moves a person in the stored assignment and recomputes statistics
    /// over the whole result.
    ///
    /// Fails with [`AssignError::NotFound`] if there is no assignment or the
    /// person is not in `from`, and with [`AssignError::MissingInput`] if the
    /// limits were cleared after assigning. Nothing changes on failure.
    pub fn move_person(
        &mut self,
        name: &str,
        from: Section,
        to: Section,
    ) -> AssignResult<&AssignmentStatistics> {
        let current = self.current_assignment.as_mut().ok_or_else(|| {
            AssignError::NotFound(format!("assignment for session {}", self.session_id))
        })?;
        let limits = self
            .limits
            .as_ref()
            .ok_or(AssignError::MissingInput("section limits"))?;

        let moved = assigner::move_person(&current.assignments, name, from, to)?;
        current.statistics = assigner::recompute_statistics(&moved, &self.people, limits);
        current.assignments = moved;
        Ok(&current.statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn session() -> SessionData {
        SessionData::new("s1")
            .with_people(vec![
                Person::new("Continuity Scout", Section::Tropa, Section::Esculta)
                    .with_veto(Section::Colonia),
                Person::new("Regular Scout", Section::Manada, Section::Colonia)
                    .with_veto(Section::Clan),
            ])
            .with_limits(SectionLimits::uniform(0, 5))
            .with_continuity(vec![ContinuityItem::new("Continuity Scout", Section::Esculta)])
    }

    #[test]
    fn test_missing_people() {
        let mut s = SessionData::new("s").with_limits(SectionLimits::uniform(0, 5));
        assert_eq!(
            s.run_assignment().unwrap_err(),
            AssignError::MissingInput("people")
        );
    }

    #[test]
    fn test_missing_limits() {
        let mut s = SessionData::new("s")
            .with_people(vec![Person::new("A", Section::Clan, Section::Tropa)]);
        assert_eq!(
            s.run_assignment().unwrap_err(),
            AssignError::MissingInput("section limits")
        );
        assert!(s.current_assignment.is_none());
    }

    #[test]
    fn test_run_uses_default_priorities_and_pins() {
        let mut s = session();
        assert_eq!(s.effective_priorities(), RestrictionPriorities::default());
        let outcome = s
            .run_assignment_with_rng(&mut SmallRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(
            outcome.assignments.section_of("Continuity Scout"),
            Some(Section::Esculta)
        );
        assert_eq!(
            outcome.assignments.section_of("Regular Scout"),
            Some(Section::Manada)
        );
        assert_eq!(s.statistics().unwrap().assigned, 2);
    }

    #[test]
    fn test_move_without_assignment() {
        let mut s = session();
        let err = s
            .move_person("Regular Scout", Section::Manada, Section::Clan)
            .unwrap_err();
        assert!(matches!(err, AssignError::NotFound(_)));
    }

    #[test]
    fn test_move_without_assignment_or_limits() {
        let mut s = SessionData::new("bare")
            .with_people(vec![Person::new("A", Section::Clan, Section::Tropa)]);
        let err = s.move_person("A", Section::Clan, Section::Tropa).unwrap_err();
        assert!(matches!(err, AssignError::NotFound(ref what) if what.contains("bare")));
    }

    #[test]
    fn test_move_recomputes_statistics() {
        let mut s = session();
        s.run_assignment_with_rng(&mut SmallRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(s.statistics().unwrap().satisfaction.first_choice, 1);

        let stats = s
            .move_person("Regular Scout", Section::Manada, Section::Clan)
            .unwrap()
            .clone();
        assert_eq!(stats.satisfaction.first_choice, 0);
        assert_eq!(stats.satisfaction.veto, 1);
        assert_eq!(stats.count(Section::Clan), 1);

        let stored = s.current_assignment.as_ref().unwrap();
        assert_eq!(stored.assignments.section_of("Regular Scout"), Some(Section::Clan));
        assert_eq!(stored.statistics, stats);
    }

    #[test]
    fn test_failed_move_changes_nothing() {
        let mut s = session();
        s.run_assignment_with_rng(&mut SmallRng::seed_from_u64(1))
            .unwrap();
        let before = s.clone();
        let err = s
            .move_person("Regular Scout", Section::Tropa, Section::Clan)
            .unwrap_err();
        assert!(matches!(err, AssignError::NotFound(_)));
        assert_eq!(s, before);
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let mut s = session();
        s.run_assignment_with_rng(&mut SmallRng::seed_from_u64(1))
            .unwrap();
        let json = serde_json::to_string(&s).unwrap();
        let back: SessionData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
