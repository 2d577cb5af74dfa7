//! Assignment satisfaction statistics.
//!
//! Computes occupancy and preference satisfaction from a completed
//! assignment and its input roster.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total people | Size of the input roster, pinned people included |
//! | Assigned | Number of people placed across all sections |
//! | Section counts | Occupancy per section |
//! | Within limits | Every section's occupancy lies in `[min, max]` |
//! | Satisfaction | First-choice / second-choice / veto / other tally |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Assignment, Person, Section, SectionLimits};

/// How well a placement matches a person's wishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Satisfaction {
    /// Placed in their first choice.
    FirstChoice,
    /// Placed in their second choice.
    SecondChoice,
    /// Placed in the section they vetoed.
    Veto,
    /// Anywhere else.
    Other,
}

impl Satisfaction {
    /// Classifies a person placed in `section`.
    ///
    /// Rules are checked in order, so a person whose first choice equals
    /// their veto counts as first choice when placed there.
    pub fn classify(person: &Person, section: Section) -> Self {
        if person.first_choice == section {
            Satisfaction::FirstChoice
        } else if person.second_choice == section {
            Satisfaction::SecondChoice
        } else if person.vetoes(section) {
            Satisfaction::Veto
        } else {
            Satisfaction::Other
        }
    }
}

/// Tally of placements by [`Satisfaction`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SatisfactionStats {
    /// People in their first choice.
    pub first_choice: usize,
    /// People in their second choice.
    pub second_choice: usize,
    /// People in neither choice nor their veto.
    pub other: usize,
    /// People in their vetoed section.
    pub veto: usize,
}

impl SatisfactionStats {
    fn record(&mut self, satisfaction: Satisfaction) {
        match satisfaction {
            Satisfaction::FirstChoice => self.first_choice += 1,
            Satisfaction::SecondChoice => self.second_choice += 1,
            Satisfaction::Veto => self.veto += 1,
            Satisfaction::Other => self.other += 1,
        }
    }

    /// Sum of all categories.
    pub fn total(&self) -> usize {
        self.first_choice + self.second_choice + self.other + self.veto
    }
}

/// Assignment statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentStatistics {
    /// Size of the input roster.
    pub total_people: usize,
    /// People placed across all sections.
    pub assigned: usize,
    /// Satisfaction breakdown over placed people.
    pub satisfaction: SatisfactionStats,
    /// Occupancy per section.
    pub section_counts: BTreeMap<Section, usize>,
    /// False if any section is outside its `[min, max]` band.
    pub within_limits: bool,
}

impl AssignmentStatistics {
    /// Computes statistics from an assignment.
    ///
    /// # Arguments
    /// * `assignment` - The completed (or manually edited) assignment.
    /// * `people` - The full input roster, pinned people included.
    /// * `limits` - Capacity table. A section without a limit counts as
    ///   outside its band.
    pub fn calculate(assignment: &Assignment, people: &[Person], limits: &SectionLimits) -> Self {
        let mut satisfaction = SatisfactionStats::default();
        let mut section_counts = BTreeMap::new();
        let mut within_limits = true;

        for (section, members) in assignment.iter() {
            let count = members.len();
            section_counts.insert(section, count);

            match limits.get(section) {
                Some(limit) if limit.contains(count) => {}
                _ => within_limits = false,
            }

            for person in members {
                satisfaction.record(Satisfaction::classify(person, section));
            }
        }

        Self {
            total_people: people.len(),
            assigned: assignment.total(),
            satisfaction,
            section_counts,
            within_limits,
        }
    }

    /// Occupancy of a section.
    pub fn count(&self, section: Section) -> usize {
        self.section_counts.get(&section).copied().unwrap_or(0)
    }

    /// Whether every roster entry was placed.
    pub fn all_assigned(&self) -> bool {
        self.assigned == self.total_people
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(limits_max: usize) -> (Assignment, Vec<Person>, SectionLimits) {
        let people = vec![
            Person::new("First", Section::Tropa, Section::Clan),
            Person::new("Second", Section::Manada, Section::Tropa),
            Person::new("Vetoed", Section::Clan, Section::Manada).with_veto(Section::Tropa),
            Person::new("Other", Section::Clan, Section::Manada),
        ];
        let mut assignment = Assignment::new();
        for p in &people {
            assignment.place(Section::Tropa, p.clone());
        }
        (assignment, people, SectionLimits::uniform(0, limits_max))
    }

    #[test]
    fn test_classification() {
        let (assignment, people, limits) = filled(10);
        let stats = AssignmentStatistics::calculate(&assignment, &people, &limits);
        assert_eq!(stats.satisfaction.first_choice, 1);
        assert_eq!(stats.satisfaction.second_choice, 1);
        assert_eq!(stats.satisfaction.veto, 1);
        assert_eq!(stats.satisfaction.other, 1);
        assert_eq!(stats.satisfaction.total(), 4);
        assert_eq!(stats.total_people, 4);
        assert_eq!(stats.assigned, 4);
        assert!(stats.all_assigned());
        assert_eq!(stats.count(Section::Tropa), 4);
        assert_eq!(stats.count(Section::Colonia), 0);
        assert!(stats.within_limits);
    }

    #[test]
    fn test_first_choice_wins_over_veto() {
        let p = Person::new("X", Section::Clan, Section::Tropa).with_veto(Section::Clan);
        assert_eq!(Satisfaction::classify(&p, Section::Clan), Satisfaction::FirstChoice);
        assert_eq!(Satisfaction::classify(&p, Section::Manada), Satisfaction::Other);
    }

    #[test]
    fn test_single_violation_fails_flag() {
        let (assignment, people, _) = filled(10);
        let over = SectionLimits::uniform(0, 10).with_limit(Section::Tropa, 0, 3);
        assert!(!AssignmentStatistics::calculate(&assignment, &people, &over).within_limits);

        // Empty Colonia below its advisory min.
        let under = SectionLimits::uniform(0, 10).with_limit(Section::Colonia, 1, 10);
        assert!(!AssignmentStatistics::calculate(&assignment, &people, &under).within_limits);
    }

    #[test]
    fn test_missing_limit_is_out_of_band() {
        let (assignment, people, _) = filled(10);
        let partial = SectionLimits::new().with_limit(Section::Tropa, 0, 10);
        assert!(!AssignmentStatistics::calculate(&assignment, &people, &partial).within_limits);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (assignment, people, limits) = filled(2);
        let a = AssignmentStatistics::calculate(&assignment, &people, &limits);
        let b = AssignmentStatistics::calculate(&assignment, &people, &limits);
        assert_eq!(a, b);
    }

    #[test]
    fn test_wire_names() {
        let (assignment, people, limits) = filled(10);
        let stats = AssignmentStatistics::calculate(&assignment, &people, &limits);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalPeople"], 4);
        assert_eq!(json["satisfaction"]["firstChoice"], 1);
        assert_eq!(json["sectionCounts"]["Tropa"], 4);
        assert_eq!(json["withinLimits"], true);
    }
}
