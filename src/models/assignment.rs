//! Assignment (solution) model.
//!
//! An assignment maps every section to the ordered list of people placed
//! there. A fresh assignment has all five sections present and empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Capacities, Person, Section};
use crate::error::{AssignError, AssignResult};

/// Section → ordered members.
///
/// Serialized as a plain section-keyed object. Sections absent from a stored
/// document are filled in empty on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<Section, Vec<Person>>",
    into = "BTreeMap<Section, Vec<Person>>"
)]
pub struct Assignment {
    sections: BTreeMap<Section, Vec<Person>>,
}

impl Default for Assignment {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BTreeMap<Section, Vec<Person>>> for Assignment {
    fn from(stored: BTreeMap<Section, Vec<Person>>) -> Self {
        let mut assignment = Self::new();
        assignment.sections.extend(stored);
        assignment
    }
}

impl From<Assignment> for BTreeMap<Section, Vec<Person>> {
    fn from(assignment: Assignment) -> Self {
        assignment.sections
    }
}

impl Assignment {
    /// Creates an assignment with five empty sections.
    pub fn new() -> Self {
        Self {
            sections: Section::ALL.into_iter().map(|s| (s, Vec::new())).collect(),
        }
    }

    /// Appends a person to a section. Capacity is not checked here.
    pub fn place(&mut self, section: Section, person: Person) {
        self.sections.entry(section).or_default().push(person);
    }

    /// Members of a section in placement order.
    pub fn members(&self, section: Section) -> &[Person] {
        self.sections.get(&section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current occupancy of a section.
    #[inline]
    pub fn count(&self, section: Section) -> usize {
        self.members(section).len()
    }

    /// Total number of placed people.
    pub fn total(&self) -> usize {
        self.sections.values().map(Vec::len).sum()
    }

    /// Whether `section` can take one more person without exceeding `max`.
    #[inline]
    pub fn has_room(&self, section: Section, capacities: &Capacities) -> bool {
        self.count(section) < capacities.max(section)
    }

    /// First section in canonical order that is open and not vetoed by `person`.
    pub fn first_open_allowed(&self, person: &Person, capacities: &Capacities) -> Option<Section> {
        Section::ALL
            .into_iter()
            .find(|&s| !person.vetoes(s) && self.has_room(s, capacities))
    }

    /// Section with the fewest members; ties go to the earliest in canonical order.
    pub fn least_full(&self) -> Section {
        // min_by_key keeps the first minimum it sees.
        Section::ALL
            .into_iter()
            .min_by_key(|&s| self.count(s))
            .unwrap_or(Section::Colonia)
    }

    /// Section a person is placed in, if any.
    pub fn section_of(&self, name: &str) -> Option<Section> {
        self.iter()
            .find(|(_, members)| members.iter().any(|p| p.name == name))
            .map(|(section, _)| section)
    }

    /// Whether a person with this name has been placed.
    pub fn contains(&self, name: &str) -> bool {
        self.section_of(name).is_some()
    }

    /// Iterates sections in canonical order with their members.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &[Person])> {
        Section::ALL.into_iter().map(move |s| (s, self.members(s)))
    }

    /// Moves a person from one section to the end of another.
    ///
    /// Fails with [`AssignError::NotFound`] if `name` is not in `from`; the
    /// assignment is left untouched in that case. Capacity is not checked.
    pub fn move_person(&mut self, name: &str, from: Section, to: Section) -> AssignResult<()> {
        let position = self
            .members(from)
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| AssignError::NotFound(format!("'{name}' in section {from}")))?;
        let person = match self.sections.get_mut(&from) {
            Some(members) => members.remove(position),
            None => return Err(AssignError::NotFound(format!("section {from}"))),
        };
        self.place(to, person);
        Ok(())
    }
}
