//! Section model and capacity limits.
//!
//! There are exactly five sections. Their declaration order is the
//! canonical order used for every "first open section" search and for
//! least-full tie-breaking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AssignError;

/// One of the five fixed sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Colonia,
    Manada,
    Tropa,
    Esculta,
    Clan,
}

impl Section {
    /// All sections in canonical order.
    pub const ALL: [Section; 5] = [
        Section::Colonia,
        Section::Manada,
        Section::Tropa,
        Section::Esculta,
        Section::Clan,
    ];

    /// Position in canonical order (0..5).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Colonia => "Colonia",
            Section::Manada => "Manada",
            Section::Tropa => "Tropa",
            Section::Esculta => "Esculta",
            Section::Clan => "Clan",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = AssignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| AssignError::UnknownSection(s.to_string()))
    }
}

/// Capacity band for a single section.
///
/// `max` is enforced during preference-based placement (only the forced
/// fallback may exceed it). `min` is advisory and only reported through
/// the statistics flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLimit {
    /// Advisory lower bound on occupancy.
    pub min: usize,
    /// Upper bound on occupancy.
    pub max: usize,
}

impl SectionLimit {
    /// Creates a limit.
    ///
    /// Not checked here. A usable limit has `max >= 1` and `min <= max`;
    /// [`crate::validation::validate_input`] rejects anything else with
    /// `InvalidLimit`.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether `count` lies within `[min, max]`.
    #[inline]
    pub fn contains(&self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Capacity table: section → limit.
///
/// A complete table has an entry for every section; see
/// [`crate::validation::validate_input`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionLimits {
    limits: BTreeMap<Section, SectionLimit>,
}

impl SectionLimits {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with the same band for all five sections.
    pub fn uniform(min: usize, max: usize) -> Self {
        Section::ALL
            .into_iter()
            .fold(Self::new(), |limits, section| limits.with_limit(section, min, max))
    }

    /// Sets the limit for a section.
    pub fn with_limit(mut self, section: Section, min: usize, max: usize) -> Self {
        self.set(section, SectionLimit::new(min, max));
        self
    }

    /// Inserts or replaces the limit for a section.
    pub fn set(&mut self, section: Section, limit: SectionLimit) {
        self.limits.insert(section, limit);
    }

    /// Limit for a section, if configured.
    pub fn get(&self, section: Section) -> Option<&SectionLimit> {
        self.limits.get(&section)
    }

    /// Sections that have no configured limit, in canonical order.
    pub fn missing_sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| !self.limits.contains_key(section))
            .collect()
    }

    /// Iterates configured limits in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &SectionLimit)> {
        self.limits.iter().map(|(section, limit)| (*section, limit))
    }
}

/// Immutable snapshot of the per-section `max` values.
///
/// Built once per run from a complete [`SectionLimits`] table so the
/// placement loop never has to handle a missing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities([usize; 5]);

impl Capacities {
    /// Snapshots the `max` of every section.
    ///
    /// Fails with [`AssignError::MissingInput`] if any section has no limit.
    pub fn from_limits(limits: &SectionLimits) -> Result<Self, AssignError> {
        let mut max = [0; 5];
        for section in Section::ALL {
            let limit = limits
                .get(section)
                .ok_or(AssignError::MissingInput("limit for every section"))?;
            max[section.index()] = limit.max;
        }
        Ok(Self(max))
    }

    /// Maximum occupancy of a section.
    #[inline]
    pub fn max(&self, section: Section) -> usize {
        self.0[section.index()]
    }
}
