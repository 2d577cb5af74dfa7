//! Continuity list.
//!
//! A continuity item pins a named person to a section before any
//! preference logic runs. Pins naming nobody in the roster are ignored.

use serde::{Deserialize, Serialize};

use super::Section;

/// A hard pre-assignment of a person to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuityItem {
    /// Name of the pinned person.
    pub name: String,
    /// Section the person must end up in.
    pub section: Section,
}

impl ContinuityItem {
    /// Creates a pin.
    pub fn new(name: impl Into<String>, section: Section) -> Self {
        Self {
            name: name.into(),
            section,
        }
    }
}
