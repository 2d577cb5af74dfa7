//! Person model.
//!
//! A person carries two ranked section preferences and an optional veto.
//! The name is the identity; it must be unique within a run.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Section;

/// Wire value meaning "no veto".
pub const NO_VETO: &str = "Ninguna";

/// A person to be placed into a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique name (identity).
    pub name: String,
    /// Most wanted section.
    #[serde(rename = "option1", alias = "firstChoice")]
    pub first_choice: Section,
    /// Fallback section.
    #[serde(rename = "option2", alias = "secondChoice")]
    pub second_choice: Section,
    /// Section to avoid. `None` = no veto.
    #[serde(default, with = "veto_format")]
    pub veto: Option<Section>,
}

impl Person {
    /// Creates a person without a veto.
    pub fn new(name: impl Into<String>, first_choice: Section, second_choice: Section) -> Self {
        Self {
            name: name.into(),
            first_choice,
            second_choice,
            veto: None,
        }
    }

    /// Sets the vetoed section.
    pub fn with_veto(mut self, veto: Section) -> Self {
        self.veto = Some(veto);
        self
    }

    /// Whether the person vetoed `section`.
    #[inline]
    pub fn vetoes(&self, section: Section) -> bool {
        self.veto == Some(section)
    }
}

/// `veto` is written as a section name or `"Ninguna"`; `null` and a missing
/// field also read as no veto.
mod veto_format {
    use super::*;

    pub fn serialize<S: Serializer>(veto: &Option<Section>, s: S) -> Result<S::Ok, S::Error> {
        match veto {
            Some(section) => section.serialize(s),
            None => s.serialize_str(NO_VETO),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Section>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref() {
            None | Some(NO_VETO) | Some("") => Ok(None),
            Some(name) => name
                .parse::<Section>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
