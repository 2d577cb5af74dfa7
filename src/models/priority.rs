//! Restriction priorities and strategy selection.
//!
//! Four restriction kinds carry integer ranks (lower = more important),
//! but only one comparison is load-bearing: whether section limits are
//! ranked first. That bit is captured once as a [`Strategy`].

use serde::{Deserialize, Serialize};

/// Rank given to a restriction kind that a priorities document omits.
pub const UNRANKED: i32 = 4;

fn unranked() -> i32 {
    UNRANKED
}

/// Ranks of the four restriction kinds.
///
/// The default (used when no priorities were configured at all) ranks
/// section limits and continuity first, then first and second preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionPriorities {
    /// Rank of the capacity table. Rank 1 selects strict limits.
    #[serde(default = "unranked")]
    pub section_limits: i32,
    /// Rank of continuity pins.
    #[serde(default = "unranked")]
    pub continuity_list: i32,
    /// Rank of first preferences.
    #[serde(default = "unranked")]
    pub first_preference: i32,
    /// Rank of second preferences.
    #[serde(default = "unranked")]
    pub second_preference: i32,
}

impl Default for RestrictionPriorities {
    fn default() -> Self {
        Self {
            section_limits: 1,
            continuity_list: 1,
            first_preference: 2,
            second_preference: 3,
        }
    }
}

impl RestrictionPriorities {
    /// Priorities that rank preferences above section limits.
    pub fn preferences_first() -> Self {
        Self {
            section_limits: 3,
            continuity_list: 1,
            first_preference: 1,
            second_preference: 2,
        }
    }

    /// Sets the section-limits rank.
    pub fn with_section_limits(mut self, rank: i32) -> Self {
        self.section_limits = rank;
        self
    }

    /// The placement strategy these ranks select.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_priorities(self)
    }
}

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Random order; each person takes the best open option in turn.
    StrictLimits,
    /// Batch by first preference, then second, then any open section.
    PreferenceFirst,
}

impl Strategy {
    /// `StrictLimits` iff section limits have rank 1. Other ranks and ties
    /// do not matter.
    pub fn from_priorities(priorities: &RestrictionPriorities) -> Self {
        if priorities.section_limits == 1 {
            Strategy::StrictLimits
        } else {
            Strategy::PreferenceFirst
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let p = RestrictionPriorities::default();
        assert_eq!(p.section_limits, 1);
        assert_eq!(p.second_preference, 3);
        assert_eq!(p.strategy(), Strategy::StrictLimits);
    }

    #[test]
    fn test_only_section_limits_rank_matters() {
        let p = RestrictionPriorities::default().with_section_limits(2);
        assert_eq!(p.strategy(), Strategy::PreferenceFirst);

        // First preference tied at rank 1 does not change the outcome.
        let tied = RestrictionPriorities {
            section_limits: 1,
            continuity_list: 1,
            first_preference: 1,
            second_preference: 1,
        };
        assert_eq!(tied.strategy(), Strategy::StrictLimits);

        let all_low = RestrictionPriorities {
            section_limits: 0,
            continuity_list: 0,
            first_preference: 0,
            second_preference: 0,
        };
        assert_eq!(all_low.strategy(), Strategy::PreferenceFirst);
        assert_eq!(
            RestrictionPriorities::preferences_first().strategy(),
            Strategy::PreferenceFirst
        );
    }

    #[test]
    fn test_missing_keys_are_unranked() {
        let p: RestrictionPriorities =
            serde_json::from_str(r#"{"firstPreference":1,"secondPreference":2}"#).unwrap();
        assert_eq!(p.section_limits, UNRANKED);
        assert_eq!(p.continuity_list, UNRANKED);
        assert_eq!(p.strategy(), Strategy::PreferenceFirst);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(RestrictionPriorities::default()).unwrap();
        assert_eq!(json["sectionLimits"], 1);
        assert_eq!(json["continuityList"], 1);
        assert_eq!(json["firstPreference"], 2);
        assert_eq!(json["secondPreference"], 3);
    }
}
