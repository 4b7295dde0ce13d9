//! The fixed set of cognitive specializations.
//!
//! Each specialization describes one focus an agent can take on a
//! conversation (analysis, pattern recognition, risk assessment, ...).
//! Specializations filter and weight retrieved thoughts: a thought either
//! belongs to a specialization outright or is matched through the
//! specialization's category tags.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// A cognitive specialization.
///
/// The set is fixed; every variant carries immutable attributes (label,
/// category tags, description, default sampling temperature) and a fixed
/// index giving the total order used for sorting and comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialization {
    Cortex,
    Seer,
    Oracle,
    House,
    Prudence,
    DayDream,
    Conscience,
}

impl Specialization {
    /// Every specialization, in fixed order.
    pub const ALL: [Specialization; 7] = [
        Specialization::Cortex,
        Specialization::Seer,
        Specialization::Oracle,
        Specialization::House,
        Specialization::Prudence,
        Specialization::DayDream,
        Specialization::Conscience,
    ];

    /// Short label, also the serde representation.
    pub const fn label(&self) -> &'static str {
        match self {
            Specialization::Cortex => "cortex",
            Specialization::Seer => "seer",
            Specialization::Oracle => "oracle",
            Specialization::House => "house",
            Specialization::Prudence => "prudence",
            Specialization::DayDream => "day-dream",
            Specialization::Conscience => "conscience",
        }
    }

    /// Ordered category tags owned by this specialization.
    ///
    /// The first tag is used to categorize thoughts extracted from this
    /// specialization's output. Ownerless thoughts are matched against the
    /// full list at retrieval time.
    pub const fn categories(&self) -> &'static [&'static str] {
        match self {
            Specialization::Cortex => &["analysis", "reasoning", "context"],
            Specialization::Seer => &["patterns", "trends", "prediction"],
            Specialization::Oracle => &["foresight", "possibilities", "outcomes"],
            Specialization::House => &["practical", "resources", "environment"],
            Specialization::Prudence => &["risk", "caution", "safety"],
            Specialization::DayDream => &["imagination", "creativity", "association"],
            Specialization::Conscience => &["ethics", "values", "emotional"],
        }
    }

    /// Human-readable description of the specialization's focus.
    pub const fn description(&self) -> &'static str {
        match self {
            Specialization::Cortex => "analytical reasoning over the immediate context",
            Specialization::Seer => "pattern recognition across past exchanges",
            Specialization::Oracle => "projection of likely outcomes and possibilities",
            Specialization::House => "practical grounding in resources and environment",
            Specialization::Prudence => "risk assessment and cautionary judgment",
            Specialization::DayDream => "free association and creative leaps",
            Specialization::Conscience => "ethical and emotional evaluation",
        }
    }

    /// Default sampling temperature for this specialization, in [0, 1].
    pub const fn default_temperature(&self) -> f64 {
        match self {
            Specialization::Cortex => 0.3,
            Specialization::Seer => 0.6,
            Specialization::Oracle => 0.7,
            Specialization::House => 0.4,
            Specialization::Prudence => 0.2,
            Specialization::DayDream => 0.9,
            Specialization::Conscience => 0.5,
        }
    }

    /// Fixed index giving the total order over specializations.
    pub const fn index(&self) -> usize {
        match self {
            Specialization::Cortex => 0,
            Specialization::Seer => 1,
            Specialization::Oracle => 2,
            Specialization::House => 3,
            Specialization::Prudence => 4,
            Specialization::DayDream => 5,
            Specialization::Conscience => 6,
        }
    }
}

impl PartialOrd for Specialization {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Specialization {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialization {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cortex" => Ok(Specialization::Cortex),
            "seer" => Ok(Specialization::Seer),
            "oracle" => Ok(Specialization::Oracle),
            "house" => Ok(Specialization::House),
            "prudence" => Ok(Specialization::Prudence),
            "day-dream" => Ok(Specialization::DayDream),
            "conscience" => Ok(Specialization::Conscience),
            other => Err(format!("invalid specialization: '{other}'")),
        }
    }
}
