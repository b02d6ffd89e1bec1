use std::fmt;

use serde::{Deserialize, Serialize};

/// Passive-tree revisions this build of the codec knows about. `Unknown`
/// marks a link whose version field resolved to nothing in the table; the
/// importer substitutes a caller-supplied default and flags the substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeVersion {
    V3_18,
    V3_19,
    V3_20,
    V3_21,
    V3_22,
    V3_23,
    V3_24,
    V3_25,
    Unknown,
}

impl TreeVersion {
    /// Resolve a planner-dialect minor version code. The planner encodes the
    /// tree revision as (major, minor) little-endian u16s; the minor code is
    /// the minor release number.
    pub fn from_minor_code(code: u16) -> Option<Self> {
        match code {
            18 => Some(Self::V3_18),
            19 => Some(Self::V3_19),
            20 => Some(Self::V3_20),
            21 => Some(Self::V3_21),
            22 => Some(Self::V3_22),
            23 => Some(Self::V3_23),
            24 => Some(Self::V3_24),
            25 => Some(Self::V3_25),
            _ => None,
        }
    }

    /// Resolve the optional version path segment of an official link, e.g.
    /// the "3.25" in `.../passive-skill-tree/3.25/<payload>`.
    pub fn from_url_segment(segment: &str) -> Option<Self> {
        match segment {
            "3.18" => Some(Self::V3_18),
            "3.19" => Some(Self::V3_19),
            "3.20" => Some(Self::V3_20),
            "3.21" => Some(Self::V3_21),
            "3.22" => Some(Self::V3_22),
            "3.23" => Some(Self::V3_23),
            "3.24" => Some(Self::V3_24),
            "3.25" => Some(Self::V3_25),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::V3_18 => "3_18",
            Self::V3_19 => "3_19",
            Self::V3_20 => "3_20",
            Self::V3_21 => "3_21",
            Self::V3_22 => "3_22",
            Self::V3_23 => "3_23",
            Self::V3_24 => "3_24",
            Self::V3_25 => "3_25",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TreeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
