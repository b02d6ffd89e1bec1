use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterClass {
    Scion,
    Marauder,
    Ranger,
    Witch,
    Duelist,
    Templar,
    Shadow,
}

impl CharacterClass {
    pub const COUNT: u8 = 7;

    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Scion),
            1 => Some(Self::Marauder),
            2 => Some(Self::Ranger),
            3 => Some(Self::Witch),
            4 => Some(Self::Duelist),
            5 => Some(Self::Templar),
            6 => Some(Self::Shadow),
            _ => None,
        }
    }

    pub fn raw(&self) -> u8 {
        match *self {
            Self::Scion => 0,
            Self::Marauder => 1,
            Self::Ranger => 2,
            Self::Witch => 3,
            Self::Duelist => 4,
            Self::Templar => 5,
            Self::Shadow => 6,
        }
    }

    /// The node every character of this class starts with. An official link
    /// with an empty node list decodes to exactly this node.
    pub fn start_node(&self) -> u32 {
        match *self {
            Self::Scion => 58833,
            Self::Marauder => 47175,
            Self::Ranger => 50459,
            Self::Witch => 57264,
            Self::Duelist => 59763,
            Self::Templar => 54447,
            Self::Shadow => 61525,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Self::Scion => "Scion",
            Self::Marauder => "Marauder",
            Self::Ranger => "Ranger",
            Self::Witch => "Witch",
            Self::Duelist => "Duelist",
            Self::Templar => "Templar",
            Self::Shadow => "Shadow",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
