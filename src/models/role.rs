//! Ranked roles and their wire codes.

use serde::{Deserialize, Serialize};

/// A position a champion can be played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

impl Role {
    /// Every role, in the order statistics are gathered and keyed.
    pub const ALL: [Role; 5] = [
        Role::Top,
        Role::Jungle,
        Role::Mid,
        Role::Bot,
        Role::Support,
    ];

    /// Short code used as the snapshot map key and in progress messages.
    pub fn short_code(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jgl",
            Role::Mid => "mid",
            Role::Bot => "bot",
            Role::Support => "sup",
        }
    }

    /// Path segment used when building statistics page URLs.
    pub fn long_code(&self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::Jungle => "jungle",
            Role::Mid => "mid",
            Role::Bot => "adc",
            Role::Support => "support",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_code())
    }
}
