//! Tier grades and per-role extracted statistics.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Letter portion of a tier grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierLetter {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
    /// Placeholder grade shown while a page has too little data.
    Unknown,
}

/// Qualifier attached to a tier letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierSuffix {
    Plus,
    Minus,
}

/// A tier grade as displayed on a statistics page: "S+", "B-", "?".
///
/// Parsing is case-insensitive; the grade always renders uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TierGrade {
    pub letter: TierLetter,
    pub suffix: Option<TierSuffix>,
}

/// Error returned when a string is not a valid tier grade.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid tier grade: {0:?}")]
pub struct ParseTierError(pub String);

impl TierGrade {
    /// Bare-letter grade with no qualifier.
    pub fn letter(letter: TierLetter) -> Self {
        Self {
            letter,
            suffix: None,
        }
    }
}

impl FromStr for TierGrade {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        let letter = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('S') => TierLetter::S,
            Some('A') => TierLetter::A,
            Some('B') => TierLetter::B,
            Some('C') => TierLetter::C,
            Some('D') => TierLetter::D,
            Some('E') => TierLetter::E,
            Some('F') => TierLetter::F,
            Some('?') => TierLetter::Unknown,
            _ => return Err(ParseTierError(s.to_string())),
        };

        let suffix = match chars.next() {
            None => None,
            Some('+') => Some(TierSuffix::Plus),
            Some('-') => Some(TierSuffix::Minus),
            Some(_) => return Err(ParseTierError(s.to_string())),
        };

        if chars.next().is_some() {
            return Err(ParseTierError(s.to_string()));
        }

        Ok(Self { letter, suffix })
    }
}

impl fmt::Display for TierGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self.letter {
            TierLetter::S => "S",
            TierLetter::A => "A",
            TierLetter::B => "B",
            TierLetter::C => "C",
            TierLetter::D => "D",
            TierLetter::E => "E",
            TierLetter::F => "F",
            TierLetter::Unknown => "?",
        };
        let suffix = match self.suffix {
            Some(TierSuffix::Plus) => "+",
            Some(TierSuffix::Minus) => "-",
            None => "",
        };
        write!(f, "{}{}", letter, suffix)
    }
}

impl Serialize for TierGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TierGrade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Statistics extracted from one champion/role page.
///
/// Each field is independently optional: `None` means the page did not
/// yield that value, never zero. A fetch or parse failure produces the
/// default all-`None` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleStats {
    pub tier: Option<TierGrade>,
    pub win_rate: Option<f64>,
    pub pick_rate: Option<f64>,
    pub ban_rate: Option<f64>,
}

impl RoleStats {
    /// True when no heuristic matched anything on the page.
    pub fn is_empty(&self) -> bool {
        self.tier.is_none()
            && self.win_rate.is_none()
            && self.pick_rate.is_none()
            && self.ban_rate.is_none()
    }
}
