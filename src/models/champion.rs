//! Champion catalog entries and snapshot records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::TierGrade;

/// A game data version token ("14.3.1").
///
/// Opaque ordering-free identifier, resolved once per run and threaded
/// through every URL that is pinned to a patch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(String);

impl Patch {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Patch {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One catalog entry: the canonical id plus its URL slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Champion {
    /// Canonical mixed-case identifier ("Aatrox", "KSante").
    pub id: String,

    /// Lowercased id, used in statistics page URLs.
    pub slug: String,
}

impl Champion {
    /// Build an entry from the canonical id; the slug is derived.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let slug = id.to_lowercase();
        Self { id, slug }
    }
}

/// One snapshot row, serialized exactly as the front-end consumes it.
///
/// The per-role maps always carry all five role short codes, in role
/// order, with `null` for values the pages did not yield.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChampionRecord {
    /// Canonical champion id.
    pub name: String,

    /// Portrait image URL pinned to the resolved patch.
    pub img: String,

    /// Tier grade per role short code.
    pub tier: IndexMap<String, Option<TierGrade>>,

    /// Win percentage per role short code.
    pub winrate: IndexMap<String, Option<f64>>,

    /// Pick percentage per role short code.
    pub pickrate: IndexMap<String, Option<f64>>,

    /// First non-null ban percentage across roles, if any.
    pub banrate: Option<f64>,
}
