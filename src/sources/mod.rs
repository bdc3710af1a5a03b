//! Upstream data sources.
//!
//! All upstream specifics (endpoints, response shapes, page heuristics)
//! are isolated in this module so endpoint changes are easy to fix. Two
//! seams face the rest of the pipeline: [`ChampionCatalog`] for patch
//! and catalog discovery, [`RoleStatsSource`] for per-page statistics.

pub mod ddragon;
pub mod ugg;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Champion, Patch, Role, RoleStats};

pub use ddragon::DdragonClient;
pub use ugg::{UggClient, UggPageParser};

/// Errors from patch and catalog discovery.
///
/// Any of these is fatal to a run: without a patch and a champion list
/// there is nothing to scrape.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::fetch::FetchError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version feed is empty")]
    EmptyVersionFeed,
}

/// Patch resolution and champion catalog discovery.
#[async_trait]
pub trait ChampionCatalog: Send + Sync {
    /// Resolve the most recent game data version.
    async fn latest_patch(&self) -> Result<Patch, SourceError>;

    /// Fetch the champion catalog for a patch, in source order.
    async fn champions(&self, patch: &Patch) -> Result<Vec<Champion>, SourceError>;

    /// Portrait image URL for a champion on a patch.
    fn image_url(&self, patch: &Patch, champion_id: &str) -> String;
}

/// Per-champion, per-role statistics extraction.
///
/// Implementations absorb their own failures: a page that cannot be
/// fetched yields the all-`None` stats, never an error. One bad page
/// must not take down a full run.
#[async_trait]
pub trait RoleStatsSource: Send + Sync {
    async fn role_stats(&self, slug: &str, role: Role) -> RoleStats;
}

/// Extracts statistics from raw page markup.
///
/// Kept separate from the fetching client so the heuristic can be
/// swapped when a site changes its markup. A page with no recognizable
/// stat blocks parses to the all-`None` stats; parsers never error.
pub trait PageParser: Send + Sync {
    fn parse(&self, html: &str) -> RoleStats;
}
