//! Scrape orchestrator.
//!
//! Coordinates one full pipeline run:
//! 1. Resolve the latest patch
//! 2. Fetch the champion catalog
//! 3. Fetch statistics for every champion and role, sequentially
//! 4. Fold per-role stats into snapshot records
//! 5. Write the snapshot file
//!
//! Patch and catalog failures abort the run before anything is
//! written. Per-page failures only blank the affected fields.

use std::sync::Arc;
use std::time::Duration;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::info;

use crate::models::{Champion, ChampionRecord, Patch, Role, RoleStats};
use crate::progress::Progress;
use crate::sources::{ChampionCatalog, RoleStatsSource};
use crate::storage::SnapshotWriter;

/// Errors that abort a scrape run.
///
/// Per-page failures are absorbed by the statistics source and never
/// surface here.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Source error: {0}")]
    Source(#[from] crate::sources::SourceError),

    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),
}

/// Result of a scrape run.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    pub patch: Patch,
    pub champions: usize,
    pub pages_fetched: usize,
    pub pages_empty: usize,
    pub duration: Duration,
}

/// Scrape orchestrator.
pub struct Scraper {
    catalog: Arc<dyn ChampionCatalog>,
    stats: Arc<dyn RoleStatsSource>,
    writer: SnapshotWriter,
    champion_limit: Option<usize>,
}

impl Scraper {
    /// Create a new scraper.
    pub fn new(
        catalog: Arc<dyn ChampionCatalog>,
        stats: Arc<dyn RoleStatsSource>,
        writer: SnapshotWriter,
    ) -> Self {
        Self {
            catalog,
            stats,
            writer,
            champion_limit: None,
        }
    }

    /// Cap the number of champions processed in a run.
    pub fn with_champion_limit(mut self, limit: usize) -> Self {
        self.champion_limit = Some(limit);
        self
    }

    /// Run a single scrape operation.
    pub async fn run_once(&self, progress: &mut dyn Progress) -> Result<ScrapeResult, ScrapeError> {
        let start = std::time::Instant::now();

        let patch = self.catalog.latest_patch().await?;
        let mut champions = self.catalog.champions(&patch).await?;

        if let Some(limit) = self.champion_limit {
            champions.truncate(limit);
            info!("Limiting run to first {} champions", champions.len());
        }

        let total = champions.len() * Role::ALL.len();
        info!(
            "Scraping {} pages for {} champions on patch {}",
            total,
            champions.len(),
            patch
        );

        progress.start(total as u64);

        let mut records = Vec::with_capacity(champions.len());
        let mut pages_fetched = 0usize;
        let mut pages_empty = 0usize;

        for champion in &champions {
            let mut role_stats = Vec::with_capacity(Role::ALL.len());
            for role in Role::ALL {
                pages_fetched += 1;
                progress.update(pages_fetched as u64, &champion.slug, role);

                let stats = self.stats.role_stats(&champion.slug, role).await;
                if stats.is_empty() {
                    pages_empty += 1;
                }
                role_stats.push((role, stats));
            }

            let img = self.catalog.image_url(&patch, &champion.id);
            records.push(assemble_record(champion, &img, &role_stats));
        }

        progress.stop();

        // The snapshot is the very last step, so an aborted run never
        // leaves a file behind.
        self.writer.write(&records)?;

        let duration = start.elapsed();
        info!(
            "Scrape completed: {} champions, {} pages ({} empty) in {:?}",
            records.len(),
            pages_fetched,
            pages_empty,
            duration
        );

        Ok(ScrapeResult {
            patch,
            champions: records.len(),
            pages_fetched,
            pages_empty,
            duration,
        })
    }
}

/// Fold per-role statistics into one snapshot record.
///
/// The per-role maps are keyed by role short code, in the order given.
/// The single ban rate is the first non-`None` ban rate in that order;
/// later roles cannot change it.
pub fn assemble_record(
    champion: &Champion,
    img: &str,
    role_stats: &[(Role, RoleStats)],
) -> ChampionRecord {
    let mut tier = IndexMap::with_capacity(role_stats.len());
    let mut winrate = IndexMap::with_capacity(role_stats.len());
    let mut pickrate = IndexMap::with_capacity(role_stats.len());
    let mut banrate = None;

    for (role, stats) in role_stats {
        let key = role.short_code().to_string();
        tier.insert(key.clone(), stats.tier);
        winrate.insert(key.clone(), stats.win_rate);
        pickrate.insert(key, stats.pick_rate);

        if banrate.is_none() {
            banrate = stats.ban_rate;
        }
    }

    ChampionRecord {
        name: champion.id.clone(),
        img: img.to_string(),
        tier,
        winrate,
        pickrate,
        banrate,
    }
}
