//! # Draftmeta
//!
//! A League of Legends champion statistics scraper.
//!
//! Resolves the live game version, fetches the champion roster from Data
//! Dragon, scrapes per-role win/pick/ban rates and tier grades from u.gg,
//! and writes the aggregate as a single JSON snapshot.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (champions, roles, tier grades)
//! - **sources**: Upstream clients (Data Dragon catalog, u.gg statistics)
//! - **scrape**: Run orchestration and per-champion aggregation
//! - **storage**: Snapshot file writing
//! - **progress**: Terminal progress reporting
//! - **fetch**: HTTP fetching with timeouts
//! - **config**: Configuration loading and validation

pub mod config;
pub mod fetch;
pub mod models;
pub mod progress;
pub mod scrape;
pub mod sources;
pub mod storage;

pub use models::*;
