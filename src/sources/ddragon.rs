//! Data Dragon client.
//!
//! Data Dragon is the static game-data CDN: a version feed listing
//! every released patch (newest first) and a per-patch champion
//! catalog keyed by champion.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::info;
use url::Url;

use crate::fetch::{FetchError, Fetcher};
use crate::models::{Champion, Patch};

use super::{ChampionCatalog, SourceError};

/// Default Data Dragon base URL.
pub const DDRAGON_BASE: &str = "https://ddragon.leagueoflegends.com";

/// Data Dragon client.
pub struct DdragonClient {
    fetcher: Fetcher,
    base_url: String,
}

/// One entry from the catalog's `data` mapping.
///
/// The catalog carries far more per champion (stats, tags, blurbs);
/// only the canonical id matters here.
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    id: String,
}

/// The champion catalog response: `{"data": {...}}`.
///
/// `data` is deserialized into an ordered map so the snapshot lists
/// champions the way the catalog does.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: IndexMap<String, CatalogEntry>,
}

/// Parse the version feed body and take the newest entry.
fn parse_version_feed(body: &str) -> Result<Patch, SourceError> {
    let versions: Vec<String> = serde_json::from_str(body)?;
    let latest = versions
        .into_iter()
        .next()
        .ok_or(SourceError::EmptyVersionFeed)?;
    Ok(Patch::new(latest))
}

/// Parse the champion catalog body into entries, preserving source
/// order and skipping duplicate ids.
fn parse_catalog(body: &str) -> Result<Vec<Champion>, SourceError> {
    let response: CatalogResponse = serde_json::from_str(body)?;

    let mut champions: Vec<Champion> = Vec::with_capacity(response.data.len());
    for entry in response.data.into_values() {
        if champions.iter().any(|c| c.id == entry.id) {
            continue;
        }
        champions.push(Champion::new(entry.id));
    }

    Ok(champions)
}

impl DdragonClient {
    /// Create a new client.
    pub fn new(fetcher: Fetcher, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    async fn fetch_body(&self, url_str: &str, what: &str) -> Result<String, SourceError> {
        let url = Url::parse(url_str)
            .map_err(|e| FetchError::InvalidUrl(format!("Bad {} URL: {}", what, e)))?;
        Ok(self.fetcher.fetch_text(&url).await?)
    }
}

#[async_trait]
impl ChampionCatalog for DdragonClient {
    async fn latest_patch(&self) -> Result<Patch, SourceError> {
        let url_str = format!("{}/api/versions.json", self.base_url);
        let body = self.fetch_body(&url_str, "version feed").await?;

        let patch = parse_version_feed(&body)?;
        info!("Data Dragon: latest patch is {}", patch);
        Ok(patch)
    }

    async fn champions(&self, patch: &Patch) -> Result<Vec<Champion>, SourceError> {
        let url_str = format!("{}/cdn/{}/data/en_US/champion.json", self.base_url, patch);
        let body = self.fetch_body(&url_str, "champion catalog").await?;

        let champions = parse_catalog(&body)?;
        info!(
            "Data Dragon: {} champions on patch {}",
            champions.len(),
            patch
        );
        Ok(champions)
    }

    fn image_url(&self, patch: &Patch, champion_id: &str) -> String {
        format!(
            "{}/cdn/{}/img/champion/{}.png",
            self.base_url, patch, champion_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_feed_takes_first() {
        let body = r#"["14.3.1", "14.2.1", "14.1.1"]"#;
        let patch = parse_version_feed(body).unwrap();
        assert_eq!(patch.as_str(), "14.3.1");
    }

    #[test]
    fn test_parse_version_feed_empty_is_error() {
        let result = parse_version_feed("[]");
        assert!(matches!(result, Err(SourceError::EmptyVersionFeed)));
    }

    #[test]
    fn test_parse_version_feed_malformed_is_error() {
        let result = parse_version_feed(r#"{"oops": true}"#);
        assert!(matches!(result, Err(SourceError::Json(_))));
    }

    #[test]
    fn test_parse_catalog_preserves_source_order() {
        let body = r#"{
            "type": "champion",
            "version": "14.3.1",
            "data": {
                "Aatrox": {"id": "Aatrox", "key": "266", "name": "Aatrox"},
                "MissFortune": {"id": "MissFortune", "key": "21", "name": "Miss Fortune"},
                "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri"}
            }
        }"#;

        let champions = parse_catalog(body).unwrap();
        let ids: Vec<&str> = champions.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Aatrox", "MissFortune", "Ahri"]);
    }

    #[test]
    fn test_parse_catalog_derives_slugs() {
        let body = r#"{"data": {"KSante": {"id": "KSante"}}}"#;
        let champions = parse_catalog(body).unwrap();
        assert_eq!(champions[0].slug, "ksante");
    }

    #[test]
    fn test_parse_catalog_skips_duplicate_ids() {
        let body = r#"{
            "data": {
                "Ahri": {"id": "Ahri"},
                "AhriAlias": {"id": "Ahri"},
                "Akali": {"id": "Akali"}
            }
        }"#;

        let champions = parse_catalog(body).unwrap();
        let ids: Vec<&str> = champions.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["Ahri", "Akali"]);
    }

    #[test]
    fn test_parse_catalog_malformed_is_error() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"nodata": {}}"#).is_err());
    }

    #[test]
    fn test_image_url_is_pinned_to_patch() {
        let client = DdragonClient::new(
            Fetcher::with_defaults().unwrap(),
            DDRAGON_BASE.to_string(),
        );

        let url = client.image_url(&Patch::from("14.3.1"), "Aatrox");
        assert_eq!(
            url,
            "https://ddragon.leagueoflegends.com/cdn/14.3.1/img/champion/Aatrox.png"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = DdragonClient::new(
            Fetcher::with_defaults().unwrap(),
            "https://example.invalid/".to_string(),
        );

        let url = client.image_url(&Patch::from("14.3.1"), "Ahri");
        assert_eq!(
            url,
            "https://example.invalid/cdn/14.3.1/img/champion/Ahri.png"
        );
    }
}
