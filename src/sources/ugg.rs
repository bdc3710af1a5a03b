//! u.gg statistics page client and extraction heuristics.
//!
//! The build pages carry no stable ids or classes worth pinning to, so
//! extraction is heuristic: walk every `<div>`, classify the ones whose
//! entire text looks like a stat value, and read the meaning from the
//! following sibling label. A failed page yields all-`None` stats and
//! the run moves on.

use async_trait::async_trait;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

use crate::fetch::Fetcher;
use crate::models::{Role, RoleStats};

use super::{PageParser, RoleStatsSource};

/// Default statistics site base URL.
pub const UGG_BASE: &str = "https://u.gg";

/// Statistics page client.
pub struct UggClient {
    fetcher: Fetcher,
    base_url: String,
    parser: Box<dyn PageParser>,
}

impl UggClient {
    /// Create a client with the default page parser.
    pub fn new(fetcher: Fetcher, base_url: String) -> Self {
        Self::with_parser(fetcher, base_url, Box::new(UggPageParser))
    }

    /// Create a client with a custom page parser.
    pub fn with_parser(fetcher: Fetcher, base_url: String, parser: Box<dyn PageParser>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            fetcher,
            base_url,
            parser,
        }
    }

    /// Build page URL for a champion slug in a role.
    fn page_url(&self, slug: &str, role: Role) -> String {
        format!(
            "{}/lol/champions/{}/build/{}",
            self.base_url,
            slug,
            role.long_code()
        )
    }
}

#[async_trait]
impl RoleStatsSource for UggClient {
    async fn role_stats(&self, slug: &str, role: Role) -> RoleStats {
        let url_str = self.page_url(slug, role);
        let url = match Url::parse(&url_str) {
            Ok(u) => u,
            Err(e) => {
                warn!("u.gg: bad page URL for {}/{}: {}", slug, role, e);
                return RoleStats::default();
            }
        };

        let html = match self.fetcher.fetch_text(&url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("u.gg: failed to fetch {}/{}: {}", slug, role, e);
                return RoleStats::default();
            }
        };

        let stats = self.parser.parse(&html);
        if stats.is_empty() {
            warn!("u.gg: no stats recognized on page for {}/{}", slug, role);
        }
        stats
    }
}

/// Heuristic parser for u.gg build pages.
pub struct UggPageParser;

impl PageParser for UggPageParser {
    fn parse(&self, html: &str) -> RoleStats {
        // A value block is a div whose entire text is one token:
        // either a small percentage ("52.31%", "<1%") or a tier grade
        // ("S+", "b-", "?"). The following sibling element names it.
        let re_percent = Regex::new(r"^<?\s*\d{1,2}(\.\d{1,2})?%$").unwrap();
        let re_tier = Regex::new(r"(?i)^[SABCDEF?][+-]?$").unwrap();

        let document = Html::parse_document(html);
        let block_sel = Selector::parse("div").unwrap();

        let mut stats = RoleStats::default();

        for el in document.select(&block_sel) {
            let text = element_text(&el);
            if text.is_empty() {
                continue;
            }

            if re_percent.is_match(&text) {
                let Some(label) = sibling_label(&el) else {
                    continue;
                };
                let value = parse_percent_value(&text);

                // First match wins; later blocks with the same label
                // are ignored.
                if label.contains("win rate") {
                    stats.win_rate = stats.win_rate.or(value);
                } else if label.contains("pick rate") {
                    stats.pick_rate = stats.pick_rate.or(value);
                } else if label.contains("ban rate") {
                    stats.ban_rate = stats.ban_rate.or(value);
                }
            } else if re_tier.is_match(&text) {
                let Some(label) = sibling_label(&el) else {
                    continue;
                };
                if label.contains("tier") && stats.tier.is_none() {
                    stats.tier = text.parse().ok();
                }
            }
        }

        stats
    }
}

/// Whole descendant text of an element, trimmed.
fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Trimmed, lowercased text of the next sibling element, skipping any
/// text nodes in between.
fn sibling_label(el: &ElementRef) -> Option<String> {
    el.next_siblings()
        .find_map(ElementRef::wrap)
        .map(|label_el| element_text(&label_el).to_lowercase())
}

/// Strip the comparison prefix, whitespace and the percent sign, then
/// parse what remains. "<1%" collapses to 1.0.
fn parse_percent_value(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '%') && !c.is_whitespace())
        .collect();
    cleaned.parse().ok()
}
