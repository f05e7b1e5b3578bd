use anyhow::Context;
use error_pages_sdk::{IncidentKind, IncidentRecord};
use serde::{Deserialize, Serialize};
use time::UtcOffset;

use crate::domain::service::ServiceConfig;

/// Configuration for the `error_pages` module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorPagesConfig {
    /// Absolute base url of the site. A missing trailing `/` is added.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Grid columns spanned by the news slider on the generic pages.
    #[serde(default = "default_news_slider_grid")]
    pub news_slider_grid: u32,
    /// Fixed offset incident timestamps are shown at; `0` shows UTC.
    #[serde(default)]
    pub timestamp_utc_offset_minutes: i16,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavigationPointConfig>,
    #[serde(default)]
    pub news_headlines: Vec<String>,
    /// Incident records served by the in-memory store.
    #[serde(default)]
    pub incidents: Vec<IncidentSeed>,
}

impl Default for ErrorPagesConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            news_slider_grid: default_news_slider_grid(),
            timestamp_utc_offset_minutes: 0,
            navigation: default_navigation(),
            news_headlines: Vec::new(),
            incidents: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationPointConfig {
    pub name: String,
    /// Site-relative path, without a leading `/`.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IncidentKindConfig {
    Error,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncidentSeed {
    pub id: u64,
    pub kind: IncidentKindConfig,
    pub message: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub line: u32,
    pub url: String,
    pub timestamp: i64,
    #[serde(default)]
    pub info: String,
}

impl From<IncidentSeed> for IncidentRecord {
    fn from(seed: IncidentSeed) -> Self {
        Self {
            id: seed.id,
            kind: match seed.kind {
                IncidentKindConfig::Error => IncidentKind::Error,
                IncidentKindConfig::Other => IncidentKind::Other,
            },
            message: seed.message,
            file: seed.file,
            line: seed.line,
            url: seed.url,
            timestamp: seed.timestamp,
            info: seed.info,
        }
    }
}

impl ErrorPagesConfig {
    /// Site url guaranteed to end in `/`.
    #[must_use]
    pub fn normalized_site_url(&self) -> String {
        if self.site_url.ends_with('/') {
            self.site_url.clone()
        } else {
            format!("{}/", self.site_url)
        }
    }

    /// # Errors
    /// Returns an error if the timestamp offset is outside +-25:59.
    pub fn service_config(&self) -> anyhow::Result<ServiceConfig> {
        let offset =
            UtcOffset::from_whole_seconds(i32::from(self.timestamp_utc_offset_minutes) * 60)
                .with_context(|| {
                    format!(
                        "invalid timestamp_utc_offset_minutes: {}",
                        self.timestamp_utc_offset_minutes
                    )
                })?;

        Ok(ServiceConfig {
            site_url: self.normalized_site_url(),
            news_slider_grid: self.news_slider_grid,
            timestamp_offset: offset,
        })
    }
}

fn default_site_url() -> String {
    "http://localhost:8080/".to_owned()
}

fn default_news_slider_grid() -> u32 {
    6
}

fn default_navigation() -> Vec<NavigationPointConfig> {
    [("Home", ""), ("News", "news"), ("Community", "community")]
        .into_iter()
        .map(|(name, path)| NavigationPointConfig {
            name: name.to_owned(),
            path: path.to_owned(),
        })
        .collect()
}
