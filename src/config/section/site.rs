//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Projeto Bíblia"
//! url = "https://user.github.io/projeto_biblia/"   # optional
//! ```
//!
//! When `url` is set, its path becomes the deploy subpath.

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title, shown in the server log.
    pub title: String,

    /// Public URL of the default (subpath) deployment.
    pub url: Option<String>,
}

impl SiteSectionConfig {
    pub const URL: FieldPath = FieldPath::new("site.url");

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(url) = &self.url
            && crate::config::util::extract_url_path(url).is_none()
        {
            diag.error_with_hint(
                Self::URL,
                format!("invalid URL: {url}"),
                "use an absolute URL such as https://user.github.io/projeto_biblia/",
            );
        }
    }
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: "Projeto Bíblia".to_string(),
            url: None,
        }
    }
}
