//! `[deploy]` section configuration.
//!
//! The base path itself is picked from the environment (see
//! [`crate::deploy`]); this section only sets the subpath used when no
//! root-hosting provider is detected.
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! subpath = "/projeto_biblia/"
//! ```

use crate::config::FieldPath;
use crate::deploy::DEFAULT_SUBPATH;
use serde::{Deserialize, Serialize};

/// Deploy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Base path for hosts that serve the app from a subdirectory.
    pub subpath: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            subpath: DEFAULT_SUBPATH.to_string(),
        }
    }
}

impl DeployConfig {
    pub const SUBPATH: FieldPath = FieldPath::new("deploy.subpath");

    /// Validate deploy configuration.
    ///
    /// # Checks
    /// - `subpath` starts and ends with `/`
    /// - `subpath` has no query, fragment or whitespace
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let subpath = &self.subpath;
        if !subpath.starts_with('/') || !subpath.ends_with('/') {
            diag.error_with_hint(
                Self::SUBPATH,
                format!("must start and end with `/`: {subpath:?}"),
                format!("try \"/{}/\"", subpath.trim_matches('/')),
            );
        } else if subpath.contains(['?', '#']) || subpath.chars().any(char::is_whitespace) {
            diag.error(
                Self::SUBPATH,
                format!("must be a plain path: {subpath:?}"),
            );
        }
    }
}
