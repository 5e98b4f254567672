//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "dist"         # Bundler output directory
//! shell = "index.html"    # SPA entry document inside `output`
//! ```

use crate::config::FieldPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the bundled front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Bundler output directory (relative to the project root).
    pub output: PathBuf,

    /// SPA entry document, relative to `output`.
    pub shell: PathBuf,
}

impl BuildConfig {
    pub const SHELL: FieldPath = FieldPath::new("build.shell");

    /// Absolute path of the SPA entry document.
    pub fn shell_path(&self) -> PathBuf {
        self.output.join(&self.shell)
    }

    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.shell.as_os_str().is_empty() || self.shell.is_absolute() {
            diag.error_with_hint(
                Self::SHELL,
                format!("must be a file name inside the output directory: {}", self.shell.display()),
                "the default is \"index.html\"",
            );
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("dist"),
            shell: PathBuf::from("index.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};
    use std::path::PathBuf;

    #[test]
    fn test_build_config() {
        let config = test_parse_config("[build]\noutput = \"public\"\nshell = \"app.html\"");
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.shell_path(), PathBuf::from("public/app.html"));
    }

    #[test]
    fn test_build_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.shell, PathBuf::from("index.html"));
    }

    #[test]
    fn test_absolute_shell_is_rejected() {
        let config = test_parse_config("[build]\nshell = \"/index.html\"");
        let mut diag = ConfigDiagnostics::new();
        config.build.validate(&mut diag);
        assert!(!diag.is_empty());
    }
}
