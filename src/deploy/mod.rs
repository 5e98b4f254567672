//! Deployment base path resolution.
//!
//! The public base path depends on where the bundle is hosted:
//!
//! | Check (first match wins)                  | Target           | Base path          |
//! |-------------------------------------------|------------------|--------------------|
//! | `AWS_AMPLIFY=true`                        | `amplify-root`   | `/`                |
//! | `VERCEL=true` or `NOW_BUILDER=1`          | `vercel-root`    | `/`                |
//! | anything else (GitHub Pages project site) | `default-subpath`| `/projeto_biblia/` |
//!
//! Sentinels are compared exactly; `false`, `0` or an empty value fall
//! through to the next check. The target is detected once at startup.

mod env;

pub use env::{Env, ProcessEnv};

use serde::Serialize;
use std::fmt;

/// AWS Amplify build flag.
pub const AMPLIFY_FLAG: &str = "AWS_AMPLIFY";
/// Vercel boolean-style flag.
pub const VERCEL_FLAG: &str = "VERCEL";
/// Vercel numeric-style flag, set by the builder image.
pub const VERCEL_BUILDER_FLAG: &str = "NOW_BUILDER";

/// Subpath of the GitHub Pages project site.
pub const DEFAULT_SUBPATH: &str = "/projeto_biblia/";

/// Hosting environment the bundle is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeployTarget {
    /// AWS Amplify, served from the domain root.
    AmplifyRoot,
    /// Vercel, served from the domain root.
    VercelRoot,
    /// Any other host, served from the project subpath.
    DefaultSubpath,
}

impl DeployTarget {
    /// Detect the target from environment flags.
    pub fn detect(env: &(impl Env + ?Sized)) -> Self {
        let is = |key: &str, sentinel: &str| env.var(key).is_some_and(|v| v == sentinel);

        if is(AMPLIFY_FLAG, "true") {
            Self::AmplifyRoot
        } else if is(VERCEL_FLAG, "true") || is(VERCEL_BUILDER_FLAG, "1") {
            Self::VercelRoot
        } else {
            Self::DefaultSubpath
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmplifyRoot => "amplify-root",
            Self::VercelRoot => "vercel-root",
            Self::DefaultSubpath => "default-subpath",
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved deployment settings, computed once per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deployment {
    pub target: DeployTarget,
    pub base: String,
}

impl Deployment {
    /// Detect the target; `subpath` replaces [`DEFAULT_SUBPATH`] when the
    /// bundle is not served from the domain root.
    pub fn detect(env: &(impl Env + ?Sized), subpath: &str) -> Self {
        let target = DeployTarget::detect(env);
        let base = match target {
            DeployTarget::DefaultSubpath => subpath.to_string(),
            DeployTarget::AmplifyRoot | DeployTarget::VercelRoot => resolve_base_path(env),
        };
        Self { target, base }
    }
}

/// Base path for the given environment, using the default subpath.
pub fn resolve_base_path(env: &(impl Env + ?Sized)) -> String {
    match DeployTarget::detect(env) {
        DeployTarget::AmplifyRoot | DeployTarget::VercelRoot => "/".to_string(),
        DeployTarget::DefaultSubpath => DEFAULT_SUBPATH.to_string(),
    }
}

// ============================================================================
// tests
// ============================================================================
