//! Client-side route table.
//!
//! # Module Structure
//!
//! ```text
//! router/
//! ├── pattern    # Pattern parsing, path splitting, parameters
//! ├── table      # Ordered RouteTable, resolution, named URLs
//! ├── view       # View identifiers
//! ├── error      # RouteError
//! └── mod.rs     # Router (table + base path)
//! ```
//!
//! The router is built once at startup and passed explicitly to whatever
//! drives navigation (the CLI commands and the development server).

mod error;
mod pattern;
mod table;
mod view;

pub use error::RouteError;
pub use pattern::{Params, Pattern};
pub use table::{Resolution, RouteTable, Target};
pub use view::View;

use percent_encoding::percent_decode_str;

/// Route table mounted under a public base path.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    /// Base path, always starting and ending with `/`.
    base: String,
}

impl Router {
    pub fn new(table: RouteTable, base: &str) -> Self {
        Self {
            table,
            base: normalize_base(base),
        }
    }

    #[inline]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[inline]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Strip the base path from a browser URL.
    ///
    /// Returns the app-relative path (`""` for the base itself), or `None`
    /// when the URL lies outside the base. Base segments are compared after
    /// percent-decoding; the returned remainder is left encoded.
    ///
    /// ```ignore
    /// // base = "/projeto_biblia/"
    /// strip_base("/projeto_biblia/book/ruth")   == Some("/book/ruth")
    /// strip_base("/projeto%5Fbiblia/book/ruth") == Some("/book/ruth")
    /// strip_base("/projeto_biblia")             == Some("")
    /// strip_base("/other")                      == None
    /// ```
    pub fn strip_base<'a>(&self, url: &'a str) -> Option<&'a str> {
        let mut rest = url;
        for expected in self.base.split('/').filter(|seg| !seg.is_empty()) {
            let tail = rest.strip_prefix('/')?;
            let end = tail.find(['/', '?', '#']).unwrap_or(tail.len());
            let (segment, after) = tail.split_at(end);
            if percent_decode_str(segment).decode_utf8().ok()? != expected {
                return None;
            }
            rest = after;
        }
        Some(rest)
    }

    /// Join an app-relative path onto the base path.
    pub fn join_base(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}{}", self.base, path)
    }

    /// Browser URL of a named route, including the base path.
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let path = self.table.url_for(name, params)?;
        Ok(self.join_base(&path))
    }

    /// Resolve a browser URL. `None` if it is outside the base path.
    pub fn resolve_url(&self, url: &str) -> Option<Resolution> {
        self.strip_base(url).map(|path| self.table.resolve(path))
    }
}

/// Ensure a base path starts and ends with `/`.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
