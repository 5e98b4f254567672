//! View identifiers.

use serde::Serialize;
use std::fmt;

/// A page component supplied by the front-end bundle.
///
/// The router only holds the identifier; rendering belongs to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Landing page.
    Home,
    /// List of all books.
    Books,
    /// Chapters of one book.
    Chapters,
    /// Text of one chapter.
    Reader,
}

impl View {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Books => "books",
            Self::Chapters => "chapters",
            Self::Reader => "reader",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
