//! Route table errors.

use thiserror::Error;

/// Errors raised while building a route table or rendering a named route.
///
/// Resolution itself never fails: a valid table always ends with a
/// catch-all entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid route pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("route name `{0}` is declared more than once")]
    DuplicateName(String),

    #[error("route table has no catch-all entry as its last route")]
    MissingFallback,

    #[error("route `{route}` is unreachable: catch-all `{by}` is declared before it")]
    Shadowed { route: String, by: String },

    #[error("redirect `{from}` -> `{to}` lands on another redirect")]
    RedirectChain { from: String, to: String },

    #[error("redirect target `{0}` must be an absolute path")]
    InvalidRedirect(String),

    #[error("unknown route name `{0}`")]
    UnknownName(String),

    #[error("route `{name}` requires parameter `{param}`")]
    MissingParam { name: String, param: String },

    #[error("route `{0}` has a catch-all pattern and cannot be rendered")]
    NotNavigable(String),
}
