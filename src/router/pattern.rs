//! Path patterns and parameter extraction.
//!
//! Pattern syntax:
//!
//! | Segment   | Matches                                  |
//! |-----------|------------------------------------------|
//! | `book`    | the literal segment (ASCII case-insensitive) |
//! | `:book`   | exactly one non-empty segment, bound to `book` |
//! | `*`       | zero or more remaining segments          |
//! | `*rest`   | same, remainder bound to `rest`          |
//!
//! Request paths are split the same way: query string and fragment are
//! dropped, empty segments are skipped and each segment is percent-decoded.

use super::RouteError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::borrow::Cow;

/// Characters escaped when a parameter is rendered into a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Wildcard(Option<String>),
}

/// A parsed route pattern such as `/book/:book/chapter/:chapter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(source: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: source.to_string(),
            reason,
        };

        if !source.starts_with('/') {
            return Err(invalid("must start with `/`"));
        }

        let raw: Vec<&str> = source.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(raw.len());

        for (i, seg) in raw.iter().enumerate() {
            let segment = if let Some(name) = seg.strip_prefix(':') {
                if !is_param_name(name) {
                    return Err(invalid("parameter names must be non-empty identifiers"));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = seg.strip_prefix('*') {
                if i + 1 != raw.len() {
                    return Err(invalid("`*` must be the last segment"));
                }
                if name.is_empty() {
                    Segment::Wildcard(None)
                } else if is_param_name(name) {
                    Segment::Wildcard(Some(name.to_string()))
                } else {
                    return Err(invalid("wildcard names must be identifiers"));
                }
            } else {
                Segment::Literal((*seg).to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// A pattern made of a single wildcard matches every path.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Match already split path segments, returning the bound parameters.
    pub fn matches(&self, path: &[Cow<'_, str>]) -> Option<Params> {
        let mut params = Params::default();
        let mut rest = path;

        for seg in &self.segments {
            match seg {
                Segment::Wildcard(name) => {
                    if let Some(name) = name {
                        let remainder: Vec<&str> = rest.iter().map(|seg| &**seg).collect();
                        params.insert(name, remainder.join("/"));
                    }
                    return Some(params);
                }
                Segment::Literal(lit) => {
                    let (head, tail) = rest.split_first()?;
                    if !head.eq_ignore_ascii_case(lit) {
                        return None;
                    }
                    rest = tail;
                }
                Segment::Param(name) => {
                    let (head, tail) = rest.split_first()?;
                    params.insert(name, head.to_string());
                    rest = tail;
                }
            }
        }

        rest.is_empty().then_some(params)
    }

    /// Render the pattern with concrete parameter values.
    ///
    /// Values are percent-encoded so they survive a round trip through
    /// [`split_path`].
    pub fn render(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut out = String::new();
        for seg in &self.segments {
            out.push('/');
            match seg {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == param.as_str())
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            name: name.to_string(),
                            param: param.clone(),
                        })?;
                    out.extend(utf8_percent_encode(value, SEGMENT));
                }
                Segment::Wildcard(_) => return Err(RouteError::NotNavigable(name.to_string())),
            }
        }
        Ok(out)
    }
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a request path into decoded, non-empty segments.
///
/// ```ignore
/// split_path("/book/g%C3%AAnesis/?x=1#top") == ["book", "gênesis"]
/// ```
pub fn split_path(path: &str) -> Vec<Cow<'_, str>> {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    path.split('/')
        .filter(|seg| !seg.is_empty())
        .map(|seg| {
            percent_decode_str(seg)
                .decode_utf8()
                .unwrap_or(Cow::Borrowed(seg))
        })
        .collect()
}

/// Parameters bound by a match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.push((name.to_string(), value.into()));
    }

    /// Value bound to `name`, as read by a view.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// ============================================================================
// tests
// ============================================================================
