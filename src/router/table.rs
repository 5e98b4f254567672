//! Ordered route table.
//!
//! Routes are tried in declaration order and the first full match wins.
//! The table is validated once when built, so resolution is total and
//! follows at most one redirect.

use super::{Params, Pattern, RouteError, View, pattern::split_path};
use serde::Serialize;
use std::collections::HashSet;

/// What a matched route does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Render a view with the bound parameters.
    View(View),
    /// Re-issue navigation against another path.
    Redirect(String),
}

/// A single route declaration.
#[derive(Debug, Clone)]
pub struct Route {
    pattern: Pattern,
    name: String,
    target: Target,
}

impl Route {
    pub fn view(pattern: &str, name: &str, view: View) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: name.to_string(),
            target: Target::View(view),
        })
    }

    pub fn redirect(pattern: &str, name: &str, to: &str) -> Result<Self, RouteError> {
        if !to.starts_with('/') {
            return Err(RouteError::InvalidRedirect(to.to_string()));
        }
        Ok(Self {
            pattern: Pattern::parse(pattern)?,
            name: name.to_string(),
            target: Target::Redirect(to.to_string()),
        })
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn target(&self) -> &Target {
        &self.target
    }
}

/// First route matching a path, before any redirect is followed.
#[derive(Debug, Clone)]
pub struct Match<'a> {
    pub route: &'a Route,
    pub params: Params,
}

/// Final outcome of navigating to a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Name of the route that renders.
    pub name: String,
    pub view: View,
    pub params: Params,
    /// Original path when a redirect was followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

/// Validated, immutable list of routes.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting layouts that would break total resolution.
    ///
    /// # Checks
    /// - route names are unique
    /// - the last route is a catch-all and no catch-all comes earlier
    /// - every redirect lands on a route that renders a view
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        for route in &routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }

        if let Some(pos) = routes.iter().position(|r| r.pattern.is_catch_all())
            && pos + 1 < routes.len()
        {
            return Err(RouteError::Shadowed {
                route: routes[pos + 1].name.clone(),
                by: routes[pos].name.clone(),
            });
        }
        if !routes.last().is_some_and(|last| last.pattern.is_catch_all()) {
            return Err(RouteError::MissingFallback);
        }

        let table = Self { routes };
        for route in &table.routes {
            if let Target::Redirect(to) = &route.target
                && let Target::Redirect(_) = table.find(to).route.target
            {
                return Err(RouteError::RedirectChain {
                    from: route.pattern.as_str().to_string(),
                    to: to.clone(),
                });
            }
        }

        Ok(table)
    }

    /// The route table of the reading app.
    ///
    /// | Pattern                         | Name       | Target       |
    /// |---------------------------------|------------|--------------|
    /// | `/`                             | `home`     | home view    |
    /// | `/books-index`                  | `books`    | books view   |
    /// | `/book/:book`                   | `chapters` | chapters view|
    /// | `/book/:book/chapter/:chapter`  | `reader`   | reader view  |
    /// | `/*path`                        | `fallback` | redirect `/` |
    pub fn standard() -> Result<Self, RouteError> {
        Self::new(vec![
            Route::view("/", "home", View::Home)?,
            Route::view("/books-index", "books", View::Books)?,
            Route::view("/book/:book", "chapters", View::Chapters)?,
            Route::view("/book/:book/chapter/:chapter", "reader", View::Reader)?,
            Route::redirect("/*path", "fallback", "/")?,
        ])
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    /// First route matching `path`. Always succeeds on a validated table.
    pub fn find(&self, path: &str) -> Match<'_> {
        let segments = split_path(path);
        self.routes
            .iter()
            .find_map(|route| {
                route
                    .pattern
                    .matches(&segments)
                    .map(|params| Match { route, params })
            })
            .unwrap_or_else(|| Match {
                route: &self.routes[self.routes.len() - 1],
                params: Params::default(),
            })
    }

    /// Resolve `path` to the view that renders, following a redirect.
    pub fn resolve(&self, path: &str) -> Resolution {
        let first = self.find(path);
        let (found, redirected_from) = match &first.route.target {
            Target::View(_) => (first, None),
            Target::Redirect(to) => (self.find(to), Some(path.to_string())),
        };

        let Target::View(view) = found.route.target else {
            unreachable!("redirect chains are rejected when the table is built")
        };

        Resolution {
            name: found.route.name.clone(),
            view,
            params: found.params,
            redirected_from,
        }
    }

    /// Path of a named route with the given parameters.
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        route.pattern.render(name, params)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::standard().unwrap()
    }

    #[test]
    fn test_home() {
        let res = table().resolve("/");
        assert_eq!(res.view, View::Home);
        assert_eq!(res.name, "home");
        assert!(res.params.is_empty());
        assert!(res.redirected_from.is_none());
    }

    #[test]
    fn test_books_index() {
        let res = table().resolve("/books-index");
        assert_eq!(res.view, View::Books);
        assert!(res.params.is_empty());
    }

    #[test]
    fn test_chapters_binds_book() {
        for book in ["genesis", "1-samuel", "Êxodo", "42"] {
            let res = table().resolve(&format!("/book/{book}"));
            assert_eq!(res.view, View::Chapters);
            assert_eq!(res.params.get("book"), Some(book));
            assert_eq!(res.params.iter().count(), 1);
        }
    }

    #[test]
    fn test_reader_binds_book_and_chapter() {
        for (book, chapter) in [("genesis", "1"), ("psalms", "119"), ("jude", "x")] {
            let res = table().resolve(&format!("/book/{book}/chapter/{chapter}"));
            assert_eq!(res.view, View::Reader);
            assert_eq!(res.name, "reader");
            assert_eq!(res.params.get("book"), Some(book));
            assert_eq!(res.params.get("chapter"), Some(chapter));
        }
    }

    #[test]
    fn test_unmatched_paths_redirect_home() {
        for path in [
            "/nowhere",
            "/books",
            "/book",
            "/book/",
            "/book/genesis/chapter",
            "/book/genesis/chapter/1/extra",
            "/book/genesis/verse/1",
            "/a/b/c/d/e",
        ] {
            let res = table().resolve(path);
            assert_eq!(res.view, View::Home, "path {path}");
            assert_eq!(res.redirected_from.as_deref(), Some(path));
        }
    }

    #[test]
    fn test_find_reports_redirect_before_following() {
        let table = table();
        let found = table.find("/missing/page");
        assert_eq!(found.route.name(), "fallback");
        assert_eq!(found.route.target(), &Target::Redirect("/".into()));
        assert_eq!(found.params.get("path"), Some("missing/page"));
    }

    #[test]
    fn test_trailing_slash_and_query() {
        let res = table().resolve("/book/ruth/?highlight=1");
        assert_eq!(res.view, View::Chapters);
        assert_eq!(res.params.get("book"), Some("ruth"));
        assert!(res.redirected_from.is_none());
    }

    #[test]
    fn test_catch_all_before_templates_is_rejected() {
        let result = RouteTable::new(vec![
            Route::view("/", "home", View::Home).unwrap(),
            Route::view("/books-index", "books", View::Books).unwrap(),
            Route::redirect("/*", "fallback", "/").unwrap(),
            Route::view("/book/:book", "chapters", View::Chapters).unwrap(),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteError::Shadowed {
                route: "chapters".into(),
                by: "fallback".into(),
            }
        );
    }

    #[test]
    fn test_wildcard_moved_ahead_of_book_routes_is_rejected() {
        let result = RouteTable::new(vec![
            Route::view("/", "home", View::Home).unwrap(),
            Route::view("/books-index", "books", View::Books).unwrap(),
            Route::redirect("/*path", "fallback", "/").unwrap(),
            Route::view("/book/:book", "chapters", View::Chapters).unwrap(),
            Route::view("/book/:book/chapter/:chapter", "reader", View::Reader).unwrap(),
        ]);
        assert_eq!(
            result.unwrap_err(),
            RouteError::Shadowed {
                route: "chapters".into(),
                by: "fallback".into(),
            }
        );
    }

    #[test]
    fn test_missing_fallback_is_rejected() {
        let result = RouteTable::new(vec![Route::view("/", "home", View::Home).unwrap()]);
        assert_eq!(result.unwrap_err(), RouteError::MissingFallback);

        assert_eq!(
            RouteTable::new(Vec::new()).unwrap_err(),
            RouteError::MissingFallback
        );
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let result = RouteTable::new(vec![
            Route::view("/", "home", View::Home).unwrap(),
            Route::view("/books-index", "home", View::Books).unwrap(),
            Route::redirect("/*", "fallback", "/").unwrap(),
        ]);
        assert_eq!(result.unwrap_err(), RouteError::DuplicateName("home".into()));
    }

    #[test]
    fn test_redirect_chain_is_rejected() {
        // `/` is not declared, so the fallback would redirect to itself.
        let result = RouteTable::new(vec![
            Route::view("/books-index", "books", View::Books).unwrap(),
            Route::redirect("/*", "fallback", "/").unwrap(),
        ]);
        assert!(matches!(
            result.unwrap_err(),
            RouteError::RedirectChain { .. }
        ));
    }

    #[test]
    fn test_relative_redirect_is_rejected() {
        assert_eq!(
            Route::redirect("/*", "fallback", "home").unwrap_err(),
            RouteError::InvalidRedirect("home".into())
        );
    }

    #[test]
    fn test_url_for() {
        let table = table();
        assert_eq!(table.url_for("home", &[]).unwrap(), "/");
        assert_eq!(table.url_for("books", &[]).unwrap(), "/books-index");
        assert_eq!(
            table.url_for("chapters", &[("book", "genesis")]).unwrap(),
            "/book/genesis"
        );
        assert_eq!(
            table
                .url_for("reader", &[("book", "genesis"), ("chapter", "3")])
                .unwrap(),
            "/book/genesis/chapter/3"
        );
    }

    #[test]
    fn test_url_for_errors() {
        let table = table();
        assert_eq!(
            table.url_for("psalm", &[]).unwrap_err(),
            RouteError::UnknownName("psalm".into())
        );
        assert!(matches!(
            table.url_for("reader", &[("book", "genesis")]).unwrap_err(),
            RouteError::MissingParam { .. }
        ));
        assert_eq!(
            table.url_for("fallback", &[]).unwrap_err(),
            RouteError::NotNavigable("fallback".into())
        );
    }

    #[test]
    fn test_url_for_round_trips_through_resolve() {
        let table = table();
        let url = table
            .url_for("reader", &[("book", "cântico dos cânticos"), ("chapter", "8")])
            .unwrap();
        let res = table.resolve(&url);
        assert_eq!(res.view, View::Reader);
        assert_eq!(res.params.get("book"), Some("cântico dos cânticos"));
        assert_eq!(res.params.get("chapter"), Some("8"));
    }

    #[test]
    fn test_resolution_serializes() {
        let res = table().resolve("/book/ruth/chapter/2");
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["name"], "reader");
        assert_eq!(json["view"], "reader");
        assert_eq!(json["params"]["book"], "ruth");
        assert!(json.get("redirected_from").is_none());
    }
}
