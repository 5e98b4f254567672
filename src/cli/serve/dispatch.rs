//! Request routing for history-mode serving.
//!
//! Order of checks for a request URL:
//! 1. outside the base path: not found (bare `/` redirects to the base)
//! 2. an existing file under the output directory: served as-is
//! 3. otherwise the route table decides: a redirect entry becomes an HTTP
//!    redirect, a view entry gets the SPA shell

use super::path::resolve_path;
use crate::config::BuildConfig;
use crate::router::{Router, Target, View};
use std::path::PathBuf;

/// What to send back for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Static asset from the bundle.
    File(PathBuf),
    /// SPA shell for a route that renders a view.
    Shell {
        path: PathBuf,
        route: String,
        view: View,
    },
    /// Navigation re-issued against another browser URL.
    Redirect(String),
    /// The route renders a view but the bundle has no shell document.
    MissingShell(PathBuf),
    /// URL lies outside the base path.
    OutsideBase,
}

pub fn dispatch(url: &str, router: &Router, build: &BuildConfig) -> Dispatch {
    let Some(path) = router.strip_base(url) else {
        let bare = url.split(['?', '#']).next().unwrap_or(url);
        return if bare == "/" {
            Dispatch::Redirect(router.base().to_string())
        } else {
            Dispatch::OutsideBase
        };
    };

    if let Some(file) = resolve_path(path, &build.output) {
        return Dispatch::File(file);
    }

    let found = router.table().find(path);
    match found.route.target() {
        Target::Redirect(to) => Dispatch::Redirect(router.join_base(to)),
        Target::View(view) => {
            let shell = build.shell_path();
            if shell.is_file() {
                Dispatch::Shell {
                    path: shell,
                    route: found.route.name().to_string(),
                    view: *view,
                }
            } else {
                Dispatch::MissingShell(shell)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouteTable;
    use std::fs;
    use tempfile::TempDir;

    fn setup(base: &str) -> (TempDir, Router, BuildConfig) {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("index.html"), "<div id=app></div>").unwrap();
        fs::write(dir.path().join("assets/app.js"), "").unwrap();

        let build = BuildConfig {
            output: dir.path().canonicalize().unwrap(),
            ..BuildConfig::default()
        };
        let router = Router::new(RouteTable::standard().unwrap(), base);
        (dir, router, build)
    }

    fn view_of(dispatch: Dispatch) -> View {
        match dispatch {
            Dispatch::Shell { view, .. } => view,
            other => panic!("expected shell, got {other:?}"),
        }
    }

    #[test]
    fn test_views_get_the_shell() {
        let (_dir, router, build) = setup("/");
        assert_eq!(view_of(dispatch("/", &router, &build)), View::Home);
        assert_eq!(view_of(dispatch("/books-index", &router, &build)), View::Books);
        assert_eq!(view_of(dispatch("/book/ruth", &router, &build)), View::Chapters);
        assert_eq!(
            view_of(dispatch("/book/ruth/chapter/3", &router, &build)),
            View::Reader
        );
    }

    #[test]
    fn test_assets_win_over_routes() {
        let (_dir, router, build) = setup("/");
        let Dispatch::File(path) = dispatch("/assets/app.js", &router, &build) else {
            panic!("expected file");
        };
        assert!(path.ends_with("assets/app.js"));
    }

    #[test]
    fn test_unknown_paths_redirect_home() {
        let (_dir, router, build) = setup("/");
        assert_eq!(
            dispatch("/nowhere/at/all", &router, &build),
            Dispatch::Redirect("/".into())
        );
        assert_eq!(
            dispatch("/assets/missing.js", &router, &build),
            Dispatch::Redirect("/".into())
        );
    }

    #[test]
    fn test_subpath_base() {
        let (_dir, router, build) = setup("/projeto_biblia/");

        assert_eq!(
            view_of(dispatch("/projeto_biblia/book/ruth", &router, &build)),
            View::Chapters
        );
        assert_eq!(view_of(dispatch("/projeto_biblia", &router, &build)), View::Home);
        assert!(matches!(
            dispatch("/projeto_biblia/assets/app.js", &router, &build),
            Dispatch::File(_)
        ));
        assert_eq!(
            dispatch("/projeto_biblia/lost", &router, &build),
            Dispatch::Redirect("/projeto_biblia/".into())
        );
        assert_eq!(
            dispatch("/", &router, &build),
            Dispatch::Redirect("/projeto_biblia/".into())
        );
        assert_eq!(dispatch("/book/ruth", &router, &build), Dispatch::OutsideBase);
    }

    #[test]
    fn test_encoded_base_is_inside_base() {
        let (_dir, router, build) = setup("/projeto_biblia/");
        assert_eq!(
            view_of(dispatch("/projeto%5Fbiblia/book/ruth", &router, &build)),
            View::Chapters
        );
        assert!(matches!(
            dispatch("/projeto%5Fbiblia/assets/app.js", &router, &build),
            Dispatch::File(_)
        ));
    }

    #[test]
    fn test_missing_shell() {
        let (dir, router, build) = setup("/");
        fs::remove_file(dir.path().join("index.html")).unwrap();
        assert!(matches!(
            dispatch("/book/ruth", &router, &build),
            Dispatch::MissingShell(_)
        ));
    }
}
