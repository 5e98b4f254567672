//! Development server with history-mode routing.
//!
//! Serves the bundler output and sends every other navigation through the
//! route table, the way a static host configured for a single-page app
//! would.

mod dispatch;
mod lifecycle;
mod path;
mod response;

use dispatch::{Dispatch, dispatch};

use crate::{config::SiteConfig, debug, log, logger, router::Router};
use anyhow::{Context, Result};
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Number of request handler threads.
const WORKER_THREADS: usize = 4;

/// Bind the HTTP server and run the request loop until Ctrl+C.
pub fn serve_site(config: Arc<SiteConfig>, router: Arc<Router>) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_server_for_shutdown(Arc::clone(&server));

    log!("serve"; "{} at http://{}{}", config.site.title, addr, router.base());
    if !config.build.shell_path().is_file() {
        log!("warning"; "{} not found, run the bundler first", config.build.shell_path().display());
    }

    run_request_loop(&server, &config, &router)
}

fn run_request_loop(server: &Server, config: &Arc<SiteConfig>, router: &Arc<Router>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKER_THREADS)
        .build()
        .context("failed to create request thread pool")?;

    for request in server.incoming_requests() {
        let config = Arc::clone(config);
        let router = Arc::clone(router);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &config, &router) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

/// Handle a single HTTP request
fn handle_request(request: Request, config: &SiteConfig, router: &Router) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    if !response::is_read_request(&request) {
        logger::status_failed(&format!("405 {} {}", request.method(), request.url()), "");
        return response::respond_method_not_allowed(request);
    }

    let url = request.url().to_string();
    match dispatch(&url, router, &config.build) {
        Dispatch::File(path) => {
            debug!("serve"; "200 {}", url);
            response::respond_file(request, &path)
        }
        Dispatch::Shell { path, route, view } => {
            logger::status_served(&format!("200 {url} -> {route} ({view})"));
            response::respond_shell(request, &path, &route)
        }
        Dispatch::Redirect(location) => {
            logger::status_redirected(&format!("302 {url} -> {location}"));
            response::respond_redirect(request, &location)
        }
        Dispatch::MissingShell(shell) => {
            let message = format!("{} not found, run the bundler first", shell.display());
            logger::status_failed(&format!("404 {url}"), &message);
            response::respond_not_found(request, &message)
        }
        Dispatch::OutsideBase => {
            let message = format!("404 Not Found: app is served under {}", router.base());
            logger::status_failed(&format!("404 {url}"), "outside base path");
            response::respond_not_found(request, &message)
        }
    }
}
