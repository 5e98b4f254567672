//! `biblia href` - URL of a named route under the base path.

use crate::router::Router;
use anyhow::{Context, Result};

pub fn print_href(router: &Router, name: &str, params: &[(String, String)]) -> Result<()> {
    let params: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let href = router
        .href(name, &params)
        .with_context(|| format!("cannot build URL for route `{name}`"))?;
    println!("{href}");
    Ok(())
}
