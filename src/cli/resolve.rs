//! `biblia resolve` - run navigation paths through the route table.

use super::ResolveArgs;
use crate::router::{Resolution, Router};
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};

/// One resolved input path.
#[derive(Debug, Serialize)]
struct Entry {
    path: String,
    #[serde(flatten)]
    resolution: Option<Resolution>,
    /// Set when `--with-base` is used and the URL lies outside the base.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    outside_base: bool,
}

pub fn run_resolve(args: &ResolveArgs, router: &Router) -> Result<()> {
    let paths = collect_paths(&args.paths, io::stdin().lock())?;
    let entries: Vec<Entry> = paths
        .into_iter()
        .map(|path| resolve_one(router, path, args.with_base))
        .collect();

    let mut out = io::stdout().lock();
    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        writeln!(out, "{json}")?;
    } else {
        write_table(&mut out, &entries)?;
    }
    out.flush()?;
    Ok(())
}

/// Expand `-` into lines read from `stdin`.
fn collect_paths(args: &[String], stdin: impl BufRead) -> Result<Vec<String>> {
    if !args.iter().any(|p| p == "-") {
        return Ok(args.to_vec());
    }

    let mut from_stdin = Vec::new();
    for line in stdin.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            from_stdin.push(line.to_string());
        }
    }

    let mut paths = Vec::with_capacity(args.len() + from_stdin.len());
    for arg in args {
        if arg == "-" {
            paths.append(&mut from_stdin);
        } else {
            paths.push(arg.clone());
        }
    }
    Ok(paths)
}

fn resolve_one(router: &Router, path: String, with_base: bool) -> Entry {
    let resolution = if with_base {
        router.resolve_url(&path)
    } else {
        Some(router.table().resolve(&path))
    };
    Entry {
        outside_base: resolution.is_none(),
        resolution,
        path,
    }
}

fn write_table(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);

    for entry in entries {
        let Some(res) = &entry.resolution else {
            writeln!(out, "{:<width$}  {}", entry.path, "outside base path".red())?;
            continue;
        };

        let params = if res.params.is_empty() {
            "-".to_string()
        } else {
            res.params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join(" ")
        };
        let redirect = if res.redirected_from.is_some() {
            format!(" {}", "(redirected)".yellow())
        } else {
            String::new()
        };
        writeln!(
            out,
            "{:<width$}  {} {}{}",
            entry.path,
            res.view.green(),
            params,
            redirect
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::{RouteTable, View};

    fn router(base: &str) -> Router {
        Router::new(RouteTable::standard().unwrap(), base)
    }

    #[test]
    fn test_collect_paths_without_stdin() {
        let args = vec!["/".to_string(), "/books-index".to_string()];
        let paths = collect_paths(&args, io::empty()).unwrap();
        assert_eq!(paths, args);
    }

    #[test]
    fn test_collect_paths_reads_dash_from_stdin() {
        let args = vec!["/".to_string(), "-".to_string(), "/x".to_string()];
        let stdin = io::Cursor::new("/book/ruth\n\n  /books-index  \n");
        let paths = collect_paths(&args, stdin).unwrap();
        assert_eq!(paths, vec!["/", "/book/ruth", "/books-index", "/x"]);
    }

    #[test]
    fn test_resolve_one_app_path() {
        let entry = resolve_one(&router("/projeto_biblia/"), "/book/ruth".into(), false);
        let res = entry.resolution.unwrap();
        assert_eq!(res.view, View::Chapters);
        assert!(!entry.outside_base);
    }

    #[test]
    fn test_resolve_one_with_base() {
        let router = router("/projeto_biblia/");
        let entry = resolve_one(&router, "/projeto_biblia/book/ruth/chapter/1".into(), true);
        assert_eq!(entry.resolution.unwrap().view, View::Reader);

        let entry = resolve_one(&router, "/book/ruth".into(), true);
        assert!(entry.outside_base);
        assert!(entry.resolution.is_none());
    }

    #[test]
    fn test_json_entry_shape() {
        let entry = resolve_one(&router("/"), "/lost".into(), false);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["path"], "/lost");
        assert_eq!(json["view"], "home");
        assert_eq!(json["redirected_from"], "/lost");
        assert!(json.get("outside_base").is_none());
    }

    #[test]
    fn test_write_table() {
        let router = router("/");
        let entries = vec![
            resolve_one(&router, "/book/ruth/chapter/2".into(), false),
            resolve_one(&router, "/nope".into(), false),
        ];
        let mut buf = Vec::new();
        write_table(&mut buf, &entries).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("reader") && lines[0].contains("book=ruth chapter=2"));
        assert!(lines[1].contains("home") && lines[1].contains("redirected"));
        assert!(lines[1].contains(" - "));
    }
}
