//! `biblia routes` - print the route table in match order.

use crate::router::{RouteTable, Target};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn list_routes(table: &RouteTable) -> Result<()> {
    let mut out = io::stdout().lock();
    write_routes(&mut out, table)?;
    out.flush()?;
    Ok(())
}

fn write_routes(out: &mut impl Write, table: &RouteTable) -> io::Result<()> {
    let width = table
        .routes()
        .iter()
        .map(|r| r.pattern().as_str().len())
        .max()
        .unwrap_or(0);
    let name_width = table
        .routes()
        .iter()
        .map(|r| r.name().len())
        .max()
        .unwrap_or(0);

    for (i, route) in table.routes().iter().enumerate() {
        let target = match route.target() {
            Target::View(view) => format!("view {view}"),
            Target::Redirect(to) => format!("redirect {to}"),
        };
        writeln!(
            out,
            "{:>2}  {:<width$}  {:<name_width$}  {}",
            (i + 1).dimmed(),
            route.pattern().as_str(),
            route.name(),
            target,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_routes_in_order() {
        let table = RouteTable::standard().unwrap();
        let mut buf = Vec::new();
        write_routes(&mut buf, &table).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("home") && lines[0].contains("view home"));
        assert!(lines[2].contains("/book/:book ") && lines[2].contains("view chapters"));
        assert!(lines[3].contains("/book/:book/chapter/:chapter"));
        assert!(lines[4].contains("/*path") && lines[4].contains("redirect /"));
    }
}
