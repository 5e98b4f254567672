//! `biblia base` - report the deploy target picked from the environment.

use crate::deploy::{AMPLIFY_FLAG, Deployment, VERCEL_BUILDER_FLAG, VERCEL_FLAG};
use anyhow::Result;
use std::io::{self, Write};

pub fn print_base(deployment: &Deployment, quiet: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    write_base(&mut out, deployment, quiet)?;
    out.flush()?;
    Ok(())
}

fn write_base(out: &mut impl Write, deployment: &Deployment, quiet: bool) -> io::Result<()> {
    if quiet {
        return writeln!(out, "{}", deployment.base);
    }
    writeln!(out, "target: {}", deployment.target)?;
    writeln!(out, "base:   {}", deployment.base)?;
    writeln!(
        out,
        "checked: {AMPLIFY_FLAG}=true, {VERCEL_FLAG}=true, {VERCEL_BUILDER_FLAG}=1"
    )
}
