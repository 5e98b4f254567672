//! Command-line interface module.

mod args;
pub mod base;
pub mod href;
pub mod resolve;
pub mod routes;
pub mod serve;

pub use args::{Cli, Commands, ResolveArgs};
