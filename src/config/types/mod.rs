//! Configuration utility types.
//!
//! | Module  | Purpose                           |
//! |---------|-----------------------------------|
//! | `error` | Configuration errors, diagnostics |
//! | `field` | Dotted field paths                |

mod error;
mod field;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
