//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `RequestStatus` for the single-line request display of `biblia serve`
//!
//! # Example
//!
//! ```ignore
//! log!("serve"; "http://{}", addr);
//! debug!("config"; "no {} found, using defaults", name);
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use parking_lot::Mutex;
use std::{
    io::{Write, stdout},
    sync::LazyLock,
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let status = REQUEST_STATUS.lock();
    status.write_log(&mut stdout().lock(), &format!("{prefix} {message}"));
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    match module_lower {
        "serve" => prefix.bright_blue().bold().to_string(),
        "route" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

// ============================================================================
// Request Status (single-line status with overwrite)
// ============================================================================

/// Get current time formatted as HH:MM:SS (UTC)
fn now() -> String {
    use std::time::SystemTime;
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Single-line status display for the development server
///
/// Each handled request overwrites the previous line, so the terminal
/// only shows the most recent navigation.
///
/// # Example
///
/// ```ignore
/// status_served("200 /book/genesis -> chapters");
/// status_redirected("302 /nowhere -> /");
/// status_failed("404 /other", "outside base path");
/// ```
pub struct RequestStatus {
    /// Lines of previous output to clear
    last_lines: usize,
    /// Last rendered status, redrawn below interleaved log lines
    last_output: String,
}

static REQUEST_STATUS: LazyLock<Mutex<RequestStatus>> =
    LazyLock::new(|| Mutex::new(RequestStatus::new()));

impl RequestStatus {
    pub const fn new() -> Self {
        Self {
            last_lines: 0,
            last_output: String::new(),
        }
    }

    /// Display success message (✓ prefix, green).
    pub fn served(&mut self, message: &str) {
        self.display(format!("{}", "✓".green()), message);
    }

    /// Display redirect message (↪ prefix, cyan).
    pub fn redirected(&mut self, message: &str) {
        self.display(format!("{}", "↪".cyan()), message);
    }

    /// Display error message (✗ prefix, red) with optional detail.
    pub fn failed(&mut self, summary: &str, detail: &str) {
        let message = if detail.is_empty() {
            summary.to_string()
        } else {
            format!("{summary}\n{detail}")
        };
        self.display(format!("{}", "✗".red()), &message);
    }

    fn display(&mut self, symbol: String, message: &str) {
        self.write_status(&mut stdout().lock(), &symbol, message);
    }

    fn write_status(&mut self, out: &mut impl Write, symbol: &str, message: &str) {
        self.clear(out);

        let timestamp = format!("[{}]", now()).dimmed().to_string();
        let output = format!("{timestamp} {symbol} {message}");
        writeln!(out, "{output}").ok();
        out.flush().ok();

        self.last_lines = message.matches('\n').count() + 1;
        self.last_output = output;
    }

    /// Print a log line above the status, then redraw the status.
    fn write_log(&self, out: &mut impl Write, line: &str) {
        if self.last_lines > 0 {
            self.clear(out);
        } else {
            execute!(out, Clear(ClearType::UntilNewLine)).ok();
        }

        writeln!(out, "{line}").ok();
        if self.last_lines > 0 {
            writeln!(out, "{}", self.last_output).ok();
        }
        out.flush().ok();
    }

    /// Erase the previously drawn status.
    fn clear(&self, out: &mut impl Write) {
        if self.last_lines > 0 {
            #[allow(clippy::cast_possible_truncation)]
            let lines = self.last_lines as u16;
            execute!(out, cursor::MoveUp(lines)).ok();
            execute!(out, Clear(ClearType::FromCursorDown)).ok();
        }
    }
}

/// Global request status: served
pub fn status_served(message: &str) {
    REQUEST_STATUS.lock().served(message);
}

/// Global request status: redirected
pub fn status_redirected(message: &str) {
    REQUEST_STATUS.lock().redirected(message);
}

/// Global request status: failed
pub fn status_failed(summary: &str, detail: &str) {
    REQUEST_STATUS.lock().failed(summary, detail);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_format() {
        let time = now();
        assert_eq!(time.len(), 8);
        assert_eq!(time.as_bytes()[2], b':');
        assert_eq!(time.as_bytes()[5], b':');
    }

    #[test]
    fn test_log_line_keeps_status_visible() {
        let mut status = RequestStatus::new();
        status.write_status(&mut Vec::new(), "✓", "200 /book/ruth -> chapters");

        let mut buf = Vec::new();
        status.write_log(&mut buf, "[serve] rebuilt");
        let text = String::from_utf8(buf).unwrap();

        let log_at = text.find("[serve] rebuilt").unwrap();
        let status_at = text.find("200 /book/ruth -> chapters").unwrap();
        assert!(log_at < status_at);
        assert_eq!(status.last_lines, 1);
    }

    #[test]
    fn test_log_line_without_status() {
        let status = RequestStatus::new();
        let mut buf = Vec::new();
        status.write_log(&mut buf, "[route] ready");
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("[route] ready\n"));
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        assert!(colorize_prefix("serve", "serve").contains("[serve]"));
        assert!(colorize_prefix("Route", "route").contains("[Route]"));
    }
}
