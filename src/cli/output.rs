//! Output formatting and progress indicators
//!
//! This module provides the spinner, colored status lines and the error
//! display used by `main`. Global flags (`--quiet`, `--json`) are
//! applied once at startup and read from anywhere via [`is_quiet`] and
//! [`is_json`].

use std::sync::OnceLock;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

/// Output settings derived from the global CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Emit JSON instead of text where supported
    pub json: bool,
}

static OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    /// Create output settings
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Install as the process-wide output settings (first call wins)
    pub fn apply_global(self) {
        let _ = OUTPUT.set(self);
    }
}

fn current() -> OutputConfig {
    OUTPUT.get().copied().unwrap_or_default()
}

/// Whether `--quiet` was given
pub fn is_quiet() -> bool {
    current().quiet
}

/// Whether `--json` was given
pub fn is_json() -> bool {
    current().json
}

/// Create a spinner for operations with unknown duration
///
/// Hidden in quiet and JSON modes.
pub fn create_spinner(message: &str) -> ProgressBar {
    if is_quiet() || is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.blue} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Print a success line
pub fn print_success(message: &str) {
    if !is_quiet() {
        println!("{} {}", status::SUCCESS.green(), message);
    }
}

/// Print an indented detail line
pub fn print_detail(message: &str) {
    if !is_quiet() {
        println!("  {}", message.dimmed());
    }
}

/// Print an informational line
pub fn print_info(message: &str) {
    if !is_quiet() {
        println!("{} {}", status::INFO.blue(), message);
    }
}

/// Print a warning to stderr (shown even in quiet mode)
pub fn print_warning(message: &str) {
    eprintln!("{} {}", status::WARNING.yellow(), message.yellow());
}

/// Print an error and its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {}", status::ERROR.red().bold(), error.to_string().red());
    for cause in error.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
