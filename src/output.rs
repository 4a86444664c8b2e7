//! Console output helpers.
//!
//! Centralizes all user-facing output so styling stays consistent: progress
//! and results go to stdout, diagnostics to stderr. Colors are handled by the
//! `colored` crate and disabled automatically when not writing to a terminal.

use colored::*;

/// Styled console output for the organizer.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an informational banner line in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red to standard error.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a hint line under an error message, to standard error.
    pub fn hint(message: &str) {
        eprintln!("{} {}", "Hint:".yellow().bold(), message);
    }
}
