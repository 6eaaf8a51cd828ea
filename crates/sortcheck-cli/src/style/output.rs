//! Output helpers for styled status messages.
//!
//! Stdout carries the outcome lines and summaries. Errors and warnings go to
//! stderr so a harness reading stdout only ever sees results.

use super::colors::SemanticStyle;

/// Prints a success message with a checkmark.
pub fn print_success(msg: &str) {
    println!("{} {}", "✓".success(), msg);
}

/// Prints an error message with an X mark.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "✗".error(), msg);
}

/// Prints a warning message with a warning symbol.
pub fn print_warn(msg: &str) {
    eprintln!("{} {}", "⚠".warning(), msg);
}

/// Prints a labeled key-value pair with proper indentation.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {}", key.muted(), value);
}

/// Prints an empty line for spacing.
pub fn print_spacer() {
    println!();
}
