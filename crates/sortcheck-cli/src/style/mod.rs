//! Terminal styling for CLI output.
//!
//! Only decoration goes through here. The outcome line's text is fixed by
//! the report; color is added around the headline when enabled.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod colors;
pub mod output;
pub mod table;

pub use output::*;
pub use table::*;

/// Global flag to track if colors are disabled.
static NO_COLOR: AtomicBool = AtomicBool::new(false);

/// Sets the global no-color flag.
pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

/// Checks if colors are disabled.
pub fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}
