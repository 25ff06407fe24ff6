//! Terminal output formatting
//!
//! ANSI painting of feedback rows and the end-of-game report.

pub mod render;
pub mod report;

pub use render::{Palette, render_history, render_row};
pub use report::{format_outcome, print_outcome};
