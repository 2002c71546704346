//! Terminal output formatting
//!
//! Console screens for the interactive game and pretty-printing for commands.

pub mod display;
pub mod formatters;

pub use display::print_score_result;
