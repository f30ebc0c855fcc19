//! CLI flag definitions and usage display.

mod args;
pub mod help;

pub use args::{Flag, FlagTable, command};
