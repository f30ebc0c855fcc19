//! Cut plan construction.
//!
//! This module turns raw command line tokens into a validated [`CutPlan`]:
//! the input path, the ordered time ranges to keep and the run flags.

mod parser;
mod time;

use std::path::{Path, PathBuf};

pub use parser::parse_args;
pub use time::{TimeRange, TimeValue};

use crate::cli::Flag;

/// Everything one invocation asked for. Built once by [`parse_args`],
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutPlan {
    input: Option<PathBuf>,
    ranges: Vec<TimeRange>,
    help: bool,
    verbose: bool,
    force: bool,
}

impl CutPlan {
    /// Input media path, if one was given.
    #[must_use]
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    /// Ranges in command line order, which is also extraction and
    /// concatenation order.
    #[must_use]
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }

    /// Whether `--help` was given.
    #[must_use]
    pub fn help(&self) -> bool {
        self.help
    }

    /// Whether `--verbose` was given.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Whether `--force` was given.
    #[must_use]
    pub fn force(&self) -> bool {
        self.force
    }

    fn set(&mut self, flag: Flag) {
        match flag {
            Flag::Help => self.help = true,
            Flag::Verbose => self.verbose = true,
            Flag::Force => self.force = true,
        }
    }
}
