//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External tool settings.
    #[serde(default)]
    pub tool: ToolConfig,

    /// Default flag values.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// External tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Explicit path to the ffmpeg binary. Skips the lookup when set.
    pub ffmpeg: Option<PathBuf>,
}

/// Default flag values, combined with the command line flags.
///
/// A flag set here cannot be switched off from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Always run verbose.
    pub verbose: bool,

    /// Always overwrite an existing output file.
    pub force: bool,
}
