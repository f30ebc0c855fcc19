//! Error types for ffcut.

use std::path::PathBuf;

use crate::constants::exit_code;

/// Result type alias for ffcut operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for ffcut.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Argument errors
    /// Flag-shaped token that matches no known flag.
    #[error("Unknown command line option: \"{token}\"")]
    UnknownOption {
        /// The offending token.
        token: String,
    },

    /// Interval token with the wrong number of dashes.
    #[error("Invalid time interval: \"{token}\"")]
    InvalidInterval {
        /// The offending token.
        token: String,
    },

    /// Interval whose start component is not a time value.
    #[error("Invalid start time '{value}' of interval: \"{token}\"")]
    InvalidStartTime {
        /// The rejected start component.
        value: String,
        /// The interval token it came from.
        token: String,
    },

    /// Interval whose end component is not a time value.
    #[error("Invalid end time '{value}' of interval: \"{token}\"")]
    InvalidEndTime {
        /// The rejected end component.
        value: String,
        /// The interval token it came from.
        token: String,
    },

    /// Command line argument that is not valid UTF-8.
    #[error("Invalid command line argument: \"{lossy}\"")]
    NonUnicodeArgument {
        /// Lossy rendering of the argument.
        lossy: String,
    },

    /// Input path with no file name to derive output names from.
    #[error("Invalid input path: \"{path}\"")]
    InvalidInputPath {
        /// The input path.
        path: PathBuf,
    },

    /// Help was requested, or the input path or intervals are missing.
    #[error("usage requested")]
    UsageRequested,

    // Preflight errors
    /// Output file exists and overwriting was not requested.
    #[error("Output file '{path}' already exists")]
    OutputExists {
        /// Path of the existing output file.
        path: PathBuf,
    },

    // External tool errors
    /// External tool exited with a non-zero status.
    #[error("{tool} exited with {}", describe_status(.status))]
    ToolFailed {
        /// Tool that failed.
        tool: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
    },

    /// External tool could not be started.
    #[error("failed to run '{tool}'")]
    ToolSpawn {
        /// Path of the tool binary.
        tool: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    // Environment errors
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to remove an existing output file before cutting.
    #[error("failed to remove existing output file '{path}'")]
    OutputRemove {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the concat manifest.
    #[error("failed to write manifest '{path}'")]
    ManifestWrite {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to move a single segment to the output path.
    #[error("failed to move segment '{from}' to '{to}'")]
    SegmentRename {
        /// Segment path.
        from: PathBuf,
        /// Output path.
        to: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },
}

fn describe_status(status: &Option<i32>) -> String {
    status.map_or_else(|| "a signal".to_string(), |code| format!("status {code}"))
}

impl Error {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownOption { .. }
            | Self::InvalidInterval { .. }
            | Self::InvalidStartTime { .. }
            | Self::InvalidEndTime { .. }
            | Self::NonUnicodeArgument { .. }
            | Self::InvalidInputPath { .. } => exit_code::BAD_ARGUMENTS,
            Self::UsageRequested => exit_code::USAGE,
            Self::OutputExists { .. } => exit_code::OUTPUT_EXISTS,
            Self::ToolFailed { .. } | Self::ToolSpawn { .. } => exit_code::TOOL_FAILED,
            Self::Io(_)
            | Self::OutputRemove { .. }
            | Self::ManifestWrite { .. }
            | Self::SegmentRename { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. }
            | Self::ConfigValidation { .. } => exit_code::ENVIRONMENT,
        }
    }

    /// Whether usage text should follow the diagnostic.
    #[must_use]
    pub fn shows_usage(&self) -> bool {
        matches!(
            self.exit_code(),
            exit_code::BAD_ARGUMENTS | exit_code::USAGE | exit_code::OUTPUT_EXISTS
        )
    }
}
