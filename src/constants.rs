//! Application-wide constants.
//!
//! All fixed markers, file names and tool arguments are defined here to
//! ensure consistency and make changes easy to track.

/// Application name used for config directories and user-facing messages.
pub const APP_NAME: &str = "ffcut";

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Suffix appended to the input file stem to form the final output name.
///
/// `clip.mp4` becomes `clip-cut.mp4`.
pub const OUTPUT_SUFFIX: &str = "-cut";

/// Marker placed between the input stem and the index of an interim segment.
///
/// The second segment of `clip.mp4` is `clip-ffcut-1.mp4`.
pub const SEGMENT_MARKER: &str = "-ffcut-";

/// File name of the concat manifest inside the system temporary directory.
pub const MANIFEST_FILE_NAME: &str = "ffcut-files.txt";

/// Environment variables.
pub mod env {
    /// Overrides the path of the ffmpeg binary.
    pub const FFMPEG: &str = "FFCUT_FFMPEG";
    /// Overrides the path of the configuration file.
    pub const CONFIG: &str = "FFCUT_CONFIG";
}

/// Process exit codes.
pub mod exit_code {
    /// Malformed command line (unknown option or invalid interval).
    pub const BAD_ARGUMENTS: i32 = 1;
    /// Missing input path or intervals, or help requested.
    pub const USAGE: i32 = 2;
    /// The output file already exists and `--force` was not given.
    pub const OUTPUT_EXISTS: i32 = 3;
    /// Configuration or filesystem failure outside the external tool.
    pub const ENVIRONMENT: i32 = 4;
    /// An external tool invocation failed.
    pub const TOOL_FAILED: i32 = 255;
}

/// ffmpeg binary name and fixed argument lists.
pub mod ffmpeg {
    /// Bare binary name, resolved through `PATH` as a last resort.
    pub const BINARY: &str = "ffmpeg";

    /// Start bound option for extraction.
    pub const START: &str = "-ss";

    /// End bound option for extraction.
    pub const END: &str = "-to";

    /// Input option.
    pub const INPUT: &str = "-i";

    /// Arguments placed between the input and the segment path when
    /// extracting: stream copy, stop at the shortest stream, shift negative
    /// timestamps and drop chapters.
    pub const EXTRACT_ARGS: &[&str] = &[
        "-hide_banner",
        "-c",
        "copy",
        "-shortest",
        "-avoid_negative_ts",
        "1",
        "-map_chapters",
        "-1",
    ];

    /// Arguments placed before the manifest when concatenating.
    pub const CONCAT_ARGS: &[&str] = &["-hide_banner", "-f", "concat", "-safe", "0"];

    /// Arguments placed between the manifest and the output when concatenating.
    pub const COPY_ARGS: &[&str] = &["-c", "copy"];
}
