//! External media tool.
//!
//! [`MediaTool`] is the seam between the cut algorithm and whatever does the
//! actual stream copying. [`Ffmpeg`] drives the ffmpeg command line tool.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::Error;
use crate::constants::ffmpeg;
use crate::plan::TimeRange;

/// Stream-copy operations needed to cut and stitch a media file.
///
/// Implementations block until the work is done.
pub trait MediaTool {
    /// Copy `range` of `input` into `segment` without re-encoding.
    ///
    /// The copy must stop at the shortest stream, drop chapter metadata and
    /// shift negative timestamps introduced by trimming.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolFailed`] or [`Error::ToolSpawn`] if the copy
    /// did not complete.
    fn extract(&self, input: &Path, range: &TimeRange, segment: &Path) -> Result<(), Error>;

    /// Join the segments listed in `manifest` into `output` without
    /// re-encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ToolFailed`] or [`Error::ToolSpawn`] if the join
    /// did not complete.
    fn concat(&self, manifest: &Path, output: &Path) -> Result<(), Error>;
}

/// The ffmpeg command line tool.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    /// Use the ffmpeg binary at `program`.
    #[must_use]
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Path of the binary.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Build the extraction command for one range.
    #[must_use]
    pub fn extract_command(&self, input: &Path, range: &TimeRange, segment: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        if let Some(from) = &range.from {
            cmd.args([ffmpeg::START, from.as_str()]);
        }
        if let Some(to) = &range.to {
            cmd.args([ffmpeg::END, to.as_str()]);
        }
        cmd.arg(ffmpeg::INPUT)
            .arg(input)
            .args(ffmpeg::EXTRACT_ARGS)
            .arg(segment);
        cmd
    }

    /// Build the concatenation command.
    #[must_use]
    pub fn concat_command(&self, manifest: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(ffmpeg::CONCAT_ARGS)
            .arg(ffmpeg::INPUT)
            .arg(manifest)
            .args(ffmpeg::COPY_ARGS)
            .arg(output);
        cmd
    }

    fn execute(&self, mut cmd: Command) -> Result<(), Error> {
        info!("{}", render_command(&cmd));

        let status = cmd.status().map_err(|source| Error::ToolSpawn {
            tool: self.program.clone(),
            source,
        })?;
        debug!("{} finished with {status}", self.program.display());

        if status.success() {
            Ok(())
        } else {
            Err(Error::ToolFailed {
                tool: self
                    .program
                    .file_name()
                    .map_or_else(|| ffmpeg::BINARY.to_string(), |n| n.to_string_lossy().into_owned()),
                status: status.code(),
            })
        }
    }
}

impl MediaTool for Ffmpeg {
    fn extract(&self, input: &Path, range: &TimeRange, segment: &Path) -> Result<(), Error> {
        self.execute(self.extract_command(input, range, segment))
    }

    fn concat(&self, manifest: &Path, output: &Path) -> Result<(), Error> {
        self.execute(self.concat_command(manifest, output))
    }
}

/// Render a command the way an operator would type it, double-quoting
/// arguments that contain whitespace or quotes.
#[must_use]
pub fn render_command(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &OsStr) -> String {
    let text = arg.to_string_lossy();
    if text.is_empty() || text.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        format!("\"{}\"", text.replace('"', "\\\""))
    } else {
        text.into_owned()
    }
}

/// Resolve the ffmpeg binary.
///
/// Resolution order:
/// 1. `configured`, from `FFCUT_FFMPEG` or the config file
/// 2. an `ffmpeg` next to the running executable
/// 3. `ffmpeg` on `PATH`
/// 4. the bare name, left for the OS to resolve at spawn time
#[must_use]
pub fn locate_ffmpeg(configured: Option<&Path>) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }

    if let Some(bundled) = bundled_ffmpeg()
        && bundled.is_file()
    {
        return bundled;
    }

    which::which(ffmpeg::BINARY).unwrap_or_else(|_| PathBuf::from(ffmpeg::BINARY))
}

fn bundled_ffmpeg() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let name = format!("{}{}", ffmpeg::BINARY, std::env::consts::EXE_SUFFIX);
    Some(exe.parent()?.join(name))
}
