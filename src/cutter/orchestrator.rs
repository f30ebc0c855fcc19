//! Cut-and-stitch orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::Error;
use crate::constants::MANIFEST_FILE_NAME;
use crate::plan::TimeRange;

use super::manifest::write_manifest;
use super::naming::{output_path, segment_path};
use super::tool::MediaTool;

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutOutcome {
    /// Path of the assembled output file.
    pub output: PathBuf,
    /// Number of segments extracted.
    pub segments: usize,
}

/// Turns a list of ranges into a single output file using a [`MediaTool`].
///
/// Every step runs to completion before the next one starts. Segment and
/// manifest names are deterministic, so two runs over the same input at
/// the same time will trample each other.
pub struct Cutter<'a> {
    tool: &'a dyn MediaTool,
    manifest_path: PathBuf,
    force: bool,
}

impl<'a> Cutter<'a> {
    /// Create a cutter that writes its manifest to the system temporary
    /// directory.
    #[must_use]
    pub fn new(tool: &'a dyn MediaTool) -> Self {
        Self {
            tool,
            manifest_path: default_manifest_path(),
            force: false,
        }
    }

    /// Replace an existing output file instead of failing.
    #[must_use]
    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Write the concat manifest to `path` instead of the default location.
    #[must_use]
    pub fn manifest_path(mut self, path: PathBuf) -> Self {
        self.manifest_path = path;
        self
    }

    /// Extract each range of `input` in order and assemble them into
    /// `<stem>-cut.<ext>` next to the input.
    ///
    /// A single range is moved into place directly. Several ranges are
    /// joined through a manifest, after which the segments and the manifest
    /// are removed.
    ///
    /// If a tool step fails, the run stops there and segments produced so
    /// far stay on disk.
    ///
    /// # Errors
    ///
    /// - [`Error::UsageRequested`] if `ranges` is empty
    /// - [`Error::OutputExists`] if the output exists and force is off;
    ///   nothing has been run at that point
    /// - tool errors from [`MediaTool`]
    /// - filesystem errors while preparing or assembling the output
    pub fn run(&self, input: &Path, ranges: &[TimeRange]) -> Result<CutOutcome, Error> {
        if ranges.is_empty() {
            return Err(Error::UsageRequested);
        }

        let output = output_path(input)?;
        self.prepare_output(&output)?;

        let mut segments: Vec<PathBuf> = Vec::with_capacity(ranges.len());
        for (index, range) in ranges.iter().enumerate() {
            let segment = segment_path(input, index)?;

            if range.is_reversed() {
                warn!("Interval {range} starts after it ends");
            }

            if let Err(e) = self.tool.extract(input, range, &segment) {
                report_leftovers(&segments);
                return Err(e);
            }
            segments.push(segment);
        }

        if let [single] = segments.as_slice() {
            fs::rename(single, &output).map_err(|source| Error::SegmentRename {
                from: single.clone(),
                to: output.clone(),
                source,
            })?;
        } else {
            self.concat(&segments, &output)?;
        }

        info!("Wrote {}", output.display());

        Ok(CutOutcome {
            output,
            segments: segments.len(),
        })
    }

    /// Fail if the output exists, or remove it first when forced.
    fn prepare_output(&self, output: &Path) -> Result<(), Error> {
        if !output.exists() {
            return Ok(());
        }

        if !self.force {
            return Err(Error::OutputExists {
                path: output.to_path_buf(),
            });
        }

        info!("Removing existing output {}", output.display());
        fs::remove_file(output).map_err(|source| Error::OutputRemove {
            path: output.to_path_buf(),
            source,
        })
    }

    fn concat(&self, segments: &[PathBuf], output: &Path) -> Result<(), Error> {
        if let Err(e) = write_manifest(&self.manifest_path, segments)
            .and_then(|()| self.tool.concat(&self.manifest_path, output))
        {
            report_leftovers(segments);
            return Err(e);
        }

        for path in segments.iter().chain(std::iter::once(&self.manifest_path)) {
            if let Err(e) = fs::remove_file(path) {
                warn!("Failed to remove {}: {e}", path.display());
            }
        }

        Ok(())
    }
}

/// Default manifest location in the system temporary directory.
#[must_use]
pub fn default_manifest_path() -> PathBuf {
    std::env::temp_dir().join(MANIFEST_FILE_NAME)
}

fn report_leftovers(segments: &[PathBuf]) {
    for segment in segments {
        warn!("Leaving segment {}", segment.display());
    }
}
