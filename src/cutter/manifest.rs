//! Concat manifest writing.
//!
//! The manifest is the plain text list read by ffmpeg's concat demuxer:
//! one `file '<path>'` line per segment, in production order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::Error;

/// Write (or truncate and rewrite) the manifest at `path`.
///
/// Entries are written as absolute paths since the concat demuxer resolves
/// relative entries against the manifest's own directory.
///
/// # Errors
///
/// Returns [`Error::ManifestWrite`] if the file cannot be created or
/// written.
pub fn write_manifest(path: &Path, segments: &[PathBuf]) -> Result<(), Error> {
    let write_err = |source: std::io::Error| Error::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    for segment in segments {
        let absolute = std::path::absolute(segment).map_err(write_err)?;
        writeln!(writer, "{}", manifest_line(&absolute)).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)
}

/// Format one manifest entry.
///
/// Single quotes cannot appear inside a quoted entry, so each one closes
/// the quote, adds an escaped quote and reopens: `it's` becomes
/// `'it'\''s'`.
#[must_use]
pub fn manifest_line(segment: &Path) -> String {
    let quoted = segment.to_string_lossy().replace('\'', r"'\''");
    format!("file '{quoted}'")
}
