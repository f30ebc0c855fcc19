//! Output and segment path derivation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::Error;
use crate::constants::{OUTPUT_SUFFIX, SEGMENT_MARKER};

/// Final output path: same directory and extension, stem suffixed with
/// `-cut`.
///
/// # Errors
///
/// Returns [`Error::InvalidInputPath`] if the input has no file stem.
pub fn output_path(input: &Path) -> Result<PathBuf, Error> {
    with_stem_suffix(input, OUTPUT_SUFFIX)
}

/// Interim path of the `index`-th segment, next to the input.
///
/// # Errors
///
/// Returns [`Error::InvalidInputPath`] if the input has no file stem.
pub fn segment_path(input: &Path, index: usize) -> Result<PathBuf, Error> {
    with_stem_suffix(input, &format!("{SEGMENT_MARKER}{index}"))
}

fn with_stem_suffix(input: &Path, suffix: &str) -> Result<PathBuf, Error> {
    let stem = input.file_stem().ok_or_else(|| Error::InvalidInputPath {
        path: input.to_path_buf(),
    })?;

    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }

    Ok(input.with_file_name(name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_extension() {
        assert_eq!(
            output_path(Path::new("clip.mp4")).unwrap(),
            PathBuf::from("clip-cut.mp4")
        );
    }

    #[test]
    fn test_output_path_keeps_directory() {
        assert_eq!(
            output_path(Path::new("/videos/holiday.mkv")).unwrap(),
            PathBuf::from("/videos/holiday-cut.mkv")
        );
    }

    #[test]
    fn test_output_path_without_extension() {
        assert_eq!(
            output_path(Path::new("recording")).unwrap(),
            PathBuf::from("recording-cut")
        );
    }

    #[test]
    fn test_output_path_only_last_extension_moves() {
        assert_eq!(
            output_path(Path::new("show.part1.ts")).unwrap(),
            PathBuf::from("show.part1-cut.ts")
        );
    }

    #[test]
    fn test_segment_path_uses_marker_and_index() {
        assert_eq!(
            segment_path(Path::new("/videos/clip.mp4"), 0).unwrap(),
            PathBuf::from("/videos/clip-ffcut-0.mp4")
        );
        assert_eq!(
            segment_path(Path::new("clip.mp4"), 12).unwrap(),
            PathBuf::from("clip-ffcut-12.mp4")
        );
    }

    #[test]
    fn test_root_has_no_stem() {
        assert!(matches!(
            output_path(Path::new("/")),
            Err(Error::InvalidInputPath { .. })
        ));
    }
}
