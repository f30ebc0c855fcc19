//! Segment extraction and reassembly.
//!
//! This module realizes a cut plan as one output file: each range is
//! stream-copied into an interim segment by an external [`MediaTool`], and
//! the segments are then joined in plan order.

mod manifest;
mod naming;
mod orchestrator;
mod tool;

pub use manifest::{manifest_line, write_manifest};
pub use naming::{output_path, segment_path};
pub use orchestrator::{CutOutcome, Cutter, default_manifest_path};
pub use tool::{Ffmpeg, MediaTool, locate_ffmpeg, render_command};
