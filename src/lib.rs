//! ffcut - cut time ranges out of a media file and stitch them together.
//!
//! The heavy lifting is delegated to ffmpeg: each range is stream-copied
//! into an interim segment and the segments are concatenated in command
//! line order, without re-encoding.

pub mod cli;
pub mod config;
pub mod constants;
pub mod cutter;
pub mod error;
pub mod plan;

use std::ffi::OsString;

use config::load_default_config;
use cutter::{Cutter, Ffmpeg, locate_ffmpeg};
use plan::parse_args;
use tracing::info;

pub use error::{Error, Result};

/// Main entry point for the ffcut CLI.
pub fn run() -> Result<()> {
    run_from(std::env::args_os().skip(1))
}

/// Run with explicit arguments (program name excluded).
pub fn run_from<I>(args: I) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
{
    let args = args
        .into_iter()
        .map(|arg| {
            arg.into_string().map_err(|raw| Error::NonUnicodeArgument {
                lossy: raw.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    let plan = parse_args(&args)?;

    // Help, a missing or empty input or no intervals all mean "show usage".
    let Some(input) = plan.input().filter(|path| !path.as_os_str().is_empty()) else {
        return Err(Error::UsageRequested);
    };
    if plan.help() || plan.ranges().is_empty() {
        return Err(Error::UsageRequested);
    }

    let config = load_default_config()?;
    init_logging(plan.verbose() || config.defaults.verbose);

    info!("Input path: \"{}\"", input.display());

    let ffmpeg = Ffmpeg::new(locate_ffmpeg(config.tool.ffmpeg.as_deref()));
    info!("Using ffmpeg: \"{}\"", ffmpeg.program().display());

    let outcome = Cutter::new(&ffmpeg)
        .force(plan.force() || config.defaults.force)
        .run(input, plan.ranges())?;

    info!(
        "Joined {} segment(s) into {}",
        outcome.segments,
        outcome.output.display()
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::filter::Directive;
    use tracing_subscriber::{EnvFilter, fmt};

    // Progress notes and command lines are info events, shown only with -v.
    let filter_str = if verbose { "debug" } else { "warn" };

    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // -v keeps our own events visible even under a stricter RUST_LOG.
    if verbose && let Ok(directive) = format!("{}=debug", constants::APP_NAME).parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    fmt().with_env_filter(filter).with_target(false).init();
}
