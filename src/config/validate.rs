//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_tool(config)?;
    Ok(())
}

/// An explicitly configured tool must exist.
fn validate_tool(config: &Config) -> Result<()> {
    if let Some(ffmpeg) = &config.tool.ffmpeg
        && !ffmpeg.exists()
    {
        return Err(Error::ConfigValidation {
            message: format!("ffmpeg not found at '{}'", ffmpeg.display()),
        });
    }

    Ok(())
}
