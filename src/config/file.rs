//! Configuration file loading.

use crate::config::Config;
use crate::constants::env;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.
///
/// Returns default config if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load, override and validate the configuration for this run.
///
/// The file is `FFCUT_CONFIG` if set, else the platform default path.
/// `FFCUT_FFMPEG` then overrides the configured tool path.
pub fn load_config(var: impl Fn(&str) -> Option<OsString>) -> Result<Config> {
    let path = var(env::CONFIG)
        .map(PathBuf::from)
        .or_else(super::config_file_path);

    let mut config = match path {
        Some(path) => load_config_file(&path)?,
        None => Config::default(),
    };

    apply_env_overrides(&mut config, &var);
    super::validate_config(&config)?;
    Ok(config)
}

/// Load the configuration using the process environment.
pub fn load_default_config() -> Result<Config> {
    load_config(|key| std::env::var_os(key))
}

/// Apply environment variable overrides to `config`.
pub fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<OsString>) {
    if let Some(ffmpeg) = var(env::FFMPEG).filter(|v| !v.is_empty()) {
        config.tool.ffmpeg = Some(PathBuf::from(ffmpeg));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_nonexistent_file_returns_default() {
        let path = Path::new("/nonexistent/path/config.toml");
        let config = load_config_file(path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[tool]
ffmpeg = "/opt/ffmpeg/bin/ffmpeg"

[defaults]
verbose = true
"#
        )
        .unwrap();

        let config = load_config_file(file.path()).unwrap();
        assert_eq!(
            config.tool.ffmpeg,
            Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
        );
        assert!(config.defaults.verbose);
        assert!(!config.defaults.force);
    }

    #[test]
    fn test_load_invalid_toml_returns_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid toml {{{{").unwrap();

        let config = load_config_file(file.path());
        assert!(matches!(config, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_env_override_replaces_configured_tool() {
        let mut config = Config::default();
        config.tool.ffmpeg = Some(PathBuf::from("/from/config"));

        apply_env_overrides(&mut config, |key| {
            (key == env::FFMPEG).then(|| OsString::from("/from/env"))
        });

        assert_eq!(config.tool.ffmpeg, Some(PathBuf::from("/from/env")));
    }

    #[test]
    fn test_empty_env_override_is_ignored() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, |_| Some(OsString::new()));
        assert!(config.tool.ffmpeg.is_none());
    }

    #[test]
    fn test_load_config_reads_file_named_by_env() {
        let tool = NamedTempFile::new().unwrap();
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tool]\nffmpeg = \"{}\"\n[defaults]\nforce = true",
            tool.path().display()
        )
        .unwrap();

        let config_path = file.path().as_os_str().to_os_string();
        let config = load_config(|key| (key == env::CONFIG).then(|| config_path.clone())).unwrap();

        assert!(config.defaults.force);
        assert_eq!(config.tool.ffmpeg.as_deref(), Some(tool.path()));
    }

    #[test]
    fn test_load_config_rejects_missing_tool() {
        let result = load_config(|key| {
            (key == env::FFMPEG).then(|| OsString::from("/nonexistent/ffmpeg_12345"))
        });
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }
}
