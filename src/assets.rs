//! Config asset loading with an embedded fallback
//!
//! - If `CONFIG_FILE` is NOT set: use the embedded config.yaml only
//! - If `CONFIG_FILE` IS set and the file exists: read it from disk
//! - If `CONFIG_FILE` IS set but missing: fall back to the embedded copy

use rust_embed::RustEmbed;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

const CONFIG_NAME: &str = "config.yaml";

/// Where the active configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Embedded => f.write_str("embedded"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// `config_file` should be `Some` only if CONFIG_FILE was set.
    pub fn new(config_file: Option<PathBuf>) -> Self {
        Self { config_file }
    }

    /// Create a loader from the `CONFIG_FILE` environment variable
    pub fn from_env() -> Self {
        Self::new(std::env::var("CONFIG_FILE").ok().map(PathBuf::from))
    }

    /// Resolve which source `read_config_string` will use
    pub fn config_source(&self) -> ConfigSource {
        match self.config_file {
            Some(ref path) if path.exists() => ConfigSource::File(path.clone()),
            _ => ConfigSource::Embedded,
        }
    }

    /// Read the configuration as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        if let ConfigSource::File(path) = self.config_source() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return fs::read_to_string(&path);
        }

        if let Some(ref path) = self.config_file {
            tracing::warn!(path = %path.display(), "Config file not found, using embedded config");
        }

        let file = EmbeddedConfig::get(CONFIG_NAME).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml missing")
        })?;
        String::from_utf8(file.data.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Write the embedded config to `dest`, refusing to overwrite unless `force`
    ///
    /// Returns `false` when the file already existed and was left alone.
    pub fn extract_config(dest: &Path, force: bool) -> io::Result<bool> {
        if dest.exists() && !force {
            return Ok(false);
        }
        let file = EmbeddedConfig::get(CONFIG_NAME).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml missing")
        })?;
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(dest, file.data.as_ref())?;
        Ok(true)
    }
}
