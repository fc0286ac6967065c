//! Configuration management for lastfm-sync.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. They are read exactly once at startup into [`Settings`], which is
//! then passed explicitly to everything that needs it.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use crate::{error::SyncError, lastfm};

pub const ENV_API_KEY: &str = "LAST_FM_API_KEY";
pub const ENV_USER: &str = "LAST_FM_USER";
pub const ENV_API_URL: &str = "LAST_FM_API_URL";
pub const ENV_CONFIG_PATH: &str = "SITE_CONFIG_PATH";

/// Site config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "../../_config.yml";

/// Loads `.env` files into the process environment.
///
/// Looks for `lastfm-sync/.env` in the platform-specific local data
/// directory, creating the directory if needed, then for `.env` in the
/// working directory. Variables that are already set are never overwritten.
///
/// - Linux: `~/.local/share/lastfm-sync/.env`
/// - macOS: `~/Library/Application Support/lastfm-sync/.env`
/// - Windows: `%LOCALAPPDATA%/lastfm-sync/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed. A missing file is not an error.
pub fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }

    load_env_file(&path)?;
    skip_missing(dotenv::dotenv().map(|_| ()))
}

/// Loads a single `.env` file.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be read or holds a
/// line that does not parse. A missing file is not an error.
pub fn load_env_file(path: &Path) -> Result<(), String> {
    skip_missing(dotenv::from_path(path))
}

fn skip_missing(result: dotenv::Result<()>) -> Result<(), String> {
    match result {
        Ok(()) => Ok(()),
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.to_string()),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lastfm-sync/.env");
    path
}

/// Everything a sync run needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub username: String,
    pub api_url: String,
    pub config_path: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self, SyncError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key-value source.
    ///
    /// # Errors
    ///
    /// `MissingCredential` if `LAST_FM_API_KEY` or `LAST_FM_USER` is absent
    /// or empty. The API key is checked first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SyncError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| SyncError::MissingCredential(key.to_string()))
        };

        let api_key = required(ENV_API_KEY)?;
        let username = required(ENV_USER)?;

        let api_url = lookup(ENV_API_URL)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| lastfm::API_BASE_URI.to_string());
        let config_path = lookup(ENV_CONFIG_PATH)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        Ok(Self {
            api_key,
            username,
            api_url,
            config_path,
        })
    }
}
