use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde_yaml::{Mapping, Value};

use crate::{error::SyncError, types::TopTrackResult, warning};

pub const TOP_TRACK_KEY: &str = "top_track";

/// A site `_config.yml` loaded for a read-modify-write cycle.
///
/// The document is kept as an ordered YAML tree, so keys other than
/// `top_track.{name,artist,playcount}` are written back as they were read.
pub struct SiteConfigManager {
    path: PathBuf,
    document: Mapping,
}

impl SiteConfigManager {
    /// Reads and decodes the config at `path`.
    ///
    /// # Errors
    ///
    /// `ConfigReadFailure` if the file is missing or unreadable, is not valid
    /// YAML, its root is not a mapping, or `top_track` holds a scalar or list.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let read_failure = |reason: String| SyncError::ConfigReadFailure {
            path: path.to_path_buf(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| read_failure(e.to_string()))?;
        let value: Value =
            serde_yaml::from_str(&content).map_err(|e| read_failure(e.to_string()))?;

        let document = match value {
            Value::Mapping(mapping) => mapping,
            _ => return Err(read_failure("document root is not a mapping".to_string())),
        };

        match document.get(TOP_TRACK_KEY) {
            None | Some(Value::Null) | Some(Value::Mapping(_)) => {}
            Some(_) => {
                return Err(read_failure(format!("{} is not a mapping", TOP_TRACK_KEY)));
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Sets `top_track.{name,artist,playcount}`, creating the section if it
    /// is missing or null. Other fields of the section are kept.
    pub fn set_top_track(&mut self, result: &TopTrackResult) {
        let entry = self
            .document
            .entry(Value::from(TOP_TRACK_KEY))
            .or_insert(Value::Null);

        if !entry.is_mapping() {
            warning!("No {} section found, creating one", TOP_TRACK_KEY);
            *entry = Value::Mapping(Mapping::new());
        }

        if let Value::Mapping(top_track) = entry {
            top_track.insert(Value::from("name"), Value::from(result.track_name.as_str()));
            top_track.insert(
                Value::from("artist"),
                Value::from(result.artist_name.as_str()),
            );
            top_track.insert(Value::from("playcount"), Value::from(result.playcount));
        }
    }

    /// Overwrites the file in place. A failure halfway can leave it truncated.
    ///
    /// # Errors
    ///
    /// `ConfigWriteFailure` if the document cannot be serialized or the file
    /// cannot be opened or written.
    pub fn persist(&self) -> Result<(), SyncError> {
        let write_failure = |reason: String| SyncError::ConfigWriteFailure {
            path: self.path.clone(),
            reason,
        };

        let yaml =
            serde_yaml::to_string(&self.document).map_err(|e| write_failure(e.to_string()))?;
        let mut file = File::create(&self.path).map_err(|e| write_failure(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| write_failure(e.to_string()))
    }

    pub fn document(&self) -> &Mapping {
        &self.document
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Loads the config at `path`, sets `top_track` from `result` and writes it back.
///
/// # Errors
///
/// `ConfigReadFailure` from the load step (nothing is written then), or
/// `ConfigWriteFailure` from the write step.
pub fn update_config(path: &Path, result: &TopTrackResult) -> Result<(), SyncError> {
    let mut manager = SiteConfigManager::load(path)?;
    manager.set_top_track(result);
    manager.persist()
}
