//! Host-provided persistence for plugin settings.

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use kana_core::settings::{PluginSettings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("stored settings are not valid JSON: {0}")]
    Corrupt(String),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Opaque key-value storage for the settings record.
///
/// `load` returns whatever was saved last (or `None` when nothing was),
/// without merging defaults; merging is [`PluginSettings::from_persisted`]'s
/// job. Callers await load and save in sequence, never concurrently.
pub trait SettingsStore {
    fn load(&self) -> impl Future<Output = Result<Option<serde_json::Value>, StoreError>> + Send;
    fn save(&self, settings: &PluginSettings)
        -> impl Future<Output = Result<(), StoreError>> + Send;
}

fn parse_stored(text: &str) -> Result<Option<serde_json::Value>, StoreError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|e| StoreError::Corrupt(e.to_string()))
}

/// Settings persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SettingsStore for JsonFileStore {
    /// Missing file → `None`.
    async fn load(&self) -> Result<Option<serde_json::Value>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => parse_stored(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file yet");
                Ok(None)
            }
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Atomic write: write to .tmp then rename.
    async fn save(&self, settings: &PluginSettings) -> Result<(), StoreError> {
        let json = settings.to_json_pretty()?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}

/// In-process store holding the serialized JSON text.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: Mutex<Option<String>>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously persisted JSON text.
    pub fn with_json(json: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(json.into())),
            saves: Mutex::new(0),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SettingsStore for MemoryStore {
    async fn load(&self) -> Result<Option<serde_json::Value>, StoreError> {
        match self.contents() {
            Some(text) => parse_stored(&text),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &PluginSettings) -> Result<(), StoreError> {
        let json = settings.to_json_pretty()?;
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(json);
        *self.saves.lock().unwrap_or_else(|e| e.into_inner()) += 1;
        Ok(())
    }
}
