//! Settings persistence collaborators

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use trick_platform::{NormalizedPath, settings as document};

use crate::error::Result;
use crate::types::ToolInstallation;

/// Durable storage for the configured installation list.
///
/// The host owns format and location; the registry only issues full-list
/// load and save calls, never partial edits.
pub trait SettingsStore: Send + Sync {
    /// Read the persisted list. `None` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<ToolInstallation>>>;

    /// Persist the full list, replacing any prior contents.
    fn save(&self, installations: &[ToolInstallation]) -> Result<()>;
}

/// On-disk document shape for [`FileSettings`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    installations: Vec<ToolInstallation>,
}

/// File-backed settings store.
///
/// The on-disk format (TOML, JSON, or YAML) follows the file extension.
/// Writes are atomic, so a crashed save never leaves a torn list behind.
#[derive(Debug)]
pub struct FileSettings {
    path: NormalizedPath,
}

impl FileSettings {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's configuration directory
    /// (`<config dir>/trick-manager/installations.toml`), if the platform
    /// reports one.
    pub fn user_default() -> Option<Self> {
        let base = dirs::config_dir()?;
        let path = NormalizedPath::new(base.join("trick-manager").join("installations.toml"));
        Some(Self { path })
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl SettingsStore for FileSettings {
    fn load(&self) -> Result<Option<Vec<ToolInstallation>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file: SettingsFile = document::load(&self.path)?;
        Ok(Some(file.installations))
    }

    fn save(&self, installations: &[ToolInstallation]) -> Result<()> {
        tracing::debug!(path = %self.path, count = installations.len(), "Saving installations");
        let file = SettingsFile {
            installations: installations.to_vec(),
        };
        document::save(&self.path, &file)?;
        Ok(())
    }
}

/// In-memory settings store for tests and embedding.
///
/// Counts saves so tests can assert on persistence behavior.
#[derive(Debug, Default)]
pub struct MemorySettings {
    saved: Mutex<Option<Vec<ToolInstallation>>>,
    save_count: AtomicUsize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out with a persisted list already present.
    pub fn with_installations(installations: Vec<ToolInstallation>) -> Self {
        Self {
            saved: Mutex::new(Some(installations)),
            save_count: AtomicUsize::new(0),
        }
    }

    /// Number of save calls made against this store.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self) -> Result<Option<Vec<ToolInstallation>>> {
        Ok(self.saved.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, installations: &[ToolInstallation]) -> Result<()> {
        *self.saved.lock().unwrap_or_else(|e| e.into_inner()) = Some(installations.to_vec());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
