//! Registry storage and resolution

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use trick_platform::{Verdict, validate_executable};

use crate::access::AccessPolicy;
use crate::defaults;
use crate::error::{Error, Result};
use crate::settings::SettingsStore;
use crate::types::ToolInstallation;

/// Central registry of configured Trick installations.
///
/// Owns the ordered installation list and the persistence collaborator.
/// One registry is constructed at process start and shared by handle;
/// configuration submissions replace the list wholesale while build
/// threads read it concurrently.
pub struct ToolRegistry {
    installations: RwLock<Vec<ToolInstallation>>,
    settings: Box<dyn SettingsStore>,
}

impl ToolRegistry {
    /// Open a registry over the given settings store.
    ///
    /// Loads the persisted list and eagerly synthesizes the default
    /// installation if nothing has ever been configured, so the first
    /// build never races the first form submission.
    pub fn open(settings: Box<dyn SettingsStore>) -> Result<Self> {
        let registry = Self::load(settings)?;
        registry.default_installation()?;
        Ok(registry)
    }

    /// Open a registry without seeding a default.
    ///
    /// The default is then synthesized lazily by the first
    /// [`default_installation`](Self::default_installation) call that
    /// finds the list empty. Most hosts want [`open`](Self::open).
    pub fn load(settings: Box<dyn SettingsStore>) -> Result<Self> {
        let initial = settings.load()?.unwrap_or_default();
        tracing::debug!(count = initial.len(), "Loaded persisted installations");
        Ok(Self {
            installations: RwLock::new(initial),
            settings,
        })
    }

    /// Replace the installation list wholesale and persist it.
    ///
    /// All-or-nothing: entries absent from `new_list` are discarded, and
    /// a persistence failure leaves the previous list visible. Names must
    /// be non-empty; duplicate names are kept as submitted and resolve
    /// first-match on lookup.
    pub fn configure(&self, new_list: Vec<ToolInstallation>) -> Result<()> {
        for tool in &new_list {
            if tool.name.trim().is_empty() {
                return Err(Error::InvalidInstallation {
                    name: tool.name.clone(),
                    reason: "name must not be empty".into(),
                });
            }
        }

        let mut list = self.write_list();
        self.settings.save(&new_list)?;
        tracing::info!(count = new_list.len(), "Replaced installation list");
        *list = new_list;
        Ok(())
    }

    /// Bind a configuration-form payload and apply it via
    /// [`configure`](Self::configure).
    ///
    /// The payload's `tool` member holds the submitted installations,
    /// either as an array or as a single object; a payload without it
    /// configures the empty list.
    pub fn configure_from_form(&self, payload: &serde_json::Value) -> Result<()> {
        let new_list = match payload.get("tool") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(array @ serde_json::Value::Array(_)) => {
                serde_json::from_value(array.clone()).map_err(Error::FormBinding)?
            }
            Some(single) => {
                vec![serde_json::from_value(single.clone()).map_err(Error::FormBinding)?]
            }
        };
        self.configure(new_list)
    }

    /// Snapshot of the configured installations, in configured order.
    pub fn installations(&self) -> Vec<ToolInstallation> {
        self.read_list().clone()
    }

    /// Find an installation by exact name. First match wins.
    pub fn lookup(&self, name: &str) -> Option<ToolInstallation> {
        self.read_list().iter().find(|t| t.name == name).cloned()
    }

    /// Resolve the default installation.
    ///
    /// Prefers the entry named `trick` wherever it sits in the list, then
    /// the first entry. An empty registry synthesizes the built-in
    /// default, persists it, and returns it; the synthesis is test-and-set
    /// under the write lock, so racing callers create at most one entry.
    pub fn default_installation(&self) -> Result<ToolInstallation> {
        if let Some(tool) = Self::pick_default(&self.read_list()) {
            return Ok(tool);
        }

        let mut list = self.write_list();
        // Re-check: another caller may have seeded or configured the list
        // while we waited for the write lock.
        if let Some(tool) = Self::pick_default(&list) {
            return Ok(tool);
        }

        let tool = defaults::default_installation();
        self.settings.save(std::slice::from_ref(&tool))?;
        tracing::info!(name = %tool.name, home = %tool.home, "Synthesized default installation");
        list.push(tool.clone());
        Ok(tool)
    }

    /// Validate a candidate home path entered on the configuration form.
    ///
    /// Requires administer rights; the verdict itself is advisory and
    /// never blocks saving here.
    pub fn validate_home(&self, access: &dyn AccessPolicy, candidate: &str) -> Result<Verdict> {
        if !access.can_administer() {
            return Err(Error::PermissionDenied {
                action: "inspect installation home paths".into(),
            });
        }
        Ok(validate_executable(candidate))
    }

    fn pick_default(list: &[ToolInstallation]) -> Option<ToolInstallation> {
        list.iter()
            .find(|t| t.name == defaults::DEFAULT_NAME)
            .or_else(|| list.first())
            .cloned()
    }

    // A poisoned lock only ever holds a fully-replaced list, so recover
    // rather than propagate.
    fn read_list(&self) -> RwLockReadGuard<'_, Vec<ToolInstallation>> {
        self.installations.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_list(&self) -> RwLockWriteGuard<'_, Vec<ToolInstallation>> {
        self.installations.write().unwrap_or_else(|e| e.into_inner())
    }
}
