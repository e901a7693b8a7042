//! Built-in default installation

use crate::types::ToolInstallation;

/// Name of the installation synthesized for an empty registry.
pub const DEFAULT_NAME: &str = "trick";

/// Controller-side home of the synthesized installation.
pub const DEFAULT_HOME: &str = "/usr/local/trick";

/// Label for the tool kind on host configuration surfaces.
pub const DISPLAY_NAME: &str = "Trick";

/// The installation a registry falls back to when nothing has ever been
/// configured: no properties, no global flags.
pub fn default_installation() -> ToolInstallation {
    ToolInstallation::new(DEFAULT_NAME, DEFAULT_HOME, Vec::new())
}
