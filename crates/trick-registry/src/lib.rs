//! Named installation registry for the Trick simulation toolchain
//!
//! A CI controller registers zero or more named Trick installations,
//! each a name plus an installation home and a set of global build
//! flags. Build steps ask the registry for an installation by name or
//! for the default one, then specialize the record for the node and
//! environment they run on:
//!
//! ```
//! use trick_platform::{EnvVars, MappedNode};
//! use trick_registry::{MemorySettings, ToolRegistry};
//!
//! # fn main() -> trick_registry::Result<()> {
//! let registry = ToolRegistry::open(Box::new(MemorySettings::default()))?;
//!
//! // An empty registry starts out with the synthesized default.
//! let tool = registry.default_installation()?;
//! assert_eq!(tool.name, "trick");
//!
//! // Specialize for the environment, then for the node running the build.
//! let env = EnvVars::from([("SIM_BASE", "/opt")]);
//! let node = MappedNode::new("agent-1").with_mount("/usr/local", "/mnt/ctl");
//! let for_build = tool.for_environment(&env).for_node(&node)?;
//! assert_eq!(for_build.home, "/mnt/ctl/trick");
//! # Ok(())
//! # }
//! ```
//!
//! Host integration happens through plain collaborator traits:
//! [`SettingsStore`] for durable configuration,
//! [`trick_platform::NodeContext`] for controller-to-node path
//! translation, and [`AccessPolicy`] for permission checks on the
//! configuration surface. The registry is constructed explicitly and
//! shared by handle; there is no ambient global instance.

pub mod access;
pub mod defaults;
pub mod error;
pub mod flags;
pub mod logging;
pub mod settings;
pub mod store;
pub mod types;

pub use access::{AccessPolicy, ReadOnly, Unrestricted};
pub use defaults::{DEFAULT_HOME, DEFAULT_NAME, DISPLAY_NAME, default_installation};
pub use error::{Error, Result};
pub use settings::{FileSettings, MemorySettings, SettingsStore};
pub use store::ToolRegistry;
pub use types::{ToolInstallation, ToolProperty};
