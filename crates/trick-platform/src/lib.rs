//! Host-platform collaborators for the Trick installation manager
//!
//! The registry core (`trick-registry`) never talks to the filesystem,
//! the environment, or a build node directly. Everything it needs from
//! the surrounding platform is expressed here:
//!
//! - **Paths**: [`NormalizedPath`] keeps forward slashes internally and
//!   converts to native form only at I/O boundaries.
//! - **Settings documents**: typed load/save with the on-disk format
//!   (TOML, JSON, YAML) detected from the file extension, written
//!   atomically.
//! - **Environment expansion**: [`EnvVars`] substitutes `${VAR}`
//!   references in configured paths.
//! - **Node translation**: [`NodeContext`] turns a controller-visible
//!   home path into the equivalent path on a build node.
//! - **Validation**: [`validate_executable`] probes a candidate path and
//!   reports a [`Verdict`] for the configuration surface.

pub mod env;
pub mod error;
pub mod io;
pub mod node;
pub mod path;
pub mod settings;
pub mod validate;

pub use env::EnvVars;
pub use error::{Error, Result};
pub use node::{LocalNode, MappedNode, NodeContext, TranslateError};
pub use path::NormalizedPath;
pub use validate::{Verdict, validate_executable};
