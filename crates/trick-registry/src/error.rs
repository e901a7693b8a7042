//! Error types for trick-registry

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in registry operations
///
/// A failed name lookup is not an error; [`crate::ToolRegistry::lookup`]
/// returns an absent value instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An installation in a submitted list violates a registry invariant
    #[error("Invalid installation {name:?}: {reason}")]
    InvalidInstallation { name: String, reason: String },

    /// A form payload could not be bound to an installation list
    #[error("Malformed form payload: {0}")]
    FormBinding(#[source] serde_json::Error),

    /// Node path translation failed
    #[error("Path translation failed for {tool} on {node}")]
    Translation {
        tool: String,
        node: String,
        #[source]
        source: std::io::Error,
    },

    /// Node path translation was cancelled
    #[error("Path translation interrupted for {tool} on {node}")]
    Interrupted { tool: String, node: String },

    /// The caller lacks administrative rights
    #[error("Administer permission required to {action}")]
    PermissionDenied { action: String },

    /// A settings store failed outside the platform layer
    #[error("Settings store failure: {message}")]
    Store { message: String },

    /// Platform collaborator error (settings I/O, parsing)
    #[error(transparent)]
    Platform(#[from] trick_platform::Error),
}
