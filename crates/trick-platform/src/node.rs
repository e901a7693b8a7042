//! Node path translation collaborators
//!
//! An installation home is configured in controller-visible terms. A
//! build node may see the same installation at a different mount point,
//! so the registry asks a [`NodeContext`] to translate before handing
//! the path to a build step.

/// Errors a node translation can produce.
///
/// Translation may reach out to the node, so it can fail like any remote
/// call or be cancelled by the host. Neither case is retried here.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("node I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation was interrupted")]
    Interrupted,
}

/// A build node's view of controller-configured paths.
pub trait NodeContext: Send + Sync {
    /// Node identifier used in diagnostics.
    fn node_name(&self) -> &str;

    /// Translate a controller-visible home path into this node's view.
    fn translate_home(&self, home: &str) -> Result<String, TranslateError>;
}

/// The controller itself. Paths need no translation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalNode;

impl NodeContext for LocalNode {
    fn node_name(&self) -> &str {
        "controller"
    }

    fn translate_home(&self, home: &str) -> Result<String, TranslateError> {
        Ok(home.to_string())
    }
}

/// Mount-table translation for agents that see controller paths under a
/// different root (for example a shared `/tools` exported to agents as
/// `/mnt/tools`).
///
/// The longest matching controller prefix wins; a home that matches no
/// entry is passed through unchanged.
#[derive(Debug, Clone)]
pub struct MappedNode {
    name: String,
    mounts: Vec<(String, String)>,
}

impl MappedNode {
    /// Create a node with an empty mount table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mounts: Vec::new(),
        }
    }

    /// Add a controller-prefix -> node-prefix entry (builder pattern).
    pub fn with_mount(mut self, controller: impl Into<String>, node: impl Into<String>) -> Self {
        self.mounts.push((controller.into(), node.into()));
        self
    }
}

impl NodeContext for MappedNode {
    fn node_name(&self) -> &str {
        &self.name
    }

    fn translate_home(&self, home: &str) -> Result<String, TranslateError> {
        let best = self
            .mounts
            .iter()
            .filter(|(controller, _)| home.starts_with(controller.as_str()))
            .max_by_key(|(controller, _)| controller.len());

        Ok(match best {
            Some((controller, node)) => format!("{}{}", node, &home[controller.len()..]),
            None => home.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_local_node_is_identity() {
        let node = LocalNode;
        assert_eq!(
            node.translate_home("/usr/local/trick").unwrap(),
            "/usr/local/trick"
        );
        assert_eq!(node.node_name(), "controller");
    }

    #[test]
    fn test_mapped_node_rewrites_prefix() {
        let node = MappedNode::new("agent-7").with_mount("/tools", "/mnt/tools");
        assert_eq!(
            node.translate_home("/tools/trick-15.0.0").unwrap(),
            "/mnt/tools/trick-15.0.0"
        );
    }

    #[test]
    fn test_mapped_node_longest_prefix_wins() {
        let node = MappedNode::new("agent-7")
            .with_mount("/tools", "/mnt/generic")
            .with_mount("/tools/trick", "/opt/trick");
        assert_eq!(
            node.translate_home("/tools/trick/15.0.0").unwrap(),
            "/opt/trick/15.0.0"
        );
    }

    #[test]
    fn test_mapped_node_passes_through_unmatched_paths() {
        let node = MappedNode::new("agent-7").with_mount("/tools", "/mnt/tools");
        assert_eq!(
            node.translate_home("/usr/local/trick").unwrap(),
            "/usr/local/trick"
        );
    }

    #[test]
    fn test_translate_error_display() {
        let io = TranslateError::Io(std::io::Error::other("agent unreachable"));
        assert!(io.to_string().contains("agent unreachable"));
        assert_eq!(
            TranslateError::Interrupted.to_string(),
            "translation was interrupted"
        );
    }
}
