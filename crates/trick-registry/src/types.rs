//! Core types for the installation registry

use serde::{Deserialize, Serialize};

use trick_platform::{EnvVars, NodeContext, TranslateError};

use crate::error::{Error, Result};

/// An opaque property attached to an installation.
///
/// Properties are configured by the host and passed through untouched;
/// the registry never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolProperty {
    /// Property identifier, meaningful only to the host
    pub key: String,
    /// Arbitrary payload
    #[serde(default)]
    pub value: serde_json::Value,
}

impl ToolProperty {
    pub fn new(key: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// A named installation of the Trick toolchain.
///
/// Selects between different installations of Trick, as in
/// "trick-13.5.0" or "trick-15.0.0". Records are immutable values;
/// [`for_node`](Self::for_node) and
/// [`for_environment`](Self::for_environment) return specialized copies
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInstallation {
    /// Unique identifier within the registry
    pub name: String,
    /// Installation root on the controller; may contain `${VAR}` references
    pub home: String,
    /// Gate for the global flag overlay below
    #[serde(default)]
    pub use_global_env_vars: bool,
    /// Prepended to build-step CFLAGS when the gate is set
    #[serde(default)]
    pub global_cflags: String,
    /// Prepended to build-step CXXFLAGS when the gate is set
    #[serde(default)]
    pub global_cxxflags: String,
    /// Prepended to the user link libraries when the gate is set
    #[serde(default)]
    pub global_user_link_libs: String,
    /// Switches downstream builds into debug mode
    #[serde(default)]
    pub global_debug: bool,
    /// Opaque pass-through properties
    #[serde(default)]
    pub properties: Vec<ToolProperty>,
}

impl ToolInstallation {
    /// Create an installation with no global flags set.
    pub fn new(
        name: impl Into<String>,
        home: impl Into<String>,
        properties: Vec<ToolProperty>,
    ) -> Self {
        Self {
            name: name.into(),
            home: home.into(),
            properties,
            use_global_env_vars: false,
            global_cflags: String::new(),
            global_cxxflags: String::new(),
            global_user_link_libs: String::new(),
            global_debug: false,
        }
    }

    /// Set the global flag strings and enable the overlay gate
    /// (builder pattern).
    pub fn with_global_flags(
        mut self,
        cflags: impl Into<String>,
        cxxflags: impl Into<String>,
        user_link_libs: impl Into<String>,
    ) -> Self {
        self.use_global_env_vars = true;
        self.global_cflags = cflags.into();
        self.global_cxxflags = cxxflags.into();
        self.global_user_link_libs = user_link_libs.into();
        self
    }

    /// Set the global debug switch (builder pattern).
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.global_debug = debug;
        self
    }

    /// Specialize this installation for a build node.
    ///
    /// The home is translated into the node's view; properties do not
    /// survive specialization, the flag set does. Translation failures
    /// and cancellation propagate untouched.
    pub fn for_node(&self, node: &dyn NodeContext) -> Result<Self> {
        let home = node.translate_home(&self.home).map_err(|e| match e {
            TranslateError::Io(source) => Error::Translation {
                tool: self.name.clone(),
                node: node.node_name().to_string(),
                source,
            },
            TranslateError::Interrupted => Error::Interrupted {
                tool: self.name.clone(),
                node: node.node_name().to_string(),
            },
        })?;

        Ok(Self {
            home,
            properties: Vec::new(),
            ..self.clone()
        })
    }

    /// Specialize this installation for a build environment.
    ///
    /// `${VAR}` references in the home are expanded from `env`; missing
    /// variables are left as-is. Pure and infallible.
    pub fn for_environment(&self, env: &EnvVars) -> Self {
        Self {
            home: env.expand(&self.home),
            properties: Vec::new(),
            ..self.clone()
        }
    }
}
