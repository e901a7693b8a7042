//! Normalized path handling for cross-platform compatibility

use std::fmt;
use std::path::{Path, PathBuf};

/// A path stored with forward slashes regardless of platform.
///
/// Installation homes are configured on the controller and travel through
/// settings files, form payloads, and node translation; keeping one
/// canonical separator avoids spurious mismatches. Conversion to the
/// native representation happens only when the path is handed to the
/// operating system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a normalized path from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy();
        Self {
            inner: raw.replace('\\', "/"),
        }
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native `PathBuf` for I/O.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner }
    }

    /// The final path component, if any.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// The extension of the final component, if any.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    /// Whether the path exists on this machine.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Whether the path is a regular file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Whether the path is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl From<&str> for NormalizedPath {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(value: &Path) -> Self {
        Self::new(value)
    }
}
