//! Executable-path validation for the configuration surface

use std::fmt;

use crate::NormalizedPath;

/// Outcome of probing a candidate installation path.
///
/// Soft verdicts are shown next to the form field; only the host decides
/// whether a non-`Ok` verdict blocks saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The path looks usable.
    Ok,
    /// The path is suspicious but may be valid on other machines.
    Warning(String),
    /// The path cannot work as entered.
    Error(String),
}

impl Verdict {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Warning(message) => write!(f, "warning: {message}"),
            Self::Error(message) => write!(f, "error: {message}"),
        }
    }
}

/// Probe a candidate path entered on the configuration form.
///
/// The probe runs on the controller, so a path that only exists on build
/// nodes yields a warning rather than an error. An empty candidate is
/// accepted: the form starts out blank.
pub fn validate_executable(candidate: &str) -> Verdict {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Verdict::Ok;
    }

    let path = NormalizedPath::new(candidate);
    let Ok(resolved) = dunce::canonicalize(path.to_native()) else {
        return Verdict::Warning(format!("{candidate} does not exist on the controller"));
    };

    if resolved.is_dir() {
        return Verdict::Warning(format!("{candidate} is a directory, not an executable"));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&resolved) {
            Ok(meta) if meta.permissions().mode() & 0o111 == 0 => {
                return Verdict::Error(format!("{candidate} is not executable"));
            }
            Ok(_) => {}
            Err(e) => {
                return Verdict::Warning(format!("{candidate} could not be inspected: {e}"));
            }
        }
    }

    Verdict::Ok
}
