//! Global build-flag overlay
//!
//! An installation can carry global flag strings that every build using
//! it inherits. The overlay prepends them to the `TRICK_*` environment
//! entries consumed by downstream build steps, so per-build flags still
//! apply after the global ones.

use trick_platform::EnvVars;

use crate::types::ToolInstallation;

/// C compiler flags consumed by Trick build steps.
pub const CFLAGS_VAR: &str = "TRICK_CFLAGS";

/// C++ compiler flags consumed by Trick build steps.
pub const CXXFLAGS_VAR: &str = "TRICK_CXXFLAGS";

/// User link libraries consumed by Trick build steps.
pub const USER_LINK_LIBS_VAR: &str = "TRICK_USER_LINK_LIBS";

/// Debug-mode switch consumed by Trick build steps.
pub const DEBUG_VAR: &str = "TRICK_DEBUG";

/// Overlay the installation's global flags onto a build environment.
///
/// The flag strings are prepended only when `use_global_env_vars` is set;
/// `global_debug` drives [`DEBUG_VAR`] independently of that gate. An
/// installation with the gate unset leaves the flag entries untouched.
pub fn apply_build_env(tool: &ToolInstallation, env: &mut EnvVars) {
    if tool.use_global_env_vars {
        prepend(env, CFLAGS_VAR, &tool.global_cflags);
        prepend(env, CXXFLAGS_VAR, &tool.global_cxxflags);
        prepend(env, USER_LINK_LIBS_VAR, &tool.global_user_link_libs);
    }

    if tool.global_debug {
        env.set(DEBUG_VAR, "1");
    }
}

fn prepend(env: &mut EnvVars, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let merged = match env.get(key) {
        Some(existing) if !existing.is_empty() => format!("{value} {existing}"),
        _ => value.to_string(),
    };
    env.set(key, merged);
}
