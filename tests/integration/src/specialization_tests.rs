//! Specializing configured installations for builds.

use pretty_assertions::assert_eq;
use trick_platform::{EnvVars, MappedNode, Verdict};
use trick_registry::flags::{self, apply_build_env};
use trick_registry::{
    MemorySettings, ReadOnly, ToolInstallation, ToolRegistry, Unrestricted,
};

#[test]
fn environment_then_node_specialization_chain() {
    let registry = ToolRegistry::load(Box::new(MemorySettings::with_installations(vec![
        ToolInstallation::new("trick-15.0.0", "${TOOLS}/trick-15.0.0", Vec::new())
            .with_global_flags("-Wall", "", "-lm"),
    ])))
    .unwrap();

    let tool = registry.lookup("trick-15.0.0").unwrap();

    // The controller exports /srv/tools, the agent mounts it at /mnt/tools.
    let env = EnvVars::from([("TOOLS", "/srv/tools")]);
    let node = MappedNode::new("agent-2").with_mount("/srv/tools", "/mnt/tools");

    let for_build = tool.for_environment(&env).for_node(&node).unwrap();
    assert_eq!(for_build.name, "trick-15.0.0");
    assert_eq!(for_build.home, "/mnt/tools/trick-15.0.0");
    assert!(for_build.properties.is_empty());

    // The flag set rode along and still drives the build environment.
    let mut build_env = EnvVars::new();
    build_env.set(flags::CFLAGS_VAR, "-O2");
    apply_build_env(&for_build, &mut build_env);
    assert_eq!(build_env.get(flags::CFLAGS_VAR), Some("-Wall -O2"));
    assert_eq!(build_env.get(flags::USER_LINK_LIBS_VAR), Some("-lm"));
}

#[test]
fn specialization_does_not_touch_the_registry() {
    let registry = ToolRegistry::load(Box::new(MemorySettings::with_installations(vec![
        ToolInstallation::new("trick", "${BASE}/trick", Vec::new()),
    ])))
    .unwrap();

    let tool = registry.lookup("trick").unwrap();
    let specialized = tool.for_environment(&EnvVars::from([("BASE", "/opt")]));
    assert_eq!(specialized.home, "/opt/trick");

    // The stored record still carries the unexpanded home.
    assert_eq!(registry.lookup("trick").unwrap().home, "${BASE}/trick");
}

#[cfg(unix)]
#[test]
fn home_validation_over_a_real_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::TempDir::new().unwrap();
    let exe = dir.path().join("trick-CP");
    std::fs::write(&exe, b"#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

    let registry = ToolRegistry::load(Box::new(MemorySettings::new())).unwrap();

    let verdict = registry
        .validate_home(&Unrestricted, &exe.display().to_string())
        .unwrap();
    assert_eq!(verdict, Verdict::Ok);

    let missing = dir.path().join("absent").display().to_string();
    let verdict = registry.validate_home(&Unrestricted, &missing).unwrap();
    assert!(matches!(verdict, Verdict::Warning(_)));

    // Without administer rights the probe is never reached.
    assert!(
        registry
            .validate_home(&ReadOnly, &exe.display().to_string())
            .is_err()
    );
}
