//! Registry lifecycle over durable file-backed settings.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use trick_platform::NormalizedPath;
use trick_registry::{FileSettings, ToolInstallation, ToolRegistry};

fn file_store(dir: &tempfile::TempDir, name: &str) -> Box<FileSettings> {
    Box::new(FileSettings::new(NormalizedPath::new(dir.path().join(name))))
}

fn tool(name: &str, home: &str) -> ToolInstallation {
    ToolInstallation::new(name, home, Vec::new())
}

#[test]
fn first_open_seeds_and_persists_the_default() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings_path = dir.path().join("installations.toml");

    let registry = ToolRegistry::open(file_store(&dir, "installations.toml")).unwrap();

    assert_eq!(registry.default_installation().unwrap().name, "trick");
    assert!(
        settings_path.is_file(),
        "seeding the default must write the settings file"
    );

    // A fresh registry over the same file sees the persisted default and
    // synthesizes nothing new.
    let reopened = ToolRegistry::open(file_store(&dir, "installations.toml")).unwrap();
    assert_eq!(reopened.installations().len(), 1);
    assert_eq!(
        reopened.default_installation().unwrap().home,
        "/usr/local/trick"
    );
}

#[test]
fn reconfiguration_round_trips_through_disk() {
    let dir = tempfile::TempDir::new().unwrap();

    let registry = ToolRegistry::open(file_store(&dir, "installations.toml")).unwrap();
    registry
        .configure(vec![
            tool("trick-13.5.0", "/opt/trick/13.5.0"),
            tool("trick-15.0.0", "/opt/trick/15.0.0")
                .with_global_flags("-Wall", "-std=c++17", "-lm")
                .with_debug(true),
        ])
        .unwrap();

    let reopened = ToolRegistry::open(file_store(&dir, "installations.toml")).unwrap();
    let list = reopened.installations();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "trick-13.5.0");
    assert!(list[1].use_global_env_vars);
    assert_eq!(list[1].global_cxxflags, "-std=c++17");
    assert!(list[1].global_debug);

    // The replaced default is gone everywhere.
    assert!(reopened.lookup("trick").is_none());
    assert_eq!(reopened.default_installation().unwrap().name, "trick-13.5.0");
}

#[test]
fn json_and_yaml_stores_behave_like_toml() {
    for file_name in ["installations.json", "installations.yaml"] {
        let dir = tempfile::TempDir::new().unwrap();

        let registry = ToolRegistry::open(file_store(&dir, file_name)).unwrap();
        registry
            .configure(vec![tool("custom", "/srv/trick")])
            .unwrap();

        let reopened = ToolRegistry::open(file_store(&dir, file_name)).unwrap();
        assert_eq!(
            reopened.installations(),
            vec![tool("custom", "/srv/trick")],
            "store {file_name} must round-trip the configured list"
        );
    }
}

#[test]
fn form_submission_applies_and_persists() {
    let dir = tempfile::TempDir::new().unwrap();
    let registry = ToolRegistry::open(file_store(&dir, "installations.json")).unwrap();

    registry
        .configure_from_form(&serde_json::json!({
            "tool": [
                {"name": "trick-15.0.0", "home": "${TOOLS}/trick-15.0.0"},
                {"name": "trick", "home": "/usr/local/trick"}
            ]
        }))
        .unwrap();

    let reopened = ToolRegistry::open(file_store(&dir, "installations.json")).unwrap();
    assert_eq!(reopened.installations().len(), 2);
    // The named default wins over list order.
    assert_eq!(reopened.default_installation().unwrap().name, "trick");
}

#[test]
fn concurrent_default_resolution_synthesizes_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let registry = Arc::new(ToolRegistry::load(file_store(&dir, "installations.toml")).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || registry.default_installation().unwrap().name)
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "trick");
    }

    assert_eq!(registry.installations().len(), 1);

    // The persisted list holds exactly the one synthesized entry.
    let reopened = ToolRegistry::load(file_store(&dir, "installations.toml")).unwrap();
    assert_eq!(reopened.installations().len(), 1);
}
