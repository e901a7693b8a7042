//! Format-agnostic settings documents
//!
//! The host owns where settings live and which format they use; this
//! module only maps typed values to and from disk. The format is
//! detected from the file extension:
//!
//! - `.toml` -> TOML
//! - `.json` -> JSON
//! - `.yaml`, `.yml` -> YAML

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Load a typed settings document from a file.
pub fn load<T: DeserializeOwned>(path: &NormalizedPath) -> Result<T> {
    tracing::debug!(%path, "Reading settings document");
    let content = io::read_text(path)?;

    match format_of(path)? {
        Format::Toml => toml::from_str(&content).map_err(|e| Error::SettingsParse {
            path: path.to_native(),
            format: "TOML".into(),
            message: e.to_string(),
        }),
        Format::Json => serde_json::from_str(&content).map_err(|e| Error::SettingsParse {
            path: path.to_native(),
            format: "JSON".into(),
            message: e.to_string(),
        }),
        Format::Yaml => serde_yaml::from_str(&content).map_err(|e| Error::SettingsParse {
            path: path.to_native(),
            format: "YAML".into(),
            message: e.to_string(),
        }),
    }
}

/// Save a typed settings document to a file.
///
/// Uses an atomic write so readers never see a torn document.
pub fn save<T: Serialize>(path: &NormalizedPath, value: &T) -> Result<()> {
    let content = match format_of(path)? {
        Format::Toml => toml::to_string_pretty(value).map_err(|e| Error::SettingsSerialize {
            path: path.to_native(),
            format: "TOML".into(),
            message: e.to_string(),
        })?,
        Format::Json => {
            serde_json::to_string_pretty(value).map_err(|e| Error::SettingsSerialize {
                path: path.to_native(),
                format: "JSON".into(),
                message: e.to_string(),
            })?
        }
        Format::Yaml => serde_yaml::to_string(value).map_err(|e| Error::SettingsSerialize {
            path: path.to_native(),
            format: "YAML".into(),
            message: e.to_string(),
        })?,
    };

    tracing::debug!(%path, bytes = content.len(), "Writing settings document");
    io::write_atomic(path, content.as_bytes())
}

enum Format {
    Toml,
    Json,
    Yaml,
}

fn format_of(path: &NormalizedPath) -> Result<Format> {
    let extension = path.extension().unwrap_or("");
    match extension.to_lowercase().as_str() {
        "toml" => Ok(Format::Toml),
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(Error::UnsupportedFormat {
            extension: extension.to_string(),
        }),
    }
}
