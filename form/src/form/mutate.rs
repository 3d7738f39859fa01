//! Single-field edits producing new config snapshots

use crate::models::config::{CertFormat, ConfigField, DeploymentConfig};

/// Parse a raw format value; anything unrecognized leaves the format unselected
pub fn parse_format(raw: &str) -> Option<CertFormat> {
    raw.parse().ok()
}

/// New snapshot with one field replaced by `raw`.
///
/// Path, password and alias values are trimmed. Shell commands are stored
/// verbatim. Never fails: whatever ends up stored is reported by validation.
pub fn apply_edit(config: &DeploymentConfig, field: ConfigField, raw: &str) -> DeploymentConfig {
    let value = if field.is_trimmed() { raw.trim() } else { raw }.to_string();
    let mut next = config.clone();
    match field {
        ConfigField::Format => next.format = parse_format(&value),
        ConfigField::CertPath => next.cert_path = value,
        ConfigField::KeyPath => next.pem.key_path = value,
        ConfigField::PfxPassword => next.pfx.password = value,
        ConfigField::JksAlias => next.jks.alias = value,
        ConfigField::JksKeypass => next.jks.keypass = value,
        ConfigField::JksStorepass => next.jks.storepass = value,
        ConfigField::PreCommand => next.pre_command = value,
        ConfigField::Command => next.command = value,
    }
    next
}

/// New snapshot with the format replaced
pub fn select_format(config: &DeploymentConfig, format: Option<CertFormat>) -> DeploymentConfig {
    DeploymentConfig {
        format,
        ..config.clone()
    }
}
