//! Defaults for records that have not been persisted yet

use crate::models::config::{DeploymentConfig, PemFields};
use crate::models::record::DeployRecord;
use crate::storage::settings::DefaultsSettings;

/// The config a new record starts from
pub fn default_config(defaults: &DefaultsSettings) -> DeploymentConfig {
    DeploymentConfig {
        format: Some(defaults.format),
        cert_path: defaults.cert_path.clone(),
        pem: PemFields {
            key_path: defaults.key_path.clone(),
        },
        command: defaults.command.clone(),
        ..Default::default()
    }
}

/// Replace the config of a new record with the defaults.
///
/// Returns `None` for persisted records, which keep their stored values.
pub fn initialize(record: &DeployRecord, defaults: &DefaultsSettings) -> Option<DeployRecord> {
    record
        .is_new()
        .then(|| record.with_config(default_config(defaults)))
}
