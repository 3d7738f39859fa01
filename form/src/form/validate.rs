//! Format-aware validation of a deployment config

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::config::{ActiveFields, ConfigField, DeploymentConfig};
use crate::models::error_map::ErrorMap;

/// Longest accepted remote path, in characters
pub const MAX_PATH_LEN: usize = 255;

/// A single user-correctable problem with one field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("format required")]
    FormatUnselected,

    #[error("{label} is required", label = .field.label())]
    Required { field: ConfigField },

    #[error("{label} must be at most {max} characters", label = .field.label())]
    TooLong { field: ConfigField, max: usize },
}

impl FieldError {
    /// Field the error belongs to
    pub fn field(&self) -> ConfigField {
        match self {
            FieldError::FormatUnselected => ConfigField::Format,
            FieldError::Required { field } | FieldError::TooLong { field, .. } => *field,
        }
    }
}

/// All field errors of a config that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid deployment config: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn fields(&self) -> Vec<ConfigField> {
        self.0.iter().map(FieldError::field).collect()
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Outcome of one validation pass; one entry per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    entries: BTreeMap<ConfigField, Option<FieldError>>,
}

impl ValidationReport {
    fn clean() -> Self {
        Self {
            entries: ConfigField::ALL.into_iter().map(|f| (f, None)).collect(),
        }
    }

    /// Keep the first violated rule of a field
    fn record(&mut self, error: Option<FieldError>) {
        if let Some(error) = error {
            let slot = self.entries.entry(error.field()).or_insert(None);
            if slot.is_none() {
                *slot = Some(error);
            }
        }
    }

    pub fn error(&self, field: ConfigField) -> Option<&FieldError> {
        self.entries.get(&field).and_then(|e| e.as_ref())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.values().filter_map(|e| e.as_ref())
    }

    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    /// Rendered messages keyed by wire field name
    pub fn to_error_map(&self) -> ErrorMap {
        let mut map = ErrorMap::new();
        for (field, error) in &self.entries {
            map.set(field.as_str(), error.as_ref().map(ToString::to_string));
        }
        map
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        let errors: Vec<FieldError> = self.entries.into_values().flatten().collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn required(field: ConfigField, value: &str) -> Option<FieldError> {
    value.trim().is_empty().then_some(FieldError::Required { field })
}

fn too_long(field: ConfigField, value: &str, max: usize) -> Option<FieldError> {
    (value.chars().count() > max).then_some(FieldError::TooLong { field, max })
}

/// Run every rule against the config.
///
/// Rules are evaluated per field; a failing field never hides errors on
/// another one. Fields of inactive formats are only length-checked where a
/// limit applies regardless of format.
pub fn check(config: &DeploymentConfig, max_path_len: usize) -> ValidationReport {
    let mut report = ValidationReport::clean();

    report.record(required(ConfigField::CertPath, &config.cert_path));
    report.record(too_long(ConfigField::CertPath, &config.cert_path, max_path_len));
    report.record(too_long(ConfigField::KeyPath, &config.pem.key_path, max_path_len));

    match config.active() {
        Some(ActiveFields::Pem(pem)) => {
            report.record(required(ConfigField::KeyPath, &pem.key_path));
        }
        Some(ActiveFields::Pfx(pfx)) => {
            report.record(required(ConfigField::PfxPassword, &pfx.password));
        }
        Some(ActiveFields::Jks(jks)) => {
            report.record(required(ConfigField::JksAlias, &jks.alias));
            report.record(required(ConfigField::JksKeypass, &jks.keypass));
            report.record(required(ConfigField::JksStorepass, &jks.storepass));
        }
        None => report.record(Some(FieldError::FormatUnselected)),
    }

    report
}

/// Validate with the default path limit and render the error map
pub fn validate(config: &DeploymentConfig) -> ErrorMap {
    check(config, MAX_PATH_LEN).to_error_map()
}
