//! Settings file management

use serde::{Deserialize, Serialize};

use crate::errors::FormError;
use crate::filesys::file::File;
use crate::form::normalize::ExtensionMatch;
use crate::form::validate::MAX_PATH_LEN;
use crate::logs::LogLevel;
use crate::models::config::CertFormat;

/// Form settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSettings {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Emit logs as JSON
    #[serde(default)]
    pub json_logs: bool,

    /// Values new records start from
    #[serde(default)]
    pub defaults: DefaultsSettings,

    /// Suffix matching for certificate extension rewrites
    #[serde(default)]
    pub extension_match: ExtensionMatch,

    /// Longest accepted remote path, in characters
    #[serde(default = "default_max_path_len")]
    pub max_path_len: usize,
}

fn default_max_path_len() -> usize {
    MAX_PATH_LEN
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            json_logs: false,
            defaults: DefaultsSettings::default(),
            extension_match: ExtensionMatch::Literal,
            max_path_len: MAX_PATH_LEN,
        }
    }
}

impl FormSettings {
    /// Load settings from a JSON file
    pub async fn load(file: &File) -> Result<Self, FormError> {
        let settings: FormSettings = file.read_json().await?;
        if settings.max_path_len == 0 {
            return Err(FormError::ConfigError(
                "max_path_len must be greater than zero".to_string(),
            ));
        }
        Ok(settings)
    }
}

/// Defaults applied to new records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsSettings {
    #[serde(default = "default_format")]
    pub format: CertFormat,

    #[serde(default = "default_cert_path")]
    pub cert_path: String,

    #[serde(default = "default_key_path")]
    pub key_path: String,

    /// Command run after the transfer
    #[serde(default = "default_command")]
    pub command: String,
}

fn default_format() -> CertFormat {
    CertFormat::Pem
}

fn default_cert_path() -> String {
    "/etc/nginx/ssl/nginx.crt".to_string()
}

fn default_key_path() -> String {
    "/etc/nginx/ssl/nginx.key".to_string()
}

fn default_command() -> String {
    "sudo service nginx reload".to_string()
}

impl Default for DefaultsSettings {
    fn default() -> Self {
        Self {
            format: default_format(),
            cert_path: default_cert_path(),
            key_path: default_key_path(),
            command: default_command(),
        }
    }
}
