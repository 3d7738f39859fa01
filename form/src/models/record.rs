//! Host-owned deployment record

use chrono::{DateTime, Utc};
use deploy_api::models::{DeployRecordDto, SshConfigDto};

use crate::models::config::{CertFormat, DeploymentConfig, JksFields, PemFields, PfxFields};

/// The record the form host owns; the form only ever replaces it whole
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployRecord {
    /// Persisted identity; absent for records not saved yet
    pub id: Option<String>,

    pub name: Option<String>,

    pub config: DeploymentConfig,

    pub created: Option<DateTime<Utc>>,

    pub updated: Option<DateTime<Utc>>,
}

impl DeployRecord {
    /// A record that has never been persisted
    pub fn is_new(&self) -> bool {
        self.id.as_deref().map_or(true, |id| id.trim().is_empty())
    }

    /// New snapshot with the config replaced
    pub fn with_config(&self, config: DeploymentConfig) -> Self {
        Self {
            config,
            ..self.clone()
        }
    }
}

impl From<SshConfigDto> for DeploymentConfig {
    fn from(dto: SshConfigDto) -> Self {
        Self {
            format: dto.format.as_deref().and_then(|raw| raw.parse::<CertFormat>().ok()),
            cert_path: dto.cert_path.unwrap_or_default(),
            pem: PemFields {
                key_path: dto.key_path.unwrap_or_default(),
            },
            pfx: PfxFields {
                password: dto.pfx_password.unwrap_or_default(),
            },
            jks: JksFields {
                alias: dto.jks_alias.unwrap_or_default(),
                keypass: dto.jks_keypass.unwrap_or_default(),
                storepass: dto.jks_storepass.unwrap_or_default(),
            },
            pre_command: dto.pre_command.unwrap_or_default(),
            command: dto.command.unwrap_or_default(),
        }
    }
}

impl From<&DeploymentConfig> for SshConfigDto {
    fn from(config: &DeploymentConfig) -> Self {
        Self {
            format: config.format.map(|format| format.as_str().to_string()),
            cert_path: Some(config.cert_path.clone()),
            key_path: Some(config.pem.key_path.clone()),
            pfx_password: Some(config.pfx.password.clone()),
            jks_alias: Some(config.jks.alias.clone()),
            jks_keypass: Some(config.jks.keypass.clone()),
            jks_storepass: Some(config.jks.storepass.clone()),
            pre_command: Some(config.pre_command.clone()),
            command: Some(config.command.clone()),
        }
    }
}

impl From<DeployRecordDto> for DeployRecord {
    fn from(dto: DeployRecordDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            config: dto.config.map(DeploymentConfig::from).unwrap_or_default(),
            created: dto.created,
            updated: dto.updated,
        }
    }
}

impl From<&DeployRecord> for DeployRecordDto {
    fn from(record: &DeployRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            config: Some(SshConfigDto::from(&record.config)),
            created: record.created,
            updated: record.updated,
        }
    }
}
