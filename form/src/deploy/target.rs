//! Validated deployment target handed to the execution backend

use secrecy::SecretString;

use crate::form::validate::{check, FieldError, ValidationErrors, MAX_PATH_LEN};
use crate::models::config::{CertFormat, DeploymentConfig};

/// Format-specific material written next to the certificate
#[derive(Debug)]
pub enum CertBundle {
    Pem {
        key_path: String,
    },
    Pfx {
        password: SecretString,
    },
    Jks {
        alias: String,
        keypass: SecretString,
        storepass: SecretString,
    },
}

impl CertBundle {
    pub fn format(&self) -> CertFormat {
        match self {
            CertBundle::Pem { .. } => CertFormat::Pem,
            CertBundle::Pfx { .. } => CertFormat::Pfx,
            CertBundle::Jks { .. } => CertFormat::Jks,
        }
    }
}

/// A deployment config that passed validation
#[derive(Debug)]
pub struct SshDeployTarget {
    pub cert_path: String,
    pub bundle: CertBundle,
    pub pre_command: Option<String>,
    pub command: Option<String>,
}

fn non_blank(command: &str) -> Option<String> {
    (!command.trim().is_empty()).then(|| command.to_string())
}

impl SshDeployTarget {
    /// Build a target from a config, failing with every field error it has
    pub fn from_config(config: &DeploymentConfig, max_path_len: usize) -> Result<Self, ValidationErrors> {
        check(config, max_path_len).into_result()?;

        // Validation guarantees a selected format
        let format = config
            .format
            .ok_or_else(|| ValidationErrors(vec![FieldError::FormatUnselected]))?;
        let bundle = match format {
            CertFormat::Pem => CertBundle::Pem {
                key_path: config.pem.key_path.clone(),
            },
            CertFormat::Pfx => CertBundle::Pfx {
                password: SecretString::from(config.pfx.password.clone()),
            },
            CertFormat::Jks => CertBundle::Jks {
                alias: config.jks.alias.clone(),
                keypass: SecretString::from(config.jks.keypass.clone()),
                storepass: SecretString::from(config.jks.storepass.clone()),
            },
        };

        Ok(Self {
            cert_path: config.cert_path.clone(),
            bundle,
            pre_command: non_blank(&config.pre_command),
            command: non_blank(&config.command),
        })
    }

    pub fn format(&self) -> CertFormat {
        self.bundle.format()
    }
}

impl DeploymentConfig {
    /// Convert into a deploy target using the default path limit
    pub fn to_target(&self) -> Result<SshDeployTarget, ValidationErrors> {
        SshDeployTarget::from_config(self, MAX_PATH_LEN)
    }
}

impl TryFrom<&DeploymentConfig> for SshDeployTarget {
    type Error = ValidationErrors;

    fn try_from(config: &DeploymentConfig) -> Result<Self, Self::Error> {
        config.to_target()
    }
}
