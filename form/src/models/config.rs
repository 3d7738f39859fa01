//! SSH deployment configuration model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Certificate container format written to the remote host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertFormat {
    /// Separate certificate and key files
    Pem,

    /// Password-protected PKCS#12 bundle
    Pfx,

    /// Java keystore
    Jks,
}

impl CertFormat {
    pub const ALL: [CertFormat; 3] = [CertFormat::Pem, CertFormat::Pfx, CertFormat::Jks];

    pub fn as_str(&self) -> &'static str {
        match self {
            CertFormat::Pem => "pem",
            CertFormat::Pfx => "pfx",
            CertFormat::Jks => "jks",
        }
    }

    /// Certificate file extension, without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            CertFormat::Pem => "crt",
            CertFormat::Pfx => "pfx",
            CertFormat::Jks => "jks",
        }
    }

    /// Extensions owned by the two other formats
    pub fn foreign_extensions(&self) -> [&'static str; 2] {
        match self {
            CertFormat::Pem => ["pfx", "jks"],
            CertFormat::Pfx => ["crt", "jks"],
            CertFormat::Jks => ["crt", "pfx"],
        }
    }
}

impl fmt::Display for CertFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CertFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pem" => Ok(CertFormat::Pem),
            "pfx" => Ok(CertFormat::Pfx),
            "jks" => Ok(CertFormat::Jks),
            _ => Err(format!("Invalid certificate format: {}", s)),
        }
    }
}

/// Fields only used by the PEM format
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PemFields {
    /// Remote path of the private key file
    pub key_path: String,
}

/// Fields only used by the PFX format
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PfxFields {
    pub password: String,
}

/// Fields only used by the JKS format
#[derive(Clone, Default, PartialEq, Eq)]
pub struct JksFields {
    pub alias: String,
    pub keypass: String,
    pub storepass: String,
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[REDACTED]"
    }
}

impl fmt::Debug for PfxFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PfxFields")
            .field("password", &redacted(&self.password))
            .finish()
    }
}

impl fmt::Debug for JksFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JksFields")
            .field("alias", &self.alias)
            .field("keypass", &redacted(&self.keypass))
            .field("storepass", &redacted(&self.storepass))
            .finish()
    }
}

/// Configuration of one SSH deployment target.
///
/// Every format's field group is kept, so switching back to a format restores
/// what was entered for it. Only the group selected by `format` is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Selected format; `None` when unset or unrecognized
    pub format: Option<CertFormat>,

    /// Remote path of the certificate file
    pub cert_path: String,

    pub pem: PemFields,

    pub pfx: PfxFields,

    pub jks: JksFields,

    /// Shell command run before the files are transferred
    pub pre_command: String,

    /// Shell command run after the files are transferred
    pub command: String,
}

/// Borrowed view of the field group selected by the format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFields<'a> {
    Pem(&'a PemFields),
    Pfx(&'a PfxFields),
    Jks(&'a JksFields),
}

impl DeploymentConfig {
    /// Field group of the selected format
    pub fn active(&self) -> Option<ActiveFields<'_>> {
        self.format.map(|format| match format {
            CertFormat::Pem => ActiveFields::Pem(&self.pem),
            CertFormat::Pfx => ActiveFields::Pfx(&self.pfx),
            CertFormat::Jks => ActiveFields::Jks(&self.jks),
        })
    }

    /// Current value of a field as text
    pub fn value(&self, field: ConfigField) -> &str {
        match field {
            ConfigField::Format => self.format.map(|f| f.as_str()).unwrap_or(""),
            ConfigField::CertPath => &self.cert_path,
            ConfigField::KeyPath => &self.pem.key_path,
            ConfigField::PfxPassword => &self.pfx.password,
            ConfigField::JksAlias => &self.jks.alias,
            ConfigField::JksKeypass => &self.jks.keypass,
            ConfigField::JksStorepass => &self.jks.storepass,
            ConfigField::PreCommand => &self.pre_command,
            ConfigField::Command => &self.command,
        }
    }
}

/// Editable fields of a [`DeploymentConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfigField {
    Format,
    CertPath,
    KeyPath,
    PfxPassword,
    JksAlias,
    JksKeypass,
    JksStorepass,
    PreCommand,
    Command,
}

impl ConfigField {
    pub const ALL: [ConfigField; 9] = [
        ConfigField::Format,
        ConfigField::CertPath,
        ConfigField::KeyPath,
        ConfigField::PfxPassword,
        ConfigField::JksAlias,
        ConfigField::JksKeypass,
        ConfigField::JksStorepass,
        ConfigField::PreCommand,
        ConfigField::Command,
    ];

    /// Name used in stored records and error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::Format => "format",
            ConfigField::CertPath => "certPath",
            ConfigField::KeyPath => "keyPath",
            ConfigField::PfxPassword => "pfxPassword",
            ConfigField::JksAlias => "jksAlias",
            ConfigField::JksKeypass => "jksKeypass",
            ConfigField::JksStorepass => "jksStorepass",
            ConfigField::PreCommand => "preCommand",
            ConfigField::Command => "command",
        }
    }

    /// Human readable name used in validation messages
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Format => "file format",
            ConfigField::CertPath => "certificate file path",
            ConfigField::KeyPath => "private key file path",
            ConfigField::PfxPassword => "PFX password",
            ConfigField::JksAlias => "JKS alias",
            ConfigField::JksKeypass => "JKS key password",
            ConfigField::JksStorepass => "JKS store password",
            ConfigField::PreCommand => "pre-command",
            ConfigField::Command => "command",
        }
    }

    /// Whether edits to this field are stored trimmed.
    ///
    /// Shell commands keep their whitespace since they may be multi-line scripts.
    pub fn is_trimmed(&self) -> bool {
        !matches!(self, ConfigField::PreCommand | ConfigField::Command)
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ConfigField::ALL
            .into_iter()
            .find(|field| {
                field.as_str() == wanted || field.as_str().eq_ignore_ascii_case(&wanted.replace('_', ""))
            })
            .ok_or_else(|| FormError::UnknownField(wanted.to_string()))
    }
}
