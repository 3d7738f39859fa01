//! Stored record models
//!
//! These mirror the JSON the form host persists. Every config field is
//! optional so partially filled or older records still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deployment record as stored by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRecordDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SshConfigDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// SSH deployment config as stored by the host
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SshConfigDto {
    /// "pem", "pfx" or "jks"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfx_password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_keypass: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jks_storepass: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
