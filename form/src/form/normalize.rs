//! Certificate path normalization on format changes
//!
//! The selected format drives a small state machine: every time it moves to a
//! new format, the certificate path's trailing extension is rewritten if it
//! belongs to one of the other formats.

use serde::{Deserialize, Serialize};

use crate::models::config::{CertFormat, DeploymentConfig};

/// How strictly a trailing extension is recognized
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMatch {
    /// Only `.ext` with a literal dot
    #[default]
    Literal,

    /// Any single character before `ext`, except a line terminator.
    /// `/opt/certpfx` counts as having a `.pfx`-like suffix.
    Loose,
}

/// A format change between two snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatTransition {
    pub from: Option<CertFormat>,
    pub to: Option<CertFormat>,
}

impl FormatTransition {
    /// Transition from `before` to `after`, if the format changed
    pub fn between(before: &DeploymentConfig, after: &DeploymentConfig) -> Option<Self> {
        (before.format != after.format).then_some(Self {
            from: before.format,
            to: after.format,
        })
    }

    /// The initial settle of a freshly mounted config
    pub fn settle(config: &DeploymentConfig) -> Self {
        Self {
            from: None,
            to: config.format,
        }
    }

    /// Apply the transition's action to `config`.
    ///
    /// Returns the rewritten snapshot, or `None` when the path is left as is.
    pub fn apply(&self, config: &DeploymentConfig, matching: ExtensionMatch) -> Option<DeploymentConfig> {
        let to = self.to?;
        let cert_path = rewrite_extension(&config.cert_path, to, matching)?;
        Some(DeploymentConfig {
            cert_path,
            ..config.clone()
        })
    }
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Part of `path` before a trailing `ext` suffix, if it has one
fn strip_extension<'a>(path: &'a str, ext: &str, matching: ExtensionMatch) -> Option<&'a str> {
    let rest = path.strip_suffix(ext)?;
    match matching {
        ExtensionMatch::Literal => rest.strip_suffix('.'),
        ExtensionMatch::Loose => {
            let (idx, ch) = rest.char_indices().next_back()?;
            (!is_line_terminator(ch)).then(|| &rest[..idx])
        }
    }
}

/// Rewrite a trailing extension of another format to `to`'s extension.
///
/// Returns `None` if the path already ends with `to`'s extension or with no
/// recognized one.
pub fn rewrite_extension(path: &str, to: CertFormat, matching: ExtensionMatch) -> Option<String> {
    to.foreign_extensions()
        .into_iter()
        .find_map(|ext| strip_extension(path, ext, matching))
        .map(|stem| format!("{}.{}", stem, to.extension()))
}
