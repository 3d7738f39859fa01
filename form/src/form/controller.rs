//! Form controller
//!
//! Sequences edits against a host context: mutate, normalize the certificate
//! path on format changes, validate, publish. The controller holds options
//! only; the record and error map always live in the host.

use std::str::FromStr;

use tracing::{debug, info};

use crate::deploy::target::SshDeployTarget;
use crate::errors::FormError;
use crate::form::context::DeployEditContext;
use crate::form::defaults::initialize;
use crate::form::mutate::{apply_edit, select_format};
use crate::form::normalize::{ExtensionMatch, FormatTransition};
use crate::form::validate::{check, ValidationReport, MAX_PATH_LEN};
use crate::models::config::{CertFormat, ConfigField, DeploymentConfig};
use crate::storage::settings::{DefaultsSettings, FormSettings};

/// Form behaviour options
#[derive(Debug, Clone)]
pub struct FormOptions {
    /// Values a new record starts from
    pub defaults: DefaultsSettings,

    /// Suffix matching used when rewriting the certificate extension
    pub extension_match: ExtensionMatch,

    /// Longest accepted path
    pub max_path_len: usize,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            defaults: DefaultsSettings::default(),
            extension_match: ExtensionMatch::default(),
            max_path_len: MAX_PATH_LEN,
        }
    }
}

impl From<&FormSettings> for FormOptions {
    fn from(settings: &FormSettings) -> Self {
        Self {
            defaults: settings.defaults.clone(),
            extension_match: settings.extension_match,
            max_path_len: settings.max_path_len,
        }
    }
}

/// An edit dispatched by the rendering layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Raw value typed into a field
    Edit { field: ConfigField, value: String },

    /// Format picked from the selector
    SelectFormat(Option<CertFormat>),
}

impl FormEvent {
    pub fn edit(field: ConfigField, value: impl Into<String>) -> Self {
        FormEvent::Edit {
            field,
            value: value.into(),
        }
    }

    /// Field the event targets
    pub fn field(&self) -> ConfigField {
        match self {
            FormEvent::Edit { field, .. } => *field,
            FormEvent::SelectFormat(_) => ConfigField::Format,
        }
    }
}

impl FromStr for FormEvent {
    type Err = FormError;

    /// Parse `field=value`; the value may itself contain `=`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| FormError::InvalidArgument(format!("expected field=value, got `{}`", s)))?;
        Ok(FormEvent::edit(field.parse()?, value))
    }
}

/// Stateless driver of the SSH deployment form
#[derive(Debug, Clone, Default)]
pub struct SshDeployForm {
    options: FormOptions,
}

impl SshDeployForm {
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }

    /// Deploy target for the host's current config.
    ///
    /// Fails with every field error when the config is not deployable.
    pub fn submit<C: DeployEditContext>(&self, ctx: &C) -> Result<SshDeployTarget, FormError> {
        let target = SshDeployTarget::from_config(&ctx.deploy().config, self.options.max_path_len)?;
        info!(format = %target.format(), "Submitted SSH deployment");
        Ok(target)
    }

    /// First render of the form.
    ///
    /// New records get the default config, the host's error map is cleared,
    /// the certificate path settles on the current format and the result is
    /// validated.
    pub fn mount<C: DeployEditContext>(&self, ctx: &mut C) -> ValidationReport {
        let current = ctx.deploy();
        let initialized = initialize(current, &self.options.defaults);
        if initialized.is_some() {
            info!("Initialized new SSH deployment with default config");
        }
        let record = initialized.unwrap_or_else(|| current.clone());

        let settle = FormatTransition::settle(&record.config);
        let normalized = self.normalize(&record.config, settle);

        match normalized {
            Some(config) => ctx.set_deploy(record.with_config(config)),
            None if ctx.deploy() != &record => ctx.set_deploy(record),
            None => {}
        }

        ctx.set_errors(Default::default());
        self.publish(ctx)
    }

    /// Process one event to completion
    pub fn handle<C: DeployEditContext>(&self, ctx: &mut C, event: FormEvent) -> ValidationReport {
        let current = ctx.deploy();
        let edited = match &event {
            FormEvent::Edit { field, value } => apply_edit(&current.config, *field, value),
            FormEvent::SelectFormat(format) => select_format(&current.config, *format),
        };
        debug!(field = %event.field(), "Applied form edit");

        let config = FormatTransition::between(&current.config, &edited)
            .and_then(|transition| self.normalize(&edited, transition))
            .unwrap_or(edited);

        let record = current.with_config(config);
        ctx.set_deploy(record);
        self.publish(ctx)
    }

    /// Process events in order, each one fully before the next.
    ///
    /// Returns the report of the last event, or of the current state when
    /// there were none.
    pub fn handle_all<C, I>(&self, ctx: &mut C, events: I) -> ValidationReport
    where
        C: DeployEditContext,
        I: IntoIterator<Item = FormEvent>,
    {
        let mut last = None;
        for event in events {
            last = Some(self.handle(ctx, event));
        }
        last.unwrap_or_else(|| check(&ctx.deploy().config, self.options.max_path_len))
    }

    fn normalize(&self, config: &DeploymentConfig, transition: FormatTransition) -> Option<DeploymentConfig> {
        let rewritten = transition.apply(config, self.options.extension_match)?;
        info!(
            from = ?transition.from,
            to = ?transition.to,
            cert_path = %rewritten.cert_path,
            "Rewrote certificate path extension"
        );
        Some(rewritten)
    }

    /// Validate the host's current config and merge the result into its error map
    fn publish<C: DeployEditContext>(&self, ctx: &mut C) -> ValidationReport {
        let report = check(&ctx.deploy().config, self.options.max_path_len);
        let errors = ctx.errors().merged_with(&report.to_error_map());
        debug!(errors = errors.error_count(), "Published validation result");
        ctx.set_errors(errors);
        report
    }
}
