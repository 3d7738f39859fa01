//! Form controller scenarios

use sshdeploy_form::form::context::{DeployEditContext, MemoryContext};
use sshdeploy_form::form::controller::{FormEvent, FormOptions, SshDeployForm};
use sshdeploy_form::models::config::{CertFormat, ConfigField, DeploymentConfig};
use sshdeploy_form::models::error_map::ErrorMap;
use sshdeploy_form::models::record::DeployRecord;

fn persisted(config: DeploymentConfig) -> DeployRecord {
    DeployRecord {
        id: Some("rec-1".to_string()),
        name: Some("edge".to_string()),
        config,
        ..Default::default()
    }
}

fn error_fields(errors: &ErrorMap) -> Vec<&str> {
    errors.messages().map(|(field, _)| field).collect()
}

#[test]
fn test_mount_new_record_writes_defaults_once() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());

    let report = form.mount(&mut ctx);

    assert!(report.is_valid());
    assert_eq!(ctx.deploy_writes(), 1);
    let config = &ctx.deploy().config;
    assert_eq!(config.format, Some(CertFormat::Pem));
    assert_eq!(config.command, "sudo service nginx reload");
    assert_eq!(ctx.errors().len(), ConfigField::ALL.len());
    assert!(ctx.errors().is_clean());
}

#[test]
fn test_mount_persisted_record_keeps_values() {
    let config = DeploymentConfig {
        format: Some(CertFormat::Pem),
        cert_path: "/srv/tls/site.crt".to_string(),
        ..Default::default()
    };
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(persisted(config.clone()));

    form.mount(&mut ctx);

    assert_eq!(ctx.deploy_writes(), 0);
    assert_eq!(ctx.deploy().config, config);
    assert_eq!(error_fields(ctx.errors()), vec!["keyPath"]);
}

#[test]
fn test_mount_settles_extension_of_persisted_record() {
    let mut config = DeploymentConfig {
        format: Some(CertFormat::Pfx),
        cert_path: "/srv/tls/site.crt".to_string(),
        ..Default::default()
    };
    config.pfx.password = "secret".to_string();

    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(persisted(config));
    form.mount(&mut ctx);

    assert_eq!(ctx.deploy_writes(), 1);
    assert_eq!(ctx.deploy().config.cert_path, "/srv/tls/site.pfx");
    assert_eq!(ctx.deploy().id.as_deref(), Some("rec-1"));
}

#[test]
fn test_mount_clears_previous_errors() {
    let mut stale = ErrorMap::new();
    stale.set("name", Some("name is required".to_string()));

    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default()).with_errors(stale);
    form.mount(&mut ctx);

    assert!(!ctx.errors().contains_key("name"));
}

#[test]
fn test_cleared_key_path_is_only_error() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    let report = form.handle(&mut ctx, FormEvent::edit(ConfigField::KeyPath, ""));

    assert!(!report.is_valid());
    assert_eq!(error_fields(ctx.errors()), vec!["keyPath"]);
    assert_eq!(ctx.errors().get("keyPath"), Some("private key file path is required"));
}

#[test]
fn test_jks_with_empty_fields_has_three_errors() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    form.handle(&mut ctx, FormEvent::SelectFormat(Some(CertFormat::Jks)));

    let mut fields = error_fields(ctx.errors());
    fields.sort_unstable();
    assert_eq!(fields, vec!["jksAlias", "jksKeypass", "jksStorepass"]);
    assert_eq!(ctx.errors().get("keyPath"), None);
    assert_eq!(ctx.errors().get("pfxPassword"), None);
}

#[test]
fn test_passing_field_clears_its_error() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    form.handle(&mut ctx, FormEvent::edit(ConfigField::CertPath, "   "));
    assert!(ctx.errors().get("certPath").is_some());

    form.handle(&mut ctx, FormEvent::edit(ConfigField::CertPath, "  /etc/ssl/a.crt  "));
    assert_eq!(ctx.deploy().config.cert_path, "/etc/ssl/a.crt");
    assert_eq!(ctx.errors().get("certPath"), None);
    assert!(ctx.errors().contains_key("certPath"));
}

#[test]
fn test_switching_back_restores_values() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    let report = form.handle_all(
        &mut ctx,
        [
            FormEvent::SelectFormat(Some(CertFormat::Pfx)),
            FormEvent::edit(ConfigField::PfxPassword, " hunter2 "),
            FormEvent::SelectFormat(Some(CertFormat::Pem)),
            FormEvent::SelectFormat(Some(CertFormat::Pfx)),
        ],
    );

    assert!(report.is_valid());
    assert_eq!(ctx.deploy().config.pfx.password, "hunter2");
    assert_eq!(ctx.deploy().config.pem.key_path, "/etc/nginx/ssl/nginx.key");
}

#[test]
fn test_publish_preserves_foreign_errors() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    let mut errors = ctx.errors().clone();
    errors.set("name", Some("name is required".to_string()));
    ctx.set_errors(errors);

    form.handle(&mut ctx, FormEvent::edit(ConfigField::Command, "sudo systemctl reload nginx\n"));

    assert_eq!(ctx.errors().get("name"), Some("name is required"));
    assert_eq!(ctx.deploy().config.command, "sudo systemctl reload nginx\n");
}

#[test]
fn test_unselected_format_is_representable() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);

    form.handle(&mut ctx, FormEvent::edit(ConfigField::Format, "p7b"));

    assert_eq!(ctx.deploy().config.format, None);
    assert_eq!(ctx.deploy().config.cert_path, "/etc/nginx/ssl/nginx.crt");
    assert_eq!(error_fields(ctx.errors()), vec!["format"]);
}

#[test]
fn test_edits_never_touch_host_snapshot_in_place() {
    let form = SshDeployForm::default();
    let mut ctx = MemoryContext::new(DeployRecord::default());
    form.mount(&mut ctx);
    let before = ctx.deploy().clone();

    form.handle(&mut ctx, FormEvent::edit(ConfigField::JksAlias, "tomcat"));

    assert_eq!(before.config.jks.alias, "");
    assert_eq!(ctx.deploy().config.jks.alias, "tomcat");
    assert_eq!(ctx.deploy_writes(), 2);
}

#[test]
fn test_custom_defaults_and_path_limit() {
    let mut options = FormOptions::default();
    options.defaults.command = "sudo systemctl reload haproxy".to_string();
    options.max_path_len = 16;

    let form = SshDeployForm::new(options);
    let mut ctx = MemoryContext::new(DeployRecord::default());
    let report = form.mount(&mut ctx);

    assert_eq!(ctx.deploy().config.command, "sudo systemctl reload haproxy");
    assert!(!report.is_valid());
    assert_eq!(
        ctx.errors().get("certPath"),
        Some("certificate file path must be at most 16 characters")
    );
}
