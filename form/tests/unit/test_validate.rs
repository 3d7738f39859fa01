//! Validator property tests

use proptest::prelude::*;
use sshdeploy_form::form::validate::{check, validate, MAX_PATH_LEN};
use sshdeploy_form::models::config::{
    CertFormat, ConfigField, DeploymentConfig, JksFields, PemFields, PfxFields,
};

fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "[a-z/._ ]{1,20}",
        "[a-z]{250,260}",
    ]
}

fn format() -> impl Strategy<Value = Option<CertFormat>> {
    prop_oneof![
        Just(None),
        Just(Some(CertFormat::Pem)),
        Just(Some(CertFormat::Pfx)),
        Just(Some(CertFormat::Jks)),
    ]
}

prop_compose! {
    fn config()(
        format in format(),
        cert_path in text(),
        key_path in text(),
        password in text(),
        alias in text(),
        keypass in text(),
        storepass in text(),
        pre_command in text(),
        command in text(),
    ) -> DeploymentConfig {
        DeploymentConfig {
            format,
            cert_path,
            pem: PemFields { key_path },
            pfx: PfxFields { password },
            jks: JksFields { alias, keypass, storepass },
            pre_command,
            command,
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

proptest! {
    #[test]
    fn key_path_required_only_for_pem(config in config()) {
        let errors = validate(&config);
        let too_long = config.pem.key_path.chars().count() > MAX_PATH_LEN;
        let expect_error = too_long || (config.format == Some(CertFormat::Pem) && blank(&config.pem.key_path));
        prop_assert_eq!(errors.get("keyPath").is_some(), expect_error);
    }

    #[test]
    fn pfx_password_required_only_for_pfx(config in config()) {
        let errors = validate(&config);
        let expect_error = config.format == Some(CertFormat::Pfx) && blank(&config.pfx.password);
        prop_assert_eq!(errors.get("pfxPassword").is_some(), expect_error);
    }

    #[test]
    fn jks_fields_required_only_for_jks(config in config()) {
        let errors = validate(&config);
        let jks = config.format == Some(CertFormat::Jks);
        prop_assert_eq!(errors.get("jksAlias").is_some(), jks && blank(&config.jks.alias));
        prop_assert_eq!(errors.get("jksKeypass").is_some(), jks && blank(&config.jks.keypass));
        prop_assert_eq!(errors.get("jksStorepass").is_some(), jks && blank(&config.jks.storepass));
    }

    #[test]
    fn commands_always_valid(config in config()) {
        let errors = validate(&config);
        prop_assert!(errors.contains_key("preCommand"));
        prop_assert!(errors.contains_key("command"));
        prop_assert_eq!(errors.get("preCommand"), None);
        prop_assert_eq!(errors.get("command"), None);
    }

    #[test]
    fn one_entry_per_field(config in config()) {
        let errors = validate(&config);
        prop_assert_eq!(errors.len(), ConfigField::ALL.len());
        for field in ConfigField::ALL {
            prop_assert!(errors.contains_key(field.as_str()));
        }
    }

    #[test]
    fn validation_is_idempotent(config in config()) {
        prop_assert_eq!(validate(&config), validate(&config));
        prop_assert_eq!(check(&config, MAX_PATH_LEN), check(&config, MAX_PATH_LEN));
    }
}

#[test]
fn test_unselected_format_reported() {
    let config = DeploymentConfig {
        cert_path: "/etc/ssl/a.crt".to_string(),
        ..Default::default()
    };
    let errors = validate(&config);
    assert_eq!(errors.get("format"), Some("format required"));
    assert_eq!(errors.error_count(), 1);
}

#[test]
fn test_cert_path_too_long() {
    let config = DeploymentConfig {
        format: Some(CertFormat::Pfx),
        cert_path: format!("/{}.pfx", "a".repeat(MAX_PATH_LEN)),
        pfx: PfxFields {
            password: "secret".to_string(),
        },
        ..Default::default()
    };
    let errors = validate(&config);
    assert_eq!(
        errors.get("certPath"),
        Some("certificate file path must be at most 255 characters")
    );
    assert_eq!(errors.error_count(), 1);
}
