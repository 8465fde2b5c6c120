use super::*;

#[test]
fn empty_file_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.cpd.language, Language::Java);
    assert_eq!(config.cpd.minimum_tokens, 100);
    assert_eq!(config.cpd.branch, "master");
    assert_eq!(config.cpd.staging_dir, "target-branch");
    assert!(config.cpd.folder.is_none());
    assert!(config.cpd.repository.is_none());
}

#[test]
fn parses_full_cpd_section() {
    let content = r#"
[cpd]
language = "ecmascript"
minimum_tokens = 500
folder = "App"
repository = "indigotech/danger"
branch = "release-1.0.0"
unique_staging = true
keep_staging = true
"#;
    let config: Config = toml::from_str(content).unwrap();
    assert_eq!(config.cpd.language, Language::Ecmascript);
    assert_eq!(config.cpd.minimum_tokens, 500);
    assert_eq!(config.cpd.folder.as_deref(), Some("App"));
    assert_eq!(config.cpd.repository.as_deref(), Some("indigotech/danger"));
    assert_eq!(config.cpd.branch, "release-1.0.0");
    assert!(config.cpd.unique_staging);
    assert!(config.cpd.keep_staging);
}

#[test]
fn parses_checks_section() {
    let content = r#"
[checks]
exclude = ["duplication"]
"#;
    let config: Config = toml::from_str(content).unwrap();
    assert!(config.checks.only.is_empty());
    assert_eq!(config.checks.exclude, vec![CheckId::Duplication]);
}

#[test]
fn rejects_unknown_keys() {
    let content = r#"
[cpd]
minimum_token = 50
"#;
    assert!(toml::from_str::<Config>(content).is_err());
}

#[test]
fn rejects_unknown_check_id() {
    let content = r#"
[checks]
only = ["complexity"]
"#;
    assert!(toml::from_str::<Config>(content).is_err());
}

#[test]
fn serializing_skips_unset_optionals() {
    let out = toml::to_string(&Config::default()).unwrap();
    assert!(!out.contains("folder"));
    assert!(!out.contains("repository"));
    assert!(out.contains("branch = \"master\""));
}
