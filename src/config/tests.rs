//! Tests for the config module.

use super::*;
use crate::error::IniError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = ParseConfig::default();

    assert_eq!(config.section_policy, SectionDuplicatePolicy::Error);
    assert_eq!(config.key_policy, KeyDuplicatePolicy::Error);
    assert_eq!(config.whitespace_policy, WhitespacePolicy::Trim);
    assert!(config.has_flag(LoadFlag::CaseSensitive));
    assert!(!config.has_flag(LoadFlag::AllowNoSection));
    assert!(!config.has_flag(LoadFlag::AllowNoKey));
    assert!(!config.has_flag(LoadFlag::AllowNoValue));
}

#[test]
fn test_load_flags_from_iter_contains_exactly_given_flags() {
    let flags: LoadFlags = [LoadFlag::AllowNoSection, LoadFlag::AllowNoValue]
        .into_iter()
        .collect();

    assert!(!flags.contains(LoadFlag::CaseSensitive));
    assert!(flags.contains(LoadFlag::AllowNoSection));
    assert!(!flags.contains(LoadFlag::AllowNoKey));
    assert!(flags.contains(LoadFlag::AllowNoValue));
}

#[test]
fn test_load_flags_insert_and_remove() {
    let mut flags = LoadFlags::none();
    flags.insert(LoadFlag::AllowNoKey);
    assert!(flags.contains(LoadFlag::AllowNoKey));

    flags.remove(LoadFlag::AllowNoKey);
    assert_eq!(flags, LoadFlags::none());
}

#[test]
fn test_builder_helpers() {
    let config = ParseConfig::default()
        .with_section_policy(SectionDuplicatePolicy::Merge)
        .with_key_policy(KeyDuplicatePolicy::Overwrite)
        .with_whitespace_policy(WhitespacePolicy::Preserve)
        .without_flag(LoadFlag::CaseSensitive)
        .with_flag(LoadFlag::AllowNoSection);

    assert_eq!(config.section_policy, SectionDuplicatePolicy::Merge);
    assert_eq!(config.key_policy, KeyDuplicatePolicy::Overwrite);
    assert_eq!(config.whitespace_policy, WhitespacePolicy::Preserve);
    assert!(!config.has_flag(LoadFlag::CaseSensitive));
    assert!(config.has_flag(LoadFlag::AllowNoSection));
}

#[test]
fn test_policy_from_str() {
    assert_eq!(
        SectionDuplicatePolicy::from_str("ignore"),
        Some(SectionDuplicatePolicy::Ignore)
    );
    assert_eq!(
        KeyDuplicatePolicy::from_str("merge"),
        Some(KeyDuplicatePolicy::Merge)
    );
    assert_eq!(
        WhitespacePolicy::from_str("preserve"),
        Some(WhitespacePolicy::Preserve)
    );
    assert_eq!(KeyDuplicatePolicy::from_str("Merge"), None);
    assert_eq!(SectionDuplicatePolicy::from_str("throw_error"), None);
}

#[test]
fn test_parse_partial_yaml_uses_defaults() {
    let config = ParseConfig::from_yaml("key_policy: merge").unwrap();

    assert_eq!(config.key_policy, KeyDuplicatePolicy::Merge);
    assert_eq!(config.section_policy, SectionDuplicatePolicy::Error);
    assert!(config.has_flag(LoadFlag::CaseSensitive));
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
section_policy: ignore
key_policy: overwrite
whitespace_policy: preserve
load_flags:
  case_sensitive: false
  allow_no_section: true
  allow_no_key: true
  allow_no_value: true
"#;
    let config = ParseConfig::from_yaml(yaml).unwrap();

    assert_eq!(config.section_policy, SectionDuplicatePolicy::Ignore);
    assert_eq!(config.key_policy, KeyDuplicatePolicy::Overwrite);
    assert_eq!(config.whitespace_policy, WhitespacePolicy::Preserve);
    assert!(!config.has_flag(LoadFlag::CaseSensitive));
    assert!(config.has_flag(LoadFlag::AllowNoSection));
    assert!(config.has_flag(LoadFlag::AllowNoKey));
    assert!(config.has_flag(LoadFlag::AllowNoValue));
}

#[test]
fn test_partial_load_flags_keep_case_sensitive_default() {
    let config = ParseConfig::from_yaml("load_flags:\n  allow_no_value: true\n").unwrap();

    assert!(config.has_flag(LoadFlag::CaseSensitive));
    assert!(config.has_flag(LoadFlag::AllowNoValue));
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(ParseConfig::from_yaml("").unwrap(), ParseConfig::default());
    assert_eq!(ParseConfig::from_yaml("\n  \n").unwrap(), ParseConfig::default());
}

#[test]
fn test_unknown_policy_is_user_error() {
    let result = ParseConfig::from_yaml("section_policy: replace");
    assert!(matches!(result, Err(IniError::UserError(_))));
}

#[test]
fn test_yaml_roundtrip() {
    let config = ParseConfig::default()
        .with_key_policy(KeyDuplicatePolicy::Ignore)
        .with_flag(LoadFlag::AllowNoKey);

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("key_policy: ignore"));

    let reparsed = ParseConfig::from_yaml(&yaml).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("policy.yaml");
    std::fs::write(&path, "whitespace_policy: preserve\n").unwrap();

    let config = ParseConfig::load(&path).unwrap();
    assert_eq!(config.whitespace_policy, WhitespacePolicy::Preserve);
}

#[test]
fn test_load_missing_file_is_file_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = ParseConfig::load(temp_dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(IniError::FileError(_))));
}
