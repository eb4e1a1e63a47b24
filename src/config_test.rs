use super::*;

#[test]
fn defaults_match_deployed_site() {
    let config = ToggleConfig::default();
    assert_eq!(config.read_key, "darkmode");
    assert_eq!(config.write_key, "darkMode");
    assert_eq!(config.ttl_days, 365);
    assert_eq!(config.header_selector, ".header-article__right");
    assert_eq!(config.label, "Toggle dark mode");
    assert_eq!(config.icon_class, "fas fa-moon");
}

#[test]
fn default_keys_differ_in_case() {
    assert!(!ToggleConfig::default().keys_match());
}

#[test]
fn empty_object_yields_defaults() {
    let config = ToggleConfig::from_json("{}");
    assert!(matches!(config, Ok(ref c) if *c == ToggleConfig::default()));
}

#[test]
fn partial_object_overrides_only_given_fields() {
    let Ok(config) = ToggleConfig::from_json(r#"{"read_key":"darkMode","ttl_days":30}"#) else {
        panic!("expected valid config");
    };
    assert_eq!(config.read_key, "darkMode");
    assert_eq!(config.ttl_days, 30);
    assert_eq!(config.write_key, "darkMode");
    assert!(config.keys_match());
    assert_eq!(config.header_selector, ".header-article__right");
}

#[test]
fn unknown_field_is_rejected() {
    let result = ToggleConfig::from_json(r#"{"readKey":"x"}"#);
    assert!(matches!(result, Err(ToggleError::Config(_))));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(ToggleConfig::from_json("{"), Err(ToggleError::Config(_))));
    assert!(matches!(ToggleConfig::from_json(r#"{"ttl_days":-1}"#), Err(ToggleError::Config(_))));
}
