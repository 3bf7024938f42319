//! Configuration layering tests: defaults, file round-trip, and the
//! engine-facing fields.

use apollo_workflow::ApolloWorkflowConfig;

#[test]
fn test_defaults_are_conservative() {
    let config = ApolloWorkflowConfig::default();
    assert_eq!(config.authorization.default_capability, "apollo_moderate");
    assert_eq!(config.audit.category, "workflow");
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.tracing_enabled);
}

#[test]
fn test_config_round_trips_through_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("apollo-workflow.toml");

    let mut config = ApolloWorkflowConfig::default();
    config.authorization.default_capability = "apollo_review".to_string();
    config.audit.category = "content_lifecycle".to_string();
    config.save_to_file(&path).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: ApolloWorkflowConfig = toml::from_str(&raw).unwrap();
    assert_eq!(parsed.authorization.default_capability, "apollo_review");
    assert_eq!(parsed.audit.category, "content_lifecycle");
    assert_eq!(parsed.observability.log_level, "info");
}

#[test]
fn test_serialized_config_has_expected_sections() {
    let raw = toml::to_string_pretty(&ApolloWorkflowConfig::default()).unwrap();
    assert!(raw.contains("[observability]"));
    assert!(raw.contains("[authorization]"));
    assert!(raw.contains("[audit]"));
}
