use confit::config::{SubstitutionMode, TemplateFile, TemplateSet};
use confit::error::ConfitError;
use confit::placeholders::{build_placeholders, VariantValues};

fn example_set() -> TemplateSet {
    TemplateSet {
        description: None,
        files: vec![TemplateFile { source: "a.sample".into(), destination: "a".into() }],
        placeholders: [
            ("{ServiceUrl}".to_string(), "baseurl".to_string()),
            ("{ClientId}".to_string(), "clientid".to_string()),
        ]
        .into_iter()
        .collect(),
        trim_trailing_slash: vec!["baseurl".to_string()],
        substitution: SubstitutionMode::Sequential,
    }
}

fn example_values() -> VariantValues {
    [
        ("baseurl".to_string(), "https://api.example.com/".to_string()),
        ("clientid".to_string(), "abc123".to_string()),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_build_placeholders_maps_tokens_to_values() {
    let placeholders = build_placeholders(&example_set(), &example_values()).unwrap();

    assert_eq!(placeholders["{ServiceUrl}"], "https://api.example.com");
    assert_eq!(placeholders["{ClientId}"], "abc123");
}

#[test]
fn test_build_placeholders_keeps_binding_order() {
    let placeholders = build_placeholders(&example_set(), &example_values()).unwrap();

    let tokens: Vec<&String> = placeholders.keys().collect();
    assert_eq!(tokens, ["{ServiceUrl}", "{ClientId}"]);
}

#[test]
fn test_trim_strips_every_trailing_slash() {
    let mut values = example_values();
    values.insert("baseurl".to_string(), "https://api.example.com///".to_string());

    let placeholders = build_placeholders(&example_set(), &values).unwrap();
    assert_eq!(placeholders["{ServiceUrl}"], "https://api.example.com");
}

#[test]
fn test_trim_applies_only_to_listed_values() {
    let mut values = example_values();
    values.insert("clientid".to_string(), "abc123/".to_string());

    let placeholders = build_placeholders(&example_set(), &values).unwrap();
    assert_eq!(placeholders["{ClientId}"], "abc123/");
}

#[test]
fn test_unknown_value_name_rejected() {
    let mut set = example_set();
    set.placeholders.insert("{TenantId}".to_string(), "tenantid".to_string());

    match build_placeholders(&set, &example_values()) {
        Err(ConfitError::ConfigError(message)) => {
            assert!(message.contains("{TenantId}"));
            assert!(message.contains("tenantid"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_trim_naming_unknown_value_rejected() {
    let mut set = example_set();
    set.trim_trailing_slash.push("tenantid".to_string());

    match build_placeholders(&set, &example_values()) {
        Err(ConfitError::ConfigError(message)) => {
            assert!(message.contains("trim_trailing_slash"));
            assert!(message.contains("tenantid"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_empty_bindings_yield_empty_map() {
    let mut set = example_set();
    set.placeholders.clear();

    let placeholders = build_placeholders(&set, &example_values()).unwrap();
    assert!(placeholders.is_empty());
}
