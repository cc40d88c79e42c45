//! Format parser tests.
//!
//! Responsibilities:
//! - Test decoding of each registered format into a flat mapping.
//! - Test shape validation (top-level mapping, scalar values).
//! - Test `ConfigFormat` identifiers and registration order.

use crate::loader::error::ConfigError;
use crate::loader::format::{ConfigFormat, NOT_A_MAPPING, SUPPORTED_FORMATS};

#[test]
fn test_registration_order_is_toml_json_yaml() {
    assert_eq!(
        SUPPORTED_FORMATS,
        [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml]
    );
    assert_eq!(ConfigFormat::Toml.file_name(), "slim-console.config.toml");
    assert_eq!(ConfigFormat::Json.file_name(), "slim-console.config.json");
    assert_eq!(ConfigFormat::Yaml.file_name(), "slim-console.config.yaml");
}

#[test]
fn test_format_from_str() {
    assert_eq!("toml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Toml);
    assert_eq!(" JSON ".parse::<ConfigFormat>().unwrap(), ConfigFormat::Json);
    assert_eq!("yml".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);

    let err = "php".parse::<ConfigFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref f) if f == "php"));
    assert_eq!(err.to_string(), "Invalid configuration format `php`");
}

#[test]
fn test_parse_toml() {
    let map = ConfigFormat::Toml
        .parse("name = \"App\"\ncommandsDir = \"app/console\"\n")
        .unwrap();
    assert_eq!(map["name"], "App");
    assert_eq!(map["commandsDir"], "app/console");
    assert_eq!(map.len(), 2);
}

#[test]
fn test_parse_json() {
    let map = ConfigFormat::Json
        .parse(r#"{"name": "App", "commandsDir": "app/console"}"#)
        .unwrap();
    assert_eq!(map["name"], "App");
    assert_eq!(map["commandsDir"], "app/console");
}

#[test]
fn test_parse_yaml() {
    let map = ConfigFormat::Yaml
        .parse("name: App\ncommandsDir: app/console\n")
        .unwrap();
    assert_eq!(map["name"], "App");
    assert_eq!(map["commandsDir"], "app/console");
}

#[test]
fn test_scalar_values_are_stringified_and_null_is_omitted() {
    let map = ConfigFormat::Json
        .parse(r#"{"name": 42, "indexDir": true, "sourceDir": null}"#)
        .unwrap();
    assert_eq!(map["name"], "42");
    assert_eq!(map["indexDir"], "true");
    assert!(!map.contains_key("sourceDir"));
}

#[test]
fn test_json_scalar_top_level_is_not_a_mapping() {
    let err = ConfigFormat::Json.parse(r#""not-an-object""#).unwrap_err();
    match err {
        ConfigError::InvalidFormat { format, reason } => {
            assert_eq!(format, ConfigFormat::Json);
            assert_eq!(reason, NOT_A_MAPPING);
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_json_array_top_level_is_not_a_mapping() {
    let err = ConfigFormat::Json.parse(r#"["name", "App"]"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFormat { ref reason, .. } if reason == NOT_A_MAPPING));
}

#[test]
fn test_yaml_scalar_top_level_is_not_a_mapping() {
    let err = ConfigFormat::Yaml.parse("not-an-object\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFormat { ref reason, .. } if reason == NOT_A_MAPPING));
}

#[test]
fn test_malformed_json_carries_decoder_message() {
    let contents = r#"{"name": "App",}"#;
    let decoder_message = serde_json::from_str::<serde_json::Value>(contents)
        .unwrap_err()
        .to_string();

    let err = ConfigFormat::Json.parse(contents).unwrap_err();

    let ConfigError::InvalidFormat { reason, .. } = &err else {
        panic!("expected InvalidFormat, got {err:?}");
    };
    assert!(
        reason.contains(&decoder_message),
        "{reason:?} should contain {decoder_message:?}"
    );
    assert!(err.to_string().contains("(json)"));
}

#[test]
fn test_malformed_toml_is_invalid_format() {
    let err = ConfigFormat::Toml.parse("name = \n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidFormat {
            format: ConfigFormat::Toml,
            ..
        }
    ));
}

#[test]
fn test_nested_values_are_rejected() {
    let err = ConfigFormat::Toml
        .parse("[commandsDir]\npath = \"app\"\n")
        .unwrap_err();
    let ConfigError::InvalidFormat { reason, .. } = err else {
        panic!("expected InvalidFormat");
    };
    assert!(reason.contains("commandsDir"));

    let err = ConfigFormat::Json
        .parse(r#"{"sourceDir": ["src", "lib"]}"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidFormat { .. }));
}

#[test]
fn test_toml_non_finite_floats_and_datetimes_are_kept() {
    let contents = "name = nan\n\
                    indexDir = inf\n\
                    sourceDir = -inf\n\
                    bootstrapDir = 1979-05-27\n\
                    indexFile = 2.5\n";
    let map = ConfigFormat::Toml.parse(contents).unwrap();
    assert_eq!(map["name"], "NaN");
    assert_eq!(map["indexDir"], "inf");
    assert_eq!(map["sourceDir"], "-inf");
    assert_eq!(map["bootstrapDir"], "1979-05-27");
    assert_eq!(map["indexFile"], "2.5");
}

#[test]
fn test_yaml_non_finite_floats_are_kept() {
    let map = ConfigFormat::Yaml
        .parse("name: .nan\nindexDir: .inf\nsourceDir: ~\ncommandsDir: 3\n")
        .unwrap();
    assert!(map["name"].eq_ignore_ascii_case("nan"), "{:?}", map["name"]);
    assert!(map["indexDir"].to_ascii_lowercase().contains("inf"), "{:?}", map["indexDir"]);
    assert_eq!(map["commandsDir"], "3");
    // Only an explicit null is treated as omitted.
    assert!(!map.contains_key("sourceDir"));
}

#[test]
fn test_yaml_non_string_keys_are_rejected() {
    let err = ConfigFormat::Yaml.parse("1: App\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidFormat {
            format: ConfigFormat::Yaml,
            ..
        }
    ));
}
