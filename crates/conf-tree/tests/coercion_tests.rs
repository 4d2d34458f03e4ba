//! Tests for typed accessors on ConfigValue

use conf_tree::{Config, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn config() -> Config {
    Config::from_json(
        r#"{
            "count": 42,
            "ratio": 0.75,
            "name": "service",
            "enabled": true,
            "numeric_string": "17",
            "big": 18446744073709551615
        }"#,
    )
    .unwrap()
}

#[test]
fn test_silent_accessors() {
    let config = config();
    assert_eq!(config.get("count").int(), 42);
    assert_eq!(config.get("ratio").float(), 0.75);
    assert_eq!(config.get("name").string(), "service");
    assert!(config.get("enabled").bool());
}

#[test]
fn test_silent_accessors_on_mismatch_return_zero() {
    let config = config();
    assert_eq!(config.get("name").int(), 0);
    assert_eq!(config.get("count").string(), "");
    assert_eq!(config.get("enabled").float(), 0.0);
    assert!(!config.get("count").bool());
    assert_eq!(config.get("numeric_string").int(), 0);
}

#[test]
fn test_int_out_of_range_is_mismatch() {
    let config = config();
    assert_eq!(config.get("big").int(), 0);
    assert!(matches!(
        config.get("big").must_int(),
        Err(Error::TypeMismatch {
            expected: "int",
            found: "uint"
        })
    ));
    assert_eq!(
        config.get("big").must_int().unwrap_err().to_string(),
        "Value is not int (found uint)"
    );
}

#[test]
fn test_default_accessors() {
    let config = config();
    assert_eq!(config.get("count").def_int(1), 42);
    assert_eq!(config.get("missing").def_int(1), 1);
    assert_eq!(config.get("name").def_int(1), 1);

    assert_eq!(config.get("name").def_string("x"), "service");
    assert_eq!(config.get("count").def_string("x"), "x");

    assert_eq!(config.get("ratio").def_float(1.5), 0.75);
    assert_eq!(config.get("name").def_float(1.5), 1.5);

    assert!(!config.get("missing").def_bool(false));
    assert!(config.get("missing").def_bool(true));
}

#[test]
fn test_must_accessors_success() {
    let config = config();
    assert_eq!(config.get("count").must_int().unwrap(), 42);
    assert_eq!(config.get("ratio").must_float().unwrap(), 0.75);
    assert_eq!(config.get("name").must_string().unwrap(), "service");
    assert!(config.get("enabled").must_bool().unwrap());
}

#[rstest]
#[case("missing", "Value is not set")]
#[case("name", "Value is not int (found string)")]
#[case("ratio", "Value is not int (found float)")]
fn test_must_int_errors(#[case] key: &str, #[case] message: &str) {
    let err = config().get(key).must_int().unwrap_err();
    assert_eq!(err.to_string(), message);
}

#[test]
fn test_must_errors_for_every_type() {
    let config = config();
    assert!(matches!(config.get("nope").must_string(), Err(Error::NotSet)));
    assert!(matches!(config.get("nope").must_float(), Err(Error::NotSet)));
    assert!(matches!(config.get("nope").must_bool(), Err(Error::NotSet)));

    assert!(matches!(
        config.get("count").must_string(),
        Err(Error::TypeMismatch { expected: "string", found: "int" })
    ));
    assert!(matches!(
        config.get("name").must_float(),
        Err(Error::TypeMismatch { expected: "float", found: "string" })
    ));
    assert!(matches!(
        config.get("count").must_bool(),
        Err(Error::TypeMismatch { expected: "bool", found: "int" })
    ));
}

#[test]
fn test_yaml_numbers() {
    let config = Config::from_yaml("retries: 3\ntimeout: 2.5\n").unwrap();
    assert_eq!(config.get("retries").must_int().unwrap(), 3);
    assert_eq!(config.get("retries").float(), 3.0);
    assert_eq!(config.get("timeout").must_float().unwrap(), 2.5);
}
