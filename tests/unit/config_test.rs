//! Tests for configuration validation

use parking_allocator::config::EngineConfig;

#[test]
fn test_engine_config_validation() {
    assert!(EngineConfig::new(3, 20).validate().is_ok());
}

#[test]
fn test_engine_config_invalid_level_count() {
    assert!(EngineConfig::new(0, 20).validate().is_err());
}

#[test]
fn test_engine_config_invalid_slots_per_level() {
    assert!(EngineConfig::new(3, 0).validate().is_err());
}

#[test]
fn test_engine_config_from_json() {
    let json = r#"{
        "level_count": 2,
        "slots_per_level": 30
    }"#;

    let config = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(config, EngineConfig::new(2, 30));
}

#[test]
fn test_engine_config_from_json_rejects_zero() {
    let json = r#"{ "level_count": 0, "slots_per_level": 30 }"#;
    assert!(EngineConfig::from_json_str(json).is_err());
}

#[test]
fn test_engine_config_from_json_rejects_garbage() {
    assert!(EngineConfig::from_json_str("{ level_count: two }").is_err());
    assert!(EngineConfig::from_json_str(r#"{ "level_count": -1, "slots_per_level": 3 }"#).is_err());
}

#[test]
fn test_engine_config_from_env() {
    std::env::set_var("PARKING_LEVEL_COUNT", "4");
    std::env::set_var("PARKING_SLOTS_PER_LEVEL", " 25 ");
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::new(4, 25));
}

#[test]
fn test_engine_config_missing_env_file_is_tolerated() {
    std::env::set_var("PARKING_LEVEL_COUNT", "4");
    std::env::set_var("PARKING_SLOTS_PER_LEVEL", " 25 ");
    let path = std::env::temp_dir().join("parking-allocator-no-such-file.env");
    let config = EngineConfig::from_env_file(&path).unwrap();
    assert_eq!(config, EngineConfig::new(4, 25));
}

#[test]
fn test_engine_config_malformed_env_file_is_an_error() {
    let path = std::env::temp_dir().join(format!(
        "parking-allocator-malformed-{}.env",
        std::process::id()
    ));
    std::fs::write(&path, "this line has no equals sign\n").unwrap();

    let err = EngineConfig::from_env_file(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(err.to_string().contains("failed to load"), "{err}");
}
