use ems_dashboard::{AppError, Config};
use serial_test::serial;
use std::time::Duration;

#[test]
#[serial]
fn test_example_config_loads() {
    std::env::remove_var("API_URL");

    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("config/config.example.yaml");
    let config = Config::load(&path).unwrap();

    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_config_loading_from_yaml() {
    std::env::remove_var("API_URL");

    let config_str = r#"
api:
  base_url: "http://ems-api:8000/"
  request_timeout_ms: 800

dashboard:
  poll_interval_ms: 500
"#;

    let temp_file =
        std::env::temp_dir().join(format!("test-config-ems-dashboard-{}.yaml", std::process::id()));
    std::fs::write(&temp_file, config_str).unwrap();

    let config = Config::load(&temp_file).unwrap();

    assert_eq!(config.api.base_url, "http://ems-api:8000");
    assert_eq!(config.request_timeout(), Duration::from_millis(800));
    assert_eq!(config.poll_interval(), Duration::from_millis(500));

    std::fs::remove_file(&temp_file).ok();
}

#[test]
#[serial]
fn test_missing_config_file_is_io_error() {
    let result = Config::load("/nonexistent/ems-dashboard.yaml");

    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
#[serial]
fn test_invalid_yaml_is_yaml_error() {
    let result = Config::from_yaml("api: [unclosed");

    assert!(matches!(result, Err(AppError::Yaml(_))));
}
