//! 配置加载集成测试

use std::io::Write;

use petalshop::config::StaticConfig;
use petalshop::context::AppContext;
use petalshop::errors::ShopError;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("创建临时配置文件失败");
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
[server]
host = "0.0.0.0"
port = 9090
cpu_count = 2
base_url = "https://flowers.example.com"

[logging]
level = "debug"
format = "json"
enable_rotation = false

[shop]
default_customer_id = 101
"#,
    );

    let config = StaticConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.server.cpu_count, 2);
    assert_eq!(config.base_url(), "https://flowers.example.com/");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
    assert!(!config.logging.enable_rotation);
    assert_eq!(config.shop.default_customer_id, 101);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[server]\nport = 5000\n");

    let config = StaticConfig::load(Some(file.path())).unwrap();
    let defaults = StaticConfig::default();

    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.host, defaults.server.host);
    assert_eq!(config.logging, defaults.logging);
    assert_eq!(config.shop.default_customer_id, 102);
    assert_eq!(config.base_url(), "http://127.0.0.1:5000/");
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let result = StaticConfig::load(Some(&missing));
    assert!(matches!(result, Err(ShopError::Config(_))));
}

#[test]
fn test_invalid_values_are_rejected() {
    let file = write_config("[logging]\nformat = \"yaml\"\n");

    let result = StaticConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ShopError::Config(_))));
}

#[test]
fn test_unknown_default_customer_is_rejected_on_load() {
    let file = write_config("[shop]\ndefault_customer_id = 999\n");

    let result = StaticConfig::load(Some(file.path()));
    assert!(matches!(result, Err(ShopError::Config(msg)) if msg.contains("999")));
}

#[test]
fn test_unknown_default_customer_fails_context() {
    let mut config = StaticConfig::default();
    config.shop.default_customer_id = 999;

    let result = AppContext::from_config(&config);
    assert!(matches!(result, Err(ShopError::Config(_))));
}

#[test]
fn test_saved_sample_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("petalshop.toml");

    StaticConfig::default().save_to_file(&path).unwrap();
    let loaded = StaticConfig::load(Some(&path)).unwrap();

    assert_eq!(loaded, StaticConfig::default());
}
