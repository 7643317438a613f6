//! Integration tests for configuration loading and precedence.

use std::io::Write;

use clap::Parser;
use tempfile::Builder;

use mystrom_exporter::cli::Args;
use mystrom_exporter::config::{load_config, resolve_config, DEFAULT_BIND_ADDR, DEFAULT_PORT};

fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new()
        .prefix("mystrom-exporter-test")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_yaml_config() {
    let file = write_config(
        ".yaml",
        "port: 9000\nbind: 127.0.0.1\ncollect-timeout-secs: 3\n",
    );

    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.port, Some(9000));
    assert_eq!(config.bind.as_deref(), Some("127.0.0.1"));
    assert_eq!(config.collect_timeout_secs, Some(3));
}

#[test]
fn test_load_json_config() {
    let file = write_config(".json", r#"{"port": 9001, "enable_health": false}"#);

    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.port, Some(9001));
    assert_eq!(config.enable_health, Some(false));
}

#[test]
fn test_load_toml_config() {
    let file = write_config(".toml", "port = 9002\nlog_level = \"debug\"\n");

    let config = load_config(file.path().to_str()).unwrap();
    assert_eq!(config.port, Some(9002));
    assert_eq!(config.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/mystrom-exporter.yaml")).unwrap();
    assert_eq!(config.port, Some(DEFAULT_PORT));
    assert_eq!(config.bind.as_deref(), Some(DEFAULT_BIND_ADDR));
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let file = write_config(".yaml", "port: [not, a, port\n");
    assert!(load_config(file.path().to_str()).is_err());
}

#[test]
fn test_cli_overrides_config_file() {
    let file = write_config(".yaml", "port: 9000\nbind: 10.0.0.1\n");

    let args = Args::parse_from([
        "mystrom-exporter",
        "--config",
        file.path().to_str().unwrap(),
        "--port",
        "9100",
    ]);

    let config = resolve_config(&args).unwrap();
    // CLI wins for port, file wins for bind.
    assert_eq!(config.port, Some(9100));
    assert_eq!(config.bind.as_deref(), Some("10.0.0.1"));
}

#[test]
fn test_file_values_survive_when_cli_is_silent() {
    let file = write_config(".yaml", "collect-timeout-secs: 7\n");

    let args = Args::parse_from([
        "mystrom-exporter",
        "--config",
        file.path().to_str().unwrap(),
    ]);

    let config = resolve_config(&args).unwrap();
    assert_eq!(config.collect_timeout_secs, Some(7));
}
