//! Configuration loading against the real process environment and config files
//!
//! Uses serial_test because these tests set QUILL_* environment variables.

use quill_common::config::{Module, ServiceArgs, ServiceConfig, CONFIG_PATH_ENV};
use quill_common::Error;
use serial_test::serial;
use std::env;
use std::io::Write;

const TOUCHED_VARS: &[&str] = &[
    CONFIG_PATH_ENV,
    "QUILL_POSTS_PORT",
    "QUILL_POSTS_HOST",
    "QUILL_POSTS_DATABASE",
    "QUILL_USER_SERVICE_URL",
    "QUILL_MODEL_NAME",
];

fn clear_env() {
    for var in TOUCHED_VARS {
        env::remove_var(var);
    }
}

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_config_file_from_cli_flag() {
    clear_env();
    let file = write_config(
        r#"
        [posts]
        port = 7082
        database = "/tmp/quill-posts.db"

        [peers]
        user_service = "http://users.internal:8081"

        [model]
        name = "mistral"
        "#,
    );

    let args = ServiceArgs {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let config = ServiceConfig::load(Module::Posts, &args).unwrap();

    assert_eq!(config.port, 7082);
    assert_eq!(config.database.as_deref(), Some(std::path::Path::new("/tmp/quill-posts.db")));
    assert_eq!(config.peers.user_service, "http://users.internal:8081");
    assert_eq!(config.model.name, "mistral");
}

#[test]
#[serial]
fn test_config_file_from_env_and_env_overrides() {
    clear_env();
    let file = write_config(
        r#"
        [posts]
        port = 7082
        host = "0.0.0.0"
        "#,
    );
    env::set_var(CONFIG_PATH_ENV, file.path());
    env::set_var("QUILL_POSTS_PORT", "7999");

    let config = ServiceConfig::load(Module::Posts, &ServiceArgs::default()).unwrap();
    clear_env();

    assert_eq!(config.port, 7999);
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
#[serial]
fn test_malformed_config_file_is_error() {
    clear_env();
    let file = write_config("[posts\nport = ");

    let args = ServiceArgs {
        config: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    let result = ServiceConfig::load(Module::Posts, &args);

    assert!(matches!(result, Err(Error::ConfigParse { .. })));
}

#[test]
#[serial]
fn test_missing_explicit_config_file_is_io_error() {
    clear_env();
    let args = ServiceArgs {
        config: Some("/nonexistent/quill/config.toml".into()),
        ..Default::default()
    };

    assert!(matches!(
        ServiceConfig::load(Module::Users, &args),
        Err(Error::Io(_))
    ));
}
