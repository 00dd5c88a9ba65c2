use super::*;

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn env_map(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn temp_config(contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("predict_client_{nanos}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn empty_environment_uses_defaults() {
    let settings = ClientSettings::from_env_map(env_map(&[])).expect("load");
    assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(settings.request_timeout(), Duration::from_secs(30));
}

#[test]
fn prefixed_variables_override_defaults() {
    let settings = ClientSettings::from_env_map(env_map(&[
        ("PREDICT_SERVER_URL", "http://10.0.0.2:8080"),
        ("PREDICT_REQUEST_TIMEOUT_SECS", "7"),
        ("SERVER_URL", "http://ignored"),
    ]))
    .expect("load");
    assert_eq!(settings.server_url, "http://10.0.0.2:8080");
    assert_eq!(settings.request_timeout(), Duration::from_secs(7));
}

#[test]
fn config_file_is_layered_under_environment() {
    let path = temp_config("server_url = \"http://file-host:9000\"\nrequest_timeout_secs = 12\n");
    let path_text = path.to_string_lossy().into_owned();

    let from_file =
        ClientSettings::from_env_map(env_map(&[("PREDICT_CONFIG", &path_text)])).expect("load");
    assert_eq!(from_file.server_url, "http://file-host:9000");
    assert_eq!(from_file.request_timeout_secs, 12);

    let overridden = ClientSettings::from_env_map(env_map(&[
        ("PREDICT_CONFIG", &path_text),
        ("PREDICT_REQUEST_TIMEOUT_SECS", "3"),
    ]))
    .expect("load");
    assert_eq!(overridden.server_url, "http://file-host:9000");
    assert_eq!(overridden.request_timeout_secs, 3);

    let _ = fs::remove_file(path);
}

#[test]
fn missing_config_file_is_an_error() {
    let result = ClientSettings::from_env_map(env_map(&[(
        "PREDICT_CONFIG",
        "/nonexistent/predict_client_settings.toml",
    )]));
    assert!(result.is_err());
}

#[test]
fn zero_timeout_is_clamped_to_one_second() {
    let settings = ClientSettings {
        request_timeout_secs: 0,
        ..ClientSettings::default()
    };
    assert_eq!(settings.request_timeout(), Duration::from_secs(1));
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let result =
        ClientSettings::from_env_map(env_map(&[("PREDICT_REQUEST_TIMEOUT_SECS", "soon")]));
    assert!(result.is_err());
}
