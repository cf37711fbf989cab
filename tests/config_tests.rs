//! Configuration loading tests

use refer_earn::{
    config::{Config, DEFAULT_API_BASE_URL},
    error::AppError,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_load_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("refer-earn.toml");
    tokio::fs::write(
        &path,
        r#"
[api]
base_url = "https://referrals.example.com"

[ui]
auto_close_ms = 1500
"#,
    )
    .await
    .unwrap();

    let config = Config::load_from_file(&path).await.unwrap();

    assert_eq!(config.api.base_url, "https://referrals.example.com");
    assert_eq!(config.ui.auto_close_ms, 1500);
    assert_eq!(config.ui.theme, "default");
    assert_eq!(config.api.timeout_ms, 10_000);
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.ui.theme = "dark".to_string();
    config.save_to_file(&path).await.unwrap();

    let loaded = Config::load_from_file(&path).await.unwrap();
    assert_eq!(loaded.ui.theme, "dark");
    assert_eq!(loaded.api.base_url, DEFAULT_API_BASE_URL);
}

#[tokio::test]
async fn test_invalid_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    tokio::fs::write(&path, "[api]\nbase_url = \"localhost\"\n")
        .await
        .unwrap();

    assert!(Config::load(Some(path.as_path())).await.is_err());
}

#[tokio::test]
async fn test_env_override_repairs_file_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("refer-earn.toml");
    tokio::fs::write(&path, "[api]\nbase_url = \"api.example.com\"\n")
        .await
        .unwrap();

    let mut config = Config::load_from_file(&path).await.unwrap();
    assert!(config.validate().is_err());

    config.apply_env_overrides_from(|key| {
        (key == "REFER_EARN_API_URL").then(|| "https://api.example.com".to_string())
    });
    assert!(config.validate().is_ok());
    assert_eq!(config.api.base_url, "https://api.example.com");
}

#[tokio::test]
async fn test_malformed_default_location_is_not_skipped() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().join("refer-earn.toml");
    let user = dir.path().join("config.toml");
    tokio::fs::write(&local, "[api\nbase_url = ").await.unwrap();
    tokio::fs::write(&user, "[api]\nbase_url = \"https://user.example.com\"\n")
        .await
        .unwrap();

    let result = Config::load_from_candidates(&[local, user]).await;

    assert!(matches!(result, Err(AppError::Config { .. })));
}

#[tokio::test]
async fn test_missing_default_locations_fall_through() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("refer-earn.toml");
    let user = dir.path().join("config.toml");
    tokio::fs::write(&user, "[api]\nbase_url = \"https://user.example.com\"\n")
        .await
        .unwrap();

    let config = Config::load_from_candidates(&[missing.clone(), user])
        .await
        .unwrap();
    assert_eq!(config.api.base_url, "https://user.example.com");

    let defaults = Config::load_from_candidates(&[missing]).await.unwrap();
    assert_eq!(defaults.api.base_url, DEFAULT_API_BASE_URL);
}

#[tokio::test]
async fn test_explicit_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");

    assert!(Config::load(Some(missing.as_path())).await.is_err());
}
