//! Command-line behaviour of the pageload binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any config file or environment on the host
fn pageload(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pageload").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("PAGELOAD_BASE_URL")
        .env_remove("PAGELOAD_PATH_PREFIX")
        .env_remove("PAGELOAD_MOUNT_POINT")
        .env_remove("PAGELOAD_VIEW_MODELS");
    cmd
}

#[test]
fn test_view_models_prints_built_ins() {
    let home = TempDir::new().unwrap();

    pageload(&home)
        .arg("view-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"allPagesComponent\""))
        .stdout(predicate::str::contains("\"/about\""))
        .stdout(predicate::str::contains("\"pageTitle\": \"Home\""));
}

#[test]
fn test_view_models_from_file() {
    let home = TempDir::new().unwrap();
    let models = home.path().join("models.json");
    fs::write(
        &models,
        r#"{
            "allPagesComponent": { "pages": [{ "title": "Docs", "url": "/docs" }] },
            "singlePageComponent": { "pageTitle": "Docs", "blocks": [] }
        }"#,
    )
    .unwrap();

    pageload(&home)
        .arg("--view-models")
        .arg(&models)
        .arg("view-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/docs\""))
        .stdout(predicate::str::contains("/about").not());
}

#[test]
fn test_view_models_follow_pageload_json() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("models.json"),
        r#"{
            "allPagesComponent": { "pages": [{ "title": "Docs", "url": "/docs" }] },
            "singlePageComponent": { "pageTitle": "Docs", "blocks": [] }
        }"#,
    )
    .unwrap();
    fs::write(
        home.path().join("pageload.json"),
        r#"{ "base_url": "http://x.local", "view_models": "models.json" }"#,
    )
    .unwrap();

    pageload(&home)
        .arg("view-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/docs\""))
        .stdout(predicate::str::contains("\"pageTitle\": \"Docs\""))
        .stdout(predicate::str::contains("/home").not());
}

#[test]
fn test_view_models_from_environment() {
    let home = TempDir::new().unwrap();
    let models = home.path().join("models.json");
    fs::write(
        &models,
        r#"{
            "allPagesComponent": { "pages": [{ "title": "Blog", "url": "/blog" }] },
            "singlePageComponent": { "pageTitle": "Blog", "blocks": [] }
        }"#,
    )
    .unwrap();

    pageload(&home)
        .env("PAGELOAD_VIEW_MODELS", &models)
        .arg("view-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"/blog\""));
}

#[test]
fn test_config_reads_pageload_json_from_cwd() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("pageload.json"),
        r#"{ "base_url": "http://pages.local", "stale_policy": "last_response_wins" }"#,
    )
    .unwrap();

    pageload(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://pages.local"))
        .stdout(predicate::str::contains("last_response_wins"))
        .stdout(predicate::str::contains("\"/pages\""));
}

#[test]
fn test_config_without_base_url_fails() {
    let home = TempDir::new().unwrap();

    pageload(&home)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No page server configured"));
}

#[test]
fn test_load_against_unreachable_server_fails() {
    let home = TempDir::new().unwrap();

    pageload(&home)
        .args(["--base-url", "http://127.0.0.1:9", "home"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("❌"));
}
