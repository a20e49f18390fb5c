//! Command handlers against temporary settings and a mock Graph API.

use autopost::cli::{
    OutputFormat, handle_preview_command, handle_publish_command, handle_validate_command,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_settings(dir: &Path, graph_api_base: &str, extra: &str) -> PathBuf {
    let path = dir.join("autopost.toml");
    let contents = format!(
        r#"
enabled = true
detailed_logging = false
graph_api_base = "{graph_api_base}"
request_timeout_secs = 5
{extra}

[post_options]
include_image = true
include_body = true
body_length = 100

[[pages]]
type = "page"
page_name = "Newsroom"
page_id = "111"
access_token = "page-token"

[[pages]]
type = "group"
page_name = "Residents"
page_id = "222"
access_token = "user-token"
"#
    );
    std::fs::write(&path, contents).expect("Write settings");
    path
}

fn write_item(dir: &Path, item: serde_json::Value) -> PathBuf {
    let path = dir.join("item.json");
    std::fs::write(&path, item.to_string()).expect("Write item");
    path
}

fn article() -> serde_json::Value {
    json!({
        "title": "Council approves budget",
        "body": "<p>The vote was 7-2.</p>",
        "url": "https://news.example.com/node/42",
        "domain": "news.example.com"
    })
}

#[tokio::test]
async fn test_publish_posts_to_every_destination() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/111/feed"))
        .and(body_string_contains("access_token=page-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "111_1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/222/feed"))
        .and(body_string_contains("access_token=user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "222_1"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Temp dir");
    let config = write_settings(dir.path(), &server.uri(), "");
    let content = write_item(dir.path(), article());

    let ok = handle_publish_command(&content, Some(config), false, OutputFormat::Json)
        .await
        .expect("Publish runs");
    assert!(ok);
}

#[tokio::test]
async fn test_publish_reports_partial_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/111/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "111_1"})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/222/feed"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "error": {"message": "Requires publish_to_groups permission"}
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Temp dir");
    let config = write_settings(dir.path(), &server.uri(), "");
    let content = write_item(dir.path(), article());

    let ok = handle_publish_command(&content, Some(config), false, OutputFormat::Human)
        .await
        .expect("Publish runs");
    assert!(!ok);
}

#[tokio::test]
async fn test_publish_respects_domain_filter_unless_forced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "1"})))
        .expect(2)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Temp dir");
    let config = write_settings(
        dir.path(),
        &server.uri(),
        r#"enabled_domains = ["sports.example.com"]"#,
    );
    let content = write_item(dir.path(), article());

    let ok = handle_publish_command(&content, Some(config.clone()), false, OutputFormat::Json)
        .await
        .expect("Filtered publish runs");
    assert!(ok);

    let ok = handle_publish_command(&content, Some(config), true, OutputFormat::Json)
        .await
        .expect("Forced publish runs");
    assert!(ok);
}

#[tokio::test]
async fn test_publish_with_missing_settings_is_error() {
    let dir = TempDir::new().expect("Temp dir");
    let content = write_item(dir.path(), article());

    let result = handle_publish_command(
        &content,
        Some(dir.path().join("missing.toml")),
        false,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_preview_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Temp dir");
    let config = write_settings(dir.path(), &server.uri(), "");
    let mut item = article();
    item["image"] = json!("https://cdn.example.com/council.jpg");
    let content = write_item(dir.path(), item);

    let ok = handle_preview_command(&content, Some(config)).expect("Preview runs");
    assert!(ok);
}

#[test]
fn test_validate_clean_settings() {
    let dir = TempDir::new().expect("Temp dir");
    let config = write_settings(dir.path(), "https://graph.facebook.com/v18.0", "");

    let ok = handle_validate_command(Some(config), OutputFormat::Json).expect("Validation runs");
    assert!(ok);
}

#[test]
fn test_validate_rejects_unusable_settings() {
    let dir = TempDir::new().expect("Temp dir");
    let config = dir.path().join("autopost.toml");
    std::fs::write(
        &config,
        r#"
enabled = true
graph_api_base = "ftp://graph.example.com"
request_timeout_secs = 0
"#,
    )
    .expect("Write settings");

    let ok = handle_validate_command(Some(config), OutputFormat::Human).expect("Validation runs");
    assert!(!ok);
}
