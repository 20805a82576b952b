//! Upstream fetchers against a mock HTTP server.
//!
//! Run with: cargo test -p irodori-upstream --test fetch

use irodori_core::Locale;
use irodori_upstream::{PaletteSource, Upstream, UpstreamConfig, UpstreamError};
use serde_json::Value;

const CN_BODY: &str = r##"[{"CMYK":[0,56,27,1],"RGB":[241,147,156],"hex":"#f1939c","name":"春梅红","pinyin":"chunmeihong"},{"CMYK":[0,0,0,0],"RGB":[255,255,255],"hex":"#ffffff","name":"白","pinyin":"bai"}]"##;

const JP_HTML: &str = r##"<html><body><ul id="colors">
<li id="col1"><div><a href="#NADESHIKO">撫子, NADESHIKO</a></div></li>
<li id="col2"><div><a href="#KOHBAI">紅梅, KOHBAI</a></div></li>
</ul></body></html>"##;

const JP_CSS: &str = ".col1 a:hover{background-color:#DC9FB4}.col2 a:hover{background-color:#E16B8C}";

fn upstream_for(server: &mockito::Server) -> Upstream {
    let config = UpstreamConfig::default()
        .with_cn_url(format!("{}/colors.json", server.url()))
        .with_jp_base_url(format!("{}/", server.url()));
    Upstream::new(config).unwrap()
}

#[tokio::test]
async fn test_cn_passes_body_through_unchanged() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/colors.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CN_BODY)
        .create_async()
        .await;

    let body = upstream_for(&server).fetch(Locale::Cn).await.unwrap();

    mock.assert_async().await;
    assert_eq!(body, CN_BODY);
}

#[tokio::test]
async fn test_cn_non_success_status_fails() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/colors.json")
        .with_status(502)
        .create_async()
        .await;

    let err = upstream_for(&server).fetch(Locale::Cn).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 502, .. }));
}

#[tokio::test]
async fn test_jp_scrapes_listing_and_stylesheet() {
    let mut server = mockito::Server::new_async().await;
    let html = server
        .mock("GET", "/")
        .with_status(200)
        .with_body(JP_HTML)
        .create_async()
        .await;
    let css = server
        .mock("GET", "/min/g=nipponcolors_css")
        .with_status(200)
        .with_body(JP_CSS)
        .create_async()
        .await;

    let body = upstream_for(&server).fetch(Locale::Jp).await.unwrap();
    html.assert_async().await;
    css.assert_async().await;

    let colors: Value = serde_json::from_str(&body).unwrap();
    let colors = colors.as_array().unwrap();
    assert_eq!(colors.len(), 2);
    assert_eq!(colors[0]["hex"], "#DC9FB4");
    assert_eq!(colors[0]["name"], "撫子");
    assert_eq!(colors[0]["pinyin"], "NADESHIKO");
    assert_eq!(colors[0]["RGB"], serde_json::json!([220, 159, 180]));
    assert!(colors[0].get("CMYK").is_none());
}

#[tokio::test]
async fn test_jp_derives_cmyk_when_enabled() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/").with_body(JP_HTML).create_async().await;
    server
        .mock("GET", "/min/g=nipponcolors_css")
        .with_body(JP_CSS)
        .create_async()
        .await;

    let config = UpstreamConfig::default()
        .with_jp_base_url(server.url())
        .with_derive_cmyk(true);
    let body = Upstream::new(config).unwrap().fetch(Locale::Jp).await.unwrap();

    let colors: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(colors[0]["CMYK"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_jp_missing_rule_fails_whole_fetch() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/").with_body(JP_HTML).create_async().await;
    server
        .mock("GET", "/min/g=nipponcolors_css")
        .with_body(".col1 a:hover{background-color:#DC9FB4}")
        .create_async()
        .await;

    let err = upstream_for(&server).fetch(Locale::Jp).await.unwrap_err();
    assert!(matches!(err, UpstreamError::MissingStyle { ref id } if id == "col2"));
}

#[tokio::test]
async fn test_jp_stylesheet_failure_propagates() {
    let mut server = mockito::Server::new_async().await;
    server.mock("GET", "/").with_body(JP_HTML).create_async().await;
    server
        .mock("GET", "/min/g=nipponcolors_css")
        .with_status(404)
        .create_async()
        .await;

    let err = upstream_for(&server).fetch(Locale::Jp).await.unwrap_err();
    assert!(matches!(err, UpstreamError::Status { status: 404, .. }));
}
