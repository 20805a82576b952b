//! Router behavior against an in-memory bucket and a scripted upstream.
//!
//! Run with: cargo test -p irodori-server --test router

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use irodori_core::{Locale, MemoryBucket, PaletteBucket};
use irodori_server::{AppState, PaletteGateway, build_router, refresh_all};
use irodori_upstream::{PaletteSource, UpstreamError};
use serde_json::Value;
use tower::ServiceExt;

const CN_BODY: &str = r##"[{"CMYK":[0,56,27,1],"RGB":[241,147,156],"hex":"#f1939c","name":"春梅红","pinyin":"chunmeihong"},{"CMYK":[0,0,0,0],"RGB":[255,255,255],"hex":"#ffffff","name":"白","pinyin":"bai"},{"CMYK":[0,0,0,100],"RGB":[0,0,0],"hex":"#000000","name":"黑","pinyin":"hei"}]"##;
const JP_BODY: &str = r##"[{"RGB":[220,159,180],"hex":"#DC9FB4","name":"撫子","pinyin":"NADESHIKO"}]"##;

#[derive(Default)]
struct ScriptedSource {
    fetches: AtomicUsize,
    fail: bool,
}

impl ScriptedSource {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaletteSource for ScriptedSource {
    async fn fetch(&self, locale: Locale) -> Result<String, UpstreamError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(UpstreamError::Status {
                url: format!("http://upstream/{locale}"),
                status: 503,
            });
        }
        Ok(match locale {
            Locale::Cn => CN_BODY.to_string(),
            Locale::Jp => JP_BODY.to_string(),
        })
    }
}

fn app(source: Arc<ScriptedSource>) -> (Router, Arc<MemoryBucket>, PaletteGateway) {
    let bucket = Arc::new(MemoryBucket::new());
    let gateway = PaletteGateway::new(bucket.clone(), source);
    let router = build_router(AppState::new(gateway.clone()));
    (router, bucket, gateway)
}

async fn get(router: &Router, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_cn_miss_fetches_once_then_hits() {
    let source = Arc::new(ScriptedSource::default());
    let (router, bucket, _) = app(source.clone());

    let response = get(&router, "/cn/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = json_body(response).await;
    assert_eq!(first["colors"].as_array().unwrap().len(), 3);
    assert_eq!(first["colors"][0]["name"], "春梅红");
    assert!(first["lastUpdateAt"].is_string());
    assert_eq!(source.fetches(), 1);
    assert_eq!(bucket.len().await, 1);
    assert_eq!(bucket.get("cn").await.unwrap().unwrap().body, CN_BODY);

    let second = json_body(get(&router, "/cn/").await).await;
    assert_eq!(source.fetches(), 1);
    assert_eq!(second["colors"], first["colors"]);
}

#[tokio::test]
async fn test_hit_reports_stored_time() {
    let source = Arc::new(ScriptedSource::default());
    let (router, bucket, _) = app(source.clone());
    let stored_at = bucket.put("jp", JP_BODY.to_string()).await.unwrap();

    let body = json_body(get(&router, "/jp/").await).await;
    assert_eq!(source.fetches(), 0);
    assert_eq!(body["colors"][0]["hex"], "#DC9FB4");
    let reported: chrono::DateTime<chrono::Utc> =
        body["lastUpdateAt"].as_str().unwrap().parse().unwrap();
    assert_eq!(reported, stored_at);
}

#[tokio::test]
async fn test_upstream_failure_is_500_and_not_cached() {
    let source = Arc::new(ScriptedSource::failing());
    let (router, bucket, _) = app(source.clone());

    let response = get(&router, "/jp/").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("503"));
    assert!(bucket.is_empty().await);
}

#[tokio::test]
async fn test_m3_css_echoes_source() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    let response = get(&router, "/m3/?hex=%23ffffff&type=css").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["source"], "#ffffff");
    let neutral = body["palettes"]["neutral"].as_object().unwrap();
    assert_eq!(neutral.len(), 101);
    assert!(neutral.contains_key("0") && neutral.contains_key("100"));
    assert!(body["schemes"]["light"]["primary"].is_string());
    assert!(body["schemes"]["dark"]["primary"].is_string());
}

#[tokio::test]
async fn test_m3_tailwindcss_color_functions() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    let body = json_body(get(&router, "/m3/?hex=%236750A4&type=tailwindcss").await).await;
    let on_primary = body["onPrimary"].as_str().unwrap();
    assert!(on_primary.starts_with("rgb(") && on_primary.ends_with(" / <alpha-value>)"));
    assert!(body["onPrimaryDark"].is_string());
    assert!(body["surfaceContainerHighDark"].is_string());
    assert!(body["primary"]["DEFAULT"].is_string());
    assert!(body["neutralVariant"]["50"].is_string());
}

#[tokio::test]
async fn test_m3_unocss_download() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    let response = get(&router, "/m3/?hex=%236750A4&type=unocss&themeName=brand").await;
    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::CONTENT_TYPE], "application/javascript");
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"md3-brand-preset.ts\""
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let source = String::from_utf8(body.to_vec()).unwrap();
    assert!(source.contains("'md3-brand-preset'"));
}

#[tokio::test]
async fn test_m3_unocss_default_theme_name() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    let response = get(&router, "/m3/?hex=%236750A4&type=unocss").await;
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"md3-m3-preset.ts\""
    );
}

#[tokio::test]
async fn test_m3_bad_input_is_400() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    for uri in [
        "/m3/?hex=not-a-color&type=css",
        "/m3/?type=css",
        "/m3/?hex=%23ffffff",
        "/m3/?hex=%23ffffff&type=scss",
        "/m3/?hex=%23ffffff&type=unocss&themeName=my-theme",
    ] {
        let response = get(&router, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = json_body(response).await;
        assert_eq!(body["success"], false, "{uri}");
        assert!(body.get("source").is_none());
    }
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    let response = get(&router, "/unknown-path").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], br#"{"success":false,"error":"Route not found"}"#);
}

#[tokio::test]
async fn test_other_methods_get_json_404() {
    let (router, _, _) = app(Arc::new(ScriptedSource::default()));

    for (method, uri) in [("POST", "/cn/"), ("DELETE", "/jp/"), ("PUT", "/m3/")] {
        let response = router
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"success":false,"error":"Route not found"}"#);
    }
}

#[tokio::test]
async fn test_trailing_slash_is_optional() {
    let source = Arc::new(ScriptedSource::default());
    let (router, _, _) = app(source.clone());

    let body = json_body(get(&router, "/cn").await).await;
    assert_eq!(body["colors"].as_array().unwrap().len(), 3);
    assert_eq!(get(&router, "/jp").await.status(), StatusCode::OK);
    assert_eq!(source.fetches(), 2);

    let response = get(&router, "/m3?hex=%23ffffff&type=css").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["source"], "#ffffff");
}

#[tokio::test]
async fn test_refresh_all_overwrites_both_locales() {
    let source = Arc::new(ScriptedSource::default());
    let (router, bucket, gateway) = app(source.clone());
    bucket.put("cn", "[]".to_string()).await.unwrap();

    let refreshed = refresh_all(&gateway).await.unwrap();
    assert_eq!(refreshed.len(), 2);
    assert_eq!(source.fetches(), 2);
    assert_eq!(bucket.get("cn").await.unwrap().unwrap().body, CN_BODY);
    assert_eq!(bucket.get("jp").await.unwrap().unwrap().body, JP_BODY);

    let body = json_body(get(&router, "/cn/").await).await;
    assert_eq!(body["colors"].as_array().unwrap().len(), 3);
    assert_eq!(source.fetches(), 2);
}

#[tokio::test]
async fn test_refresh_all_stops_at_first_failure() {
    let source = Arc::new(ScriptedSource::failing());
    let (_, bucket, gateway) = app(source.clone());

    assert!(refresh_all(&gateway).await.is_err());
    assert_eq!(source.fetches(), 1);
    assert!(bucket.is_empty().await);
}
