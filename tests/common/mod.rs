#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;

use barcode_service::api::{routes, AppState};
use barcode_service::config::{AppConfig, LogConfig, OutputConfig, ServerConfig};

/// Build a test `AppConfig` writing file-system output into `output_dir`.
pub fn test_config(output_dir: &Path) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_concurrency: 4,
        },
        output: OutputConfig::new(output_dir),
        log: LogConfig {
            dir: PathBuf::from("logs"),
            level: "debug".to_string(),
        },
    }
}

/// Build the full application router, the same way `main.rs` does.
pub fn build_test_app(output_dir: &Path) -> Router {
    routes::create_router(AppState::new(test_config(output_dir)))
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("host", "barcodes.test")
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
