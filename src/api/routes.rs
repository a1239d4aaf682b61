use axum::{Router, routing::get};
use axum::http::Method;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use crate::api::AppState;
use crate::api::handlers;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let max_concurrency = state.config.server.max_concurrency;

    let router = Router::new()
        .route("/", get(handlers::usage::usage))
        .route("/:symbology/", get(handlers::barcode::generate_barcode_without_content))
        .route("/:symbology/:content", get(handlers::barcode::generate_barcode));

    // 0 表示不限流
    let router = if max_concurrency > 0 {
        router.layer(ConcurrencyLimitLayer::new(max_concurrency))
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
