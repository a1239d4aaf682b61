use axum::{
    extract::{Host, OriginalUri, State},
    response::IntoResponse,
};
use crate::api::AppState;
use crate::service::describe;

/// GET /
pub async fn usage(
    State(state): State<AppState>,
    host: Option<Host>,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    let host = host
        .map(|Host(h)| h)
        .unwrap_or_else(|| format!("localhost:{}", state.config.server.port));
    let base_url = format!("http://{}{}", host, uri.path());

    describe(&base_url, &state.config.output.file_system_path)
}
