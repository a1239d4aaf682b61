use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use crate::api::AppState;
use crate::model::{BarcodeQuery, DeliveryResult, RawRequest};
use crate::service::interpret;

/// GET /:symbology/:content
pub async fn generate_barcode(
    State(state): State<AppState>,
    Path((symbology, content)): Path<(String, String)>,
    Query(query): Query<BarcodeQuery>,
) -> Response {
    handle(state, RawRequest::from_parts(symbology, content, query)).await
}

/// GET /:symbology/ ，内容为空
pub async fn generate_barcode_without_content(
    State(state): State<AppState>,
    Path(symbology): Path<String>,
    Query(query): Query<BarcodeQuery>,
) -> Response {
    handle(state, RawRequest::from_parts(symbology, String::new(), query)).await
}

async fn handle(state: AppState, raw: RawRequest) -> Response {
    let request = match interpret(&raw) {
        Ok(request) => request,
        Err(e) => return e.into_response(),
    };

    tracing::debug!(
        "生成条码: {} {}x{} {:?} {:?}",
        request.symbology(),
        request.width(),
        request.height(),
        request.image_format(),
        request.output_mode()
    );

    match state.router.route(request).await {
        Ok(result) => result.into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for DeliveryResult {
    fn into_response(self) -> Response {
        let message = self.message();
        match self {
            DeliveryResult::Inline { content_type, bytes } => {
                (StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response()
            }
            DeliveryResult::Written { .. } => {
                (StatusCode::OK, message.unwrap_or_default()).into_response()
            }
            DeliveryResult::Failed { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.unwrap_or_default()).into_response()
            }
        }
    }
}
