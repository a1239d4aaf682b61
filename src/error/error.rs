use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Task error: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("请求处理失败: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// 用户输入错误，以 206 返回给调用方
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("BarcodeFormat invalid type. Check out the valid types: {}", .supported.join(", "))]
    UnsupportedSymbology { supported: Vec<&'static str> },

    #[error("Missing parameter: message content.")]
    MissingContent,
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        tracing::debug!("请求参数无效: {}", self);
        // 沿用原有约定：参数错误返回 206 而不是 400
        (StatusCode::PARTIAL_CONTENT, self.to_string()).into_response()
    }
}
