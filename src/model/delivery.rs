use std::path::PathBuf;
use crate::model::barcode::ImageFormat;

/// 已编码的条码图片
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}

/// 投递结果，直接转换为 HTTP 响应
#[derive(Debug)]
pub enum DeliveryResult {
    Inline {
        content_type: String,
        bytes: Vec<u8>,
    },
    Written {
        path: PathBuf,
    },
    Failed {
        path: PathBuf,
        reason: String,
    },
}

impl DeliveryResult {
    pub fn message(&self) -> Option<String> {
        match self {
            DeliveryResult::Inline { .. } => None,
            DeliveryResult::Written { path } => {
                Some(format!("Image {} generated successfully.", path.display()))
            }
            DeliveryResult::Failed { path, reason } => {
                Some(format!("Failed to write image {}: {}", path.display(), reason))
            }
        }
    }
}
