use serde::Deserialize;
use crate::model::barcode::{ImageFormat, OutputMode, Symbology};

/// 查询参数，全部可选
///
/// 宽高按字符串接收，解析失败时回落到 0，而不是让整个请求失败。
#[derive(Debug, Default, Deserialize)]
pub struct BarcodeQuery {
    pub width: Option<String>,
    pub height: Option<String>,
    #[serde(rename = "imageFormat", default = "default_image_format")]
    pub image_format: String,
    #[serde(rename = "outputOption", default = "default_output_option")]
    pub output_option: String,
}

fn default_image_format() -> String {
    "png".to_string()
}

fn default_output_option() -> String {
    "image".to_string()
}

fn parse_dimension(value: Option<&str>) -> i32 {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0)
}

/// 未经校验的请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub symbology: String,
    pub content: String,
    pub width: i32,
    pub height: i32,
    pub image_format_name: String,
    pub output_mode_name: String,
}

impl RawRequest {
    pub fn from_parts(symbology: String, content: String, query: BarcodeQuery) -> Self {
        Self {
            symbology,
            content,
            width: parse_dimension(query.width.as_deref()),
            height: parse_dimension(query.height.as_deref()),
            image_format_name: query.image_format,
            output_mode_name: query.output_option,
        }
    }
}

/// 校验后的请求，只能由 `interpret` 构造
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub(crate) symbology: Symbology,
    pub(crate) content: String,
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) image_format: ImageFormat,
    pub(crate) output_mode: OutputMode,
}

impl ValidatedRequest {
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn image_format(&self) -> ImageFormat {
        self.image_format
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }
}
