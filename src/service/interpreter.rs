use crate::error::RequestError;
use crate::model::{ImageFormat, OutputMode, RawRequest, Symbology, ValidatedRequest};

/// 校验并补全请求参数
///
/// 条码类型和内容无效时直接拒绝；图片格式和输出方式无法识别时静默使用默认值。
/// 条码类型优先于内容检查。
pub fn interpret(raw: &RawRequest) -> Result<ValidatedRequest, RequestError> {
    let symbology = Symbology::from_name(&raw.symbology).ok_or_else(|| {
        RequestError::UnsupportedSymbology {
            supported: Symbology::supported_names(),
        }
    })?;

    if raw.content.trim().is_empty() {
        return Err(RequestError::MissingContent);
    }

    Ok(ValidatedRequest {
        symbology,
        content: raw.content.clone(),
        width: raw.width,
        height: raw.height,
        image_format: ImageFormat::from_name_or_default(raw.image_format_name.trim()),
        output_mode: OutputMode::from_name_or_default(raw.output_mode_name.trim()),
    })
}
