use std::io::Cursor;
use image::error::{ImageError, LimitError, LimitErrorKind};
use image::{DynamicImage, Rgb, RgbImage};
use crate::error::{AppError, AppResult};
use crate::model::{GeneratedImage, ImageFormat};
use crate::service::barcode::encoder::SymbolMatrix;

const DARK: Rgb<u8> = Rgb([0, 0, 0]);
const LIGHT: Rgb<u8> = Rgb([255, 255, 255]);

/// 把模块矩阵绘制成位图并按目标格式编码
pub fn render(matrix: &SymbolMatrix, format: ImageFormat) -> AppResult<GeneratedImage> {
    let (width, height) = (matrix.width(), matrix.height());
    let mut raw = allocate_pixels(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let pixel = if matrix.is_dark(x, y) { DARK } else { LIGHT };
            raw.extend_from_slice(&pixel.0);
        }
    }

    let img = RgbImage::from_raw(width, height, raw).ok_or_else(insufficient_memory)?;

    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img).write_to(&mut buffer, format.codec())?;

    Ok(GeneratedImage {
        bytes: buffer.into_inner(),
        format,
        width: matrix.width(),
        height: matrix.height(),
    })
}

fn insufficient_memory() -> AppError {
    AppError::Image(ImageError::Limits(LimitError::from_kind(
        LimitErrorKind::InsufficientMemory,
    )))
}

/// RGB 缓冲区按需预留，分配失败返回错误而不是终止进程
fn allocate_pixels(width: u32, height: u32) -> AppResult<Vec<u8>> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(insufficient_memory)?;

    let mut raw = Vec::new();
    raw.try_reserve_exact(len).map_err(|_| insufficient_memory())?;
    Ok(raw)
}
