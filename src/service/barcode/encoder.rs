use rxing::{
    BarcodeFormat, EncodeHintType, EncodeHintValue, EncodingHintDictionary, MultiFormatWriter,
    Writer,
};
use crate::error::{AppError, AppResult};
use crate::model::Symbology;

/// 单张条码图片允许的最大像素数
pub const MAX_PIXELS: u64 = 1 << 26;

/// 尺寸超出 `MAX_PIXELS` 时拒绝，避免超大分配直接终止进程
pub fn check_pixels(width: u64, height: u64) -> AppResult<()> {
    match width.checked_mul(height) {
        Some(pixels) if pixels <= MAX_PIXELS => Ok(()),
        _ => Err(AppError::Encoding(format!(
            "requested size {}x{} exceeds the limit of {} pixels",
            width, height, MAX_PIXELS
        ))),
    }
}

/// 条码模块矩阵，按行位压缩存储，置位表示深色模块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    width: u32,
    height: u32,
    row_words: usize,
    bits: Vec<u64>,
}

impl SymbolMatrix {
    pub fn from_fn<F>(width: u32, height: u32, mut is_dark: F) -> AppResult<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        check_pixels(width as u64, height as u64)?;

        let row_words = (width as usize).div_ceil(64);
        let len = row_words * height as usize;
        let mut bits = Vec::new();
        bits.try_reserve_exact(len)
            .map_err(|e| AppError::Encoding(format!("failed to allocate symbol matrix: {}", e)))?;
        bits.resize(len, 0u64);

        for y in 0..height {
            let row = y as usize * row_words;
            for x in 0..width {
                if is_dark(x, y) {
                    bits[row + x as usize / 64] |= 1 << (x % 64);
                }
            }
        }

        Ok(Self { width, height, row_words, bits })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        let word = self.bits[y as usize * self.row_words + x as usize / 64];
        (word & (1 << (x % 64))) != 0
    }
}

/// 条码编码能力
///
/// 实现方按给定尺寸输出不带边距、不带可读文字的纯条码矩阵。
pub trait SymbolEncoder: Send + Sync {
    fn encode(
        &self,
        symbology: Symbology,
        content: &str,
        width: i32,
        height: i32,
    ) -> AppResult<SymbolMatrix>;
}

/// 基于 rxing（ZXing 的 Rust 移植）的编码器
#[derive(Debug, Default, Clone, Copy)]
pub struct RxingEncoder;

impl RxingEncoder {
    fn barcode_format(symbology: Symbology) -> BarcodeFormat {
        match symbology {
            Symbology::Pdf417 => BarcodeFormat::PDF_417,
            Symbology::QrCode => BarcodeFormat::QR_CODE,
        }
    }
}

impl SymbolEncoder for RxingEncoder {
    fn encode(
        &self,
        symbology: Symbology,
        content: &str,
        width: i32,
        height: i32,
    ) -> AppResult<SymbolMatrix> {
        // 负数尺寸按 0 处理，即使用条码的自然尺寸
        let (width, height) = (width.max(0), height.max(0));
        check_pixels(width as u64, height as u64)?;

        let mut hints = EncodingHintDictionary::new();
        hints.insert(
            EncodeHintType::MARGIN,
            EncodeHintValue::Margin("0".to_string()),
        );
        if symbology == Symbology::Pdf417 {
            // PDF417 默认只支持 Latin-1
            hints.insert(
                EncodeHintType::CHARACTER_SET,
                EncodeHintValue::CharacterSet("UTF-8".to_string()),
            );
        }

        let matrix = MultiFormatWriter::default()
            .encode_with_hints(
                content,
                &Self::barcode_format(symbology),
                width,
                height,
                &hints,
            )
            .map_err(|e| AppError::Encoding(format!("{} encoding failed: {}", symbology, e)))?;

        SymbolMatrix::from_fn(
            matrix.getWidth(),
            matrix.getHeight(),
            |x, y| matrix.get(x, y),
        )
    }
}
