/// 支持的条码类型
///
/// 名称与 URL 路径中的写法一致，匹配时忽略大小写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Pdf417,
    QrCode,
}

impl Symbology {
    pub const ALL: [Symbology; 2] = [Symbology::Pdf417, Symbology::QrCode];

    pub fn as_str(&self) -> &'static str {
        match self {
            Symbology::Pdf417 => "PDF_417",
            Symbology::QrCode => "QR_CODE",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Symbology::Pdf417 => "This option will generate a PDF 417 barcode.",
            Symbology::QrCode => "This option will generate a QR code barcode.",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name))
    }

    pub fn supported_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 输出图片格式，无法识别时回落到 `Png`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl ImageFormat {
    pub const ALL: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Bmp];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "Png",
            ImageFormat::Jpeg => "Jpeg",
            ImageFormat::Bmp => "Bmp",
        }
    }

    /// 文件扩展名，同时用于 `image/<ext>` 的 content type
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Bmp => "bmp",
        }
    }

    pub fn content_type(&self) -> String {
        format!("image/{}", self.extension())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(name))
    }

    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn codec(&self) -> image::ImageFormat {
        match self {
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// 输出方式：直接返回图片，或者写入服务器文件系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    #[default]
    InlineImage,
    FileSystem,
}

impl OutputMode {
    pub const ALL: [OutputMode; 2] = [OutputMode::InlineImage, OutputMode::FileSystem];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::InlineImage => "image",
            OutputMode::FileSystem => "fileSystem",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
    }

    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}
