use std::fmt::Write;
use std::path::Path;
use crate::model::{ImageFormat, OutputMode, Symbology};

/// 生成 `GET /` 的使用说明
///
/// `base_url` 是请求自身的地址（以 `/` 结尾），用于拼出示例链接。
pub fn describe(base_url: &str, file_system_path: &Path) -> String {
    let symbologies = Symbology::supported_names().join(" or ");
    let formats = ImageFormat::ALL
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let modes = OutputMode::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" or ");

    let mut body = String::new();
    let mut line = |text: String| {
        let _ = writeln!(body, "{}", text);
    };

    line("Welcome to BarcodeGenerator".into());
    line(String::new());
    line("Usage:".into());
    line(format!("{}[barcodeFormat]/[message]", base_url));
    line(String::new());
    line("Let's try make a PDF 417 barcode with 'Hello World' content.".into());
    line(format!("{}PDF_417/Hello World", base_url));
    line(String::new());
    line("barcodeFormat parameter:".into());
    line(format!("{}.", symbologies));
    for symbology in Symbology::ALL {
        line(format!("   {}: {}", symbology, symbology.description()));
    }
    line(String::new());
    line("message parameter:".into());
    line("   This option will be barcode's content.".into());
    line(String::new());
    line("Optional parameters:".into());
    line(String::new());
    line("Usage:".into());
    line(format!(
        "{}[barcodeFormat]/[message]?outputOption=fileSystem&imageFormat=jpeg&height=100&width=300",
        base_url
    ));
    line(String::new());
    line("If any parameter would be missing the default value will be used instead.".into());
    line(String::new());
    line(format!("outputOption: {}.", modes));
    line(format!("   Default value: {}.", OutputMode::default().as_str()));
    line("   image: Service will return image file.".into());
    line(format!(
        "   fileSystem: Service will generate image file at {}.",
        file_system_path.display()
    ));
    line(format!("imageFormat: {}.", formats));
    line(format!("   Default value: {}.", ImageFormat::default().as_str()));
    line("   This option will generate image file as desired imageFormat parameter.".into());
    line("height: number.".into());
    line("   Default value: image default height.".into());
    line("   This option will change image height.".into());
    line("width: number.".into());
    line("   Default value: image default width.".into());
    line("   This option will change image width.".into());

    body
}
