use std::sync::Arc;
use crate::config::OutputConfig;
use crate::error::AppResult;
use crate::model::{DeliveryResult, GeneratedImage, OutputMode, ValidatedRequest};
use crate::service::barcode::encoder::{RxingEncoder, SymbolEncoder};
use crate::service::barcode::renderer;
use crate::util::path::unique_output_path;

/// 生成条码并投递到对应的输出通道
#[derive(Clone)]
pub struct DeliveryRouter {
    encoder: Arc<dyn SymbolEncoder>,
    output: OutputConfig,
}

impl std::fmt::Debug for DeliveryRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryRouter")
            .field("encoder", &"SymbolEncoder")
            .field("output", &self.output)
            .finish()
    }
}

impl DeliveryRouter {
    pub fn new(output: OutputConfig) -> Self {
        Self::with_encoder(Arc::new(RxingEncoder), output)
    }

    pub fn with_encoder(encoder: Arc<dyn SymbolEncoder>, output: OutputConfig) -> Self {
        Self { encoder, output }
    }

    /// 编码、渲染并投递
    ///
    /// 编码或渲染失败返回 `Err`；文件写入失败返回 `DeliveryResult::Failed`。
    pub async fn route(&self, req: ValidatedRequest) -> AppResult<DeliveryResult> {
        let mode = req.output_mode();
        let encoder = self.encoder.clone();

        // 编码和渲染都是 CPU 密集操作，放到阻塞线程池
        let image = tokio::task::spawn_blocking(move || generate(encoder.as_ref(), &req)).await??;
        tracing::debug!(
            "条码图片已生成: {}x{} {} 字节",
            image.width,
            image.height,
            image.bytes.len()
        );

        let result = match mode {
            OutputMode::InlineImage => DeliveryResult::Inline {
                content_type: image.format.content_type(),
                bytes: image.bytes,
            },
            OutputMode::FileSystem => self.write_to_file_system(image).await,
        };

        Ok(result)
    }

    async fn write_to_file_system(&self, image: GeneratedImage) -> DeliveryResult {
        let path = unique_output_path(&self.output.file_system_path, image.format.extension());

        match tokio::fs::write(&path, &image.bytes).await {
            Ok(()) => {
                tracing::info!("条码图片已写入 {}", path.display());
                DeliveryResult::Written { path }
            }
            Err(e) => {
                tracing::error!("写入条码图片 {} 失败: {}", path.display(), e);
                DeliveryResult::Failed {
                    path,
                    reason: e.to_string(),
                }
            }
        }
    }
}

fn generate(encoder: &dyn SymbolEncoder, req: &ValidatedRequest) -> AppResult<GeneratedImage> {
    let matrix = encoder.encode(req.symbology(), req.content(), req.width(), req.height())?;
    renderer::render(&matrix, req.image_format())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::{ImageFormat, Symbology};
    use crate::service::barcode::encoder::SymbolMatrix;

    struct FixedEncoder;

    impl SymbolEncoder for FixedEncoder {
        fn encode(&self, _: Symbology, _: &str, width: i32, height: i32) -> AppResult<SymbolMatrix> {
            let (w, h) = (width.max(4) as u32, height.max(4) as u32);
            SymbolMatrix::from_fn(w, h, |x, _| x % 2 == 0)
        }
    }

    struct FailingEncoder;

    impl SymbolEncoder for FailingEncoder {
        fn encode(&self, _: Symbology, _: &str, _: i32, _: i32) -> AppResult<SymbolMatrix> {
            Err(AppError::Encoding("boom".to_string()))
        }
    }

    fn request(format: ImageFormat, mode: OutputMode) -> ValidatedRequest {
        ValidatedRequest {
            symbology: Symbology::QrCode,
            content: "router".to_string(),
            width: 10,
            height: 6,
            image_format: format,
            output_mode: mode,
        }
    }

    fn router(encoder: Arc<dyn SymbolEncoder>, dir: &std::path::Path) -> DeliveryRouter {
        DeliveryRouter::with_encoder(encoder, OutputConfig::new(dir))
    }

    #[tokio::test]
    async fn inline_delivery_returns_bytes_with_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(Arc::new(FixedEncoder), dir.path());

        let result = router
            .route(request(ImageFormat::Bmp, OutputMode::InlineImage))
            .await
            .unwrap();

        match result {
            DeliveryResult::Inline { content_type, bytes } => {
                assert_eq!(content_type, "image/bmp");
                let decoded = image::load_from_memory(&bytes).unwrap();
                assert_eq!((decoded.width(), decoded.height()), (10, 6));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn file_system_delivery_writes_unique_file() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(Arc::new(FixedEncoder), dir.path());

        let first = router
            .route(request(ImageFormat::Jpeg, OutputMode::FileSystem))
            .await
            .unwrap();
        let second = router
            .route(request(ImageFormat::Jpeg, OutputMode::FileSystem))
            .await
            .unwrap();

        let (first_path, second_path) = match (&first, &second) {
            (DeliveryResult::Written { path: a }, DeliveryResult::Written { path: b }) => (a, b),
            other => panic!("unexpected results: {:?}", other),
        };
        assert_ne!(first_path, second_path);
        assert!(first_path.starts_with(dir.path()));
        assert_eq!(first_path.extension().and_then(|e| e.to_str()), Some("jpeg"));

        let bytes = std::fs::read(first_path).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);

        let message = first.message().unwrap();
        assert!(message.contains(&first_path.display().to_string()));
    }

    #[tokio::test]
    async fn write_failure_is_reported_not_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing").join("nested");
        let router = router(Arc::new(FixedEncoder), &missing);

        let result = router
            .route(request(ImageFormat::Png, OutputMode::FileSystem))
            .await
            .unwrap();

        match result {
            DeliveryResult::Failed { path, reason } => {
                assert!(path.starts_with(&missing));
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn encoder_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let router = router(Arc::new(FailingEncoder), dir.path());

        let err = router
            .route(request(ImageFormat::Png, OutputMode::InlineImage))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Encoding(_)));
    }
}
