use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, fmt, Layer};
use barcode_service::{api, config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = config::AppConfig::load("config.toml")?;

    // 创建日志目录
    let log_dir = config.log.dir.clone();
    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)?;
    }

    // 配置日志文件（按日期滚动）
    let file_appender = tracing_appender::rolling::daily(&log_dir, "barcode_service.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG 优先于配置文件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(filter.clone());

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("日志文件位置: {}/barcode_service.log", log_dir.display());
    tracing::info!("fileSystem 输出目录: {}", config.output.file_system_path.display());

    let addr = config.bind_addr();
    let app_state = api::AppState::new(config);
    let app = api::routes::create_router(app_state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
