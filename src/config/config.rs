use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 0 表示不限制并发
    pub max_concurrency: usize,
}

/// fileSystem 输出方式使用的目录，不检查是否存在
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub file_system_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: String,
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let config = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.max_concurrency", 0)?
            .set_default("output.file_system_path", "generated")?
            .set_default("log.dir", "logs")?
            .set_default("log.level", "info")?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("BARCODE_SRV")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to load config")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl OutputConfig {
    pub fn new(file_system_path: impl Into<PathBuf>) -> Self {
        Self {
            file_system_path: file_system_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("does-not-exist.toml").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.max_concurrency, 0);
        assert_eq!(config.output.file_system_path, PathBuf::from("generated"));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("service.toml");
        std::fs::write(
            &path,
            "[server]\nport = 8080\n\n[output]\nfile_system_path = \"/srv/barcodes\"\n",
        )
        .unwrap();

        let config = AppConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.output.file_system_path, PathBuf::from("/srv/barcodes"));
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
