use std::sync::Arc;
use crate::config::AppConfig;
use crate::service::DeliveryRouter;

/// 请求之间共享的只读状态
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub router: Arc<DeliveryRouter>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let router = DeliveryRouter::new(config.output.clone());
        Self::with_router(config, router)
    }

    pub fn with_router(config: AppConfig, router: DeliveryRouter) -> Self {
        Self {
            config: Arc::new(config),
            router: Arc::new(router),
        }
    }
}
