use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::context::AppContext;

pub struct StartupContext {
    pub app: AppContext,
    pub bind_address: String,
    pub workers: usize,
}

/// 准备服务器启动的上下文
///
/// Builds the catalog, order log and link registry from configuration.
pub fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let app = AppContext::from_config(config).context("Failed to build application context")?;
    info!(
        "Catalog loaded: {} flowers, {} customers; orders booked for {}",
        app.catalog.flower_count(),
        app.catalog.list_customers().len(),
        app.orders.default_customer().name
    );
    info!("Public base URL: {}", app.urls.base_url());

    let context = StartupContext {
        app,
        bind_address: format!("{}:{}", config.server.host, config.server.port),
        workers: config.server.cpu_count.min(32),
    };

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(context)
}
