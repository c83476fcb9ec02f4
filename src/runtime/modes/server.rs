//! Server mode
//!
//! Configures and starts the HTTP server with all routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::{
    self,
    middleware::{AccessLog, RequestIdMiddleware},
};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server until it exits or Ctrl+C arrives.
///
/// **Note**: Logging must be initialized before calling this function.
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup(config)?;
    let app = startup.app.clone();

    warn!("Using {} workers for the server", startup.workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(AccessLog) // 最外层，记录请求延迟
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .configure(api::configure(app.clone()))
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(startup.workers)
    .disable_signals()
    .bind(&startup.bind_address)
    .with_context(|| format!("Failed to bind {}", startup.bind_address))?
    .run();

    info!("Starting server at http://{}", startup.bind_address);
    let handle = server.handle();

    tokio::select! {
        res = server => {
            res.context("HTTP server terminated with an error")?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            handle.stop(true).await;
            warn!("Graceful shutdown completed");
        }
    }

    Ok(())
}
