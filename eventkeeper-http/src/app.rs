//! Application state and runtime.

use std::future::Future;
use std::sync::Arc;

use eventkeeper_core::EventKeeperContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::ApiError;
use crate::http;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<EventKeeperContext>,
}

impl AppState {
    pub fn new(ctx: EventKeeperContext) -> Self {
        Self { ctx: Arc::new(ctx) }
    }

    /// Run blocking store or filesystem work off the async runtime.
    pub async fn blocking<T, F>(&self, work: F) -> Result<T, ApiError>
    where
        F: FnOnce(&EventKeeperContext) -> anyhow::Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let ctx = Arc::clone(&self.ctx);
        tokio::task::spawn_blocking(move || work(&ctx))
            .await
            .map_err(|e| ApiError::from(anyhow::anyhow!("worker task failed: {e}")))?
            .map_err(ApiError::from)
    }
}

/// Serve the API on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = http::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn run(ctx: EventKeeperContext) -> anyhow::Result<()> {
    let addr = ctx.config.bind_addr;
    let listener = TcpListener::bind(addr).await?;

    info!("eventkeeper listening:  http://{}/", listener.local_addr()?);
    info!("database:               {}", ctx.config.db_path.display());
    info!("backup directory:       {}", ctx.config.backup_dir.display());

    serve(listener, AppState::new(ctx), shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
