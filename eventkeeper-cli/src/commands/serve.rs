//! Serve command - run the HTTP API

use std::net::SocketAddr;

use anyhow::{Context, Result};

use super::{get_config, GlobalOpts};
use eventkeeper_core::EventKeeperContext;

pub fn run(opts: &GlobalOpts, bind: Option<SocketAddr>) -> Result<()> {
    let mut config = get_config(opts)?;
    if let Some(addr) = bind {
        config = config.with_bind_addr(addr);
    }

    let db_path = config.db_path.clone();
    let ctx = EventKeeperContext::new(config)
        .with_context(|| format!("Failed to open event database {}", db_path.display()))?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(eventkeeper_http::run(ctx))
}
