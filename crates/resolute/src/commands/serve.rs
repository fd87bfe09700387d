//! Serve command implementation

use anyhow::Context;
use clap::Args;
use resolute_core::{Config, DedupEngine};
use rmcp::ServiceExt;
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Override the per-client request limit from configuration
    #[arg(long, value_name = "N")]
    pub rate_limit: Option<u32>,
}

/// Run the MCP server on stdio until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    args: ServeArgs,
    max_input: Option<usize>,
    config: Config,
) -> anyhow::Result<()> {
    let engine = DedupEngine::new(super::build_normalizer(&config).await?);
    let limit = args.rate_limit.unwrap_or(config.rate_limit.limit);
    let server = ProjectServer::new(engine, config.rate_limit.limiter(), limit, max_input);

    info!(
        limit,
        interval_secs = config.rate_limit.interval_secs,
        "starting MCP server on stdio"
    );
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start MCP server")?;
    service.waiting().await.context("MCP server failed")?;
    info!("MCP server stopped");
    Ok(())
}
