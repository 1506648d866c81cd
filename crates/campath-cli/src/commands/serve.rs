//! Serve command for the HTTP API

use std::sync::Arc;

use clap::Args;

use crate::AppContext;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides config)
    #[arg(short, long)]
    pub bind: Option<String>,
}

pub async fn run(args: &ServeArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let map = ctx.load_map().await?;
    tracing::info!("Loaded {} locations", map.location_count());

    let addr = args.bind.as_deref().unwrap_or(&ctx.config.bind_address);
    campath_server::run_server(Arc::new(map), addr).await?;
    Ok(())
}
