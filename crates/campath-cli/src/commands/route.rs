//! Route command for finding a path between two locations

use clap::Args;

use crate::output::format_route;
use crate::AppContext;

#[derive(Args)]
pub struct RouteArgs {
    /// Starting location id
    pub from: String,

    /// Destination location id
    pub to: String,

    /// Minimize the number of segments instead of distance
    #[arg(long)]
    pub fewest_hops: bool,
}

pub async fn run(args: &RouteArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let map = ctx.load_map().await?;

    for id in [&args.from, &args.to] {
        if !map.contains(id) {
            tracing::warn!("Unknown location: {}", id);
        }
    }

    let route = if args.fewest_hops {
        map.fewest_hops(&args.from, &args.to)
    } else {
        map.shortest_path(&args.from, &args.to)
    };

    println!(
        "{}",
        format_route(&args.from, &args.to, route.as_ref(), ctx.format)?
    );

    if route.is_none() {
        std::process::exit(1);
    }
    Ok(())
}
