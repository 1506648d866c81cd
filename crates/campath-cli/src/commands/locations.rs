//! Locations command

use crate::output::format_locations;
use crate::AppContext;

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let map = ctx.load_map().await?;

    let mut locations = map.list_locations();
    locations.sort_by(|a, b| a.id.cmp(&b.id));

    println!("{}", format_locations(&locations, ctx.format)?);
    Ok(())
}
