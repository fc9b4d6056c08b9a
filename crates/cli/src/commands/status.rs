//! Show probe point status

use anyhow::Result;

use crate::commands::SessionArgs;
use crate::output;

pub fn execute(args: &SessionArgs, json: bool) -> Result<()> {
    let (_, registry, num_points) = args.load()?;
    registry.log_debug_report(num_points);

    let shown = num_points.min(registry.capacity());
    let points = registry.points().get(..shown).unwrap_or_default();
    output::print_status(
        points,
        registry.number_of_probe_points(),
        registry.good_probe_points(num_points),
        &registry.object_model(),
        json,
    );
    Ok(())
}
