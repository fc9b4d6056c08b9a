//! Fit the bed correction surface

use anyhow::Result;
use tracing::info;

use crate::commands::{SessionArgs, fit_registry};
use crate::output;

pub fn execute(args: &SessionArgs, json: bool) -> Result<()> {
    let (_, mut registry, num_points) = args.load()?;
    let summary = fit_registry(&mut registry, num_points)?;
    info!(num_points, "bed compensation fitted");
    registry.log_debug_report(num_points);
    output::print_fit(&summary, json);
    Ok(())
}
