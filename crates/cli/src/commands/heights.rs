//! Report probe heights

use anyhow::Result;

use crate::commands::SessionArgs;
use crate::output;

pub fn execute(args: &SessionArgs, json: bool) -> Result<()> {
    let (_, registry, num_points) = args.load()?;
    let report = registry.report_probe_heights(num_points);
    output::print_heights(&report.to_string(), &report.statistics(), json);
    Ok(())
}
