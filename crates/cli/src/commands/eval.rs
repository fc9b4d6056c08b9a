//! Evaluate the height error at query points

use anyhow::Result;

use crate::commands::{SessionArgs, fit_registry};
use crate::output;
use crate::session::Query;

pub fn execute(args: &SessionArgs, x: Option<f32>, y: Option<f32>, json: bool) -> Result<()> {
    let (session, mut registry, num_points) = args.load()?;
    fit_registry(&mut registry, num_points)?;

    let extra = match (x, y) {
        (Some(x), Some(y)) => Some(Query { x, y }),
        _ => None,
    };
    let results: Vec<(Query, f32)> = session
        .queries
        .iter()
        .copied()
        .chain(extra)
        .map(|q| (q, registry.interpolated_height_error(q.x, q.y)))
        .collect();

    output::print_height_errors(&results, json);
    Ok(())
}
