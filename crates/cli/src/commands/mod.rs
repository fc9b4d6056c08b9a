//! Command implementations for bedctl

pub mod eval;
pub mod fit;
pub mod heights;
pub mod status;

use std::path::PathBuf;

use bedcomp_probe::ProbePointRegistry;
use clap::Args;

use crate::error::CliError;
use crate::session::Session;

/// Arguments shared by every command that reads a session.
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Probe session file (YAML, or JSON by extension)
    #[arg(env = "BEDCTL_SESSION")]
    pub session: PathBuf,

    /// Number of leading points to use (defaults to every point in the session)
    #[arg(short = 'n', long)]
    pub points: Option<usize>,
}

impl SessionArgs {
    pub fn load(&self) -> Result<(Session, ProbePointRegistry, usize), CliError> {
        let session = Session::load(&self.session)?;
        let registry = session.registry()?;
        let num_points = self.points.unwrap_or(session.points.len());
        Ok((session, registry, num_points))
    }
}

/// Checks readiness and fits, the way a "fit bed" command handler would.
pub fn fit_registry(
    registry: &mut ProbePointRegistry,
    num_points: usize,
) -> Result<bedcomp_probe::FitSummary, CliError> {
    if !registry.good_probe_points(num_points) {
        return Err(CliError::NotReady(
            registry.report_probe_heights(num_points).to_string(),
        ));
    }
    Ok(registry.fit(num_points)?)
}
