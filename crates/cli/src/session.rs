//! Probe session files
//!
//! A session lists the probed points in slot order, and optionally the
//! coordinates to evaluate once the bed has been fitted:
//!
//! ```yaml
//! points:
//!   - { x: 15.0, y: 15.0, z: 0.042 }
//!   - { x: 15.0, y: 220.0, z: -0.031, xy_corrected: true }
//!   - { x: 220.0, y: 220.0 }             # not probed yet
//!   - { x: 220.0, y: 15.0, z: 0.0, error: true }
//! queries:
//!   - { x: 117.5, y: 117.5 }
//! ```
//!
//! Files ending in `.json` are read as JSON, everything else as YAML.

use std::path::Path;

use bedcomp_probe::{MAX_PROBE_POINTS, ProbePointRegistry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CliError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionPoint {
    pub x: f32,
    pub y: f32,
    /// Measured height; absent if the point has not been probed.
    #[serde(default)]
    pub z: Option<f32>,
    #[serde(default)]
    pub xy_corrected: bool,
    #[serde(default)]
    pub error: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Query {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    pub points: Vec<SessionPoint>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl Session {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let session: Self = if is_json {
            serde_json::from_str(&text)?
        } else {
            serde_yaml::from_str(&text)?
        };
        debug!(
            path = %path.display(),
            points = session.points.len(),
            queries = session.queries.len(),
            "loaded probe session"
        );
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.points.len() > MAX_PROBE_POINTS {
            return Err(CliError::InvalidSession(format!(
                "{} points listed but at most {MAX_PROBE_POINTS} can be stored",
                self.points.len()
            )));
        }
        let all_finite = self.points.iter().all(|p| {
            p.x.is_finite() && p.y.is_finite() && p.z.is_none_or(f32::is_finite)
        });
        if !all_finite {
            return Err(CliError::InvalidSession(
                "probe point coordinates must be finite".to_string(),
            ));
        }
        Ok(())
    }

    /// Replays the session into a fresh registry, the way the probing
    /// driver would: XY for every point, then Z for the probed ones.
    pub fn registry(&self) -> Result<ProbePointRegistry, CliError> {
        let mut registry = ProbePointRegistry::new();
        for (index, point) in self.points.iter().enumerate() {
            registry.set_xy(index, point.x, point.y)?;
        }
        for (index, point) in self.points.iter().enumerate() {
            if let Some(z) = point.z {
                registry.set_z(index, z, point.xy_corrected, point.error)?;
            }
        }
        Ok(registry)
    }
}
