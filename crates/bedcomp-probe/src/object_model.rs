//! Read-only snapshot exposed to live status displays.

use serde::{Deserialize, Serialize};

/// Diagnostics view of a [`ProbePointRegistry`](crate::ProbePointRegistry).
///
/// Serialized field names follow the firmware object model so existing
/// status clients keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectModel {
    /// Points feeding the active compensation (0, 3 or 4).
    pub num_points_probed: u32,
    /// Leading slots that currently hold both XY and Z.
    pub num_points_ready: u32,
}

impl ObjectModel {
    pub(crate) fn new(num_points_probed: usize, num_points_ready: usize) -> Self {
        Self {
            num_points_probed: u32::try_from(num_points_probed).unwrap_or(u32::MAX),
            num_points_ready: u32::try_from(num_points_ready).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_object_model_names() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&ObjectModel::new(3, 4))?;
        assert_eq!(json, r#"{"numPointsProbed":3,"numPointsReady":4}"#);
        Ok(())
    }
}
