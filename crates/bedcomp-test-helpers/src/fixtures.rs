//! Probe point layouts shared by the registry tests.
//!
//! Every layout is clockwise from the bottom left, as fitting requires.

use bedcomp_probe::{ProbePointRegistry, ProbeResult};

/// A probed point as `(x, y, z)` in mm.
pub type Sample = (f32, f32, f32);

/// Three points on a tilted plane over a 10 mm square.
pub const TILTED_TRIANGLE: [Sample; 3] = [(0.0, 0.0, 1.0), (0.0, 10.0, 1.2), (10.0, 10.0, 0.8)];

/// Unit-height bump at the top left corner of a 10 mm square.
pub const RAISED_CORNER_QUAD: [Sample; 4] = [
    (0.0, 0.0, 0.0),
    (0.0, 10.0, 1.0),
    (10.0, 10.0, 0.0),
    (10.0, 0.0, 0.0),
];

/// Typical 4-point layout for a 235 mm bed with a 15 mm margin.
pub const PRINTER_BED_QUAD: [Sample; 4] = [
    (15.0, 15.0, 0.042),
    (15.0, 220.0, -0.031),
    (220.0, 220.0, 0.118),
    (220.0, 15.0, 0.065),
];

/// Records `samples` into slots `0..samples.len()` of `registry`, all probed
/// without error.
///
/// # Errors
///
/// Propagates any slot index or non-finite value error from the registry.
pub fn load(registry: &mut ProbePointRegistry, samples: &[Sample]) -> ProbeResult<()> {
    for (i, &(x, y, z)) in samples.iter().enumerate() {
        registry.set_xy(i, x, y)?;
        registry.set_z(i, z, false, false)?;
    }
    Ok(())
}

/// Fresh registry holding `samples`.
///
/// # Errors
///
/// Propagates any slot index or non-finite value error from the registry.
pub fn registry_with(samples: &[Sample]) -> ProbeResult<ProbePointRegistry> {
    let mut registry = ProbePointRegistry::new();
    load(&mut registry, samples)?;
    Ok(registry)
}
