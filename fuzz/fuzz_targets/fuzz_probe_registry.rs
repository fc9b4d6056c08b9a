//! Fuzzes the probe point registry with arbitrary probe results.
//!
//! Covers: recording XY and Z, readiness, ordering, 3/4-point fitting,
//! height-error evaluation and the height reports. Must never panic on
//! arbitrary input.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_probe_registry
#![no_main]
use bedcomp_probe::ProbePointRegistry;
use libfuzzer_sys::fuzz_target;

/// Bytes consumed per probe point: x, y and z as f32 plus a flags byte.
const POINT_BYTES: usize = 13;

fn f32_at(chunk: &[u8], offset: usize) -> f32 {
    let mut bytes = [0u8; 4];
    if let Some(src) = chunk.get(offset..offset + 4) {
        bytes.copy_from_slice(src);
    }
    f32::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let num_points = usize::from(count % 8);

    let mut registry = ProbePointRegistry::new();
    for (index, chunk) in rest.chunks_exact(POINT_BYTES).take(registry.capacity()).enumerate() {
        let flags = chunk.get(12).copied().unwrap_or_default();
        let _ = registry.set_xy(index, f32_at(chunk, 0), f32_at(chunk, 4));
        if flags & 0x80 == 0 {
            let _ = registry.set_z(index, f32_at(chunk, 8), flags & 1 != 0, flags & 2 != 0);
        }
    }

    let _ = registry.number_of_probe_points();
    let _ = registry.good_probe_points(num_points);
    let _ = registry.report_probe_heights(num_points).to_string();
    let _ = registry.debug_report(num_points).to_string();

    if registry.fit(num_points).is_ok() {
        for p in registry.points().iter().take(num_points) {
            let _ = registry.interpolated_height_error(p.x, p.y);
        }
        let _ = registry.object_model();
    }

    registry.clear_probe_heights();
    assert_eq!(registry.number_of_probe_points(), 0);
});
