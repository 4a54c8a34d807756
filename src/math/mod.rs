mod vector;

pub use vector::Vector3;

/// Returns `(current - baseline) / |baseline|`, falling back to the absolute change
/// when the baseline is exactly zero
#[inline]
pub fn relative_change(baseline: f64, current: f64) -> f64 {
    let scale = baseline.abs();
    if scale > 0.0 {
        (current - baseline) / scale
    } else {
        current - baseline
    }
}
