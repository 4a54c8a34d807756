use crate::math::Vector3;

/// Trait for acceleration sources acting on a body collection.
///
/// Implementations see the collection as parallel slices so that integrator stage
/// snapshots can be evaluated without building temporary bodies.
pub trait ForceModel: Send + Sync {
    /// Overwrites `out[i]` with the total acceleration of body `i`.
    ///
    /// `out` must be zeroed before any contribution is added, so every call is a
    /// complete evaluation of the given state. All slices have the same length.
    fn accumulate(&self, masses: &[f64], positions: &[Vector3], out: &mut [Vector3]);

    /// Returns the name of the force model
    fn name(&self) -> &str;
}
