use crate::bodies::CelestialBody;

/// Trait for fixed-step numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances every body by one time step of `dt` seconds, in place.
    ///
    /// An empty slice is a no-op. Body order is preserved.
    fn step(&mut self, bodies: &mut [CelestialBody], dt: f64);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
