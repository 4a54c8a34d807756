//! Pairwise Newtonian gravity.

use crate::bodies::CelestialBody;
use crate::core::config::{PhysicalConstants, DEFAULT_MIN_DISTANCE_SQUARED, GRAVITATIONAL_CONSTANT};
use crate::forces::ForceModel;
use crate::math::Vector3;

/// Direct-summation Newtonian gravity between every pair of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    /// Gravitational constant G
    pub gravitational_constant: f64,

    /// Pairs with squared separation below this value contribute nothing.
    ///
    /// This is a hard cutoff, not a physical softening length.
    pub min_distance_squared: f64,
}

impl NewtonianGravity {
    /// Creates a gravity model with the given constant and the default cutoff
    pub fn new(gravitational_constant: f64) -> Self {
        Self {
            gravitational_constant,
            min_distance_squared: DEFAULT_MIN_DISTANCE_SQUARED,
        }
    }

    /// Creates a gravity model from a constants table
    pub fn from_constants(constants: &PhysicalConstants) -> Self {
        Self::new(constants.gravitational_constant)
    }

    /// Sets the squared cutoff distance
    pub fn with_min_distance_squared(mut self, min_distance_squared: f64) -> Self {
        self.min_distance_squared = min_distance_squared.max(0.0);
        self
    }

    /// Computes the accelerations of `bodies` at their current positions into `out`
    pub fn compute_accelerations(&self, bodies: &[CelestialBody], out: &mut [Vector3]) {
        let masses: Vec<f64> = bodies.iter().map(|b| b.mass).collect();
        let positions: Vec<Vector3> = bodies.iter().map(|b| b.position).collect();
        self.accumulate(&masses, &positions, out);
    }
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self::new(GRAVITATIONAL_CONSTANT)
    }
}

impl ForceModel for NewtonianGravity {
    fn accumulate(&self, masses: &[f64], positions: &[Vector3], out: &mut [Vector3]) {
        debug_assert_eq!(masses.len(), positions.len());
        debug_assert_eq!(masses.len(), out.len());

        for a in out.iter_mut() {
            *a = Vector3::ZERO;
        }

        let n = positions.len();

        // Each unordered pair is visited once and both sides are updated with
        // equal and opposite contributions, so the pass conserves momentum.
        for i in 0..n {
            let xi = positions[i];
            let mi = masses[i];

            for j in (i + 1)..n {
                let r = positions[j] - xi;
                let r2 = r.length_squared();
                if r2 < self.min_distance_squared || r2 == 0.0 {
                    continue;
                }

                // G / r^3
                let coef = self.gravitational_constant / (r2 * r2.sqrt());

                out[i] += r * (coef * masses[j]);
                out[j] -= r * (coef * mi);
            }
        }
    }

    fn name(&self) -> &str {
        "NewtonianGravity"
    }
}
