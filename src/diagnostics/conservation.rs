//! Conservation-law diagnostics.
//!
//! These are observations of a snapshot and never feed back into the trajectory.

use crate::bodies::CelestialBody;
use crate::core::config::PhysicalConstants;
use crate::math::{relative_change, Vector3};

use serde::{Deserialize, Serialize};

/// Energy and momentum totals of a body collection at one instant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Conservations {
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub linear_momentum: Vector3,
    pub angular_momentum: Vector3,
}

/// Computes kinetic, potential and total energy plus linear and angular momentum.
///
/// Pairs at exactly zero separation are left out of the potential energy. An empty
/// collection yields all-zero fields.
pub fn compute_conservations(bodies: &[CelestialBody], constants: &PhysicalConstants) -> Conservations {
    let kinetic_energy: f64 = bodies.iter().map(CelestialBody::kinetic_energy).sum();

    let mut pair_sum = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = bi.position.distance(&bj.position);
            if r == 0.0 {
                continue;
            }
            pair_sum += bi.mass * bj.mass / r;
        }
    }
    let potential_energy = -constants.gravitational_constant * pair_sum;

    Conservations {
        kinetic_energy,
        potential_energy,
        total_energy: kinetic_energy + potential_energy,
        linear_momentum: bodies.iter().map(CelestialBody::momentum).sum(),
        angular_momentum: bodies.iter().map(CelestialBody::angular_momentum).sum(),
    }
}

/// Relative change of the conserved quantities against a baseline snapshot
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConservationDrift {
    /// `(E_t - E_0) / |E_0|`
    pub energy: f64,

    /// `|L_t - L_0| / |L_0|`
    pub angular_momentum: f64,

    /// `|P_t - P_0| / |P_0|`
    pub linear_momentum: f64,
}

impl ConservationDrift {
    /// Computes drift of `current` relative to `baseline`.
    ///
    /// A baseline of zero magnitude reports the absolute change instead.
    pub fn between(baseline: &Conservations, current: &Conservations) -> Self {
        Self {
            energy: relative_change(baseline.total_energy, current.total_energy),
            angular_momentum: vector_drift(baseline.angular_momentum, current.angular_momentum),
            linear_momentum: vector_drift(baseline.linear_momentum, current.linear_momentum),
        }
    }

    /// Largest absolute drift of the three quantities
    pub fn max_abs(&self) -> f64 {
        self.energy
            .abs()
            .max(self.angular_momentum.abs())
            .max(self.linear_momentum.abs())
    }
}

fn vector_drift(baseline: Vector3, current: Vector3) -> f64 {
    let change = (current - baseline).length();
    let scale = baseline.length();
    if scale > 0.0 {
        change / scale
    } else {
        change
    }
}
