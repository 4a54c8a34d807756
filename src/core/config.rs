use crate::error::PhysicsError;
use crate::Result;

use serde::{Deserialize, Serialize};

/// Newtonian gravitational constant in m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Mean solar radius in meters
pub const SUN_RADIUS: f64 = 6.957e8;

/// Mean Earth radius in meters
pub const EARTH_RADIUS: f64 = 6.371e6;

/// Mean lunar radius in meters
pub const MOON_RADIUS: f64 = 1.7374e6;

/// One astronomical unit in meters
pub const ASTRONOMICAL_UNIT: f64 = 1.495978707e11;

/// Pairs closer than this squared distance (m^2) exert no force on each other
pub const DEFAULT_MIN_DISTANCE_SQUARED: f64 = 1.0;

/// Read-only table of physical constants handed to the gravity, conservation
/// and eclipse operations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Gravitational constant G
    pub gravitational_constant: f64,

    /// Radius of the light source casting the shadow
    pub sun_radius: f64,

    /// Radius of the body receiving the shadow
    pub earth_radius: f64,

    /// Radius of the occluding body
    pub moon_radius: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            sun_radius: SUN_RADIUS,
            earth_radius: EARTH_RADIUS,
            moon_radius: MOON_RADIUS,
        }
    }
}

/// Configuration parameters for a simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The fixed time step in seconds
    pub time_step: f64,

    /// The number of steps to run
    pub steps: u64,

    /// Whether to move the bodies into the barycentric frame before the first step
    pub normalize_barycenter: bool,

    /// Squared separation below which a pair is skipped by the force pass
    pub min_distance_squared: f64,

    /// Diagnostics are emitted every this many steps
    pub diagnostics_interval: u64,

    /// Physical constants used throughout the run
    pub constants: PhysicalConstants,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 3600.0, // one hour
            steps: 8766,       // one year in hours
            normalize_barycenter: false,
            min_distance_squared: DEFAULT_MIN_DISTANCE_SQUARED,
            diagnostics_interval: 1,
            constants: PhysicalConstants::default(),
        }
    }
}

impl SimulationConfig {
    /// Checks the values the driver relies on
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "time_step must be positive and finite, got {}",
                self.time_step
            )));
        }

        if self.diagnostics_interval == 0 {
            return Err(PhysicsError::InvalidParameter(
                "diagnostics_interval must be at least 1".to_string(),
            ));
        }

        if !self.min_distance_squared.is_finite() || self.min_distance_squared < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "min_distance_squared must be non-negative, got {}",
                self.min_distance_squared
            )));
        }

        if !self.constants.gravitational_constant.is_finite() {
            return Err(PhysicsError::InvalidParameter(
                "gravitational_constant must be finite".to_string(),
            ));
        }

        Ok(())
    }

    /// Total simulated time covered by `steps`
    pub fn duration(&self) -> f64 {
        self.time_step * self.steps as f64
    }
}
