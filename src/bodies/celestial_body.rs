use crate::math::Vector3;
use serde::{Deserialize, Serialize};

/// A point mass taking part in the N-body simulation.
///
/// Accelerations are not stored on the body; they live in the integrator's
/// per-stage buffers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Label used for lookup only, never in arithmetic
    pub name: String,

    /// Mass in kilograms
    pub mass: f64,

    /// Position in meters
    pub position: Vector3,

    /// Velocity in meters per second
    pub velocity: Vector3,
}

impl CelestialBody {
    /// Creates a new body
    pub fn new(name: impl Into<String>, mass: f64, position: Vector3, velocity: Vector3) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
        }
    }

    /// Creates a body at rest at the given position
    pub fn at_rest(name: impl Into<String>, mass: f64, position: Vector3) -> Self {
        Self::new(name, mass, position, Vector3::ZERO)
    }

    /// Returns the body's name
    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Kinetic energy `0.5 * m * |v|^2`
    #[inline]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    /// Linear momentum `m * v`
    #[inline]
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass
    }

    /// Angular momentum about the origin, `m * (r x v)`
    #[inline]
    pub fn angular_momentum(&self) -> Vector3 {
        self.position.cross(&self.velocity) * self.mass
    }

    /// Returns true if the name matches, ignoring ASCII case
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Finds the first body with the given name, ignoring ASCII case
pub fn find_body<'a>(bodies: &'a [CelestialBody], name: &str) -> Option<&'a CelestialBody> {
    bodies.iter().find(|b| b.is_named(name))
}
