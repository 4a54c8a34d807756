//! Center-of-mass frame transforms.

use crate::bodies::CelestialBody;
use crate::math::Vector3;

/// Returns the mass-weighted center-of-mass position and velocity.
///
/// `None` when the total mass is zero, in which case no barycenter exists.
pub fn center_of_mass(bodies: &[CelestialBody]) -> Option<(Vector3, Vector3)> {
    let total_mass: f64 = bodies.iter().map(|b| b.mass).sum();
    if total_mass == 0.0 {
        return None;
    }

    let mut weighted_position = Vector3::ZERO;
    let mut weighted_velocity = Vector3::ZERO;
    for body in bodies {
        weighted_position += body.position * body.mass;
        weighted_velocity += body.velocity * body.mass;
    }

    Some((weighted_position / total_mass, weighted_velocity / total_mass))
}

/// Shifts `bodies` into the frame where the center of mass sits at the origin
/// and the net momentum is zero.
///
/// A collection with zero total mass is left untouched.
pub fn normalize_to_barycenter(bodies: &mut [CelestialBody]) {
    let Some((r_cm, v_cm)) = center_of_mass(bodies) else {
        return;
    };

    for body in bodies.iter_mut() {
        body.position -= r_cm;
        body.velocity -= v_cm;
    }

    log::debug!("shifted {} bodies by r_cm = {}, v_cm = {}", bodies.len(), r_cm, v_cm);
}
