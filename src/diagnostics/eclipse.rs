//! Analytic solar eclipse geometry from an idealized shadow-cone model.

use crate::core::config::PhysicalConstants;
use crate::math::Vector3;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the shadow cast on the Earth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EclipseType {
    #[default]
    None,
    Total,
    Annular,
    Partial,
}

impl EclipseType {
    /// Numeric code used in tabular output: 0 none, 1 total, 2 annular, 3 partial
    pub fn as_code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Total => 1,
            Self::Annular => 2,
            Self::Partial => 3,
        }
    }
}

impl fmt::Display for EclipseType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Total => "total",
            Self::Annular => "annular",
            Self::Partial => "partial",
        };
        f.write_str(name)
    }
}

/// Shadow geometry at the Earth for one configuration of Sun, Earth and Moon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipseResult {
    /// Sub-shadow point on the Earth's surface facing the Moon
    pub shadow_center: Vector3,

    /// Umbra radius at the Earth's distance, negative once past the umbra apex
    pub umbra_radius: f64,

    /// Penumbra radius at the Earth's distance
    pub penumbra_radius: f64,

    pub eclipse_type: EclipseType,
}

impl EclipseResult {
    /// The "no eclipse" result for geometry where the cone model is undefined
    pub fn degenerate(earth: Vector3) -> Self {
        Self {
            shadow_center: earth,
            umbra_radius: 0.0,
            penumbra_radius: 0.0,
            eclipse_type: EclipseType::None,
        }
    }
}

/// Computes the Moon's shadow cones at the Earth.
///
/// Zero Sun-Moon or Earth-Moon separation returns [`EclipseResult::degenerate`].
/// Classification rules are checked in order and the first match wins:
/// total, annular, partial, none.
pub fn compute_eclipse(
    sun: Vector3,
    earth: Vector3,
    moon: Vector3,
    constants: &PhysicalConstants,
) -> EclipseResult {
    let moon_to_earth = earth - moon;
    let sun_to_moon = moon - sun;

    let d_em = moon_to_earth.length();
    let d_sm = sun_to_moon.length();

    if d_em <= 0.0 || d_sm <= 0.0 {
        return EclipseResult::degenerate(earth);
    }

    let r_sun = constants.sun_radius;
    let r_earth = constants.earth_radius;
    let r_moon = constants.moon_radius;

    // Cone lengths measured from the Moon
    let umbra_length = r_moon * d_sm / (r_sun - r_moon);
    let penumbra_length = r_moon * d_sm / (r_sun + r_moon);

    let umbra_radius = r_moon * (1.0 - d_em / umbra_length);
    let penumbra_radius = r_moon * (1.0 + d_em / penumbra_length);

    let shadow_center = earth - moon_to_earth.normalize() * r_earth;

    let eclipse_type = if umbra_radius > r_earth {
        EclipseType::Total
    } else if umbra_radius < 0.0 && penumbra_radius > r_earth {
        EclipseType::Annular
    } else if penumbra_radius > 0.0 {
        EclipseType::Partial
    } else {
        EclipseType::None
    };

    EclipseResult {
        shadow_center,
        umbra_radius,
        penumbra_radius,
        eclipse_type,
    }
}
