use approx::assert_relative_eq;
use orbit_sim::core::config::{ASTRONOMICAL_UNIT as AU, EARTH_RADIUS};
use orbit_sim::{
    compute_eclipse, CelestialBody, EclipseResult, EclipseType, PhysicalConstants, Simulation,
    SimulationConfig, Vector3,
};

const EARTH_MOON_DISTANCE: f64 = 3.844e8;

fn earth() -> Vector3 {
    Vector3::new(AU, 0.0, 0.0)
}

/// Sun at the origin, Earth at 1 AU and the Moon `moon_distance` sunward of the Earth
fn collinear(moon_distance: f64, constants: &PhysicalConstants) -> EclipseResult {
    let moon = Vector3::new(AU - moon_distance, 0.0, 0.0);
    compute_eclipse(Vector3::ZERO, earth(), moon, constants)
}

fn assert_finite(result: &EclipseResult) {
    assert!(result.shadow_center.is_finite());
    assert!(result.umbra_radius.is_finite());
    assert!(result.penumbra_radius.is_finite());
}

#[test]
fn test_new_moon_at_mean_distance() {
    let result = collinear(EARTH_MOON_DISTANCE, &PhysicalConstants::default());

    // The umbra apex falls just short of the Earth's center, so the radius at the
    // Earth is slightly negative and the penumbra is smaller than the Earth
    assert_relative_eq!(result.umbra_radius, -50_369.041, max_relative = 1e-6);
    assert_relative_eq!(result.penumbra_radius, 3_534_120.734, max_relative = 1e-6);
    assert_eq!(result.eclipse_type, EclipseType::Partial);
    assert_finite(&result);
}

#[test]
fn test_shadow_center_faces_the_moon() {
    let result = collinear(EARTH_MOON_DISTANCE, &PhysicalConstants::default());
    assert_relative_eq!(
        result.shadow_center,
        Vector3::new(AU - EARTH_RADIUS, 0.0, 0.0),
        max_relative = 1e-15
    );
}

#[test]
fn test_distant_moon_is_annular() {
    let result = collinear(1.5e9, &PhysicalConstants::default());

    assert!(result.umbra_radius < 0.0);
    assert!(result.penumbra_radius > EARTH_RADIUS);
    assert_relative_eq!(result.umbra_radius, -5_291_356.694, max_relative = 1e-6);
    assert_relative_eq!(result.penumbra_radius, 8_801_350.988, max_relative = 1e-6);
    assert_eq!(result.eclipse_type, EclipseType::Annular);
}

#[test]
fn test_large_occluder_is_total() {
    let constants = PhysicalConstants {
        moon_radius: 1.0e7,
        ..PhysicalConstants::default()
    };
    let result = collinear(EARTH_MOON_DISTANCE, &constants);

    assert!(result.umbra_radius > constants.earth_radius);
    assert_relative_eq!(result.umbra_radius, 8_233_516.862, max_relative = 1e-6);
    // Total takes precedence over the partial rule that also matches
    assert!(result.penumbra_radius > 0.0);
    assert_eq!(result.eclipse_type, EclipseType::Total);
}

#[test]
fn test_nearer_moon_has_positive_umbra() {
    let result = collinear(3.0e8, &PhysicalConstants::default());
    assert_relative_eq!(result.umbra_radius, 342_947.561, max_relative = 1e-6);
    assert_eq!(result.eclipse_type, EclipseType::Partial);
}

#[test]
fn test_moon_off_the_sun_earth_line_is_still_partial() {
    // Quarter phase: the Moon sits beside the Earth, far from the Sun-Earth line.
    // The cone model has no alignment test, and the penumbra radius stays positive.
    let moon = Vector3::new(AU, EARTH_MOON_DISTANCE, 0.0);
    let result = compute_eclipse(Vector3::ZERO, earth(), moon, &PhysicalConstants::default());

    assert_relative_eq!(result.umbra_radius, -45_769.383, max_relative = 1e-6);
    assert_relative_eq!(result.penumbra_radius, 3_529_498.044, max_relative = 1e-6);
    assert_relative_eq!(result.shadow_center, Vector3::new(AU, EARTH_RADIUS, 0.0), max_relative = 1e-15);
    assert_eq!(result.eclipse_type, EclipseType::Partial);
}

#[test]
fn test_full_moon_is_still_partial() {
    let moon = Vector3::new(AU + EARTH_MOON_DISTANCE, 0.0, 0.0);
    let result = compute_eclipse(Vector3::ZERO, earth(), moon, &PhysicalConstants::default());

    assert_relative_eq!(result.umbra_radius, -41_205.046, max_relative = 1e-6);
    assert_relative_eq!(result.penumbra_radius, 3_524_910.853, max_relative = 1e-6);
    // The sub-shadow point faces the Moon, on the night side
    assert_relative_eq!(result.shadow_center, Vector3::new(AU + EARTH_RADIUS, 0.0, 0.0), max_relative = 1e-15);
    assert_eq!(result.eclipse_type, EclipseType::Partial);
}

#[test]
fn test_zero_sun_moon_distance_is_degenerate() {
    let sun = Vector3::new(1.0e8, 2.0e8, 3.0e8);
    let result = compute_eclipse(sun, earth(), sun, &PhysicalConstants::default());

    assert_eq!(result.eclipse_type, EclipseType::None);
    assert_eq!(result.shadow_center, earth());
    assert_eq!(result.umbra_radius, 0.0);
    assert_eq!(result.penumbra_radius, 0.0);
    assert_finite(&result);
}

#[test]
fn test_zero_earth_moon_distance_is_degenerate() {
    let result = compute_eclipse(Vector3::ZERO, earth(), earth(), &PhysicalConstants::default());
    assert_eq!(result, EclipseResult::degenerate(earth()));
    assert_finite(&result);
}

#[test]
fn test_eclipse_type_codes_and_names() {
    assert_eq!(EclipseType::None.as_code(), 0);
    assert_eq!(EclipseType::Total.as_code(), 1);
    assert_eq!(EclipseType::Annular.as_code(), 2);
    assert_eq!(EclipseType::Partial.as_code(), 3);

    assert_eq!(EclipseType::Annular.to_string(), "annular");
    assert_eq!(serde_json::to_string(&EclipseType::Total).unwrap(), "\"total\"");
}

#[test]
fn test_simulation_eclipse_lookup() {
    let sun = CelestialBody::at_rest("sun", 1.989e30, Vector3::ZERO);
    let earth_body = CelestialBody::at_rest("EARTH", 5.972e24, earth());
    let moon = CelestialBody::at_rest("Moon", 7.342e22, Vector3::new(AU - EARTH_MOON_DISTANCE, 0.0, 0.0));

    let without_moon = Simulation::new(vec![sun.clone(), earth_body.clone()], SimulationConfig::default()).unwrap();
    assert!(without_moon.eclipse().is_none());

    let with_moon = Simulation::new(vec![sun, earth_body, moon], SimulationConfig::default()).unwrap();
    let result = with_moon.eclipse().unwrap();
    assert_eq!(result.eclipse_type, EclipseType::Partial);
}
