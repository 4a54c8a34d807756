use approx::{assert_abs_diff_eq, assert_relative_eq};
use orbit_sim::math::{relative_change, Vector3};

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector3::new(3.0, 3.0, 3.0));

    // Scalar multiplication from either side
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(2.0 * v1, v1 * 2.0);

    // Scalar division
    assert_eq!(v2 / 2.0, Vector3::new(2.0, 2.5, 3.0));

    // Component-wise multiplication
    assert_eq!(v1.component_mul(&v2), Vector3::new(4.0, 10.0, 18.0));

    // Negation
    assert_eq!(-v1, Vector3::new(-1.0, -2.0, -3.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 5.0 + 3.0 * 6.0);

    // Cross product
    let cross = v1.cross(&v2);
    assert_eq!(cross.x, v1.y * v2.z - v1.z * v2.y);
    assert_eq!(cross.y, v1.z * v2.x - v1.x * v2.z);
    assert_eq!(cross.z, v1.x * v2.y - v1.y * v2.x);
    assert_eq!(cross.dot(&v1), 0.0);
    assert_eq!(cross.dot(&v2), 0.0);

    // Length
    assert_eq!(v1.length_squared(), 14.0);
    assert_relative_eq!(v1.length(), 14.0f64.sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, v1 / v1.length());
}

#[test]
fn test_vector3_assign_operators() {
    let mut v = Vector3::new(1.0, 1.0, 1.0);
    v += Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(v, Vector3::new(2.0, 3.0, 4.0));

    v -= Vector3::new(2.0, 2.0, 2.0);
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));

    v *= 3.0;
    assert_eq!(v, Vector3::new(0.0, 3.0, 6.0));

    v /= 3.0;
    assert_eq!(v, Vector3::new(0.0, 1.0, 2.0));
}

#[test]
fn test_right_handed_basis() {
    assert_eq!(Vector3::unit_x().cross(&Vector3::unit_y()), Vector3::unit_z());
    assert_eq!(Vector3::unit_y().cross(&Vector3::unit_z()), Vector3::unit_x());
    assert_eq!(Vector3::unit_z().cross(&Vector3::unit_x()), Vector3::unit_y());
}

#[test]
fn test_normalize_zero_vector_is_zero() {
    let n = Vector3::zero().normalize();
    assert_eq!(n, Vector3::ZERO);
    assert!(n.is_finite());
    assert!(n.is_zero());
}

#[test]
fn test_normalize_tiny_vector_keeps_direction() {
    let tiny = Vector3::new(0.0, 1.0e-150, 0.0);
    assert_relative_eq!(tiny.normalize(), Vector3::unit_y());
}

#[test]
fn test_distance_and_lerp() {
    let a = Vector3::new(1.0, 0.0, 0.0);
    let b = Vector3::new(4.0, 4.0, 0.0);
    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(a.distance_squared(&b), 25.0);
    assert_eq!(a.lerp(&b, 0.5), Vector3::new(2.5, 2.0, 0.0));
}

#[test]
fn test_sum_of_vectors() {
    let total: Vector3 = [
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        Vector3::new(0.0, 0.0, 3.0),
    ]
    .into_iter()
    .sum();
    assert_eq!(total, Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_nalgebra_conversion_agrees() {
    let a = Vector3::new(0.3, -1.2, 2.5);
    let b = Vector3::new(-4.0, 0.5, 1.5);

    let na_cross = a.to_nalgebra().cross(&b.to_nalgebra());
    assert_relative_eq!(Vector3::from_nalgebra(&na_cross), a.cross(&b));
    assert_relative_eq!(a.to_nalgebra().norm(), a.length());
}

#[test]
fn test_array_conversion_and_serde() {
    let v = Vector3::from([1.0, -2.0, 3.5]);
    let array: [f64; 3] = v.into();
    assert_eq!(array, [1.0, -2.0, 3.5]);

    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "[1.0,-2.0,3.5]");
    let back: Vector3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_relative_change() {
    assert_abs_diff_eq!(relative_change(-10.0, -9.0), 0.1);
    assert_abs_diff_eq!(relative_change(4.0, 5.0), 0.25);
    // Zero baseline reports the absolute change
    assert_eq!(relative_change(0.0, 0.5), 0.5);
}
