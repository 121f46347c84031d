use super::*;

#[test]
fn accessors_return_axes() {
    let c = Coordinate3D::new(3_i64, -4, 5);
    assert_eq!(c.x(), 3);
    assert_eq!(c.y(), -4);
    assert_eq!(c.z(), 5);
}

#[test]
fn equality_is_by_value() {
    assert_eq!(Coordinate3D::new(1, 2, 3), Coordinate3D::new(1, 2, 3));
    assert_ne!(Coordinate3D::new(1, 2, 3), Coordinate3D::new(1, 2, 4));
    assert_ne!(Coordinate3D::new(0, 2, 3), Coordinate3D::new(1, 2, 3));
}

#[test]
fn with_z_keeps_plane_position() {
    let c = Coordinate3D::new(10_i64, 20, 0).with_z(5);
    assert_eq!(c, Coordinate3D::new(10, 20, 5));
}

#[test]
fn from_tuple() {
    let c: Coordinate3D<i64> = (7, 8, 9).into();
    assert_eq!(c, Coordinate3D::new(7, 8, 9));
}

#[test]
fn extreme_values_are_legal() {
    let c = Coordinate3D::new(i64::MIN, i64::MAX, 0);
    assert_eq!(c.x(), i64::MIN);
    assert_eq!(c.y(), i64::MAX);
}

#[test]
fn generic_over_float_scalars() {
    let c = Coordinate3D::new(0.5_f64, 1.5, -2.0);
    assert!((c.y() - 1.5).abs() < f64::EPSILON);
}

#[test]
fn serializes_as_named_axes() {
    let json = serde_json::to_value(Coordinate3D::new(1_i64, 2, 3)).unwrap();
    assert_eq!(json, serde_json::json!({ "x": 1, "y": 2, "z": 3 }));
}
