use glam::Vec3;
use crate::error::Error;
use super::*;

const EPS: f32 = 1e-6;

fn assert_orthonormal(basis: &Basis) {
    assert!((basis.across.length() - 1.0).abs() < EPS, "across not unit: {}", basis.across);
    assert!((basis.forward.length() - 1.0).abs() < EPS, "forward not unit: {}", basis.forward);
    assert!((basis.upward.length() - 1.0).abs() < EPS, "upward not unit: {}", basis.upward);
    assert!(basis.across.dot(basis.forward).abs() < EPS);
    assert!(basis.across.dot(basis.upward).abs() < EPS);
    assert!(basis.forward.dot(basis.upward).abs() < EPS);
}

// ============================================================================
// Basis::new
// ============================================================================

#[test]
fn test_basis_canonical_frame() {
    let basis = Basis::new(Vec3::NEG_Z, Vec3::Y).unwrap();

    assert!(basis.across.abs_diff_eq(Vec3::X, EPS));
    assert!(basis.forward.abs_diff_eq(Vec3::NEG_Z, EPS));
    assert!(basis.upward.abs_diff_eq(Vec3::Y, EPS));
}

#[test]
fn test_basis_is_right_handed() {
    let look = Vec3::new(0.3, -0.4, 0.5).normalize();
    let basis = Basis::new(look, Vec3::Y).unwrap();

    assert!(basis.across.cross(basis.forward).abs_diff_eq(basis.upward, 1e-5));
}

#[test]
fn test_basis_tilted_look_is_orthonormal() {
    let look = Vec3::new(1.0, 1.0, 0.0).normalize();
    let basis = Basis::new(look, Vec3::Y).unwrap();

    assert_orthonormal(&basis);
    // true up leans back against the look direction
    assert!(basis.upward.y > 0.0);
    assert!(basis.upward.x < 0.0);
}

#[test]
fn test_basis_renormalizes_up() {
    let look = Vec3::new(0.0, 0.2, -1.0).normalize();
    let unit = Basis::new(look, Vec3::Y).unwrap();
    let scaled = Basis::new(look, Vec3::new(0.0, 7.5, 0.0)).unwrap();

    assert!(unit.across.abs_diff_eq(scaled.across, EPS));
    assert!(unit.upward.abs_diff_eq(scaled.upward, EPS));
}

#[test]
fn test_basis_z_up_convention() {
    let basis = Basis::new(Vec3::X, Vec3::Z).unwrap();

    assert!(basis.across.abs_diff_eq(Vec3::NEG_Y, EPS));
    assert!(basis.upward.abs_diff_eq(Vec3::Z, EPS));
    assert_orthonormal(&basis);
}

// ============================================================================
// Degenerate input
// ============================================================================

#[test]
fn test_basis_look_parallel_to_up() {
    let err = Basis::new(Vec3::Y, Vec3::Y).unwrap_err();
    assert!(matches!(err, Error::PreconditionViolated { field: "look", .. }));

    let err = Basis::new(Vec3::NEG_Y, Vec3::Y).unwrap_err();
    assert!(matches!(err, Error::PreconditionViolated { field: "look", .. }));
}

#[test]
fn test_basis_zero_vectors() {
    assert!(matches!(
        Basis::new(Vec3::ZERO, Vec3::Y),
        Err(Error::PreconditionViolated { field: "look", .. })
    ));
    assert!(matches!(
        Basis::new(Vec3::NEG_Z, Vec3::ZERO),
        Err(Error::PreconditionViolated { field: "up", .. })
    ));
}

#[test]
fn test_basis_non_finite() {
    assert!(Basis::new(Vec3::new(f32::NAN, 0.0, -1.0), Vec3::Y).is_err());
    assert!(Basis::new(Vec3::NEG_Z, Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
}

// ============================================================================
// ensure_unit_length
// ============================================================================

#[test]
fn test_ensure_unit_length_accepts_unit_vectors() {
    assert!(ensure_unit_length("look", Vec3::NEG_Z).is_ok());
    assert!(ensure_unit_length("look", Vec3::new(1.0, 2.0, 3.0).normalize()).is_ok());
}

#[test]
fn test_ensure_unit_length_rejects_drift() {
    let err = ensure_unit_length("look", Vec3::new(0.0, 0.0, 1.0001)).unwrap_err();
    match err {
        Error::PreconditionViolated { field, reason } => {
            assert_eq!(field, "look");
            assert!(reason.contains("length"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_ensure_unit_length_rejects_zero_and_nan() {
    assert!(ensure_unit_length("up", Vec3::ZERO).is_err());
    assert!(ensure_unit_length("up", Vec3::new(f32::NAN, 1.0, 0.0)).is_err());
}
