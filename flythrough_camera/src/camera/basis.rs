/// Basis — camera-local orthonormal frame.
///
/// Rebuilt from `look` and the caller's nominal `up` every time it is
/// needed. Nothing is cached between frames, so the frame cannot drift
/// away from the vectors the caller holds.

use glam::Vec3;
use crate::error::{Error, Result};

/// Maximum allowed deviation of `|v|` from 1 for unit-vector inputs.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-6;

/// Check the unit-length contract on a caller-supplied vector.
///
/// `field` names the argument in the returned error.
pub fn ensure_unit_length(field: &'static str, v: Vec3) -> Result<()> {
    let length = v.length();
    if !length.is_finite() {
        return Err(Error::precondition(field, format!("{} has non-finite components", v)));
    }
    if (length - 1.0).abs() >= UNIT_LENGTH_TOLERANCE {
        return Err(Error::precondition(
            field,
            format!("length {} is not within {} of 1", length, UNIT_LENGTH_TOLERANCE),
        ));
    }
    Ok(())
}

/// Orthonormal camera frame.
///
/// - `across`: camera right, `forward × up`
/// - `forward`: normalized look direction
/// - `upward`: true camera up, `across × forward`
///
/// Right-handed: `across × forward == upward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub across: Vec3,
    pub forward: Vec3,
    pub upward: Vec3,
}

impl Basis {
    /// Build the frame from a look direction and a nominal up direction.
    ///
    /// Both vectors are renormalized first; `up` only needs to be non-zero.
    /// Fails with `PreconditionViolated` when either vector is zero or
    /// non-finite, or when `look` is parallel to `up`.
    pub fn new(look: Vec3, up: Vec3) -> Result<Self> {
        let forward = look
            .try_normalize()
            .ok_or_else(|| Error::precondition("look", "zero-length or non-finite"))?;
        let up_norm = up
            .try_normalize()
            .ok_or_else(|| Error::precondition("up", "zero-length or non-finite"))?;

        let across = forward
            .cross(up_norm)
            .try_normalize()
            .ok_or_else(|| Error::precondition("look", "parallel to up, camera basis is degenerate"))?;

        // across and forward are orthonormal, the cross product is unit up to rounding
        let upward = across.cross(forward).normalize();

        Ok(Self {
            across,
            forward,
            upward,
        })
    }
}

#[cfg(test)]
#[path = "basis_tests.rs"]
mod tests;
