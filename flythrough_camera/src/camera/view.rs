/// Look-to view matrix construction.
///
/// Builds the world-to-view transform from an eye position and a facing
/// direction (as opposed to look-at, which takes a target point).

use bitflags::bitflags;
use glam::{Mat4, Vec3, Vec4};
use crate::error::Result;
use super::basis::{ensure_unit_length, Basis};

bitflags! {
    /// Conventions for the produced view matrix.
    ///
    /// The empty set (default) produces a right-handed view matrix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ViewFlags: u32 {
        /// View-space Z points along `look` instead of against it.
        const LEFT_HANDED = 1;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Write the look-to view matrix for `eye`/`look`/`up` into `view`.
///
/// `view == None` returns `Ok(())` immediately without validating
/// anything, so state-only callers can share the same call site.
///
/// The matrix is column-major with rows `s`, `u`, `f` and translation
/// `-[s; u; f] * eye`, where `s = normalize(look × up)`,
/// `u = normalize(s × look)` and `f = -look` (right-handed) or
/// `f = look` (left-handed).
///
/// # Errors
///
/// `PreconditionViolated` if `look` or `up` is not unit length, or if
/// `look` is parallel to `up`. `view` is left untouched in that case.
pub fn look_to(
    eye: Vec3,
    look: Vec3,
    up: Vec3,
    view: Option<&mut Mat4>,
    flags: ViewFlags,
) -> Result<()> {
    let Some(view) = view else {
        return Ok(());
    };

    *view = look_to_matrix(eye, look, up, flags)?;
    Ok(())
}

/// Value-returning form of [`look_to`].
pub fn look_to_matrix(eye: Vec3, look: Vec3, up: Vec3, flags: ViewFlags) -> Result<Mat4> {
    ensure_unit_length("look", look)
        .and_then(|_| ensure_unit_length("up", up))
        .map_err(|error| {
            crate::camera_error!("flycam::look_to", "Rejected input: {}", error);
            error
        })?;

    let Basis { across: s, forward, upward: u } = Basis::new(look, up).map_err(|error| {
        crate::camera_error!("flycam::look_to", "Degenerate camera frame: {}", error);
        error
    })?;

    // Right-handed view space looks down -Z
    let f = if flags.contains(ViewFlags::LEFT_HANDED) {
        forward
    } else {
        -forward
    };

    Ok(Mat4::from_cols(
        Vec4::new(s.x, u.x, f.x, 0.0),
        Vec4::new(s.y, u.y, f.y, 0.0),
        Vec4::new(s.z, u.z, f.z, 0.0),
        Vec4::new(-s.dot(eye), -u.dot(eye), -f.dot(eye), 1.0),
    ))
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
