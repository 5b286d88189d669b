/// Flythrough camera update.
///
/// The camera state is a plain `{eye, look}` pair owned by the caller.
/// `update` reads one frame of input, moves `eye`, rotates `look`, and
/// optionally writes the resulting view matrix. No state is kept between
/// calls and nothing is allocated.

use glam::{Mat3, Mat4, Vec3};
use crate::error::{Error, Result};
use super::basis::{ensure_unit_length, Basis};
use super::input::CameraInput;
use super::settings::FlythroughSettings;
use super::view::{look_to, look_to_matrix, ViewFlags};

/// Persistent state of a flythrough camera.
///
/// `look` must stay unit length; `update` keeps it renormalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlythroughCamera {
    /// Eye position in world space
    pub eye: Vec3,
    /// Unit look direction in world space
    pub look: Vec3,
}

impl Default for FlythroughCamera {
    /// At the origin, looking down -Z.
    fn default() -> Self {
        Self {
            eye: Vec3::ZERO,
            look: Vec3::NEG_Z,
        }
    }
}

impl FlythroughCamera {
    /// Create a camera. `look` is normalized here; it must be non-zero.
    pub fn new(eye: Vec3, look: Vec3) -> Result<Self> {
        let look = look.try_normalize().ok_or_else(|| {
            let error = Error::precondition("look", "zero-length or non-finite");
            crate::camera_error!("flycam::camera", "Cannot create camera: {}", error);
            error
        })?;
        Ok(Self { eye, look })
    }

    /// View matrix for the current state (see [`look_to_matrix`]).
    pub fn view_matrix(&self, up: Vec3, flags: ViewFlags) -> Result<Mat4> {
        look_to_matrix(self.eye, self.look, up, flags)
    }
}

fn check_preconditions(camera: &FlythroughCamera, up: Vec3, settings: &FlythroughSettings, input: &CameraInput) -> Result<()> {
    ensure_unit_length("look", camera.look)?;
    ensure_unit_length("up", up)?;
    settings.validate()?;

    let dt = input.delta_time_seconds;
    if !dt.is_finite() || dt < 0.0 {
        return Err(Error::precondition(
            "delta_time_seconds",
            format!("must be finite and >= 0, got {}", dt),
        ));
    }
    Ok(())
}

/// Remaining pitch headroom `(down, up)` in degrees before `look` would
/// come closer than `pole_margin_degrees` to `-up` or `up`.
pub(crate) fn pitch_headroom_degrees(look: Vec3, up: Vec3, pole_margin_degrees: f32) -> (f32, f32) {
    let cos_to_up = look.dot(up).clamp(-1.0, 1.0);
    let degrees_to_up = cos_to_up.acos().to_degrees();
    let degrees_to_down = (-cos_to_up).acos().to_degrees();

    let max_up = (degrees_to_up - pole_margin_degrees).max(0.0);
    let max_down = (degrees_to_down - pole_margin_degrees).max(0.0);
    (max_down, max_up)
}

/// Rotate a unit vector about a unit axis and renormalize the result.
fn rotate(v: Vec3, axis: Vec3, degrees: f32) -> Vec3 {
    let rotation = Mat3::from_axis_angle(axis, degrees.to_radians());
    (rotation * v).normalize()
}

/// Advance the camera by one frame of input.
///
/// In order:
/// 1. Cursor Y is inverted (screen Y-down to math Y-up).
/// 2. The camera frame is built from the current `look` and `up`.
/// 3. Held planar keys move `eye` along `across`/`forward` at `eye_speed`.
/// 4. Held jump/crouch keys move `eye` along `up`.
/// 5. Horizontal cursor movement yaws `look` about `up`.
/// 6. Vertical cursor movement pitches `look` about `across`, clamped so
///    `look` never comes closer than `90 - max_pitch_rotation_degrees`
///    degrees to `up` or `-up`.
/// 7. If `view` is given, it receives the new look-to matrix.
///
/// Opposite keys held together cancel on their axis. A zero cursor delta
/// leaves `look` bit-for-bit unchanged.
///
/// # Errors
///
/// Only on contract violation. Inputs are checked before `camera` is
/// modified:
/// - `PreconditionViolated` if `look` or `up` is not unit length, `look`
///   is parallel to `up`, or `delta_time_seconds` is negative or non-finite
/// - `InvalidSettings` if `settings` does not validate
///
/// The view matrix is built after the update, so with
/// `max_pitch_rotation_degrees == 90` a pitch that lands exactly on a pole
/// updates `camera` and then fails to produce `view`.
///
/// # Example
///
/// ```
/// use flythrough_camera::flycam::{self, CameraInput, FlythroughCamera, FlythroughSettings, MovementKeys, ViewFlags};
/// use flythrough_camera::glam::{Mat4, Vec3};
///
/// let mut camera = FlythroughCamera::default();
/// let mut view = Mat4::IDENTITY;
/// let input = CameraInput::idle(1.0 / 60.0)
///     .with_cursor_delta(3, -2)
///     .with_keys(MovementKeys { forward: true, ..Default::default() });
///
/// flycam::update(&mut camera, Vec3::Y, Some(&mut view), &FlythroughSettings::default(), &input, ViewFlags::empty())?;
/// # Ok::<(), flythrough_camera::flycam::Error>(())
/// ```
pub fn update(
    camera: &mut FlythroughCamera,
    up: Vec3,
    view: Option<&mut Mat4>,
    settings: &FlythroughSettings,
    input: &CameraInput,
    flags: ViewFlags,
) -> Result<()> {
    check_preconditions(camera, up, settings, input).map_err(|error| {
        crate::camera_error!("flycam::update", "Rejected input: {}", error);
        error
    })?;

    let cursor_dx = input.cursor_delta.x as f32;
    // screen Y grows downwards
    let cursor_dy = -(input.cursor_delta.y as f32);

    let basis = Basis::new(camera.look, up).map_err(|error| {
        crate::camera_error!("flycam::update", "Degenerate camera frame: {}", error);
        error
    })?;
    let up_norm = up.normalize();
    let step = settings.eye_speed * input.delta_time_seconds;

    let (x, z) = input.keys.planar_axes();
    if x != 0.0 || z != 0.0 {
        let movement = (basis.across * x + basis.forward * z).normalize();
        camera.eye += movement * step;
    }

    let y = input.keys.vertical_axis();
    if y != 0.0 {
        camera.eye += up_norm * y * step;
    }

    if cursor_dx != 0.0 {
        // positive angles rotate counter-clockwise, so moving right turns right
        let yaw_degrees = -cursor_dx * settings.degrees_per_cursor_move;
        camera.look = rotate(camera.look, up_norm, yaw_degrees);
    }

    if cursor_dy != 0.0 {
        let (max_down, max_up) =
            pitch_headroom_degrees(camera.look, up_norm, settings.pole_margin_degrees());
        let requested = cursor_dy * settings.degrees_per_cursor_move;
        let pitch_degrees = requested.clamp(-max_down, max_up);

        if pitch_degrees != requested {
            crate::camera_trace!(
                "flycam::update",
                "Pitch clamped from {:.3} to {:.3} degrees",
                requested,
                pitch_degrees
            );
        }

        // across comes from the pre-yaw frame; it stays perpendicular to up
        camera.look = rotate(camera.look, basis.across, pitch_degrees);
    }

    look_to(camera.eye, camera.look, up, view, flags)
}

#[cfg(test)]
#[path = "flythrough_tests.rs"]
mod tests;
