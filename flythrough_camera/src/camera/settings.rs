/// FlythroughSettings — per-camera tuning values.
///
/// Plain configuration struct: public fields, sensible defaults,
/// validated on every update before any state is touched.

use crate::error::{Error, Result};

/// Camera tuning, usually constant for the lifetime of a camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlythroughSettings {
    /// Eye movement in world units per second
    pub eye_speed: f32,
    /// Degrees of rotation per cursor unit (mouse sensitivity)
    pub degrees_per_cursor_move: f32,
    /// How far up or down the camera may look, in degrees.
    ///
    /// 0 locks pitch entirely, 90 allows looking straight up or down.
    /// Values close to 90 (80 is a good choice) keep `look` away from
    /// `up`, where the camera frame becomes degenerate.
    pub max_pitch_rotation_degrees: f32,
}

impl Default for FlythroughSettings {
    fn default() -> Self {
        Self {
            eye_speed: 10.0,
            degrees_per_cursor_move: 0.1,
            max_pitch_rotation_degrees: 80.0,
        }
    }
}

impl FlythroughSettings {
    /// Create settings from explicit values.
    pub fn new(eye_speed: f32, degrees_per_cursor_move: f32, max_pitch_rotation_degrees: f32) -> Self {
        Self {
            eye_speed,
            degrees_per_cursor_move,
            max_pitch_rotation_degrees,
        }
    }

    pub fn with_eye_speed(mut self, eye_speed: f32) -> Self {
        self.eye_speed = eye_speed;
        self
    }

    pub fn with_degrees_per_cursor_move(mut self, degrees: f32) -> Self {
        self.degrees_per_cursor_move = degrees;
        self
    }

    pub fn with_max_pitch_rotation_degrees(mut self, degrees: f32) -> Self {
        self.max_pitch_rotation_degrees = degrees;
        self
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSettings` if:
    /// - any value is NaN or infinite
    /// - `max_pitch_rotation_degrees` is outside `[0, 90]`
    ///
    /// A negative `eye_speed` is accepted and moves the camera against
    /// the held keys.
    pub fn validate(&self) -> Result<()> {
        if !self.eye_speed.is_finite() {
            return Err(Error::InvalidSettings(format!(
                "eye_speed must be finite, got {}",
                self.eye_speed
            )));
        }
        if !self.degrees_per_cursor_move.is_finite() {
            return Err(Error::InvalidSettings(format!(
                "degrees_per_cursor_move must be finite, got {}",
                self.degrees_per_cursor_move
            )));
        }
        if !(0.0..=90.0).contains(&self.max_pitch_rotation_degrees) {
            return Err(Error::InvalidSettings(format!(
                "max_pitch_rotation_degrees must be in [0, 90], got {}",
                self.max_pitch_rotation_degrees
            )));
        }
        Ok(())
    }

    /// Minimum angle, in degrees, kept between `look` and either pole.
    pub fn pole_margin_degrees(&self) -> f32 {
        90.0 - self.max_pitch_rotation_degrees
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
