/// CameraInput — one frame of user input.
///
/// Ephemeral: filled by the host's input polling, consumed by one
/// `update` call, then dropped.

use glam::IVec2;

/// Held movement keys (suggested layout: W, A, S, D, space, ctrl).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub left: bool,
    pub backward: bool,
    pub right: bool,
    pub jump: bool,
    pub crouch: bool,
}

impl MovementKeys {
    /// Signed axis for an exclusive key pair; both or neither held gives 0.
    const fn axis(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// `(x, z)` multipliers for the `across` and `forward` axes.
    pub const fn planar_axes(&self) -> (f32, f32) {
        (
            Self::axis(self.right, self.left),
            Self::axis(self.forward, self.backward),
        )
    }

    /// Multiplier for movement along `up`.
    pub const fn vertical_axis(&self) -> f32 {
        Self::axis(self.jump, self.crouch)
    }

    /// True if any key is held, whether or not it is cancelled.
    pub const fn any(&self) -> bool {
        self.forward || self.left || self.backward || self.right || self.jump || self.crouch
    }
}

/// Input for a single camera update.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraInput {
    /// Seconds since the previous update (>= 0)
    pub delta_time_seconds: f32,
    /// Cursor movement since the previous update, in screen units (Y down)
    pub cursor_delta: IVec2,
    pub keys: MovementKeys,
}

impl CameraInput {
    /// A frame with no cursor movement and no keys held.
    pub fn idle(delta_time_seconds: f32) -> Self {
        Self {
            delta_time_seconds,
            ..Default::default()
        }
    }

    pub fn with_cursor_delta(mut self, dx: i32, dy: i32) -> Self {
        self.cursor_delta = IVec2::new(dx, dy);
        self
    }

    pub fn with_keys(mut self, keys: MovementKeys) -> Self {
        self.keys = keys;
        self
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
