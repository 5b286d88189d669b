/*!
# Flythrough Camera

Free-flying 3D camera for real-time applications.

Each frame the host application hands over elapsed time, cursor movement
and held keys; the crate moves the eye, yaws and pitches the look
direction, and builds a look-to view matrix. Windowing, input polling and
rendering stay with the caller.

## Architecture

- **Basis**: orthonormal camera frame (`across`, `forward`, `upward`)
- **update**: translation, yaw and clamped pitch for one frame
- **look_to**: world-to-view matrix from eye + look direction
- **FlythroughSettings**: speed, mouse sensitivity and pitch limit
- **log**: pluggable logger for contract violations and per-frame tracing

## Example

```
use flythrough_camera::flycam::{self, CameraInput, FlythroughCamera, FlythroughSettings, MovementKeys, ViewFlags};
use flythrough_camera::glam::{Mat4, Vec3};

let settings = FlythroughSettings::default();
let mut camera = FlythroughCamera::default();
let mut view = Mat4::IDENTITY;

// one frame: W held, mouse moved 4 units right
let input = CameraInput::idle(1.0 / 60.0)
    .with_cursor_delta(4, 0)
    .with_keys(MovementKeys { forward: true, ..Default::default() });
flycam::update(&mut camera, Vec3::Y, Some(&mut view), &settings, &input, ViewFlags::empty())?;
# Ok::<(), flythrough_camera::flycam::Error>(())
```
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main flycam namespace module
pub mod flycam {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera state, input, settings and the per-frame functions
    pub use crate::camera::*;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_max_severity, max_severity,
        };
    }
}

// Re-export math library at crate root
pub use glam;
