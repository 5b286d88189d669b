//! Camera module — flythrough camera update and look-to view matrix.
//!
//! Pure functions over caller-owned data. The crate does NOT store or
//! manage cameras: the caller owns the `FlythroughCamera` state and
//! passes it in every frame.

mod basis;
mod flythrough;
mod input;
mod settings;
mod view;

pub use basis::{ensure_unit_length, Basis, UNIT_LENGTH_TOLERANCE};
pub use flythrough::{update, FlythroughCamera};
pub use input::{CameraInput, MovementKeys};
pub use settings::FlythroughSettings;
pub use view::{look_to, look_to_matrix, ViewFlags};
