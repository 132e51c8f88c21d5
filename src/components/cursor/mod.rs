//! Custom cursor that eases towards the pointer each frame.

mod controller;
mod state;

pub use controller::{MARKER_ID, install};
pub use state::CursorState;
