//! Animated particle background.
//!
//! A fixed number of faint particles drift across a full-viewport canvas:
//! - Nearby pairs are joined by lines that fade out with distance
//! - The pointer pushes particles away within a small radius
//! - Speed is capped and damped; particles wrap around the viewport edges
//!
//! The simulation in [`ParticleField`] draws through the [`Surface`] trait
//! and does not touch the DOM, so it runs natively in unit tests.

mod controller;
mod particles;
mod render;
mod state;

pub use controller::{CANVAS_ID, install};
pub use particles::{Particle, Swatch};
pub use render::Surface;
pub use state::ParticleField;
