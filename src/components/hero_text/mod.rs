//! Staggered entrance of the hero heading, one character at a time.

mod controller;
mod state;

pub use controller::install;
pub use state::{Glyph, stagger};
