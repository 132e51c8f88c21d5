//! Scroll-triggered, one-shot reveal animations.
//!
//! Used twice on the page: section content fading in (`.reveal` → `visible`)
//! and skill cards starting their bar animation shortly after they appear
//! (`.skill-card` → `animated`).

mod controller;
mod state;

pub use controller::install;
pub use state::{RevealSlot, RevealTracker};
