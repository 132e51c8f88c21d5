//! Mobile menu toggle and scroll-dependent navbar shadow.

mod controller;
mod state;

pub use controller::{install_menu, install_shadow};
pub use state::{MenuState, NavShadow};
