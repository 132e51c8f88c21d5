//! Page effects, one module per effect, plus the small amount of shared
//! browser plumbing they use.

pub mod cursor;
pub mod dom;
pub mod frame;
pub mod hero_text;
pub mod nav;
pub mod particle_field;
pub mod pointer;
pub mod reveal;
pub mod theme;
