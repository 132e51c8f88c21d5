//! portfolio-fx: decorative client-side effects for a static portfolio page.
//!
//! This crate compiles to WASM and mounts onto an existing page. It adds an
//! animated particle background with pointer repulsion, a smooth-follow
//! cursor, scroll-triggered reveals, a staggered hero heading, and the
//! navigation bar's mobile menu and scroll shadow.
//!
//! Every effect degrades silently: a missing optional element turns that
//! effect off and leaves the rest of the page alone.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsValue;

// Supplies `rand` with the browser's entropy source.
use getrandom as _;

pub mod components;

pub use components::frame::CancelToken;
pub use components::pointer::PointerContext;
pub use components::theme::Theme;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Logs a controller's outcome; a failure never stops the others.
fn report<T: std::fmt::Debug>(name: &str, result: Result<T, JsValue>) {
	match result {
		Ok(outcome) => info!("portfolio-fx: {} installed ({:?})", name, outcome),
		Err(e) => warn!("portfolio-fx: {} failed to install: {:?}", name, e),
	}
}

/// Attaches the event-driven effects to elements the page already contains.
fn enhance_page(theme: &Theme) {
	use components::{hero_text, nav, reveal};

	report("reveal", reveal::install(&theme.reveal));
	report("skill bars", reveal::install(&theme.skill_bar));
	report("mobile menu", nav::install_menu(&theme.nav));
	report("nav shadow", nav::install_shadow(&theme.nav));
	report("hero text", hero_text::install(&theme.hero));
}

/// Main application component.
///
/// Renders nothing of its own: it animates the page's `#bg-canvas` and
/// `#cursor-blob` and wires the rest of the page. Both frame loops stop when
/// the component is cleaned up.
#[component]
pub fn App() -> impl IntoView {
	use components::{cursor, particle_field};

	let theme = Theme::default();
	let pointer = PointerContext::new();
	let cancel = CancelToken::new();

	if let Err(e) = components::pointer::track(&pointer) {
		warn!("portfolio-fx: pointer tracking unavailable: {:?}", e);
	}

	let cancel_on_cleanup = cancel.clone();
	on_cleanup(move || cancel_on_cleanup.cancel());

	report(
		"particle field",
		particle_field::install(&theme.field, &pointer, &cancel),
	);
	report("cursor", cursor::install(&theme.cursor, &pointer, &cancel));
	enhance_page(&theme);
}
