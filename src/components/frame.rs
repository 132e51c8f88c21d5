//! Animation-frame and timer scheduling.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, warn};
use wasm_bindgen::prelude::*;

use super::dom;

/// Shared stop flag for frame loops.
///
/// Atomic so it can be handed to Leptos' `on_cleanup`, which requires
/// `Send + Sync` callbacks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.store(true, Ordering::Relaxed);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.load(Ordering::Relaxed)
	}
}

/// Calls `tick` once per display refresh until `cancel` is set.
///
/// The callback re-arms itself through `requestAnimationFrame`; once the token
/// is cancelled it simply stops scheduling.
pub fn run_every_frame(name: &'static str, cancel: CancelToken, mut tick: impl FnMut() + 'static) {
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_inner = animate.clone();

	*animate.borrow_mut() = Some(Closure::new(move || {
		if cancel.is_cancelled() {
			debug!("portfolio-fx: {} loop stopped", name);
			return;
		}
		tick();
		if let Some(ref cb) = *animate_inner.borrow() {
			request_frame(cb);
		}
	}));

	if let Some(ref cb) = *animate.borrow() {
		request_frame(cb);
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
	let Some(window) = web_sys::window() else {
		warn!("portfolio-fx: no window to schedule a frame on");
		return;
	};
	if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		warn!("portfolio-fx: frame request failed, loop stopped: {:?}", e);
	}
}

/// Runs `f` once on the next animation frame.
pub fn next_frame(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
	let cb = Closure::once_into_js(f);
	dom::window()?.request_animation_frame(cb.unchecked_ref())?;
	Ok(())
}

/// Runs `f` once after `delay_ms` milliseconds.
pub fn after(delay_ms: i32, f: impl FnOnce() + 'static) -> Result<(), JsValue> {
	let cb = Closure::once_into_js(f);
	dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cancel_is_seen_by_every_clone() {
		let token = CancelToken::new();
		let loop_copy = token.clone();
		assert!(!loop_copy.is_cancelled());
		token.cancel();
		assert!(loop_copy.is_cancelled());
	}
}
