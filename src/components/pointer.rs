//! Latest pointer position, shared by the particle field and cursor follower.
//!
//! One window `mousemove` listener writes it; the frame loops only read.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::dom;

/// Position the particle field assumes before the pointer has moved.
pub const OFF_CANVAS: (f64, f64) = (-9999.0, -9999.0);

#[derive(Clone, Debug, Default)]
pub struct PointerContext {
	latest: Rc<Cell<Option<(f64, f64)>>>,
}

impl PointerContext {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(&self, x: f64, y: f64) {
		self.latest.set(Some((x, y)));
	}

	/// Last reported client coordinates, if the pointer has moved at all.
	pub fn get(&self) -> Option<(f64, f64)> {
		self.latest.get()
	}

	/// Last reported position, or `fallback` before the first move.
	pub fn or(&self, fallback: (f64, f64)) -> (f64, f64) {
		self.get().unwrap_or(fallback)
	}
}

/// Starts feeding window `mousemove` coordinates into `pointer`.
pub fn track(pointer: &PointerContext) -> Result<(), JsValue> {
	let pointer = pointer.clone();
	let window = dom::window()?;
	dom::listen(&window, "mousemove", move |ev| {
		if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
			pointer.set(ev.client_x() as f64, ev.client_y() as f64);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fallback_until_first_move() {
		let pointer = PointerContext::new();
		assert_eq!(pointer.get(), None);
		assert_eq!(pointer.or(OFF_CANVAS), OFF_CANVAS);

		let reader = pointer.clone();
		pointer.set(12.0, 34.0);
		assert_eq!(reader.or(OFF_CANVAS), (12.0, 34.0));
	}
}
