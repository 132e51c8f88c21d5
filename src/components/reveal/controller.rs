//! Wires a [`RevealTracker`] to an `IntersectionObserver`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::RevealTracker;
use crate::components::dom;
use crate::components::frame;
use crate::components::theme::RevealStyle;

/// Observes every element matching `style.selector` and gives each one
/// `style.class` the first time it becomes visible.
///
/// Returns the number of elements being watched.
pub fn install(style: &RevealStyle) -> Result<usize, JsValue> {
	let elements = dom::query_all(style.selector)?;
	if elements.is_empty() {
		debug!("portfolio-fx: nothing matches {}", style.selector);
		return Ok(0);
	}

	let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
	let targets = elements.clone();
	let (class, delay_ms) = (style.class, style.delay_ms);

	let on_change = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				let target = entry.target();
				let Some(index) = targets.iter().position(|el| *el == target) else {
					continue;
				};
				if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
					observer.unobserve(&target);
					if let Err(e) = reveal(target, class, delay_ms) {
						warn!("portfolio-fx: could not reveal element: {:?}", e);
					}
				}
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(style.threshold));
	let observer = IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init)?;
	for el in &elements {
		observer.observe(el);
	}
	on_change.forget();

	Ok(elements.len())
}

fn reveal(target: Element, class: &'static str, delay_ms: i32) -> Result<(), JsValue> {
	if delay_ms <= 0 {
		return target.class_list().add_1(class);
	}
	frame::after(delay_ms, move || {
		let _ = target.class_list().add_1(class);
	})
}
