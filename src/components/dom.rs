//! Small helpers over `web-sys` lookups and listeners.
//!
//! Everything here returns `Result<_, JsValue>` so callers can bubble browser
//! errors up with `?` and decide at the top whether to log and carry on.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

pub fn window() -> Result<Window, JsValue> {
	web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub fn document() -> Result<Document, JsValue> {
	window()?
		.document()
		.ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Inner size of the window in CSS pixels.
pub fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
	Ok((
		window.inner_width()?.as_f64().unwrap_or(0.0),
		window.inner_height()?.as_f64().unwrap_or(0.0),
	))
}

/// All elements in the document matching `selector`. No match is an empty list.
pub fn query_all(selector: &str) -> Result<Vec<Element>, JsValue> {
	Ok(elements(&document()?.query_selector_all(selector)?))
}

pub fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// Attaches `handler` for the lifetime of the page.
pub fn listen(
	target: &EventTarget,
	event: &str,
	handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
	let closure = Closure::<dyn FnMut(Event)>::new(handler);
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	closure.forget();
	Ok(())
}
