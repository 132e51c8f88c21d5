//! Drives the page's custom cursor marker.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::state::CursorState;
use crate::components::dom;
use crate::components::frame::{self, CancelToken};
use crate::components::pointer::PointerContext;
use crate::components::theme::CursorStyle;

/// Id of the marker element the page provides.
pub const MARKER_ID: &str = "cursor-blob";

/// Makes `#cursor-blob` trail the pointer until `cancel` is set.
///
/// Hovering any element matching `cursor.hover_targets` adds
/// `cursor.hover_class` to the marker until the pointer leaves it. Returns
/// `false` when the page has no marker.
pub fn install(
	cursor: &CursorStyle,
	pointer: &PointerContext,
	cancel: &CancelToken,
) -> Result<bool, JsValue> {
	let Some(blob) = dom::document()?.get_element_by_id(MARKER_ID) else {
		debug!("portfolio-fx: no #{} on this page", MARKER_ID);
		return Ok(false);
	};
	let blob: HtmlElement = blob.dyn_into()?;
	let state = Rc::new(RefCell::new(CursorState::new(cursor)));

	let targets = dom::query_all(cursor.hover_targets)?;
	for target in &targets {
		for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
			let (state, blob, class) = (state.clone(), blob.clone(), cursor.hover_class);
			dom::listen(target, event, move |_| {
				if state.borrow_mut().set_hovered(hovered) {
					let _ = blob.class_list().toggle_with_force(class, hovered);
				}
			})?;
		}
	}
	debug!("portfolio-fx: cursor hover bound to {} elements", targets.len());

	let (start_at, pointer) = (cursor.start, pointer.clone());
	frame::run_every_frame("cursor", cancel.clone(), move || {
		let (x, y) = state.borrow_mut().tick(pointer.or(start_at));
		let css = blob.style();
		let _ = css.set_property("left", &format!("{x}px"));
		let _ = css.set_property("top", &format!("{y}px"));
	});
	Ok(true)
}
