//! Drives the page's background canvas.
//!
//! Sizes `#bg-canvas` to the window, regenerates the field when the window
//! resizes, and runs the simulation from a `requestAnimationFrame` loop that
//! reads the shared pointer position every frame.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::state::ParticleField;
use crate::components::dom;
use crate::components::frame::{self, CancelToken};
use crate::components::pointer::{OFF_CANVAS, PointerContext};
use crate::components::theme::FieldStyle;

/// Id of the canvas the page provides for the background.
pub const CANVAS_ID: &str = "bg-canvas";

/// Starts animating `#bg-canvas` until `cancel` is set.
///
/// Returns `false` when the page has no such canvas; an error when the
/// browser refuses a 2D context.
pub fn install(
	field: &FieldStyle,
	pointer: &PointerContext,
	cancel: &CancelToken,
) -> Result<bool, JsValue> {
	let window = dom::window()?;
	let Some(canvas) = dom::document()?.get_element_by_id(CANVAS_ID) else {
		debug!("portfolio-fx: no #{} on this page", CANVAS_ID);
		return Ok(false);
	};
	let canvas: HtmlCanvasElement = canvas.dyn_into()?;

	let (w, h) = dom::viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let mut ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
		.dyn_into()?;

	let field = Rc::new(RefCell::new(ParticleField::new(field.clone(), w, h)));

	let field_resize = field.clone();
	dom::listen(&window, "resize", move |_| {
		let Some(win) = web_sys::window() else {
			return;
		};
		let Ok((nw, nh)) = dom::viewport_size(&win) else {
			return;
		};
		canvas.set_width(nw as u32);
		canvas.set_height(nh as u32);
		field_resize.borrow_mut().resize(nw, nh);
	})?;

	info!(
		"portfolio-fx: particle field running with {} particles",
		field.borrow().particles.len()
	);

	let pointer = pointer.clone();
	frame::run_every_frame("particle field", cancel.clone(), move || {
		field.borrow_mut().step(&mut ctx, pointer.or(OFF_CANVAS));
	});
	Ok(true)
}
