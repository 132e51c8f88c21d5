//! DOM wiring for the mobile menu and the navbar shadow.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::state::{MenuState, NavShadow};
use crate::components::dom;
use crate::components::theme::NavStyle;

/// Hooks up `#hamburger` and `#mobile-menu`. Returns `false` when either is
/// missing from the page.
pub fn install_menu(style: &NavStyle) -> Result<bool, JsValue> {
	let document = dom::document()?;
	let (Some(trigger), Some(menu)) = (
		document.get_element_by_id("hamburger"),
		document.get_element_by_id("mobile-menu"),
	) else {
		debug!("portfolio-fx: no mobile menu on this page");
		return Ok(false);
	};
	let body = document.body();
	let state = Rc::new(Cell::new(MenuState::default()));
	let class = style.open_class;

	let apply = {
		let (trigger, menu) = (trigger.clone(), menu.clone());
		move |menu_state: MenuState| -> Result<(), JsValue> {
			trigger.class_list().toggle_with_force(class, menu_state.open)?;
			menu.class_list().toggle_with_force(class, menu_state.open)?;
			if let Some(body) = &body {
				body.style()
					.set_property("overflow", menu_state.body_overflow())?;
			}
			Ok(())
		}
	};
	let apply = Rc::new(apply);

	{
		let (state, apply) = (state.clone(), apply.clone());
		dom::listen(&trigger, "click", move |_| {
			let mut next = state.get();
			next.toggle();
			state.set(next);
			let _ = apply(next);
		})?;
	}

	for link in dom::elements(&menu.query_selector_all("a")?) {
		let (state, apply) = (state.clone(), apply.clone());
		dom::listen(&link, "click", move |_| {
			let mut next = state.get();
			next.close();
			state.set(next);
			let _ = apply(next);
		})?;
	}

	Ok(true)
}

/// Keeps the first `nav` element's shadow in sync with the scroll offset.
/// Returns `false` when the page has no `nav`.
pub fn install_shadow(style: &NavStyle) -> Result<bool, JsValue> {
	let window = dom::window()?;
	let Some(nav) = dom::document()?.query_selector("nav")? else {
		debug!("portfolio-fx: no nav element on this page");
		return Ok(false);
	};
	let nav: HtmlElement = nav.dyn_into()?;
	let style = style.clone();

	let target = window.clone();
	dom::listen(&target, "scroll", move |_| {
		let offset = window.scroll_y().unwrap_or(0.0);
		let shadow = NavShadow::for_scroll(offset, &style);
		let _ = nav.style().set_property("box-shadow", shadow.css(&style));
	})?;
	Ok(true)
}
