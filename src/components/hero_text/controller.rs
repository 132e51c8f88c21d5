//! Replaces the hero heading's text with staggered character spans.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::state::stagger;
use crate::components::dom;
use crate::components::frame;
use crate::components::theme::HeroStyle;

/// Splits the heading into hidden spans and reveals them once layout has
/// settled. Returns `false` when the page has no heading to animate.
pub fn install(style: &HeroStyle) -> Result<bool, JsValue> {
	let document = dom::document()?;
	let Some(heading) = document.query_selector(style.selector)? else {
		debug!("portfolio-fx: no {} on this page", style.selector);
		return Ok(false);
	};

	let glyphs = stagger(&heading.text_content().unwrap_or_default(), style);
	heading.set_text_content(None);

	let mut spans = Vec::with_capacity(glyphs.len());
	for glyph in &glyphs {
		let span: HtmlElement = document.create_element("span")?.dyn_into()?;
		let css = span.style();
		css.set_property("display", "inline-block")?;
		css.set_property("opacity", "0")?;
		css.set_property("transform", &format!("translateY({}px)", style.rise))?;
		css.set_property("transition", &glyph.transition_css(style))?;
		span.set_text_content(Some(&glyph.ch.to_string()));
		heading.append_child(&span)?;
		spans.push(span);
	}

	let settle_ms = style.settle_ms;
	frame::next_frame(move || {
		let shown = frame::after(settle_ms, move || {
			for span in &spans {
				let css = span.style();
				let _ = css.set_property("opacity", "1");
				let _ = css.set_property("transform", "translateY(0)");
			}
		});
		if let Err(e) = shown {
			warn!("portfolio-fx: hero text left hidden: {:?}", e);
		}
	})?;
	Ok(true)
}
