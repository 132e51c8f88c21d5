//! Per-character stagger timing for the hero heading.

use crate::components::theme::HeroStyle;

/// One character of the heading and when it starts animating.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
	pub ch: char,
	/// Transition delay in seconds.
	pub delay: f64,
}

impl Glyph {
	/// CSS `transition` value animating opacity and transform after `delay`.
	pub fn transition_css(&self, style: &HeroStyle) -> String {
		format!(
			"opacity {d}s {e} {delay:.2}s, transform {d}s {e} {delay:.2}s",
			d = style.duration,
			e = style.easing,
			delay = self.delay,
		)
	}
}

/// Splits the trimmed `text` into glyphs whose delays grow linearly with
/// their index, so the characters rise in one after another.
pub fn stagger(text: &str, style: &HeroStyle) -> Vec<Glyph> {
	text.trim()
		.chars()
		.enumerate()
		.map(|(i, ch)| Glyph {
			ch,
			delay: style.base_delay + style.step_delay * i as f64,
		})
		.collect()
}
