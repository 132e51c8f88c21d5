//! Navigation bar state: mobile menu and scroll shadow.

use crate::components::theme::NavStyle;

/// Open/closed state of the mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	pub open: bool,
}

impl MenuState {
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	/// Page scrolling is locked while the menu covers it.
	pub fn scroll_lock(self) -> bool {
		self.open
	}

	/// Value for the body's `overflow` property.
	pub fn body_overflow(self) -> &'static str {
		if self.scroll_lock() { "hidden" } else { "" }
	}
}

/// Whether the fixed navigation bar draws its drop shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavShadow {
	Flat,
	Raised,
}

impl NavShadow {
	/// Raised strictly past the threshold offset; no hysteresis.
	pub fn for_scroll(offset_y: f64, style: &NavStyle) -> Self {
		if offset_y > style.shadow_offset {
			NavShadow::Raised
		} else {
			NavShadow::Flat
		}
	}

	pub fn css(self, style: &NavStyle) -> &'static str {
		match self {
			NavShadow::Raised => style.shadow,
			NavShadow::Flat => "none",
		}
	}
}
