//! Smooth-follow cursor state.

use crate::components::theme::CursorStyle;

/// Position of the cursor marker and whether it is over something clickable.
#[derive(Clone, Debug)]
pub struct CursorState {
	pub x: f64,
	pub y: f64,
	pub hovered: bool,
	follow: f64,
}

impl CursorState {
	pub fn new(style: &CursorStyle) -> Self {
		Self {
			x: style.start.0,
			y: style.start.1,
			hovered: false,
			follow: style.follow,
		}
	}

	/// Moves a fixed fraction of the way towards `target`, which gives an
	/// exponential ease-out over successive frames.
	pub fn tick(&mut self, target: (f64, f64)) -> (f64, f64) {
		self.x += (target.0 - self.x) * self.follow;
		self.y += (target.1 - self.y) * self.follow;
		(self.x, self.y)
	}

	/// Returns whether the hover state actually changed.
	pub fn set_hovered(&mut self, hovered: bool) -> bool {
		let changed = self.hovered != hovered;
		self.hovered = hovered;
		changed
	}
}
