//! Visual constants for every effect on the page.
//!
//! Each component reads its numbers from one of the style structs below; the
//! [`Theme`] default carries the values the page was designed with.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background particle field configuration.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Number of particles, fixed for a given viewport size
	pub count: usize,
	/// Brand accent swatch
	pub accent: Color,
	/// Neutral swatch, also used for connection lines
	pub base: Color,
	/// Probability that a new particle uses the accent swatch
	pub accent_chance: f64,
	/// Initial velocity range per axis is `[-initial_speed, initial_speed]`
	pub initial_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
	pub alpha_min: f64,
	pub alpha_max: f64,
	/// Pairs closer than this are joined by a line
	pub link_distance: f64,
	/// Line opacity at zero distance
	pub link_alpha: f64,
	pub link_width: f64,
	/// Pointer repulsion radius
	pub repel_radius: f64,
	/// Impulse applied at zero distance from the pointer
	pub repel_strength: f64,
	/// Speed limit in px/frame
	pub max_speed: f64,
	/// Per-frame velocity multiplier
	pub damping: f64,
	/// Distance past the viewport edge before a particle wraps
	pub wrap_margin: f64,
}

/// Cursor follower configuration.
#[derive(Clone, Debug)]
pub struct CursorStyle {
	/// Fraction of the remaining distance covered each frame
	pub follow: f64,
	/// Resting position before the pointer first moves
	pub start: (f64, f64),
	pub hover_class: &'static str,
	/// Elements that put the cursor into its hover state
	pub hover_targets: &'static str,
}

/// One scroll reveal variant.
#[derive(Clone, Debug)]
pub struct RevealStyle {
	pub selector: &'static str,
	/// Visible fraction that counts as "on screen"
	pub threshold: f64,
	pub class: &'static str,
	/// Delay between becoming visible and applying the class
	pub delay_ms: i32,
}

/// Navigation bar configuration.
#[derive(Clone, Debug)]
pub struct NavStyle {
	/// Scroll offset past which the bar gets its shadow
	pub shadow_offset: f64,
	pub shadow: &'static str,
	pub open_class: &'static str,
}

/// Hero heading entrance configuration.
#[derive(Clone, Debug)]
pub struct HeroStyle {
	pub selector: &'static str,
	/// Delay of the first character, in seconds
	pub base_delay: f64,
	/// Additional delay per character, in seconds
	pub step_delay: f64,
	pub duration: f64,
	pub easing: &'static str,
	/// Initial downward offset, in px
	pub rise: f64,
	/// Wait after the first frame before revealing, in ms
	pub settle_ms: i32,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub field: FieldStyle,
	pub cursor: CursorStyle,
	pub reveal: RevealStyle,
	pub skill_bar: RevealStyle,
	pub nav: NavStyle,
	pub hero: HeroStyle,
}

impl Theme {
	/// Warm accent on off-white, as used by the portfolio page
	pub fn portfolio() -> Self {
		Self {
			field: FieldStyle {
				count: 80,
				accent: Color::rgb(255, 77, 28),
				base: Color::rgb(26, 26, 26),
				accent_chance: 0.25,
				initial_speed: 0.3,
				radius_min: 1.5,
				radius_max: 4.5,
				alpha_min: 0.06,
				alpha_max: 0.25,
				link_distance: 160.0,
				link_alpha: 0.07,
				link_width: 0.7,
				repel_radius: 120.0,
				repel_strength: 0.6,
				max_speed: 2.5,
				damping: 0.985,
				wrap_margin: 10.0,
			},
			cursor: CursorStyle {
				follow: 0.18,
				start: (-100.0, -100.0),
				hover_class: "hovered",
				hover_targets: "a, button, .skill-card, .project-card, .contact-item",
			},
			reveal: RevealStyle {
				selector: ".reveal",
				threshold: 0.15,
				class: "visible",
				delay_ms: 0,
			},
			skill_bar: RevealStyle {
				selector: ".skill-card",
				threshold: 0.2,
				class: "animated",
				delay_ms: 300,
			},
			nav: NavStyle {
				shadow_offset: 40.0,
				shadow: "0 2px 24px rgba(26,26,26,0.08)",
				open_class: "open",
			},
			hero: HeroStyle {
				selector: ".hero-name",
				base_delay: 0.2,
				step_delay: 0.06,
				duration: 0.6,
				easing: "cubic-bezier(0.22,1,0.36,1)",
				rise: 40.0,
				settle_ms: 80,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::portfolio()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(255, 77, 28).to_css(), "#ff4d1c");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let c = Color::rgb(26, 26, 26).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(26, 26, 26, 0.25)");
	}
}
