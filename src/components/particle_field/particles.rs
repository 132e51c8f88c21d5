//! Drifting background particles.

use rand::Rng;

use crate::components::theme::{Color, FieldStyle};

/// Which palette entry a particle is painted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
	Accent,
	Base,
}

impl Swatch {
	pub fn color(self, style: &FieldStyle) -> Color {
		match self {
			Swatch::Accent => style.accent,
			Swatch::Base => style.base,
		}
	}
}

/// A single floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
	pub swatch: Swatch,
}

impl Particle {
	/// Spawns a particle somewhere inside a `width` x `height` viewport.
	pub fn spawn<R: Rng>(rng: &mut R, style: &FieldStyle, width: f64, height: f64) -> Self {
		let swatch = if rng.gen_bool(style.accent_chance) {
			Swatch::Accent
		} else {
			Swatch::Base
		};

		Self {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			vx: uniform(rng, -style.initial_speed, style.initial_speed),
			vy: uniform(rng, -style.initial_speed, style.initial_speed),
			radius: uniform(rng, style.radius_min, style.radius_max),
			alpha: uniform(rng, style.alpha_min, style.alpha_max),
			swatch,
		}
	}

	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		let (dx, dy) = (self.x - x, self.y - y);
		(dx * dx + dy * dy).sqrt()
	}

	pub fn fill(&self, style: &FieldStyle) -> Color {
		self.swatch.color(style).with_alpha(self.alpha)
	}
}

/// `min + rand * (max - min)`; tolerates an empty range (zero-sized viewport).
fn uniform<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
	min + rng.r#gen::<f64>() * (max - min)
}
