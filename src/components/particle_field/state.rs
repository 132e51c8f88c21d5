//! Particle field simulation state.
//!
//! Owns the particle collection and advances it one animation frame at a
//! time. Each frame runs three passes over the particles:
//! 1. Connections, drawn from the positions the frame started with
//! 2. Pointer repulsion, accumulated straight into velocity
//! 3. Integration (move, clamp speed, damp, wrap), drawing each particle
//!
//! Repulsion has no limit of its own; the speed clamp in pass 3 is the only
//! bound on how fast the pointer can push a particle.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::particles::Particle;
use super::render::Surface;
use crate::components::theme::FieldStyle;

pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub style: FieldStyle,
	pub width: f64,
	pub height: f64,
	rng: SmallRng,
}

impl ParticleField {
	pub fn new(style: FieldStyle, width: f64, height: f64) -> Self {
		Self::with_rng(style, width, height, SmallRng::from_entropy())
	}

	/// Creates a field driven by a caller-supplied generator.
	pub fn with_rng(style: FieldStyle, width: f64, height: f64, rng: SmallRng) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(style.count),
			style,
			width,
			height,
			rng,
		};
		field.regenerate();
		field
	}

	/// Adopts new viewport dimensions. Every particle is discarded and respawned.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.regenerate();
	}

	/// Replaces the whole collection with freshly spawned particles.
	pub fn regenerate(&mut self) {
		let (style, width, height) = (&self.style, self.width, self.height);
		let rng = &mut self.rng;
		self.particles.clear();
		self.particles
			.extend((0..style.count).map(|_| Particle::spawn(rng, style, width, height)));
		debug!(
			"portfolio-fx: spawned {} particles for {}x{}",
			self.particles.len(),
			width,
			height
		);
	}

	/// Advances one frame and draws it.
	pub fn step<S: Surface>(&mut self, surface: &mut S, pointer: (f64, f64)) {
		surface.clear(self.width, self.height);

		let line = self.style.base;
		for (i, j, alpha) in self.connections() {
			let (a, b) = (&self.particles[i], &self.particles[j]);
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				line.with_alpha(alpha),
				self.style.link_width,
			);
		}

		self.repel(pointer);
		self.integrate();

		for p in &self.particles {
			surface.fill_circle((p.x, p.y), p.radius, p.fill(&self.style));
		}
	}

	/// Line opacity for two particles `distance` apart, or `None` when they
	/// are too far apart to be connected.
	pub fn connection_alpha(&self, distance: f64) -> Option<f64> {
		let threshold = self.style.link_distance;
		(distance < threshold).then(|| (1.0 - distance / threshold) * self.style.link_alpha)
	}

	/// Every unordered pair close enough to connect, with its line opacity.
	///
	/// Quadratic in the particle count; fine while the count stays fixed and small.
	pub fn connections(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
		let n = self.particles.len();
		(0..n).flat_map(move |i| {
			(i + 1..n).filter_map(move |j| {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				self.connection_alpha(a.distance_to(b.x, b.y))
					.map(|alpha| (i, j, alpha))
			})
		})
	}

	/// Pushes particles inside the repulsion radius directly away from the pointer.
	pub fn repel(&mut self, pointer: (f64, f64)) {
		let (radius, strength) = (self.style.repel_radius, self.style.repel_strength);
		for p in &mut self.particles {
			let (dx, dy) = (p.x - pointer.0, p.y - pointer.1);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < radius && dist > 0.0 {
				let force = (radius - dist) / radius * strength;
				p.vx += dx / dist * force;
				p.vy += dy / dist * force;
			}
		}
	}

	/// Moves every particle by its velocity, then clamps, damps and wraps it.
	pub fn integrate(&mut self) {
		let style = &self.style;
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			let speed = p.speed();
			if speed > style.max_speed {
				p.vx = p.vx / speed * style.max_speed;
				p.vy = p.vy / speed * style.max_speed;
			}

			p.vx *= style.damping;
			p.vy *= style.damping;

			p.x = wrap(p.x, w, style.wrap_margin);
			p.y = wrap(p.y, h, style.wrap_margin);
		}
	}
}

/// Wraps a coordinate into `[-margin, extent + margin]`, teleporting to the
/// opposite edge once it leaves that band.
fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
	let mut v = value;
	if v < -margin {
		v = extent + margin;
	}
	if v > extent + margin {
		v = -margin;
	}
	v
}
