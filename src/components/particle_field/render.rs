//! Drawing primitives for the particle field.
//!
//! The simulation only needs three operations, so it draws through the
//! [`Surface`] trait. The browser implementation wraps a canvas 2D context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::components::theme::Color;

/// A 2D drawing target in canvas pixel space.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}
}

/// Records draw calls instead of painting them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear { width: f64, height: f64 },
	Line { from: (f64, f64), to: (f64, f64), color: Color, width: f64 },
	Circle { center: (f64, f64), radius: f64, color: Color },
}

#[cfg(test)]
impl RecordingSurface {
	pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
		self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
	}

	pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
		self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
	}
}

#[cfg(test)]
impl Surface for RecordingSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(DrawOp::Clear { width, height });
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ops.push(DrawOp::Line {
			from,
			to,
			color,
			width,
		});
	}

	fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Color) {
		self.ops.push(DrawOp::Circle {
			center,
			radius,
			color,
		});
	}
}
