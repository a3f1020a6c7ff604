//! [`Surface`] implementation over an HTML canvas 2D context.

use std::f64::consts::TAU;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::render::{Glow, Surface};
use super::state::Viewport;
use super::theme::Color;

/// A canvas element together with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context. Returns `None` if the browser refuses one.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn set_size(&mut self, viewport: Viewport) {
		self.canvas.set_width(viewport.width as u32);
		self.canvas.set_height(viewport.height as u32);
	}

	fn clear(&mut self, viewport: Viewport) {
		self.ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();

		// Canvas has no halo primitive; refill the same path under a shadow.
		if let Some(glow) = glow {
			self.ctx.set_shadow_blur(glow.blur);
			self.ctx.set_shadow_color(&glow.color.to_css());
			self.ctx.fill();
			self.ctx.set_shadow_blur(0.0);
		}
	}
}
