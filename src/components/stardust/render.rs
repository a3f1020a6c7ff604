//! Drawing the particle field.
//!
//! Rendering goes through the [`Surface`] trait so the same pass can target
//! an HTML canvas in the browser or a recording surface in tests. The glow is
//! described by [`Glow`]; how it is realized (shadow blur, a second sprite,
//! ...) is up to the surface.

use super::particles::ParticlePool;
use super::state::Viewport;
use super::theme::{Color, StardustStyle};

/// Soft halo requested for a single dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
	pub blur: f64,
	pub color: Color,
}

/// A 2D target the particle field can be painted onto.
pub trait Surface {
	/// Match the backing pixel size to the viewport.
	fn set_size(&mut self, viewport: Viewport);
	/// Erase everything drawn in the previous frame.
	fn clear(&mut self, viewport: Viewport);
	/// Fill a circle, optionally with a halo around it.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: Option<Glow>);
}

/// Renders the complete field to the surface.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	viewport: Viewport,
	pool: &ParticlePool,
	style: &StardustStyle,
) {
	surface.clear(viewport);

	for p in pool.iter() {
		let alpha = p.appearance.alpha;
		let size = p.appearance.size;
		if alpha <= style.min_visible_alpha {
			continue;
		}

		let glow = (size > style.glow.min_size && alpha > style.glow.min_alpha).then(|| Glow {
			blur: style.glow.blur_per_alpha * alpha,
			color: style.glow.color.with_alpha(style.glow.opacity_per_alpha * alpha),
		});

		surface.fill_circle(p.x, p.y, size, style.tint.with_alpha(alpha), glow);
	}
}
