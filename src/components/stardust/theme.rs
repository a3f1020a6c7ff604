//! Visual styling for the star-dust layer.
//!
//! Colors are kept as plain RGB with a separate alpha so the renderer can
//! modulate opacity per particle without re-parsing CSS strings.

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

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)`, since particle alpha changes every frame.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Soft halo drawn under bright, large particles.
#[derive(Clone, Debug)]
pub struct GlowStyle {
	/// Halo color; its alpha is replaced per particle.
	pub color: Color,
	/// Blur radius per unit of rendered alpha.
	pub blur_per_alpha: f64,
	/// Halo opacity per unit of rendered alpha.
	pub opacity_per_alpha: f64,
	/// Particles must be strictly larger than this to glow.
	pub min_size: f64,
	/// Particles must be strictly brighter than this to glow.
	pub min_alpha: f64,
}

/// Complete visual style of the particle field.
#[derive(Clone, Debug)]
pub struct StardustStyle {
	/// Dust tint; alpha comes from each particle.
	pub tint: Color,
	/// Particles at or below this rendered alpha are not drawn at all.
	pub min_visible_alpha: f64,
	pub glow: GlowStyle,
}

impl Default for StardustStyle {
	fn default() -> Self {
		Self {
			tint: Color::rgb(220, 230, 255),
			min_visible_alpha: 0.01,
			glow: GlowStyle {
				color: Color::rgb(255, 255, 255),
				blur_per_alpha: 4.0,
				opacity_per_alpha: 0.3,
				min_size: 2.0,
				min_alpha: 0.2,
			},
		}
	}
}
