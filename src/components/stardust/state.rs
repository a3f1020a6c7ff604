//! Engine state: viewport dimensions, the pointer, and the particle pool.
//!
//! Each field has a single writer. Host events write the pointer
//! ([`StardustState::set_pointer`], [`StardustState::clear_pointer`]) and the
//! viewport ([`StardustState::resize`], which also replaces the pool), while
//! the frame loop ([`StardustState::step`]) is the only code that mutates or
//! removes individual particles.

use rand::rngs::SmallRng;

use super::particles::ParticlePool;
use super::simulation;

/// Size of the drawing surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	/// Build a viewport, replacing non-finite or negative dimensions with `0`.
	pub fn new(width: f64, height: f64) -> Self {
		let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
		Self {
			width: sanitize(width),
			height: sanitize(height),
		}
	}
}

/// Latest known pointer or touch position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
	/// No pointer over the surface; nothing is attracted.
	#[default]
	Outside,
	At {
		x: f64,
		y: f64,
	},
}

/// Core particle field state, created on mount and mutated each frame.
pub struct StardustState {
	viewport: Viewport,
	pointer: PointerState,
	pool: ParticlePool,
	rng: SmallRng,
}

impl StardustState {
	pub fn new(viewport: Viewport, mut rng: SmallRng) -> Self {
		let pool = ParticlePool::seed(&mut rng, viewport.width, viewport.height);
		Self {
			viewport,
			pointer: PointerState::Outside,
			pool,
			rng,
		}
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn pointer(&self) -> PointerState {
		self.pointer
	}

	pub fn pool(&self) -> &ParticlePool {
		&self.pool
	}

	pub fn particle_count(&self) -> usize {
		self.pool.len()
	}

	/// Adopt a new viewport size and reseed the whole pool for it.
	///
	/// Returns `false` when the size did not change, in which case the pool is
	/// kept as is.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if viewport == self.viewport {
			return false;
		}
		self.viewport = viewport;
		self.pool = ParticlePool::seed(&mut self.rng, viewport.width, viewport.height);
		true
	}

	/// Record the raw pointer position. Non-finite coordinates are ignored.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		if x.is_finite() && y.is_finite() {
			self.pointer = PointerState::At { x, y };
		}
	}

	pub fn clear_pointer(&mut self) {
		self.pointer = PointerState::Outside;
	}

	/// Run one simulation step. Returns the number of particles annihilated.
	pub fn step(&mut self) -> usize {
		simulation::step(&mut self.pool, self.viewport, self.pointer)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::stardust::particles::particle_count;
	use crate::components::stardust::simulation::WRAP_MARGIN;
	use rand::SeedableRng;

	fn state(width: f64, height: f64) -> StardustState {
		StardustState::new(Viewport::new(width, height), SmallRng::seed_from_u64(11))
	}

	#[test]
	fn viewport_sanitizes_bad_dimensions() {
		assert_eq!(Viewport::new(f64::NAN, -5.0), Viewport::default());
		assert_eq!(
			Viewport::new(f64::INFINITY, 600.0),
			Viewport {
				width: 0.0,
				height: 600.0
			}
		);
	}

	#[test]
	fn shrinking_reseeds_and_stays_in_bounds() {
		let mut s = state(1920.0, 1080.0);
		assert_eq!(s.particle_count(), 243);

		assert!(s.resize(Viewport::new(640.0, 480.0)));
		assert_eq!(s.particle_count(), particle_count(640.0, 480.0));
		s.step();
		for p in s.pool().iter() {
			assert!((-WRAP_MARGIN..=640.0 + WRAP_MARGIN).contains(&p.x));
			assert!((-WRAP_MARGIN..=480.0 + WRAP_MARGIN).contains(&p.y));
		}
	}

	#[test]
	fn reseed_restores_count_after_annihilation() {
		let mut s = state(800.0, 600.0);
		let seeded = s.particle_count();
		let (x, y) = {
			let p = &s.pool().particles[0];
			(p.x + p.vx, p.y + p.vy)
		};
		s.set_pointer(x, y);
		assert!(s.step() >= 1);
		assert!(s.particle_count() < seeded);

		s.resize(Viewport::new(801.0, 600.0));
		assert_eq!(s.particle_count(), particle_count(801.0, 600.0));
	}

	#[test]
	fn repeated_resizes_last_one_wins() {
		let mut s = state(800.0, 600.0);
		s.resize(Viewport::new(4000.0, 4000.0));
		s.resize(Viewport::new(100.0, 100.0));
		assert!(!s.resize(Viewport::new(100.0, 100.0)));
		assert_eq!(s.viewport(), Viewport::new(100.0, 100.0));
		assert_eq!(s.particle_count(), 50);
		for p in s.pool().iter() {
			assert!(p.x < 100.0 && p.y < 100.0);
		}
	}

	#[test]
	fn malformed_pointer_is_ignored() {
		let mut s = state(800.0, 600.0);
		s.set_pointer(f64::NAN, 10.0);
		assert_eq!(s.pointer(), PointerState::Outside);
		s.set_pointer(12.0, 34.0);
		s.set_pointer(f64::INFINITY, 1.0);
		assert_eq!(s.pointer(), PointerState::At { x: 12.0, y: 34.0 });
		s.clear_pointer();
		assert_eq!(s.pointer(), PointerState::Outside);
	}
}
