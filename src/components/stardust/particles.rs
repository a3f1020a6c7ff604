//! Ambient star-dust particles and density-based seeding.

use std::f64::consts::TAU;

use rand::Rng;

/// Viewport area (px²) per particle.
pub const DENSITY_DIVISOR: f64 = 8500.0;
/// Fewest particles a pool is seeded with, however small the viewport.
pub const MIN_PARTICLES: usize = 50;
/// Most particles a pool is seeded with, however large the viewport.
pub const MAX_PARTICLES: usize = 450;
/// Per-axis drift is uniform in `[-MAX_DRIFT, MAX_DRIFT]` px/frame.
pub const MAX_DRIFT: f64 = 0.25;
pub const MIN_SIZE: f64 = 1.0;
pub const MAX_SIZE: f64 = 3.0;
pub const MIN_BASE_ALPHA: f64 = 0.2;
pub const MAX_BASE_ALPHA: f64 = 0.6;

/// What the renderer draws for a particle this frame.
///
/// Proximity to the pointer dims and shrinks the drawn dot without touching the
/// particle's stored `alpha`/`size`, so a particle that escapes the pointer
/// looks exactly as it did before.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
	pub alpha: f64,
	pub size: f64,
}

/// A single floating dust particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub base_alpha: f64,
	pub alpha: f64,
	pub phase: f64, // For twinkling
	pub appearance: Appearance,
}

impl Particle {
	/// Sample a fresh particle somewhere inside `width × height`.
	pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
		let x = rng.random::<f64>() * width;
		let y = rng.random::<f64>() * height;
		let vx = (rng.random::<f64>() - 0.5) * 2.0 * MAX_DRIFT;
		let vy = (rng.random::<f64>() - 0.5) * 2.0 * MAX_DRIFT;
		let size = MIN_SIZE + rng.random::<f64>() * (MAX_SIZE - MIN_SIZE);
		let base_alpha =
			MIN_BASE_ALPHA + rng.random::<f64>() * (MAX_BASE_ALPHA - MIN_BASE_ALPHA);
		let phase = rng.random::<f64>() * TAU;

		Self {
			x,
			y,
			vx,
			vy,
			size,
			base_alpha,
			alpha: base_alpha,
			phase,
			appearance: Appearance {
				alpha: base_alpha,
				size,
			},
		}
	}

	pub fn distance_to(&self, x: f64, y: f64) -> f64 {
		let (dx, dy) = (x - self.x, y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Number of particles to seed for a viewport of the given size.
pub fn particle_count(width: f64, height: f64) -> usize {
	let area = width * height;
	let density = if area.is_finite() && area > 0.0 {
		(area / DENSITY_DIVISOR).floor() as usize
	} else {
		0
	};
	density.clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// The live set of particles.
///
/// Only ever shrinks between reseeds; a new viewport gets a whole new pool.
#[derive(Clone, Debug, Default)]
pub struct ParticlePool {
	pub particles: Vec<Particle>,
}

impl ParticlePool {
	pub fn seed(rng: &mut impl Rng, width: f64, height: f64) -> Self {
		let count = particle_count(width, height);
		let particles = (0..count)
			.map(|_| Particle::random(rng, width, height))
			.collect();
		Self { particles }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Particle> {
		self.particles.iter()
	}
}
