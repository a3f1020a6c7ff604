//! Per-frame particle update: drift, edge wrapping, twinkle, and pointer
//! attraction/annihilation.
//!
//! Pointer interaction is split into three concentric bands around the
//! pointer:
//!
//! - **Attraction** (`d < ATTRACTION_RADIUS`): the particle is pulled toward
//!   the pointer with a cubic ease-in, so the pull only becomes noticeable close
//!   in. Outside the fade band it also brightens.
//! - **Fade** (`d < FADE_RADIUS`): the drawn dot dims and shrinks linearly,
//!   reaching nothing at the kill boundary.
//! - **Kill** (`d < KILL_RADIUS`): the particle is removed for good.

use super::particles::{Appearance, Particle, ParticlePool};
use super::state::{PointerState, Viewport};

/// Distance outside the viewport a particle may drift before wrapping.
pub const WRAP_MARGIN: f64 = 10.0;
/// Twinkle phase advance per frame (radians).
pub const TWINKLE_STEP: f64 = 0.05;
pub const TWINKLE_AMPLITUDE: f64 = 0.15;
pub const ATTRACTION_RADIUS: f64 = 300.0;
pub const KILL_RADIUS: f64 = 5.0;
pub const FADE_RADIUS: f64 = 25.0;
/// Pull speed (px/frame) at full eased force.
pub const SUCTION_SPEED: f64 = 1.5;
/// Extra alpha at full eased force for particles in the attraction band.
pub const ATTRACTION_BOOST: f64 = 0.2;

/// Cubic ease-in of the attraction strength: `0` at the attraction radius,
/// `1` at the pointer.
pub fn eased_force(distance: f64) -> f64 {
	let force = ((ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS).clamp(0.0, 1.0);
	force * force * force
}

/// Linear position inside the fade band: `0` at the kill boundary, `1` at the
/// fade boundary.
pub fn fade_factor(distance: f64) -> f64 {
	((distance - KILL_RADIUS) / (FADE_RADIUS - KILL_RADIUS)).clamp(0.0, 1.0)
}

/// Advance every particle by one frame and drop the ones the pointer swallowed.
///
/// Returns how many particles were annihilated.
pub fn step(pool: &mut ParticlePool, viewport: Viewport, pointer: PointerState) -> usize {
	let before = pool.particles.len();
	pool.particles
		.retain_mut(|p| advance(p, viewport, pointer) == Fate::Survives);
	before - pool.particles.len()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fate {
	Survives,
	Annihilated,
}

fn advance(p: &mut Particle, viewport: Viewport, pointer: PointerState) -> Fate {
	p.x += p.vx;
	p.y += p.vy;
	wrap(p, viewport);

	p.phase += TWINKLE_STEP;
	p.alpha = (p.base_alpha + p.phase.sin() * TWINKLE_AMPLITUDE).max(0.0);

	p.appearance = Appearance {
		alpha: p.alpha,
		size: p.size,
	};

	let PointerState::At { x: px, y: py } = pointer else {
		return Fate::Survives;
	};

	let dist = p.distance_to(px, py);
	if dist < KILL_RADIUS {
		return Fate::Annihilated;
	}
	if dist >= ATTRACTION_RADIUS {
		return Fate::Survives;
	}

	let eased = eased_force(dist);
	// dist >= KILL_RADIUS here, so the bearing is well defined.
	let pull = SUCTION_SPEED * eased / dist;
	p.x += (px - p.x) * pull;
	p.y += (py - p.y) * pull;

	if dist < FADE_RADIUS {
		let t = fade_factor(dist);
		p.appearance = Appearance {
			alpha: p.alpha * t,
			size: p.size * (0.4 + 0.6 * t),
		};
	} else {
		p.appearance.alpha = (p.alpha + eased * ATTRACTION_BOOST).min(1.0);
	}
	Fate::Survives
}

fn wrap(p: &mut Particle, viewport: Viewport) {
	if p.x < -WRAP_MARGIN {
		p.x = viewport.width + WRAP_MARGIN;
	} else if p.x > viewport.width + WRAP_MARGIN {
		p.x = -WRAP_MARGIN;
	}
	if p.y < -WRAP_MARGIN {
		p.y = viewport.height + WRAP_MARGIN;
	} else if p.y > viewport.height + WRAP_MARGIN {
		p.y = -WRAP_MARGIN;
	}
}
