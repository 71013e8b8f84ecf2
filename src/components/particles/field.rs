//! Ambient particle field: generation, per-frame drift, and torus wraparound.

use crate::config::ParticleConfig;

/// Source of uniform samples in `[0, 1)`.
///
/// Any `FnMut() -> f64` qualifies, so the browser path passes `js_sys::Math::random`
/// directly.
pub trait RandomSource {
	/// Next sample in `[0, 1)`.
	fn next_unit(&mut self) -> f64;
}

impl<F: FnMut() -> f64> RandomSource for F {
	fn next_unit(&mut self) -> f64 {
		self()
	}
}

/// A single drifting point-light.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in viewport px.
	pub x: f64,
	/// Vertical position in viewport px.
	pub y: f64,
	/// Base radius; glow and fill sizes are multiples of it.
	pub radius: f64,
	/// Horizontal drift per frame.
	pub vx: f64,
	/// Vertical drift per frame.
	pub vy: f64,
	/// Opacity at the glow center.
	pub alpha: f64,
}

/// Number of particles for a `width` x `height` viewport.
pub fn particle_count(width: f64, height: f64, config: &ParticleConfig) -> usize {
	let area = (width * height).max(0.0);
	let scaled = if config.density > 0.0 {
		(area / config.density).round() as usize
	} else {
		0
	};
	scaled.max(config.min_count)
}

/// Maps `value` onto `[-margin, extent + margin)`, treating the range as a circle.
pub fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
	let span = extent + 2.0 * margin;
	if span <= 0.0 {
		return -margin;
	}
	if value >= -margin && value < extent + margin {
		return value;
	}
	let wrapped = (value + margin).rem_euclid(span);
	// rem_euclid may round up to `span` for inputs just below a multiple of it.
	if wrapped >= span {
		-margin
	} else {
		wrapped - margin
	}
}

/// Owns the particle collection for one drawing surface.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	config: ParticleConfig,
}

impl ParticleField {
	/// An empty field; call [`ParticleField::regenerate`] once the viewport is known.
	pub fn new(config: ParticleConfig) -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			config,
		}
	}

	/// Discards every particle and rebuilds the collection for a new viewport.
	pub fn regenerate(&mut self, width: f64, height: f64, rng: &mut impl RandomSource) {
		let count = particle_count(width, height, &self.config);
		let c = &self.config;

		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			self.particles.push(Particle {
				x: rng.next_unit() * width,
				y: rng.next_unit() * height,
				radius: rng.next_unit() * c.radius_spread + c.radius_min,
				vx: (rng.next_unit() - 0.5) * c.speed,
				vy: (rng.next_unit() - 0.5) * c.speed,
				alpha: rng.next_unit() * c.alpha_spread + c.alpha_min,
			});
		}

		self.width = width;
		self.height = height;
	}

	/// Advances every particle by one frame, in collection order.
	pub fn step(&mut self) {
		let margin = self.config.margin;
		for p in &mut self.particles {
			p.x = wrap(p.x + p.vx, self.width, margin);
			p.y = wrap(p.y + p.vy, self.height, margin);
		}
	}

	/// Current particles, in draw order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Surface width the field was generated for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height the field was generated for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Generation and drawing parameters.
	pub fn config(&self) -> &ParticleConfig {
		&self.config
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	/// Deterministic hash sequence; the same input always gives the same look.
	struct HashSequence {
		seed: f64,
	}

	impl RandomSource for HashSequence {
		fn next_unit(&mut self) -> f64 {
			self.seed += 1.0;
			let x = (self.seed * 12.9898 + self.seed * 78.233).sin() * 43758.5453;
			x - x.floor()
		}
	}

	fn seeded() -> HashSequence {
		HashSequence { seed: 0.0 }
	}

	#[test]
	fn count_has_a_floor() {
		let config = ParticleConfig::default();
		assert_eq!(particle_count(1200.0, 800.0, &config), 8);
		assert_eq!(particle_count(0.0, 0.0, &config), 8);
		assert_eq!(particle_count(320.0, 480.0, &config), 8);
	}

	#[test]
	fn count_scales_with_area() {
		let config = ParticleConfig::default();
		// 3840 * 2160 / 180000 = 46.08
		assert_eq!(particle_count(3840.0, 2160.0, &config), 46);
		// 2700 * 1000 / 180000 = 15 exactly; 2709 * 1000 rounds 15.05 down
		assert_eq!(particle_count(2700.0, 1000.0, &config), 15);
		assert_eq!(particle_count(2709.0, 1000.0, &config), 15);
		// 15.5 rounds up
		assert_eq!(particle_count(2790.0, 1000.0, &config), 16);
	}

	#[test]
	fn regenerate_replaces_the_whole_collection() {
		let mut field = ParticleField::new(ParticleConfig::default());
		let mut rng = seeded();
		field.regenerate(3840.0, 2160.0, &mut rng);
		assert_eq!(field.particles().len(), 46);

		field.regenerate(1200.0, 800.0, &mut rng);
		assert_eq!(field.particles().len(), 8);
		assert_eq!((field.width(), field.height()), (1200.0, 800.0));
	}

	#[test]
	fn regenerated_particles_stay_in_configured_ranges() {
		let config = ParticleConfig::default();
		let mut field = ParticleField::new(config.clone());
		field.regenerate(1920.0, 1080.0, &mut seeded());

		for p in field.particles() {
			assert!((0.0..1920.0).contains(&p.x));
			assert!((0.0..1080.0).contains(&p.y));
			assert!(p.radius >= config.radius_min && p.radius < config.radius_min + config.radius_spread);
			assert!(p.vx.abs() <= config.speed / 2.0);
			assert!(p.vy.abs() <= config.speed / 2.0);
			assert!(p.alpha >= config.alpha_min && p.alpha < config.alpha_min + config.alpha_spread);
		}
	}

	#[test]
	fn step_advances_by_velocity() {
		let mut field = ParticleField::new(ParticleConfig::default());
		field.regenerate(1200.0, 800.0, &mut seeded());
		let before = field.particles().to_vec();
		field.step();
		for (a, b) in before.iter().zip(field.particles()) {
			assert!((b.x - (a.x + a.vx)).abs() < 1e-9);
			assert!((b.y - (a.y + a.vy)).abs() < 1e-9);
		}
	}

	#[test]
	fn wrap_crosses_to_the_opposite_edge() {
		assert_eq!(wrap(-10.5, 100.0, 10.0), 109.5);
		assert_eq!(wrap(110.0, 100.0, 10.0), -10.0);
		assert_eq!(wrap(110.25, 100.0, 10.0), -9.75);
		assert_eq!(wrap(50.0, 100.0, 10.0), 50.0);
		assert_eq!(wrap(-10.0, 100.0, 10.0), -10.0);
	}

	#[test]
	fn particles_never_escape_the_margin() {
		let mut field = ParticleField::new(ParticleConfig {
			speed: 40.0,
			..ParticleConfig::default()
		});
		field.regenerate(300.0, 200.0, &mut seeded());
		for _ in 0..5_000 {
			field.step();
			for p in field.particles() {
				assert!(p.x >= -10.0 && p.x < 310.0, "x escaped: {}", p.x);
				assert!(p.y >= -10.0 && p.y < 210.0, "y escaped: {}", p.y);
			}
		}
	}
}
