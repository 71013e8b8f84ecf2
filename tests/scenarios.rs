//! End-to-end checks of the page effects' observable behavior, without a browser.

use std::cell::Cell;

use pretty_assertions::assert_eq;

use portfolio_fx::FxConfig;
use portfolio_fx::components::parallax::{Region, Tilt};
use portfolio_fx::components::particles::{ParticleField, particle_count};
use portfolio_fx::components::reveal::RevealTracker;
use portfolio_fx::components::theme::{
	MemoryPreferenceStore, PreferenceStore, ThemeController, ThemeMode, ThemeSurface,
};

/// Linear congruential sequence mapped into [0, 1).
fn lcg(seed: u64) -> impl FnMut() -> f64 {
	let mut state = seed;
	move || {
		state = state
			.wrapping_mul(6364136223846793005)
			.wrapping_add(1442695040888963407);
		(state >> 11) as f64 / (1u64 << 53) as f64
	}
}

#[derive(Default)]
struct Page {
	light: Cell<bool>,
	pressed: Cell<&'static str>,
	knob: Cell<f64>,
}

impl ThemeSurface for Page {
	fn is_light(&self) -> bool {
		self.light.get()
	}

	fn apply(&self, mode: ThemeMode) {
		self.light.set(mode == ThemeMode::Light);
		self.pressed.set(mode.aria_pressed());
		self.knob.set(mode.knob_offset(20.0));
	}
}

#[test]
fn desktop_viewport_uses_the_minimum_count() {
	let config = FxConfig::default();
	assert_eq!(particle_count(1200.0, 800.0, &config.particles), 8);

	let mut field = ParticleField::new(config.particles);
	let mut rng = lcg(7);
	field.regenerate(1200.0, 800.0, &mut rng);
	assert_eq!(field.particles().len(), 8);

	// Resizing to the same area yields the same count again.
	field.regenerate(800.0, 1200.0, &mut rng);
	assert_eq!(field.particles().len(), 8);
}

#[test]
fn particles_stay_within_the_margin_across_resizes() {
	let mut field = ParticleField::new(FxConfig::default().particles);
	let mut rng = lcg(42);
	for (w, h) in [(1920.0, 1080.0), (375.0, 812.0), (2560.0, 1440.0)] {
		field.regenerate(w, h, &mut rng);
		for _ in 0..20_000 {
			field.step();
		}
		for p in field.particles() {
			assert!(p.x >= -10.0 && p.x < w + 10.0);
			assert!(p.y >= -10.0 && p.y < h + 10.0);
		}
	}
}

#[test]
fn system_light_preference_without_stored_theme() {
	let controller = ThemeController::new(MemoryPreferenceStore::default(), Page::default(), "site-theme");
	assert_eq!(controller.init(Some(true)), ThemeMode::Light);
	assert_eq!(controller.surface().pressed.get(), "true");
	assert_eq!(controller.surface().knob.get(), 20.0);
}

#[test]
fn theme_flag_round_trips_through_the_store() {
	let controller = ThemeController::new(MemoryPreferenceStore::default(), Page::default(), "site-theme");
	controller.init(None);
	assert_eq!(controller.current(), ThemeMode::Dark);

	controller.set(ThemeMode::Light);
	assert_eq!(controller.store().get("site-theme").as_deref(), Some("light"));
	controller.toggle();
	controller.toggle();
	assert_eq!(controller.store().get("site-theme").as_deref(), Some("light"));
}

#[test]
fn reveal_marker_is_monotonic() {
	let mut tracker = RevealTracker::new(2, FxConfig::default().reveal.threshold);
	let reports = [(0, true, 0.2), (1, true, 0.05), (0, false, 0.0), (1, true, 0.13), (1, false, 0.0)];
	let fired: Vec<bool> = reports
		.iter()
		.map(|&(i, hit, ratio)| tracker.observe(i, hit, ratio))
		.collect();
	assert_eq!(fired, vec![true, false, false, true, false]);
	assert!(tracker.is_revealed(0) && tracker.is_revealed(1));
}

#[test]
fn portrait_tilt_is_bounded_and_resets_to_zero() {
	let config = FxConfig::default().parallax;
	let region = Region {
		left: 0.0,
		top: 0.0,
		width: 320.0,
		height: 320.0,
	};
	let corner = Tilt::from_pointer(&region, 320.0, 0.0, &config);
	assert_eq!(corner, Tilt { tx: 6.0, ty: -6.0, rot: 3.0 });
	assert_eq!(Tilt::NEUTRAL, Tilt { tx: 0.0, ty: 0.0, rot: 0.0 });
}
