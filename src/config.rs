//! Tunable constants for every page effect.
//!
//! The defaults reproduce the shipped page exactly. A page can override any
//! subset by embedding JSON in `<script id="fx-config" type="application/json">`;
//! missing fields keep their defaults.

use serde::Deserialize;

use crate::components::particles::Color;

/// Id of the inline script element holding configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Root configuration for all effects.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FxConfig {
	/// Theme toggle.
	pub theme: ThemeConfig,
	/// Particle backdrop.
	pub particles: ParticleConfig,
	/// Portrait tilt.
	pub parallax: ParallaxConfig,
	/// Scroll reveal.
	pub reveal: RevealConfig,
	/// Smooth in-page links.
	pub navigation: NavigationConfig,
	/// Resume download.
	pub resume: ResumeConfig,
	/// Social icon stagger.
	pub social: SocialConfig,
	/// Id of the element whose text becomes the current year.
	pub year_id: String,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			theme: ThemeConfig::default(),
			particles: ParticleConfig::default(),
			parallax: ParallaxConfig::default(),
			reveal: RevealConfig::default(),
			navigation: NavigationConfig::default(),
			resume: ResumeConfig::default(),
			social: SocialConfig::default(),
			year_id: "year".into(),
		}
	}
}

impl FxConfig {
	/// Parses a (possibly partial) JSON override document.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Theme toggle anchors and persistence key.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
	/// Preference store key.
	pub storage_key: String,
	/// Class present on `<html>` while the light theme is active.
	pub light_class: String,
	/// Id of the toggle control.
	pub toggle_id: String,
	/// Selector of the knob inside the toggle.
	pub knob_selector: String,
	/// Horizontal knob offset (px) in the light position.
	pub knob_travel: f64,
}

impl Default for ThemeConfig {
	fn default() -> Self {
		Self {
			storage_key: "site-theme".into(),
			light_class: "light".into(),
			toggle_id: "themeToggle".into(),
			knob_selector: ".toggle-knob".into(),
			knob_travel: 20.0,
		}
	}
}

/// Ambient particle field parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
	/// Lower bound on the particle count, whatever the viewport size.
	pub min_count: usize,
	/// Viewport area (px²) per particle.
	pub density: f64,
	/// Smallest particle radius.
	pub radius_min: f64,
	/// Random radius added on top of `radius_min`.
	pub radius_spread: f64,
	/// Velocity per axis is `(U - 0.5) * speed` for uniform `U`.
	pub speed: f64,
	/// Lowest particle opacity.
	pub alpha_min: f64,
	/// Random opacity added on top of `alpha_min`.
	pub alpha_spread: f64,
	/// How far past an edge a particle may drift before wrapping.
	pub margin: f64,
	/// Gradient fade-out radius as a multiple of particle radius.
	pub glow_scale: f64,
	/// Filled circle radius as a multiple of particle radius.
	pub fill_scale: f64,
	/// Glow center color; its alpha is replaced per particle.
	pub inner_color: Color,
	/// Glow edge color.
	pub outer_color: Color,
}

impl Default for ParticleConfig {
	fn default() -> Self {
		Self {
			min_count: 8,
			density: 180_000.0,
			radius_min: 0.6,
			radius_spread: 1.3,
			speed: 0.12,
			alpha_min: 0.06,
			alpha_spread: 0.28,
			margin: 10.0,
			glow_scale: 24.0,
			fill_scale: 10.0,
			inner_color: Color::rgb(0, 229, 255),
			outer_color: Color::rgba(0, 179, 255, 0.0),
		}
	}
}

/// Portrait tilt parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
	/// Id of the portrait container.
	pub wrap_id: String,
	/// Selector of the image inside the container.
	pub image_selector: String,
	/// Class toggled on the container while tilted.
	pub tilt_class: String,
	/// Translation at the region edge, in px.
	pub max_translate: f64,
	/// Y-axis rotation at the region edge, in degrees.
	pub max_rotate: f64,
	/// `translateZ` depth of the image, in px.
	pub depth: f64,
	/// Fixed rotation (degrees) applied while the container has focus.
	pub focus_tilt: f64,
}

impl Default for ParallaxConfig {
	fn default() -> Self {
		Self {
			wrap_id: "portraitWrap".into(),
			image_selector: ".portrait".into(),
			tilt_class: "tilt".into(),
			max_translate: 12.0,
			max_rotate: 6.0,
			depth: 40.0,
			focus_tilt: 4.0,
		}
	}
}

/// Scroll reveal parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
	/// Elements to watch.
	pub selector: String,
	/// Class added on reveal.
	pub class: String,
	/// Visible fraction of an element's own area that triggers a reveal.
	pub threshold: f64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			selector: ".card, .project-card, .portrait-wrap".into(),
			class: "inview".into(),
			threshold: 0.12,
		}
	}
}

/// In-page navigation links.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationConfig {
	/// Links whose clicks become smooth scrolls.
	pub link_selector: String,
}

impl Default for NavigationConfig {
	fn default() -> Self {
		Self {
			link_selector: ".nav-link".into(),
		}
	}
}

/// Resume download trigger.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResumeConfig {
	/// Id of the element that starts the download.
	pub trigger_id: String,
	/// Resource to download.
	pub href: String,
	/// Suggested filename for the download.
	pub filename: String,
}

impl Default for ResumeConfig {
	fn default() -> Self {
		Self {
			trigger_id: "resumeBtn".into(),
			href: "resume.pdf".into(),
			filename: "Chakradhar-Reddy-Resume.pdf".into(),
		}
	}
}

/// Social icon entrance stagger.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SocialConfig {
	/// Icons to stagger.
	pub selector: String,
	/// Transition delay added per icon, in milliseconds.
	pub stagger_ms: u32,
}

impl Default for SocialConfig {
	fn default() -> Self {
		Self {
			selector: ".social-link".into(),
			stagger_ms: 70,
		}
	}
}
