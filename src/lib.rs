//! portfolio-fx: client-side visual enhancements for a static portfolio page.
//!
//! This crate attaches to an already-rendered document and adds a persisted
//! light/dark theme toggle, an ambient particle backdrop, a pointer-driven
//! portrait tilt, one-way scroll reveals, and smooth in-page navigation.

use leptos::prelude::*;
use log::{Level, info, warn};
use web_sys::{Event, HtmlScriptElement};

pub mod components;
pub mod config;
mod dom;

pub use components::particles::ParticleCanvas;
pub use config::FxConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load configuration overrides from a script element with id="fx-config".
/// Falls back to defaults when the element is absent or its JSON is invalid.
pub fn load_config() -> FxConfig {
	let Some(script) = dom::by_id::<HtmlScriptElement>(config::CONFIG_ELEMENT_ID) else {
		return FxConfig::default();
	};
	let Ok(json_text) = script.text() else {
		return FxConfig::default();
	};

	match FxConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-fx: loaded configuration overrides");
			config
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse configuration: {}", e);
			FxConfig::default()
		}
	}
}

/// Attaches every effect to the current document.
pub fn enhance(config: &FxConfig) {
	components::page::show_year(&config.year_id);
	components::theme::attach(&config.theme);
	components::page::attach_resume(&config.resume);
	components::reveal::attach(&config.reveal);
	components::parallax::attach(&config.parallax);

	let particles = config.particles.clone();
	mount_to_body(move || view! { <ParticleCanvas config=particles.clone() /> });

	components::navigation::attach(&config.navigation);
	components::page::stagger_social(&config.social);
}

/// Runs [`enhance`] once the document structure is ready.
pub fn start() {
	let Some(document) = dom::document() else {
		warn!("portfolio-fx: no document, nothing to enhance");
		return;
	};
	if dom::is_loading(&document.ready_state()) {
		dom::listen(&document, "DOMContentLoaded", |_: Event| enhance(&load_config()));
	} else {
		enhance(&load_config());
	}
}
