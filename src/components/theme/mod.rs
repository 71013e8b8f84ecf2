//! Light/dark theme toggle.
//!
//! The startup mode comes from the persisted preference, then the system
//! `prefers-color-scheme` signal, then falls back to dark. Every change is
//! written back to the preference store.

mod controller;
mod mode;
mod store;

use std::rc::Rc;

use log::{debug, info};
use web_sys::Event;

pub use controller::{DocumentSurface, ThemeController, ThemeSurface, initial_mode};
pub use mode::ThemeMode;
pub use store::{LocalPreferenceStore, MemoryPreferenceStore, PageStore, PreferenceStore};

use crate::config::ThemeConfig;
use crate::dom;

const LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// `None` when the host has no `matchMedia`.
fn system_prefers_light() -> Option<bool> {
	let list = dom::window()?.match_media(LIGHT_QUERY).ok()??;
	Some(list.matches())
}

/// Applies the startup theme and wires the toggle control.
pub fn attach(config: &ThemeConfig) {
	let Some(surface) = DocumentSurface::find(config) else {
		debug!("theme: no document element, skipping");
		return;
	};
	let toggle = surface.toggle().cloned();
	let controller = Rc::new(ThemeController::new(
		PageStore::open(),
		surface,
		config.storage_key.clone(),
	));

	let mode = controller.init(system_prefers_light());
	info!("theme: started in {} mode", mode.as_str());

	let Some(toggle) = toggle else {
		debug!("theme: #{} not found, toggle disabled", config.toggle_id);
		return;
	};
	dom::listen(&toggle, "click", move |_: Event| {
		let mode = controller.toggle();
		debug!("theme: switched to {}", mode.as_str());
	});
}
