//! Theme resolution, application, and persistence.

use web_sys::{Element, HtmlElement};

use super::mode::ThemeMode;
use super::store::PreferenceStore;
use crate::config::ThemeConfig;
use crate::dom;

/// The visible side of the theme: wherever the mode is shown.
pub trait ThemeSurface {
	/// Whether the light mode is currently displayed.
	fn is_light(&self) -> bool;
	/// Shows `mode`.
	fn apply(&self, mode: ThemeMode);
}

/// Picks the startup mode: stored preference, then system signal, then dark.
///
/// `system_prefers_light` is `None` when the host cannot answer the query.
pub fn initial_mode(stored: Option<&str>, system_prefers_light: Option<bool>) -> ThemeMode {
	if let Some(mode) = stored.and_then(ThemeMode::from_stored) {
		return mode;
	}
	match system_prefers_light {
		Some(true) => ThemeMode::Light,
		_ => ThemeMode::Dark,
	}
}

/// Applies and persists the page theme.
pub struct ThemeController<S, V> {
	store: S,
	surface: V,
	key: String,
}

impl<S: PreferenceStore, V: ThemeSurface> ThemeController<S, V> {
	/// Controller persisting under `key`.
	pub fn new(store: S, surface: V, key: impl Into<String>) -> Self {
		Self {
			store,
			surface,
			key: key.into(),
		}
	}

	/// Resolves the startup mode and applies it.
	pub fn init(&self, system_prefers_light: Option<bool>) -> ThemeMode {
		let stored = self.store.get(&self.key);
		let mode = initial_mode(stored.as_deref(), system_prefers_light);
		self.set(mode);
		mode
	}

	/// Shows `mode` and persists it.
	pub fn set(&self, mode: ThemeMode) {
		self.surface.apply(mode);
		self.store.set(&self.key, mode.as_str());
	}

	/// Switches to the opposite of what is currently displayed.
	pub fn toggle(&self) -> ThemeMode {
		let next = self.current().toggled();
		self.set(next);
		next
	}

	/// Mode currently displayed by the surface.
	pub fn current(&self) -> ThemeMode {
		if self.surface.is_light() {
			ThemeMode::Light
		} else {
			ThemeMode::Dark
		}
	}

	/// Backing preference store.
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Where the mode is shown.
	pub fn surface(&self) -> &V {
		&self.surface
	}
}

/// Theme state on the live document: a class on `<html>`, plus an optional
/// toggle control and knob.
pub struct DocumentSurface {
	root: Element,
	toggle: Option<Element>,
	knob: Option<HtmlElement>,
	light_class: String,
	knob_travel: f64,
}

impl DocumentSurface {
	/// `None` only when there is no document element at all.
	pub fn find(config: &ThemeConfig) -> Option<Self> {
		let root = dom::document()?.document_element()?;
		let toggle: Option<Element> = dom::by_id(&config.toggle_id);
		let knob = toggle
			.as_ref()
			.and_then(|t| dom::child::<HtmlElement>(t, &config.knob_selector));
		Some(Self {
			root,
			toggle,
			knob,
			light_class: config.light_class.clone(),
			knob_travel: config.knob_travel,
		})
	}

	/// The toggle control, if the page has one.
	pub fn toggle(&self) -> Option<&Element> {
		self.toggle.as_ref()
	}
}

impl ThemeSurface for DocumentSurface {
	fn is_light(&self) -> bool {
		self.root.class_list().contains(&self.light_class)
	}

	fn apply(&self, mode: ThemeMode) {
		let classes = self.root.class_list();
		let _ = match mode {
			ThemeMode::Light => classes.add_1(&self.light_class),
			ThemeMode::Dark => classes.remove_1(&self.light_class),
		};
		if let Some(toggle) = &self.toggle {
			let _ = toggle.set_attribute("aria-pressed", mode.aria_pressed());
		}
		if let Some(knob) = &self.knob {
			dom::set_style(knob, "transform", &mode.knob_transform(self.knob_travel));
		}
	}
}
