//! The two display modes and how each is shown on the toggle control.

/// Display mode of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
	/// Light palette; the root carries the light class.
	Light,
	/// Default dark palette.
	Dark,
}

impl ThemeMode {
	/// Value written to the preference store.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Interprets a stored value. Anything other than `"light"` is dark; an empty
	/// value counts as no preference at all.
	pub fn from_stored(value: &str) -> Option<Self> {
		match value {
			"" => None,
			"light" => Some(Self::Light),
			_ => Some(Self::Dark),
		}
	}

	/// The opposite mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}

	/// `aria-pressed` value of the toggle control; pressed means light.
	pub fn aria_pressed(self) -> &'static str {
		match self {
			Self::Light => "true",
			Self::Dark => "false",
		}
	}

	/// Knob offset in px for a toggle whose full travel is `travel`.
	pub fn knob_offset(self, travel: f64) -> f64 {
		match self {
			Self::Light => travel,
			Self::Dark => 0.0,
		}
	}

	/// CSS `transform` placing the knob.
	pub fn knob_transform(self, travel: f64) -> String {
		let offset = self.knob_offset(travel);
		if offset == 0.0 {
			"translateX(0)".to_string()
		} else {
			format!("translateX({}px)", offset)
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn stored_values() {
		assert_eq!(ThemeMode::from_stored("light"), Some(ThemeMode::Light));
		assert_eq!(ThemeMode::from_stored("dark"), Some(ThemeMode::Dark));
		assert_eq!(ThemeMode::from_stored("sepia"), Some(ThemeMode::Dark));
		assert_eq!(ThemeMode::from_stored(""), None);
	}

	#[test]
	fn knob_positions() {
		assert_eq!(ThemeMode::Light.knob_transform(20.0), "translateX(20px)");
		assert_eq!(ThemeMode::Dark.knob_transform(20.0), "translateX(0)");
	}
}
