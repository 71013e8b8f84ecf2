//! RGBA colors for canvas drawing.

use serde::Deserialize;

fn opaque() -> f64 {
	1.0
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity in `[0, 1]`; opaque when omitted from config.
	#[serde(default = "opaque")]
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different opacity.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba(...)`; canvas gradients need the alpha channel even when opaque.
	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}
