//! Pointer-to-tilt math for the portrait.

use crate::config::ParallaxConfig;

/// A bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Width in px.
	pub width: f64,
	/// Height in px.
	pub height: f64,
}

impl Region {
	/// Midpoint of the box.
	pub fn center(&self) -> (f64, f64) {
		(self.left + self.width / 2.0, self.top + self.height / 2.0)
	}
}

/// Translation (px) and Y-axis rotation (degrees) for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
	/// Horizontal translation, px.
	pub tx: f64,
	/// Vertical translation, px.
	pub ty: f64,
	/// Rotation about the Y axis, degrees.
	pub rot: f64,
}

impl Tilt {
	/// No offset at all; the resting pose.
	pub const NEUTRAL: Tilt = Tilt {
		tx: 0.0,
		ty: 0.0,
		rot: 0.0,
	};

	/// Offset of `(x, y)` from the region center, normalized by the region size.
	///
	/// Normalized offsets are clamped to `[-1, 1]`, so a touch that drifts
	/// outside the region never exceeds `max_translate` / `max_rotate`.
	pub fn from_pointer(region: &Region, x: f64, y: f64, config: &ParallaxConfig) -> Self {
		if region.width <= 0.0 || region.height <= 0.0 {
			return Self::NEUTRAL;
		}
		let (cx, cy) = region.center();
		let nx = ((x - cx) / region.width).clamp(-1.0, 1.0);
		let ny = ((y - cy) / region.height).clamp(-1.0, 1.0);
		Self {
			tx: nx * config.max_translate,
			ty: ny * config.max_translate,
			rot: nx * config.max_rotate,
		}
	}

	/// `--tx`, `--ty` and `--r` for dependent container styling.
	pub fn custom_properties(&self) -> [(&'static str, String); 3] {
		[
			("--tx", format!("{}px", self.tx)),
			("--ty", format!("{}px", self.ty)),
			("--r", format!("{}deg", self.rot)),
		]
	}

	/// 3-D transform for the portrait image at `depth` px.
	pub fn image_transform(&self, depth: f64) -> String {
		// + 0.0 turns -0 into 0
		let rx = -self.ty / 4.0 + 0.0;
		format!(
			"translateZ({}px) rotateY({}deg) rotateX({}deg)",
			depth, self.rot, rx
		)
	}
}

/// Fixed tilt shown while the portrait has keyboard focus.
pub fn focus_transform(config: &ParallaxConfig) -> String {
	format!(
		"translateZ({}px) rotateY({}deg) rotateX({}deg)",
		config.depth, config.focus_tilt, -config.focus_tilt
	)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const REGION: Region = Region {
		left: 100.0,
		top: 50.0,
		width: 200.0,
		height: 400.0,
	};

	#[test]
	fn center_is_neutral() {
		let tilt = Tilt::from_pointer(&REGION, 200.0, 250.0, &ParallaxConfig::default());
		assert_eq!(tilt, Tilt::NEUTRAL);
	}

	#[test]
	fn offsets_scale_with_region_size() {
		// Right edge, quarter height down from center.
		let tilt = Tilt::from_pointer(&REGION, 300.0, 350.0, &ParallaxConfig::default());
		assert_eq!(tilt, Tilt { tx: 6.0, ty: 3.0, rot: 3.0 });
		assert_eq!(
			tilt.image_transform(40.0),
			"translateZ(40px) rotateY(3deg) rotateX(-0.75deg)"
		);
	}

	#[test]
	fn bounded_everywhere() {
		let config = ParallaxConfig::default();
		for x in (-1000..=1000).step_by(37) {
			for y in (-1000..=1000).step_by(41) {
				let tilt = Tilt::from_pointer(&REGION, x as f64, y as f64, &config);
				assert!(tilt.tx.abs() <= 12.0 && tilt.ty.abs() <= 12.0);
				assert!(tilt.rot.abs() <= 6.0);
			}
		}
	}

	#[test]
	fn degenerate_region_is_neutral() {
		let flat = Region { width: 0.0, ..REGION };
		let tilt = Tilt::from_pointer(&flat, 500.0, 500.0, &ParallaxConfig::default());
		assert_eq!(tilt, Tilt::NEUTRAL);
	}

	#[test]
	fn neutral_css() {
		let [tx, ty, r] = Tilt::NEUTRAL.custom_properties();
		assert_eq!(tx, ("--tx", "0px".to_string()));
		assert_eq!(ty, ("--ty", "0px".to_string()));
		assert_eq!(r, ("--r", "0deg".to_string()));
		assert_eq!(
			Tilt::NEUTRAL.image_transform(40.0),
			"translateZ(40px) rotateY(0deg) rotateX(0deg)"
		);
	}

	#[test]
	fn focus_pose() {
		assert_eq!(
			focus_transform(&ParallaxConfig::default()),
			"translateZ(40px) rotateY(4deg) rotateX(-4deg)"
		);
	}
}
