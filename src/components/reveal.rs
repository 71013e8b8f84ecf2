//! One-way scroll reveal.
//!
//! Each watched element starts unseen and becomes revealed the first time
//! enough of it is visible. Revealed is terminal: later observations never
//! clear the marker.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::RevealConfig;
use crate::dom;

/// Browsers store observer thresholds as `f32`, so a reported crossing of
/// 0.12 can arrive as 0.11999999731779099.
const RATIO_TOLERANCE: f64 = f32::EPSILON as f64;

/// Per-element reveal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
	/// Not yet sufficiently visible.
	#[default]
	Unseen,
	/// Marked visible; never leaves this state.
	Revealed,
}

impl RevealState {
	/// Next state after one intersection report.
	pub fn observe(self, is_intersecting: bool, ratio: f64, threshold: f64) -> Self {
		match self {
			Self::Revealed => Self::Revealed,
			Self::Unseen if is_intersecting && ratio >= threshold - RATIO_TOLERANCE => Self::Revealed,
			Self::Unseen => Self::Unseen,
		}
	}
}

/// Reveal state for a fixed list of elements, addressed by index.
#[derive(Clone, Debug)]
pub struct RevealTracker {
	states: Vec<RevealState>,
	threshold: f64,
}

impl RevealTracker {
	/// `count` unseen elements sharing one visibility threshold.
	pub fn new(count: usize, threshold: f64) -> Self {
		Self {
			states: vec![RevealState::Unseen; count],
			threshold,
		}
	}

	/// Records an observation; returns `true` only on the unseen -> revealed edge.
	pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
		let Some(state) = self.states.get_mut(index) else {
			return false;
		};
		let before = *state;
		*state = before.observe(is_intersecting, ratio, self.threshold);
		before == RevealState::Unseen && *state == RevealState::Revealed
	}

	/// Whether the element at `index` has been revealed.
	pub fn is_revealed(&self, index: usize) -> bool {
		self.states.get(index) == Some(&RevealState::Revealed)
	}

	/// Number of revealed elements.
	pub fn revealed_count(&self) -> usize {
		self.states
			.iter()
			.filter(|s| **s == RevealState::Revealed)
			.count()
	}
}

/// Observes every element matching the configured selector.
pub fn attach(config: &RevealConfig) {
	let elements = dom::query_all(&config.selector);
	if elements.is_empty() {
		debug!("reveal: no elements match {:?}, skipping", config.selector);
		return;
	}

	let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len(), config.threshold)));
	let watched = elements.clone();
	let class = config.class.clone();

	let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				let target: Element = entry.target();
				let Some(index) = watched.iter().position(|el| *el == target) else {
					continue;
				};
				let newly = tracker.borrow_mut().observe(
					index,
					entry.is_intersecting(),
					entry.intersection_ratio(),
				);
				if newly {
					let _ = target.class_list().add_1(&class);
					// Revealed is terminal; nothing left to watch.
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(config.threshold));
	let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
	else {
		debug!("reveal: IntersectionObserver unavailable, skipping");
		return;
	};
	callback.forget();

	for el in &elements {
		observer.observe(el);
	}
	info!("reveal: watching {} elements", elements.len());
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn reveals_at_threshold() {
		let mut t = RevealTracker::new(3, 0.12);
		assert!(!t.observe(0, true, 0.05));
		assert!(!t.observe(0, false, 0.0));
		assert!(t.observe(0, true, 0.12));
		assert!(t.is_revealed(0));
		assert!(!t.is_revealed(1));
	}

	#[test]
	fn revealed_is_terminal() {
		let mut t = RevealTracker::new(1, 0.12);
		assert!(t.observe(0, true, 0.5));
		// Scrolling away and back never clears or re-fires.
		assert!(!t.observe(0, false, 0.0));
		assert!(!t.observe(0, true, 1.0));
		assert!(t.is_revealed(0));
		assert_eq!(t.revealed_count(), 1);
	}

	#[test]
	fn unknown_index_is_ignored() {
		let mut t = RevealTracker::new(1, 0.12);
		assert!(!t.observe(7, true, 1.0));
		assert_eq!(t.revealed_count(), 0);
	}

	#[test]
	fn accepts_threshold_reported_at_single_precision() {
		let reported = 0.12f32 as f64;
		assert_eq!(
			RevealState::Unseen.observe(true, reported, 0.12),
			RevealState::Revealed
		);
		assert_eq!(
			RevealState::Unseen.observe(true, 0.119, 0.12),
			RevealState::Unseen
		);
	}

	#[test]
	fn intersecting_flag_is_required() {
		assert_eq!(
			RevealState::Unseen.observe(false, 0.9, 0.12),
			RevealState::Unseen
		);
	}
}
