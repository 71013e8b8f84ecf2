//! Pointer-driven tilt for the portrait.
//!
//! Purely reactive: each pointer or touch move recomputes the pose from the
//! container's current bounding box. Leaving or blurring snaps back to neutral
//! and lets the stylesheet's transition animate the return.

mod tilt;

use std::rc::Rc;

use log::{debug, info};
use web_sys::{Event, HtmlElement, MouseEvent, TouchEvent};

pub use tilt::{Region, Tilt, focus_transform};

use crate::config::ParallaxConfig;
use crate::dom;

struct Portrait {
	wrap: HtmlElement,
	image: Option<HtmlElement>,
	config: ParallaxConfig,
}

impl Portrait {
	fn region(&self) -> Region {
		let rect = self.wrap.get_bounding_client_rect();
		Region {
			left: rect.left(),
			top: rect.top(),
			width: rect.width(),
			height: rect.height(),
		}
	}

	fn track(&self, x: f64, y: f64) {
		let tilt = Tilt::from_pointer(&self.region(), x, y, &self.config);
		self.show(&tilt, true);
	}

	fn reset(&self) {
		self.show(&Tilt::NEUTRAL, false);
	}

	fn show(&self, tilt: &Tilt, tilted: bool) {
		for (name, value) in tilt.custom_properties() {
			dom::set_style(&self.wrap, name, &value);
		}
		let classes = self.wrap.class_list();
		let _ = if tilted {
			classes.add_1(&self.config.tilt_class)
		} else {
			classes.remove_1(&self.config.tilt_class)
		};
		if let Some(image) = &self.image {
			dom::set_style(image, "transform", &tilt.image_transform(self.config.depth));
		}
	}

	fn focus(&self) {
		let _ = self.wrap.class_list().add_1(&self.config.tilt_class);
		if let Some(image) = &self.image {
			dom::set_style(image, "transform", &focus_transform(&self.config));
		}
	}
}

/// Wires pointer, touch, and focus listeners on the portrait container.
pub fn attach(config: &ParallaxConfig) {
	let Some(wrap) = dom::by_id::<HtmlElement>(&config.wrap_id) else {
		debug!("parallax: #{} not found, skipping", config.wrap_id);
		return;
	};
	let image = dom::child::<HtmlElement>(&wrap, &config.image_selector);
	let portrait = Rc::new(Portrait {
		wrap: wrap.clone(),
		image,
		config: config.clone(),
	});

	let p = portrait.clone();
	dom::listen(&wrap, "mousemove", move |ev: MouseEvent| {
		p.track(ev.client_x() as f64, ev.client_y() as f64);
	});

	let p = portrait.clone();
	dom::listen_passive(&wrap, "touchmove", move |ev: TouchEvent| {
		if let Some(touch) = ev.touches().get(0) {
			p.track(touch.client_x() as f64, touch.client_y() as f64);
		}
	});

	let p = portrait.clone();
	dom::listen(&wrap, "mouseleave", move |_: Event| p.reset());

	let p = portrait.clone();
	dom::listen(&wrap, "blur", move |_: Event| p.reset());

	let p = portrait;
	dom::listen(&wrap, "focus", move |_: Event| p.focus());

	info!("parallax: attached to #{}", config.wrap_id);
}
