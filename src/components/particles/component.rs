//! Leptos component owning the full-viewport particle overlay.
//!
//! The component creates a fixed, input-transparent canvas, sizes it to the
//! window, and regenerates the field on every `resize`. An animation loop runs
//! via `requestAnimationFrame`, stepping and redrawing the field each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use crate::config::ParticleConfig;
use crate::dom;

const OVERLAY_STYLE: &str =
	"position: fixed; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none; z-index: 0;";

/// Sizes the canvas backing store to the viewport and rebuilds the field.
fn fit_to_viewport(window: &Window, canvas: &HtmlCanvasElement, field: &mut ParticleField) {
	let Some((w, h)) = dom::viewport_size(window) else {
		return;
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	field.regenerate(w, h, &mut js_sys::Math::random);
	debug!(
		"particles: regenerated {} particles for {}x{}",
		field.particles().len(),
		w,
		h
	);
}

/// Renders the ambient particle backdrop as a fixed full-viewport canvas.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: ParticleConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<ParticleField>> = Rc::new(RefCell::new(ParticleField::new(config)));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = dom::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			debug!("particles: 2d context unavailable, skipping");
			return;
		};

		fit_to_viewport(&window, &canvas, &mut field.borrow_mut());

		let (field_resize, canvas_resize) = (field.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(win) = dom::window() {
				fit_to_viewport(&win, &canvas_resize, &mut field_resize.borrow_mut());
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner) = (field.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			{
				let mut f = field_anim.borrow_mut();
				f.step();
				render::render(&f, &ctx);
			}
			if let (Some(win), Some(cb)) = (dom::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}

		info!("particles: overlay attached");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-overlay"
			aria-hidden="true"
			style=OVERLAY_STYLE
		/>
	}
}
