//! Optional DOM lookups shared by every effect.
//!
//! Each helper returns `None` (or an empty list) when the anchor it needs is
//! missing, so callers can skip their feature without raising an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, Window};

pub fn window() -> Option<Window> {
	web_sys::window()
}

pub fn document() -> Option<Document> {
	window()?.document()
}

/// Looks up an element by id and casts it to `T`.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
	document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
	let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
		return Vec::new();
	};
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// First descendant of `parent` matching `selector`, cast to `T`.
pub fn child<T: JsCast>(parent: &Element, selector: &str) -> Option<T> {
	parent.query_selector(selector).ok()??.dyn_into().ok()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
	let _ = element.style().set_property(property, value);
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Whether a `document.readyState` value means parsing is still in progress.
pub fn is_loading(ready_state: &str) -> bool {
	ready_state == "loading"
}

/// Attaches `handler` for the lifetime of the page view.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
	E: JsCast + 'static,
	F: FnMut(E) + 'static,
{
	attach_listener(target, event, handler, None);
}

/// Like [`listen`], but registered as a passive listener.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F)
where
	E: JsCast + 'static,
	F: FnMut(E) + 'static,
{
	let options = AddEventListenerOptions::new();
	options.set_passive(true);
	attach_listener(target, event, handler, Some(&options));
}

fn attach_listener<E, F>(
	target: &EventTarget,
	event: &str,
	mut handler: F,
	options: Option<&AddEventListenerOptions>,
) where
	E: JsCast + 'static,
	F: FnMut(E) + 'static,
{
	let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
		if let Ok(ev) = ev.dyn_into::<E>() {
			handler(ev);
		}
	});
	let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
	let _ = match options {
		Some(options) => target
			.add_event_listener_with_callback_and_add_event_listener_options(event, callback, options),
		None => target.add_event_listener_with_callback(event, callback),
	};
	// Listeners live until page unload.
	closure.forget();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn only_the_loading_state_defers_startup() {
		assert!(is_loading("loading"));
		assert!(!is_loading("interactive"));
		assert!(!is_loading("complete"));
	}
}
