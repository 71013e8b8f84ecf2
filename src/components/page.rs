//! Small one-shot page touches: footer year, resume download, social icon stagger.

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement, HtmlElement};

use crate::config::{ResumeConfig, SocialConfig};
use crate::dom;

/// Writes the current year into the element with id `year_id`.
pub fn show_year(year_id: &str) {
	let Some(el) = dom::by_id::<HtmlElement>(year_id) else {
		debug!("page: #{} not found, year not shown", year_id);
		return;
	};
	let year = js_sys::Date::new_0().get_full_year();
	el.set_text_content(Some(&year.to_string()));
}

fn download(config: &ResumeConfig) {
	let Some(doc) = dom::document() else {
		return;
	};
	let Some(body) = doc.body() else {
		return;
	};
	let Some(anchor) = doc
		.create_element("a")
		.ok()
		.and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
	else {
		return;
	};
	anchor.set_href(&config.href);
	anchor.set_download(&config.filename);
	let _ = body.append_child(&anchor);
	anchor.click();
	anchor.remove();
}

/// Makes the resume trigger start a download of the configured file.
pub fn attach_resume(config: &ResumeConfig) {
	let Some(trigger) = dom::by_id::<HtmlElement>(&config.trigger_id) else {
		debug!("page: #{} not found, resume download disabled", config.trigger_id);
		return;
	};
	let config = config.clone();
	dom::listen(&trigger, "click", move |_: Event| download(&config));
	info!("page: resume download wired");
}

/// Inline transition for the social icon at `index`.
pub fn stagger_transition(index: usize, step_ms: u32) -> String {
	let delay = index as u64 * step_ms as u64;
	format!(
		"transform .35s cubic-bezier(.2,.9,.3,1) {delay}ms, box-shadow .35s {delay}ms"
	)
}

/// Staggers the entrance transition of each social icon.
pub fn stagger_social(config: &SocialConfig) {
	for (idx, el) in dom::query_all(&config.selector).into_iter().enumerate() {
		if let Ok(el) = el.dyn_into::<HtmlElement>() {
			dom::set_style(&el, "transition", &stagger_transition(idx, config.stagger_ms));
		}
	}
}
