//! Smooth scrolling for in-page navigation links.

use log::{debug, info};
use web_sys::{Element, Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::NavigationConfig;
use crate::dom;

/// Target id of an in-page link: the href with its first `#` removed.
///
/// Returns `None` for an empty id, which scrolls nowhere.
pub fn fragment_id(href: &str) -> Option<String> {
	let id = href.replacen('#', "", 1);
	if id.is_empty() { None } else { Some(id) }
}

fn scroll_to(id: &str) {
	let Some(target) = dom::by_id::<Element>(id) else {
		debug!("navigation: no element #{}", id);
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Start);
	target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Replaces the default jump of every matching link with a smooth scroll.
pub fn attach(config: &NavigationConfig) {
	let links = dom::query_all(&config.link_selector);
	for link in &links {
		let anchor = link.clone();
		dom::listen(link, "click", move |ev: Event| {
			ev.prevent_default();
			if let Some(id) = anchor.get_attribute("href").as_deref().and_then(fragment_id) {
				scroll_to(&id);
			}
		});
	}
	info!("navigation: {} links smoothed", links.len());
}
