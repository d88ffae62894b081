//! One-shot scroll effects installed after the page mounts: reveal-on-scroll
//! animations, skill-bar fills and the hero parallax. The observers and
//! listeners live for the whole page, so their closures are leaked on purpose.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::set_timeout;
use leptos::prelude::window_event_listener;
use wasm_bindgen::prelude::*;
use web_sys::{
	Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
	IntersectionObserverInit,
};

/// Elements that fade in the first time they scroll into view.
const REVEAL_SELECTOR: &str = ".section-header, .project-card, .skill-category, .contact-item";
/// Delay before a visible skill bar starts filling.
const SKILL_FILL_DELAY: Duration = Duration::from_millis(300);

/// Install all scroll-driven effects. Call once, after the DOM is mounted.
pub fn install() {
	install_reveal_observer();
	install_skill_bars();
	install_parallax();
}

fn for_each_matching(selector: &str, mut f: impl FnMut(Element)) {
	let document = web_sys::window().unwrap().document().unwrap();
	let nodes = document.query_selector_all(selector).unwrap();
	for i in 0..nodes.length() {
		if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			f(element);
		}
	}
}

fn observer_with(
	callback: impl FnMut(IntersectionObserverEntry) + 'static,
	options: &IntersectionObserverInit,
) -> IntersectionObserver {
	let mut callback = callback;
	let closure = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				callback(entry.unchecked_into::<IntersectionObserverEntry>());
			}
		},
	);
	let observer =
		IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), options)
			.unwrap();
	closure.forget();
	observer
}

fn install_reveal_observer() {
	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(0.1));
	options.set_root_margin("0px 0px -50px 0px");

	let observer = observer_with(
		|entry| {
			if entry.is_intersecting() {
				let _ = entry.target().class_list().add_1("visible");
			}
		},
		&options,
	);

	for_each_matching(REVEAL_SELECTOR, |element| {
		let _ = element.class_list().add_1("fade-in");
		observer.observe(&element);
	});
}

fn install_skill_bars() {
	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(0.5));

	let observer = observer_with(
		|entry| {
			if !entry.is_intersecting() {
				return;
			}
			let Ok(bar) = entry.target().dyn_into::<HtmlElement>() else {
				return;
			};
			let Some(width) = bar.get_attribute("data-width") else {
				return;
			};
			set_timeout(
				move || {
					let _ = bar.style().set_property("width", &format!("{width}%"));
				},
				SKILL_FILL_DELAY,
			);
		},
		&options,
	);

	for_each_matching(".skill-progress", |element| observer.observe(&element));
}

fn install_parallax() {
	window_event_listener(ev::scroll, move |_| {
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();
		let scrolled = window.page_y_offset().unwrap_or(0.0);

		if let Some(hero) = document
			.query_selector(".hero-section")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		{
			let _ = hero
				.style()
				.set_property("transform", &format!("translateY({}px)", scrolled * -0.5));
		}

		// Expose overall progress to scroll-driven CSS.
		let doc_height = document
			.document_element()
			.map(|el| el.scroll_height() as f64)
			.unwrap_or(0.0);
		let viewport = window.inner_height().unwrap().as_f64().unwrap_or(0.0);
		if doc_height > viewport {
			let progress = scrolled / (doc_height - viewport);
			if let Some(root) = document
				.document_element()
				.and_then(|el| el.dyn_into::<HtmlElement>().ok())
			{
				let _ = root
					.style()
					.set_property("--scroll-progress", &progress.to_string());
			}
		}
	});
}
