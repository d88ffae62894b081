//! Fixed top navigation: mobile menu toggle, scrolled styling, smooth
//! scrolling to sections and active-link highlighting from scroll position.

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

/// Page sections reachable from the nav, as `(element id, label)`.
pub const SECTIONS: &[(&str, &str)] = &[
	("home", "Home"),
	("about", "About"),
	("projects", "Projects"),
	("skills", "Skills"),
	("contact", "Contact"),
];

/// Fixed navbar height compensated for when scrolling to a section.
const NAV_OFFSET: f64 = 80.0;
/// Scroll depth past which the navbar switches to its solid style.
const SCROLLED_AT: f64 = 100.0;
/// Look-ahead added to the scroll position when picking the active section.
const ACTIVE_LOOKAHEAD: f64 = 200.0;

/// Smooth-scroll the viewport so `section_id` lands under the navbar.
pub fn scroll_to_section(section_id: &str) {
	let window = web_sys::window().unwrap();
	let document = window.document().unwrap();
	let Some(section) = document.get_element_by_id(section_id) else {
		return;
	};
	let Ok(section) = section.dyn_into::<HtmlElement>() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(section.offset_top() as f64 - NAV_OFFSET);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

fn section_at(scroll_y: f64) -> Option<&'static str> {
	let document = web_sys::window().unwrap().document().unwrap();
	let position = scroll_y + ACTIVE_LOOKAHEAD;
	let mut active = None;
	for &(id, _) in SECTIONS {
		let Some(section) = document
			.get_element_by_id(id)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};
		let top = section.offset_top() as f64;
		let height = section.offset_height() as f64;
		if position >= top && position < top + height {
			active = Some(id);
		}
	}
	active
}

/// Top navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
	let menu_open = RwSignal::new(false);
	let scrolled = RwSignal::new(false);
	let active = RwSignal::new("home");

	window_event_listener(ev::scroll, move |_| {
		let window = web_sys::window().unwrap();
		let scroll_y = window.scroll_y().unwrap_or(0.0);
		scrolled.set(scroll_y > SCROLLED_AT);
		if let Some(section) = section_at(scroll_y) {
			active.set(section);
		}
	});

	view! {
		<nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
			<div class="nav-container">
				<a
					class="nav-logo"
					on:click=move |_| {
						scroll_to_section("home");
					}
				>
					"SN"
				</a>

				<button
					class="nav-toggle"
					class:active=move || menu_open.get()
					aria-label="Toggle navigation menu"
					on:click=move |_| menu_open.update(|open| *open = !*open)
				>
					<span class="bar" />
					<span class="bar" />
					<span class="bar" />
				</button>

				<ul class="nav-menu" class:active=move || menu_open.get()>
					{SECTIONS
						.iter()
						.map(|&(id, label)| {
							view! {
								<li>
									<a
										class="nav-link"
										class:active=move || active.get() == id
										on:click=move |_| {
											menu_open.set(false);
											scroll_to_section(id);
										}
									>
										{label}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</div>
		</nav>
	}
}
