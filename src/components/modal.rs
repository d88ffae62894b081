//! Project-details modal, populated from the static project table.
//!
//! Closes on Escape, the close button, or a click on the backdrop; body
//! scrolling is locked while it is open.

use leptos::ev;
use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::projects::{self, Project};

fn tag_list(items: &'static [&'static str]) -> impl IntoView {
	items
		.iter()
		.map(|item| view! { <span class="tech-tag">{*item}</span> })
		.collect_view()
}

fn bullet_list(items: &'static [&'static str], class: &'static str) -> impl IntoView {
	view! {
		<ul class=class>
			{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
		</ul>
	}
}

fn project_body(project: &'static Project) -> impl IntoView {
	view! {
		<div class="project-detail-content">
			<div class="project-description">
				<h4>"Project Overview"</h4>
				<p>{project.description}</p>
			</div>

			<div class="project-technologies">
				<h4>"Technologies Used"</h4>
				<div class="tech-tags">{tag_list(project.technologies)}</div>
			</div>

			<div class="project-features">
				<h4>"Key Features"</h4>
				{bullet_list(project.features, "feature-list")}
			</div>

			<div class="project-challenges">
				<h4>"Challenges Overcome"</h4>
				{bullet_list(project.challenges, "challenge-list")}
			</div>

			<div class="project-outcomes">
				<h4>"Results & Impact"</h4>
				{bullet_list(project.outcomes, "outcome-list")}
			</div>

			{project
				.link
				.map(|link| {
					view! {
						<div class="project-links">
							<a href=link target="_blank" class="project-external-link">
								"View Documentation " <span>"→"</span>
							</a>
						</div>
					}
				})}
		</div>
	}
}

/// Modal overlay showing the details of the currently selected project.
#[component]
pub fn ProjectModal(active: RwSignal<Option<&'static str>>) -> impl IntoView {
	window_event_listener(ev::keydown, move |event| {
		if event.key() == "Escape" {
			active.set(None);
		}
	});

	// Lock body scrolling while the modal is open.
	Effect::new(move |_| {
		let open = active.get().is_some();
		if let Some(body) = web_sys::window().unwrap().document().unwrap().body() {
			let _ = body
				.style()
				.set_property("overflow", if open { "hidden" } else { "auto" });
		}
	});

	move || {
		active.get().and_then(projects::by_key).map(|project| {
			view! {
				<div class="modal-overlay" on:click=move |_| active.set(None)>
					<div class="modal-content" on:click=move |ev: MouseEvent| ev.stop_propagation()>
						<button
							class="modal-close"
							aria-label="Close project details"
							on:click=move |_| active.set(None)
						>
							"×"
						</button>
						<h3 class="modal-title">{project.title}</h3>
						{project_body(project)}
					</div>
				</div>
			}
		})
	}
}
