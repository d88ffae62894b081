use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1>"404"</h1>
			<p>"This page drifted off the network."</p>
			<a href="/">"Back to the homepage"</a>
		</main>
	}
}
