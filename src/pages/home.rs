use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::contact::ContactForm;
use crate::components::effects;
use crate::components::modal::ProjectModal;
use crate::components::navbar::{NavBar, scroll_to_section};
use crate::components::network_background::NetworkBackground;
use crate::components::particles::FloatingParticles;
use crate::components::typing::TypingText;
use crate::projects::PROJECTS;

/// Skill groups rendered as animated progress bars, as
/// `(group, [(skill, percent)])`.
const SKILL_GROUPS: &[(&str, &[(&str, u32)])] = &[
	(
		"Cybersecurity",
		&[
			("Network Security", 90),
			("Penetration Testing", 80),
			("Security Auditing", 85),
		],
	),
	(
		"Project Management",
		&[
			("PRINCE2 Methodology", 90),
			("Stakeholder Management", 85),
			("Risk Assessment", 80),
		],
	),
	(
		"Data & Analytics",
		&[("Python", 85), ("SQL", 80), ("Power BI", 85)],
	),
	(
		"Development",
		&[("Java", 85), ("Web Development", 90), ("Docker", 80)],
	),
];

/// Position of the pointer within a card edge, as a percentage of its extent.
fn hover_percent(client: f64, origin: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 50.0;
	}
	(client - origin) / extent * 100.0
}

/// Portfolio homepage: hero with the animated network background, then the
/// about, projects, skills and contact sections.
#[component]
pub fn Home() -> impl IntoView {
	// Key of the project currently shown in the modal, if any.
	let active_project: RwSignal<Option<&'static str>> = RwSignal::new(None);

	// Scroll effects need the sections in the DOM first.
	Effect::new(move |_| effects::install());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<a class="skip-link" href="#home">
				"Skip to main content"
			</a>
			<NavBar />

			<section id="home" class="hero-section" role="main">
				<NetworkBackground />
				<FloatingParticles />
				<div class="hero-content">
					<h1 class="hero-title">"Samuel Ngomi"</h1>
					<TypingText />
					<div class="hero-actions">
						<button class="cta-button" on:click=move |_| scroll_to_section("projects")>
							<span>"View Projects"</span>
						</button>
						<button
							class="cta-button secondary"
							on:click=move |_| scroll_to_section("contact")
						>
							<span>"Get in Touch"</span>
						</button>
					</div>
				</div>
			</section>

			<section id="about" class="section">
				<div class="section-header">
					<h2>"About"</h2>
				</div>
				<div class="about-content">
					<p>
						"Software engineer and certified project manager working at the \
						intersection of secure infrastructure, data analytics and delivery \
						methodology. I build systems that are resilient by design and run \
						projects that land on time."
					</p>
					<div class="about-links">
						<a class="go-to-github" href="https://github.com/Roman-45" target="_blank">
							"GitHub"
						</a>
						<a
							class="go-to-linkedin"
							href="https://www.linkedin.com/in/samuel-ngomi-967b621b4/"
							target="_blank"
						>
							"LinkedIn"
						</a>
					</div>
				</div>
			</section>

			<section id="projects" class="section">
				<div class="section-header">
					<h2>"Projects"</h2>
				</div>
				<div class="projects-grid">
					{PROJECTS
						.iter()
						.map(|project| {
							let key = project.key;
							let card_ref = NodeRef::<leptos::html::Article>::new();
							// Pointer-following glow origin, consumed by the
							// card's ::before gradient.
							let on_card_move = move |ev: MouseEvent| {
								let Some(card) = card_ref.get() else {
									return;
								};
								let rect = card.get_bounding_client_rect();
								let x = hover_percent(ev.client_x() as f64, rect.left(), rect.width());
								let y = hover_percent(ev.client_y() as f64, rect.top(), rect.height());
								let style = card.style();
								let _ = style.set_property("--mouse-x", &format!("{x}%"));
								let _ = style.set_property("--mouse-y", &format!("{y}%"));
							};
							let on_card_leave = move |_: MouseEvent| {
								let Some(card) = card_ref.get() else {
									return;
								};
								let style = card.style();
								let _ = style.set_property("--mouse-x", "50%");
								let _ = style.set_property("--mouse-y", "50%");
							};
							view! {
								<article
									class="project-card"
									node_ref=card_ref
									on:mousemove=on_card_move
									on:mouseleave=on_card_leave
								>
									<h3>{project.title}</h3>
									<p class="project-blurb">{project.description}</p>
									<div class="tech-tags">
										{project
											.technologies
											.iter()
											.take(3)
											.map(|tech| {
												view! { <span class="tech-tag">{*tech}</span> }
											})
											.collect_view()}
									</div>
									<button
										class="details-btn"
										on:click=move |_| active_project.set(Some(key))
									>
										"View Details"
									</button>
								</article>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="skills" class="section">
				<div class="section-header">
					<h2>"Skills"</h2>
				</div>
				<div class="skills-grid">
					{SKILL_GROUPS
						.iter()
						.map(|&(group, skills)| {
							view! {
								<div class="skill-category">
									<h3>{group}</h3>
									{skills
										.iter()
										.map(|&(skill, percent)| {
											view! {
												<div class="skill">
													<span class="skill-name">{skill}</span>
													<div class="skill-bar">
														<div
															class="skill-progress"
															data-width=percent.to_string()
														/>
													</div>
												</div>
											}
										})
										.collect_view()}
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section id="contact" class="section">
				<div class="section-header">
					<h2>"Contact"</h2>
				</div>
				<div class="contact-item">
					<ContactForm />
				</div>
			</section>

			<footer class="footer">
				<p>"© 2025 Samuel Ngomi"</p>
			</footer>

			<ProjectModal active=active_project />
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::hover_percent;

	#[test]
	fn hover_origin_tracks_the_pointer_across_the_card() {
		// Card at x=100, 200 wide: left edge, middle, right edge.
		assert_eq!(hover_percent(100.0, 100.0, 200.0), 0.0);
		assert_eq!(hover_percent(200.0, 100.0, 200.0), 50.0);
		assert_eq!(hover_percent(300.0, 100.0, 200.0), 100.0);
	}

	#[test]
	fn hover_origin_recenters_on_a_degenerate_card() {
		assert_eq!(hover_percent(40.0, 100.0, 0.0), 50.0);
	}
}
