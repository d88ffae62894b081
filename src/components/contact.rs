//! Contact form: validates the message, then opens a pre-filled Gmail
//! compose window in a new tab. Nothing is sent from this page itself.

use std::time::Duration;

use leptos::prelude::*;
use web_sys::SubmitEvent;

/// Destination address for the compose window.
pub const CONTACT_EMAIL: &str = "sam.ngomi100@gmail.com";
const SUBJECT: &str = "Hello Samuel";

const SENT_AFTER: Duration = Duration::from_millis(1500);
const RESET_AFTER: Duration = Duration::from_millis(2000);

/// Submit button label cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SendState {
	Idle,
	Sending,
	Sent,
}

impl SendState {
	fn label(&self) -> &'static str {
		match self {
			SendState::Idle => "Send Message",
			SendState::Sending => "Sending...",
			SendState::Sent => "Message Sent!",
		}
	}
}

/// A message is sendable once it contains any non-whitespace content.
fn valid_message(message: &str) -> Option<&str> {
	let trimmed = message.trim();
	(!trimmed.is_empty()).then_some(trimmed)
}

fn compose_url(message: &str) -> String {
	let encode = |s: &str| String::from(js_sys::encode_uri_component(s));
	format!(
		"https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
		CONTACT_EMAIL,
		encode(SUBJECT),
		encode(message)
	)
}

/// Contact form with a mail-compose submit action.
#[component]
pub fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let send_state = RwSignal::new(SendState::Idle);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let window = web_sys::window().unwrap();

		let body = message.get();
		let Some(body) = valid_message(&body) else {
			let _ = window.alert_with_message("Please type a message before sending.");
			return;
		};

		send_state.set(SendState::Sending);
		let _ = window.open_with_url_and_target(&compose_url(body), "_blank");

		set_timeout(
			move || {
				send_state.set(SendState::Sent);
				set_timeout(
					move || {
						send_state.set(SendState::Idle);
						name.set(String::new());
						email.set(String::new());
						message.set(String::new());
					},
					RESET_AFTER,
				);
			},
			SENT_AFTER,
		);
	};

	view! {
		<form id="contactForm" class="contact-form" on:submit=on_submit>
			<div class="form-group">
				<label for="name">"Name"</label>
				<input
					id="name"
					name="name"
					type="text"
					prop:value=move || name.get()
					on:input=move |ev| name.set(event_target_value(&ev))
				/>
			</div>
			<div class="form-group">
				<label for="email">"Email"</label>
				<input
					id="email"
					name="email"
					type="email"
					prop:value=move || email.get()
					on:input=move |ev| email.set(event_target_value(&ev))
				/>
			</div>
			<div class="form-group">
				<label for="message">"Message"</label>
				<textarea
					id="message"
					name="message"
					rows="6"
					prop:value=move || message.get()
					on:input=move |ev| message.set(event_target_value(&ev))
				/>
			</div>
			<button
				type="submit"
				class="submit-btn"
				disabled=move || send_state.get() != SendState::Idle
			>
				<span>{move || send_state.get().label()}</span>
			</button>
		</form>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_only_messages_are_rejected() {
		assert_eq!(valid_message(""), None);
		assert_eq!(valid_message("   \n\t "), None);
	}

	#[test]
	fn messages_are_trimmed_before_sending() {
		assert_eq!(valid_message("  hello there  "), Some("hello there"));
	}

	#[test]
	fn button_labels_follow_the_send_cycle() {
		assert_eq!(SendState::Idle.label(), "Send Message");
		assert_eq!(SendState::Sending.label(), "Sending...");
		assert_eq!(SendState::Sent.label(), "Message Sent!");
	}
}
