//! Hero tagline typewriter: one character every 50ms, starting after the
//! hero entrance animations have settled.

use std::time::Duration;

use leptos::prelude::*;

const TYPING_TEXT: &str = "Software Engineer & Project Manager specializing in secure, \
	scalable solutions with strategic methodology";
const START_DELAY: Duration = Duration::from_millis(2000);
const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Byte index just past the character starting at `index`, if any.
///
/// Keeps every revealed prefix on a char boundary, so the tagline may
/// contain non-ASCII text without panicking mid-animation.
fn advance(text: &str, index: usize) -> Option<usize> {
	text[index..].chars().next().map(|c| index + c.len_utf8())
}

fn type_from(shown: WriteSignal<usize>, index: usize) {
	let Some(next) = advance(TYPING_TEXT, index) else {
		return;
	};
	shown.set(next);
	set_timeout(move || type_from(shown, next), CHAR_INTERVAL);
}

/// Progressively revealed tagline under the hero title.
#[component]
pub fn TypingText() -> impl IntoView {
	let (shown, set_shown) = signal(0usize);

	Effect::new(move |_| {
		set_timeout(move || type_from(set_shown, 0), START_DELAY);
	});

	view! { <p class="typing-text">{move || TYPING_TEXT[..shown.get()].to_string()}</p> }
}

#[cfg(test)]
mod tests {
	use super::{TYPING_TEXT, advance};

	#[test]
	fn advance_steps_over_multibyte_characters() {
		let text = "héllo";
		let mut index = 0;
		let mut seen = Vec::new();
		while let Some(next) = advance(text, index) {
			// Every prefix must be sliceable without panicking.
			seen.push(&text[..next]);
			index = next;
		}
		assert_eq!(seen, ["h", "hé", "hél", "héll", "héllo"]);
	}

	#[test]
	fn tagline_types_out_to_its_full_length() {
		let mut index = 0;
		let mut steps = 0;
		while let Some(next) = advance(TYPING_TEXT, index) {
			index = next;
			steps += 1;
		}
		assert_eq!(index, TYPING_TEXT.len());
		assert_eq!(steps, TYPING_TEXT.chars().count());
		assert!(advance(TYPING_TEXT, index).is_none());
	}
}
