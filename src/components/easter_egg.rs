//! Konami-code easter egg: the classic key sequence rainbow-shifts the
//! whole page for ten seconds.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::{set_timeout, window_event_listener};

const SEQUENCE: &[&str] = &[
	"ArrowUp",
	"ArrowUp",
	"ArrowDown",
	"ArrowDown",
	"ArrowLeft",
	"ArrowRight",
	"ArrowLeft",
	"ArrowRight",
	"b",
	"a",
];
const RAINBOW_DURATION: Duration = Duration::from_secs(10);

/// Tracks progress through the key sequence. Any mismatch starts over.
#[derive(Debug, Default)]
pub struct KonamiTracker {
	index: usize,
}

impl KonamiTracker {
	/// Feed one key press; returns true when the full sequence completes.
	pub fn observe(&mut self, key: &str) -> bool {
		if key == SEQUENCE[self.index] {
			self.index += 1;
			if self.index == SEQUENCE.len() {
				self.index = 0;
				return true;
			}
		} else {
			self.index = 0;
		}
		false
	}
}

fn activate_rainbow() {
	let Some(body) = web_sys::window().unwrap().document().unwrap().body() else {
		return;
	};
	let _ = body
		.style()
		.set_property("animation", "rainbow 2s linear infinite");
	set_timeout(
		move || {
			let _ = body.style().remove_property("animation");
		},
		RAINBOW_DURATION,
	);
}

/// Listen for the sequence on the whole document, for the page lifetime.
pub fn install() {
	let tracker = std::cell::RefCell::new(KonamiTracker::default());
	window_event_listener(ev::keydown, move |event| {
		if tracker.borrow_mut().observe(&event.key()) {
			log::info!("Konami code accepted");
			activate_rainbow();
		}
	});
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_sequence_triggers_once() {
		let mut tracker = KonamiTracker::default();
		let keys = [
			"ArrowUp",
			"ArrowUp",
			"ArrowDown",
			"ArrowDown",
			"ArrowLeft",
			"ArrowRight",
			"ArrowLeft",
			"ArrowRight",
			"b",
		];
		for key in keys {
			assert!(!tracker.observe(key));
		}
		assert!(tracker.observe("a"));
		// Tracker rearms for a second run.
		assert!(!tracker.observe("ArrowUp"));
	}

	#[test]
	fn any_mismatch_resets_progress() {
		let mut tracker = KonamiTracker::default();
		assert!(!tracker.observe("ArrowUp"));
		assert!(!tracker.observe("ArrowUp"));
		assert!(!tracker.observe("x"));
		// Needs the whole sequence again from the start.
		for key in SEQUENCE.iter().take(SEQUENCE.len() - 1) {
			assert!(!tracker.observe(key));
		}
		assert!(tracker.observe("a"));
	}
}
