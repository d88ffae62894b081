//! Floating particle overlay: 20 slowly drifting DOM elements on their own
//! animation loop, fully independent of the canvas animator.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

const PARTICLE_COUNT: usize = 20;
const DRIFT_SPEED: f64 = 0.5;
const MAX_LIFE: f64 = 100.0;

/// Motion state of one overlay particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	vx: f64,
	vy: f64,
	life: f64,
}

impl Particle {
	fn spawn(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
		Self {
			x: rng() * width,
			y: rng() * height,
			vx: (rng() - 0.5) * DRIFT_SPEED,
			vy: (rng() - 0.5) * DRIFT_SPEED,
			life: rng() * MAX_LIFE,
		}
	}

	/// Drift one frame, wrapping at the viewport edges and respawning once
	/// the particle's life runs out.
	fn step(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
		self.x += self.vx;
		self.y += self.vy;
		self.life -= 1.0;

		if self.x < 0.0 {
			self.x = width;
		}
		if self.x > width {
			self.x = 0.0;
		}
		if self.y < 0.0 {
			self.y = height;
		}
		if self.y > height {
			self.y = 0.0;
		}

		if self.life <= 0.0 {
			*self = Self::spawn(width, height, rng);
		}
	}
}

/// Container that owns the particle elements and their animation loop.
#[component]
pub fn FloatingParticles() -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let animate_init = animate.clone();

	Effect::new(move |_| {
		let Some(container) = container_ref.get() else {
			return;
		};
		let container: Element = container.into();
		let window = web_sys::window().unwrap();
		let document = window.document().unwrap();
		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);

		let mut rng = || js_sys::Math::random();
		let mut particles: Vec<(Particle, HtmlElement)> = Vec::with_capacity(PARTICLE_COUNT);
		for _ in 0..PARTICLE_COUNT {
			let particle = Particle::spawn(w, h, &mut rng);
			let element: HtmlElement = document
				.create_element("div")
				.unwrap()
				.dyn_into()
				.unwrap();
			element.set_class_name("particle");
			let style = element.style();
			let _ = style.set_property("left", &format!("{}px", particle.x));
			let _ = style.set_property("top", &format!("{}px", particle.y));
			let _ = style.set_property("animation-delay", &format!("{}s", rng() * 6.0));
			let _ = container.append_child(&element);
			particles.push((particle, element));
		}

		let animate_inner = animate_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let window = web_sys::window().unwrap();
			let (w, h) = (
				window.inner_width().unwrap().as_f64().unwrap(),
				window.inner_height().unwrap().as_f64().unwrap(),
			);
			for (particle, element) in &mut particles {
				particle.step(w, h, &mut || js_sys::Math::random());
				let style = HtmlElement::style(element);
				let _ = style.set_property("left", &format!("{}px", particle.x));
				let _ = style.set_property("top", &format!("{}px", particle.y));
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! { <div node_ref=container_ref class="particles" /> }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fixed(value: f64) -> impl FnMut() -> f64 {
		move || value
	}

	#[test]
	fn drift_wraps_around_the_viewport() {
		let mut particle = Particle {
			x: 0.1,
			y: 599.95,
			vx: -0.2,
			vy: 0.2,
			life: 50.0,
		};
		particle.step(800.0, 600.0, &mut fixed(0.5));
		assert_eq!(particle.x, 800.0);
		assert_eq!(particle.y, 0.0);
	}

	#[test]
	fn expired_particle_respawns() {
		let mut particle = Particle {
			x: 400.0,
			y: 300.0,
			vx: 0.1,
			vy: 0.1,
			life: 1.0,
		};
		particle.step(800.0, 600.0, &mut fixed(0.25));
		assert_eq!(particle.life, 0.25 * MAX_LIFE);
		assert_eq!((particle.x, particle.y), (200.0, 150.0));
	}

	#[test]
	fn spawn_speed_stays_in_band() {
		for value in [0.0, 0.25, 0.5, 0.75, 0.999] {
			let particle = Particle::spawn(800.0, 600.0, &mut fixed(value));
			assert!(particle.vx.abs() <= DRIFT_SPEED / 2.0);
			assert!(particle.vy.abs() <= DRIFT_SPEED / 2.0);
		}
	}
}
