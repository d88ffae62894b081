use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{LINK_DISTANCE, NetworkState, link_opacity};

const LINK_COLOR: &str = "#f2f2f2";
const HUB_ALPHA: f64 = 0.8;
const SATELLITE_ALPHA: f64 = 0.4;
const HALO_ALPHA: f64 = 0.2;

/// Hub radius multiplier at wall-clock time `time_ms`, in `[0.4, 1.0]`.
fn pulse(time_ms: f64, offset: f64) -> f64 {
	(time_ms * 0.003 + offset).sin() * 0.3 + 0.7
}

/// Draw one frame: all links first, then all node bodies, so lines never
/// occlude circles.
pub fn render(state: &NetworkState, ctx: &CanvasRenderingContext2d, time_ms: f64) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	draw_links(state, ctx);
	draw_nodes(state, ctx, time_ms);
}

fn draw_links(state: &NetworkState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str(LINK_COLOR);
	ctx.set_line_width(1.0);
	for (i, neighbours) in state.links.iter().enumerate() {
		let node = &state.nodes[i];
		for &j in neighbours {
			let other = &state.nodes[j];
			// Visibility follows the *animated* distance, not the anchor
			// distance the link was built from.
			let distance = (node.x - other.x).hypot(node.y - other.y);
			if distance >= LINK_DISTANCE {
				continue;
			}
			ctx.set_global_alpha(link_opacity(distance));
			ctx.begin_path();
			ctx.move_to(node.x, node.y);
			ctx.line_to(other.x, other.y);
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

fn draw_nodes(state: &NetworkState, ctx: &CanvasRenderingContext2d, time_ms: f64) {
	for node in &state.nodes {
		let radius = if node.kind.is_hub() {
			node.kind.radius() * pulse(time_ms, node.pulse_offset)
		} else {
			node.kind.radius()
		};

		ctx.set_global_alpha(if node.kind.is_hub() {
			HUB_ALPHA
		} else {
			SATELLITE_ALPHA
		});
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(node.kind.color());
		ctx.fill();

		if node.kind.is_hub() {
			ctx.set_global_alpha(HALO_ALPHA);
			ctx.set_line_width(2.0);
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, radius * 1.5, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(node.kind.color());
			ctx.stroke();
		}
	}
	ctx.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
	use super::pulse;

	#[test]
	fn pulse_stays_within_its_band() {
		for step in 0..2000 {
			let scale = pulse(step as f64 * 16.0, 1.3);
			assert!((0.399..=1.0).contains(&scale));
		}
	}

	#[test]
	fn pulse_phase_offsets_desynchronize_hubs() {
		let now = 123456.0;
		assert_ne!(pulse(now, 0.0), pulse(now, std::f64::consts::PI));
	}
}
