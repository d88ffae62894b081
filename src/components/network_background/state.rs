use super::types::{NetworkNode, NodeKind};

/// Random satellites placed in addition to the four fixed hubs.
pub const SATELLITE_COUNT: usize = 30;
/// Anchor distance below which two nodes are linked at construction time,
/// and below which a link is drawn at all at render time.
pub const LINK_DISTANCE: f64 = 200.0;
/// Pointer distance (from a node's anchor) below which attraction applies.
pub const ATTRACTION_RADIUS: f64 = 150.0;
/// Pointer rest position before any interaction: far enough off-surface
/// that the attraction branch never triggers.
pub const POINTER_OFFSCREEN: (f64, f64) = (-9999.0, -9999.0);

const ATTRACTION_STRENGTH: f64 = 0.0005;
const DAMPING: f64 = 0.95;
const RETURN_PULL: f64 = 0.02;

/// Fractional viewport placement of the four hubs.
const HUB_LAYOUT: &[(f64, f64, NodeKind)] = &[
	(0.25, 0.3, NodeKind::Cybersecurity),
	(0.75, 0.3, NodeKind::Management),
	(0.25, 0.7, NodeKind::Data),
	(0.75, 0.7, NodeKind::Development),
];

/// Opacity of a link rendered at current distance `d`.
///
/// Reaches zero at 150 even though links stay draw-eligible up to
/// [`LINK_DISTANCE`]; the mismatch is part of the intended look.
pub fn link_opacity(d: f64) -> f64 {
	(0.15 - d / 1000.0).max(0.0)
}

/// Owned state of the background animator for one canvas generation.
///
/// Links are index pairs into `nodes`, recorded on both endpoints. A
/// resize throws the whole generation away and rebuilds from scratch;
/// only the pointer survives.
pub struct NetworkState {
	pub nodes: Vec<NetworkNode>,
	pub links: Vec<Vec<usize>>,
	pub pointer: (f64, f64),
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	/// Build a fresh node generation for a `width` x `height` surface.
	///
	/// `rng` supplies uniform values in `[0, 1)` (Math.random in the
	/// browser, a deterministic sequence in tests).
	pub fn new(width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
		let mut nodes = Vec::with_capacity(HUB_LAYOUT.len() + SATELLITE_COUNT);
		for &(fx, fy, kind) in HUB_LAYOUT {
			let offset = rng() * std::f64::consts::TAU;
			nodes.push(NetworkNode::new(width * fx, height * fy, kind, offset));
		}
		for _ in 0..SATELLITE_COUNT {
			let (x, y) = (rng() * width, rng() * height);
			let offset = rng() * std::f64::consts::TAU;
			nodes.push(NetworkNode::new(x, y, NodeKind::Satellite, offset));
		}

		let links = link_by_anchor_distance(&nodes);

		Self {
			nodes,
			links,
			pointer: POINTER_OFFSCREEN,
			width,
			height,
		}
	}

	/// Destroy and rebuild all node and link state for a new surface size.
	/// The pointer position carries over unchanged.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) {
		let pointer = self.pointer;
		*self = Self::new(width, height, rng);
		self.pointer = pointer;
	}

	/// Record the latest pointer position in canvas-local coordinates.
	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}

	/// Advance every node by one frame: pointer attraction, velocity
	/// integration, damping, then the pull back toward the anchor.
	pub fn tick(&mut self) {
		let (px, py) = self.pointer;
		for node in &mut self.nodes {
			let (dx, dy) = (px - node.anchor_x, py - node.anchor_y);
			let distance = dx.hypot(dy);
			if distance < ATTRACTION_RADIUS {
				let force = (ATTRACTION_RADIUS - distance) / ATTRACTION_RADIUS;
				node.vx += dx * force * ATTRACTION_STRENGTH;
				node.vy += dy * force * ATTRACTION_STRENGTH;
			}
			node.x += node.vx;
			node.y += node.vy;
			node.vx *= DAMPING;
			node.vy *= DAMPING;
			node.x += (node.anchor_x - node.x) * RETURN_PULL;
			node.y += (node.anchor_y - node.y) * RETURN_PULL;
		}
	}
}

/// Link every pair of nodes whose anchors sit closer than
/// [`LINK_DISTANCE`], recording the link on both endpoints.
///
/// O(n^2) over ~34 nodes, run once per generation.
fn link_by_anchor_distance(nodes: &[NetworkNode]) -> Vec<Vec<usize>> {
	let mut links = vec![Vec::new(); nodes.len()];
	for (i, node) in nodes.iter().enumerate() {
		for (j, other) in nodes.iter().enumerate() {
			if i == j {
				continue;
			}
			let distance =
				(node.anchor_x - other.anchor_x).hypot(node.anchor_y - other.anchor_y);
			if distance < LINK_DISTANCE {
				links[i].push(j);
			}
		}
	}
	links
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic stand-in for Math.random.
	fn test_rng() -> impl FnMut() -> f64 {
		let mut seed = 0usize;
		move || {
			seed = (seed * 9301 + 49297) % 233280;
			(seed as f64) / 233280.0
		}
	}

	#[test]
	fn construction_places_four_hubs_and_thirty_satellites() {
		let state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		assert_eq!(state.nodes.len(), 34);
		assert_eq!(state.links.len(), 34);

		let hubs: Vec<_> = state.nodes.iter().filter(|n| n.kind.is_hub()).collect();
		assert_eq!(hubs.len(), 4);
		for hub in &hubs {
			assert_eq!(hub.kind.radius(), 8.0);
		}
		let expected = [(250.0, 240.0), (750.0, 240.0), (250.0, 560.0), (750.0, 560.0)];
		for (hub, (x, y)) in hubs.iter().zip(expected) {
			assert!((hub.anchor_x - x).abs() < 1e-9);
			assert!((hub.anchor_y - y).abs() < 1e-9);
		}

		for satellite in state.nodes.iter().filter(|n| !n.kind.is_hub()) {
			assert_eq!(satellite.kind.radius(), 4.0);
			assert!((0.0..1000.0).contains(&satellite.anchor_x));
			assert!((0.0..800.0).contains(&satellite.anchor_y));
		}
	}

	#[test]
	fn pointer_starts_offscreen() {
		let state = NetworkState::new(640.0, 480.0, &mut test_rng());
		assert_eq!(state.pointer, POINTER_OFFSCREEN);
	}

	#[test]
	fn links_are_symmetric() {
		let state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		for (i, neighbours) in state.links.iter().enumerate() {
			for &j in neighbours {
				assert!(
					state.links[j].contains(&i),
					"link {i} -> {j} has no mirror"
				);
			}
		}
	}

	#[test]
	fn links_require_anchor_distance_under_threshold() {
		let nodes = vec![
			NetworkNode::new(0.0, 0.0, NodeKind::Satellite, 0.0),
			NetworkNode::new(100.0, 0.0, NodeKind::Satellite, 0.0),
			NetworkNode::new(250.0, 0.0, NodeKind::Satellite, 0.0),
		];
		let links = link_by_anchor_distance(&nodes);
		assert_eq!(links[0], vec![1]);
		assert_eq!(links[1], vec![0, 2]);
		assert_eq!(links[2], vec![1]);
	}

	#[test]
	fn link_threshold_is_strict() {
		let nodes = vec![
			NetworkNode::new(0.0, 0.0, NodeKind::Satellite, 0.0),
			NetworkNode::new(200.0, 0.0, NodeKind::Satellite, 0.0),
		];
		let links = link_by_anchor_distance(&nodes);
		assert!(links[0].is_empty());
		assert!(links[1].is_empty());
	}

	#[test]
	fn displaced_node_settles_back_on_its_anchor() {
		let mut state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		state.nodes[0].x += 40.0;
		state.nodes[0].y -= 25.0;
		for _ in 0..600 {
			state.tick();
		}
		let node = &state.nodes[0];
		assert!((node.x - node.anchor_x).abs() < 1e-3);
		assert!((node.y - node.anchor_y).abs() < 1e-3);
	}

	#[test]
	fn velocity_strictly_decays_without_pointer_force() {
		let mut state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		state.nodes[0].vx = 3.0;
		state.nodes[0].vy = -2.0;
		let mut previous = f64::INFINITY;
		for _ in 0..50 {
			state.tick();
			let node = &state.nodes[0];
			let speed = node.vx.hypot(node.vy);
			assert!(speed < previous);
			previous = speed;
		}
	}

	#[test]
	fn pointer_near_hub_pulls_velocity_toward_it() {
		let mut state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		let (ax, ay) = (state.nodes[0].anchor_x, state.nodes[0].anchor_y);
		state.set_pointer(ax + 50.0, ay + 30.0);
		state.tick();
		let node = &state.nodes[0];
		assert!(node.vx > 0.0);
		assert!(node.vy > 0.0);
	}

	#[test]
	fn pointer_outside_attraction_radius_applies_no_force() {
		let mut state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		let (ax, ay) = (state.nodes[0].anchor_x, state.nodes[0].anchor_y);
		state.set_pointer(ax + ATTRACTION_RADIUS + 1.0, ay);
		state.tick();
		assert_eq!(state.nodes[0].vx, 0.0);
		assert_eq!(state.nodes[0].vy, 0.0);
	}

	#[test]
	fn resize_rebuilds_from_the_new_viewport_only() {
		let mut state = NetworkState::new(1000.0, 800.0, &mut test_rng());
		state.set_pointer(300.0, 250.0);
		for _ in 0..20 {
			state.tick();
		}

		let mut rng = test_rng();
		state.resize(600.0, 400.0, &mut rng);
		state.resize(600.0, 400.0, &mut rng);

		assert_eq!(state.nodes.len(), 34);
		assert_eq!((state.width, state.height), (600.0, 400.0));
		assert_eq!(state.pointer, (300.0, 250.0));
		for node in &state.nodes {
			assert_eq!((node.x, node.y), (node.anchor_x, node.anchor_y));
			assert_eq!((node.vx, node.vy), (0.0, 0.0));
			assert!(node.anchor_x < 600.0);
			assert!(node.anchor_y < 400.0);
		}
		assert!((state.nodes[0].anchor_x - 150.0).abs() < 1e-9);
		assert!((state.nodes[0].anchor_y - 120.0).abs() < 1e-9);
	}

	#[test]
	fn link_opacity_fades_out_by_150() {
		assert_eq!(link_opacity(0.0), 0.15);
		assert_eq!(link_opacity(150.0), 0.0);
		assert_eq!(link_opacity(199.0), 0.0);
		assert!(link_opacity(100.0) > 0.0);

		let mut previous = link_opacity(0.0);
		for d in 1..150 {
			let opacity = link_opacity(d as f64);
			assert!(opacity < previous);
			previous = opacity;
		}
	}
}
