/// Category of a node in the background network graph.
///
/// The four hub kinds mirror the portfolio's skill areas; everything else
/// is an unnamed satellite. Appearance is a total function of the kind, so
/// an unstyled category cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Cybersecurity,
	Management,
	Data,
	Development,
	Satellite,
}

impl NodeKind {
	/// Fill (and halo) color for this kind.
	pub fn color(&self) -> &'static str {
		match self {
			NodeKind::Cybersecurity => "#ff3366",
			NodeKind::Management => "#00ff88",
			NodeKind::Data => "#00d4ff",
			NodeKind::Development => "#ffaa00",
			NodeKind::Satellite => "#f2f2f2",
		}
	}

	/// Base body radius in canvas pixels.
	pub fn radius(&self) -> f64 {
		match self {
			NodeKind::Satellite => 4.0,
			_ => 8.0,
		}
	}

	/// Hubs pulse and carry a halo ring; satellites do neither.
	pub fn is_hub(&self) -> bool {
		!matches!(self, NodeKind::Satellite)
	}
}

/// A point entity of the background graph.
///
/// `x`/`y` animate every frame; the anchor is fixed at construction and is
/// the rest position the node relaxes back toward.
#[derive(Clone, Debug)]
pub struct NetworkNode {
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
	pub anchor_x: f64,
	pub anchor_y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Fixed random phase so hub pulses stay desynchronized.
	pub pulse_offset: f64,
}

impl NetworkNode {
	pub fn new(x: f64, y: f64, kind: NodeKind, pulse_offset: f64) -> Self {
		Self {
			kind,
			x,
			y,
			anchor_x: x,
			anchor_y: y,
			vx: 0.0,
			vy: 0.0,
			pulse_offset,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_kind_has_a_color() {
		let kinds = [
			NodeKind::Cybersecurity,
			NodeKind::Management,
			NodeKind::Data,
			NodeKind::Development,
			NodeKind::Satellite,
		];
		for kind in kinds {
			assert!(kind.color().starts_with('#'));
			assert_eq!(kind.color(), kind.color());
		}
	}

	#[test]
	fn satellites_are_small_and_plain() {
		assert_eq!(NodeKind::Satellite.radius(), 4.0);
		assert!(!NodeKind::Satellite.is_hub());
		assert_eq!(NodeKind::Satellite.color(), "#f2f2f2");
	}

	#[test]
	fn hubs_are_large_and_pulse() {
		for kind in [
			NodeKind::Cybersecurity,
			NodeKind::Management,
			NodeKind::Data,
			NodeKind::Development,
		] {
			assert_eq!(kind.radius(), 8.0);
			assert!(kind.is_hub());
		}
	}

	#[test]
	fn node_starts_at_rest_on_its_anchor() {
		let node = NetworkNode::new(120.0, 40.0, NodeKind::Data, 1.5);
		assert_eq!((node.x, node.y), (node.anchor_x, node.anchor_y));
		assert_eq!((node.vx, node.vy), (0.0, 0.0));
	}
}
