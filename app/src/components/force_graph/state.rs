use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{EdgeSelection, GraphData, NodeProperties};
use crate::styles;

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;
pub const EDGE_HIT_DISTANCE: f64 = 6.0;
pub const CLICK_SLOP: f64 = 4.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub color: String,
	pub alpha: f64,
	pub radius: f64,
	pub properties: NodeProperties,
}

#[derive(Clone, Debug)]
pub struct LinkInfo {
	pub selection: EdgeSelection,
	pub width: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Tracks whether a press/release pair still counts as a click.
#[derive(Clone, Debug, Default)]
pub struct ClickState {
	armed: bool,
	start_x: f64,
	start_y: f64,
}

impl ClickState {
	pub fn press(&mut self, x: f64, y: f64) {
		self.armed = true;
		self.start_x = x;
		self.start_y = y;
	}

	pub fn update(&mut self, x: f64, y: f64) {
		if self.armed && (x - self.start_x).hypot(y - self.start_y) > CLICK_SLOP {
			self.armed = false;
		}
	}

	pub fn cancel(&mut self) {
		self.armed = false;
	}

	pub fn take_if_click(&mut self, x: f64, y: f64) -> bool {
		let hit = self.armed && (x - self.start_x).hypot(y - self.start_y) <= CLICK_SLOP;
		self.armed = false;
		hit
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub click: ClickState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
	pub(super) links: Vec<LinkInfo>,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut counts = HashMap::new();
		let mut edges = Vec::new();
		let mut links = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = ((100.0 * angle.cos()) as f32, (100.0 * angle.sin()) as f32);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: styles::node_label(&node.properties),
					color: styles::node_color(&node.properties).to_string(),
					alpha: styles::node_opacity(&node.properties),
					radius: radius_for(&node.properties),
					properties: node.properties.clone(),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			counts.insert(node.id.clone(), styles::citation_count(&node.properties));
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
				let from_count = counts.get(&link.source).copied().flatten().unwrap_or(0);
				let to_count = counts.get(&link.target).copied().flatten().unwrap_or(0);
				links.push(LinkInfo {
					selection: EdgeSelection {
						id: link.id.clone(),
						from: link.source.clone(),
						to: link.target.clone(),
						rel_type: link.rel_type.clone(),
					},
					width: styles::relationship_width(from_count, to_count),
				});
			}
		}

		Self {
			graph,
			edges,
			links,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			click: ClickState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	/// Index into the link records of the edge nearest the cursor, if any
	/// lies within the hit distance.
	pub fn edge_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});

		let mut found = None;
		for (i, &(src, tgt)) in self.edges.iter().enumerate() {
			let (Some(&(x1, y1)), Some(&(x2, y2))) = (positions.get(&src), positions.get(&tgt))
			else {
				continue;
			};
			if segment_distance(gx, gy, x1, y1, x2, y2) < EDGE_HIT_DISTANCE {
				found = Some(i);
			}
		}
		found
	}

	/// Property record of the node at `idx`, if it still exists.
	pub fn node_properties(&self, idx: DefaultNodeIdx) -> Option<NodeProperties> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.properties.clone());
			}
		});
		found
	}

	pub fn link_selection(&self, i: usize) -> Option<EdgeSelection> {
		self.links.get(i).map(|link| link.selection.clone())
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn radius_for(properties: &NodeProperties) -> f64 {
	NODE_RADIUS + styles::node_size(properties).sqrt().min(19.0)
}

fn segment_distance(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	if len_sq < 1e-9 {
		return (px - x1).hypot(py - y1);
	}
	let t = (((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0);
	(px - (x1 + t * dx)).hypot(py - (y1 + t * dy))
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::super::types::{GraphLink, GraphNode};
	use super::*;

	fn paper(id: &str, citations: i64) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			properties: json!({
				"paperId": id,
				"citationCount": citations,
				"firstAuthor": "Ada Lovelace",
				"year": 1843,
			})
			.as_object()
			.cloned()
			.unwrap(),
		}
	}

	fn sample() -> GraphData {
		GraphData {
			nodes: vec![paper("a", 50), paper("b", 50)],
			links: vec![GraphLink {
				id: "1".to_string(),
				source: "a".to_string(),
				target: "b".to_string(),
				rel_type: "CITES".to_string(),
			}],
		}
	}

	fn first_node_screen_position(state: &ForceGraphState) -> (f64, f64) {
		let mut pos = None;
		state.graph.visit_nodes(|node| {
			if pos.is_none() {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		let (gx, gy) = pos.unwrap();
		(
			gx * state.transform.k + state.transform.x,
			gy * state.transform.k + state.transform.y,
		)
	}

	#[test]
	fn node_click_hits_and_yields_properties() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);
		let (sx, sy) = first_node_screen_position(&state);

		let idx = state.node_at_position(sx, sy).expect("node under cursor");
		let props = state.node_properties(idx).expect("property record");
		assert_eq!(props.get("paperId").and_then(|v| v.as_str()), Some("a"));

		assert!(state.node_at_position(sx + 500.0, sy + 500.0).is_none());
	}

	#[test]
	fn edge_click_resolves_endpoints_and_width() {
		let state = ForceGraphState::new(&sample(), 800.0, 600.0);

		// Midpoint of the only edge, in screen coordinates.
		let mut xs = Vec::new();
		state.graph.visit_nodes(|node| xs.push((node.x() as f64, node.y() as f64)));
		let (mx, my) = ((xs[0].0 + xs[1].0) / 2.0, (xs[0].1 + xs[1].1) / 2.0);
		let (sx, sy) = (
			mx * state.transform.k + state.transform.x,
			my * state.transform.k + state.transform.y,
		);

		let i = state.edge_at_position(sx, sy).expect("edge under cursor");
		let edge = state.link_selection(i).expect("link record");
		assert_eq!(edge.from, "a");
		assert_eq!(edge.to, "b");
		assert_eq!(edge.rel_type, "CITES");
		assert_eq!(state.links[i].width, 50.0);
	}

	#[test]
	fn links_to_unknown_nodes_are_dropped() {
		let mut data = sample();
		data.links.push(GraphLink {
			id: "2".to_string(),
			source: "a".to_string(),
			target: "missing".to_string(),
			rel_type: "CITES".to_string(),
		});
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert_eq!(state.links.len(), 1);
	}

	#[test]
	fn click_slop_disarms_on_drag() {
		let mut click = ClickState::default();
		click.press(10.0, 10.0);
		click.update(11.0, 11.0);
		assert!(click.take_if_click(11.0, 11.0));

		click.press(10.0, 10.0);
		click.update(40.0, 40.0);
		assert!(!click.take_if_click(10.0, 10.0));
	}

	#[test]
	fn segment_distance_clamps_to_endpoints() {
		assert!((segment_distance(0.0, 5.0, 0.0, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-9);
		assert!((segment_distance(-3.0, 4.0, 0.0, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-9);
		assert!((segment_distance(5.0, 0.0, 0.0, 0.0, 10.0, 0.0)).abs() < 1e-9);
	}
}
