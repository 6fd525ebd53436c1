// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room adjacency graph construction
//!
//! Builds a [`Graph`] from one plan's categorized geometry:
//! - **Nodes** = non-empty room polygons (living, kitchen, bedroom,
//!   bathroom, balcony) and every front door
//! - **Edges** = proximity relationships found in three ordered passes
//!
//! Passes run in a fixed order and [`Graph::add_edge`] keeps only the first
//! relationship found between two nodes, so the order decides which edge
//! type wins for a pair:
//! 1. front door -> living (`direct`)
//! 2. kitchen, then bedroom -> living (`adjacency`)
//! 3. bathroom, then balcony -> living/bedroom through a door, then a
//!    window (`via_door` / `via_window`)
//!
//! Doors and windows never become nodes; they only connect rooms.

use std::borrow::Cow;

use geo::{Geometry, HasDimensions};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::debug;

use resplan_core::category::{
    BALCONY, BATHROOM, BEDROOM, DOOR, FRONT_DOOR, KITCHEN, LIVING, ROOM_CATEGORIES, WINDOW,
};
use resplan_core::{EdgeType, GeometryKernel, Graph, Node, Plan};

use crate::config::AdjacencyConfig;

/// A node id paired with the plan geometry it was created from
struct NodeRef<'a> {
    id: String,
    geometry: &'a Geometry<f64>,
}

/// Build the adjacency graph of a plan with default tolerances
pub fn build_graph(plan: &Plan) -> Graph<'_> {
    build_graph_with_config(plan, &AdjacencyConfig::default())
}

/// Build the adjacency graph of a plan
///
/// Node geometry borrows from `plan`; use [`Graph::into_owned`] to detach.
pub fn build_graph_with_config<'a>(plan: &'a Plan, config: &AdjacencyConfig) -> Graph<'a> {
    let buf = config.buffer_distance();
    let mut graph = Graph::new();
    let mut nodes_by_type: FxHashMap<&str, Vec<NodeRef<'a>>> = FxHashMap::default();

    // 1. Nodes
    for room_type in ROOM_CATEGORIES {
        for (i, geometry) in plan.geometries_of(room_type).iter().enumerate() {
            if !matches!(geometry, Geometry::Polygon(_)) || geometry.is_empty() {
                continue;
            }
            let node_ref = add_node(&mut graph, room_type, i, geometry);
            nodes_by_type.entry(room_type).or_default().push(node_ref);
        }
    }

    // Front doors are trusted input: any geometry type, empty or not.
    for (i, geometry) in plan.geometries_of(FRONT_DOOR).iter().enumerate() {
        let node_ref = add_node(&mut graph, FRONT_DOOR, i, geometry);
        nodes_by_type.entry(FRONT_DOOR).or_default().push(node_ref);
    }

    let living = nodes_of(&nodes_by_type, LIVING);
    let bedrooms = nodes_of(&nodes_by_type, BEDROOM);
    let living_buffered = buffered(living, buf);
    let bedroom_buffered = buffered(bedrooms, buf);

    // 2. front_door -> living
    for front_door in nodes_of(&nodes_by_type, FRONT_DOOR) {
        for (room, room_buffered) in living.iter().zip(&living_buffered) {
            if front_door.geometry.intersects_with(room_buffered) {
                graph.add_edge(&front_door.id, &room.id, EdgeType::Direct);
            }
        }
    }

    // 3. kitchen/bedroom <-> living. The room side is buffered twice in
    // sequence, the living side once.
    for room_type in [KITCHEN, BEDROOM] {
        for room in nodes_of(&nodes_by_type, room_type) {
            let room_double = room.geometry.buffer_by(buf).buffer_by(buf);
            for (target, target_buffered) in living.iter().zip(&living_buffered) {
                if room_double.intersects_with(target_buffered) {
                    graph.add_edge(&room.id, &target.id, EdgeType::Adjacency);
                }
            }
        }
    }

    // 4. bathroom/balcony -> living/bedroom through doors, then windows
    let connectors: Vec<(&Geometry<f64>, EdgeType)> = plan
        .geometries_of(DOOR)
        .iter()
        .map(|g| (g, EdgeType::ViaDoor))
        .chain(plan.geometries_of(WINDOW).iter().map(|g| (g, EdgeType::ViaWindow)))
        .collect();
    let targets = [(living, &living_buffered), (bedrooms, &bedroom_buffered)];

    if !connectors.is_empty() {
        for room_type in [BATHROOM, BALCONY] {
            for room in nodes_of(&nodes_by_type, room_type) {
                let room_buffered = room.geometry.buffer_by(buf);
                for &(connector, edge_type) in &connectors {
                    if !connector.intersects_with(&room_buffered) {
                        continue;
                    }
                    for (target_nodes, target_buffers) in targets {
                        for (target, target_buffered) in target_nodes.iter().zip(target_buffers) {
                            if connector.intersects_with(target_buffered) {
                                graph.add_edge(&room.id, &target.id, edge_type);
                            }
                        }
                    }
                }
            }
        }
    }

    debug!(
        plan_id = plan.id,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Built adjacency graph"
    );

    graph
}

/// Build graphs for many plans in parallel, in input order
pub fn build_graphs(plans: &[Plan]) -> Vec<Graph<'_>> {
    build_graphs_with_config(plans, &AdjacencyConfig::default())
}

/// Build graphs for many plans in parallel with custom tolerances
pub fn build_graphs_with_config<'a>(plans: &'a [Plan], config: &AdjacencyConfig) -> Vec<Graph<'a>> {
    plans
        .par_iter()
        .map(|plan| build_graph_with_config(plan, config))
        .collect()
}

fn add_node<'a>(
    graph: &mut Graph<'a>,
    node_type: &str,
    index: usize,
    geometry: &'a Geometry<f64>,
) -> NodeRef<'a> {
    let id = format!("{}_{}", node_type, index);
    graph.add_node(Node {
        id: id.clone(),
        node_type: node_type.to_string(),
        geometry: Some(Cow::Borrowed(geometry)),
        area: geometry.area(),
    });
    NodeRef { id, geometry }
}

fn nodes_of<'m, 'a>(
    nodes_by_type: &'m FxHashMap<&str, Vec<NodeRef<'a>>>,
    node_type: &str,
) -> &'m [NodeRef<'a>] {
    nodes_by_type.get(node_type).map(Vec::as_slice).unwrap_or(&[])
}

fn buffered(nodes: &[NodeRef<'_>], distance: f64) -> Vec<Geometry<f64>> {
    nodes.iter().map(|n| n.geometry.buffer_by(distance)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: min_x, y: min_y),
            (x: max_x, y: min_y),
            (x: max_x, y: max_y),
            (x: min_x, y: max_y),
            (x: min_x, y: min_y),
        ])
    }

    #[test]
    fn front_door_touching_living_is_direct() {
        let mut plan = Plan::new(1);
        plan.add_geometry(LIVING, rect(0.0, 0.0, 10.0, 10.0));
        plan.add_geometry(FRONT_DOOR, rect(4.5, -0.1, 5.5, 0.1));

        let graph = build_graph(&plan);

        assert_eq!(graph.node_count(), 2);
        assert!(graph.node("living_0").is_some());
        assert!(graph.node("front_door_0").is_some());
        assert_eq!(graph.edge_count(), 1);
        let edge = graph.edge_between("front_door_0", "living_0").unwrap();
        assert_eq!(edge.edge_type, EdgeType::Direct);
    }

    #[test]
    fn node_area_is_precomputed() {
        let mut plan = Plan::new(1);
        plan.add_geometry(BEDROOM, rect(0.0, 0.0, 3.0, 4.0));
        let graph = build_graph(&plan);
        assert_eq!(graph.node("bedroom_0").unwrap().area, 12.0);
    }

    #[test]
    fn node_geometry_borrows_from_plan() {
        let mut plan = Plan::new(1);
        plan.add_geometry(LIVING, rect(0.0, 0.0, 1.0, 1.0));
        let graph = build_graph(&plan);
        let node_geometry = graph.node("living_0").unwrap().geometry.as_deref().unwrap();
        assert!(std::ptr::eq(node_geometry, &plan.geometries[LIVING][0]));
    }

    #[test]
    fn buffer_distance_controls_adjacency() {
        let mut plan = Plan::new(1);
        plan.add_geometry(LIVING, rect(0.0, 0.0, 5.0, 5.0));
        plan.add_geometry(KITCHEN, rect(5.3, 0.0, 8.0, 5.0));

        // default: 2 * 0.075 + 0.075 = 0.225 < 0.3
        assert_eq!(build_graph(&plan).edge_count(), 0);

        let wide = AdjacencyConfig {
            wall_width: 0.2,
            ..Default::default()
        };
        // 3 * 0.15 = 0.45 > 0.3
        assert_eq!(build_graph_with_config(&plan, &wide).edge_count(), 1);
    }
}
