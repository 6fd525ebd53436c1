// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room adjacency graph model
//!
//! - **Nodes** = rooms and front doors, keyed by `"{category}_{index}"`
//! - **Edges** = undirected relationships tagged with an [`EdgeType`]
//!
//! Node geometry is a `Cow`: graphs built from a plan borrow the plan's
//! geometry, while deserialized or reference graphs own theirs (or carry
//! none at all).

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt;

use geo::Geometry;
use serde::{Deserialize, Serialize};

/// How two nodes are related
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// Front door opening straight into a living room
    Direct,
    /// Kitchen or bedroom sharing a wall with a living room
    Adjacency,
    /// Bathroom or balcony reached through a door
    ViaDoor,
    /// Bathroom or balcony reached through a window
    ViaWindow,
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Direct => "direct",
            EdgeType::Adjacency => "adjacency",
            EdgeType::ViaDoor => "via_door",
            EdgeType::ViaWindow => "via_window",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A room or front door in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<'a> {
    pub id: String,
    /// Category name, e.g. `"bedroom"`
    #[serde(rename = "type")]
    pub node_type: String,
    /// Source geometry; `None` for reference nodes loaded without geometry
    pub geometry: Option<Cow<'a, Geometry<f64>>>,
    pub area: f64,
}

impl<'a> Node<'a> {
    /// Detach the node from the plan it was built from
    pub fn into_owned(self) -> Node<'static> {
        Node {
            id: self.id,
            node_type: self.node_type,
            geometry: self.geometry.map(|g| Cow::Owned(g.into_owned())),
            area: self.area,
        }
    }
}

/// Undirected edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source_id: String,
    pub target_id: String,
    #[serde(rename = "type")]
    pub edge_type: EdgeType,
}

impl Edge {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        edge_type: EdgeType,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            edge_type,
        }
    }

    /// True if this edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.source_id == a && self.target_id == b)
            || (self.source_id == b && self.target_id == a)
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other(&self, id: &str) -> Option<&str> {
        if self.source_id == id {
            Some(&self.target_id)
        } else if self.target_id == id {
            Some(&self.source_id)
        } else {
            None
        }
    }
}

/// Room adjacency graph for one plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph<'a> {
    pub nodes: BTreeMap<String, Node<'a>>,
    pub edges: Vec<Edge>,
}

impl<'a> Graph<'a> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    // =========================================================================
    // Graph mutation
    // =========================================================================

    /// Inserts a node, replacing any node with the same id.
    pub fn add_node(&mut self, node: Node<'a>) {
        self.nodes.insert(node.id.clone(), node);
    }

    /// Adds an undirected edge unless `u` and `v` are already connected.
    ///
    /// The existing-edge check ignores the edge type: the first relationship
    /// recorded between two nodes wins. Returns whether the edge was added.
    pub fn add_edge(&mut self, u: &str, v: &str, edge_type: EdgeType) -> bool {
        if self.has_edge_between(u, v) {
            return false;
        }
        self.edges.push(Edge::new(u, v, edge_type));
        true
    }

    // =========================================================================
    // Graph accessors
    // =========================================================================

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&Node<'a>> {
        self.nodes.get(id)
    }

    /// True if any edge joins `u` and `v`, regardless of type or direction.
    pub fn has_edge_between(&self, u: &str, v: &str) -> bool {
        self.edges.iter().any(|e| e.connects(u, v))
    }

    /// The edge joining `u` and `v`, if any.
    pub fn edge_between(&self, u: &str, v: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(u, v))
    }

    /// Ids of nodes sharing an edge with `id`, in edge insertion order.
    pub fn neighbors(&self, id: &str) -> Vec<&str> {
        self.edges.iter().filter_map(|e| e.other(id)).collect()
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: &str) -> usize {
        self.edges.iter().filter(|e| e.other(id).is_some()).count()
    }

    /// Nodes of the given category, in id order.
    pub fn nodes_of_type<'g>(
        &'g self,
        node_type: &'g str,
    ) -> impl Iterator<Item = &'g Node<'a>> + 'g {
        self.nodes.values().filter(move |n| n.node_type == node_type)
    }

    // =========================================================================
    // Algorithms
    // =========================================================================

    /// Connected components, each sorted by id, ordered by their first id.
    ///
    /// Edges referencing unknown node ids are ignored.
    pub fn connected_components(&self) -> Vec<Vec<String>> {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut components = Vec::new();

        for start in self.nodes.keys() {
            if visited.contains(start.as_str()) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::new();
            visited.insert(start.as_str());
            queue.push_back(start.as_str());

            while let Some(current) = queue.pop_front() {
                component.push(current.to_string());
                for next in self.neighbors(current) {
                    if self.nodes.contains_key(next) && visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }

            component.sort();
            components.push(component);
        }

        components
    }

    /// True if every node is reachable from every other node.
    ///
    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Detach the graph from the plan it was built from.
    pub fn into_owned(self) -> Graph<'static> {
        Graph {
            nodes: self
                .nodes
                .into_iter()
                .map(|(id, node)| (id, node.into_owned()))
                .collect(),
            edges: self.edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_node(id: &str, node_type: &str) -> Node<'static> {
        Node {
            id: id.to_string(),
            node_type: node_type.to_string(),
            geometry: None,
            area: 0.0,
        }
    }

    fn make_star_graph() -> Graph<'static> {
        let mut g = Graph::new();
        g.add_node(bare_node("living_0", "living"));
        g.add_node(bare_node("kitchen_0", "kitchen"));
        g.add_node(bare_node("bedroom_0", "bedroom"));
        g.add_node(bare_node("balcony_0", "balcony"));
        g.add_edge("kitchen_0", "living_0", EdgeType::Adjacency);
        g.add_edge("bedroom_0", "living_0", EdgeType::Adjacency);
        g
    }

    #[test]
    fn graph_basic_properties() {
        let g = make_star_graph();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.degree("living_0"), 2);
        assert_eq!(g.degree("balcony_0"), 0);
    }

    #[test]
    fn add_edge_dedups_unordered_pair_ignoring_type() {
        let mut g = make_star_graph();
        assert!(!g.add_edge("living_0", "kitchen_0", EdgeType::ViaDoor));
        assert!(!g.add_edge("kitchen_0", "living_0", EdgeType::Adjacency));
        assert_eq!(g.edge_count(), 2);
        assert_eq!(
            g.edge_between("living_0", "kitchen_0").map(|e| e.edge_type),
            Some(EdgeType::Adjacency)
        );
    }

    #[test]
    fn neighbors_follow_insertion_order() {
        let g = make_star_graph();
        assert_eq!(g.neighbors("living_0"), vec!["kitchen_0", "bedroom_0"]);
        assert_eq!(g.neighbors("kitchen_0"), vec!["living_0"]);
    }

    #[test]
    fn connected_components_multiple() {
        let g = make_star_graph();
        let components = g.connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0], vec!["balcony_0".to_string()]);
        assert_eq!(
            components[1],
            vec!["bedroom_0".to_string(), "kitchen_0".to_string(), "living_0".to_string()]
        );
        assert!(!g.is_connected());
    }

    #[test]
    fn empty_graph_is_connected() {
        assert!(Graph::new().is_connected());
    }

    #[test]
    fn nodes_of_type_filters() {
        let g = make_star_graph();
        let ids: Vec<_> = g.nodes_of_type("kitchen").map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["kitchen_0"]);
    }

    #[test]
    fn edge_type_names() {
        assert_eq!(EdgeType::ViaWindow.to_string(), "via_window");
        assert_eq!(EdgeType::Direct.as_str(), "direct");
    }
}
