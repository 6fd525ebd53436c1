// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # ResPlan Topology
//!
//! Room adjacency graphs for floor plans.
//!
//! Each plan is processed independently: rooms become nodes keyed by
//! `"{category}_{index}"`, and fixed-tolerance proximity tests (buffer
//! expansion by a fraction of the wall width) decide which rooms are
//! connected and how. The result is a heuristic, not architectural
//! ground truth; [`verify_graph`] compares it with dataset reference
//! graphs.
//!
//! ```rust,ignore
//! use resplan_topology::build_graph;
//!
//! let graph = build_graph(&plan);
//! for edge in &graph.edges {
//!     println!("{} -[{}]- {}", edge.source_id, edge.edge_type, edge.target_id);
//! }
//! ```

pub mod builder;
pub mod config;
pub mod verify;

pub use builder::{build_graph, build_graph_with_config, build_graphs, build_graphs_with_config};
pub use config::AdjacencyConfig;
pub use verify::{verify_graph, TypeMismatch, VerificationReport};
