// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Comparison of generated graphs against reference graphs
//!
//! Datasets ship a reference graph per plan. A generated graph matches when
//! node and edge counts agree, every reference node exists with the same
//! type, and every reference edge exists between the same unordered pair
//! with the same type.

use serde::{Deserialize, Serialize};

use resplan_core::{Edge, Graph};

/// A reference node whose type differs from the generated one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMismatch {
    pub node_id: String,
    pub expected: String,
    pub actual: String,
}

/// Differences between a generated graph and its reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// (reference, generated)
    pub node_count: (usize, usize),
    /// (reference, generated)
    pub edge_count: (usize, usize),
    pub missing_nodes: Vec<String>,
    pub type_mismatches: Vec<TypeMismatch>,
    pub missing_edges: Vec<Edge>,
}

impl VerificationReport {
    pub fn is_match(&self) -> bool {
        self.node_count.0 == self.node_count.1
            && self.edge_count.0 == self.edge_count.1
            && self.missing_nodes.is_empty()
            && self.type_mismatches.is_empty()
            && self.missing_edges.is_empty()
    }
}

/// Compare `generated` against `reference`
pub fn verify_graph(generated: &Graph<'_>, reference: &Graph<'_>) -> VerificationReport {
    let mut report = VerificationReport {
        node_count: (reference.node_count(), generated.node_count()),
        edge_count: (reference.edge_count(), generated.edge_count()),
        ..Default::default()
    };

    for (id, expected) in &reference.nodes {
        match generated.node(id) {
            None => report.missing_nodes.push(id.clone()),
            Some(actual) if actual.node_type != expected.node_type => {
                report.type_mismatches.push(TypeMismatch {
                    node_id: id.clone(),
                    expected: expected.node_type.clone(),
                    actual: actual.node_type.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for expected in &reference.edges {
        let found = generated.edges.iter().any(|e| {
            e.edge_type == expected.edge_type && e.connects(&expected.source_id, &expected.target_id)
        });
        if !found {
            report.missing_edges.push(expected.clone());
        }
    }

    report
}
