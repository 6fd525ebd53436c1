// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor plan units
//!
//! A [`Plan`] maps category names to ordered geometry lists. List order is
//! significant: graph node ids are derived from positions within a list.
//! Transforms never mutate a plan in place; they return a new plan with
//! bounds recomputed.

use std::borrow::Cow;
use std::collections::BTreeMap;

use geo::{Geometry, MultiPolygon, Point};
use serde::{Deserialize, Serialize};

use crate::category;
use crate::envelope::Envelope;
use crate::graph::Graph;
use crate::kernel::{self, GeometryKernel};

/// One floor-plan unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: i64,
    /// Category name -> geometries, in source order
    pub geometries: BTreeMap<String, Vec<Geometry<f64>>>,
    /// Tight envelope of all geometries, `None` when the plan is empty
    pub bounds: Option<Envelope>,
    /// Externally supplied graph used only for verification
    #[serde(default)]
    pub reference_graph: Option<Graph<'static>>,
}

impl Plan {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Plan with the given geometries and bounds computed from them
    pub fn with_geometries(id: i64, geometries: BTreeMap<String, Vec<Geometry<f64>>>) -> Self {
        let mut plan = Self {
            id,
            geometries,
            bounds: None,
            reference_graph: None,
        };
        plan.recompute_bounds();
        plan
    }

    /// Append a geometry to a category and widen the bounds to cover it
    pub fn add_geometry(&mut self, category: impl Into<String>, geometry: Geometry<f64>) {
        self.bounds = Envelope::merge(self.bounds, geometry.envelope());
        self.geometries.entry(category.into()).or_default().push(geometry);
    }

    /// Geometries of one category (empty if the category is absent)
    pub fn geometries_of(&self, category: &str) -> &[Geometry<f64>] {
        self.geometries.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All geometries across categories
    pub fn all_geometries(&self) -> impl Iterator<Item = &Geometry<f64>> {
        self.geometries.values().flatten()
    }

    /// The first front door, used as the plan's normalization anchor
    pub fn front_door(&self) -> Option<&Geometry<f64>> {
        self.geometries_of(category::FRONT_DOOR).first()
    }

    pub fn front_door_centroid(&self) -> Option<Point<f64>> {
        self.front_door().and_then(|g| g.centroid_point())
    }

    /// Envelope of the current geometries, ignoring the stored `bounds`
    pub fn computed_bounds(&self) -> Option<Envelope> {
        kernel::envelope_of(self.all_geometries())
    }

    pub fn recompute_bounds(&mut self) {
        self.bounds = self.computed_bounds();
    }

    /// Area of `bounds`, zero when undefined
    pub fn envelope_area(&self) -> f64 {
        self.bounds.map_or(0.0, |b| b.area())
    }

    /// Copy shifted by `(dx, dy)`
    pub fn translated(&self, dx: f64, dy: f64) -> Plan {
        self.map_geometries(|g| g.translated(dx, dy))
    }

    /// Copy rotated counter-clockwise by `degrees` about `origin`
    pub fn rotated(&self, degrees: f64, origin: Point<f64>) -> Plan {
        self.map_geometries(|g| g.rotated_about(degrees, origin))
    }

    /// Apply a geometry transform to every geometry, including reference
    /// graph nodes, and recompute bounds
    fn map_geometries<F>(&self, transform: F) -> Plan
    where
        F: Fn(&Geometry<f64>) -> Geometry<f64>,
    {
        let geometries: BTreeMap<String, Vec<Geometry<f64>>> = self
            .geometries
            .iter()
            .map(|(cat, list)| (cat.clone(), list.iter().map(&transform).collect::<Vec<_>>()))
            .collect();

        let reference_graph = self.reference_graph.as_ref().map(|graph| {
            let mut graph = graph.clone();
            for node in graph.nodes.values_mut() {
                if let Some(geometry) = node.geometry.take() {
                    node.geometry = Some(Cow::Owned(transform(&geometry)));
                }
            }
            graph
        });

        let mut plan = Plan {
            id: self.id,
            geometries,
            bounds: None,
            reference_graph,
        };
        plan.recompute_bounds();
        plan
    }

    /// Union of all areal geometry in the plan
    pub fn footprint(&self) -> MultiPolygon<f64> {
        kernel::footprint(self.all_geometries())
    }

    /// Geometries that anchor vertical circulation between floors
    ///
    /// Every geometry in the priority categories (stairs, elevator, foyer)
    /// if any exist. Otherwise the single corridor closest to the center of
    /// the plan bounds, or the first corridor when bounds are undefined.
    /// Empty when the plan has neither.
    pub fn vertical_anchors(&self) -> Vec<&Geometry<f64>> {
        let priority: Vec<&Geometry<f64>> = category::VERTICAL_ANCHOR_CATEGORIES
            .iter()
            .flat_map(|cat| self.geometries_of(cat))
            .collect();
        if !priority.is_empty() {
            return priority;
        }

        let corridors = self.geometries_of(category::CORRIDOR);
        let Some(first) = corridors.first() else {
            return Vec::new();
        };
        let Some(bounds) = self.bounds else {
            return vec![first];
        };

        let (cx, cy) = bounds.center();
        let mut best = first;
        let mut best_distance = f64::INFINITY;
        for corridor in corridors {
            let Some(c) = corridor.centroid_point() else {
                continue;
            };
            let distance = (c.x() - cx).hypot(c.y() - cy);
            if distance < best_distance {
                best_distance = distance;
                best = corridor;
            }
        }
        vec![best]
    }
}
