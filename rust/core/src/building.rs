// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Stacked multi-storey buildings

use std::collections::BTreeMap;

use geo::Geometry;
use serde::{Deserialize, Serialize};

use crate::category;
use crate::composite::Composite;
use crate::plan::Plan;

/// A building made of stacked floor plans, bottom floor first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub floors: Vec<BuildingFloor>,
}

impl Building {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn top_floor(&self) -> Option<&BuildingFloor> {
        self.floors.last()
    }
}

/// One storey: an owned, transformed plan plus synthesized structures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingFloor {
    /// 0-based storey index
    pub floor_number: usize,
    pub plan: Plan,
    /// Structures added by generation (e.g. the stair core), keyed by
    /// category; never part of `plan.geometries`
    pub additional_geometries: BTreeMap<String, Vec<Geometry<f64>>>,
}

impl BuildingFloor {
    pub fn new(floor_number: usize, plan: Plan) -> Self {
        Self {
            floor_number,
            plan,
            additional_geometries: BTreeMap::new(),
        }
    }

    /// Plan and additional geometries merged for rendering
    pub fn composite(&self) -> Composite<'_> {
        Composite::merge(&self.plan, &self.additional_geometries)
    }

    /// Vertical circulation anchors, synthesized stair cores first
    pub fn vertical_anchors(&self) -> Vec<&Geometry<f64>> {
        let stairs = self
            .additional_geometries
            .get(category::STAIRS)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        if !stairs.is_empty() {
            return stairs.iter().collect();
        }
        self.plan.vertical_anchors()
    }
}
