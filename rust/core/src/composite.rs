// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Render handoff
//!
//! The renderer draws a plan (or a building floor) category by category in
//! a fixed order with a fixed palette. [`Composite`] merges a floor's plan
//! geometries with its synthesized geometries and widens the bounds so the
//! extra structures fit in the frame.

use std::collections::BTreeMap;

use geo::Geometry;

use crate::category;
use crate::envelope::Envelope;
use crate::kernel;
use crate::plan::Plan;

/// Categories in the order they are painted
pub const DRAW_ORDER: [&str; 9] = [
    category::LIVING,
    category::BEDROOM,
    category::BATHROOM,
    category::KITCHEN,
    category::BALCONY,
    category::WALL,
    category::DOOR,
    category::WINDOW,
    category::FRONT_DOOR,
];

/// Fill color for a category as a `#rrggbb` string
pub fn category_color(name: &str) -> &'static str {
    match name {
        category::LIVING => "#d9d9d9",
        category::BEDROOM => "#66c2a5",
        category::BATHROOM => "#fc8d62",
        category::KITCHEN => "#8da0cb",
        category::DOOR => "#e78ac3",
        category::WINDOW => "#a6d854",
        category::WALL => "#ffd92f",
        category::FRONT_DOOR => "#a63603",
        category::BALCONY => "#b3b3b3",
        _ => "#000000",
    }
}

/// One category's geometries ready to paint
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLayer<'a> {
    pub category: &'a str,
    pub color: &'static str,
    pub geometries: Vec<&'a Geometry<f64>>,
}

/// Merged geometry view of a plan and any extra per-floor structures
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<'a> {
    pub geometries: BTreeMap<&'a str, Vec<&'a Geometry<f64>>>,
    pub bounds: Option<Envelope>,
}

impl<'a> Composite<'a> {
    /// View of a single plan
    pub fn from_plan(plan: &'a Plan) -> Self {
        Self::merge(plan, &EMPTY)
    }

    /// Plan geometries followed by `additional` geometries per category
    pub fn merge(plan: &'a Plan, additional: &'a BTreeMap<String, Vec<Geometry<f64>>>) -> Self {
        let mut geometries: BTreeMap<&'a str, Vec<&'a Geometry<f64>>> = BTreeMap::new();
        for (cat, list) in plan.geometries.iter().chain(additional.iter()) {
            geometries.entry(cat.as_str()).or_default().extend(list.iter());
        }

        let extra = kernel::envelope_of(additional.values().flatten());
        Self {
            geometries,
            bounds: Envelope::merge(plan.bounds, extra),
        }
    }

    /// Layers in paint order: [`DRAW_ORDER`] first, then any other
    /// categories by name
    pub fn layers(&self) -> Vec<RenderLayer<'a>> {
        let ordered = DRAW_ORDER.iter().copied().filter(|c| self.geometries.contains_key(c));
        let rest = self
            .geometries
            .keys()
            .copied()
            .filter(|c| !DRAW_ORDER.contains(c));

        ordered
            .chain(rest)
            .filter_map(|cat| {
                let (&category, list) = self.geometries.get_key_value(cat)?;
                Some(RenderLayer {
                    category,
                    color: category_color(category),
                    geometries: list.clone(),
                })
            })
            .collect()
    }
}

static EMPTY: BTreeMap<String, Vec<Geometry<f64>>> = BTreeMap::new();
