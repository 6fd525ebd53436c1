// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plan / site boundary compatibility

use geo::{HasDimensions, Polygon, Relate};

use resplan_core::Plan;

/// Whether every geometry of `plan` lies within `boundary`
///
/// Uses true polygon containment, so a plan rotated off the axes fits a
/// boundary of the same shape even though its envelope does not. Empty
/// geometries are ignored; a plan with no geometry is never compatible.
pub fn is_plan_compatible(plan: &Plan, boundary: &Polygon<f64>) -> bool {
    let mut any = false;
    for geometry in plan.all_geometries() {
        if geometry.is_empty() {
            continue;
        }
        if !boundary.relate(geometry).is_covers() {
            return false;
        }
        any = true;
    }
    any
}

/// Plans that fit within `boundary`, in input order
pub fn filter_compatible<'a>(plans: &'a [Plan], boundary: &Polygon<f64>) -> Vec<&'a Plan> {
    plans
        .iter()
        .filter(|plan| is_plan_compatible(plan, boundary))
        .collect()
}
