// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor stacking
//!
//! Greedy bottom-up selection: the plan with the largest envelope becomes
//! the ground floor, then each storey takes the largest remaining plan
//! that, at some quarter-turn rotation about the front-door origin, lies
//! almost entirely over the storey below. Stacking stops at the requested
//! height, when the pool runs out, or when nothing fits.
//!
//! Rotations are evaluated on exact envelope transforms; only the winning
//! candidate is ever rotated as geometry.

use geo::{Geometry, Point};
use tracing::{debug, info};

use resplan_core::category::STAIRS;
use resplan_core::{Building, BuildingFloor, Envelope, GeometryKernel, Plan, Result};

use crate::config::{FitTest, StackingConfig};
use crate::normalize::{normalize_plan, stair_core};

/// Quarter-turn rotation about the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Search order for each candidate
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn quarter_turns(self) -> u8 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Counter-clockwise angle in degrees
    pub fn degrees(self) -> f64 {
        f64::from(self.quarter_turns()) * 90.0
    }

    /// Copy of `plan` rotated about the origin
    pub fn apply(self, plan: &Plan) -> Plan {
        match self {
            Rotation::R0 => plan.clone(),
            _ => plan.rotated(self.degrees(), Point::new(0.0, 0.0)),
        }
    }
}

/// Best match found for one storey
#[derive(Debug, Clone, Copy)]
struct Fit {
    /// Position in the candidate pool
    index: usize,
    rotation: Rotation,
    /// Candidate envelope area, the selection key
    area: f64,
    coverage: f64,
}

/// Stack `plans` into a building of at most `target_floors` storeys
///
/// Input plans are never modified; every floor owns a transformed copy.
/// Returns fewer floors than requested when the input runs out or no
/// remaining plan fits. A `target_floors` of zero yields an empty
/// building; the ground floor is not placed unconditionally.
pub fn generate_building(plans: &[Plan], target_floors: usize) -> Building {
    stack(plans, target_floors, &StackingConfig::default())
}

/// [`generate_building`] with explicit parameters, validated first
pub fn generate_building_with_config(
    plans: &[Plan],
    target_floors: usize,
    config: &StackingConfig,
) -> Result<Building> {
    config.validate()?;
    Ok(stack(plans, target_floors, config))
}

fn stack(plans: &[Plan], target_floors: usize, config: &StackingConfig) -> Building {
    let mut building = Building::new();
    if plans.is_empty() || target_floors == 0 {
        return building;
    }

    info!(
        plans = plans.len(),
        target_floors,
        fit_test = %config.fit_test,
        "Stacking floor plans"
    );

    let mut pool: Vec<Plan> = plans.iter().map(normalize_plan).collect();
    // Stable: equal areas keep input order. NaN areas sort last.
    pool.sort_by(|a, b| sort_key(b).total_cmp(&sort_key(a)));

    let base = pool.remove(0);
    debug!(plan_id = base.id, area = base.envelope_area(), "Floor 0");
    building.floors.push(make_floor(0, base, config));

    for floor_number in 1..target_floors {
        if pool.is_empty() {
            info!(floor_number, "Candidate pool exhausted");
            break;
        }
        let Some(current) = building.top_floor() else {
            break;
        };
        let Some(fit) = find_best_fit(&current.plan, &pool, config) else {
            info!(
                floor_number,
                remaining = pool.len(),
                "No remaining plan fits, stopping early"
            );
            break;
        };

        let candidate = pool.remove(fit.index);
        let plan = fit.rotation.apply(&candidate);
        debug!(
            floor_number,
            plan_id = plan.id,
            rotation = fit.rotation.degrees(),
            coverage = fit.coverage,
            area = fit.area,
            "Floor committed"
        );
        building.floors.push(make_floor(floor_number, plan, config));
    }

    info!(
        floors = building.floor_count(),
        target_floors, "Building generated"
    );
    building
}

/// Envelope area with NaN mapped below every real area
fn sort_key(plan: &Plan) -> f64 {
    let area = plan.envelope_area();
    if area.is_nan() {
        f64::NEG_INFINITY
    } else {
        area
    }
}

fn make_floor(floor_number: usize, plan: Plan, config: &StackingConfig) -> BuildingFloor {
    let mut floor = BuildingFloor::new(floor_number, plan);
    floor
        .additional_geometries
        .insert(STAIRS.to_string(), vec![stair_core(&config.stair_core)]);
    floor
}

/// Largest candidate (by envelope area) whose coverage over `current`
/// exceeds the threshold at some rotation; ties go to the first found,
/// pool order outer, rotation order inner.
fn find_best_fit(current: &Plan, pool: &[Plan], config: &StackingConfig) -> Option<Fit> {
    let current_envelope = current.bounds?;
    let current_footprint = match config.fit_test {
        FitTest::Envelope => None,
        FitTest::Footprint => Some(Geometry::MultiPolygon(current.footprint())),
    };

    let mut best: Option<Fit> = None;
    for (index, candidate) in pool.iter().enumerate() {
        let Some(envelope) = candidate.bounds else {
            continue;
        };
        let candidate_footprint = current_footprint
            .as_ref()
            .map(|_| Geometry::MultiPolygon(candidate.footprint()));

        for rotation in Rotation::ALL {
            let rotated = envelope.rotated_quarter_turns(rotation.quarter_turns());
            let area = rotated.area();
            let coverage = match (&current_footprint, &candidate_footprint) {
                (Some(below), Some(footprint)) => footprint_coverage(below, footprint, rotation),
                _ => envelope_coverage(&current_envelope, &rotated),
            };
            // NaN coverage from degenerate candidates never passes.
            if coverage > config.coverage_threshold && best.map_or(true, |b| area > b.area) {
                best = Some(Fit {
                    index,
                    rotation,
                    area,
                    coverage,
                });
            }
        }
    }
    best
}

fn envelope_coverage(below: &Envelope, candidate: &Envelope) -> f64 {
    below.intersection_area(candidate) / candidate.area()
}

fn footprint_coverage(below: &Geometry<f64>, footprint: &Geometry<f64>, rotation: Rotation) -> f64 {
    let rotated;
    let footprint = match rotation {
        Rotation::R0 => footprint,
        _ => {
            rotated = footprint.rotated_about(rotation.degrees(), Point::new(0.0, 0.0));
            &rotated
        }
    };
    let area = footprint.area();
    if area <= 0.0 {
        return 0.0;
    }
    below.intersection_area(footprint) / area
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::polygon;
    use resplan_core::category::{FRONT_DOOR, LIVING};

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
        ])
    }

    /// Living room rectangle with a front door centered on the origin
    fn plan(id: i64, x0: f64, y0: f64, x1: f64, y1: f64) -> Plan {
        let mut plan = Plan::new(id);
        plan.add_geometry(LIVING, rect(x0, y0, x1, y1));
        plan.add_geometry(FRONT_DOOR, rect(-0.5, -0.1, 0.5, 0.1));
        plan
    }

    #[test]
    fn rotation_degrees() {
        let degrees: Vec<f64> = Rotation::ALL.iter().map(|r| r.degrees()).collect();
        assert_eq!(degrees, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn rotation_apply_matches_envelope_turns() {
        let source = plan(1, -2.0, 0.0, 2.0, 8.0);
        let envelope = source.bounds.unwrap();
        for rotation in Rotation::ALL {
            let expected = envelope.rotated_quarter_turns(rotation.quarter_turns());
            let actual = rotation.apply(&source).bounds.unwrap();
            assert_relative_eq!(actual.min_x, expected.min_x, epsilon = 1e-9);
            assert_relative_eq!(actual.min_y, expected.min_y, epsilon = 1e-9);
            assert_relative_eq!(actual.max_x, expected.max_x, epsilon = 1e-9);
            assert_relative_eq!(actual.max_y, expected.max_y, epsilon = 1e-9);
        }
    }

    #[test]
    fn best_fit_prefers_larger_envelope() {
        let current = plan(0, -10.0, 0.0, 10.0, 20.0);
        let pool = vec![plan(1, -2.0, 0.0, 2.0, 4.0), plan(2, -5.0, 0.0, 5.0, 10.0)];
        let fit = find_best_fit(&current, &pool, &StackingConfig::default()).unwrap();
        assert_eq!(fit.index, 1);
        assert_eq!(fit.rotation, Rotation::R0);
        assert_relative_eq!(fit.coverage, 1.0);
    }

    #[test]
    fn best_fit_ties_go_to_first_found() {
        let current = plan(0, -10.0, 0.0, 10.0, 20.0);
        let pool = vec![plan(1, -3.0, 0.0, 3.0, 6.0), plan(2, -3.0, 0.0, 3.0, 6.0)];
        let fit = find_best_fit(&current, &pool, &StackingConfig::default()).unwrap();
        assert_eq!(fit.index, 0);
        assert_eq!(fit.rotation, Rotation::R0);
    }

    #[test]
    fn best_fit_finds_rotation() {
        // Wide floor below, tall candidate: only a quarter turn fits.
        let current = plan(0, -10.0, -5.0, 10.0, 5.0);
        let pool = vec![plan(1, -2.0, -8.0, 2.0, 8.0)];
        let fit = find_best_fit(&current, &pool, &StackingConfig::default()).unwrap();
        assert_eq!(fit.rotation, Rotation::R90);
    }

    #[test]
    fn best_fit_none_without_bounds() {
        let current = Plan::new(0);
        let pool = vec![plan(1, -1.0, 0.0, 1.0, 1.0)];
        assert!(find_best_fit(&current, &pool, &StackingConfig::default()).is_none());
    }

    #[test]
    fn degenerate_candidate_never_fits() {
        let current = plan(0, -10.0, 0.0, 10.0, 20.0);
        let mut flat = Plan::new(1);
        flat.add_geometry(FRONT_DOOR, Geometry::Point(Point::new(0.0, 0.0)));
        assert!(find_best_fit(&current, &[flat], &StackingConfig::default()).is_none());
    }

    #[test]
    fn nan_area_sorts_below_everything() {
        let mut broken = Plan::new(1);
        broken.bounds = Some(Envelope::new(f64::NAN, 0.0, 1.0, 1.0));
        assert_eq!(sort_key(&broken), f64::NEG_INFINITY);
        assert!(sort_key(&broken) < sort_key(&Plan::new(2)));
    }

    #[test]
    fn stair_core_attached() {
        let floor = make_floor(3, plan(1, -1.0, 0.0, 1.0, 1.0), &StackingConfig::default());
        assert_eq!(floor.floor_number, 3);
        let stairs = &floor.additional_geometries[STAIRS];
        assert_eq!(stairs.len(), 1);
        assert_eq!(stairs[0].envelope(), Some(Envelope::new(-2.0, -4.0, 2.0, 0.0)));
        assert!(!floor.plan.geometries.contains_key(STAIRS));
    }
}
