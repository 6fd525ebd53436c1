// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Front-door anchoring and the synthesized stair core

use geo::Geometry;
use tracing::warn;

use resplan_core::{Envelope, Plan};

/// Copy of `plan` translated so its first front door's centroid sits at
/// the origin.
///
/// Plans without a usable front door are returned untranslated.
pub fn normalize_plan(plan: &Plan) -> Plan {
    match plan.front_door_centroid() {
        Some(centroid) => plan.translated(-centroid.x(), -centroid.y()),
        None => {
            warn!(plan_id = plan.id, "Plan has no front door, leaving it untranslated");
            plan.clone()
        }
    }
}

/// Stair core footprint in plan-local coordinates
pub fn stair_core(rect: &Envelope) -> Geometry<f64> {
    Geometry::Polygon(rect.to_polygon())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geo::polygon;
    use resplan_core::category::{FRONT_DOOR, LIVING};
    use resplan_core::GeometryKernel;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
        ])
    }

    #[test]
    fn moves_front_door_to_origin() {
        let mut plan = Plan::new(1);
        plan.add_geometry(LIVING, rect(0.0, 0.0, 10.0, 8.0));
        plan.add_geometry(FRONT_DOOR, rect(4.5, -0.1, 5.5, 0.1));

        let normalized = normalize_plan(&plan);
        let centroid = normalized.front_door_centroid().unwrap();
        assert_abs_diff_eq!(centroid.x(), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(centroid.y(), 0.0, epsilon = 1e-9);

        let bounds = normalized.bounds.unwrap();
        assert_abs_diff_eq!(bounds.min_x, -5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bounds.min_y, -0.1, epsilon = 1e-9);

        // source untouched
        assert_abs_diff_eq!(plan.bounds.unwrap().min_x, 0.0);
    }

    #[test]
    fn without_front_door_is_untranslated() {
        let mut plan = Plan::new(2);
        plan.add_geometry(LIVING, rect(3.0, 3.0, 6.0, 6.0));
        assert_eq!(normalize_plan(&plan), plan);
    }

    #[test]
    fn stair_core_spans_rectangle() {
        let core = stair_core(&Envelope::new(-2.0, -4.0, 2.0, 0.0));
        assert_eq!(core.envelope(), Some(Envelope::new(-2.0, -4.0, 2.0, 0.0)));
        assert_abs_diff_eq!(core.area(), 16.0, epsilon = 1e-12);
    }
}
