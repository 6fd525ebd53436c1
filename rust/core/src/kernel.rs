// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry kernel facade
//!
//! The adjacency builder and the stacker only need a narrow set of
//! capabilities from 2D geometry: area, centroid, envelope, buffering,
//! intersection tests and affine transforms. [`GeometryKernel`] exposes
//! them uniformly over every `geo::Geometry` variant, so callers never
//! branch on polygon vs. line string themselves.
//!
//! Booleans and buffers are delegated to `geo` (i_overlay underneath).
//! Invalid or degenerate input is not rejected here: it yields whatever
//! `geo` produces, typically an empty result or zero area.

use geo::{
    Area, BooleanOps, BoundingRect, Buffer, Centroid, Geometry, Intersects, MultiPolygon, Point,
    Rotate, Translate,
};

use crate::envelope::Envelope;

/// Spatial capabilities consumed by graph building and stacking
pub trait GeometryKernel {
    /// Unsigned area; zero for points and lines
    fn area(&self) -> f64;

    /// Centroid, `None` for empty geometry
    fn centroid_point(&self) -> Option<Point<f64>>;

    /// Tight axis-aligned envelope, `None` for empty geometry
    fn envelope(&self) -> Option<Envelope>;

    /// Isotropic outward expansion by `distance`
    fn buffer_by(&self, distance: f64) -> Geometry<f64>;

    /// True if the two geometries share at least one point
    fn intersects_with(&self, other: &Geometry<f64>) -> bool;

    /// Area of the overlap between the areal parts of both geometries
    fn intersection_area(&self, other: &Geometry<f64>) -> f64;

    /// Copy shifted by `(dx, dy)`
    fn translated(&self, dx: f64, dy: f64) -> Geometry<f64>;

    /// Copy rotated counter-clockwise by `degrees` about `origin`
    fn rotated_about(&self, degrees: f64, origin: Point<f64>) -> Geometry<f64>;
}

impl GeometryKernel for Geometry<f64> {
    fn area(&self) -> f64 {
        self.unsigned_area()
    }

    fn centroid_point(&self) -> Option<Point<f64>> {
        Centroid::centroid(self)
    }

    fn envelope(&self) -> Option<Envelope> {
        self.bounding_rect().map(|rect| Envelope::from_rect(&rect))
    }

    fn buffer_by(&self, distance: f64) -> Geometry<f64> {
        Geometry::MultiPolygon(Buffer::buffer(self, distance))
    }

    fn intersects_with(&self, other: &Geometry<f64>) -> bool {
        Intersects::intersects(self, other)
    }

    fn intersection_area(&self, other: &Geometry<f64>) -> f64 {
        let a = areal_parts(self);
        let b = areal_parts(other);
        if a.0.is_empty() || b.0.is_empty() {
            return 0.0;
        }
        a.intersection(&b).unsigned_area()
    }

    fn translated(&self, dx: f64, dy: f64) -> Geometry<f64> {
        Translate::translate(self, dx, dy)
    }

    fn rotated_about(&self, degrees: f64, origin: Point<f64>) -> Geometry<f64> {
        Rotate::rotate_around_point(self, degrees, origin)
    }
}

/// Collect the polygonal content of a geometry
///
/// Points and lines contribute nothing; collections are flattened.
pub fn areal_parts(geometry: &Geometry<f64>) -> MultiPolygon<f64> {
    match geometry {
        Geometry::Polygon(p) => MultiPolygon::new(vec![p.clone()]),
        Geometry::MultiPolygon(mp) => mp.clone(),
        Geometry::Rect(r) => MultiPolygon::new(vec![r.to_polygon()]),
        Geometry::Triangle(t) => MultiPolygon::new(vec![t.to_polygon()]),
        Geometry::GeometryCollection(gc) => {
            MultiPolygon::new(gc.iter().flat_map(|g| areal_parts(g).0).collect())
        }
        _ => MultiPolygon::new(Vec::new()),
    }
}

/// Union of the areal parts of all given geometries
///
/// Overlapping rooms are merged, so the area of the result is the area of
/// the covered floor, not the sum of room areas.
pub fn footprint<'a, I>(geometries: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = &'a Geometry<f64>>,
{
    geometries
        .into_iter()
        .map(areal_parts)
        .filter(|parts| !parts.0.is_empty())
        .fold(MultiPolygon::new(Vec::new()), |acc, parts| {
            if acc.0.is_empty() {
                parts
            } else {
                acc.union(&parts)
            }
        })
}

/// Tight envelope covering every geometry, `None` if all are empty
pub fn envelope_of<'a, I>(geometries: I) -> Option<Envelope>
where
    I: IntoIterator<Item = &'a Geometry<f64>>,
{
    geometries
        .into_iter()
        .fold(None, |acc, g| Envelope::merge(acc, g.envelope()))
}
