// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding envelopes
//!
//! Plans carry the tight envelope of all their geometries. The stacker
//! compares envelopes rather than room polygons, so the handful of
//! operations here (intersection, area, quarter-turn rotation) sit on its
//! hot path and stay purely arithmetic.

use geo::{polygon, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle in plan coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Envelope {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Build an envelope from a geo rectangle
    pub fn from_rect(rect: &Rect<f64>) -> Self {
        let min = rect.min();
        let max = rect.max();
        Self::new(min.x, min.y, max.x, max.y)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Area of the envelope (zero for degenerate envelopes)
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Center point of the envelope
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Grow this envelope so it also covers `other`
    pub fn expand_to_include(&mut self, other: &Envelope) {
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Union of two optional envelopes
    pub fn merge(a: Option<Envelope>, b: Option<Envelope>) -> Option<Envelope> {
        match (a, b) {
            (Some(mut a), Some(b)) => {
                a.expand_to_include(&b);
                Some(a)
            }
            (a, None) => a,
            (None, b) => b,
        }
    }

    /// Overlapping region of two envelopes, `None` when they are disjoint
    ///
    /// Envelopes that only share an edge produce a zero-area intersection.
    pub fn intersection(&self, other: &Envelope) -> Option<Envelope> {
        let min_x = self.min_x.max(other.min_x);
        let min_y = self.min_y.max(other.min_y);
        let max_x = self.max_x.min(other.max_x);
        let max_y = self.max_y.min(other.max_y);

        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    /// Area of the overlap with `other` (zero when disjoint)
    pub fn intersection_area(&self, other: &Envelope) -> f64 {
        self.intersection(other).map_or(0.0, |e| e.area())
    }

    /// Rotate by `turns` quarter turns counter-clockwise about the origin
    ///
    /// Quarter turns map an axis-aligned rectangle onto another one, so the
    /// result is exact: coordinates are only swapped and negated.
    pub fn rotated_quarter_turns(&self, turns: u8) -> Envelope {
        match turns % 4 {
            0 => *self,
            // (x, y) -> (-y, x)
            1 => Self::new(-self.max_y, self.min_x, -self.min_y, self.max_x),
            // (x, y) -> (-x, -y)
            2 => Self::new(-self.max_x, -self.max_y, -self.min_x, -self.min_y),
            // (x, y) -> (y, -x)
            _ => Self::new(self.min_y, -self.max_x, self.max_y, -self.min_x),
        }
    }

    /// Closed rectangular polygon, counter-clockwise from the minimum corner
    pub fn to_polygon(&self) -> Polygon<f64> {
        polygon![
            (x: self.min_x, y: self.min_y),
            (x: self.max_x, y: self.min_y),
            (x: self.max_x, y: self.max_y),
            (x: self.min_x, y: self.max_y),
            (x: self.min_x, y: self.min_y),
        ]
    }

    /// True when all four coordinates are finite and min <= max on both axes
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.min_y, self.max_x, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_and_center() {
        let env = Envelope::new(-2.0, -4.0, 2.0, 0.0);
        assert_relative_eq!(env.area(), 16.0);
        assert_eq!(env.center(), (0.0, -2.0));
    }

    #[test]
    fn intersection_of_overlapping_envelopes() {
        let a = Envelope::new(0.0, 0.0, 10.0, 10.0);
        let b = Envelope::new(5.0, 5.0, 15.0, 15.0);
        let i = a.intersection(&b).unwrap();
        assert_eq!(i, Envelope::new(5.0, 5.0, 10.0, 10.0));
        assert_relative_eq!(a.intersection_area(&b), 25.0);
    }

    #[test]
    fn disjoint_envelopes_have_no_intersection() {
        let a = Envelope::new(0.0, 0.0, 1.0, 1.0);
        let b = Envelope::new(2.0, 2.0, 3.0, 3.0);
        assert!(a.intersection(&b).is_none());
        assert_eq!(a.intersection_area(&b), 0.0);
    }

    #[test]
    fn touching_envelopes_intersect_with_zero_area() {
        let a = Envelope::new(0.0, 0.0, 1.0, 1.0);
        let b = Envelope::new(1.0, 0.0, 2.0, 1.0);
        assert_eq!(a.intersection_area(&b), 0.0);
        assert!(a.intersection(&b).is_some());
    }

    #[test]
    fn quarter_turns_are_exact() {
        let env = Envelope::new(1.0, 2.0, 4.0, 3.0);
        assert_eq!(env.rotated_quarter_turns(1), Envelope::new(-3.0, 1.0, -2.0, 4.0));
        assert_eq!(env.rotated_quarter_turns(2), Envelope::new(-4.0, -3.0, -1.0, -2.0));
        assert_eq!(env.rotated_quarter_turns(3), Envelope::new(2.0, -4.0, 3.0, -1.0));
        assert_eq!(env.rotated_quarter_turns(4), env);

        let mut back = env;
        for _ in 0..4 {
            back = back.rotated_quarter_turns(1);
        }
        assert_eq!(back, env);
    }

    #[test]
    fn merge_optional_envelopes() {
        let a = Some(Envelope::new(0.0, 0.0, 1.0, 1.0));
        let b = Some(Envelope::new(-1.0, 0.5, 0.5, 3.0));
        assert_eq!(Envelope::merge(a, b), Some(Envelope::new(-1.0, 0.0, 1.0, 3.0)));
        assert_eq!(Envelope::merge(None, b), b);
        assert_eq!(Envelope::merge(a, None), a);
        assert_eq!(Envelope::merge(None, None), None);
    }

    #[test]
    fn polygon_round_trips_through_rect() {
        let env = Envelope::new(-2.0, -4.0, 2.0, 0.0);
        let poly = env.to_polygon();
        assert_eq!(poly.exterior().0.len(), 5);
        let rect = geo::BoundingRect::bounding_rect(&poly).unwrap();
        assert_eq!(Envelope::from_rect(&rect), env);
    }

    #[test]
    fn validity() {
        assert!(Envelope::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Envelope::new(1.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Envelope::new(f64::NAN, 0.0, 1.0, 1.0).is_valid());
    }
}
