// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.
//! Exact geometric predicates over [Xy] locations.
//!
//! Everything here computes with the raw algebraic sign and no tolerance.
//! Collinearity in particular is decided by an exact identity on the input
//! floats; callers that want tolerant behaviour must snap their inputs
//! before constructing geometries.
use crate::coord::Xy;

/// The position of a query point relative to a directed segment.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// Gives the orientation of 3 2-dimensional points: counter-clockwise (to
/// the left of a->b), clockwise (to the right), or collinear.
pub fn orient2d(a: Xy, b: Xy, c: Xy) -> Orientation {
    let res = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
    if res > 0.0 {
        Orientation::CounterClockwise
    } else if res < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Check if point r lies on the segment formed by p and q. p, q and r must
/// already be collinear. Inclusive at both endpoints.
pub fn on_segment(p: Xy, q: Xy, r: Xy) -> bool {
    r.x <= p.x.max(q.x) && r.x >= p.x.min(q.x) && r.y <= p.y.max(q.y) && r.y >= p.y.min(q.y)
}

/// Check if point p lies on the segment from a to b, without assuming
/// collinearity. A cheap interval rejection runs before the exact
/// collinearity identity.
pub fn point_on_segment(p: Xy, a: Xy, b: Xy) -> bool {
    if !on_segment(a, b, p) {
        return false;
    }
    (p.x - a.x) * (b.y - a.y) == (p.y - a.y) * (b.x - a.x)
}

/// The result of intersecting two line segments.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SegmentIntersection {
    /// The segments do not meet.
    Empty,
    /// The segments meet at exactly one location.
    Point(Xy),
    /// The segments are collinear and share more than one location. The two
    /// bounds are distinct.
    Overlap(Xy, Xy),
}

impl SegmentIntersection {
    pub fn is_empty(&self) -> bool {
        matches!(self, SegmentIntersection::Empty)
    }

    /// 0 for a point contact, 1 for a collinear overlap.
    pub fn dimension(&self) -> usize {
        match self {
            SegmentIntersection::Empty | SegmentIntersection::Point(_) => 0,
            SegmentIntersection::Overlap(_, _) => 1,
        }
    }
}

/// Intersect segment ab with segment cd.
///
/// In the proper crossing case the meeting point is one of the four
/// endpoints whenever an endpoint is collinear with the other segment
/// (tested in the order c, d, a, b), and is otherwise computed by the
/// parametric solution along ab. In the collinear case the overlap interval
/// is bounded by the middle two of the four endpoints under the
/// lexicographic order.
pub fn segment_intersection(a: Xy, b: Xy, c: Xy, d: Xy) -> SegmentIntersection {
    let o1 = orient2d(a, b, c);
    let o2 = orient2d(a, b, d);
    let o3 = orient2d(c, d, a);
    let o4 = orient2d(c, d, b);

    if o1 != o2 && o3 != o4 {
        if o1 == Orientation::Collinear {
            return SegmentIntersection::Point(c);
        }
        if o2 == Orientation::Collinear {
            return SegmentIntersection::Point(d);
        }
        if o3 == Orientation::Collinear {
            return SegmentIntersection::Point(a);
        }
        if o4 == Orientation::Collinear {
            return SegmentIntersection::Point(b);
        }

        let e = (c.y - d.y) * (a.x - c.x) + (d.x - c.x) * (a.y - c.y);
        let f = (d.x - c.x) * (a.y - b.y) - (a.x - b.x) * (d.y - c.y);
        // Division by zero is not possible, since the lines are not parallel.
        let t = e / f;

        return SegmentIntersection::Point(a + (b - a).scale(t));
    }

    if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
        if !on_segment(a, b, c)
            && !on_segment(a, b, d)
            && !on_segment(c, d, a)
            && !on_segment(c, d, b)
        {
            return SegmentIntersection::Empty;
        }

        // Drop the two outer endpoints; the remaining two bound the overlap.
        let mut pts = [a, b, c, d];
        let mut len = pts.len();
        let rth = rightmost_then_highest_index(&pts[..len]);
        pts.copy_within(rth + 1..len, rth);
        len -= 1;
        let ltl = leftmost_then_lowest_index(&pts[..len]);
        pts.copy_within(ltl + 1..len, ltl);
        len -= 1;
        debug_assert_eq!(len, 2);

        if pts[0] == pts[1] {
            return SegmentIntersection::Point(pts[0]);
        }
        return SegmentIntersection::Overlap(pts[0], pts[1]);
    }

    SegmentIntersection::Empty
}

/// The index of the rightmost-then-highest point.
pub fn rightmost_then_highest_index(ps: &[Xy]) -> usize {
    let mut rpi = 0;
    for i in 1..ps.len() {
        if ps[i].x > ps[rpi].x || (ps[i].x == ps[rpi].x && ps[i].y > ps[rpi].y) {
            rpi = i;
        }
    }
    rpi
}

/// The index of the leftmost-then-lowest point.
pub fn leftmost_then_lowest_index(ps: &[Xy]) -> usize {
    let mut rpi = 0;
    for i in 1..ps.len() {
        if ps[i].x < ps[rpi].x || (ps[i].x == ps[rpi].x && ps[i].y < ps[rpi].y) {
            rpi = i;
        }
    }
    rpi
}

/// The position of a point relative to a closed ring.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RingSide {
    Interior,
    Boundary,
    Exterior,
}

/// Classify a point against the closed ring formed by `segments`.
///
/// Casts a horizontal ray from the point towards positive x and counts
/// crossings. A point lying exactly on any ring segment is on the boundary.
/// Horizontal edges never cross the ray, and a crossing at a shared vertex
/// is counted once because each segment is half-open in y.
pub fn point_ring_side(pt: Xy, segments: impl Iterator<Item = (Xy, Xy)>) -> RingSide {
    let mut inside = false;
    for (a, b) in segments {
        if point_on_segment(pt, a, b) {
            return RingSide::Boundary;
        }
        if (a.y > pt.y) != (b.y > pt.y) {
            let x_cross = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
    }
    if inside {
        RingSide::Interior
    } else {
        RingSide::Exterior
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use rstest::rstest;

    #[test]
    fn orientation_signs() {
        let a = Xy::new(0.0, 0.0);
        let b = Xy::new(1.0, 0.0);
        assert_eq!(orient2d(a, b, Xy::new(0.0, 1.0)), Orientation::CounterClockwise);
        assert_eq!(orient2d(a, b, Xy::new(0.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orient2d(a, b, Xy::new(2.0, 0.0)), Orientation::Collinear);
    }

    #[test]
    fn orientation_antisymmetry() {
        let pts = [
            Xy::new(0.25, 1.5),
            Xy::new(-3.0, 0.125),
            Xy::new(2.0, -7.5),
        ];
        let [a, b, c] = pts;
        let flip = |o: Orientation| match o {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        };
        assert_eq!(orient2d(b, a, c), flip(orient2d(a, b, c)));
        assert_eq!(orient2d(a, c, b), flip(orient2d(a, b, c)));
        assert_eq!(orient2d(c, b, a), flip(orient2d(a, b, c)));
    }

    #[test]
    fn on_segment_is_inclusive() {
        let p = Xy::new(0.0, 0.0);
        let q = Xy::new(2.0, 2.0);
        assert!(on_segment(p, q, p));
        assert!(on_segment(p, q, q));
        assert!(on_segment(p, q, Xy::new(1.0, 1.0)));
        assert!(!on_segment(p, q, Xy::new(3.0, 3.0)));
        assert!(!on_segment(p, q, Xy::new(-1.0, -1.0)));
    }

    #[rstest]
    #[case(Xy::new(1.0, 1.0), true)]
    #[case(Xy::new(0.0, 0.0), true)]
    #[case(Xy::new(2.0, 2.0), true)]
    #[case(Xy::new(1.0, 1.5), false)]
    #[case(Xy::new(3.0, 3.0), false)]
    fn point_on_segment_exact(#[case] p: Xy, #[case] expected: bool) {
        assert_eq!(
            point_on_segment(p, Xy::new(0.0, 0.0), Xy::new(2.0, 2.0)),
            expected
        );
    }

    #[test]
    fn segments_crossing_at_midpoint() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(1.0, 1.0),
            Xy::new(1.0, 0.0),
            Xy::new(0.0, 1.0),
        );
        assert_eq!(inter, SegmentIntersection::Point(Xy::new(0.5, 0.5)));
    }

    #[test]
    fn segments_touching_at_endpoint() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(2.0, 0.0),
        );
        assert_eq!(inter, SegmentIntersection::Point(Xy::new(1.0, 0.0)));
    }

    #[test]
    fn segments_collinear_overlap() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(3.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(2.0, 0.0),
        );
        assert_eq!(
            inter,
            SegmentIntersection::Overlap(Xy::new(1.0, 0.0), Xy::new(2.0, 0.0))
        );
    }

    #[test]
    fn segments_collinear_opposite_directions() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(0.0, 0.0),
        );
        assert_eq!(
            inter,
            SegmentIntersection::Overlap(Xy::new(0.0, 0.0), Xy::new(1.0, 0.0))
        );
    }

    #[test]
    fn segments_collinear_disjoint() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(1.0, 0.0),
            Xy::new(2.0, 0.0),
            Xy::new(3.0, 0.0),
        );
        assert_eq!(inter, SegmentIntersection::Empty);
    }

    #[test]
    fn segments_parallel_disjoint() {
        let inter = segment_intersection(
            Xy::new(0.0, 0.0),
            Xy::new(0.0, 1.0),
            Xy::new(1.0, 0.0),
            Xy::new(1.0, 1.0),
        );
        assert_eq!(inter, SegmentIntersection::Empty);
    }

    fn unit_square() -> Vec<(Xy, Xy)> {
        let pts = [
            Xy::new(0.0, 0.0),
            Xy::new(2.0, 0.0),
            Xy::new(2.0, 2.0),
            Xy::new(0.0, 2.0),
            Xy::new(0.0, 0.0),
        ];
        pts.windows(2).map(|w| (w[0], w[1])).collect()
    }

    #[rstest]
    #[case(Xy::new(1.0, 1.0), RingSide::Interior)]
    #[case(Xy::new(3.0, 1.0), RingSide::Exterior)]
    #[case(Xy::new(2.0, 1.0), RingSide::Boundary)]
    #[case(Xy::new(0.0, 0.0), RingSide::Boundary)]
    #[case(Xy::new(1.0, 2.0), RingSide::Boundary)]
    #[case(Xy::new(-1.0, 0.0), RingSide::Exterior)]
    #[case(Xy::new(-1.0, 2.0), RingSide::Exterior)]
    fn point_in_square(#[case] pt: Xy, #[case] expected: RingSide) {
        assert_eq!(point_ring_side(pt, unit_square().into_iter()), expected);
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // A diamond whose left vertex is level with the query point.
        let pts = [
            Xy::new(0.0, 0.0),
            Xy::new(1.0, -1.0),
            Xy::new(2.0, 0.0),
            Xy::new(1.0, 1.0),
            Xy::new(0.0, 0.0),
        ];
        let segs: Vec<_> = pts.windows(2).map(|w| (w[0], w[1])).collect();
        assert_eq!(
            point_ring_side(Xy::new(-1.0, 0.0), segs.iter().copied()),
            RingSide::Exterior
        );
        assert_eq!(
            point_ring_side(Xy::new(1.0, 0.0), segs.iter().copied()),
            RingSide::Interior
        );
    }

    #[test]
    fn extreme_indexes() {
        let pts = [
            Xy::new(0.0, 0.0),
            Xy::new(2.0, 1.0),
            Xy::new(2.0, 3.0),
            Xy::new(0.0, -1.0),
        ];
        assert_eq!(rightmost_then_highest_index(&pts), 2);
        assert_eq!(leftmost_then_lowest_index(&pts), 3);
    }
}
