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
//! Expensive structural validators: LineString simplicity and the polygon
//! family checks. Both are built on the same x-sweep: candidates are
//! visited in order of their minimum x, and an active set keyed by maximum
//! x limits the pairwise tests to candidates whose x intervals overlap.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::coord::Xy;
use crate::error::PlanarGeometryError;
use crate::geometry::{LineString, Polygon, Validations};
use crate::predicates::{
    point_ring_side, segment_intersection, RingSide, SegmentIntersection,
};

/// An entry of the sweep's active set: a min-heap item keyed by max x.
#[derive(Debug)]
struct SweepItem {
    max_x: f64,
    idx: usize,
}

impl PartialEq for SweepItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SweepItem {}

impl PartialOrd for SweepItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SweepItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the BinaryHeap pops the smallest max_x first.
        other
            .max_x
            .total_cmp(&self.max_x)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

/// True iff the curve doesn't pass through the same point twice, with the
/// possible exception of the two endpoints being coincident.
pub(crate) fn is_simple_line_string(ls: &LineString) -> bool {
    // A line sweep algorithm is used, where a vertical line is swept over X
    // values (from lowest to highest). Only segment pairs with overlapping
    // X intervals need pairwise intersection tests.
    let n = ls.num_segments();

    let min_x = |i: usize| {
        let s = ls.segment_n(i);
        s.start_xy().x.min(s.end_xy().x)
    };
    let max_x = |i: usize| {
        let s = ls.segment_n(i);
        s.start_xy().x.max(s.end_xy().x)
    };

    let mut unprocessed: Vec<usize> = (0..n).collect();
    unprocessed.sort_by(|&i, &j| min_x(i).total_cmp(&min_x(j)));

    let mut active: BinaryHeap<SweepItem> = BinaryHeap::new();

    for &current in &unprocessed {
        let current_x = min_x(current);
        while let Some(top) = active.peek() {
            if top.max_x < current_x {
                active.pop();
            } else {
                break;
            }
        }

        let cur = ls.segment_n(current);
        for item in active.iter() {
            let other = item.idx;
            let oth = ls.segment_n(other);
            match segment_intersection(cur.start_xy(), cur.end_xy(), oth.start_xy(), oth.end_xy())
            {
                SegmentIntersection::Empty => continue,
                // Two overlapping line segments.
                SegmentIntersection::Overlap(_, _) => return false,
                SegmentIntersection::Point(_) => {
                    if current.abs_diff(other) == 1 {
                        // Adjacent segments intersect at a point due to
                        // construction, so this case is okay.
                        continue;
                    }

                    // The first and last segment are allowed to intersect at
                    // a point, so long as the line string is closed.
                    if (current == 0 && other == n - 1) || (current == n - 1 && other == 0) {
                        if ls.is_closed() {
                            continue;
                        } else {
                            return false;
                        }
                    }

                    // Any other point intersection (e.g. looping back on
                    // itself) is disallowed for simple line strings.
                    return false;
                }
            }
        }

        active.push(SweepItem {
            max_x: max_x(current),
            idx: current,
        });
    }
    true
}

/// The contact between two closed rings.
enum RingContact {
    None,
    Single(Xy),
    Multiple,
}

fn ring_contact(r1: &LineString, r2: &LineString) -> RingContact {
    let mut single: Option<Xy> = None;
    for s1 in r1.segments() {
        for s2 in r2.segments() {
            match segment_intersection(s1.start_xy(), s1.end_xy(), s2.start_xy(), s2.end_xy()) {
                SegmentIntersection::Empty => {}
                SegmentIntersection::Overlap(_, _) => return RingContact::Multiple,
                SegmentIntersection::Point(pt) => match single {
                    None => single = Some(pt),
                    Some(seen) if seen.to_bits() == pt.to_bits() => {}
                    Some(_) => return RingContact::Multiple,
                },
            }
        }
    }
    match single {
        None => RingContact::None,
        Some(pt) => RingContact::Single(pt),
    }
}

/// Union-find over ring and touch-point vertices. The polygon interior is
/// connected iff the touch graph contains no cycle, and a cycle shows up as
/// a union of two vertices that are already in the same component.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn make_set(&mut self) -> usize {
        self.parent.push(self.parent.len());
        self.parent.len() - 1
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Join the two components. Returns false when x and y were already in
    /// the same component.
    fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }
        self.parent[rx] = ry;
        true
    }
}

/// Validate the ring set of a polygon.
///
/// Holes occupy indexes 0..num_holes and the outer ring sits at num_holes,
/// so a pair of indexes below num_holes is a pair of holes.
pub(crate) fn validate_polygon(
    outer: &LineString,
    holes: &[LineString],
    validations: Validations,
) -> Result<(), PlanarGeometryError> {
    if !validations.cheap() {
        return Ok(());
    }
    if outer.is_empty() && holes.is_empty() {
        // The empty polygon.
        return Ok(());
    }

    let num_holes = holes.len();
    let num_rings = num_holes + 1;
    let ring = |i: usize| -> &LineString {
        if i == num_holes {
            outer
        } else {
            &holes[i]
        }
    };

    let mut intervals = Vec::with_capacity(num_rings);
    let mut starts = Vec::with_capacity(num_rings);
    for i in 0..num_rings {
        let env = ring(i).envelope().ok_or_else(|| {
            PlanarGeometryError::Invalid("polygon rings must not be empty".to_string())
        })?;
        intervals.push((env.min().x, env.max().x));
        starts.push(ring(i).point_n(0).xy);
    }

    for i in 0..num_rings {
        let r = ring(i);
        if !r.is_closed() {
            return Err(PlanarGeometryError::Invalid(
                "polygon rings must be closed".to_string(),
            ));
        }
        if validations.expensive() && !r.is_simple() {
            return Err(PlanarGeometryError::Invalid(
                "polygon rings must be simple".to_string(),
            ));
        }
    }
    if !validations.expensive() {
        return Ok(());
    }

    let mut order: Vec<usize> = (0..num_rings).collect();
    order.sort_by(|&i, &j| intervals[i].0.total_cmp(&intervals[j].0));

    let mut active: BinaryHeap<SweepItem> = BinaryHeap::new();
    let mut uf = UnionFind::new(num_rings);
    let mut touch_vertices: HashMap<(u64, u64), usize> = HashMap::new();
    let mut has_cycle = false;

    for &current in &order {
        let current_x = intervals[current].0;
        while let Some(top) = active.peek() {
            if top.max_x < current_x {
                active.pop();
            } else {
                break;
            }
        }

        for item in active.iter() {
            let other = item.idx;
            if current < num_holes && other < num_holes {
                // Two holes must not nest. The check is skipped when the
                // outer ring is involved.
                let nested_fwd =
                    point_ring_side(starts[current], ring(other).segment_coords())
                        == RingSide::Interior;
                let nested_rev =
                    point_ring_side(starts[other], ring(current).segment_coords())
                        == RingSide::Interior;
                if nested_fwd || nested_rev {
                    return Err(PlanarGeometryError::Invalid(
                        "polygon must not have nested rings".to_string(),
                    ));
                }
            }

            match ring_contact(ring(current), ring(other)) {
                RingContact::None => continue,
                RingContact::Multiple => {
                    return Err(PlanarGeometryError::Invalid(
                        "polygon rings must not intersect at multiple points".to_string(),
                    ))
                }
                RingContact::Single(pt) => {
                    let vertex = match touch_vertices.get(&pt.to_bits()) {
                        Some(&v) => v,
                        None => {
                            let v = uf.make_set();
                            touch_vertices.insert(pt.to_bits(), v);
                            v
                        }
                    };
                    if !uf.union(vertex, current) {
                        has_cycle = true;
                    }
                    if !uf.union(vertex, other) {
                        has_cycle = true;
                    }
                }
            }
        }

        active.push(SweepItem {
            max_x: intervals[current].1,
            idx: current,
        });
    }

    // All hole vertices must lie in the closed interior of the outer ring.
    for hole in holes {
        for i in 0..hole.num_points() {
            if point_ring_side(hole.point_n(i).xy, outer.segment_coords()) == RingSide::Exterior {
                return Err(PlanarGeometryError::Invalid(
                    "hole must be inside outer ring".to_string(),
                ));
            }
        }
    }

    if has_cycle {
        return Err(PlanarGeometryError::Invalid(
            "polygon interiors must be connected".to_string(),
        ));
    }

    Ok(())
}

/// True iff the point lies strictly inside the polygon: interior to the
/// outer ring and exterior to every hole.
fn strictly_interior(pt: Xy, polygon: &Polygon) -> bool {
    if point_ring_side(pt, polygon.exterior_ring().segment_coords()) != RingSide::Interior {
        return false;
    }
    for i in 0..polygon.num_interior_rings() {
        if point_ring_side(pt, polygon.interior_ring_n(i).segment_coords()) != RingSide::Exterior {
            return false;
        }
    }
    true
}

/// Validate the polygons of a MultiPolygon against each other.
pub(crate) fn validate_multi_polygon(polygons: &[Polygon]) -> Result<(), PlanarGeometryError> {
    for i in 0..polygons.len() {
        for j in (i + 1)..polygons.len() {
            let (a, b) = (&polygons[i], &polygons[j]);
            let (env_a, env_b) = match (a.envelope(), b.envelope()) {
                (Some(env_a), Some(env_b)) => (env_a, env_b),
                _ => continue,
            };
            if !env_a.intersects(&env_b) {
                continue;
            }

            for ra in a.rings() {
                for rb in b.rings() {
                    for sa in ra.segments() {
                        for sb in rb.segments() {
                            if let SegmentIntersection::Overlap(_, _) = segment_intersection(
                                sa.start_xy(),
                                sa.end_xy(),
                                sb.start_xy(),
                                sb.end_xy(),
                            ) {
                                return Err(PlanarGeometryError::Invalid(
                                    "polygons in a multipolygon must not share boundary segments"
                                        .to_string(),
                                ));
                            }
                        }
                    }
                }
            }

            let vertex_inside = |from: &Polygon, target: &Polygon| {
                from.rings().any(|ring| {
                    (0..ring.num_points()).any(|n| strictly_interior(ring.point_n(n).xy, target))
                })
            };
            if vertex_inside(a, b) || vertex_inside(b, a) {
                return Err(PlanarGeometryError::Invalid(
                    "polygons in a multipolygon must have disjoint interiors".to_string(),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinates;

    fn ls(pts: &[(f64, f64)]) -> LineString {
        LineString::try_new(pts.iter().map(|&(x, y)| Coordinates::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn adjacent_segments_may_share_their_endpoint() {
        assert!(is_simple_line_string(&ls(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0)
        ])));
    }

    #[test]
    fn collinear_spike_is_not_simple() {
        assert!(!is_simple_line_string(&ls(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0)
        ])));
    }

    #[test]
    fn closed_curve_may_reuse_only_the_closing_vertex() {
        assert!(is_simple_line_string(&ls(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0)
        ])));
        // Open, but the last segment ends at the interior vertex (1, 0).
        assert!(!is_simple_line_string(&ls(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (1.0, 0.0)
        ])));
    }

    #[test]
    fn crossing_segments_are_not_simple() {
        assert!(!is_simple_line_string(&ls(&[
            (0.0, 0.0),
            (2.0, 2.0),
            (2.0, 0.0),
            (0.0, 2.0)
        ])));
    }

    #[test]
    fn ring_contact_classification() {
        let square = ls(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
        let inner = ls(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]);
        let touching = ls(&[(4.0, 1.0), (5.0, 1.0), (5.0, 2.0), (4.0, 1.0)]);
        let crossing = ls(&[(0.0, 2.0), (2.0, 1.0), (4.0, 2.0), (2.0, 3.0), (0.0, 2.0)]);

        assert!(matches!(ring_contact(&square, &inner), RingContact::None));
        assert!(matches!(
            ring_contact(&square, &touching),
            RingContact::Single(pt) if pt == Xy::new(4.0, 1.0)
        ));
        assert!(matches!(
            ring_contact(&square, &crossing),
            RingContact::Multiple
        ));
    }

    #[test]
    fn union_find_detects_cycles() {
        let mut uf = UnionFind::new(3);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 2));
    }
}
