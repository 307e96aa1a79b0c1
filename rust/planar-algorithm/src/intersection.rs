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
//! Pairwise intersection.
//!
//! Empty handling matches PostGIS and is deliberately asymmetric: when g2
//! is empty it is returned as-is, otherwise when g1 is empty g1 is
//! returned. The empty/empty case therefore depends on argument order and
//! must not be symmetrised.
//!
//! For non-empty arguments the pair is swapped into rank order, which
//! keeps the dispatch table triangular. Unsupported pairs (notably
//! Polygon/Polygon and Polygon/LineString) report `NotImplemented` with
//! the ordered pair of type names.
use std::collections::HashSet;

use geo_traits::Dimensions;
use planar_geometry::coord::{Coordinates, Xy};
use planar_geometry::error::PlanarGeometryError;
use planar_geometry::geometry::{
    Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, Point, Polygon,
};
use planar_geometry::predicates::{
    point_on_segment, point_ring_side, segment_intersection, RingSide, SegmentIntersection,
};

use crate::canonical::canonical_points_and_lines;

/// Pairwise intersection as a trait, so that `g1.intersection(&g2)` reads
/// naturally.
pub trait Intersection {
    fn intersection(&self, other: &Geometry) -> Result<Geometry, PlanarGeometryError>;
}

impl Intersection for Geometry {
    fn intersection(&self, other: &Geometry) -> Result<Geometry, PlanarGeometryError> {
        intersection(self, other)
    }
}

pub fn intersection(g1: &Geometry, g2: &Geometry) -> Result<Geometry, PlanarGeometryError> {
    if g2.is_empty() {
        return Ok(g2.clone());
    }
    if g1.is_empty() {
        return Ok(g1.clone());
    }

    let (g1, g2) = if g1.rank() > g2.rank() {
        (g2, g1)
    } else {
        (g1, g2)
    };

    match (g1, g2) {
        (Geometry::Point(pt1), Geometry::Point(pt2)) => Ok(intersect_point_with_point(pt1, pt2)),
        (Geometry::Point(pt), Geometry::Line(ln)) => Ok(intersect_point_with_line(pt, ln)),
        (Geometry::Point(pt), Geometry::LineString(ls)) => {
            Ok(intersect_point_with_line_string(pt, ls))
        }
        (Geometry::Point(pt), Geometry::Polygon(py)) => {
            intersect_multi_point_with_polygon(&MultiPoint::try_new(vec![*pt])?, py)
        }
        (Geometry::Point(pt), Geometry::MultiPoint(mp)) => {
            Ok(intersect_point_with_multi_point(pt, mp))
        }

        (Geometry::Line(ln1), Geometry::Line(ln2)) => intersect_line_with_line(ln1, ln2),
        (Geometry::Line(ln), Geometry::MultiPoint(mp)) => intersect_line_with_multi_point(ln, mp),

        (Geometry::LineString(ls1), Geometry::LineString(ls2)) => {
            intersect_curves(&[ls1], &[ls2])
        }
        (Geometry::LineString(ls), Geometry::LinearRing(lr)) => {
            intersect_curves(&[ls], &[lr.line_string()])
        }
        (Geometry::LineString(ls), Geometry::MultiLineString(mls)) => {
            intersect_curves(&[ls], &mls.line_strings().collect::<Vec<_>>())
        }
        (Geometry::LinearRing(lr1), Geometry::LinearRing(lr2)) => {
            intersect_curves(&[lr1.line_string()], &[lr2.line_string()])
        }
        (Geometry::LinearRing(lr), Geometry::MultiLineString(mls)) => {
            intersect_curves(&[lr.line_string()], &mls.line_strings().collect::<Vec<_>>())
        }

        (Geometry::Polygon(py), Geometry::MultiPoint(mp)) => {
            intersect_multi_point_with_polygon(mp, py)
        }

        (Geometry::MultiPoint(mp1), Geometry::MultiPoint(mp2)) => {
            intersect_multi_point_with_multi_point(mp1, mp2)
        }

        (Geometry::MultiLineString(mls1), Geometry::MultiLineString(mls2)) => intersect_curves(
            &mls1.line_strings().collect::<Vec<_>>(),
            &mls2.line_strings().collect::<Vec<_>>(),
        ),

        (g1, g2) => Err(PlanarGeometryError::NotImplemented(
            g1.type_name(),
            g2.type_name(),
        )),
    }
}

fn empty_collection() -> Geometry {
    GeometryCollection::empty(Dimensions::Xy).into()
}

fn intersect_point_with_point(pt1: &Point, pt2: &Point) -> Geometry {
    match (pt1.xy(), pt2.xy()) {
        (Some(a), Some(b)) if a == b => Point::from_xy(a).into(),
        _ => empty_collection(),
    }
}

fn intersect_point_with_line(pt: &Point, ln: &Line) -> Geometry {
    match pt.xy() {
        Some(xy) if point_on_segment(xy, ln.start_xy(), ln.end_xy()) => (*pt).into(),
        _ => Point::empty(Dimensions::Xy).into(),
    }
}

fn intersect_point_with_line_string(pt: &Point, ls: &LineString) -> Geometry {
    for seg in ls.segments() {
        let g = intersect_point_with_line(pt, &seg);
        if !g.is_empty() {
            return g;
        }
    }
    Point::empty(Dimensions::Xy).into()
}

fn intersect_point_with_multi_point(pt: &Point, mp: &MultiPoint) -> Geometry {
    if let Some(xy) = pt.xy() {
        for member in mp.points() {
            if member.xy() == Some(xy) {
                return Point::from_xy(xy).into();
            }
        }
    }
    empty_collection()
}

fn intersect_line_with_line(ln1: &Line, ln2: &Line) -> Result<Geometry, PlanarGeometryError> {
    match segment_intersection(
        ln1.start_xy(),
        ln1.end_xy(),
        ln2.start_xy(),
        ln2.end_xy(),
    ) {
        SegmentIntersection::Empty => Ok(empty_collection()),
        SegmentIntersection::Point(pt) => Ok(Point::from_xy(pt).into()),
        SegmentIntersection::Overlap(p, q) => {
            Ok(Line::try_new(Coordinates::xy(p), Coordinates::xy(q))?.into())
        }
    }
}

fn intersect_line_with_multi_point(
    ln: &Line,
    mp: &MultiPoint,
) -> Result<Geometry, PlanarGeometryError> {
    let mut pts: Vec<Point> = Vec::new();
    for pt in mp.points() {
        if let Some(xy) = pt.xy() {
            if point_on_segment(xy, ln.start_xy(), ln.end_xy()) {
                pts.push(*pt);
            }
        }
    }
    if pts.len() == 1 {
        return Ok(pts[0].into());
    }
    Ok(MultiPoint::try_new(pts)?.into())
}

/// Intersect two sets of curves by visiting every segment pair and
/// canonicalising the collected point and overlap contacts.
fn intersect_curves(
    a: &[&LineString],
    b: &[&LineString],
) -> Result<Geometry, PlanarGeometryError> {
    let mut points: Vec<Point> = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    for ls1 in a {
        for seg1 in ls1.segments() {
            for ls2 in b {
                for seg2 in ls2.segments() {
                    match segment_intersection(
                        seg1.start_xy(),
                        seg1.end_xy(),
                        seg2.start_xy(),
                        seg2.end_xy(),
                    ) {
                        SegmentIntersection::Empty => {}
                        SegmentIntersection::Point(pt) => points.push(Point::from_xy(pt)),
                        SegmentIntersection::Overlap(p, q) => {
                            lines.push(Line::try_new(Coordinates::xy(p), Coordinates::xy(q))?)
                        }
                    }
                }
            }
        }
    }
    canonical_points_and_lines(points, lines)
}

fn intersect_multi_point_with_polygon(
    mp: &MultiPoint,
    py: &Polygon,
) -> Result<Geometry, PlanarGeometryError> {
    let mut pts: Vec<Point> = Vec::new();
    'outer: for pt in mp.points() {
        let xy = match pt.xy() {
            Some(xy) => xy,
            None => continue,
        };
        if point_ring_side(xy, py.exterior_ring().segment_coords()) == RingSide::Exterior {
            continue;
        }
        for i in 0..py.num_interior_rings() {
            if point_ring_side(xy, py.interior_ring_n(i).segment_coords()) == RingSide::Interior {
                continue 'outer;
            }
        }
        pts.push(*pt);
    }
    match pts.len() {
        0 => Ok(empty_collection()),
        1 => Ok(pts[0].into()),
        _ => Ok(MultiPoint::try_new(pts)?.into()),
    }
}

fn intersect_multi_point_with_multi_point(
    mp1: &MultiPoint,
    mp2: &MultiPoint,
) -> Result<Geometry, PlanarGeometryError> {
    let set1: HashSet<(u64, u64)> = mp1.points().filter_map(|p| p.xy()).map(Xy::to_bits).collect();
    let set2: HashSet<(u64, u64)> = mp2.points().filter_map(|p| p.xy()).map(Xy::to_bits).collect();

    let mut shared: Vec<Xy> = set1
        .intersection(&set2)
        .map(|&(x, y)| Xy::new(f64::from_bits(x), f64::from_bits(y)))
        .collect();
    shared.sort_by(|a, b| a.lexicographic_cmp(b));

    if shared.len() == 1 {
        return Ok(Point::from_xy(shared[0]).into());
    }
    let pts: Vec<Point> = shared.into_iter().map(Point::from_xy).collect();
    Ok(MultiPoint::try_new(pts)?.into())
}
