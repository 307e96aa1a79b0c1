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
//! Intersection testing without materialising the intersection.
//!
//! The dispatch mirrors [crate::intersection] so that for every supported
//! pair `intersects(g1, g2)` agrees with `!intersection(g1, g2).is_empty()`.
//! The reported dimension is the maximum over all sub-intersections: 0 for
//! isolated points, 1 for collinear overlap.
use planar_geometry::error::PlanarGeometryError;
use planar_geometry::geometry::{Geometry, Line, LineString, MultiPoint, Point, Polygon};
use planar_geometry::predicates::{
    point_on_segment, point_ring_side, segment_intersection, RingSide, SegmentIntersection,
};

/// Intersection testing as a trait, so that `g1.intersects(&g2)` reads
/// naturally.
pub trait Intersects {
    fn intersects(&self, other: &Geometry) -> Result<bool, PlanarGeometryError>;
}

impl Intersects for Geometry {
    fn intersects(&self, other: &Geometry) -> Result<bool, PlanarGeometryError> {
        Ok(has_intersection(self, other)?.0)
    }
}

/// Whether the two geometries share at least one location, and the highest
/// dimension over all pairwise contacts.
pub fn has_intersection(
    g1: &Geometry,
    g2: &Geometry,
) -> Result<(bool, usize), PlanarGeometryError> {
    if g2.is_empty() || g1.is_empty() {
        return Ok((false, 0));
    }

    let (g1, g2) = if g1.rank() > g2.rank() {
        (g2, g1)
    } else {
        (g1, g2)
    };

    match (g1, g2) {
        (Geometry::Point(pt1), Geometry::Point(pt2)) => Ok((pt1.xy() == pt2.xy(), 0)),
        (Geometry::Point(pt), Geometry::Line(ln)) => Ok((point_intersects_line(pt, ln), 0)),
        (Geometry::Point(pt), Geometry::LineString(ls)) => {
            Ok((ls.segments().any(|seg| point_intersects_line(pt, &seg)), 0))
        }
        (Geometry::Point(pt), Geometry::Polygon(py)) => {
            Ok((point_intersects_polygon(pt, py), 0))
        }
        (Geometry::Point(pt), Geometry::MultiPoint(mp)) => {
            Ok((mp.points().any(|member| member.xy() == pt.xy()), 0))
        }

        (Geometry::Line(ln1), Geometry::Line(ln2)) => Ok(line_has_intersection(ln1, ln2)),
        (Geometry::Line(ln), Geometry::MultiPoint(mp)) => Ok((
            mp.points()
                .filter_map(|pt| pt.xy())
                .any(|xy| point_on_segment(xy, ln.start_xy(), ln.end_xy())),
            0,
        )),

        (Geometry::LineString(ls1), Geometry::LineString(ls2)) => {
            Ok(curves_have_intersection(&[ls1], &[ls2]))
        }
        (Geometry::LineString(ls), Geometry::LinearRing(lr)) => {
            Ok(curves_have_intersection(&[ls], &[lr.line_string()]))
        }
        (Geometry::LineString(ls), Geometry::MultiLineString(mls)) => Ok(
            curves_have_intersection(&[ls], &mls.line_strings().collect::<Vec<_>>()),
        ),
        (Geometry::LinearRing(lr1), Geometry::LinearRing(lr2)) => Ok(curves_have_intersection(
            &[lr1.line_string()],
            &[lr2.line_string()],
        )),
        (Geometry::LinearRing(lr), Geometry::MultiLineString(mls)) => {
            Ok(curves_have_intersection(
                &[lr.line_string()],
                &mls.line_strings().collect::<Vec<_>>(),
            ))
        }

        (Geometry::Polygon(py), Geometry::MultiPoint(mp)) => Ok((
            mp.points().any(|pt| point_intersects_polygon(pt, py)),
            0,
        )),

        (Geometry::MultiPoint(mp1), Geometry::MultiPoint(mp2)) => Ok((
            mp1.points()
                .filter_map(|p| p.xy())
                .any(|xy| mp2.points().any(|other| other.xy() == Some(xy))),
            0,
        )),

        (Geometry::MultiLineString(mls1), Geometry::MultiLineString(mls2)) => {
            Ok(curves_have_intersection(
                &mls1.line_strings().collect::<Vec<_>>(),
                &mls2.line_strings().collect::<Vec<_>>(),
            ))
        }

        (g1, g2) => Err(PlanarGeometryError::NotImplemented(
            g1.type_name(),
            g2.type_name(),
        )),
    }
}

fn point_intersects_line(pt: &Point, ln: &Line) -> bool {
    match pt.xy() {
        Some(xy) => point_on_segment(xy, ln.start_xy(), ln.end_xy()),
        None => false,
    }
}

fn point_intersects_polygon(pt: &Point, py: &Polygon) -> bool {
    let xy = match pt.xy() {
        Some(xy) => xy,
        None => return false,
    };
    if point_ring_side(xy, py.exterior_ring().segment_coords()) == RingSide::Exterior {
        return false;
    }
    for i in 0..py.num_interior_rings() {
        if point_ring_side(xy, py.interior_ring_n(i).segment_coords()) == RingSide::Interior {
            return false;
        }
    }
    true
}

fn line_has_intersection(ln1: &Line, ln2: &Line) -> (bool, usize) {
    let contact = segment_intersection(
        ln1.start_xy(),
        ln1.end_xy(),
        ln2.start_xy(),
        ln2.end_xy(),
    );
    match contact {
        SegmentIntersection::Empty => (false, 0),
        _ => (true, contact.dimension()),
    }
}

/// Every segment pair must be visited, because a later collinear overlap
/// raises the reported dimension even after a point contact was found.
fn curves_have_intersection(a: &[&LineString], b: &[&LineString]) -> (bool, usize) {
    let mut intersects = false;
    let mut dimension = 0;
    for ls1 in a {
        for seg1 in ls1.segments() {
            for ls2 in b {
                for seg2 in ls2.segments() {
                    let (inter, dim) = line_has_intersection(&seg1, &seg2);
                    if inter {
                        intersects = true;
                        if dim > dimension {
                            dimension = dim;
                        }
                    }
                }
            }
        }
    }
    (intersects, dimension)
}

#[cfg(test)]
mod test {
    use super::*;

    fn geom(wkt: &str) -> Geometry {
        Geometry::from_wkt(wkt).unwrap()
    }

    #[test]
    fn empty_inputs_never_intersect() {
        let (inter, dim) =
            has_intersection(&geom("POINT EMPTY"), &geom("POINT(1 2)")).unwrap();
        assert!(!inter);
        assert_eq!(dim, 0);
    }

    #[test]
    fn dimension_reports_the_highest_contact() {
        let (inter, dim) = has_intersection(
            &geom("LINESTRING(0 0,1 1)"),
            &geom("LINESTRING(1 0,0 1)"),
        )
        .unwrap();
        assert!(inter);
        assert_eq!(dim, 0);

        let (inter, dim) = has_intersection(
            &geom("LINESTRING(1 0,2 0)"),
            &geom("LINESTRING(0 0,3 0)"),
        )
        .unwrap();
        assert!(inter);
        assert_eq!(dim, 1);

        // A touch at a point and an overlap elsewhere: the overlap wins.
        let (inter, dim) = has_intersection(
            &geom("LINESTRING(0 0,1 0,0 1,0 0)"),
            &geom("LINESTRING(0 0,1 0,1 1,0 1)"),
        )
        .unwrap();
        assert!(inter);
        assert_eq!(dim, 1);
    }

    #[test]
    fn point_on_polygon_boundary_intersects() {
        let py = geom("POLYGON((0 0,5 0,5 3,0 3,0 0),(1 1,2 1,2 2,1 2,1 1))");
        assert!(geom("POINT(5 3)").intersects(&py).unwrap());
        assert!(geom("POINT(1 1)").intersects(&py).unwrap());
        assert!(!geom("POINT(1.5 1.5)").intersects(&py).unwrap());
        assert!(!geom("POINT(6 2)").intersects(&py).unwrap());
    }

    #[test]
    fn unsupported_pairs_error() {
        let err = geom("POLYGON((0 0,1 0,0 1,0 0))")
            .intersects(&geom("POLYGON((0 0,1 0,0 1,0 0))"))
            .unwrap_err();
        assert_eq!(err.to_string(), "not implemented: Polygon with Polygon");
    }
}
