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
//! Canonicalisation of heterogeneous point/segment result sets.
//!
//! The kernel's pairwise segment walks produce an arbitrary bag of points
//! and overlap segments. Canonicalisation deduplicates both, removes
//! points already covered by a segment, and projects the remainder onto
//! the narrowest constructor. Adjacent collinear segments are kept split
//! rather than merged, so the output mirrors the contributing segment
//! pairs.
use std::collections::HashSet;

use geo_traits::Dimensions;

use planar_geometry::error::PlanarGeometryError;
use planar_geometry::geometry::{
    Geometry, GeometryCollection, Line, MultiLineString, MultiPoint, Point,
};
use planar_geometry::predicates::point_on_segment;

/// Reduce a collection of point and segment shaped geometries to canonical
/// form. Members may be Point, Line, MultiPoint, LineString,
/// MultiLineString or nested collections of those; anything area shaped is
/// an error.
pub fn canonicalise(collection: Vec<Geometry>) -> Result<Geometry, PlanarGeometryError> {
    let mut points: Vec<Point> = Vec::new();
    let mut lines: Vec<Line> = Vec::new();
    flatten(collection, &mut points, &mut lines)?;
    canonical_points_and_lines(points, lines)
}

fn flatten(
    collection: Vec<Geometry>,
    points: &mut Vec<Point>,
    lines: &mut Vec<Line>,
) -> Result<(), PlanarGeometryError> {
    for member in collection {
        match member {
            Geometry::Point(pt) => {
                if !pt.is_empty() {
                    points.push(pt);
                }
            }
            Geometry::Line(ln) => lines.push(ln),
            Geometry::MultiPoint(mp) => {
                points.extend(mp.points().filter(|pt| !pt.is_empty()).copied())
            }
            Geometry::LineString(ls) => lines.extend(ls.segments()),
            Geometry::MultiLineString(mls) => {
                for ls in mls.line_strings() {
                    lines.extend(ls.segments());
                }
            }
            Geometry::GeometryCollection(gc) => {
                flatten(gc.geometries().cloned().collect(), points, lines)?
            }
            other => {
                return Err(PlanarGeometryError::Invalid(format!(
                    "cannot canonicalise a {}",
                    other.type_name()
                )))
            }
        }
    }
    Ok(())
}

/// The canonical form of a bag of points and segments.
pub fn canonical_points_and_lines(
    points: Vec<Point>,
    lines: Vec<Line>,
) -> Result<Geometry, PlanarGeometryError> {
    let points = dedup_points(points);
    let lines = dedup_lines(lines);

    // Remove any points that are covered by segments.
    let points: Vec<Point> = points
        .into_iter()
        .filter(|pt| match pt.xy() {
            Some(xy) => !lines
                .iter()
                .any(|ln| point_on_segment(xy, ln.start_xy(), ln.end_xy())),
            None => false,
        })
        .collect();

    match (points.len(), lines.len()) {
        (0, 0) => Ok(GeometryCollection::empty(Dimensions::Xy).into()),
        (1, 0) => Ok(points[0].into()),
        (_, 0) => Ok(MultiPoint::try_new(points)?.into()),
        (0, 1) => Ok(lines[0].into()),
        (0, _) => {
            let members = lines.iter().map(Line::as_line_string).collect();
            Ok(MultiLineString::try_new(members)?.into())
        }
        _ => {
            let mut members: Vec<Geometry> = Vec::with_capacity(points.len() + lines.len());
            members.extend(points.into_iter().map(Geometry::from));
            members.extend(lines.into_iter().map(Geometry::from));
            Ok(GeometryCollection::try_new(members)?.into())
        }
    }
}

fn dedup_points(pts: Vec<Point>) -> Vec<Point> {
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut dedup = Vec::with_capacity(pts.len());
    for pt in pts {
        match pt.xy() {
            Some(xy) => {
                if seen.insert(xy.to_bits()) {
                    dedup.push(pt);
                }
            }
            None => {}
        }
    }
    dedup
}

fn dedup_lines(lines: Vec<Line>) -> Vec<Line> {
    let mut seen: HashSet<((u64, u64), (u64, u64))> = HashSet::new();
    let mut dedup = Vec::with_capacity(lines.len());
    for ln in lines {
        let (a, b) = (ln.start_xy(), ln.end_xy());
        // Key on the unordered endpoint pair.
        let key = if b.less(&a) {
            (b.to_bits(), a.to_bits())
        } else {
            (a.to_bits(), b.to_bits())
        };
        if seen.insert(key) {
            dedup.push(ln);
        }
    }
    dedup
}

#[cfg(test)]
mod test {
    use super::*;
    use planar_geometry::coord::{Coordinates, Xy};

    fn pt(x: f64, y: f64) -> Point {
        Point::from_xy(Xy::new(x, y))
    }

    fn ln(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
        Line::try_new(Coordinates::new(x1, y1), Coordinates::new(x2, y2)).unwrap()
    }

    #[test]
    fn nothing_becomes_the_empty_collection() {
        let g = canonical_points_and_lines(Vec::new(), Vec::new()).unwrap();
        assert_eq!(g.to_wkt(), "GEOMETRYCOLLECTION EMPTY");
    }

    #[test]
    fn narrowest_constructor_is_chosen() {
        let g = canonical_points_and_lines(vec![pt(1.0, 2.0)], Vec::new()).unwrap();
        assert_eq!(g.to_wkt(), "POINT(1 2)");

        let g =
            canonical_points_and_lines(vec![pt(1.0, 2.0), pt(3.0, 4.0)], Vec::new()).unwrap();
        assert_eq!(g.to_wkt(), "MULTIPOINT((1 2),(3 4))");

        let g = canonical_points_and_lines(Vec::new(), vec![ln(0.0, 0.0, 1.0, 0.0)]).unwrap();
        assert_eq!(g.to_wkt(), "LINESTRING(0 0,1 0)");

        let g = canonical_points_and_lines(
            Vec::new(),
            vec![ln(0.0, 0.0, 1.0, 0.0), ln(2.0, 0.0, 3.0, 0.0)],
        )
        .unwrap();
        assert_eq!(g.to_wkt(), "MULTILINESTRING((0 0,1 0),(2 0,3 0))");

        let g = canonical_points_and_lines(vec![pt(9.0, 9.0)], vec![ln(0.0, 0.0, 1.0, 0.0)])
            .unwrap();
        assert_eq!(
            g.to_wkt(),
            "GEOMETRYCOLLECTION(POINT(9 9),LINESTRING(0 0,1 0))"
        );
    }

    #[test]
    fn duplicate_points_and_segments_are_removed() {
        let g = canonical_points_and_lines(
            vec![pt(1.0, 2.0), pt(1.0, 2.0)],
            vec![ln(0.0, 0.0, 1.0, 0.0), ln(1.0, 0.0, 0.0, 0.0)],
        )
        .unwrap();
        // The point (1, 2) survives; the reversed duplicate segment does not.
        assert_eq!(
            g.to_wkt(),
            "GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 0))"
        );
    }

    #[test]
    fn points_covered_by_segments_are_dropped() {
        let g = canonical_points_and_lines(
            vec![pt(0.5, 0.0), pt(1.0, 0.0), pt(2.0, 2.0)],
            vec![ln(0.0, 0.0, 1.0, 0.0)],
        )
        .unwrap();
        assert_eq!(
            g.to_wkt(),
            "GEOMETRYCOLLECTION(POINT(2 2),LINESTRING(0 0,1 0))"
        );
    }

    #[test]
    fn canonicalisation_is_idempotent() {
        let once = canonical_points_and_lines(
            vec![pt(0.5, 0.0), pt(9.0, 9.0)],
            vec![ln(0.0, 0.0, 1.0, 0.0), ln(1.0, 0.0, 0.0, 0.0)],
        )
        .unwrap();
        let twice = canonicalise(vec![once.clone()]).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn area_shaped_members_are_rejected() {
        let py = Geometry::from_wkt("POLYGON((0 0,1 0,0 1,0 0))").unwrap();
        let err = canonicalise(vec![py]).unwrap_err();
        assert_eq!(err.to_string(), "cannot canonicalise a Polygon");
    }
}
