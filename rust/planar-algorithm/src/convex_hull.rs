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
//! Convex hull by monotone chain over the orientation predicate.
//!
//! The result takes the narrowest shape that can represent the hull: the
//! empty collection for no input locations, a Point for a single distinct
//! location, a Line when every location is collinear, and otherwise a
//! counter-clockwise Polygon shell.
use geo_traits::Dimensions;

use planar_geometry::coord::{Coordinates, Xy};
use planar_geometry::error::PlanarGeometryError;
use planar_geometry::geometry::{Geometry, GeometryCollection, Line, Point, Polygon, Validations};
use planar_geometry::predicates::{orient2d, Orientation};

pub trait ConvexHull {
    fn convex_hull(&self) -> Result<Geometry, PlanarGeometryError>;
}

impl ConvexHull for Geometry {
    fn convex_hull(&self) -> Result<Geometry, PlanarGeometryError> {
        let mut pts: Vec<Xy> = Vec::new();
        collect_xys(self, &mut pts);
        let hull = monotone_chain(pts);
        match hull.len() {
            0 => Ok(GeometryCollection::empty(Dimensions::Xy).into()),
            1 => Ok(Point::from_xy(hull[0]).into()),
            2 => Ok(Line::try_new(Coordinates::xy(hull[0]), Coordinates::xy(hull[1]))?.into()),
            _ => {
                let mut ring: Vec<Coordinates> =
                    hull.iter().copied().map(Coordinates::xy).collect();
                ring.push(Coordinates::xy(hull[0]));
                // The chain is convex, so the expensive simplicity check
                // cannot fail and is skipped.
                Ok(Polygon::try_from_coordinates(vec![ring], Validations::CheapOnly)?.into())
            }
        }
    }
}

fn collect_xys(g: &Geometry, out: &mut Vec<Xy>) {
    match g {
        Geometry::Point(pt) => out.extend(pt.xy()),
        Geometry::Line(ln) => {
            out.push(ln.start_xy());
            out.push(ln.end_xy());
        }
        Geometry::LineString(ls) => out.extend(ls.coordinates().iter().map(|c| c.xy)),
        Geometry::LinearRing(lr) => {
            out.extend(lr.line_string().coordinates().iter().map(|c| c.xy))
        }
        Geometry::Polygon(py) => {
            for ring in py.rings() {
                out.extend(ring.coordinates().iter().map(|c| c.xy));
            }
        }
        Geometry::MultiPoint(mp) => out.extend(mp.points().filter_map(|pt| pt.xy())),
        Geometry::MultiLineString(mls) => {
            for ls in mls.line_strings() {
                out.extend(ls.coordinates().iter().map(|c| c.xy));
            }
        }
        Geometry::MultiPolygon(mp) => {
            for py in mp.polygons() {
                for ring in py.rings() {
                    out.extend(ring.coordinates().iter().map(|c| c.xy));
                }
            }
        }
        Geometry::GeometryCollection(gc) => {
            for member in gc.geometries() {
                collect_xys(member, out);
            }
        }
    }
}

/// Andrew's monotone chain. Returns the hull vertices in counter-clockwise
/// order without repeating the first one; collinear inputs collapse to the
/// two lexicographic extremes.
fn monotone_chain(mut pts: Vec<Xy>) -> Vec<Xy> {
    pts.sort_by(Xy::lexicographic_cmp);
    pts.dedup_by(|a, b| a.to_bits() == b.to_bits());
    if pts.len() <= 2 {
        return pts;
    }

    let mut lower: Vec<Xy> = Vec::new();
    for &p in &pts {
        while lower.len() >= 2
            && orient2d(lower[lower.len() - 2], lower[lower.len() - 1], p)
                != Orientation::CounterClockwise
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Xy> = Vec::new();
    for &p in pts.iter().rev() {
        while upper.len() >= 2
            && orient2d(upper[upper.len() - 2], upper[upper.len() - 1], p)
                != Orientation::CounterClockwise
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[cfg(test)]
mod test {
    use super::*;

    fn geom(wkt: &str) -> Geometry {
        Geometry::from_wkt(wkt).unwrap()
    }

    #[test]
    fn hull_of_empty_input() {
        let g = geom("MULTIPOINT EMPTY").convex_hull().unwrap();
        assert_eq!(g.to_wkt(), "GEOMETRYCOLLECTION EMPTY");
    }

    #[test]
    fn hull_of_a_single_location() {
        let g = geom("MULTIPOINT((3 4),(3 4))").convex_hull().unwrap();
        assert_eq!(g.to_wkt(), "POINT(3 4)");
    }

    #[test]
    fn hull_of_collinear_points_is_a_line() {
        let g = geom("MULTIPOINT((0 0),(1 1),(2 2),(3 3))").convex_hull().unwrap();
        assert_eq!(g.to_wkt(), "LINESTRING(0 0,3 3)");
    }

    #[test]
    fn hull_drops_interior_points() {
        let g = geom("MULTIPOINT((0 0),(4 0),(4 4),(0 4),(2 2),(1 3))")
            .convex_hull()
            .unwrap();
        assert_eq!(g.to_wkt(), "POLYGON((0 0,4 0,4 4,0 4,0 0))");
    }

    #[test]
    fn hull_of_a_line_string() {
        let g = geom("LINESTRING(0 0,2 1,4 0,3 3)").convex_hull().unwrap();
        assert_eq!(g.to_wkt(), "POLYGON((0 0,4 0,3 3,0 0))");
    }

    #[test]
    fn hull_of_a_polygon_covers_its_holes() {
        let g = geom("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 2,1 1))")
            .convex_hull()
            .unwrap();
        assert_eq!(g.to_wkt(), "POLYGON((0 0,4 0,4 4,0 4,0 0))");
    }
}
