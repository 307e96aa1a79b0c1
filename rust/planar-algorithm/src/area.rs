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
use planar_geometry::geometry::{Geometry, LineString, MultiPolygon, Polygon};

/// Planar area of the XY projection. Zero for puntal and lineal
/// geometries.
pub trait Area {
    /// The area of a polygon is its outer ring's area minus the areas of
    /// all inner rings. Always non-negative.
    fn area(&self) -> f64;

    /// Positive when outer rings wind counter-clockwise and inner rings
    /// wind clockwise; negative for the reverse winding. Inconsistent
    /// windings give an inconsistent result.
    fn signed_area(&self) -> f64;
}

/// Shoelace formula over a closed ring.
pub(crate) fn signed_area_of_ring(ring: &LineString) -> f64 {
    let pts = ring.coordinates();
    let n = pts.len();
    let mut sum = 0.0;
    for i in 0..n {
        let pt0 = pts[i].xy;
        let pt1 = pts[(i + 1) % n].xy;
        sum += (pt1.x + pt0.x) * (pt1.y - pt0.y);
    }
    sum / 2.0
}

impl Area for Polygon {
    fn area(&self) -> f64 {
        let mut area = signed_area_of_ring(self.exterior_ring()).abs();
        for i in 0..self.num_interior_rings() {
            area -= signed_area_of_ring(self.interior_ring_n(i)).abs();
        }
        area
    }

    fn signed_area(&self) -> f64 {
        self.rings().map(signed_area_of_ring).sum()
    }
}

impl Area for MultiPolygon {
    fn area(&self) -> f64 {
        self.polygons().map(|py| py.area()).sum()
    }

    fn signed_area(&self) -> f64 {
        self.polygons().map(|py| py.signed_area()).sum()
    }
}

impl Area for Geometry {
    fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(py) => py.area(),
            Geometry::MultiPolygon(mp) => mp.area(),
            Geometry::LinearRing(lr) => signed_area_of_ring(lr.line_string()).abs(),
            Geometry::GeometryCollection(gc) => gc.geometries().map(|g| g.area()).sum(),
            _ => 0.0,
        }
    }

    fn signed_area(&self) -> f64 {
        match self {
            Geometry::Polygon(py) => py.signed_area(),
            Geometry::MultiPolygon(mp) => mp.signed_area(),
            Geometry::LinearRing(lr) => signed_area_of_ring(lr.line_string()),
            Geometry::GeometryCollection(gc) => gc.geometries().map(|g| g.signed_area()).sum(),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use approx::assert_relative_eq;

    fn geom(wkt: &str) -> Geometry {
        Geometry::from_wkt(wkt).unwrap()
    }

    #[test]
    fn area_of_a_square() {
        assert_relative_eq!(geom("POLYGON((0 0,4 0,4 4,0 4,0 0))").area(), 16.0);
    }

    #[test]
    fn holes_are_subtracted() {
        let py = geom("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 2,1 1))");
        assert_relative_eq!(py.area(), 15.0);
    }

    #[test]
    fn signed_area_follows_winding() {
        // Counter-clockwise shell.
        assert_relative_eq!(geom("POLYGON((0 0,4 0,4 4,0 4,0 0))").signed_area(), 16.0);
        // Clockwise shell.
        assert_relative_eq!(geom("POLYGON((0 0,0 4,4 4,4 0,0 0))").signed_area(), -16.0);
        // Counter-clockwise shell with a clockwise hole.
        let py = geom("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,1 2,2 2,2 1,1 1))");
        assert_relative_eq!(py.signed_area(), 15.0);
    }

    #[test]
    fn multi_polygon_area_sums_members() {
        let mp = geom("MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),((5 5,7 5,7 7,5 7,5 5)))");
        assert_relative_eq!(mp.area(), 5.0);
    }

    #[test]
    fn lineal_geometries_have_zero_area() {
        assert_relative_eq!(geom("LINESTRING(0 0,1 0,1 1)").area(), 0.0);
        assert_relative_eq!(geom("POINT(1 2)").area(), 0.0);
    }
}
