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
//! Centroids of the XY projection.
//!
//! Lineal centroids weight each segment midpoint by segment length; areal
//! centroids use the ring integral with negative weights for holes. The
//! centroid is undefined (None) when the weighting measure degenerates to
//! zero, and for heterogeneous collections.
use planar_geometry::coord::Xy;
use planar_geometry::geometry::{
    Geometry, Line, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

use crate::length::Length;

pub trait Centroid {
    fn centroid(&self) -> Option<Point>;
}

impl Centroid for Point {
    fn centroid(&self) -> Option<Point> {
        self.xy().map(Point::from_xy)
    }
}

impl Centroid for Line {
    fn centroid(&self) -> Option<Point> {
        Some(Point::from_xy(
            (self.start_xy() + self.end_xy()).scale(0.5),
        ))
    }
}

impl Centroid for LineString {
    fn centroid(&self) -> Option<Point> {
        let (sum, total_length) = weighted_midpoint_sum(self);
        if total_length == 0.0 {
            return None;
        }
        Some(Point::from_xy(sum.scale(1.0 / total_length)))
    }
}

impl Centroid for MultiPoint {
    fn centroid(&self) -> Option<Point> {
        let mut sum = Xy::default();
        let mut count = 0_usize;
        for xy in self.points().filter_map(|pt| pt.xy()) {
            sum = sum + xy;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        Some(Point::from_xy(sum.scale(1.0 / count as f64)))
    }
}

impl Centroid for MultiLineString {
    fn centroid(&self) -> Option<Point> {
        let mut sum = Xy::default();
        let mut total_length = 0.0;
        for ls in self.line_strings() {
            let (member_sum, member_length) = weighted_midpoint_sum(ls);
            sum = sum + member_sum;
            total_length += member_length;
        }
        if total_length == 0.0 {
            return None;
        }
        Some(Point::from_xy(sum.scale(1.0 / total_length)))
    }
}

impl Centroid for Polygon {
    fn centroid(&self) -> Option<Point> {
        let (sum, total_area) = weighted_ring_sum(self);
        if total_area == 0.0 {
            return None;
        }
        Some(Point::from_xy(sum.scale(1.0 / total_area)))
    }
}

impl Centroid for MultiPolygon {
    fn centroid(&self) -> Option<Point> {
        let mut sum = Xy::default();
        let mut total_area = 0.0;
        for py in self.polygons() {
            let (member_sum, member_area) = weighted_ring_sum(py);
            sum = sum + member_sum;
            total_area += member_area;
        }
        if total_area == 0.0 {
            return None;
        }
        Some(Point::from_xy(sum.scale(1.0 / total_area)))
    }
}

impl Centroid for Geometry {
    fn centroid(&self) -> Option<Point> {
        match self {
            Geometry::Point(pt) => pt.centroid(),
            Geometry::Line(ln) => ln.centroid(),
            Geometry::LineString(ls) => ls.centroid(),
            Geometry::LinearRing(lr) => lr.line_string().centroid(),
            Geometry::Polygon(py) => py.centroid(),
            Geometry::MultiPoint(mp) => mp.centroid(),
            Geometry::MultiLineString(mls) => mls.centroid(),
            Geometry::MultiPolygon(mp) => mp.centroid(),
            Geometry::GeometryCollection(_) => None,
        }
    }
}

/// Sum of segment midpoints weighted by segment length, and the total
/// length.
fn weighted_midpoint_sum(ls: &LineString) -> (Xy, f64) {
    let mut sum = Xy::default();
    let mut total_length = 0.0;
    for seg in ls.segments() {
        let length = seg.length();
        let midpoint = (seg.start_xy() + seg.end_xy()).scale(0.5);
        sum = sum + midpoint.scale(length);
        total_length += length;
    }
    (sum, total_length)
}

/// Area-weighted centroid sum over a polygon's rings, holes weighted
/// negatively, and the enclosed area.
fn weighted_ring_sum(py: &Polygon) -> (Xy, f64) {
    let mut sum = Xy::default();
    let mut total_area = 0.0;
    for (i, ring) in py.rings().enumerate() {
        let (centroid, area) = centroid_and_area_of_ring(ring);
        let signed = if i == 0 { area } else { -area };
        sum = sum + centroid.scale(signed);
        total_area += signed;
    }
    (sum, total_area)
}

fn centroid_and_area_of_ring(ring: &LineString) -> (Xy, f64) {
    let pts = ring.coordinates();
    let n = pts.len();
    let mut x = 0.0;
    let mut y = 0.0;
    let mut area = 0.0;
    for i in 0..n {
        let pt0 = pts[i].xy;
        let pt1 = pts[(i + 1) % n].xy;
        let cross = pt0.x * pt1.y - pt1.x * pt0.y;
        x += (pt0.x + pt1.x) * cross;
        y += (pt0.y + pt1.y) * cross;
        area += cross;
    }
    area /= 2.0;
    if area == 0.0 {
        return (Xy::default(), 0.0);
    }
    (Xy::new(x / 6.0 / area, y / 6.0 / area), area.abs())
}

#[cfg(test)]
mod test {
    use super::*;

    use approx::assert_relative_eq;

    fn geom(wkt: &str) -> Geometry {
        Geometry::from_wkt(wkt).unwrap()
    }

    fn centroid_xy(wkt: &str) -> Xy {
        geom(wkt).centroid().and_then(|pt| pt.xy()).unwrap()
    }

    #[test]
    fn centroid_of_a_line_is_its_midpoint() {
        let c = centroid_xy("LINESTRING(0 0,2 2)");
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn line_string_centroid_is_length_weighted() {
        let c = centroid_xy("LINESTRING(0 0,4 0,4 2)");
        assert_relative_eq!(c.x, (2.0 * 4.0 + 4.0 * 2.0) / 6.0);
        assert_relative_eq!(c.y, (0.0 * 4.0 + 1.0 * 2.0) / 6.0);
    }

    #[test]
    fn square_centroid_is_its_center() {
        let c = centroid_xy("POLYGON((0 0,4 0,4 4,0 4,0 0))");
        assert_relative_eq!(c.x, 2.0);
        assert_relative_eq!(c.y, 2.0);
    }

    #[test]
    fn holes_pull_the_centroid_away() {
        // A hole in the right half moves the centroid left of center.
        let c = centroid_xy("POLYGON((0 0,4 0,4 4,0 4,0 0),(2 1,3 1,3 3,2 3,2 1))");
        assert!(c.x < 2.0);
        assert_relative_eq!(c.y, 2.0);
    }

    #[test]
    fn multipoint_centroid_is_the_mean() {
        let c = centroid_xy("MULTIPOINT((0 0),(2 0),(2 2),(0 2))");
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn degenerate_centroids_are_undefined() {
        assert!(geom("POINT EMPTY").centroid().is_none());
        assert!(geom("LINESTRING EMPTY").centroid().is_none());
        assert!(geom("GEOMETRYCOLLECTION(POINT(1 1))").centroid().is_none());
    }
}
