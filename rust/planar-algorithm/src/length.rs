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
use planar_geometry::geometry::{Geometry, Line, LineString, MultiLineString};

/// Euclidean length of the XY projection. Zero for puntal and areal
/// geometries.
pub trait Length {
    fn length(&self) -> f64;
}

impl Length for Line {
    fn length(&self) -> f64 {
        let dx = self.start_xy().x - self.end_xy().x;
        let dy = self.start_xy().y - self.end_xy().y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Length for LineString {
    fn length(&self) -> f64 {
        self.segments().map(|seg| seg.length()).sum()
    }
}

impl Length for MultiLineString {
    fn length(&self) -> f64 {
        self.line_strings().map(|ls| ls.length()).sum()
    }
}

impl Length for Geometry {
    fn length(&self) -> f64 {
        match self {
            Geometry::Line(ln) => ln.length(),
            Geometry::LineString(ls) => ls.length(),
            Geometry::LinearRing(lr) => lr.line_string().length(),
            Geometry::MultiLineString(mls) => mls.length(),
            Geometry::GeometryCollection(gc) => gc.geometries().map(|g| g.length()).sum(),
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
    fn line_length_is_the_euclidean_distance() {
        assert_relative_eq!(geom("LINESTRING(0 0,3 4)").length(), 5.0);
    }

    #[test]
    fn line_string_length_sums_segments() {
        assert_relative_eq!(geom("LINESTRING(0 0,1 0,1 1)").length(), 2.0);
        assert_relative_eq!(geom("LINESTRING EMPTY").length(), 0.0);
    }

    #[test]
    fn multi_line_string_length_sums_members() {
        assert_relative_eq!(
            geom("MULTILINESTRING((0 0,1 0),(0 0,0 2))").length(),
            3.0
        );
    }

    #[test]
    fn puntal_and_areal_geometries_have_zero_length() {
        assert_relative_eq!(geom("POINT(1 2)").length(), 0.0);
        assert_relative_eq!(geom("POLYGON((0 0,1 0,0 1,0 0))").length(), 0.0);
    }
}
