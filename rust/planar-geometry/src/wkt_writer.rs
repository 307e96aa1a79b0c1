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
//! Appender for the well-known text form.
//!
//! A container with no members at all serializes as `EMPTY`; a container
//! whose members are all empty keeps them spelled out (`MULTIPOINT(EMPTY)`),
//! so the distinction survives a round-trip.
use std::fmt::Write as _;

use geo_traits::Dimensions;

use crate::coord::Coordinates;
use crate::geometry::{Geometry, LineString, Polygon};

pub fn write_wkt(g: &Geometry) -> String {
    let mut out = String::new();
    append_geometry(&mut out, g);
    out
}

fn append_geometry(out: &mut String, g: &Geometry) {
    match g {
        Geometry::Point(pt) => {
            if append_header(out, "POINT", pt.dimensions(), pt.is_empty()) {
                out.push('(');
                if let Some(coords) = pt.coordinates() {
                    append_coordinates(out, coords);
                }
                out.push(')');
            }
        }
        Geometry::Line(ln) => {
            if append_header(out, "LINESTRING", ln.dimensions(), false) {
                out.push('(');
                append_coordinates(out, ln.start());
                out.push(',');
                append_coordinates(out, ln.end());
                out.push(')');
            }
        }
        Geometry::LineString(ls) => {
            if append_header(out, "LINESTRING", ls.dimensions(), ls.is_empty()) {
                append_line_string_body(out, ls);
            }
        }
        Geometry::LinearRing(lr) => {
            let ls = lr.line_string();
            if append_header(out, "LINESTRING", ls.dimensions(), ls.is_empty()) {
                append_line_string_body(out, ls);
            }
        }
        Geometry::Polygon(py) => {
            if append_header(out, "POLYGON", py.dimensions(), py.is_empty()) {
                append_polygon_body(out, py);
            }
        }
        Geometry::MultiPoint(mp) => {
            if append_header(out, "MULTIPOINT", mp.dimensions(), mp.num_points() == 0) {
                out.push('(');
                for (i, pt) in mp.points().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    match pt.coordinates() {
                        Some(coords) => {
                            out.push('(');
                            append_coordinates(out, coords);
                            out.push(')');
                        }
                        None => out.push_str("EMPTY"),
                    }
                }
                out.push(')');
            }
        }
        Geometry::MultiLineString(mls) => {
            if append_header(
                out,
                "MULTILINESTRING",
                mls.dimensions(),
                mls.num_line_strings() == 0,
            ) {
                out.push('(');
                for (i, ls) in mls.line_strings().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if ls.is_empty() {
                        out.push_str("EMPTY");
                    } else {
                        append_line_string_body(out, ls);
                    }
                }
                out.push(')');
            }
        }
        Geometry::MultiPolygon(mp) => {
            if append_header(out, "MULTIPOLYGON", mp.dimensions(), mp.num_polygons() == 0) {
                out.push('(');
                for (i, py) in mp.polygons().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    if py.is_empty() {
                        out.push_str("EMPTY");
                    } else {
                        append_polygon_body(out, py);
                    }
                }
                out.push(')');
            }
        }
        Geometry::GeometryCollection(gc) => {
            if append_header(
                out,
                "GEOMETRYCOLLECTION",
                gc.dimensions(),
                gc.num_geometries() == 0,
            ) {
                out.push('(');
                for (i, member) in gc.geometries().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    append_geometry(out, member);
                }
                out.push(')');
            }
        }
    }
}

/// Append the tag and dimension suffix. Returns false when the geometry is
/// empty, in which case ` EMPTY` has been appended and no body follows.
fn append_header(out: &mut String, tag: &str, dims: Dimensions, is_empty: bool) -> bool {
    out.push_str(tag);
    match dims {
        Dimensions::Xy | Dimensions::Unknown(_) => {}
        Dimensions::Xyz => out.push_str(" Z"),
        Dimensions::Xym => out.push_str(" M"),
        Dimensions::Xyzm => out.push_str(" ZM"),
    }
    if is_empty {
        out.push_str(" EMPTY");
        return false;
    }
    if !matches!(dims, Dimensions::Xy) {
        out.push(' ');
    }
    true
}

fn append_line_string_body(out: &mut String, ls: &LineString) {
    out.push('(');
    for i in 0..ls.num_points() {
        if i > 0 {
            out.push(',');
        }
        append_coordinates(out, ls.point_n(i));
    }
    out.push(')');
}

fn append_polygon_body(out: &mut String, py: &Polygon) {
    out.push('(');
    for (i, ring) in py.rings().enumerate() {
        if i > 0 {
            out.push(',');
        }
        append_line_string_body(out, ring);
    }
    out.push(')');
}

fn append_coordinates(out: &mut String, coords: Coordinates) {
    append_float(out, coords.xy.x);
    out.push(' ');
    append_float(out, coords.xy.y);
    if let Some(z) = coords.z {
        out.push(' ');
        append_float(out, z);
    }
    if let Some(m) = coords.m {
        out.push(' ');
        append_float(out, m);
    }
}

/// The shortest decimal representation that parses back to the same float.
fn append_float(out: &mut String, value: f64) {
    let _ = write!(out, "{value}");
}

#[cfg(test)]
mod test {
    use crate::geometry::Geometry;

    use rstest::rstest;

    #[rstest]
    #[case("POINT(30 10)")]
    #[case("POINT EMPTY")]
    #[case("POINT Z (30 10 20)")]
    #[case("POINT ZM (30 10 20 40)")]
    #[case("LINESTRING(30 10,10 30,40 40)")]
    #[case("POLYGON((35 10,45 45,15 40,10 20,35 10),(20 30,35 35,30 20,20 30))")]
    #[case("MULTIPOINT((10 40),(40 30),EMPTY)")]
    #[case("MULTIPOINT(EMPTY)")]
    #[case("MULTIPOINT EMPTY")]
    #[case("MULTILINESTRING((1 2,3 4,5 6),EMPTY)")]
    #[case("MULTIPOLYGON(EMPTY)")]
    #[case("GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))")]
    #[case("GEOMETRYCOLLECTION EMPTY")]
    fn wkt_round_trips(#[case] wkt: &str) {
        let g = Geometry::from_wkt(wkt).unwrap();
        assert_eq!(g.to_wkt(), wkt);
    }

    #[test]
    fn shortest_float_formatting() {
        let g = Geometry::from_wkt("POINT(0.1 1e-3)").unwrap();
        assert_eq!(g.to_wkt(), "POINT(0.1 0.001)");
    }

    #[test]
    fn bare_multipoint_points_are_parenthesised_on_output() {
        let g = Geometry::from_wkt("MULTIPOINT(1 2,3 4)").unwrap();
        assert_eq!(g.to_wkt(), "MULTIPOINT((1 2),(3 4))");
    }
}
