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
//! Well-known binary writer.
//!
//! Output is always little-endian and uses ISO type codes (the base code
//! plus 1000/2000/3000 for Z/M/ZM). An empty point encodes each ordinate as
//! a quiet NaN; every other empty geometry is a zero count.
use std::io::Write;

use geo_traits::Dimensions;

use crate::coord::Coordinates;
use crate::error::PlanarGeometryError;
use crate::geometry::{Geometry, LineString, Point, Polygon};
use crate::types::{GeometryTypeAndDimensions, GeometryTypeId};

pub fn write_wkb(g: &Geometry, buf: &mut impl Write) -> Result<(), PlanarGeometryError> {
    match g {
        Geometry::Point(pt) => write_point(buf, pt),
        Geometry::Line(ln) => {
            write_header(buf, GeometryTypeId::LineString, ln.dimensions())?;
            write_count(buf, 2)?;
            write_coordinates(buf, ln.start())?;
            write_coordinates(buf, ln.end())
        }
        Geometry::LineString(ls) => write_line_string(buf, ls),
        Geometry::LinearRing(lr) => write_line_string(buf, lr.line_string()),
        Geometry::Polygon(py) => write_polygon(buf, py),
        Geometry::MultiPoint(mp) => {
            write_header(buf, GeometryTypeId::MultiPoint, mp.dimensions())?;
            write_count(buf, mp.num_points())?;
            for pt in mp.points() {
                write_point(buf, pt)?;
            }
            Ok(())
        }
        Geometry::MultiLineString(mls) => {
            write_header(buf, GeometryTypeId::MultiLineString, mls.dimensions())?;
            write_count(buf, mls.num_line_strings())?;
            for ls in mls.line_strings() {
                write_line_string(buf, ls)?;
            }
            Ok(())
        }
        Geometry::MultiPolygon(mp) => {
            write_header(buf, GeometryTypeId::MultiPolygon, mp.dimensions())?;
            write_count(buf, mp.num_polygons())?;
            for py in mp.polygons() {
                write_polygon(buf, py)?;
            }
            Ok(())
        }
        Geometry::GeometryCollection(gc) => {
            write_header(buf, GeometryTypeId::GeometryCollection, gc.dimensions())?;
            write_count(buf, gc.num_geometries())?;
            for member in gc.geometries() {
                write_wkb(member, buf)?;
            }
            Ok(())
        }
    }
}

fn write_header(
    buf: &mut impl Write,
    type_id: GeometryTypeId,
    dims: Dimensions,
) -> Result<(), PlanarGeometryError> {
    // 0x01 flags little-endian byte order.
    buf.write_all(&[0x01])?;
    let code = GeometryTypeAndDimensions::new(type_id, dims).wkb_id();
    buf.write_all(&code.to_le_bytes())?;
    Ok(())
}

fn write_count(buf: &mut impl Write, count: usize) -> Result<(), PlanarGeometryError> {
    let count: u32 = count.try_into().map_err(|_| {
        PlanarGeometryError::Invalid("geometry has too many elements for WKB".to_string())
    })?;
    buf.write_all(&count.to_le_bytes())?;
    Ok(())
}

fn write_coordinates(
    buf: &mut impl Write,
    coords: Coordinates,
) -> Result<(), PlanarGeometryError> {
    buf.write_all(&coords.xy.x.to_le_bytes())?;
    buf.write_all(&coords.xy.y.to_le_bytes())?;
    if let Some(z) = coords.z {
        buf.write_all(&z.to_le_bytes())?;
    }
    if let Some(m) = coords.m {
        buf.write_all(&m.to_le_bytes())?;
    }
    Ok(())
}

fn write_point(buf: &mut impl Write, pt: &Point) -> Result<(), PlanarGeometryError> {
    write_header(buf, GeometryTypeId::Point, pt.dimensions())?;
    match pt.coordinates() {
        Some(coords) => write_coordinates(buf, coords),
        None => {
            for _ in 0..crate::coord::ordinate_count(pt.dimensions()) {
                buf.write_all(&f64::NAN.to_le_bytes())?;
            }
            Ok(())
        }
    }
}

fn write_line_string(buf: &mut impl Write, ls: &LineString) -> Result<(), PlanarGeometryError> {
    write_header(buf, GeometryTypeId::LineString, ls.dimensions())?;
    write_count(buf, ls.num_points())?;
    for i in 0..ls.num_points() {
        write_coordinates(buf, ls.point_n(i))?;
    }
    Ok(())
}

fn write_polygon(buf: &mut impl Write, py: &Polygon) -> Result<(), PlanarGeometryError> {
    write_header(buf, GeometryTypeId::Polygon, py.dimensions())?;
    if py.is_empty() {
        return write_count(buf, 0);
    }
    write_count(buf, 1 + py.num_interior_rings())?;
    for ring in py.rings() {
        write_count(buf, ring.num_points())?;
        for i in 0..ring.num_points() {
            write_coordinates(buf, ring.point_n(i))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::geometry::Geometry;

    #[test]
    fn point_layout() {
        let wkb = Geometry::from_wkt("POINT(1 2)").unwrap().to_wkb().unwrap();
        assert_eq!(wkb.len(), 21);
        assert_eq!(&wkb[..5], &[0x01, 0x01, 0x00, 0x00, 0x00]);
        assert_eq!(&wkb[5..13], &1.0_f64.to_le_bytes());
        assert_eq!(&wkb[13..21], &2.0_f64.to_le_bytes());
    }

    #[test]
    fn empty_point_encodes_nan_ordinates() {
        let wkb = Geometry::from_wkt("POINT EMPTY").unwrap().to_wkb().unwrap();
        assert_eq!(wkb.len(), 21);
        let x = f64::from_le_bytes(wkb[5..13].try_into().unwrap());
        let y = f64::from_le_bytes(wkb[13..21].try_into().unwrap());
        assert!(x.is_nan() && y.is_nan());
    }

    #[test]
    fn iso_code_carries_dimensions() {
        let wkb = Geometry::from_wkt("LINESTRING Z (0 0 0,1 1 1)")
            .unwrap()
            .to_wkb()
            .unwrap();
        let code = u32::from_le_bytes(wkb[1..5].try_into().unwrap());
        assert_eq!(code, 1002);
    }

    #[test]
    fn empty_line_string_is_a_zero_count() {
        let wkb = Geometry::from_wkt("LINESTRING EMPTY")
            .unwrap()
            .to_wkb()
            .unwrap();
        assert_eq!(wkb, vec![0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn collection_members_are_complete_wkb_values() {
        let wkb = Geometry::from_wkt("GEOMETRYCOLLECTION(POINT(4 6))")
            .unwrap()
            .to_wkb()
            .unwrap();
        assert_eq!(&wkb[..5], &[0x01, 0x07, 0x00, 0x00, 0x00]);
        assert_eq!(&wkb[5..9], &1_u32.to_le_bytes());
        assert_eq!(&wkb[9..14], &[0x01, 0x01, 0x00, 0x00, 0x00]);
    }
}
