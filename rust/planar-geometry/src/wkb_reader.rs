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
//! Well-known binary reader.
//!
//! Input is endian-flexible: every nested geometry carries its own byte
//! order flag and is decoded accordingly. Both ISO type codes (base plus
//! 1000/2000/3000) and EWKB flag bits are understood; an EWKB SRID is read
//! and discarded.
use geo_traits::Dimensions;

use crate::coord::{ordinate_count, Coordinates};
use crate::error::PlanarGeometryError;
use crate::geometry::{
    Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Validations,
};
use crate::types::GeometryTypeId;

const Z_FLAG_BIT: u32 = 0x80000000;
const M_FLAG_BIT: u32 = 0x40000000;
const SRID_FLAG_BIT: u32 = 0x20000000;

pub fn parse_wkb(buf: &[u8], validations: Validations) -> Result<Geometry, PlanarGeometryError> {
    let mut reader = WkbBuffer::new(buf);
    let geom = reader.read_geometry(validations)?;
    if reader.remaining != 0 {
        return Err(PlanarGeometryError::Parse(format!(
            "invalid WKB: {} trailing bytes after the geometry",
            reader.remaining
        )));
    }
    Ok(geom)
}

/// Decode the dimensions of a WKB type code, accepting both the ISO
/// thousands convention and the EWKB high flag bits.
fn calc_dimensions(code: u32) -> Result<Dimensions, PlanarGeometryError> {
    let hasz = (code & Z_FLAG_BIT) != 0;
    let hasm = (code & M_FLAG_BIT) != 0;

    match (hasz, hasm) {
        (false, false) => {}
        // If either flag is set, this must be EWKB (and not ISO WKB)
        (true, false) => return Ok(Dimensions::Xyz),
        (false, true) => return Ok(Dimensions::Xym),
        (true, true) => return Ok(Dimensions::Xyzm),
    }

    // If the SRID flag is set, then it must be EWKB with no z or m
    if code & SRID_FLAG_BIT != 0 {
        return Ok(Dimensions::Xy);
    }

    match code / 1000 {
        0 => Ok(Dimensions::Xy),
        1 => Ok(Dimensions::Xyz),
        2 => Ok(Dimensions::Xym),
        3 => Ok(Dimensions::Xyzm),
        _ => Err(PlanarGeometryError::Parse(format!(
            "invalid WKB: unexpected geometry type code {code}"
        ))),
    }
}

struct WkbBuffer<'a> {
    buf: &'a [u8],
    offset: usize,
    remaining: usize,
    last_endian: u8,
}

impl<'a> WkbBuffer<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            offset: 0,
            remaining: buf.len(),
            last_endian: 0,
        }
    }

    fn read_endian(&mut self) -> Result<(), PlanarGeometryError> {
        if self.remaining < 1 {
            return Err(PlanarGeometryError::Parse(format!(
                "invalid WKB: buffer too small at offset {}, need 1 byte",
                self.offset
            )));
        }
        let endian = self.buf[self.offset];
        if endian > 1 {
            return Err(PlanarGeometryError::Parse(format!(
                "invalid WKB: unexpected byte order {endian}"
            )));
        }
        self.last_endian = endian;
        self.remaining -= 1;
        self.offset += 1;
        Ok(())
    }

    fn read_u32(&mut self) -> Result<u32, PlanarGeometryError> {
        if self.remaining < 4 {
            return Err(PlanarGeometryError::Parse(format!(
                "invalid WKB: buffer too small at offset {}, need 4 bytes",
                self.offset
            )));
        }
        let bytes: [u8; 4] = [
            self.buf[self.offset],
            self.buf[self.offset + 1],
            self.buf[self.offset + 2],
            self.buf[self.offset + 3],
        ];
        let num = match self.last_endian {
            0 => u32::from_be_bytes(bytes),
            _ => u32::from_le_bytes(bytes),
        };
        self.remaining -= 4;
        self.offset += 4;
        Ok(num)
    }

    fn read_f64(&mut self) -> Result<f64, PlanarGeometryError> {
        if self.remaining < 8 {
            return Err(PlanarGeometryError::Parse(format!(
                "invalid WKB: buffer too small at offset {}, need 8 bytes",
                self.offset
            )));
        }
        let mut bytes = [0_u8; 8];
        bytes.copy_from_slice(&self.buf[self.offset..self.offset + 8]);
        let value = match self.last_endian {
            0 => f64::from_be_bytes(bytes),
            _ => f64::from_le_bytes(bytes),
        };
        self.remaining -= 8;
        self.offset += 8;
        Ok(value)
    }

    /// Read the ordinates of one coordinate. NaN is only legal as the empty
    /// point encoding, which the caller detects before this check.
    fn read_coordinates(&mut self, dims: Dimensions) -> Result<Coordinates, PlanarGeometryError> {
        let (coords, all_nan) = self.read_raw_coordinates(dims)?;
        if all_nan {
            return Err(PlanarGeometryError::Parse(
                "invalid WKB: NaN ordinates outside of an empty point".to_string(),
            ));
        }
        Ok(coords)
    }

    fn read_raw_coordinates(
        &mut self,
        dims: Dimensions,
    ) -> Result<(Coordinates, bool), PlanarGeometryError> {
        let count = ordinate_count(dims);
        let mut values = [0.0_f64; 4];
        for value in values.iter_mut().take(count) {
            *value = self.read_f64()?;
        }
        let all_nan = values[..count].iter().all(|v| v.is_nan());
        if !all_nan && values[..count].iter().any(|v| !v.is_finite()) {
            return Err(PlanarGeometryError::Parse(
                "invalid WKB: non-finite ordinate".to_string(),
            ));
        }
        let mut coords = Coordinates::new(values[0], values[1]);
        match dims {
            Dimensions::Xy => {}
            Dimensions::Xyz => coords = coords.with_z(values[2]),
            Dimensions::Xym => coords = coords.with_m(values[2]),
            Dimensions::Xyzm => coords = coords.with_z(values[2]).with_m(values[3]),
            Dimensions::Unknown(_) => {
                return Err(PlanarGeometryError::Parse(
                    "invalid WKB: unknown coordinate dimensions".to_string(),
                ))
            }
        }
        Ok((coords, all_nan))
    }

    fn read_line_string_coords(
        &mut self,
        dims: Dimensions,
    ) -> Result<Vec<Coordinates>, PlanarGeometryError> {
        let num_points = self.read_u32()? as usize;
        let mut pts = Vec::with_capacity(num_points.min(4096));
        for _ in 0..num_points {
            pts.push(self.read_coordinates(dims)?);
        }
        Ok(pts)
    }

    fn read_geometry(
        &mut self,
        validations: Validations,
    ) -> Result<Geometry, PlanarGeometryError> {
        self.read_endian()?;
        let code = self.read_u32()?;
        let dims = calc_dimensions(code)?;
        if code & SRID_FLAG_BIT != 0 {
            // EWKB: skip the SRID.
            self.read_u32()?;
        }
        // Clear the EWKB flag bits, then strip the ISO thousands component.
        let type_id = GeometryTypeId::try_from_wkb_id((code & 0x0FFF_FFFF) % 1000)?;

        match type_id {
            GeometryTypeId::Point => {
                let (coords, all_nan) = self.read_raw_coordinates(dims)?;
                if all_nan {
                    Ok(Point::empty(dims).into())
                } else {
                    Ok(Point::new(coords).into())
                }
            }
            GeometryTypeId::LineString => {
                let pts = self.read_line_string_coords(dims)?;
                match pts.len() {
                    0 => Ok(LineString::empty(dims).into()),
                    2 => Ok(Line::try_new_with(pts[0], pts[1], validations)?.into()),
                    _ => Ok(LineString::try_new_with(pts, validations)?.into()),
                }
            }
            GeometryTypeId::Polygon => {
                let num_rings = self.read_u32()? as usize;
                if num_rings == 0 {
                    return Ok(Polygon::empty(dims).into());
                }
                let mut rings = Vec::with_capacity(num_rings.min(4096));
                for _ in 0..num_rings {
                    rings.push(self.read_line_string_coords(dims)?);
                }
                Ok(Polygon::try_from_coordinates(rings, validations)?.into())
            }
            GeometryTypeId::MultiPoint => {
                let num_points = self.read_u32()? as usize;
                let mut pts = Vec::with_capacity(num_points.min(4096));
                for _ in 0..num_points {
                    match self.read_geometry(validations)? {
                        Geometry::Point(pt) => pts.push(pt),
                        other => {
                            return Err(PlanarGeometryError::Parse(format!(
                                "invalid WKB: MultiPoint member is a {}",
                                other.type_name()
                            )))
                        }
                    }
                }
                Ok(MultiPoint::try_new_with_dim(dims, pts)?.into())
            }
            GeometryTypeId::MultiLineString => {
                let num_members = self.read_u32()? as usize;
                let mut members = Vec::with_capacity(num_members.min(4096));
                for _ in 0..num_members {
                    match self.read_geometry(validations)? {
                        Geometry::LineString(ls) => members.push(ls),
                        Geometry::Line(ln) => members.push(ln.as_line_string()),
                        other => {
                            return Err(PlanarGeometryError::Parse(format!(
                                "invalid WKB: MultiLineString member is a {}",
                                other.type_name()
                            )))
                        }
                    }
                }
                Ok(MultiLineString::try_new_with_dim(dims, members)?.into())
            }
            GeometryTypeId::MultiPolygon => {
                let num_members = self.read_u32()? as usize;
                let mut members = Vec::with_capacity(num_members.min(4096));
                for _ in 0..num_members {
                    match self.read_geometry(validations)? {
                        Geometry::Polygon(py) => members.push(py),
                        other => {
                            return Err(PlanarGeometryError::Parse(format!(
                                "invalid WKB: MultiPolygon member is a {}",
                                other.type_name()
                            )))
                        }
                    }
                }
                Ok(MultiPolygon::try_new_with_dim(dims, members, validations)?.into())
            }
            GeometryTypeId::GeometryCollection => {
                let num_members = self.read_u32()? as usize;
                let mut members = Vec::with_capacity(num_members.min(4096));
                for _ in 0..num_members {
                    members.push(self.read_geometry(validations)?);
                }
                Ok(GeometryCollection::try_new_with_dim(dims, members)?.into())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn big_endian_input_is_accepted() {
        // POINT(1 2) with big-endian byte order.
        let mut wkb: Vec<u8> = vec![0x00];
        wkb.extend_from_slice(&1_u32.to_be_bytes());
        wkb.extend_from_slice(&1.0_f64.to_be_bytes());
        wkb.extend_from_slice(&2.0_f64.to_be_bytes());

        let g = Geometry::from_wkb(&wkb).unwrap();
        assert_eq!(g.to_wkt(), "POINT(1 2)");
    }

    #[test]
    fn ewkb_flags_and_srid_are_understood() {
        // EWKB POINT Z with SRID 4326.
        let code = 1_u32 | Z_FLAG_BIT | SRID_FLAG_BIT;
        let mut wkb: Vec<u8> = vec![0x01];
        wkb.extend_from_slice(&code.to_le_bytes());
        wkb.extend_from_slice(&4326_u32.to_le_bytes());
        wkb.extend_from_slice(&1.0_f64.to_le_bytes());
        wkb.extend_from_slice(&2.0_f64.to_le_bytes());
        wkb.extend_from_slice(&3.0_f64.to_le_bytes());

        let g = Geometry::from_wkb(&wkb).unwrap();
        assert_eq!(g.to_wkt(), "POINT Z (1 2 3)");
    }

    #[test]
    fn truncated_buffers_are_rejected() {
        let wkb = Geometry::from_wkt("POINT(1 2)").unwrap().to_wkb().unwrap();
        let err = Geometry::from_wkb(&wkb[..wkb.len() - 1]).unwrap_err();
        assert!(err.to_string().starts_with("invalid WKB: buffer too small"));
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        let mut wkb = Geometry::from_wkt("POINT(1 2)").unwrap().to_wkb().unwrap();
        wkb.push(0xFF);
        let err = Geometry::from_wkb(&wkb).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid WKB: 1 trailing bytes after the geometry"
        );
    }

    #[test]
    fn unknown_byte_order_is_rejected() {
        let err = Geometry::from_wkb(&[0x02, 0x01, 0x00, 0x00, 0x00]).unwrap_err();
        assert_eq!(err.to_string(), "invalid WKB: unexpected byte order 2");
    }

    #[test]
    fn unknown_type_code_is_rejected() {
        let mut wkb: Vec<u8> = vec![0x01];
        wkb.extend_from_slice(&9_u32.to_le_bytes());
        let err = Geometry::from_wkb(&wkb).unwrap_err();
        assert_eq!(err.to_string(), "unknown geometry type identifier 9");
    }
}
