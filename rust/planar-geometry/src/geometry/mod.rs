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
//! The geometry model: a tagged union of the nine concrete geometry types.
//!
//! Values are immutable once constructed. Construction is the only point
//! where invariants are enforced, so every operation may assume its inputs
//! are valid.
use std::io::Write;

use geo_traits::Dimensions;

use crate::bounding_box::Envelope;
use crate::coord::Xy;
use crate::error::PlanarGeometryError;
use crate::types::GeometryTypeId;
use crate::{wkb_reader, wkb_writer, wkt_parser, wkt_writer};

mod collection;
mod equals;
mod line;
mod line_string;
mod linear_ring;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;

pub use collection::GeometryCollection;
pub use equals::EqualsExactOptions;
pub use line::Line;
pub use line_string::LineString;
pub use linear_ring::LinearRing;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

/// Which constructor assertions to run.
///
/// Predicates assume valid inputs, so a caller that skips checks owns the
/// responsibility of supplying a valid value; predicates on invalid values
/// may produce meaningless results but never corrupt memory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Validations {
    /// Run every assertion, including the expensive sweepline checks.
    #[default]
    Full,
    /// Run only the cheap structural assertions.
    CheapOnly,
    /// Run no assertions at all.
    Skip,
}

impl Validations {
    pub fn cheap(self) -> bool {
        !matches!(self, Validations::Skip)
    }

    pub fn expensive(self) -> bool {
        matches!(self, Validations::Full)
    }
}

/// Any of the nine concrete geometry types.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Line(Line),
    LineString(LineString),
    LinearRing(LinearRing),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::Line(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::LinearRing(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        match self {
            Geometry::Point(g) => g.dimensions(),
            Geometry::Line(g) => g.dimensions(),
            Geometry::LineString(g) => g.dimensions(),
            Geometry::LinearRing(g) => g.dimensions(),
            Geometry::Polygon(g) => g.dimensions(),
            Geometry::MultiPoint(g) => g.dimensions(),
            Geometry::MultiLineString(g) => g.dimensions(),
            Geometry::MultiPolygon(g) => g.dimensions(),
            Geometry::GeometryCollection(g) => g.dimensions(),
        }
    }

    /// The wire-level type identifier. Line and LinearRing serialize as
    /// LineString.
    pub fn type_id(&self) -> GeometryTypeId {
        match self {
            Geometry::Point(_) => GeometryTypeId::Point,
            Geometry::Line(_) => GeometryTypeId::LineString,
            Geometry::LineString(_) => GeometryTypeId::LineString,
            Geometry::LinearRing(_) => GeometryTypeId::LineString,
            Geometry::Polygon(_) => GeometryTypeId::Polygon,
            Geometry::MultiPoint(_) => GeometryTypeId::MultiPoint,
            Geometry::MultiLineString(_) => GeometryTypeId::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryTypeId::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryTypeId::GeometryCollection,
        }
    }

    /// The concrete variant name, used in predicate error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::Line(_) => "Line",
            Geometry::LineString(_) => "LineString",
            Geometry::LinearRing(_) => "LinearRing",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// The total order over variants used to canonicalise the argument
    /// order of pairwise predicates.
    pub fn rank(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::Line(_) => 2,
            Geometry::LineString(_) => 3,
            Geometry::LinearRing(_) => 4,
            Geometry::Polygon(_) => 5,
            Geometry::MultiPoint(_) => 6,
            Geometry::MultiLineString(_) => 7,
            Geometry::MultiPolygon(_) => 8,
            Geometry::GeometryCollection(_) => 9,
        }
    }

    /// The axis-aligned bounding box, or None when the geometry holds no
    /// location.
    pub fn envelope(&self) -> Option<Envelope> {
        match self {
            Geometry::Point(g) => g.envelope(),
            Geometry::Line(g) => Some(g.envelope()),
            Geometry::LineString(g) => g.envelope(),
            Geometry::LinearRing(g) => g.envelope(),
            Geometry::Polygon(g) => g.envelope(),
            Geometry::MultiPoint(g) => g.envelope(),
            Geometry::MultiLineString(g) => g.envelope(),
            Geometry::MultiPolygon(g) => g.envelope(),
            Geometry::GeometryCollection(g) => g.envelope(),
        }
    }

    /// The combinatorial boundary.
    pub fn boundary(&self) -> Geometry {
        match self {
            Geometry::Point(g) => GeometryCollection::empty(g.dimensions()).into(),
            Geometry::MultiPoint(g) => GeometryCollection::empty(g.dimensions()).into(),
            Geometry::Line(g) => g.boundary().into(),
            Geometry::LineString(g) => g.boundary().into(),
            Geometry::LinearRing(g) => g.boundary().into(),
            Geometry::Polygon(g) => g.boundary().into(),
            Geometry::MultiLineString(g) => g.boundary().into(),
            Geometry::MultiPolygon(g) => g.boundary().into(),
            Geometry::GeometryCollection(g) => g.boundary().into(),
        }
    }

    pub fn is_simple(&self) -> bool {
        match self {
            Geometry::Point(_) => true,
            Geometry::Line(_) => true,
            Geometry::LineString(g) => g.is_simple(),
            Geometry::LinearRing(_) => true,
            Geometry::Polygon(_) => true,
            Geometry::MultiPoint(g) => g.is_simple(),
            Geometry::MultiLineString(g) => g.is_simple(),
            Geometry::MultiPolygon(_) => true,
            Geometry::GeometryCollection(g) => g.is_simple(),
        }
    }

    /// Structural pointwise equality, see [EqualsExactOptions].
    pub fn equals_exact(&self, other: &Geometry, opts: EqualsExactOptions) -> bool {
        equals::equals_exact(self, other, opts)
    }

    /// The same geometry with the control points of every curve in reverse
    /// order.
    pub fn reverse(&self) -> Geometry {
        match self {
            Geometry::Point(g) => (*g).into(),
            Geometry::Line(g) => g.reverse().into(),
            Geometry::LineString(g) => g.reverse().into(),
            Geometry::LinearRing(g) => g.reverse().into(),
            Geometry::Polygon(g) => g.reverse().into(),
            Geometry::MultiPoint(g) => g.clone().into(),
            Geometry::MultiLineString(g) => g.reverse().into(),
            Geometry::MultiPolygon(g) => g.reverse().into(),
            Geometry::GeometryCollection(g) => g.reverse().into(),
        }
    }

    /// Transform every XY location and rebuild through the constructors.
    /// Mappings that break an invariant (for example collapsing the two
    /// endpoints of a Line) surface the constructor error.
    pub fn transform_xy(
        &self,
        f: &impl Fn(Xy) -> Xy,
        validations: Validations,
    ) -> Result<Geometry, PlanarGeometryError> {
        let map = |c: crate::coord::Coordinates| {
            let mut c = c;
            c.xy = f(c.xy);
            c
        };
        match self {
            Geometry::Point(g) => Ok(match g.coordinates() {
                Some(c) => Point::new(map(c)).into(),
                None => (*g).into(),
            }),
            Geometry::Line(g) => {
                Ok(Line::try_new_with(map(g.start()), map(g.end()), validations)?.into())
            }
            Geometry::LineString(g) => {
                if g.is_empty() {
                    return Ok(g.clone().into());
                }
                let pts = g.coordinates().into_iter().map(map).collect();
                Ok(LineString::try_new_with(pts, validations)?.into())
            }
            Geometry::LinearRing(g) => {
                let pts = g.line_string().coordinates().into_iter().map(map).collect();
                Ok(LinearRing::try_new_with(pts, validations)?.into())
            }
            Geometry::Polygon(g) => {
                if g.is_empty() {
                    return Ok(g.clone().into());
                }
                let rings = g
                    .coordinates()
                    .into_iter()
                    .map(|ring| ring.into_iter().map(map).collect())
                    .collect();
                Ok(Polygon::try_from_coordinates(rings, validations)?.into())
            }
            Geometry::MultiPoint(g) => {
                let pts = g
                    .points()
                    .map(|p| match p.coordinates() {
                        Some(c) => Point::new(map(c)),
                        None => *p,
                    })
                    .collect();
                Ok(MultiPoint::try_new_with_dim(g.dimensions(), pts)?.into())
            }
            Geometry::MultiLineString(g) => {
                let members = g
                    .line_strings()
                    .map(|ls| {
                        if ls.is_empty() {
                            return Ok(ls.clone());
                        }
                        let pts = ls.coordinates().into_iter().map(map).collect();
                        LineString::try_new_with(pts, validations)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiLineString::try_new_with_dim(g.dimensions(), members)?.into())
            }
            Geometry::MultiPolygon(g) => {
                let members = g
                    .polygons()
                    .map(|p| {
                        if p.is_empty() {
                            return Ok(p.clone());
                        }
                        let rings = p
                            .coordinates()
                            .into_iter()
                            .map(|ring| ring.into_iter().map(map).collect())
                            .collect();
                        Polygon::try_from_coordinates(rings, validations)
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiPolygon::try_new_with_dim(g.dimensions(), members, validations)?.into())
            }
            Geometry::GeometryCollection(g) => {
                let members = g
                    .geometries()
                    .map(|m| m.transform_xy(f, validations))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(GeometryCollection::try_new_with_dim(g.dimensions(), members)?.into())
            }
        }
    }

    /// Parse the well-known text form.
    pub fn from_wkt(input: &str) -> Result<Geometry, PlanarGeometryError> {
        Self::from_wkt_with(input, Validations::Full)
    }

    pub fn from_wkt_with(
        input: &str,
        validations: Validations,
    ) -> Result<Geometry, PlanarGeometryError> {
        wkt_parser::parse_wkt(input, validations)
    }

    /// The well-known text form. Numeric formatting uses the shortest
    /// decimal string that parses back to the same binary float, so text
    /// round-trips are lossless.
    pub fn to_wkt(&self) -> String {
        wkt_writer::write_wkt(self)
    }

    /// Parse the well-known binary form. Both byte orders are accepted, as
    /// are EWKB dimension and SRID flags (the SRID itself is discarded).
    pub fn from_wkb(buf: &[u8]) -> Result<Geometry, PlanarGeometryError> {
        Self::from_wkb_with(buf, Validations::Full)
    }

    pub fn from_wkb_with(
        buf: &[u8],
        validations: Validations,
    ) -> Result<Geometry, PlanarGeometryError> {
        wkb_reader::parse_wkb(buf, validations)
    }

    /// Write the well-known binary form (little-endian, ISO type codes).
    pub fn write_wkb(&self, buf: &mut impl Write) -> Result<(), PlanarGeometryError> {
        wkb_writer::write_wkb(self, buf)
    }

    /// The well-known binary form as a byte vector. This is the value a
    /// database driver should present for this geometry.
    pub fn to_wkb(&self) -> Result<Vec<u8>, PlanarGeometryError> {
        let mut buf = Vec::new();
        self.write_wkb(&mut buf)?;
        Ok(buf)
    }

    /// Scan a database value: either WKB bytes (recognised by the leading
    /// byte-order flag) or a WKT string.
    pub fn from_sql_value(value: &[u8]) -> Result<Geometry, PlanarGeometryError> {
        match value.first().copied() {
            Some(0) | Some(1) => Self::from_wkb(value),
            _ => {
                let text = std::str::from_utf8(value).map_err(|_| {
                    PlanarGeometryError::Parse(
                        "geometry value is neither WKB nor valid UTF-8 text".to_string(),
                    )
                })?;
                Self::from_wkt(text)
            }
        }
    }
}

impl From<Point> for Geometry {
    fn from(value: Point) -> Self {
        Geometry::Point(value)
    }
}

impl From<Line> for Geometry {
    fn from(value: Line) -> Self {
        Geometry::Line(value)
    }
}

impl From<LineString> for Geometry {
    fn from(value: LineString) -> Self {
        Geometry::LineString(value)
    }
}

impl From<LinearRing> for Geometry {
    fn from(value: LinearRing) -> Self {
        Geometry::LinearRing(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Geometry::Polygon(value)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(value: MultiPoint) -> Self {
        Geometry::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(value: MultiLineString) -> Self {
        Geometry::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(value: MultiPolygon) -> Self {
        Geometry::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(value: GeometryCollection) -> Self {
        Geometry::GeometryCollection(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rank_is_strictly_increasing_over_variants() {
        let wkts = [
            "POINT(0 0)",
            "LINESTRING(0 0,1 1)",
            "LINESTRING(0 0,1 1,2 0)",
            "POLYGON((0 0,1 0,0 1,0 0))",
            "MULTIPOINT((0 0))",
            "MULTILINESTRING((0 0,1 1))",
            "MULTIPOLYGON(((0 0,1 0,0 1,0 0)))",
            "GEOMETRYCOLLECTION(POINT(0 0))",
        ];
        let ranks: Vec<usize> = wkts
            .iter()
            .map(|w| Geometry::from_wkt(w).unwrap().rank())
            .collect();
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn boundary_of_point_is_empty() {
        let pt = Geometry::from_wkt("POINT(1 2)").unwrap();
        assert!(pt.boundary().is_empty());
    }

    #[test]
    fn transform_can_break_invariants() {
        let ln = Geometry::from_wkt("LINESTRING(0 0,1 1)").unwrap();
        let collapsed = ln.transform_xy(&|_| Xy::new(0.0, 0.0), Validations::Full);
        assert!(collapsed.is_err());

        let shifted = ln
            .transform_xy(&|p| Xy::new(p.x + 1.0, p.y), Validations::Full)
            .unwrap();
        assert_eq!(shifted.to_wkt(), "LINESTRING(1 0,2 1)");
    }

    #[test]
    fn sql_value_scanning_accepts_both_forms() {
        let g = Geometry::from_wkt("POINT(1 2)").unwrap();
        let wkb = g.to_wkb().unwrap();
        assert_eq!(Geometry::from_sql_value(&wkb).unwrap(), g);
        assert_eq!(Geometry::from_sql_value(b"POINT(1 2)").unwrap(), g);
    }
}
