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
use geo_traits::Dimensions;

use crate::bounding_box::Envelope;
use crate::coord::{Coordinates, Xy};
use crate::error::PlanarGeometryError;
use crate::geometry::{LineString, MultiPoint, Point, Validations};

/// A single line segment between two distinct locations.
///
/// Its assertions are:
///
/// 1. The two endpoints must not be coincident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub(crate) a: Coordinates,
    pub(crate) b: Coordinates,
}

impl Line {
    pub fn try_new(a: Coordinates, b: Coordinates) -> Result<Self, PlanarGeometryError> {
        Self::try_new_with(a, b, Validations::Full)
    }

    pub fn try_new_with(
        a: Coordinates,
        b: Coordinates,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        if validations.cheap() {
            if a.dimensions() != b.dimensions() {
                return Err(PlanarGeometryError::Invalid(
                    "mixed coordinate types in Line".to_string(),
                ));
            }
            if a.xy == b.xy {
                return Err(PlanarGeometryError::Invalid(
                    "Line must consist of two distinct points".to_string(),
                ));
            }
        }
        Ok(Self { a, b })
    }

    /// Construct directly from endpoints known to be distinct.
    pub(crate) fn new_unchecked(a: Coordinates, b: Coordinates) -> Self {
        Self { a, b }
    }

    pub fn start(&self) -> Coordinates {
        self.a
    }

    pub fn end(&self) -> Coordinates {
        self.b
    }

    pub fn start_xy(&self) -> Xy {
        self.a.xy
    }

    pub fn end_xy(&self) -> Xy {
        self.b.xy
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn dimensions(&self) -> Dimensions {
        self.a.dimensions()
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.a.xy).extend_to_include(self.b.xy)
    }

    pub fn boundary(&self) -> MultiPoint {
        // A line is never closed, so both endpoints are on the boundary.
        MultiPoint::of(&[Point::new(self.a), Point::new(self.b)])
    }

    pub fn reverse(&self) -> Line {
        Line {
            a: self.b,
            b: self.a,
        }
    }

    /// This Line as a two point LineString.
    pub fn as_line_string(&self) -> LineString {
        LineString::from_raw(vec![self.a, self.b], self.dimensions())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn coincident_endpoints_are_rejected() {
        let err =
            Line::try_new(Coordinates::new(1.0, 2.0), Coordinates::new(1.0, 2.0)).unwrap_err();
        assert_eq!(err.to_string(), "Line must consist of two distinct points");
    }

    #[test]
    fn coincident_endpoints_allowed_when_unchecked() {
        let ln = Line::try_new_with(
            Coordinates::new(1.0, 2.0),
            Coordinates::new(1.0, 2.0),
            Validations::Skip,
        )
        .unwrap();
        assert_eq!(ln.start_xy(), ln.end_xy());
    }

    #[test]
    fn mixed_dimensions_are_rejected() {
        let err = Line::try_new(
            Coordinates::new(0.0, 0.0).with_z(1.0),
            Coordinates::new(1.0, 1.0),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "mixed coordinate types in Line");
    }

    #[test]
    fn envelope_covers_both_endpoints() {
        let ln = Line::try_new(Coordinates::new(2.0, -1.0), Coordinates::new(0.0, 3.0)).unwrap();
        let env = ln.envelope();
        assert_eq!(env.min(), Xy::new(0.0, -1.0));
        assert_eq!(env.max(), Xy::new(2.0, 3.0));
    }

    #[test]
    fn reverse_swaps_endpoints() {
        let ln = Line::try_new(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 1.0)).unwrap();
        let rev = ln.reverse();
        assert_eq!(rev.start_xy(), Xy::new(1.0, 1.0));
        assert_eq!(rev.end_xy(), Xy::new(0.0, 0.0));
    }
}
