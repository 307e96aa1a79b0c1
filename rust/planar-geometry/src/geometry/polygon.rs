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
use crate::coord::Coordinates;
use crate::error::PlanarGeometryError;
use crate::geometry::{LineString, MultiLineString, Validations};
use crate::validity;

/// A planar surface, defined by 1 exterior boundary and 0 or more interior
/// boundaries. Each interior boundary defines a hole in the polygon.
///
/// Its assertions are:
///
/// 1. The outer ring and holes must be valid linear rings (i.e. be simple
///    and closed LineStrings).
///
/// 2. Each pair of rings must only intersect at a single point.
///
/// 3. The interior of the polygon is connected.
///
/// 4. The holes must be fully inside the outer ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    outer: LineString,
    holes: Vec<LineString>,
    dims: Dimensions,
}

impl Polygon {
    /// The empty polygon for the given coordinate type.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            outer: LineString::empty(dims),
            holes: Vec::new(),
            dims,
        }
    }

    /// Creates a polygon given its outer and inner rings. No rings may cross
    /// each other, and they may only intersect each other at a point.
    pub fn try_new(outer: LineString, holes: Vec<LineString>) -> Result<Self, PlanarGeometryError> {
        Self::try_new_with(outer, holes, Validations::Full)
    }

    pub fn try_new_with(
        outer: LineString,
        holes: Vec<LineString>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        let dims = outer.dimensions();
        if validations.cheap() && holes.iter().any(|h| h.dimensions() != dims) {
            return Err(PlanarGeometryError::Invalid(
                "mixed coordinate types in Polygon".to_string(),
            ));
        }
        validity::validate_polygon(&outer, &holes, validations)?;
        Ok(Self { outer, holes, dims })
    }

    /// Creates a new polygon from its ring coordinates. The outer ring comes
    /// first, any holes after it.
    pub fn try_from_coordinates(
        rings: Vec<Vec<Coordinates>>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        let mut iter = rings.into_iter();
        let outer = match iter.next() {
            Some(pts) => LineString::try_new_with(pts, validations)?,
            None => {
                return Err(PlanarGeometryError::Invalid(
                    "Polygon must have an outer ring".to_string(),
                ))
            }
        };
        let holes = iter
            .map(|pts| LineString::try_new_with(pts, validations))
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new_with(outer, holes, validations)
    }

    /// The exterior ring of the polygon boundary.
    pub fn exterior_ring(&self) -> &LineString {
        &self.outer
    }

    /// The number of interior rings in the polygon boundary.
    pub fn num_interior_rings(&self) -> usize {
        self.holes.len()
    }

    /// The nth (zero indexed) interior ring in the polygon boundary.
    pub fn interior_ring_n(&self, n: usize) -> &LineString {
        &self.holes[n]
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &LineString> {
        std::iter::once(&self.outer).chain(self.holes.iter())
    }

    /// The ring coordinates, exterior ring first.
    pub fn coordinates(&self) -> Vec<Vec<Coordinates>> {
        self.rings().map(|r| r.coordinates()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        self.outer.envelope()
    }

    pub fn boundary(&self) -> MultiLineString {
        if self.is_empty() {
            return MultiLineString::empty(self.dims);
        }
        MultiLineString::of_line_strings(self.rings().cloned().collect(), self.dims)
    }

    /// The coordinates of each ring in reverse order. The order of the
    /// holes themselves is unchanged.
    pub fn reverse(&self) -> Polygon {
        Polygon {
            outer: self.outer.reverse(),
            holes: self.holes.iter().map(|h| h.reverse()).collect(),
            dims: self.dims,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ring(pts: &[(f64, f64)]) -> Vec<Coordinates> {
        pts.iter().map(|&(x, y)| Coordinates::new(x, y)).collect()
    }

    #[test]
    fn polygon_without_rings_is_rejected() {
        let err = Polygon::try_from_coordinates(Vec::new(), Validations::Full).unwrap_err();
        assert_eq!(err.to_string(), "Polygon must have an outer ring");
    }

    #[test]
    fn unclosed_ring_is_rejected() {
        let err = Polygon::try_from_coordinates(
            vec![ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "polygon rings must be closed");
    }

    #[test]
    fn non_simple_ring_is_rejected() {
        let err = Polygon::try_from_coordinates(
            vec![ring(&[
                (0.0, 0.0),
                (2.0, 2.0),
                (2.0, 0.0),
                (0.0, 2.0),
                (0.0, 0.0),
            ])],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "polygon rings must be simple");
    }

    #[test]
    fn hole_outside_outer_ring_is_rejected() {
        let err = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
                ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 6.0), (5.0, 5.0)]),
            ],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "hole must be inside outer ring");
    }

    #[test]
    fn nested_holes_are_rejected() {
        let err = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (9.0, 0.0), (9.0, 9.0), (0.0, 9.0), (0.0, 0.0)]),
                ring(&[(1.0, 1.0), (7.0, 1.0), (7.0, 7.0), (1.0, 7.0), (1.0, 1.0)]),
                ring(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 3.0), (2.0, 2.0)]),
            ],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "polygon must not have nested rings");
    }

    #[test]
    fn rings_touching_at_two_points_are_rejected() {
        let err = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
                ring(&[(0.0, 2.0), (2.0, 1.0), (4.0, 2.0), (2.0, 3.0), (0.0, 2.0)]),
            ],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "polygon rings must not intersect at multiple points"
        );
    }

    #[test]
    fn touch_point_chain_disconnecting_the_interior_is_rejected() {
        // Two holes chained between two boundary touch points split the
        // interior in half.
        let err = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
                ring(&[(2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 0.0)]),
                ring(&[(2.0, 2.0), (3.0, 3.0), (2.0, 4.0), (1.0, 3.0), (2.0, 2.0)]),
            ],
            Validations::Full,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "polygon interiors must be connected");
    }

    #[test]
    fn polygon_with_touching_hole_is_accepted() {
        let poly = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
                ring(&[(2.0, 0.0), (3.0, 1.0), (2.0, 2.0), (1.0, 1.0), (2.0, 0.0)]),
            ],
            Validations::Full,
        )
        .unwrap();
        assert_eq!(poly.num_interior_rings(), 1);
        assert!(!poly.is_empty());
    }

    #[test]
    fn expensive_validation_can_be_skipped() {
        let rings = vec![ring(&[
            (0.0, 0.0),
            (2.0, 2.0),
            (2.0, 0.0),
            (0.0, 2.0),
            (0.0, 0.0),
        ])];
        assert!(Polygon::try_from_coordinates(rings, Validations::CheapOnly).is_ok());
    }

    #[test]
    fn boundary_lists_all_rings() {
        let poly = Polygon::try_from_coordinates(
            vec![
                ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]),
                ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0), (1.0, 1.0)]),
            ],
            Validations::Full,
        )
        .unwrap();
        assert_eq!(poly.boundary().num_line_strings(), 2);
    }
}
