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
use std::collections::HashSet;

use geo_traits::Dimensions;

use crate::bounding_box::Envelope;
use crate::error::PlanarGeometryError;
use crate::geometry::Point;

/// An unordered collection of points, possibly including empty points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pts: Vec<Point>,
    dims: Dimensions,
}

impl MultiPoint {
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            pts: Vec::new(),
            dims,
        }
    }

    /// Collect points whose coordinate types are already known to agree.
    pub(crate) fn of(pts: &[Point]) -> Self {
        let dims = pts
            .first()
            .map(|p| p.dimensions())
            .unwrap_or(Dimensions::Xy);
        Self {
            pts: pts.to_vec(),
            dims,
        }
    }

    pub fn try_new(pts: Vec<Point>) -> Result<Self, PlanarGeometryError> {
        let dims = pts
            .first()
            .map(|p| p.dimensions())
            .unwrap_or(Dimensions::Xy);
        Self::try_new_with_dim(dims, pts)
    }

    pub fn try_new_with_dim(
        dims: Dimensions,
        pts: Vec<Point>,
    ) -> Result<Self, PlanarGeometryError> {
        if pts.iter().any(|p| p.dimensions() != dims) {
            return Err(PlanarGeometryError::Invalid(
                "mixed coordinate types in MultiPoint".to_string(),
            ));
        }
        Ok(Self { pts, dims })
    }

    pub fn num_points(&self) -> usize {
        self.pts.len()
    }

    pub fn point_n(&self, n: usize) -> &Point {
        &self.pts[n]
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.pts.iter()
    }

    /// True when the collection holds no location at all. A collection of
    /// only empty points is itself empty.
    pub fn is_empty(&self) -> bool {
        self.pts.iter().all(|p| p.is_empty())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(self.pts.iter().filter_map(|p| p.xy()))
    }

    /// Simple iff no location is repeated.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::new();
        for pt in self.pts.iter().filter_map(|p| p.xy()) {
            if !seen.insert(pt.to_bits()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinates;

    #[test]
    fn all_empty_members_make_an_empty_multipoint() {
        let mp = MultiPoint::try_new(vec![Point::empty(Dimensions::Xy)]).unwrap();
        assert!(mp.is_empty());
        assert_eq!(mp.num_points(), 1);
        assert_eq!(mp.envelope(), None);
    }

    #[test]
    fn mixed_coordinate_types_are_rejected() {
        let err = MultiPoint::try_new(vec![
            Point::new(Coordinates::new(1.0, 2.0)),
            Point::new(Coordinates::new(1.0, 2.0).with_z(3.0)),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "mixed coordinate types in MultiPoint");
    }

    #[test]
    fn simplicity_detects_repeats() {
        let simple = MultiPoint::try_new(vec![
            Point::new(Coordinates::new(1.0, 2.0)),
            Point::new(Coordinates::new(3.0, 4.0)),
        ])
        .unwrap();
        assert!(simple.is_simple());

        let repeated = MultiPoint::try_new(vec![
            Point::new(Coordinates::new(1.0, 2.0)),
            Point::new(Coordinates::new(1.0, 2.0)),
        ])
        .unwrap();
        assert!(!repeated.is_simple());
    }
}
