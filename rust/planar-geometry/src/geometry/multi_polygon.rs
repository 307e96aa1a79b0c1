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
use crate::error::PlanarGeometryError;
use crate::geometry::{MultiLineString, Polygon, Validations};
use crate::validity;

/// A collection of polygons.
///
/// Its assertions are:
///
/// 1. The interiors of any two polygons are disjoint.
///
/// 2. The boundaries of any two polygons may touch only at isolated points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    dims: Dimensions,
}

impl MultiPolygon {
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            polygons: Vec::new(),
            dims,
        }
    }

    pub fn try_new(polygons: Vec<Polygon>) -> Result<Self, PlanarGeometryError> {
        Self::try_new_with(polygons, Validations::Full)
    }

    pub fn try_new_with(
        polygons: Vec<Polygon>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        let dims = polygons
            .first()
            .map(|p| p.dimensions())
            .unwrap_or(Dimensions::Xy);
        Self::try_new_with_dim(dims, polygons, validations)
    }

    pub fn try_new_with_dim(
        dims: Dimensions,
        polygons: Vec<Polygon>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        if validations.cheap() && polygons.iter().any(|p| p.dimensions() != dims) {
            return Err(PlanarGeometryError::Invalid(
                "mixed coordinate types in MultiPolygon".to_string(),
            ));
        }
        if validations.expensive() {
            validity::validate_multi_polygon(&polygons)?;
        }
        Ok(Self { polygons, dims })
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygon_n(&self, n: usize) -> &Polygon {
        &self.polygons[n]
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.polygons.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(|p| p.is_empty())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        let mut env: Option<Envelope> = None;
        for member in self.polygons.iter().filter_map(|p| p.envelope()) {
            env = Some(match env {
                Some(env) => env.extend_to_include_envelope(&member),
                None => member,
            });
        }
        env
    }

    /// Every ring of every member polygon.
    pub fn boundary(&self) -> MultiLineString {
        let rings = self
            .polygons
            .iter()
            .flat_map(|p| p.boundary().line_strings().cloned().collect::<Vec<_>>())
            .collect();
        MultiLineString::of_line_strings(rings, self.dims)
    }

    pub fn reverse(&self) -> MultiPolygon {
        MultiPolygon {
            polygons: self.polygons.iter().map(|p| p.reverse()).collect(),
            dims: self.dims,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinates;

    fn square(x0: f64, y0: f64, size: f64) -> Polygon {
        let ring = vec![
            Coordinates::new(x0, y0),
            Coordinates::new(x0 + size, y0),
            Coordinates::new(x0 + size, y0 + size),
            Coordinates::new(x0, y0 + size),
            Coordinates::new(x0, y0),
        ];
        Polygon::try_from_coordinates(vec![ring], Validations::Full).unwrap()
    }

    #[test]
    fn disjoint_polygons_are_accepted() {
        let mp = MultiPolygon::try_new(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]).unwrap();
        assert_eq!(mp.num_polygons(), 2);
        assert!(!mp.is_empty());
    }

    #[test]
    fn corner_touching_polygons_are_accepted() {
        let mp = MultiPolygon::try_new(vec![square(0.0, 0.0, 1.0), square(1.0, 1.0, 1.0)]).unwrap();
        assert_eq!(mp.num_polygons(), 2);
    }

    #[test]
    fn overlapping_polygons_are_rejected() {
        let err =
            MultiPolygon::try_new(vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "polygons in a multipolygon must have disjoint interiors"
        );
    }

    #[test]
    fn shared_boundary_segments_are_rejected() {
        let err =
            MultiPolygon::try_new(vec![square(0.0, 0.0, 1.0), square(1.0, 0.0, 1.0)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "polygons in a multipolygon must not share boundary segments"
        );
    }

    #[test]
    fn validation_can_be_skipped() {
        let mp = MultiPolygon::try_new_with(
            vec![square(0.0, 0.0, 2.0), square(1.0, 1.0, 2.0)],
            Validations::CheapOnly,
        )
        .unwrap();
        assert_eq!(mp.num_polygons(), 2);
    }

    #[test]
    fn boundary_collects_all_rings() {
        let mp = MultiPolygon::try_new(vec![square(0.0, 0.0, 1.0), square(5.0, 5.0, 1.0)]).unwrap();
        assert_eq!(mp.boundary().num_line_strings(), 2);
    }
}
