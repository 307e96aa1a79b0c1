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
use crate::geometry::Geometry;

/// A heterogeneous collection of geometries.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    geoms: Vec<Geometry>,
    dims: Dimensions,
}

impl GeometryCollection {
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            geoms: Vec::new(),
            dims,
        }
    }

    pub fn try_new(geoms: Vec<Geometry>) -> Result<Self, PlanarGeometryError> {
        let dims = geoms
            .first()
            .map(|g| g.dimensions())
            .unwrap_or(Dimensions::Xy);
        Self::try_new_with_dim(dims, geoms)
    }

    pub fn try_new_with_dim(
        dims: Dimensions,
        geoms: Vec<Geometry>,
    ) -> Result<Self, PlanarGeometryError> {
        if geoms.iter().any(|g| g.dimensions() != dims) {
            return Err(PlanarGeometryError::Invalid(
                "mixed coordinate types in GeometryCollection".to_string(),
            ));
        }
        Ok(Self { geoms, dims })
    }

    pub fn num_geometries(&self) -> usize {
        self.geoms.len()
    }

    pub fn geometry_n(&self, n: usize) -> &Geometry {
        &self.geoms[n]
    }

    pub fn geometries(&self) -> impl Iterator<Item = &Geometry> {
        self.geoms.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.geoms.iter().all(|g| g.is_empty())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        let mut env: Option<Envelope> = None;
        for member in self.geoms.iter().filter_map(|g| g.envelope()) {
            env = Some(match env {
                Some(env) => env.extend_to_include_envelope(&member),
                None => member,
            });
        }
        env
    }

    pub fn is_simple(&self) -> bool {
        self.geoms.iter().all(|g| g.is_simple())
    }

    /// The boundaries of the members, as a collection.
    pub fn boundary(&self) -> GeometryCollection {
        GeometryCollection {
            geoms: self.geoms.iter().map(|g| g.boundary()).collect(),
            dims: self.dims,
        }
    }

    pub fn reverse(&self) -> GeometryCollection {
        GeometryCollection {
            geoms: self.geoms.iter().map(|g| g.reverse()).collect(),
            dims: self.dims,
        }
    }
}
