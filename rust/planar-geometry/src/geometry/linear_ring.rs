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
use crate::geometry::{LineString, MultiPoint, Validations};

/// A LineString that is simple and closed.
///
/// Its assertions are:
///
/// 1. The start and end points are coincident.
///
/// 2. The curve does not otherwise pass through the same point twice; the
///    only segment pair allowed to meet away from a shared construction
///    vertex is the first and last pair, at the closing vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    ls: LineString,
}

impl LinearRing {
    pub fn try_new(pts: Vec<Coordinates>) -> Result<Self, PlanarGeometryError> {
        Self::try_new_with(pts, Validations::Full)
    }

    pub fn try_new_with(
        pts: Vec<Coordinates>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        let ls = LineString::try_new_with(pts, validations)?;
        Self::try_from_line_string(ls, validations)
    }

    pub fn try_from_line_string(
        ls: LineString,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        if validations.cheap() && !ls.is_closed() {
            return Err(PlanarGeometryError::Invalid(
                "linear ring must be closed".to_string(),
            ));
        }
        if validations.expensive() && !ls.is_simple() {
            return Err(PlanarGeometryError::Invalid(
                "linear ring must be simple".to_string(),
            ));
        }
        Ok(Self { ls })
    }

    pub fn line_string(&self) -> &LineString {
        &self.ls
    }

    pub fn into_line_string(self) -> LineString {
        self.ls
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn dimensions(&self) -> Dimensions {
        self.ls.dimensions()
    }

    pub fn envelope(&self) -> Option<Envelope> {
        self.ls.envelope()
    }

    /// A closed curve has an empty boundary.
    pub fn boundary(&self) -> MultiPoint {
        MultiPoint::empty(self.dimensions())
    }

    pub fn reverse(&self) -> LinearRing {
        LinearRing {
            ls: self.ls.reverse(),
        }
    }
}
