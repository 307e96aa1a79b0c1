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

/// A single location, or the empty point.
///
/// Point has no assertions; the empty point is a legal value and is
/// distinguished per coordinate type (`POINT EMPTY` vs `POINT Z EMPTY`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coords: Option<Coordinates>,
    dims: Dimensions,
}

impl Point {
    pub fn new(coords: Coordinates) -> Self {
        Self {
            dims: coords.dimensions(),
            coords: Some(coords),
        }
    }

    /// A point with only X and Y ordinates.
    pub fn from_xy(xy: Xy) -> Self {
        Self::new(Coordinates::xy(xy))
    }

    pub fn empty(dims: Dimensions) -> Self {
        Self { coords: None, dims }
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coords
    }

    /// The XY projection, or None for the empty point.
    pub fn xy(&self) -> Option<Xy> {
        self.coords.map(|c| c.xy)
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_none()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        self.xy().map(Envelope::new)
    }
}
