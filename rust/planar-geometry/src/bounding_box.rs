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
use crate::coord::Xy;

/// An axis-aligned bounding box.
///
/// An envelope is never empty; geometries without any coordinate have no
/// envelope rather than an empty one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    min: Xy,
    max: Xy,
}

impl Envelope {
    /// The envelope covering a single location.
    pub fn new(pt: Xy) -> Self {
        Self { min: pt, max: pt }
    }

    /// The envelope covering all locations yielded by `coords`, or None when
    /// the iterator is empty.
    pub fn from_coords(mut coords: impl Iterator<Item = Xy>) -> Option<Self> {
        let first = coords.next()?;
        Some(coords.fold(Envelope::new(first), |env, pt| env.extend_to_include(pt)))
    }

    pub fn min(&self) -> Xy {
        self.min
    }

    pub fn max(&self) -> Xy {
        self.max
    }

    /// Grow the envelope so that it also covers `pt`. Monotone: the result
    /// always contains every location the receiver contained.
    pub fn extend_to_include(&self, pt: Xy) -> Envelope {
        Envelope {
            min: Xy::new(self.min.x.min(pt.x), self.min.y.min(pt.y)),
            max: Xy::new(self.max.x.max(pt.x), self.max.y.max(pt.y)),
        }
    }

    /// The union of two envelopes.
    pub fn extend_to_include_envelope(&self, other: &Envelope) -> Envelope {
        self.extend_to_include(other.min).extend_to_include(other.max)
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, pt: Xy) -> bool {
        pt.x >= self.min.x && pt.x <= self.max.x && pt.y >= self.min.y && pt.y <= self.max.y
    }

    /// True iff the two boxes share at least one location, boundaries
    /// included.
    pub fn intersects(&self, other: &Envelope) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
