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
use crate::geometry::{Line, MultiPoint, Point, Validations};
use crate::validity;

/// A curve defined by linear interpolation between a finite set of points.
/// Each consecutive pair of distinct points defines a line segment.
///
/// Its assertions are:
///
/// 1. It must contain at least 2 distinct points, unless it is the
///    distinguished empty value.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    // coords have been deduplicated such that no two consecutive coordinates
    // are coincident. This allows quick calculation of line segments.
    coords: Vec<Coordinates>,

    // points are indexes into coords, and retain consecutive coincident
    // points. This is so that information about the original points making
    // up the LineString is retained.
    points: Vec<usize>,

    dims: Dimensions,
}

impl LineString {
    /// The empty line string for the given coordinate type.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            coords: Vec::new(),
            points: Vec::new(),
            dims,
        }
    }

    pub fn try_new(pts: Vec<Coordinates>) -> Result<Self, PlanarGeometryError> {
        Self::try_new_with(pts, Validations::Full)
    }

    pub fn try_new_with(
        pts: Vec<Coordinates>,
        validations: Validations,
    ) -> Result<Self, PlanarGeometryError> {
        if validations.cheap() {
            let dims = pts.first().map(|c| c.dimensions());
            if let Some(dims) = dims {
                if pts.iter().any(|c| c.dimensions() != dims) {
                    return Err(PlanarGeometryError::Invalid(
                        "mixed coordinate types in LineString".to_string(),
                    ));
                }
            }
        }
        let dims = pts
            .first()
            .map(|c| c.dimensions())
            .unwrap_or(Dimensions::Xy);
        let ls = Self::from_raw(pts, dims);
        if validations.cheap() && ls.coords.len() <= 1 {
            return Err(PlanarGeometryError::Invalid(
                "LineString must contain at least two distinct points".to_string(),
            ));
        }
        Ok(ls)
    }

    /// Build without any validation, deduplicating consecutive coincident
    /// points.
    pub(crate) fn from_raw(pts: Vec<Coordinates>, dims: Dimensions) -> Self {
        let mut coords: Vec<Coordinates> = Vec::with_capacity(pts.len());
        let mut points = Vec::with_capacity(pts.len());
        for pt in pts {
            match coords.last() {
                Some(last) if last.xy == pt.xy => {}
                _ => coords.push(pt),
            }
            points.push(coords.len() - 1);
        }
        Self {
            coords,
            points,
            dims,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// The number of control points, counting consecutive repeats.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// The nth (zero indexed) control point.
    pub fn point_n(&self, n: usize) -> Coordinates {
        self.coords[self.points[n]]
    }

    pub fn start_point(&self) -> Option<Coordinates> {
        self.points.first().map(|&i| self.coords[i])
    }

    pub fn end_point(&self) -> Option<Coordinates> {
        self.points.last().map(|&i| self.coords[i])
    }

    pub fn num_segments(&self) -> usize {
        self.coords.len().saturating_sub(1)
    }

    /// The nth line segment. The two endpoints are distinct because of the
    /// way the coords list is constructed.
    pub fn segment_n(&self, n: usize) -> Line {
        Line::new_unchecked(self.coords[n], self.coords[n + 1])
    }

    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.num_segments()).map(|n| self.segment_n(n))
    }

    /// The segments as XY endpoint pairs, for the ring predicates.
    pub fn segment_coords(&self) -> impl Iterator<Item = (Xy, Xy)> + '_ {
        self.coords.windows(2).map(|w| (w[0].xy, w[1].xy))
    }

    /// The control points, consecutive repeats included.
    pub fn coordinates(&self) -> Vec<Coordinates> {
        self.points.iter().map(|&i| self.coords[i]).collect()
    }

    pub fn is_closed(&self) -> bool {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => start.xy == end.xy,
            _ => false,
        }
    }

    /// True iff the curve doesn't pass through the same point twice, with
    /// the possible exception of the two endpoints being coincident.
    pub fn is_simple(&self) -> bool {
        validity::is_simple_line_string(self)
    }

    /// True iff this LineString is both simple and closed (i.e. is a linear
    /// ring).
    pub fn is_ring(&self) -> bool {
        self.is_closed() && self.is_simple()
    }

    pub fn envelope(&self) -> Option<Envelope> {
        Envelope::from_coords(self.coords.iter().map(|c| c.xy))
    }

    /// The start and end points for an open curve; empty for a closed or
    /// empty one.
    pub fn boundary(&self) -> MultiPoint {
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) if start.xy != end.xy => {
                MultiPoint::of(&[Point::new(start), Point::new(end)])
            }
            _ => MultiPoint::empty(self.dims),
        }
    }

    /// The same curve with its control points in reverse order.
    pub fn reverse(&self) -> LineString {
        let mut pts = self.coordinates();
        pts.reverse();
        Self::from_raw(pts, self.dims)
    }
}
