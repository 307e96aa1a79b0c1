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
use crate::geometry::{LineString, MultiPoint, Point};

/// A collection of LineStrings, possibly including empty ones.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    dims: Dimensions,
}

impl MultiLineString {
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            line_strings: Vec::new(),
            dims,
        }
    }

    /// Collect members whose coordinate types are already known to agree.
    pub(crate) fn of_line_strings(line_strings: Vec<LineString>, dims: Dimensions) -> Self {
        Self { line_strings, dims }
    }

    pub fn try_new(line_strings: Vec<LineString>) -> Result<Self, PlanarGeometryError> {
        let dims = line_strings
            .first()
            .map(|ls| ls.dimensions())
            .unwrap_or(Dimensions::Xy);
        Self::try_new_with_dim(dims, line_strings)
    }

    pub fn try_new_with_dim(
        dims: Dimensions,
        line_strings: Vec<LineString>,
    ) -> Result<Self, PlanarGeometryError> {
        if line_strings.iter().any(|ls| ls.dimensions() != dims) {
            return Err(PlanarGeometryError::Invalid(
                "mixed coordinate types in MultiLineString".to_string(),
            ));
        }
        Ok(Self { line_strings, dims })
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn line_string_n(&self, n: usize) -> &LineString {
        &self.line_strings[n]
    }

    pub fn line_strings(&self) -> impl Iterator<Item = &LineString> {
        self.line_strings.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.iter().all(|ls| ls.is_empty())
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn envelope(&self) -> Option<Envelope> {
        let mut env: Option<Envelope> = None;
        for member in self.line_strings.iter().filter_map(|ls| ls.envelope()) {
            env = Some(match env {
                Some(env) => env.extend_to_include_envelope(&member),
                None => member,
            });
        }
        env
    }

    pub fn is_simple(&self) -> bool {
        self.line_strings.iter().all(|ls| ls.is_simple())
    }

    /// The concatenation of member boundaries.
    pub fn boundary(&self) -> MultiPoint {
        let mut pts: Vec<Point> = Vec::new();
        for ls in &self.line_strings {
            pts.extend(ls.boundary().points().cloned());
        }
        if pts.is_empty() {
            MultiPoint::empty(self.dims)
        } else {
            MultiPoint::of(&pts)
        }
    }

    pub fn reverse(&self) -> MultiLineString {
        MultiLineString {
            line_strings: self.line_strings.iter().map(|ls| ls.reverse()).collect(),
            dims: self.dims,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Coordinates;

    fn ls(pts: &[(f64, f64)]) -> LineString {
        LineString::try_new(pts.iter().map(|&(x, y)| Coordinates::new(x, y)).collect()).unwrap()
    }

    #[test]
    fn emptiness() {
        assert!(MultiLineString::empty(Dimensions::Xy).is_empty());
        assert!(
            MultiLineString::try_new(vec![LineString::empty(Dimensions::Xy)])
                .unwrap()
                .is_empty()
        );
        assert!(!MultiLineString::try_new(vec![ls(&[(0.0, 0.0), (1.0, 1.0)])])
            .unwrap()
            .is_empty());
    }

    #[test]
    fn envelope_skips_empty_members() {
        let mls = MultiLineString::try_new(vec![
            LineString::empty(Dimensions::Xy),
            ls(&[(1.0, 1.0), (2.0, 3.0)]),
        ])
        .unwrap();
        let env = mls.envelope().unwrap();
        assert_eq!(env.min().x, 1.0);
        assert_eq!(env.max().y, 3.0);
    }

    #[test]
    fn boundary_concatenates_member_boundaries() {
        let open = ls(&[(0.0, 0.0), (1.0, 0.0)]);
        let closed = ls(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (0.0, 0.0)]);
        let mls = MultiLineString::try_new(vec![open, closed]).unwrap();
        assert_eq!(mls.boundary().num_points(), 2);
    }
}
