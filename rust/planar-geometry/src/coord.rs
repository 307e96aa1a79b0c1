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
use std::cmp::Ordering;
use std::ops::{Add, Sub};

use geo_traits::Dimensions;

/// A location on the 2D plane.
///
/// Equality is bitwise on the two components. Construction from WKT or WKB
/// rejects NaN and infinite ordinates, so values built through the parsers
/// are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

impl Xy {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Strict lexicographic order: first by x, then by y.
    pub fn less(&self, other: &Xy) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }

    /// Total order consistent with [Xy::less] for finite values. Used
    /// wherever coordinates need sorting.
    pub fn lexicographic_cmp(&self, other: &Xy) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }

    /// The bit pattern of both components, used as an exact hash/dedup key.
    pub fn to_bits(self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }

    pub fn scale(self, s: f64) -> Xy {
        Xy::new(self.x * s, self.y * s)
    }
}

impl Add for Xy {
    type Output = Xy;

    fn add(self, rhs: Xy) -> Xy {
        Xy::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Xy {
    type Output = Xy;

    fn sub(self, rhs: Xy) -> Xy {
        Xy::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An [Xy] together with the optional Z and M ordinates.
///
/// Z and M are carried through parsing and serialization but are ignored by
/// every spatial predicate, which operate on the XY projection only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub xy: Xy,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coordinates {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            xy: Xy::new(x, y),
            z: None,
            m: None,
        }
    }

    pub fn xy(xy: Xy) -> Self {
        Self { xy, z: None, m: None }
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    pub fn with_m(mut self, m: f64) -> Self {
        self.m = Some(m);
        self
    }

    pub fn dimensions(&self) -> Dimensions {
        match (self.z, self.m) {
            (None, None) => Dimensions::Xy,
            (Some(_), None) => Dimensions::Xyz,
            (None, Some(_)) => Dimensions::Xym,
            (Some(_), Some(_)) => Dimensions::Xyzm,
        }
    }
}

/// Number of ordinates per coordinate for the given dimensions.
pub fn ordinate_count(dims: Dimensions) -> usize {
    match dims {
        Dimensions::Xy => 2,
        Dimensions::Xyz | Dimensions::Xym => 3,
        Dimensions::Xyzm => 4,
        Dimensions::Unknown(n) => n,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lexicographic_order() {
        let a = Xy::new(1.0, 2.0);
        let b = Xy::new(1.0, 3.0);
        let c = Xy::new(2.0, 0.0);
        assert!(a.less(&b));
        assert!(a.less(&c));
        assert!(b.less(&c));
        assert!(!c.less(&a));
        assert!(!a.less(&a));

        assert_eq!(a.lexicographic_cmp(&b), Ordering::Less);
        assert_eq!(c.lexicographic_cmp(&a), Ordering::Greater);
        assert_eq!(a.lexicographic_cmp(&a), Ordering::Equal);
    }

    #[test]
    fn vector_arithmetic() {
        let a = Xy::new(1.0, 2.0);
        let b = Xy::new(3.0, 5.0);
        assert_eq!(b - a, Xy::new(2.0, 3.0));
        assert_eq!(a + b, Xy::new(4.0, 7.0));
        assert_eq!(a.scale(2.0), Xy::new(2.0, 4.0));
    }

    #[test]
    fn coordinate_dimensions() {
        assert_eq!(Coordinates::new(1.0, 2.0).dimensions(), Dimensions::Xy);
        assert_eq!(
            Coordinates::new(1.0, 2.0).with_z(3.0).dimensions(),
            Dimensions::Xyz
        );
        assert_eq!(
            Coordinates::new(1.0, 2.0).with_m(3.0).dimensions(),
            Dimensions::Xym
        );
        assert_eq!(
            Coordinates::new(1.0, 2.0).with_z(3.0).with_m(4.0).dimensions(),
            Dimensions::Xyzm
        );
    }

    #[test]
    fn ordinate_counts() {
        assert_eq!(ordinate_count(Dimensions::Xy), 2);
        assert_eq!(ordinate_count(Dimensions::Xyz), 3);
        assert_eq!(ordinate_count(Dimensions::Xym), 3);
        assert_eq!(ordinate_count(Dimensions::Xyzm), 4);
    }
}
