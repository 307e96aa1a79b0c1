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
//! Structural pointwise equality between geometries.
//!
//! Two geometries are exactly equal when they are defined by the same
//! control points in the same order. Options can relax ordering (member
//! order in collections and traversal direction of curves) and allow a
//! per-ordinate absolute tolerance. Line and two point LineString values
//! describe the same curve and compare as equal.
use crate::coord::Coordinates;
use crate::geometry::{Geometry, LineString, Point, Polygon};

/// Options for [Geometry::equals_exact].
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualsExactOptions {
    ignore_order: bool,
    tolerance: f64,
}

impl EqualsExactOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore the order of members within multi geometries and collections,
    /// and the traversal direction of curves.
    pub fn ignore_order(mut self) -> Self {
        self.ignore_order = true;
        self
    }

    /// Allow each ordinate to differ by up to `tolerance`.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

pub(crate) fn equals_exact(a: &Geometry, b: &Geometry, opts: EqualsExactOptions) -> bool {
    use Geometry as G;
    match (a, b) {
        (G::Point(p1), G::Point(p2)) => points_equal(p1, p2, opts),
        (G::Polygon(p1), G::Polygon(p2)) => polygons_equal(p1, p2, opts),
        (G::MultiPoint(m1), G::MultiPoint(m2)) => {
            m1.dimensions() == m2.dimensions()
                && members_equal(
                    &m1.points().collect::<Vec<_>>(),
                    &m2.points().collect::<Vec<_>>(),
                    opts,
                    |x, y| points_equal(x, y, opts),
                )
        }
        (G::MultiLineString(m1), G::MultiLineString(m2)) => {
            m1.dimensions() == m2.dimensions()
                && members_equal(
                    &m1.line_strings().collect::<Vec<_>>(),
                    &m2.line_strings().collect::<Vec<_>>(),
                    opts,
                    |x, y| curves_equal(&x.coordinates(), &y.coordinates(), opts),
                )
        }
        (G::MultiPolygon(m1), G::MultiPolygon(m2)) => {
            m1.dimensions() == m2.dimensions()
                && members_equal(
                    &m1.polygons().collect::<Vec<_>>(),
                    &m2.polygons().collect::<Vec<_>>(),
                    opts,
                    |x, y| polygons_equal(x, y, opts),
                )
        }
        (G::GeometryCollection(c1), G::GeometryCollection(c2)) => {
            c1.dimensions() == c2.dimensions()
                && members_equal(
                    &c1.geometries().collect::<Vec<_>>(),
                    &c2.geometries().collect::<Vec<_>>(),
                    opts,
                    |x, y| equals_exact(x, y, opts),
                )
        }
        // Line, LineString and LinearRing all describe curves and compare
        // with each other.
        (a, b) => {
            a.dimensions() == b.dimensions()
                && match (curve_coordinates(a), curve_coordinates(b)) {
                    (Some(c1), Some(c2)) => curves_equal(&c1, &c2, opts),
                    _ => false,
                }
        }
    }
}

fn curve_coordinates(g: &Geometry) -> Option<Vec<Coordinates>> {
    match g {
        Geometry::Line(ln) => Some(vec![ln.start(), ln.end()]),
        Geometry::LineString(ls) => Some(ls.coordinates()),
        Geometry::LinearRing(lr) => Some(lr.line_string().coordinates()),
        _ => None,
    }
}

fn ordinates_equal(a: Option<f64>, b: Option<f64>, tolerance: f64) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => (a - b).abs() <= tolerance,
        _ => false,
    }
}

fn coordinates_equal(a: Coordinates, b: Coordinates, opts: EqualsExactOptions) -> bool {
    (a.xy.x - b.xy.x).abs() <= opts.tolerance
        && (a.xy.y - b.xy.y).abs() <= opts.tolerance
        && ordinates_equal(a.z, b.z, opts.tolerance)
        && ordinates_equal(a.m, b.m, opts.tolerance)
}

fn points_equal(a: &Point, b: &Point, opts: EqualsExactOptions) -> bool {
    match (a.coordinates(), b.coordinates()) {
        (None, None) => a.dimensions() == b.dimensions(),
        (Some(c1), Some(c2)) => coordinates_equal(c1, c2, opts),
        _ => false,
    }
}

fn sequences_equal(a: &[Coordinates], b: &[Coordinates], opts: EqualsExactOptions) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b.iter())
            .all(|(&c1, &c2)| coordinates_equal(c1, c2, opts))
}

fn curves_equal(a: &[Coordinates], b: &[Coordinates], opts: EqualsExactOptions) -> bool {
    if sequences_equal(a, b, opts) {
        return true;
    }
    if !opts.ignore_order {
        return false;
    }
    let reversed: Vec<Coordinates> = b.iter().rev().copied().collect();
    sequences_equal(a, &reversed, opts)
}

fn polygons_equal(a: &Polygon, b: &Polygon, opts: EqualsExactOptions) -> bool {
    if a.dimensions() != b.dimensions() {
        return false;
    }
    if a.is_empty() || b.is_empty() {
        return a.is_empty() && b.is_empty();
    }
    let rings_equal = |x: &&LineString, y: &&LineString| -> bool {
        curves_equal(&x.coordinates(), &y.coordinates(), opts)
    };
    if !rings_equal(&a.exterior_ring(), &b.exterior_ring()) {
        return false;
    }
    let holes_a: Vec<&LineString> = a.rings().skip(1).collect();
    let holes_b: Vec<&LineString> = b.rings().skip(1).collect();
    members_equal(&holes_a, &holes_b, opts, |x, y| rings_equal(x, y))
}

/// Compare member lists either positionally or, under ignore_order, as a
/// multiset with greedy matching.
fn members_equal<T>(
    a: &[T],
    b: &[T],
    opts: EqualsExactOptions,
    eq: impl Fn(&T, &T) -> bool,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if !opts.ignore_order {
        return a.iter().zip(b.iter()).all(|(x, y)| eq(x, y));
    }
    let mut used = vec![false; b.len()];
    'outer: for x in a {
        for (j, y) in b.iter().enumerate() {
            if !used[j] && eq(x, y) {
                used[j] = true;
                continue 'outer;
            }
        }
        return false;
    }
    true
}
