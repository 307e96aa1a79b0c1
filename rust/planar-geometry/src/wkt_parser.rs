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
//! Recursive-descent parser for the well-known text form.
//!
//! Function names are chosen to match closely with the BNF productions in
//! the WKT grammar. Functions prefixed with `next` consume token(s) and
//! build the next production.
//!
//! Keywords are case-insensitive. Inside a MULTIPOINT body a point may
//! appear without its surrounding parentheses (PostGIS emits this form), so
//! both `MULTIPOINT(1 2,3 4)` and `MULTIPOINT((1 2),(3 4))` are accepted.
use std::str::FromStr;

use geo_traits::Dimensions;

use crate::coord::Coordinates;
use crate::error::PlanarGeometryError;
use crate::geometry::{
    Geometry, GeometryCollection, Line, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon, Validations,
};
use crate::types::GeometryTypeId;

pub fn parse_wkt(input: &str, validations: Validations) -> Result<Geometry, PlanarGeometryError> {
    let mut parser = Parser {
        lexer: Lexer::new(input),
        validations,
    };
    let geom = parser.next_geometry_tagged_text()?;
    parser.check_eof()?;
    Ok(geom)
}

/// Splits the input into identifier, numeric literal, punctuation and sign
/// tokens. A leading '-' is always its own token; a '-' inside an exponent
/// is part of the numeric literal.
struct Lexer<'a> {
    rest: &'a str,
    peeked: Option<&'a str>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            rest: input,
            peeked: None,
        }
    }

    fn peek(&mut self) -> Result<Option<&'a str>, PlanarGeometryError> {
        if self.peeked.is_none() {
            self.peeked = self.scan()?;
        }
        Ok(self.peeked)
    }

    fn next(&mut self) -> Result<Option<&'a str>, PlanarGeometryError> {
        match self.peeked.take() {
            Some(tok) => Ok(Some(tok)),
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Result<Option<&'a str>, PlanarGeometryError> {
        self.rest = self.rest.trim_start();
        let mut chars = self.rest.char_indices();
        let (_, first) = match chars.next() {
            Some(first) => first,
            None => return Ok(None),
        };

        let len = match first {
            '(' | ')' | ',' | '-' => first.len_utf8(),
            c if c.is_ascii_alphabetic() => self
                .rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(self.rest.len()),
            c if c.is_ascii_digit() || c == '.' => {
                let bytes = self.rest.as_bytes();
                let mut end = 1;
                while end < bytes.len() {
                    let b = bytes[end];
                    let part_of_literal = b.is_ascii_digit()
                        || b == b'.'
                        || b == b'e'
                        || b == b'E'
                        || ((b == b'+' || b == b'-')
                            && matches!(bytes[end - 1], b'e' | b'E'));
                    if !part_of_literal {
                        break;
                    }
                    end += 1;
                }
                end
            }
            c => {
                return Err(PlanarGeometryError::Parse(format!(
                    "unexpected character: {c:?}"
                )))
            }
        };

        let (tok, rest) = self.rest.split_at(len);
        self.rest = rest;
        Ok(Some(tok))
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    validations: Validations,
}

impl<'a> Parser<'a> {
    fn next_token(&mut self) -> Result<&'a str, PlanarGeometryError> {
        self.lexer.next()?.ok_or_else(|| {
            PlanarGeometryError::Parse("unexpected end of input".to_string())
        })
    }

    fn peek_token(&mut self) -> Result<&'a str, PlanarGeometryError> {
        self.lexer.peek()?.ok_or_else(|| {
            PlanarGeometryError::Parse("unexpected end of input".to_string())
        })
    }

    fn check_eof(&mut self) -> Result<(), PlanarGeometryError> {
        match self.lexer.next()? {
            None => Ok(()),
            Some(tok) => Err(PlanarGeometryError::Parse(format!(
                "expected EOF but encountered {tok}"
            ))),
        }
    }

    fn next_geometry_tagged_text(&mut self) -> Result<Geometry, PlanarGeometryError> {
        let tag = self.next_token()?;
        let type_id = GeometryTypeId::from_str(tag)
            .map_err(|_| PlanarGeometryError::Parse(format!("unexpected token: {tag}")))?;
        let dims = self.next_optional_dimension_suffix()?;

        match type_id {
            GeometryTypeId::Point => {
                let coords = self.next_point_text(dims)?;
                Ok(match coords {
                    Some(coords) => Point::new(coords).into(),
                    None => Point::empty(dims).into(),
                })
            }
            GeometryTypeId::LineString => {
                let coords = self.next_line_string_text(dims)?;
                match coords.len() {
                    0 => Ok(LineString::empty(dims).into()),
                    2 => Ok(Line::try_new_with(coords[0], coords[1], self.validations)?.into()),
                    _ => Ok(LineString::try_new_with(coords, self.validations)?.into()),
                }
            }
            GeometryTypeId::Polygon => {
                let rings = self.next_polygon_text(dims)?;
                if rings.is_empty() {
                    Ok(Polygon::empty(dims).into())
                } else {
                    Ok(Polygon::try_from_coordinates(rings, self.validations)?.into())
                }
            }
            GeometryTypeId::MultiPoint => {
                let coords = self.next_multi_point_text(dims)?;
                let pts = coords
                    .into_iter()
                    .map(|c| match c {
                        Some(c) => Point::new(c),
                        None => Point::empty(dims),
                    })
                    .collect();
                Ok(MultiPoint::try_new_with_dim(dims, pts)?.into())
            }
            GeometryTypeId::MultiLineString => {
                // Same production as the polygon body.
                let members = self.next_polygon_text(dims)?;
                let line_strings = members
                    .into_iter()
                    .map(|pts| {
                        if pts.is_empty() {
                            Ok(LineString::empty(dims))
                        } else {
                            LineString::try_new_with(pts, self.validations)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiLineString::try_new_with_dim(dims, line_strings)?.into())
            }
            GeometryTypeId::MultiPolygon => {
                let members = self.next_multi_polygon_text(dims)?;
                let polygons = members
                    .into_iter()
                    .map(|rings| {
                        if rings.is_empty() {
                            Ok(Polygon::empty(dims))
                        } else {
                            Polygon::try_from_coordinates(rings, self.validations)
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(MultiPolygon::try_new_with_dim(dims, polygons, self.validations)?.into())
            }
            GeometryTypeId::GeometryCollection => self.next_geometry_collection_text(dims),
        }
    }

    /// Z, M or ZM between the tag and the body, if present.
    fn next_optional_dimension_suffix(&mut self) -> Result<Dimensions, PlanarGeometryError> {
        let tok = self.peek_token()?;
        let dims = match tok.to_ascii_uppercase().as_str() {
            "Z" => Dimensions::Xyz,
            "M" => Dimensions::Xym,
            "ZM" => Dimensions::Xyzm,
            _ => return Ok(Dimensions::Xy),
        };
        self.next_token()?;
        Ok(dims)
    }

    fn next_empty_set_or_left_paren(&mut self) -> Result<&'a str, PlanarGeometryError> {
        let tok = self.next_token()?;
        if !tok.eq_ignore_ascii_case("EMPTY") && tok != "(" {
            return Err(PlanarGeometryError::Parse(format!(
                "expected 'EMPTY' or '(' but encountered {tok}"
            )));
        }
        Ok(tok)
    }

    fn next_right_paren(&mut self) -> Result<(), PlanarGeometryError> {
        let tok = self.next_token()?;
        if tok != ")" {
            return Err(PlanarGeometryError::Parse(format!(
                "expected ')' but encountered {tok}"
            )));
        }
        Ok(())
    }

    fn next_comma_or_right_paren(&mut self) -> Result<&'a str, PlanarGeometryError> {
        let tok = self.next_token()?;
        if tok != ")" && tok != "," {
            return Err(PlanarGeometryError::Parse(format!(
                "expected ')' or ',' but encountered {tok}"
            )));
        }
        Ok(tok)
    }

    fn next_point(&mut self, dims: Dimensions) -> Result<Coordinates, PlanarGeometryError> {
        let x = self.next_signed_numeric_literal()?;
        let y = self.next_signed_numeric_literal()?;
        let mut coords = Coordinates::new(x, y);
        match dims {
            Dimensions::Xy => {}
            Dimensions::Xyz => coords = coords.with_z(self.next_signed_numeric_literal()?),
            Dimensions::Xym => coords = coords.with_m(self.next_signed_numeric_literal()?),
            Dimensions::Xyzm => {
                coords = coords
                    .with_z(self.next_signed_numeric_literal()?)
                    .with_m(self.next_signed_numeric_literal()?)
            }
            Dimensions::Unknown(_) => {
                return Err(PlanarGeometryError::Parse(
                    "unknown coordinate dimensions".to_string(),
                ))
            }
        }
        Ok(coords)
    }

    fn next_signed_numeric_literal(&mut self) -> Result<f64, PlanarGeometryError> {
        let mut negative = false;
        let mut tok = self.next_token()?;
        if tok == "-" {
            negative = true;
            tok = self.next_token()?;
        }
        let f: f64 = tok.parse().map_err(|_| {
            PlanarGeometryError::Parse(format!("invalid signed numeric literal: {tok}"))
        })?;
        // NaNs and infinities are not allowed by the WKT grammar.
        if !f.is_finite() {
            return Err(PlanarGeometryError::Parse(format!(
                "invalid signed numeric literal: {tok}"
            )));
        }
        Ok(if negative { -f } else { f })
    }

    fn next_point_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Option<Coordinates>, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(None);
        }
        let pt = self.next_point(dims)?;
        self.next_right_paren()?;
        Ok(Some(pt))
    }

    fn next_line_string_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Vec<Coordinates>, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(Vec::new());
        }
        let mut pts = vec![self.next_point(dims)?];
        while self.next_comma_or_right_paren()? == "," {
            pts.push(self.next_point(dims)?);
        }
        Ok(pts)
    }

    fn next_polygon_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Vec<Vec<Coordinates>>, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(Vec::new());
        }
        let mut rings = vec![self.next_line_string_text(dims)?];
        while self.next_comma_or_right_paren()? == "," {
            rings.push(self.next_line_string_text(dims)?);
        }
        Ok(rings)
    }

    fn next_multi_point_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Vec<Option<Coordinates>>, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(Vec::new());
        }
        let mut pts = vec![self.next_multi_point_style_point(dims)?];
        while self.next_comma_or_right_paren()? == "," {
            pts.push(self.next_multi_point_style_point(dims)?);
        }
        Ok(pts)
    }

    /// A point inside a MULTIPOINT body: EMPTY, a parenthesised point, or a
    /// bare coordinate pair.
    fn next_multi_point_style_point(
        &mut self,
        dims: Dimensions,
    ) -> Result<Option<Coordinates>, PlanarGeometryError> {
        let tok = self.peek_token()?;
        if tok.eq_ignore_ascii_case("EMPTY") {
            self.next_token()?;
            return Ok(None);
        }
        let mut use_parens = false;
        if tok == "(" {
            self.next_token()?;
            use_parens = true;
        }
        let pt = self.next_point(dims)?;
        if use_parens {
            self.next_right_paren()?;
        }
        Ok(Some(pt))
    }

    fn next_multi_polygon_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Vec<Vec<Vec<Coordinates>>>, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(Vec::new());
        }
        let mut polys = vec![self.next_polygon_text(dims)?];
        while self.next_comma_or_right_paren()? == "," {
            polys.push(self.next_polygon_text(dims)?);
        }
        Ok(polys)
    }

    fn next_geometry_collection_text(
        &mut self,
        dims: Dimensions,
    ) -> Result<Geometry, PlanarGeometryError> {
        let tok = self.next_empty_set_or_left_paren()?;
        if tok != "(" {
            return Ok(GeometryCollection::empty(dims).into());
        }
        let mut geoms = vec![self.next_geometry_tagged_text()?];
        while self.next_comma_or_right_paren()? == "," {
            geoms.push(self.next_geometry_tagged_text()?);
        }
        Ok(GeometryCollection::try_new_with_dim(dims, geoms)?.into())
    }
}
