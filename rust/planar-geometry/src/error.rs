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
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanarGeometryError {
    /// Malformed WKT or WKB input. The message names the offending token
    /// or byte offset.
    #[error("{0}")]
    Parse(String),
    /// A geometry failed one of its constructor assertions.
    #[error("{0}")]
    Invalid(String),
    /// The requested predicate is not defined for this ordered pair of
    /// geometry types.
    #[error("not implemented: {0} with {1}")]
    NotImplemented(&'static str, &'static str),
    #[error("{0}")]
    IO(io::Error),
}

impl From<io::Error> for PlanarGeometryError {
    fn from(value: io::Error) -> Self {
        PlanarGeometryError::IO(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn errors() {
        let invalid = PlanarGeometryError::Invalid("polygon rings must be closed".to_string());
        assert_eq!(invalid.to_string(), "polygon rings must be closed");

        let parse = PlanarGeometryError::Parse("unexpected token: FOO".to_string());
        assert_eq!(parse.to_string(), "unexpected token: FOO");

        let not_implemented = PlanarGeometryError::NotImplemented("Polygon", "Polygon");
        assert_eq!(
            not_implemented.to_string(),
            "not implemented: Polygon with Polygon"
        );

        let io_err = PlanarGeometryError::from(io::Error::new(io::ErrorKind::Other, "foofy"));
        assert_eq!(io_err.to_string(), "foofy");
    }
}
