// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors raised when a flint is assembled from raw parts.
//!
//! Arithmetic and elementary functions never fail: a domain error is the NaN flint. Only checked construction (`Flint::try_new` and deserialization) reports errors.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlintError {
  #[error("lower bound {lower} is greater than upper bound {upper}")]
  InvertedBounds { lower: f64, upper: f64 },
  #[error("only some of the fields are NaN, a NaN flint has all three fields NaN")]
  PartialNan,
  #[error("tracked value {tracked} lies outside of [{lower}, {upper}]")]
  TrackedOutOfBounds { lower: f64, upper: f64, tracked: f64 },
}
