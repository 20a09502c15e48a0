// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Interval specific operations.

use crate::convert::ToFlint;
use crate::flint::Flint;

pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

pub trait Whole
{
  fn whole() -> Self;
}

/// Smallest flint enclosing both operands. The tracked value is the one of `self`.
impl<T: ToFlint> Hull<T> for Flint
{
  type Output = Flint;

  fn hull(&self, rhs: &T) -> Flint {
    let rhs = rhs.to_flint();
    if self.is_nan() || rhs.is_nan() {
      return Flint::NAN;
    }
    Flint::clamped(
      self.lower.min(rhs.lower),
      self.upper.max(rhs.upper),
      self.tracked)
  }
}

/// The real line, tracked value `0`.
impl Whole for Flint
{
  fn whole() -> Flint {
    Flint { lower: f64::NEG_INFINITY, upper: f64::INFINITY, tracked: 0.0 }
  }
}
