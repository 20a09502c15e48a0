// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::flint::Flint;
use crate::rounding::*;
use gcollections::ops::*;

impl Flint
{
  pub fn sinh(self) -> Flint {
    self.increasing(f64::sinh, FUNCTION_ULPS)
  }

  /// The minimum `1` is reached at zero, so an interval straddling zero has lower bound exactly `1`.
  pub fn cosh(self) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    let (near, far) = self.fold();
    let lower =
      if near == 0.0 { 1.0 }
      else { round_down(near.cosh(), FUNCTION_ULPS).max(1.0) };
    Flint::clamped(lower, round_up(far.cosh(), FUNCTION_ULPS), self.tracked.cosh())
  }

  pub fn tanh(self) -> Flint {
    self.increasing(f64::tanh, FUNCTION_ULPS)
  }

  pub fn asinh(self) -> Flint {
    self.increasing(f64::asinh, FUNCTION_ULPS)
  }

  /// Defined above `1`, the lower bound is clamped to `0`.
  pub fn acosh(self) -> Flint {
    self.half_line("acosh", f64::acosh, 1.0, 0.0, FUNCTION_ULPS)
  }

  /// Defined on `[-1, 1]`, bounds beyond it are clamped to the infinities.
  pub fn atanh(self) -> Flint {
    self.unit_domain("atanh", f64::atanh,
      Flint::singleton(f64::NEG_INFINITY), Flint::singleton(f64::INFINITY))
  }
}
