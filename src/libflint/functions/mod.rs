// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementary functions of flints.
//!
//! Most functions are monotonic over their domain, their image is obtained by evaluating the scalar function on both bounds. Since the host math library adds its own error on top of the rounding of the operands, these bounds are widened by [`FUNCTION_ULPS`](../rounding/constant.FUNCTION_ULPS.html). Functions defined on a half line (`sqrt`, logarithms, `acosh`) clamp the bound that falls outside of the domain to the value at the domain edge, and only give NaN when the whole interval is outside. Non-monotonic functions (`abs`, `hypot`, `powf`, trigonometric functions, `cosh`) locate their extrema explicitly.
//!
//! ```rust
//! use flint::Flint;
//! use gcollections::ops::*;
//!
//! let x = Flint::new(-1.0, 4.0, 2.0);
//! let r = x.sqrt();
//! assert_eq!(r.lower(), 0.0);
//! assert!(r.contains(&2.0));
//! assert!(Flint::new(-3.0, -1.0, -2.0).sqrt().is_nan());
//! ```

mod hyperbolic;
mod power;
mod trig;

use crate::convert::ToFlint;
use crate::flint::Flint;
use crate::rounding::*;
use tracing::trace;

impl Flint
{
  /// Image of a non-decreasing function.
  fn increasing(self, f: fn(f64) -> f64, ulps: u32) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    Flint::clamped(
      round_down(f(self.lower), ulps),
      round_up(f(self.upper), ulps),
      f(self.tracked))
  }

  /// Image of a non-increasing function: the bounds swap.
  fn decreasing(self, f: fn(f64) -> f64, ulps: u32) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    Flint::clamped(
      round_down(f(self.upper), ulps),
      round_up(f(self.lower), ulps),
      f(self.tracked))
  }

  /// Image of a non-decreasing function defined on `[domain_min, +inf)`, where `f(domain_min) == edge`.
  fn half_line(self, name: &'static str, f: fn(f64) -> f64, domain_min: f64, edge: f64, ulps: u32) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    if self.upper < domain_min {
      trace!(target: "flint", function = name, lower = self.lower, upper = self.upper, "interval outside of the domain");
      return Flint::NAN;
    }
    let lower =
      if self.lower < domain_min { edge }
      else { round_down(f(self.lower), ulps) };
    let tracked =
      if self.tracked < domain_min { edge }
      else { f(self.tracked) };
    Flint::clamped(lower, round_up(f(self.upper), ulps), tracked)
  }

  /// Image of a non-decreasing function defined on `[-1, 1]`. Bounds beyond the domain take the value of `at_minus_one` or `at_one`.
  fn unit_domain(self, name: &'static str, f: fn(f64) -> f64, at_minus_one: Flint, at_one: Flint) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    if self.upper < -1.0 || self.lower > 1.0 {
      trace!(target: "flint", function = name, lower = self.lower, upper = self.upper, "interval outside of the domain");
      return Flint::NAN;
    }
    let lower =
      if self.lower < -1.0 { at_minus_one.lower }
      else { round_down(f(self.lower), FUNCTION_ULPS) };
    let upper =
      if self.upper > 1.0 { at_one.upper }
      else { round_up(f(self.upper), FUNCTION_ULPS) };
    let tracked =
      if self.tracked < -1.0 { at_minus_one.tracked }
      else if self.tracked > 1.0 { at_one.tracked }
      else { f(self.tracked) };
    Flint::clamped(lower, upper, tracked)
  }

  /// Magnitudes closest to and farthest from zero.
  fn fold(&self) -> (f64, f64) {
    if self.upper < 0.0 {
      (-self.upper, -self.lower)
    }
    else if self.lower < 0.0 {
      (0.0, (-self.lower).max(self.upper))
    }
    else {
      (self.lower, self.upper)
    }
  }

  /// An interval straddling zero folds onto `[0, max(-lower, upper)]`.
  pub fn abs(self) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    let (near, far) = self.fold();
    Flint::clamped(near, far, self.tracked.abs())
  }

  /// Square root. The lower bound is clamped to `0` when the interval dips below zero.
  pub fn sqrt(self) -> Flint {
    self.half_line("sqrt", f64::sqrt, 0.0, 0.0, ROUNDING_ULPS)
  }

  pub fn cbrt(self) -> Flint {
    self.increasing(f64::cbrt, FUNCTION_ULPS)
  }

  /// `sqrt(self^2 + other^2)`, minimal where each operand is closest to zero.
  pub fn hypot<T: ToFlint>(self, other: T) -> Flint {
    let other = other.to_flint();
    if self.is_nan() || other.is_nan() {
      return Flint::NAN;
    }
    let (x_near, x_far) = self.fold();
    let (y_near, y_far) = other.fold();
    let near = x_near.hypot(y_near);
    let lower =
      if near == 0.0 { 0.0 }
      else { round_down(near, FUNCTION_ULPS).max(0.0) };
    Flint::clamped(
      lower,
      round_up(x_far.hypot(y_far), FUNCTION_ULPS),
      self.tracked.hypot(other.tracked))
  }

  pub fn exp(self) -> Flint {
    self.increasing(f64::exp, FUNCTION_ULPS)
  }

  pub fn exp2(self) -> Flint {
    self.increasing(f64::exp2, FUNCTION_ULPS)
  }

  /// `e^x - 1`, accurate near zero.
  pub fn exp_m1(self) -> Flint {
    self.increasing(f64::exp_m1, FUNCTION_ULPS)
  }

  /// Natural logarithm, with lower bound `-inf` when the interval reaches below zero.
  pub fn ln(self) -> Flint {
    self.half_line("ln", f64::ln, 0.0, f64::NEG_INFINITY, FUNCTION_ULPS)
  }

  pub fn log10(self) -> Flint {
    self.half_line("log10", f64::log10, 0.0, f64::NEG_INFINITY, FUNCTION_ULPS)
  }

  pub fn log2(self) -> Flint {
    self.half_line("log2", f64::log2, 0.0, f64::NEG_INFINITY, FUNCTION_ULPS)
  }

  /// `ln(1 + x)`, defined above `-1`.
  pub fn ln_1p(self) -> Flint {
    self.half_line("ln_1p", f64::ln_1p, -1.0, f64::NEG_INFINITY, FUNCTION_ULPS)
  }

  pub fn erf(self) -> Flint {
    self.increasing(libm::erf, FUNCTION_ULPS)
  }

  /// Complementary error function, decreasing.
  pub fn erfc(self) -> Flint {
    self.decreasing(libm::erfc, FUNCTION_ULPS)
  }
}
