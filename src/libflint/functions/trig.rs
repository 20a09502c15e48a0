// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Trigonometric functions and their inverses.
//!
//! Sine and cosine reach their extrema on multiples of `π/2`. The real line is cut in quadrants `[jπ/2, (j+1)π/2)` and the extremum sitting at the start of quadrant `j` only depends on `j mod 4`:
//!
//! | `j mod 4` | sine    | cosine  |
//! |-----------|---------|---------|
//! | 0         |         | maximum |
//! | 1         | maximum |         |
//! | 2         |         | minimum |
//! | 3         | minimum |         |
//!
//! An interval crosses such an extremum iff a matching `j` lies in `(q(lower), q(upper)]`, where `q` is the quadrant index of a bound.

use crate::convert::ToFlint;
use crate::flint::Flint;
use crate::ops::Whole;
use crate::rounding::*;
use num_integer::Integer;
use tracing::trace;

/// Beyond `2^52` consecutive doubles are more than one apart and the quadrant index is meaningless.
const QUADRANT_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Quadrant indices of the bounds. They are computed from bounds stepped outward so an imprecise division by `π/2` can only widen the span.
fn quadrants(lower: f64, upper: f64) -> Option<(i64, i64)> {
  let q_lower = round_down(lower / Flint::FRAC_PI_2.tracked, 4).floor();
  let q_upper = round_up(upper / Flint::FRAC_PI_2.tracked, 4).floor();
  if q_lower.abs() < QUADRANT_LIMIT && q_upper.abs() < QUADRANT_LIMIT {
    Some((q_lower as i64, q_upper as i64))
  }
  else {
    None
  }
}

/// Some `j` in `(q_lower, q_upper]` has `j mod 4 == residue`.
fn crosses(q_lower: i64, q_upper: i64, residue: i64) -> bool {
  let first = q_lower + 1;
  first + (residue - first).mod_floor(&4) <= q_upper
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Sign {
  Positive,
  Negative,
  Straddle
}

impl Sign {
  fn of(f: &Flint) -> Sign {
    if f.lower > 0.0 { Sign::Positive }
    else if f.upper < 0.0 { Sign::Negative }
    else { Sign::Straddle }
  }
}

impl Flint
{
  /// `peak` and `trough` are the residues mod 4 of the quadrants starting on a maximum and a minimum of `f`.
  fn periodic(self, f: fn(f64) -> f64, peak: i64, trough: i64) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    let tracked = f(self.tracked);
    let full = Flint::clamped(-1.0, 1.0, tracked);
    if !self.is_finite() || self.width() >= Flint::TAU.lower {
      return full;
    }
    match quadrants(self.lower, self.upper) {
      None => full,
      Some((q_lower, q_upper)) => {
        let (a, b) = (f(self.lower), f(self.upper));
        let lower =
          if crosses(q_lower, q_upper, trough) { -1.0 }
          else { round_down(a.min(b), FUNCTION_ULPS).max(-1.0) };
        let upper =
          if crosses(q_lower, q_upper, peak) { 1.0 }
          else { round_up(a.max(b), FUNCTION_ULPS).min(1.0) };
        Flint::clamped(lower, upper, tracked)
      }
    }
  }

  pub fn sin(self) -> Flint {
    self.periodic(f64::sin, 1, 3)
  }

  pub fn cos(self) -> Flint {
    self.periodic(f64::cos, 0, 2)
  }

  /// Unbounded as soon as the interval may contain a pole: when the images of the bounds are out of order or the width reaches `π`.
  pub fn tan(self) -> Flint {
    if self.is_nan() {
      return Flint::NAN;
    }
    let (a, b) = (self.lower.tan(), self.upper.tan());
    if a > b || self.width() >= Flint::PI.lower || !self.is_finite() {
      trace!(target: "flint", lower = self.lower, upper = self.upper, "tan crosses a discontinuity");
      let whole = Flint::whole();
      return Flint::clamped(whole.lower, whole.upper, self.tracked.tan());
    }
    Flint::clamped(
      round_down(a, FUNCTION_ULPS),
      round_up(b, FUNCTION_ULPS),
      self.tracked.tan())
  }

  /// Bounds below `-1` or above `1` are clamped to `-π/2` and `π/2`.
  pub fn asin(self) -> Flint {
    self.unit_domain("asin", f64::asin, -Flint::FRAC_PI_2, Flint::FRAC_PI_2)
  }

  /// Decreasing, computed as `acos(-y)` on `y = -self` which is increasing.
  pub fn acos(self) -> Flint {
    (-self).unit_domain("acos", |y| (-y).acos(), Flint::ZERO, Flint::PI)
  }

  pub fn atan(self) -> Flint {
    self.increasing(f64::atan, FUNCTION_ULPS)
  }

  /// Four quadrant arctangent of `self / x`, in `[-π, π]`.
  ///
  /// When `x` is negative and `self` straddles zero, the region crosses the branch cut of the negative real axis. The result is then the continuous interval around `π` if the tracked value of `self` is positive, and around `-π` otherwise.
  pub fn atan2<T: ToFlint>(self, x: T) -> Flint {
    let x = x.to_flint();
    let y = self;
    if y.is_nan() || x.is_nan() {
      return Flint::NAN;
    }
    let tracked = y.tracked.atan2(x.tracked);
    let (lower, upper) = match (Sign::of(&y), Sign::of(&x)) {
      (Sign::Positive, Sign::Positive) => (y.lower.atan2(x.upper), y.upper.atan2(x.lower)),
      (Sign::Positive, Sign::Straddle) => (y.lower.atan2(x.upper), y.lower.atan2(x.lower)),
      (Sign::Positive, Sign::Negative) => (y.upper.atan2(x.upper), y.lower.atan2(x.lower)),
      (Sign::Straddle, Sign::Positive) => (y.lower.atan2(x.lower), y.upper.atan2(x.lower)),
      (Sign::Negative, Sign::Positive) => (y.lower.atan2(x.lower), y.upper.atan2(x.upper)),
      (Sign::Negative, Sign::Straddle) => (y.upper.atan2(x.lower), y.upper.atan2(x.upper)),
      (Sign::Negative, Sign::Negative) => (y.upper.atan2(x.lower), y.lower.atan2(x.upper)),
      (Sign::Straddle, Sign::Straddle) => {
        trace!(target: "flint", "atan2 of a region containing the origin");
        return Flint::clamped(-Flint::PI.upper, Flint::PI.upper, tracked);
      }
      (Sign::Straddle, Sign::Negative) => {
        trace!(target: "flint", y = y.tracked, "atan2 across the branch cut");
        let above = y.upper.atan2(x.upper);
        let below = y.lower.atan2(x.upper);
        let shift = FUNCTION_ULPS + ROUNDING_ULPS;
        return
          if y.tracked > 0.0 {
            Flint::clamped(
              round_down(above, FUNCTION_ULPS),
              round_up(below + Flint::TAU.upper, shift),
              if tracked < 0.0 { tracked + Flint::TAU.tracked } else { tracked })
          }
          else {
            Flint::clamped(
              round_down(above - Flint::TAU.upper, shift),
              round_up(below, FUNCTION_ULPS),
              if tracked > 0.0 { tracked - Flint::TAU.tracked } else { tracked })
          };
      }
    };
    Flint::clamped(
      round_down(lower, FUNCTION_ULPS),
      round_up(upper, FUNCTION_ULPS),
      tracked)
  }
}
