// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outward rounding by whole units in the last place (ulps).
//!
//! The hardware rounds to nearest, so a computed bound can be half an ulp away from the exact value. Stepping the lower bound down and the upper bound up by one ulp absorbs that error. Functions of the host math library are assumed to be accurate to one ulp, and get one more ulp of widening on top of that.

/// Widening applied to correctly rounded IEEE operations (`+`, `-`, `*`, `/`, `sqrt`).
pub const ROUNDING_ULPS: u32 = 1;

/// Extra widening granted to the host math library. Raise it on platforms whose `libm` is less accurate than one ulp.
pub const LIBRARY_ULPS: u32 = 1;

/// Widening applied to every other elementary function.
pub const FUNCTION_ULPS: u32 = ROUNDING_ULPS + LIBRARY_ULPS;

/// Stepping to the adjacent representable value, like C's `nextafter` towards an infinity.
pub trait Ulp: Copy
{
  /// Smallest representable value greater than `self`. NaN and `+inf` are returned unchanged.
  fn step_up(self) -> Self;
  /// Greatest representable value less than `self`. NaN and `-inf` are returned unchanged.
  fn step_down(self) -> Self;
}

macro_rules! ulp_impl
{
  ( $( $t: ident ),* ) =>
  {$(
    impl Ulp for $t
    {
      fn step_up(self) -> $t {
        if self.is_nan() || self == $t::INFINITY {
          self
        }
        else if self == 0.0 {
          // Both zeros step to the smallest positive subnormal.
          $t::from_bits(1)
        }
        else if self > 0.0 {
          $t::from_bits(self.to_bits() + 1)
        }
        else {
          $t::from_bits(self.to_bits() - 1)
        }
      }

      fn step_down(self) -> $t {
        -(-self).step_up()
      }
    }
  )*}
}

ulp_impl!(f32, f64);

/// Steps `x` down by `ulps` units in the last place.
pub fn round_down(x: f64, ulps: u32) -> f64 {
  (0..ulps).fold(x, |x, _| x.step_down())
}

/// Steps `x` up by `ulps` units in the last place.
pub fn round_up(x: f64, ulps: u32) -> f64 {
  (0..ulps).fold(x, |x, _| x.step_up())
}

/// Minimum and maximum of four candidate bounds. NaN candidates are ignored unless all of them are NaN.
pub fn extremes(values: [f64; 4]) -> (f64, f64) {
  values[1..].iter().fold((values[0], values[0]),
    |(lo, hi), &x| (lo.min(x), hi.max(x)))
}
