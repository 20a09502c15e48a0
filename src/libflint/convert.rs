// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Conversion of scalars into enclosing flints, and back.
//!
//! Integers that fit in the 53 bits of a double mantissa are exact and give a degenerate interval. Everything else is considered imprecise by one ulp on each side: a double literal like `0.1` stands for any real number that rounds to it.
//!
//! Every binary operation of the crate accepts any `ToFlint` type as operand, so scalars mix freely with flints.
//!
//! ```rust
//! use flint::{Flint, ToFlint};
//!
//! let x = Flint::from_double(1.5);
//! assert!(x + 1 == 2.5);
//! assert!(2 * x == 3.0);
//! assert_eq!(f64::from(x), 1.5);
//! ```

use crate::flint::Flint;
use crate::rounding::Ulp;
use gcollections::ops::*;
use num_traits::{PrimInt, ToPrimitive};

/// Largest integer magnitude exactly representable as a double, `2^53 - 1`.
pub const MAX_EXACT_INT: f64 = 9_007_199_254_740_991.0;

impl Flint
{
  /// Exact degenerate interval when `|n| <= 2^53 - 1`, otherwise one ulp on each side of the rounded value.
  pub fn from_integer<I: PrimInt>(n: I) -> Flint {
    match n.to_f64() {
      Some(d) if d.abs() <= MAX_EXACT_INT => Flint::singleton(d),
      Some(d) => Flint::clamped(d.step_down(), d.step_up(), d),
      None => Flint::NAN
    }
  }

  pub fn from_double(x: f64) -> Flint {
    Flint::clamped(x.step_down(), x.step_up(), x)
  }

  /// The bounds are the single precision neighbours of `x`: its uncertainty is the one of the narrower type.
  pub fn from_float32(x: f32) -> Flint {
    Flint::clamped(f64::from(x.step_down()), f64::from(x.step_up()), f64::from(x))
  }
}

/// Types that convert into an enclosing flint.
pub trait ToFlint: Copy
{
  fn to_flint(self) -> Flint;
}

impl ToFlint for Flint
{
  fn to_flint(self) -> Flint { self }
}

impl<'a> ToFlint for &'a Flint
{
  fn to_flint(self) -> Flint { *self }
}

impl ToFlint for f64
{
  fn to_flint(self) -> Flint {
    Flint::from_double(self)
  }
}

impl ToFlint for f32
{
  fn to_flint(self) -> Flint {
    Flint::from_float32(self)
  }
}

macro_rules! integer_to_flint_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl ToFlint for $t
    {
      fn to_flint(self) -> Flint {
        Flint::from_integer(self)
      }
    }

    impl From<$t> for Flint
    {
      fn from(n: $t) -> Flint {
        Flint::from_integer(n)
      }
    }
  )*}
}

integer_to_flint_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize);

impl From<f64> for Flint
{
  fn from(x: f64) -> Flint {
    Flint::from_double(x)
  }
}

impl From<f32> for Flint
{
  fn from(x: f32) -> Flint {
    Flint::from_float32(x)
  }
}

/// The tracked value.
impl From<Flint> for f64
{
  fn from(f: Flint) -> f64 {
    f.tracked
  }
}

/// The tracked value, rounded to single precision.
impl From<Flint> for f32
{
  fn from(f: Flint) -> f32 {
    f.tracked as f32
  }
}
