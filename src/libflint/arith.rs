// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Enclosure-preserving arithmetic.
//!
//! Bounds are computed from the operand bounds, then stepped outward by one ulp to absorb the rounding of the hardware. The tracked value is computed with plain floating point arithmetic. A NaN operand gives the NaN flint.
//!
//! Any `ToFlint` scalar can appear on either side of an operator, and each operator has an in-place (`+=`, ...) variant overwriting its left operand.
//!
//! Division by an interval containing zero is not guarded: the bounds follow IEEE 754 and may be infinite, and the result is only an enclosure when the divisor excludes zero.

use crate::convert::ToFlint;
use crate::flint::Flint;
use crate::rounding::*;
use num_traits::{Inv, One, Zero};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

fn sum(f1: &Flint, f2: &Flint) -> Flint {
  if f1.is_nan() || f2.is_nan() {
    return Flint::NAN;
  }
  Flint::clamped(
    round_down(f1.lower + f2.lower, ROUNDING_ULPS),
    round_up(f1.upper + f2.upper, ROUNDING_ULPS),
    f1.tracked + f2.tracked)
}

fn difference(f1: &Flint, f2: &Flint) -> Flint {
  if f1.is_nan() || f2.is_nan() {
    return Flint::NAN;
  }
  Flint::clamped(
    round_down(f1.lower - f2.upper, ROUNDING_ULPS),
    round_up(f1.upper - f2.lower, ROUNDING_ULPS),
    f1.tracked - f2.tracked)
}

fn product(f1: &Flint, f2: &Flint) -> Flint {
  if f1.is_nan() || f2.is_nan() {
    return Flint::NAN;
  }
  let (lower, upper) = extremes([
    f1.lower * f2.lower, f1.lower * f2.upper,
    f1.upper * f2.lower, f1.upper * f2.upper]);
  Flint::clamped(
    round_down(lower, ROUNDING_ULPS),
    round_up(upper, ROUNDING_ULPS),
    f1.tracked * f2.tracked)
}

fn quotient(f1: &Flint, f2: &Flint) -> Flint {
  if f1.is_nan() || f2.is_nan() {
    return Flint::NAN;
  }
  let (lower, upper) = extremes([
    f1.lower / f2.lower, f1.lower / f2.upper,
    f1.upper / f2.lower, f1.upper / f2.upper]);
  Flint::clamped(
    round_down(lower, ROUNDING_ULPS),
    round_up(upper, ROUNDING_ULPS),
    f1.tracked / f2.tracked)
}

impl Flint
{
  /// Identity.
  pub fn positive(self) -> Flint {
    self
  }
}

impl Neg for Flint
{
  type Output = Flint;

  fn neg(self) -> Flint {
    Flint { lower: -self.upper, upper: -self.lower, tracked: -self.tracked }
  }
}

impl<'a> Neg for &'a Flint
{
  type Output = Flint;

  fn neg(self) -> Flint {
    -*self
  }
}

macro_rules! flint_binop_impl
{
  ( $( $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $op:ident );* ) =>
  {$(
    impl<T: ToFlint> $imp<T> for Flint
    {
      type Output = Flint;

      fn $method(self, other: T) -> Flint {
        $op(&self, &other.to_flint())
      }
    }

    impl<'a, T: ToFlint> $imp<T> for &'a Flint
    {
      type Output = Flint;

      fn $method(self, other: T) -> Flint {
        $op(self, &other.to_flint())
      }
    }

    impl<T: ToFlint> $assign_imp<T> for Flint
    {
      fn $assign_method(&mut self, other: T) {
        *self = $op(self, &other.to_flint());
      }
    }

    scalar_lhs_binop!(impl $imp, $method, $op;
      f64, f32, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);
  )*}
}

flint_binop_impl! {
  Add, add, AddAssign, add_assign, sum;
  Sub, sub, SubAssign, sub_assign, difference;
  Mul, mul, MulAssign, mul_assign, product;
  Div, div, DivAssign, div_assign, quotient
}

impl Zero for Flint
{
  fn zero() -> Flint {
    Flint::ZERO
  }

  /// Exactly zero, not "could be zero".
  fn is_zero(&self) -> bool {
    self.lower == 0.0 && self.upper == 0.0
  }
}

impl One for Flint
{
  fn one() -> Flint {
    Flint::ONE
  }
}

impl Inv for Flint
{
  type Output = Flint;

  fn inv(self) -> Flint {
    quotient(&Flint::ONE, &self)
  }
}
