// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Comparisons by overlap.
//!
//! Two flints are equal when their intervals intersect: they *could* stand for the same real number. Strict orderings require the intervals to be disjoint, non-strict ones accept any overlap. Every comparison involving a NaN flint is false except `!=`.
//!
//! Overlap equality is reflexive and symmetric but not transitive, hence `Flint` implements `PartialEq` and `PartialOrd` but neither `Eq` nor `Ord`.
//!
//! ```rust
//! use flint::Flint;
//!
//! let a = Flint::new(0.0, 2.0, 1.0);
//! let b = Flint::new(1.0, 3.0, 2.0);
//! let c = Flint::new(2.5, 4.0, 3.0);
//! assert!(a == b && b == c);
//! assert!(a != c);
//! assert!(a < c && a <= b && b >= a);
//! ```
//!
//! The `cmp_*` methods refine the boolean answer into a three-valued one: `True` when the relation holds for every pair of enclosed reals, `False` when it holds for none of them, `Unknown` otherwise.

use crate::convert::ToFlint;
use crate::flint::Flint;
use gcollections::ops::*;
use std::cmp::Ordering;
use trilean::SKleene;

fn comparable(f1: &Flint, f2: &Flint) -> bool {
  !f1.is_nan() && !f2.is_nan()
}

impl<T: ToFlint> PartialEq<T> for Flint
{
  fn eq(&self, other: &T) -> bool {
    let other = other.to_flint();
    comparable(self, &other) && self.overlap(&other)
  }
}

impl<T: ToFlint> PartialOrd<T> for Flint
{
  fn partial_cmp(&self, other: &T) -> Option<Ordering> {
    let other = other.to_flint();
    if !comparable(self, &other) { None }
    else if self.upper < other.lower { Some(Ordering::Less) }
    else if self.lower > other.upper { Some(Ordering::Greater) }
    else { Some(Ordering::Equal) }
  }

  fn lt(&self, other: &T) -> bool {
    let other = other.to_flint();
    comparable(self, &other) && self.upper < other.lower
  }

  fn le(&self, other: &T) -> bool {
    let other = other.to_flint();
    comparable(self, &other) && self.lower <= other.upper
  }

  fn gt(&self, other: &T) -> bool {
    let other = other.to_flint();
    comparable(self, &other) && self.lower > other.upper
  }

  fn ge(&self, other: &T) -> bool {
    let other = other.to_flint();
    comparable(self, &other) && self.upper >= other.lower
  }
}

scalar_lhs_cmp!(f64, f32, i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize);

fn certainty(always: bool, never: bool) -> SKleene {
  if always { SKleene::True }
  else if never { SKleene::False }
  else { SKleene::Unknown }
}

impl Flint
{
  /// `True` only when both flints are the same exact point.
  pub fn cmp_eq<T: ToFlint>(&self, other: T) -> SKleene {
    let other = other.to_flint();
    if !comparable(self, &other) { return SKleene::Unknown; }
    certainty(
      self.lower == self.upper && other.lower == other.upper && self.lower == other.lower,
      self.is_disjoint(&other))
  }

  pub fn cmp_lt<T: ToFlint>(&self, other: T) -> SKleene {
    let other = other.to_flint();
    if !comparable(self, &other) { return SKleene::Unknown; }
    certainty(self.upper < other.lower, self.lower >= other.upper)
  }

  pub fn cmp_le<T: ToFlint>(&self, other: T) -> SKleene {
    let other = other.to_flint();
    if !comparable(self, &other) { return SKleene::Unknown; }
    certainty(self.upper <= other.lower, self.lower > other.upper)
  }

  pub fn cmp_gt<T: ToFlint>(&self, other: T) -> SKleene {
    other.to_flint().cmp_lt(self)
  }

  pub fn cmp_ge<T: ToFlint>(&self, other: T) -> SKleene {
    other.to_flint().cmp_le(self)
  }
}
