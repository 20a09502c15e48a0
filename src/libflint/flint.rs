// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rounded floating point interval with a tracked value.
//!
//! A flint is three doubles `lower <= tracked <= upper`. The bounds are guaranteed to enclose the exact result of the computation that produced them, the tracked value is the ordinary floating point result of the same computation. The NaN flint has all three fields NaN and is the result of every domain error.
//!
//! Bounds are accessed through the [`Bounded`](../../gcollections/ops/bounded/trait.Bounded.html) trait of `gcollections`, like any other interval of the ecosystem.
//!
//! # Examples
//!
//! ```rust
//! use flint::Flint;
//! use gcollections::ops::*;
//!
//! let x = Flint::from_double(0.1);
//! assert!(x.lower() < 0.1 && 0.1 < x.upper());
//! assert_eq!(x.tracked(), 0.1);
//! assert!(x.contains(&0.1));
//!
//! let three = Flint::from_integer(3);
//! assert_eq!(three.width(), 0.0);
//! ```

use crate::error::FlintError;
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// Memory layout is three `f64` in the order `lower, upper, tracked`, 24 bytes with the alignment of `f64`.
#[derive(Debug, Copy, Clone)]
#[repr(C)]
pub struct Flint {
  pub(crate) lower: f64,
  pub(crate) upper: f64,
  pub(crate) tracked: f64,
}

impl Flint
{
  pub const NAN: Flint = Flint { lower: f64::NAN, upper: f64::NAN, tracked: f64::NAN };
  pub const ZERO: Flint = Flint { lower: 0.0, upper: 0.0, tracked: 0.0 };
  pub const ONE: Flint = Flint { lower: 1.0, upper: 1.0, tracked: 1.0 };
  pub const PI: Flint = Flint {
    lower: 3.141592653589793, upper: 3.1415926535897936, tracked: 3.141592653589793
  };
  pub const TAU: Flint = Flint {
    lower: 6.283185307179586, upper: 6.283185307179587, tracked: 6.283185307179586
  };
  pub const FRAC_PI_2: Flint = Flint {
    lower: 1.5707963267948966, upper: 1.5707963267948968, tracked: 1.5707963267948966
  };

  /// Builds a flint from its raw fields. The caller vouches for `lower <= tracked <= upper` (or all NaN), only checked in debug builds. See `try_new` for the checked version.
  pub fn new(lower: f64, upper: f64, tracked: f64) -> Flint {
    debug_assert!(Flint::check(lower, upper, tracked).is_ok(),
      "Invalid flint fields ({}, {}, {}), use `Flint::try_new` for a checked construction.", lower, upper, tracked);
    Flint { lower, upper, tracked }
  }

  pub fn try_new(lower: f64, upper: f64, tracked: f64) -> Result<Flint, FlintError> {
    Flint::check(lower, upper, tracked)?;
    Ok(Flint { lower, upper, tracked })
  }

  fn check(lower: f64, upper: f64, tracked: f64) -> Result<(), FlintError> {
    let nans = [lower, upper, tracked].iter().filter(|x| x.is_nan()).count();
    if nans == 3 {
      Ok(())
    }
    else if nans > 0 {
      Err(FlintError::PartialNan)
    }
    else if lower > upper {
      Err(FlintError::InvertedBounds { lower, upper })
    }
    else if tracked < lower || tracked > upper {
      Err(FlintError::TrackedOutOfBounds { lower, upper, tracked })
    }
    else {
      Ok(())
    }
  }

  /// Result of an operation: the tracked value is pulled back into the bounds if ordinary rounding made it drift outside. A NaN in any field gives the NaN flint.
  pub(crate) fn clamped(lower: f64, upper: f64, tracked: f64) -> Flint {
    if lower.is_nan() || upper.is_nan() || tracked.is_nan() {
      return Flint::NAN;
    }
    let tracked =
      if tracked < lower { lower }
      else if tracked > upper { upper }
      else { tracked };
    Flint { lower, upper, tracked }
  }

  pub fn tracked(&self) -> f64 {
    self.tracked
  }

  /// `upper - lower`, NaN for the NaN flint.
  pub fn width(&self) -> f64 {
    self.upper - self.lower
  }

  pub fn interval(&self) -> (f64, f64) {
    (self.lower, self.upper)
  }

  pub fn is_nan(&self) -> bool {
    self.lower.is_nan() || self.upper.is_nan() || self.tracked.is_nan()
  }

  /// Either bound is infinite. An infinite tracked value alone does not count.
  pub fn is_infinite(&self) -> bool {
    self.lower.is_infinite() || self.upper.is_infinite()
  }

  pub fn is_finite(&self) -> bool {
    self.lower.is_finite() && self.upper.is_finite()
  }

  /// The whole interval lies strictly above or strictly below zero. A flint straddling zero is not definitely nonzero, whatever its tracked value.
  pub fn is_definitely_nonzero(&self) -> bool {
    self.lower > 0.0 || self.upper < 0.0
  }
}

impl Collection for Flint
{
  type Item = f64;
}

impl Bounded for Flint
{
  fn lower(&self) -> f64 {
    self.lower
  }

  fn upper(&self) -> f64 {
    self.upper
  }
}

/// Degenerate interval: the value is taken as exact.
impl Singleton for Flint
{
  fn singleton(value: f64) -> Flint {
    Flint { lower: value, upper: value, tracked: value }
  }
}

impl Contains for Flint
{
  fn contains(&self, value: &f64) -> bool {
    self.lower <= *value && *value <= self.upper
  }
}

impl Overlap for Flint
{
  fn overlap(&self, other: &Flint) -> bool {
    self.lower <= other.upper && other.lower <= self.upper
  }
}

impl Disjoint for Flint
{
  fn is_disjoint(&self, other: &Flint) -> bool {
    !self.overlap(other)
  }
}

impl Subset for Flint
{
  fn is_subset(&self, other: &Flint) -> bool {
    other.lower <= self.lower && self.upper <= other.upper
  }
}

/// Prints the tracked value, honoring the formatter's precision.
impl Display for Flint
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    Display::fmt(&self.tracked, formatter)
  }
}

impl Serialize for Flint
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
  {
    (self.lower, self.upper, self.tracked).serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for Flint
{
  fn deserialize<D>(deserializer: D) -> Result<Flint, D::Error>
    where D: Deserializer<'de>
  {
    let (lower, upper, tracked) = <(f64, f64, f64)>::deserialize(deserializer)?;
    Flint::try_new(lower, upper, tracked).map_err(D::Error::custom)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use crate::ops::Whole;
  use serde::de::value::{Error as ValueError, SeqDeserializer};
  use serde_test::{assert_de_tokens_error, assert_tokens, Token};
  use std::mem;

  const i0_2: Flint = Flint { lower: 0.0, upper: 2.0, tracked: 1.0 };
  const i1_3: Flint = Flint { lower: 1.0, upper: 3.0, tracked: 2.0 };
  const i4_5: Flint = Flint { lower: 4.0, upper: 5.0, tracked: 4.5 };
  const im1_1: Flint = Flint { lower: -1.0, upper: 1.0, tracked: 0.5 };
  const unbounded: Flint = Flint { lower: f64::NEG_INFINITY, upper: f64::INFINITY, tracked: 0.0 };

  #[test]
  fn layout() {
    assert_eq!(mem::size_of::<Flint>(), 24);
    assert_eq!(mem::align_of::<Flint>(), mem::align_of::<f64>());
    assert_eq!(mem::size_of::<Flint>(), 3 * mem::size_of::<f64>());
  }

  #[test]
  fn checked_construction() {
    assert!(Flint::try_new(1.0, 2.0, 1.5).is_ok());
    assert!(Flint::try_new(f64::NAN, f64::NAN, f64::NAN).unwrap().is_nan());
    assert_eq!(Flint::try_new(2.0, 1.0, 1.5).unwrap_err(),
      FlintError::InvertedBounds { lower: 2.0, upper: 1.0 });
    assert_eq!(Flint::try_new(1.0, f64::NAN, 1.0).unwrap_err(), FlintError::PartialNan);
    assert_eq!(Flint::try_new(1.0, 2.0, 3.0).unwrap_err(),
      FlintError::TrackedOutOfBounds { lower: 1.0, upper: 2.0, tracked: 3.0 });
  }

  #[test]
  fn clamped_pulls_tracked_inside() {
    assert_eq!(Flint::clamped(0.0, 1.0, 2.0).tracked, 1.0);
    assert_eq!(Flint::clamped(0.0, 1.0, -2.0).tracked, 0.0);
    assert_eq!(Flint::clamped(0.0, 1.0, 0.25).tracked, 0.25);
    for (lower, upper, tracked) in vec![(0.0, 1.0, f64::NAN), (f64::NAN, f64::NAN, 0.0), (f64::NEG_INFINITY, f64::NAN, 1.0)] {
      let f = Flint::clamped(lower, upper, tracked);
      assert!(f.lower.is_nan() && f.upper.is_nan() && f.tracked.is_nan(),
        "clamped({}, {}, {}) should be the NaN flint.", lower, upper, tracked);
    }
  }

  fn read_back(f: &Flint) -> Result<Flint, ValueError> {
    let fields = vec![f.lower, f.upper, f.tracked];
    Flint::deserialize(SeqDeserializer::<_, ValueError>::new(fields.into_iter()))
  }

  #[test]
  fn nan_results_are_complete() {
    let inf = Flint::from_double(f64::INFINITY);
    let results = vec![
      Flint::whole() * Flint::ZERO,
      inf - inf,
      inf.sin(),
      Flint::whole().tan() * 0,
      Flint::new(0.0, f64::INFINITY, f64::INFINITY).cos(),
    ];
    for (id, r) in results.into_iter().enumerate() {
      assert!(r.is_nan(), "result #{} should be NaN.", id);
      assert!(Flint::try_new(r.lower, r.upper, r.tracked).is_ok(),
        "result #{} is a partial NaN: {:?}", id, r);
      assert!(read_back(&r).map(|f| f.is_nan()).unwrap_or(false),
        "result #{} does not survive serialization: {:?}", id, r);
    }
    let f = read_back(&Flint::new(1.0, 3.0, 2.0)).unwrap();
    assert_eq!((f.lower, f.upper, f.tracked), (1.0, 3.0, 2.0));
  }

  #[test]
  fn accessors() {
    assert_eq!(i1_3.lower(), 1.0);
    assert_eq!(i1_3.upper(), 3.0);
    assert_eq!(i1_3.tracked(), 2.0);
    assert_eq!(i1_3.width(), 2.0);
    assert_eq!(i1_3.interval(), (1.0, 3.0));
    assert!(Flint::NAN.width().is_nan());
  }

  #[test]
  fn predicates() {
    assert!(Flint::NAN.is_nan());
    assert!(Flint { lower: 0.0, upper: 1.0, tracked: f64::NAN }.is_nan());
    assert!(!i0_2.is_nan());

    assert!(unbounded.is_infinite());
    assert!(!unbounded.is_finite());
    assert!(i0_2.is_finite());
    assert!(!i0_2.is_infinite());
    let infinite_tracked = Flint { lower: 0.0, upper: 1.0, tracked: f64::INFINITY };
    assert!(!infinite_tracked.is_infinite());
    assert!(!Flint::NAN.is_finite());

    assert!(i4_5.is_definitely_nonzero());
    assert!((Flint { lower: -5.0, upper: -4.0, tracked: -4.5 }).is_definitely_nonzero());
    assert!(!im1_1.is_definitely_nonzero(), "{:?} straddles zero.", im1_1);
    assert!(!i0_2.is_definitely_nonzero(), "{:?} touches zero.", i0_2);
    assert!(!Flint::NAN.is_definitely_nonzero());
  }

  #[test]
  fn set_operations() {
    assert!(i0_2.overlap(&i1_3));
    assert!(!i0_2.overlap(&i4_5));
    assert!(i0_2.is_disjoint(&i4_5));
    assert!(!i0_2.overlap(&Flint::NAN));
    assert!(i0_2.contains(&2.0));
    assert!(!i0_2.contains(&2.5));
    assert!(!Flint::NAN.contains(&0.0));
    assert!(i4_5.is_subset(&unbounded));
    assert!(!i0_2.is_subset(&i1_3));
    let s = Flint::singleton(7.5);
    assert_eq!((s.lower(), s.upper(), s.tracked()), (7.5, 7.5, 7.5));
  }

  #[test]
  fn display_tracked() {
    assert_eq!(format!("{}", i1_3), "2");
    assert_eq!(format!("{:.3}", Flint::PI), "3.142");
    assert_eq!(format!("{}", Flint::NAN), "NaN");
  }

  #[test]
  fn constants_enclose() {
    use std::f64::consts;
    assert!(Flint::PI.contains(&consts::PI));
    assert!(Flint::TAU.contains(&(2.0 * consts::PI)));
    assert!(Flint::FRAC_PI_2.contains(&consts::FRAC_PI_2));
    assert_eq!(Flint::PI.tracked(), consts::PI);
    assert_eq!(Flint::FRAC_PI_2.tracked(), consts::FRAC_PI_2);
  }

  #[test]
  fn serde_tokens() {
    assert_tokens(&i1_3, &[
      Token::Tuple { len: 3 },
      Token::F64(1.0),
      Token::F64(3.0),
      Token::F64(2.0),
      Token::TupleEnd,
    ]);
  }

  #[test]
  fn serde_rejects_invalid() {
    assert_de_tokens_error::<Flint>(&[
        Token::Tuple { len: 3 },
        Token::F64(3.0),
        Token::F64(1.0),
        Token::F64(2.0),
        Token::TupleEnd,
      ],
      "lower bound 3 is greater than upper bound 1");
  }
}
