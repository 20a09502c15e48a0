// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Power of a flint by a flint exponent.
//!
//! `x^p` is monotonic in each argument taken separately, so the extrema over the box `[x] × [p]` are reached at its corners. A zero bound takes the sign of the side it is approached from, so `[-2, 0]^-1` has its pole at `-inf`. When the base straddles zero, both `0^p` and `(-0)^p` are candidates too: they are the minimum of even powers and the two sides of the pole of negative powers. A negative base is only defined for integer exponents, so it is a domain error with a non-integer exponent bound, and with any exponent interval wider than a single point since such an interval holds non-integers. Note that `Flint::from_double(2.0)` is not an integer exponent since its bounds are the neighbours of `2.0`, use `Flint::from_integer` (or an integer scalar) for exact exponents.

use crate::convert::ToFlint;
use crate::flint::Flint;
use crate::rounding::*;
use num_traits::Pow;
use tracing::trace;

impl Flint
{
  pub fn powf<T: ToFlint>(self, exponent: T) -> Flint {
    let p = exponent.to_flint();
    if self.is_nan() || p.is_nan() {
      return Flint::NAN;
    }
    if self.lower < 0.0 && p.lower != p.upper {
      trace!(target: "flint", base = ?self.interval(), exponent = ?p.interval(), "negative base with an exponent range");
      return Flint::NAN;
    }
    // A zero bound is reached from inside the interval: `+0` from above, `-0` from below.
    let base_lower = if self.lower == 0.0 { 0.0 } else { self.lower };
    let base_upper = if self.upper == 0.0 { -0.0 } else { self.upper };
    let corners = [
      base_lower.powf(p.lower), base_lower.powf(p.upper),
      base_upper.powf(p.lower), base_upper.powf(p.upper)];
    let tracked = self.tracked.powf(p.tracked);
    if corners.iter().any(|c| c.is_nan()) || tracked.is_nan() {
      trace!(target: "flint", base = ?self.interval(), exponent = ?p.interval(), "power outside of the domain");
      return Flint::NAN;
    }
    let (mut lower, mut upper) = extremes(corners);
    if self.lower < 0.0 && 0.0 < self.upper {
      for zero in &[0.0f64, -0.0] {
        for e in &[p.lower, p.upper] {
          let c = zero.powf(*e);
          lower = lower.min(c);
          upper = upper.max(c);
        }
      }
    }
    Flint::clamped(
      round_down(lower, FUNCTION_ULPS),
      round_up(upper, FUNCTION_ULPS),
      tracked)
  }

  pub fn powf_assign<T: ToFlint>(&mut self, exponent: T) {
    *self = self.powf(exponent);
  }
}

impl<T: ToFlint> Pow<T> for Flint
{
  type Output = Flint;

  fn pow(self, exponent: T) -> Flint {
    self.powf(exponent)
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use gcollections::ops::*;
  use proptest::prelude::*;

  const i2_3: Flint = Flint { lower: 2.0, upper: 3.0, tracked: 2.5 };
  const im2_2: Flint = Flint { lower: -2.0, upper: 2.0, tracked: 1.0 };
  const im3_m2: Flint = Flint { lower: -3.0, upper: -2.0, tracked: -2.5 };
  const im2_0: Flint = Flint { lower: -2.0, upper: 0.0, tracked: -1.0 };
  const i0_2: Flint = Flint { lower: 0.0, upper: 2.0, tracked: 1.0 };

  fn tracked_inside(f: &Flint) -> bool {
    f.is_nan() || (f.lower() <= f.tracked() && f.tracked() <= f.upper())
  }

  #[test]
  fn positive_base() {
    let r = i2_3.powf(Flint::new(1.0, 2.0, 1.5));
    assert!(r.lower() <= 2.0 && r.upper() >= 9.0);
    assert!(r.lower() < 2.0 && r.upper() > 9.0, "{:?} should be widened.", r);
    assert_eq!(r.tracked(), 2.5f64.powf(1.5));
    let r = i2_3.powf(-1);
    assert!(r.contains(&(1.0 / 3.0)) && r.contains(&0.5));
  }

  #[test]
  fn integer_exponents_on_negative_bases() {
    let r = im3_m2.powf(2);
    assert!(r.contains(&4.0) && r.contains(&9.0));
    assert_eq!(r.tracked(), 6.25);
    let r = im3_m2.powf(3i32);
    assert!(r.contains(&-27.0) && r.contains(&-8.0));
    assert!(r.upper() < 0.0);
  }

  #[test]
  fn straddling_base_reaches_zero() {
    let r = im2_2.powf(2);
    assert!(r.lower() <= 0.0, "{:?} should include the minimum at zero.", r);
    assert!(r.contains(&4.0));
    let r = im2_2.powf(-1);
    assert_eq!(r.lower(), f64::NEG_INFINITY);
    assert_eq!(r.upper(), f64::INFINITY);
  }

  #[test]
  fn base_touching_zero() {
    let r = im2_0.powf(-1);
    assert!(r.contains(&-0.5) && r.contains(&-1000.0), "{:?} misses the pole approached from below.", r);
    assert_eq!(r.lower(), f64::NEG_INFINITY);
    assert!(r.upper() < 0.0);
    assert_eq!(r.tracked(), -1.0);
    let r = im2_0.powf(-3);
    assert!(r.contains(&-8.0) && r.contains(&-0.125));
    assert_eq!(r.tracked(), -1.0);
    let r = im2_0.powf(2);
    assert!(r.lower() <= 0.0 && r.contains(&4.0));

    let r = i0_2.powf(-1);
    assert!(r.contains(&0.5) && r.contains(&1000.0));
    assert_eq!(r.upper(), f64::INFINITY);
    assert!(r.lower() > 0.0);
    let r = Flint::new(-0.0, 1.0, 0.5).powf(-1);
    assert!(r.contains(&1.0) && r.contains(&1000.0));
  }

  #[test]
  fn exponent_ranges() {
    let r = i2_3.powf(Flint::new(2.0, 3.0, 2.0));
    assert!(r.contains(&4.0) && r.contains(&27.0));
    assert!(r.lower() > 3.9 && r.upper() < 27.1);
    assert_eq!(r.tracked(), 6.25);
    let r = i0_2.powf(Flint::new(-1.0, 1.0, 0.0));
    assert!(r.contains(&0.0) && r.contains(&1.0) && r.contains(&f64::INFINITY));
    assert!(im2_0.powf(Flint::new(2.0, 4.0, 2.0)).is_nan(), "(-2)^3 lies outside of the even corners.");
    assert!(im3_m2.powf(Flint::new(2.0, 3.0, 2.0)).is_nan());
  }

  #[test]
  fn domain_errors() {
    assert!(im3_m2.powf(0.5).is_nan());
    assert!(im3_m2.powf(2.0).is_nan(), "2.0 is an imprecise exponent.");
    assert!(i2_3.powf(Flint::NAN).is_nan());
    assert!(Flint::NAN.powf(2).is_nan());
  }

  #[test]
  fn pow_trait_and_in_place() {
    let r = i2_3.pow(2);
    assert!(r.contains(&4.0) && r.contains(&9.0));
    let mut x = i2_3;
    x.powf_assign(Flint::from_integer(2));
    assert_eq!(x.interval(), r.interval());
    assert_eq!(x.tracked(), r.tracked());
  }

  fn exponent_with_point() -> impl Strategy<Value = (Flint, f64)> {
    prop_oneof![
      (-3i32..=3).prop_map(|n| (Flint::from_integer(n), f64::from(n))),
      (-3.0f64..3.0, 0.0f64..2.0, 0.0f64..1.0).prop_map(|(e, v, t)|
        (Flint::new(e, e + v, e), (e + v * t).min(e + v))),
    ]
  }

  proptest! {
    #[test]
    fn power_encloses_sampled_points(a in -4.0f64..4.0, w in 0.0f64..4.0, t in 0.0f64..1.0,
      (p, pe) in exponent_with_point())
    {
      let x = Flint::new(a, a + w, a);
      let pb = (a + w * t).min(a + w);
      let r = x.powf(p);
      prop_assert!(tracked_inside(&r));
      let exact = pb.powf(pe);
      if !r.is_nan() && exact.is_finite() {
        prop_assert!(r.contains(&exact), "{:?}^{:?} = {:?} misses {}^{} = {}", x, p, r, pb, pe, exact);
      }
    }
  }
}
