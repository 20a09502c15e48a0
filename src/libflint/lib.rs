// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Rounded floating point intervals ("flints").
//!
//! A [`Flint`](flint/struct.Flint.html) pairs a tracked floating point value with a lower and an upper bound. Every operation rounds the bounds outward so the interval keeps enclosing the exact mathematical result for any real number the operands could stand for. Comparisons are defined by overlap: two flints are equal whenever their intervals intersect, which gives floating point equality a sound "could be equal" meaning.
//!
//! # Examples
//!
//! ```rust
//! use flint::Flint;
//!
//! let a = Flint::from_double(0.2);
//! assert!(a + a + a == Flint::from_double(0.6));
//! assert!(0.2 + 0.2 + 0.2 != 0.6);
//! ```
//!
//! Elementary functions follow the same enclosure discipline, including the non-monotonic ones:
//!
//! ```rust
//! use flint::Flint;
//! use gcollections::ops::*;
//!
//! let x = Flint::new(-1.0, 1.0, 0.0);
//! assert_eq!(x.cosh().lower(), 1.0);
//! assert!(Flint::new(0.0, 4.0, 2.0).tan().is_infinite());
//! ```
//!
//! # References
//! * [numpy-flint](https://github.com/jefwagner/numpy-flint)
//! * [Boost Interval Arithmetic Library](http://www.boost.org/doc/libs/1_57_0/libs/numeric/interval/doc/interval.html)

#[macro_use]
mod macros;

pub mod rounding;
pub mod flint;
pub mod convert;
pub mod cmp;
pub mod arith;
pub mod functions;
pub mod ops;
pub mod error;

pub use crate::flint::Flint;
pub use crate::convert::ToFlint;
pub use crate::error::FlintError;
