// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// A flint on the right-hand side of a scalar: `2.0 * x`, `1 - x`. The scalar is converted with `ToFlint` and `$op` is the flint-flint kernel.
macro_rules! scalar_lhs_binop {
  (impl $imp:ident, $method:ident, $op:ident; $( $t:ty ),*) => {$(
    impl $imp<Flint> for $t {
      type Output = Flint;

      fn $method(self, other: Flint) -> Flint {
        $op(&self.to_flint(), &other)
      }
    }

    impl<'a> $imp<&'a Flint> for $t {
      type Output = Flint;

      fn $method(self, other: &'a Flint) -> Flint {
        $op(&self.to_flint(), other)
      }
    }
  )*}
}

// `2.0 == x`, `1 < x`: comparisons with the scalar on the left mirror the flint ones.
macro_rules! scalar_lhs_cmp {
  ( $( $t:ty ),* ) => {$(
    impl PartialEq<Flint> for $t {
      fn eq(&self, other: &Flint) -> bool {
        other == self
      }
    }

    impl PartialOrd<Flint> for $t {
      fn partial_cmp(&self, other: &Flint) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
      }
    }
  )*}
}
