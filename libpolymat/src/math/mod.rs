//! The exact-arithmetic numeric stack.
//!
//! Values are layered strictly: a [Matrix] is a grid of [Poly] elements, and a [Poly] is a sparse
//! map of exponents to [Fraction] coefficients. Every value is kept in canonical form, so
//! structural equality is mathematical equality.

mod gcd;
pub use gcd::*;

mod fraction;
pub use fraction::*;

mod poly;
pub use poly::*;

mod matrix;
pub use matrix::*;

#[cfg(test)]
mod proptests;
