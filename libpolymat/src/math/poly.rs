#![allow(clippy::should_implement_trait)]

use crate::errors::{MathError, ParseError};
use crate::math::Fraction;
use crate::parser::parse_poly;

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;
use num_traits::{One, Zero};
use std::collections::btree_map::{self, BTreeMap};

/// A univariate polynomial in `x` with [Fraction] coefficients.
///
/// Only nonzero terms are stored, keyed by their exponent. The zero polynomial has no terms.
///
/// Like [Fraction] arithmetic, exponent arithmetic wraps on overflow: multiplying `x^u64::MAX` by
/// `x` gives the constant `1`.
#[derive(Default, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Poly {
    terms: BTreeMap<u64, Fraction>,
}

/// Creates a new polynomial.
///
/// # Examples:
///
/// ```
/// # use libpolymat::{poly, Fraction};
/// poly![-4, 2, 1]; // x^2 + 2x - 4
/// poly![2 => 3, 0 => Fraction::new(1, 2).unwrap()]; // 3x^2 + 1/2
/// poly![]; // zero polynomial
/// ```
#[macro_export]
macro_rules! poly {
    ($($exp:expr => $coeff:expr),+ $(,)?) => (
        $crate::Poly::from_sparse(&[$(($exp, $crate::Fraction::from($coeff))),+])
    );

    ($($x:expr),+ $(,)?) => (
        $crate::Poly::from_dense(&[$($crate::Fraction::from($x)),+])
    );

    () => {
        $crate::Poly::zero()
    };
}

impl Poly {
    /// Parses a polynomial from its text form, like `3x^2+1/2x-5`.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse_poly(text)
    }

    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The polynomial with the single term `coeff`x^`exp`.
    pub fn monomial(coeff: Fraction, exp: u64) -> Self {
        let mut poly = Self::zero();
        poly.add_term(exp, coeff);
        poly
    }

    #[inline]
    pub fn constant(c: Fraction) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates a polynomial from coefficients listed by ascending exponent.
    ///
    /// # Examples:
    ///
    /// ```
    /// # use libpolymat::{Fraction, Poly};
    /// // 1 + 0x + 3x^2
    /// let p = Poly::from_dense(&[1.into(), 0.into(), 3.into()]);
    /// assert_eq!(p.to_string(), "3x^2 + 1");
    /// ```
    pub fn from_dense(coeffs: &[Fraction]) -> Self {
        let mut poly = Self::zero();
        for (exp, coeff) in coeffs.iter().enumerate() {
            poly.add_term(exp as u64, *coeff);
        }
        poly
    }

    /// Creates a polynomial from `(exponent, coefficient)` pairs. Coefficients listed under the
    /// same exponent are summed.
    pub fn from_sparse(terms: &[(u64, Fraction)]) -> Self {
        let mut poly = Self::zero();
        for (exp, coeff) in terms {
            poly.add_term(*exp, *coeff);
        }
        poly
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether the polynomial has no terms of positive degree.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.deg().map_or(true, |d| d == 0)
    }

    /// The degree of the polynomial, or [None] for the zero polynomial.
    #[inline]
    pub fn deg(&self) -> Option<u64> {
        self.terms.keys().next_back().copied()
    }

    /// The coefficient of the `x^exp` term.
    pub fn coeff(&self, exp: u64) -> Fraction {
        self.terms.get(&exp).copied().unwrap_or_else(Fraction::zero)
    }

    /// The nonzero `(exponent, coefficient)` terms, by ascending exponent.
    pub fn terms(&self) -> Terms<'_> {
        Terms {
            inner: self.terms.iter(),
        }
    }

    /// Adds a term of form `coeff`x^`exp` to `self`, dropping the term if it cancels out.
    fn add_term(&mut self, exp: u64, coeff: Fraction) {
        if coeff.is_zero() {
            return;
        }
        match self.terms.entry(exp) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(coeff);
            }
            btree_map::Entry::Occupied(mut entry) => {
                *entry.get_mut() += coeff;
                if entry.get().is_zero() {
                    entry.remove();
                }
            }
        }
    }

    /// Divides one constant polynomial by another.
    ///
    /// Polynomial long division is not supported; if either operand has a term of positive
    /// degree, [MathError::NonConstantDivision] is returned.
    ///
    /// # Examples:
    ///
    /// ```
    /// # use libpolymat::{poly, Poly};
    /// assert_eq!(poly![3].div(&poly![6]).unwrap().to_string(), "1/2");
    /// assert!(poly![0, 1].div(&poly![2]).is_err());
    /// ```
    pub fn div(mut self, other: &Poly) -> Result<Self, MathError> {
        self.div_assign(other)?;
        Ok(self)
    }

    /// Divides `self` by the constant polynomial `other` in place.
    pub fn div_assign(&mut self, other: &Poly) -> Result<(), MathError> {
        if !self.is_constant() || !other.is_constant() {
            return Err(MathError::NonConstantDivision {
                dividend: self.to_string(),
                divisor: other.to_string(),
            });
        }
        let quotient = self.coeff(0).div(other.coeff(0))?;
        *self = Self::constant(quotient);
        Ok(())
    }

    /// Evaluates the polynomial at an integer `x`.
    ///
    /// # Examples:
    ///
    /// ```
    /// # use libpolymat::{poly, Fraction};
    /// // (x^2 - 4)(3) -> 5
    /// assert_eq!(poly![-4, 0, 1].eval(3), Fraction::from(5));
    /// ```
    pub fn eval(&self, x: i64) -> Fraction {
        self.terms
            .iter()
            .fold(Fraction::zero(), |sum, (&exp, &coeff)| {
                sum + coeff * Fraction::from(binary_pow(x, exp))
            })
    }
}

/// Computes `x^power` by repeated squaring, wrapping on overflow.
fn binary_pow(mut x: i64, mut power: u64) -> i64 {
    let mut result: i64 = 1;
    while power > 0 {
        if power & 1 == 1 {
            result = result.wrapping_mul(x);
        }
        x = x.wrapping_mul(x);
        power >>= 1;
    }
    result
}

/// Iterator over the terms of a [Poly].
pub struct Terms<'a> {
    inner: btree_map::Iter<'a, u64, Fraction>,
}

impl<'a> Iterator for Terms<'a> {
    type Item = (u64, Fraction);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&exp, &coeff)| (exp, coeff))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> DoubleEndedIterator for Terms<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&exp, &coeff)| (exp, coeff))
    }
}

impl FromStr for Poly {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_poly(s)
    }
}

impl From<Fraction> for Poly {
    fn from(c: Fraction) -> Self {
        Self::constant(c)
    }
}

impl From<i64> for Poly {
    fn from(c: i64) -> Self {
        Self::constant(c.into())
    }
}

impl Zero for Poly {
    fn zero() -> Self {
        Poly::zero()
    }

    fn is_zero(&self) -> bool {
        Poly::is_zero(self)
    }
}

impl One for Poly {
    fn one() -> Self {
        Self::constant(Fraction::one())
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly {
            terms: self.terms.iter().map(|(&exp, &c)| (exp, -c)).collect(),
        }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(mut self) -> Poly {
        for coeff in self.terms.values_mut() {
            *coeff = -*coeff;
        }
        self
    }
}

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, other: &Poly) {
        for (&exp, &coeff) in other.terms.iter() {
            self.add_term(exp, coeff);
        }
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, other: &Poly) {
        for (&exp, &coeff) in other.terms.iter() {
            self.add_term(exp, -coeff);
        }
    }
}

impl MulAssign<&Poly> for Poly {
    fn mul_assign(&mut self, other: &Poly) {
        let mut product = Poly::zero();
        for (&i, &lhs) in self.terms.iter() {
            for (&j, &rhs) in other.terms.iter() {
                product.add_term(i.wrapping_add(j), lhs * rhs);
            }
        }
        *self = product;
    }
}

/// Derives the by-value and by-reference binary operators of [Poly] from its `*Assign<&Poly>`
/// implementations.
macro_rules! poly_binop {
    ($($Op:ident $op:ident $OpAssign:ident $op_assign:ident)*) => {$(
        impl $OpAssign for Poly {
            fn $op_assign(&mut self, other: Poly) {
                $OpAssign::$op_assign(self, &other);
            }
        }

        impl $Op<&Poly> for Poly {
            type Output = Poly;

            fn $op(mut self, other: &Poly) -> Poly {
                $OpAssign::$op_assign(&mut self, other);
                self
            }
        }

        impl $Op for Poly {
            type Output = Poly;

            fn $op(mut self, other: Poly) -> Poly {
                $OpAssign::$op_assign(&mut self, &other);
                self
            }
        }

        impl $Op for &Poly {
            type Output = Poly;

            fn $op(self, other: &Poly) -> Poly {
                let mut result = self.clone();
                $OpAssign::$op_assign(&mut result, other);
                result
            }
        }
    )*};
}

poly_binop! {
    Add add AddAssign add_assign
    Sub sub SubAssign sub_assign
    Mul mul MulAssign mul_assign
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }
        for (i, (exp, coeff)) in self.terms().rev().enumerate() {
            match (i, coeff.is_negative()) {
                (0, true) => f.write_str("-")?,
                (0, false) => {}
                (_, true) => f.write_str(" - ")?,
                (_, false) => f.write_str(" + ")?,
            }
            write!(f, "{}", coeff.abs())?;
            match exp {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", exp)?,
            }
        }
        Ok(())
    }
}
