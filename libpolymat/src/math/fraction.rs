#![allow(clippy::should_implement_trait)]

use crate::errors::MathError;
use crate::math::gcd_i64;

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};

/// An exact rational number `num / den`.
///
/// A fraction is always kept in lowest terms with a positive denominator, so two fractions are
/// equal exactly when their numerators and denominators are.
///
/// Arithmetic is performed on 64-bit integers and wraps silently on overflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction {
    num: i64,
    den: i64,
}

impl Fraction {
    /// Creates the fraction `num / den`, reduced to lowest terms.
    ///
    /// # Examples:
    ///
    /// ```
    /// # use libpolymat::Fraction;
    /// let half = Fraction::new(-2, -4).unwrap();
    /// assert_eq!((half.numer(), half.denom()), (1, 2));
    /// assert!(Fraction::new(1, 0).is_err());
    /// ```
    pub fn new(num: i64, den: i64) -> Result<Self, MathError> {
        if den == 0 {
            return Err(MathError::DivisionByZero);
        }
        let mut frac = Self { num, den };
        frac.normalize();
        Ok(frac)
    }

    /// Creates the fraction `n / 1`.
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    #[inline]
    pub fn numer(&self) -> i64 {
        self.num
    }

    /// The denominator, which is always positive.
    #[inline]
    pub fn denom(&self) -> i64 {
        self.den
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.num < 0
    }

    #[inline]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Divides `self` by `other`, failing if `other` is zero.
    pub fn div(mut self, other: Self) -> Result<Self, MathError> {
        self.div_assign(other)?;
        Ok(self)
    }

    /// Divides `self` by `other` in place, failing if `other` is zero.
    pub fn div_assign(&mut self, other: Self) -> Result<(), MathError> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        self.num = self.num.wrapping_mul(other.den);
        self.den = self.den.wrapping_mul(other.num);
        self.normalize();
        Ok(())
    }

    /// Reduces the fraction and moves the sign onto the numerator.
    fn normalize(&mut self) {
        // A zero gcd is only possible if the denominator overflowed to zero.
        let gcd = gcd_i64(self.num, self.den) as i64;
        if gcd != 0 && gcd != 1 {
            self.num = self.num.wrapping_div(gcd);
            self.den = self.den.wrapping_div(gcd);
        }
        if self.den < 0 {
            self.num = self.num.wrapping_neg();
            self.den = self.den.wrapping_neg();
        }
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(n.into())
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            num: self.num.wrapping_neg(),
            den: self.den,
        }
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, other: Self) {
        self.num = self
            .num
            .wrapping_mul(other.den)
            .wrapping_add(other.num.wrapping_mul(self.den));
        self.den = self.den.wrapping_mul(other.den);
        self.normalize();
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, other: Self) {
        *self += -other;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, other: Self) {
        self.num = self.num.wrapping_mul(other.num);
        self.den = self.den.wrapping_mul(other.den);
        self.normalize();
    }
}

macro_rules! binop_from_assign {
    ($($Op:ident $op:ident $op_assign:ident)*) => {$(
        impl $Op for Fraction {
            type Output = Self;

            fn $op(mut self, other: Self) -> Self {
                self.$op_assign(other);
                self
            }
        }
    )*};
}

binop_from_assign! {
    Add add add_assign
    Sub sub sub_assign
    Mul mul mul_assign
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying preserves the order.
        self.num
            .wrapping_mul(other.den)
            .cmp(&other.num.wrapping_mul(self.den))
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}
