//! Arbitrary-precision rational numbers in canonical form.
//!
//! A [Rational] always stores a fully reduced fraction with a strictly
//! positive denominator, so structural equality coincides with numerical
//! equality and zero has the unique representation `0/1`. Every arithmetic
//! operation produces a new canonical value; the magnitude of the numerator
//! and denominator is unbounded and grows with repeated operations.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use rug::{ops::Pow, Complete};

use crate::printer::{PrintMode, RationalPrinter};

use super::integer::{self, Integer};

/// Errors raised by fallible rational operations.
#[derive(Debug)]
pub enum RationalError {
    InvalidArgument(&'static str),
    DivisionByZero,
}

impl Display for RationalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::InvalidArgument(s) => write!(f, "{}", s),
            RationalError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

/// A rational number in canonical form: `gcd(|numerator|, denominator) = 1`
/// and `denominator > 0`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Create a new rational from a numerator and a strictly positive
    /// denominator, reducing the fraction to lowest terms.
    pub fn new<T: Into<Integer>, U: Into<Integer>>(
        numerator: T,
        denominator: U,
    ) -> Result<Rational, RationalError> {
        let denominator = denominator.into();
        if denominator <= 0 {
            return Err(RationalError::InvalidArgument(
                "the denominator must be greater than 0",
            ));
        }

        Ok(Rational::normalized(numerator.into(), denominator))
    }

    /// Create a rational from a floating-point number, truncating the value
    /// towards zero to an integer. This boundary is lossy by design: the
    /// fractional part of `f` is discarded. Non-finite input is rejected.
    pub fn from_f64(f: f64) -> Result<Rational, RationalError> {
        let n = Integer::from_f64(f).ok_or(RationalError::InvalidArgument(
            "the value must be a finite number",
        ))?;

        Ok(Rational::from(n))
    }

    /// Reduce `numerator/denominator` to canonical form. The denominator
    /// must be nonzero; its sign is moved to the numerator.
    fn normalized(mut numerator: Integer, mut denominator: Integer) -> Rational {
        debug_assert!(denominator != 0, "zero denominator");

        let g = integer::gcd(&numerator, &denominator);
        if g != 1 {
            numerator /= &g;
            denominator /= &g;
        }

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Rational {
            numerator,
            denominator,
        }
    }

    pub fn zero() -> Rational {
        Rational {
            numerator: Integer::new(),
            denominator: Integer::from(1),
        }
    }

    pub fn one() -> Rational {
        Rational {
            numerator: Integer::from(1),
            denominator: Integer::from(1),
        }
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Return true iff the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    pub fn abs(&self) -> Rational {
        if self.is_negative() {
            -self
        } else {
            self.clone()
        }
    }

    /// Divide by `rhs`, failing when `rhs` is zero.
    pub fn div(&self, rhs: &Rational) -> Result<Rational, RationalError> {
        if rhs.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        Ok(self.div_unchecked(rhs))
    }

    /// Divide by a `rhs` that the caller has already proven to be nonzero.
    pub(crate) fn div_unchecked(&self, rhs: &Rational) -> Rational {
        debug_assert!(!rhs.is_zero(), "division by zero");

        Rational::normalized(
            (&self.numerator * &rhs.denominator).complete(),
            (&self.denominator * &rhs.numerator).complete(),
        )
    }

    /// Return the multiplicative inverse, failing on zero. The sign moves to
    /// the numerator so the result stays canonical.
    pub fn inv(&self) -> Result<Rational, RationalError> {
        if self.is_zero() {
            return Err(RationalError::DivisionByZero);
        }

        if self.numerator < 0 {
            Ok(Rational {
                numerator: (-&self.denominator).complete(),
                denominator: (-&self.numerator).complete(),
            })
        } else {
            Ok(Rational {
                numerator: self.denominator.clone(),
                denominator: self.numerator.clone(),
            })
        }
    }

    /// Raise to an integer power. A negative exponent inverts first, which
    /// fails with a division by zero for a zero base.
    pub fn pow(&self, e: i32) -> Result<Rational, RationalError> {
        if e < 0 {
            return self.inv()?.pow(-e);
        }

        // canonical form is preserved under entrywise powers
        Ok(Rational {
            numerator: self.numerator.clone().pow(e as u32),
            denominator: self.denominator.clone().pow(e as u32),
        })
    }

    /// Round down to the nearest integer-valued rational.
    pub fn floor(&self) -> Rational {
        let r = integer::floor_mod(&self.numerator, &self.denominator);
        Rational::from((&self.numerator - &r).complete() / &self.denominator)
    }

    /// Round up to the nearest integer-valued rational.
    pub fn ceil(&self) -> Rational {
        let r = integer::floor_mod(&self.numerator, &self.denominator);
        let q = (&self.numerator - &r).complete() / &self.denominator;
        if r == 0 {
            Rational::from(q)
        } else {
            Rational::from(q + 1u32)
        }
    }

    /// Round towards zero to the nearest integer-valued rational.
    pub fn trunc(&self) -> Rational {
        Rational::from((&self.numerator / &self.denominator).complete())
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

macro_rules! impl_from_integral {
    ($($t:ty),*) => {$(
        impl From<$t> for Rational {
            #[inline]
            fn from(value: $t) -> Self {
                Rational {
                    numerator: value.into(),
                    denominator: Integer::from(1),
                }
            }
        }
    )*};
}

impl_from_integral!(
    Integer, &Integer, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<T: Into<Integer>> From<(T, T)> for Rational {
    /// Construct `num/den` in canonical form; a negative denominator is
    /// normalized away. Panics when the denominator is zero: use
    /// [Rational::new] at fallible boundaries.
    #[inline]
    fn from((num, den): (T, T)) -> Self {
        let den = den.into();
        assert!(den != 0, "zero denominator");
        Rational::normalized(num.into(), den)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Compare by the sign of `a.num * b.den - b.num * a.den`; both
    /// denominators are positive so the cross products preserve order.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        let a = (&self.numerator * &other.denominator).complete();
        let b = (&other.numerator * &self.denominator).complete();
        a.cmp(&b)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::normalized(
            (&self.numerator * &rhs.denominator).complete()
                + (&rhs.numerator * &self.denominator).complete(),
            (&self.denominator * &rhs.denominator).complete(),
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::normalized(
            (&self.numerator * &rhs.denominator).complete()
                - (&rhs.numerator * &self.denominator).complete(),
            (&self.denominator * &rhs.denominator).complete(),
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::normalized(
            (&self.numerator * &rhs.numerator).complete(),
            (&self.denominator * &rhs.denominator).complete(),
        )
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: (-&self.numerator).complete(),
            denominator: self.denominator.clone(),
        }
    }
}

impl Add<Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub<Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul<Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        &self + rhs
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        &self - rhs
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        &self * rhs
    }
}

impl AddAssign<&Rational> for Rational {
    fn add_assign(&mut self, rhs: &Rational) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Rational> for Rational {
    fn sub_assign(&mut self, rhs: &Rational) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Rational> for Rational {
    fn mul_assign(&mut self, rhs: &Rational) {
        *self = &*self * rhs;
    }
}

impl AddAssign<Rational> for Rational {
    fn add_assign(&mut self, rhs: Rational) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<Rational> for Rational {
    fn sub_assign(&mut self, rhs: Rational) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<Rational> for Rational {
    fn mul_assign(&mut self, rhs: Rational) {
        *self = &*self * &rhs;
    }
}

impl<'a> std::iter::Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |a, b| a + b)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        RationalPrinter::new(self, PrintMode::Plain).fmt(f)
    }
}
