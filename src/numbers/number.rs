use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::{Add, Mul, Neg, Sub},
};

use rug::ops::Pow;

use crate::error::{NumberError, Result};

use super::{Assumptions, Integer, Rational, Real};

/// A member of the numeric tower.
///
/// The three kinds are statically enumerable; exact values (`Integer`,
/// `Rational`) are canonical shared instances. An operation mixing an
/// exact value with a `Real` promotes the exact side and the result stays
/// approximate; there is no path back to exactness.
#[derive(Clone)]
pub enum Number {
    Integer(Integer),
    Rational(Rational),
    Real(Real),
}

impl Number {
    pub fn int(n: impl Into<rug::Integer>) -> Self {
        Self::Integer(Integer::new(n))
    }

    /// Reduced rational with the sign on the numerator; collapses to an
    /// `Integer` when the reduced denominator is 1.
    ///
    /// ```
    /// use symnum::numbers::Number;
    /// assert_eq!(Number::rational(2, -4)?, Number::rational(-1, 2)?);
    /// assert_eq!(Number::rational(6, 3)?, Number::int(2));
    /// assert!(Number::rational(3, 0).is_err());
    /// # Ok::<(), symnum::error::NumberError>(())
    /// ```
    pub fn rational(n: impl Into<rug::Integer>, d: impl Into<rug::Integer>) -> Result<Self> {
        let d = d.into();
        if d.cmp0() == Ordering::Equal {
            return Err(NumberError::InvalidDenominator);
        }
        Ok(Self::from_rug_rational(rug::Rational::from((n.into(), d))))
    }

    pub fn from_f64(f: f64) -> Self {
        Self::Real(Real::from_f64(f))
    }

    pub(crate) fn from_rug_rational(r: rug::Rational) -> Self {
        if *r.denom() == 1 {
            Self::Integer(Integer::new(r.into_numer_denom().0))
        } else {
            Self::Rational(Rational::from_canonical(r))
        }
    }

    pub fn zero() -> Self {
        Self::int(0u32)
    }

    pub fn one() -> Self {
        Self::int(1u32)
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Rational(_))
    }

    /// Same canonical instance (implies equality, not the converse).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.ptr_eq(b),
            (Self::Rational(a), Self::Rational(b)) => a.ptr_eq(b),
            (Self::Real(a), Self::Real(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Sign of the value; `None` for NaN.
    pub fn cmp0(&self) -> Option<Ordering> {
        match self {
            Self::Integer(n) => Some(n.as_int().cmp0()),
            Self::Rational(r) => Some(r.as_rat().cmp0()),
            Self::Real(r) => r.as_float().partial_cmp(&0),
        }
    }

    /// Forces to an approximate real at the working precision; idempotent
    /// and side-effect-free.
    pub fn evalf(&self) -> Real {
        match self {
            Self::Integer(n) => n.evalf(),
            Self::Rational(r) => r.evalf(),
            Self::Real(r) => r.clone(),
        }
    }

    fn evalf_at(&self, prec: u32) -> Real {
        match self {
            Self::Integer(n) => Real::from_int_at(prec, n.as_int()),
            Self::Rational(r) => Real::from_rational_at(prec, r.as_rat()),
            Self::Real(r) => r.clone(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => n.to_f64(),
            Self::Rational(r) => r.to_f64(),
            Self::Real(r) => r.to_f64(),
        }
    }

    /// Exact value as a native rational; `None` for approximate values.
    fn to_rug_rational(&self) -> Option<rug::Rational> {
        match self {
            Self::Integer(n) => Some(rug::Rational::from(n.as_int())),
            Self::Rational(r) => Some(r.as_rat().clone()),
            Self::Real(_) => None,
        }
    }

    /// Total order between numeric values; `None` only when NaN is involved.
    ///
    /// Exact operands are compared exactly, never through floating
    /// arithmetic. Against an approximate operand the exact side is
    /// evaluated to the approximate side's precision first, so the result
    /// can disagree with the exact order near representation boundaries;
    /// the approximate side is already inexact.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        if self.ptr_eq(other) {
            return Some(Ordering::Equal);
        }
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.as_int().cmp(b.as_int())),
            (Self::Rational(a), Self::Rational(b)) => Some(a.as_rat().cmp(b.as_rat())),
            (Self::Integer(a), Self::Rational(b)) => {
                Some(rug::Rational::from(a.as_int()).cmp(b.as_rat()))
            }
            (Self::Rational(a), Self::Integer(b)) => {
                Some(a.as_rat().cmp(&rug::Rational::from(b.as_int())))
            }
            (Self::Real(a), Self::Real(b)) => a.partial_cmp(b),
            (Self::Real(a), b) => a.partial_cmp(&b.evalf_at(a.prec())),
            (a, Self::Real(b)) => a.evalf_at(b.prec()).partial_cmp(b),
        }
    }

    /// Fails with `DivisionByZero` on a zero divisor, exact or
    /// approximate, before any native delegation.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        if rhs.cmp0() == Some(Ordering::Equal) {
            return Err(NumberError::DivisionByZero);
        }
        Ok(match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => Self::from_rug_rational(rug::Rational::from((
                a.as_int().clone(),
                b.as_int().clone(),
            ))),
            (Self::Integer(a), Self::Rational(b)) => {
                Self::from_rug_rational(rug::Rational::from(a.as_int()) / b.as_rat())
            }
            (Self::Rational(a), Self::Integer(b)) => {
                Self::from_rug_rational(a.as_rat().clone() / rug::Rational::from(b.as_int()))
            }
            (Self::Rational(a), Self::Rational(b)) => {
                Self::from_rug_rational(rug::Rational::from(a.as_rat() / b.as_rat()))
            }
            (a, b) => Self::Real(&a.evalf() / &b.evalf()),
        })
    }

    /// Exact power for an exact base and a machine-range integer exponent;
    /// any other exponent evaluates to the native float power.
    ///
    /// ```
    /// use symnum::numbers::Number;
    /// let r = Number::rational(2, 3)?.pow(&Number::int(-2))?;
    /// assert_eq!(r, Number::rational(9, 4)?);
    /// assert!(Number::zero().pow(&Number::int(-1)).is_err());
    /// # Ok::<(), symnum::error::NumberError>(())
    /// ```
    pub fn pow(&self, exp: &Self) -> Result<Self> {
        if let (Some(base), Self::Integer(e)) = (self.to_rug_rational(), exp) {
            // exponents beyond the machine range fall through to the
            // approximate path
            if let Some(e) = e.as_int().to_i32() {
                if e < 0 && base.cmp0() == Ordering::Equal {
                    return Err(NumberError::DivisionByZero);
                }
                return Ok(Self::from_rug_rational(rug::Rational::from((&base).pow(e))));
            }
        }
        Ok(Self::Real(self.evalf().pow(&exp.evalf())))
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Number {
        match self {
            Number::Integer(n) => Number::Integer(-n),
            Number::Rational(r) => {
                Number::Rational(Rational::from_canonical(rug::Rational::from(-r.as_rat())))
            }
            Number::Real(r) => Number::Real(-r),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a + b),
            (Number::Rational(a), Number::Rational(b)) => {
                Number::from_rug_rational(rug::Rational::from(a.as_rat() + b.as_rat()))
            }
            (Number::Integer(a), Number::Rational(b)) => {
                Number::from_rug_rational(rug::Rational::from(a.as_int()) + b.as_rat())
            }
            (Number::Rational(a), Number::Integer(b)) => {
                Number::from_rug_rational(a.as_rat().clone() + rug::Rational::from(b.as_int()))
            }
            (a, b) => Number::Real(&a.evalf() + &b.evalf()),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub<&Number> for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        self + &(-rhs)
    }
}

impl Sub for Number {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul<&Number> for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        match (self, rhs) {
            (Number::Integer(a), Number::Integer(b)) => Number::Integer(a * b),
            (Number::Rational(a), Number::Rational(b)) => {
                Number::from_rug_rational(rug::Rational::from(a.as_rat() * b.as_rat()))
            }
            (Number::Integer(a), Number::Rational(b)) => {
                Number::from_rug_rational(rug::Rational::from(a.as_int()) * b.as_rat())
            }
            (Number::Rational(a), Number::Integer(b)) => {
                Number::from_rug_rational(a.as_rat().clone() * rug::Rational::from(b.as_int()))
            }
            (a, b) => Number::Real(&a.evalf() * &b.evalf()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl Assumptions for Number {
    fn is_zero(&self) -> Option<bool> {
        Some(self.cmp0() == Some(Ordering::Equal))
    }

    fn is_positive(&self) -> Option<bool> {
        self.cmp0().map(|ord| ord == Ordering::Greater)
    }

    fn is_negative(&self) -> Option<bool> {
        self.cmp0().map(|ord| ord == Ordering::Less)
    }

    fn is_integer(&self) -> Option<bool> {
        match self {
            Self::Integer(_) => Some(true),
            Self::Rational(_) => Some(false),
            Self::Real(_) => None,
        }
    }

    fn is_rational(&self) -> Option<bool> {
        match self {
            Self::Integer(_) | Self::Rational(_) => Some(true),
            Self::Real(_) => None,
        }
    }

    fn is_real(&self) -> Option<bool> {
        match self {
            Self::Real(r) if r.is_nan() => None,
            _ => Some(true),
        }
    }

    fn is_finite(&self) -> Option<bool> {
        match self {
            Self::Integer(_) | Self::Rational(_) => Some(true),
            Self::Real(r) => Some(r.as_float().is_finite()),
        }
    }

    fn is_commutative(&self) -> Option<bool> {
        Some(true)
    }

    fn is_even(&self) -> Option<bool> {
        match self {
            Self::Integer(n) => Some(n.as_int().is_even()),
            Self::Rational(_) => Some(false),
            Self::Real(_) => None,
        }
    }

    fn is_odd(&self) -> Option<bool> {
        match self {
            Self::Integer(n) => Some(n.as_int().is_odd()),
            Self::Rational(_) => Some(false),
            Self::Real(_) => None,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Integer(n) => Display::fmt(n, f),
            Self::Rational(r) => Display::fmt(r, f),
            Self::Real(r) => Display::fmt(r, f),
        }
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Integer(n) => Debug::fmt(n, f),
            Self::Rational(r) => Debug::fmt(r, f),
            Self::Real(r) => Debug::fmt(r, f),
        }
    }
}
