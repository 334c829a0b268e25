use std::{
    cell::OnceCell,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result},
    ops::{Add, Div, Mul, Neg, Sub},
    sync::Arc,
};

use num_traits::{One, Zero};
use rug::{ops::Pow, Float};

/// Default binary precision of approximate reals (IEEE double).
pub const DEFAULT_PRECISION: u32 = 53;

thread_local! {
    static PRECISION: OnceCell<u32> = OnceCell::new();
}

/// Working precision, in bits, used when constructing approximate reals.
pub fn precision() -> u32 {
    PRECISION.with(|p| *p.get().unwrap_or(&DEFAULT_PRECISION))
}

/// Fixes the working precision for this thread. Returns `false` (and
/// changes nothing) once a precision has been set.
pub fn set_precision(prec: u32) -> bool {
    PRECISION.with(|p| p.set(prec).is_ok())
}

/// Arbitrary-precision approximate real.
///
/// Wraps a shared native float; no denominator concept, no identity
/// guarantee. Mixing a `Real` into an exact operation promotes the exact
/// side and the result stays approximate.
#[derive(Clone)]
pub struct Real(Arc<Float>);

impl Real {
    pub(crate) fn from_float(f: Float) -> Self {
        Self(Arc::new(f))
    }

    pub fn from_f64(f: f64) -> Self {
        Self::from_float(Float::with_val(precision(), f))
    }

    pub(crate) fn from_int(n: &rug::Integer) -> Self {
        Self::from_int_at(precision(), n)
    }

    pub(crate) fn from_int_at(prec: u32, n: &rug::Integer) -> Self {
        Self::from_float(Float::with_val(prec, n))
    }

    pub(crate) fn from_rational(r: &rug::Rational) -> Self {
        Self::from_rational_at(precision(), r)
    }

    pub(crate) fn from_rational_at(prec: u32, r: &rug::Rational) -> Self {
        Self::from_float(Float::with_val(prec, r))
    }

    /// Parses a decimal or exponent-form numeric string at the working
    /// precision.
    pub fn parse(s: &str) -> Option<Self> {
        Float::parse(s)
            .ok()
            .map(|v| Self::from_float(Float::with_val(precision(), v)))
    }

    #[inline]
    pub fn as_float(&self) -> &Float {
        &self.0
    }

    #[inline]
    pub fn prec(&self) -> u32 {
        self.0.prec()
    }

    /// Same shared allocation; `Real`s are not canonicalized, so this is
    /// only true for clones.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    pub fn pow(&self, exp: &Real) -> Real {
        let prec = self.prec().max(exp.prec());
        Self::from_float(Float::with_val(prec, self.0.as_ref().pow(exp.0.as_ref())))
    }
}

impl PartialEq for Real {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl PartialOrd for Real {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.ptr_eq(other) {
            return Some(Ordering::Equal);
        }
        self.0.as_ref().partial_cmp(other.0.as_ref())
    }
}

impl Zero for Real {
    #[inline]
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Real {
    #[inline]
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self.0 == 1.0
    }
}

impl Neg for &Real {
    type Output = Real;

    fn neg(self) -> Real {
        if self.is_zero() {
            return self.clone();
        }
        Real::from_float(Float::with_val(self.0.prec(), -&*self.0))
    }
}

impl Neg for Real {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Add<&Real> for &Real {
    type Output = Real;

    fn add(self, rhs: &Real) -> Real {
        if self.is_zero() {
            return rhs.clone();
        }
        if rhs.is_zero() {
            return self.clone();
        }
        // operands may carry different precisions; compute at the larger one
        let prec = self.prec().max(rhs.prec());
        Real::from_float(Float::with_val(prec, &*self.0 + &*rhs.0))
    }
}

impl Add for Real {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub<&Real> for &Real {
    type Output = Real;

    fn sub(self, rhs: &Real) -> Real {
        if rhs.is_zero() {
            return self.clone();
        }
        let prec = self.prec().max(rhs.prec());
        Real::from_float(Float::with_val(prec, &*self.0 - &*rhs.0))
    }
}

impl Sub for Real {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul<&Real> for &Real {
    type Output = Real;

    fn mul(self, rhs: &Real) -> Real {
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }
        let prec = self.prec().max(rhs.prec());
        Real::from_float(Float::with_val(prec, &*self.0 * &*rhs.0))
    }
}

impl Mul for Real {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Div<&Real> for &Real {
    type Output = Real;

    // native division; the tower rejects zero divisors before we get here
    fn div(self, rhs: &Real) -> Real {
        let prec = self.prec().max(rhs.prec());
        Real::from_float(Float::with_val(prec, &*self.0 / &*rhs.0))
    }
}

impl Div for Real {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", *self.0)
    }
}

impl Debug for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Real({})", *self.0)
    }
}
