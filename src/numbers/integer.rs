use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result},
    ops::{Add, Mul, Neg},
    sync::Arc,
};

use num_traits::{One, Zero};

use super::{cache, Real};

/// Canonical arbitrary-precision integer.
///
/// Obtained only through the instance cache: two `Integer`s with the same
/// value share one allocation, so equality has an identity fast path.
#[derive(Clone)]
pub struct Integer(Arc<rug::Integer>);

impl Integer {
    pub fn new(n: impl Into<rug::Integer>) -> Self {
        Self(cache::intern_integer(n.into()))
    }

    #[inline]
    pub fn as_int(&self) -> &rug::Integer {
        &self.0
    }

    /// Same canonical instance, not just the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn evalf(&self) -> Real {
        Real::from_int(&self.0)
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl PartialEq for Integer {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_ref().cmp(other.0.as_ref())
    }
}

impl Zero for Integer {
    #[inline]
    fn zero() -> Self {
        Self::new(0u32)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for Integer {
    #[inline]
    fn one() -> Self {
        Self::new(1u32)
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self.0 == 1
    }
}

impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        Integer::new(rug::Integer::from(-&*self.0))
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Add<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn add(self, rhs: &Integer) -> Integer {
        Integer::new(rug::Integer::from(&*self.0 + &*rhs.0))
    }
}

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Mul<&Integer> for &Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, rhs: &Integer) -> Integer {
        Integer::new(rug::Integer::from(&*self.0 * &*rhs.0))
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", *self.0)
    }
}

impl Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Integer({})", *self.0)
    }
}
