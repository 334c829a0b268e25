use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result},
    sync::Arc,
};

use super::{cache, Real};

/// Canonical exact rational: lowest terms, positive denominator, sign on
/// the numerator.
///
/// Invariant: the denominator is at least 2. A reduced value with
/// denominator 1 is an [`super::Integer`]; the normalizing constructor
/// `Number::rational` is the only public way in.
#[derive(Clone)]
pub struct Rational(Arc<rug::Rational>);

impl Rational {
    /// `value` must already be reduced with denominator >= 2.
    pub(crate) fn from_canonical(value: rug::Rational) -> Self {
        debug_assert!(*value.denom() != 1);
        Self(cache::intern_rational(value))
    }

    #[inline]
    pub fn as_rat(&self) -> &rug::Rational {
        &self.0
    }

    #[inline]
    pub fn numer(&self) -> &rug::Integer {
        self.0.numer()
    }

    #[inline]
    pub fn denom(&self) -> &rug::Integer {
        self.0.denom()
    }

    /// Same canonical instance, not just the same value.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn evalf(&self) -> Real {
        Real::from_rational(&self.0)
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl PartialEq for Rational {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    // exact: rug compares by cross-multiplication, no rounding
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_ref().cmp(other.0.as_ref())
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", *self.0)
    }
}

impl Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Rational({}, {})", self.numer(), self.denom())
    }
}
