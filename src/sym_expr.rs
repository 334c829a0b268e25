use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::{Add, Mul, Neg, Sub},
    sync::Arc,
};

use crate::{
    error::{NumberError, Result},
    numbers::{cache, Assumptions, Number},
};

/// An interned symbolic identifier.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Self(cache::intern_symbol(name))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Symbol {}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Symbol({:?})", self.name())
    }
}

#[derive(Debug, PartialEq)]
pub enum ExprKind {
    Number(Number),
    Symbol(Symbol),
    Add(Expr, Expr),
    Mul(Expr, Expr),
    Pow(Expr, Expr),
}

impl ExprKind {
    pub(crate) fn into_expr(self) -> Expr {
        Expr(Arc::new(self))
    }
}

/// A symbolic expression: a canonical number, a symbol, or a deferred
/// operation node produced when an operand was not numeric.
///
/// Numeric operators are total over the symbolic domain: an operation
/// whose operand is not a number yields a deferred node instead of
/// failing.
#[derive(Clone)]
pub struct Expr(Arc<ExprKind>);

impl Expr {
    #[inline]
    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    pub fn number(n: Number) -> Self {
        ExprKind::Number(n).into_expr()
    }

    pub fn symbol(name: &str) -> Self {
        ExprKind::Symbol(Symbol::new(name)).into_expr()
    }

    /// Handoff point for complex literals: the imaginary unit as a plain
    /// symbol for the surrounding system to interpret.
    pub fn imaginary_unit() -> Self {
        Self::symbol("I")
    }

    pub fn zero() -> Self {
        Self::number(Number::zero())
    }

    pub fn one() -> Self {
        Self::number(Number::one())
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self.kind() {
            ExprKind::Number(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self.kind(), ExprKind::Number(_))
    }

    fn is_zero_number(&self) -> bool {
        self.as_number()
            .is_some_and(|n| n.cmp0() == Some(Ordering::Equal))
    }

    fn is_one_number(&self) -> bool {
        self.as_number().is_some_and(|n| n == &Number::one())
    }

    /// Division with numeric folding. A symbolic operand defers as
    /// `Mul(self, Pow(rhs, -1))`; a numeric zero divisor fails either way.
    pub fn div(&self, rhs: &Expr) -> Result<Expr> {
        if rhs.is_zero_number() {
            return Err(NumberError::DivisionByZero);
        }
        if let (Some(a), Some(b)) = (self.as_number(), rhs.as_number()) {
            return Ok(Expr::number(a.div(b)?));
        }
        let inverse = rhs.pow(&Expr::number(Number::int(-1)))?;
        Ok(self * &inverse)
    }

    /// Power with numeric folding; defers to a `Pow` node when either
    /// side is symbolic.
    pub fn pow(&self, exp: &Expr) -> Result<Expr> {
        if let (Some(a), Some(b)) = (self.as_number(), exp.as_number()) {
            return Ok(Expr::number(a.pow(b)?));
        }
        if exp.is_zero_number() {
            return Ok(Expr::one());
        }
        if exp.is_one_number() {
            return Ok(self.clone());
        }
        Ok(ExprKind::Pow(self.clone(), exp.clone()).into_expr())
    }

    /// Numbers compare numerically and symbols by name; anything else is
    /// incomparable and reported as `None`, never an error.
    pub fn compare(&self, other: &Expr) -> Option<Ordering> {
        match (self.kind(), other.kind()) {
            (ExprKind::Number(a), ExprKind::Number(b)) => a.compare(b),
            (ExprKind::Symbol(a), ExprKind::Symbol(b)) => Some(a.name().cmp(b.name())),
            _ => None,
        }
    }
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::number(n)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        ExprKind::Symbol(s).into_expr()
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (self.kind(), other.kind()) {
            (ExprKind::Number(a), ExprKind::Number(b)) => a == b,
            (ExprKind::Symbol(a), ExprKind::Symbol(b)) => a == b,
            (ExprKind::Add(a1, a2), ExprKind::Add(b1, b2))
            | (ExprKind::Mul(a1, a2), ExprKind::Mul(b1, b2))
            | (ExprKind::Pow(a1, a2), ExprKind::Pow(b1, b2)) => a1 == b1 && a2 == b2,
            _ => false,
        }
    }
}

impl Add<&Expr> for &Expr {
    type Output = Expr;

    fn add(self, rhs: &Expr) -> Expr {
        if let (Some(a), Some(b)) = (self.as_number(), rhs.as_number()) {
            return Expr::number(a + b);
        }
        if self.is_zero_number() {
            return rhs.clone();
        }
        if rhs.is_zero_number() {
            return self.clone();
        }
        ExprKind::Add(self.clone(), rhs.clone()).into_expr()
    }
}

impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Mul<&Expr> for &Expr {
    type Output = Expr;

    fn mul(self, rhs: &Expr) -> Expr {
        if let (Some(a), Some(b)) = (self.as_number(), rhs.as_number()) {
            return Expr::number(a * b);
        }
        if self.is_zero_number() || rhs.is_one_number() {
            return self.clone();
        }
        if rhs.is_zero_number() || self.is_one_number() {
            return rhs.clone();
        }
        ExprKind::Mul(self.clone(), rhs.clone()).into_expr()
    }
}

impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        if let Some(n) = self.as_number() {
            return Expr::number(-n);
        }
        &Expr::number(Number::int(-1)) * self
    }
}

impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

impl Sub<&Expr> for &Expr {
    type Output = Expr;

    fn sub(self, rhs: &Expr) -> Expr {
        self + &(-rhs)
    }
}

impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Assumptions for Expr {
    fn is_zero(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_zero)
    }

    fn is_positive(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_positive)
    }

    fn is_negative(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_negative)
    }

    fn is_integer(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_integer)
    }

    fn is_rational(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_rational)
    }

    fn is_real(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_real)
    }

    fn is_finite(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_finite)
    }

    fn is_even(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_even)
    }

    fn is_odd(&self) -> Option<bool> {
        self.as_number().and_then(Assumptions::is_odd)
    }

    fn is_commutative(&self) -> Option<bool> {
        match self.kind() {
            ExprKind::Number(_) | ExprKind::Symbol(_) => Some(true),
            ExprKind::Add(a, b) | ExprKind::Mul(a, b) | ExprKind::Pow(a, b) => {
                match (a.is_commutative(), b.is_commutative()) {
                    (Some(true), Some(true)) => Some(true),
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    _ => None,
                }
            }
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fn factor(f: &mut Formatter<'_>, e: &Expr) -> FmtResult {
            if matches!(e.kind(), ExprKind::Add(..)) {
                write!(f, "({e})")
            } else {
                write!(f, "{e}")
            }
        }
        fn operand(f: &mut Formatter<'_>, e: &Expr) -> FmtResult {
            if matches!(e.kind(), ExprKind::Add(..) | ExprKind::Mul(..)) {
                write!(f, "({e})")
            } else {
                write!(f, "{e}")
            }
        }
        match self.kind() {
            ExprKind::Number(n) => write!(f, "{n}"),
            ExprKind::Symbol(s) => write!(f, "{s}"),
            ExprKind::Add(a, b) => write!(f, "{a} + {b}"),
            ExprKind::Mul(a, b) => {
                factor(f, a)?;
                f.write_str("*")?;
                factor(f, b)
            }
            ExprKind::Pow(a, b) => {
                operand(f, a)?;
                f.write_str("^")?;
                operand(f, b)
            }
        }
    }
}

impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind() {
            ExprKind::Number(n) => Debug::fmt(n, f),
            ExprKind::Symbol(s) => Debug::fmt(s, f),
            ExprKind::Add(a, b) => write!(f, "Add({a:?}, {b:?})"),
            ExprKind::Mul(a, b) => write!(f, "Mul({a:?}, {b:?})"),
            ExprKind::Pow(a, b) => write!(f, "Pow({a:?}, {b:?})"),
        }
    }
}
