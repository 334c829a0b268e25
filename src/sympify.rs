use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{eof, map, opt, recognize},
    sequence::{pair, separated_pair, terminated, tuple},
    Finish, IResult,
};

use crate::{
    error::{NumberError, Result},
    numbers::{Integer, Number, Rational, Real},
    sym_expr::{Expr, Symbol},
};

/// Normalizes an external value into a canonical member of the numeric
/// tower; a complex literal comes back as a deferred symbolic product.
///
/// This is the single point where malformed numeric input is rejected.
/// Identifiers are not numeric literals: they enter through
/// [`Expr::symbol`], never through here.
///
/// ```
/// use symnum::{numbers::Number, sympify::sympify};
/// assert_eq!(sympify(5)?.as_number(), Some(&Number::int(5)));
/// assert_eq!(sympify("3/4")?.as_number(), Some(&Number::rational(3, 4)?));
/// assert!(sympify("five").is_err());
/// # Ok::<(), symnum::error::NumberError>(())
/// ```
pub fn sympify(x: impl Sympify) -> Result<Expr> {
    x.sympify()
}

/// Values that can be coerced into the tower. The set of coercions is
/// closed and statically enumerable.
pub trait Sympify {
    fn sympify(self) -> Result<Expr>;
}

impl Sympify for Expr {
    // already canonical: identity
    fn sympify(self) -> Result<Expr> {
        Ok(self)
    }
}

impl Sympify for &Expr {
    fn sympify(self) -> Result<Expr> {
        Ok(self.clone())
    }
}

impl Sympify for Number {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(self))
    }
}

impl Sympify for Symbol {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::from(self))
    }
}

impl Sympify for Integer {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::Integer(self)))
    }
}

impl Sympify for Rational {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::Rational(self)))
    }
}

impl Sympify for Real {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::Real(self)))
    }
}

impl Sympify for rug::Integer {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::int(self)))
    }
}

impl Sympify for rug::Rational {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::from_rug_rational(self)))
    }
}

impl Sympify for f64 {
    fn sympify(self) -> Result<Expr> {
        Ok(Expr::number(Number::from_f64(self)))
    }
}

macro_rules! sympify_int {
    ($($t:ty),*) => {
        $(impl Sympify for $t {
            fn sympify(self) -> Result<Expr> {
                Ok(Expr::number(Number::int(self)))
            }
        })*
    };
}

sympify_int!(i32, i64, u32, u64);

impl Sympify for &str {
    fn sympify(self) -> Result<Expr> {
        parse_literal(self)
    }
}

impl Sympify for String {
    fn sympify(self) -> Result<Expr> {
        parse_literal(&self)
    }
}

enum Literal<'a> {
    Int(&'a str),
    Ratio(&'a str, &'a str),
    Decimal(&'a str),
    Imaginary(Box<Literal<'a>>),
}

fn integer(input: &str) -> IResult<&str, &str> {
    recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn exponent(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn decimal(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(one_of("+-")),
        alt((
            recognize(tuple((digit1, char('.'), digit0, opt(exponent)))),
            recognize(tuple((char('.'), digit1, opt(exponent)))),
            recognize(pair(digit1, exponent)),
        )),
    ))(input)
}

fn ratio(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(integer, char('/'), integer)(input)
}

fn real_literal(input: &str) -> IResult<&str, Literal<'_>> {
    alt((
        map(decimal, Literal::Decimal),
        map(ratio, |(n, d)| Literal::Ratio(n, d)),
        map(integer, Literal::Int),
    ))(input)
}

fn literal(input: &str) -> IResult<&str, Literal<'_>> {
    terminated(
        alt((
            map(terminated(real_literal, one_of("iIj")), |coefficient| {
                Literal::Imaginary(Box::new(coefficient))
            }),
            real_literal,
        )),
        eof,
    )(input)
}

fn parse_int(digits: &str) -> rug::Integer {
    // the grammar only lets well-formed signed digit runs through
    digits.trim_start_matches('+').parse().unwrap()
}

fn build(lit: &Literal<'_>) -> Result<Expr> {
    match lit {
        Literal::Int(s) => Ok(Expr::number(Number::int(parse_int(s)))),
        Literal::Ratio(n, d) => Ok(Expr::number(Number::rational(
            parse_int(n),
            parse_int(d),
        )?)),
        Literal::Decimal(s) => Real::parse(s)
            .map(|r| Expr::number(Number::Real(r)))
            .ok_or_else(|| NumberError::UnrecognizedNumericLiteral((*s).to_owned())),
        Literal::Imaginary(coefficient) => {
            let coefficient = build(coefficient)?;
            Ok(&coefficient * &Expr::imaginary_unit())
        }
    }
}

fn parse_literal(input: &str) -> Result<Expr> {
    match literal(input.trim()).finish() {
        Ok((_, lit)) => build(&lit),
        Err(_) => Err(NumberError::UnrecognizedNumericLiteral(input.to_owned())),
    }
}
