use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumberError>;

/// Failures of numeric construction and arithmetic.
///
/// All of these are deterministic, synchronous errors raised at the point
/// of detection; none are transient.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum NumberError {
    #[error("denominator of a rational number must be nonzero")]
    InvalidDenominator,
    #[error("division by zero")]
    DivisionByZero,
    #[error("unrecognized numeric literal `{0}`")]
    UnrecognizedNumericLiteral(String),
}
