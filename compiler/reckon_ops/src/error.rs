use thiserror::Error;

/// A value fell outside the domain of the operation applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `x / 0`
    #[error("Division by zero")]
    DivisionByZero,

    /// `x % 0`
    #[error("Modulo by zero")]
    ModuloByZero,

    /// `sqrt(x)` with `x < 0`
    #[error("Square root of negative numbers is not supported")]
    NegativeSqrt,

    /// `log(x)` or `ln(x)` with `x <= 0`
    #[error("Logarithm is undefined for non-positive numbers")]
    NonPositiveLog,

    /// `fact(n)` with `n < 0`
    #[error("Factorial is undefined for negative numbers")]
    NegativeFactorial,

    /// `fact(n)` with a fractional `n`
    #[error("Factorial requires integer input")]
    NonIntegerFactorial,

    /// `fact(n)` whose result does not fit the accumulator
    #[error("Factorial for n > {limit} is too large to represent", limit = crate::math::FACTORIAL_LIMIT)]
    FactorialOverflow,

    /// Negative base raised to a fractional exponent
    #[error("Complex numbers not supported (negative base with fractional exponent)")]
    ComplexResult,

    /// `0 ^ x` with `x < 0`
    #[error("Division by zero (0^x where x < 0)")]
    ZeroToNegativePower,
}
