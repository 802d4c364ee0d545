//! Guarded numeric primitives shared by the operator and function tables.
//!
//! Every guard runs before the underlying `f64` primitive so that a domain
//! violation surfaces as a [`DomainError`] instead of a silent `NaN`.

use crate::{DomainError, OpResult};

/// Largest `n` accepted by [`factorial`].
pub const FACTORIAL_LIMIT: u64 = 20;

/// `base ^ exponent`, rejecting results that are not real numbers.
pub fn power(base: f64, exponent: f64) -> OpResult {
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::ZeroToNegativePower);
    }
    if base < 0.0 && !is_integral(exponent) {
        return Err(DomainError::ComplexResult);
    }
    Ok(base.powf(exponent))
}

/// `n!` for integral `0 <= n <= 20`.
///
/// The product is accumulated in a `u64` and every multiplication is
/// checked, so the limit and the accumulator can never disagree.
pub fn factorial(n: f64) -> OpResult {
    if n < 0.0 {
        return Err(DomainError::NegativeFactorial);
    }
    if !is_integral(n) {
        return Err(DomainError::NonIntegerFactorial);
    }
    if n > FACTORIAL_LIMIT as f64 {
        return Err(DomainError::FactorialOverflow);
    }

    let n = n as u64;
    let mut acc: u64 = 1;
    for i in 2..=n {
        acc = acc.checked_mul(i).ok_or(DomainError::FactorialOverflow)?;
    }
    Ok(acc as f64)
}

/// Square root of a non-negative value.
pub fn sqrt(x: f64) -> OpResult {
    if x < 0.0 {
        return Err(DomainError::NegativeSqrt);
    }
    Ok(x.sqrt())
}

/// Natural logarithm of a strictly positive value.
pub fn ln(x: f64) -> OpResult {
    if x <= 0.0 {
        return Err(DomainError::NonPositiveLog);
    }
    Ok(x.ln())
}

/// Rounds half-up to two decimal places.
pub fn round2(x: f64) -> f64 {
    (x * 100.0 + 0.5).floor() / 100.0
}

/// `a / b` with a non-zero divisor.
pub fn divide(a: f64, b: f64) -> OpResult {
    if b == 0.0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a / b)
}

/// `a % b` (truncated remainder) with a non-zero divisor.
pub fn modulo(a: f64, b: f64) -> OpResult {
    if b == 0.0 {
        return Err(DomainError::ModuloByZero);
    }
    Ok(a % b)
}

// NaN and the infinities are never integral.
fn is_integral(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}
