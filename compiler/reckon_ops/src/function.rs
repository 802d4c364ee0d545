use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::{math, OpResult};

/// A unary mathematical function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine (radians)
    Sin,
    /// Cosine (radians)
    Cos,
    /// Tangent (radians)
    Tan,
    /// Arc sine
    Asin,
    /// Arc cosine
    Acos,
    /// Arc tangent
    Atan,
    /// Hyperbolic sine
    Sinh,
    /// Hyperbolic cosine
    Cosh,
    /// Hyperbolic tangent
    Tanh,
    /// Natural logarithm, guarded
    Log,
    /// Natural logarithm, guarded
    Ln,
    /// Square root, guarded
    Sqrt,
    /// `e^x`
    Exp,
    /// Absolute value
    Abs,
    /// Round toward +∞
    Ceil,
    /// Round toward -∞
    Floor,
    /// Round half-up to two decimals
    Round,
    /// Factorial of an integral `0 <= n <= 20`
    Fact,
    /// Cube root
    Cbrt,
    /// Radians to degrees
    Deg,
    /// Degrees to radians
    Rad,
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, Function> =
        Function::ALL.iter().map(|f| (f.name(), *f)).collect();
}

impl Function {
    /// Every function, in table order.
    pub const ALL: [Function; 21] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Log,
        Function::Ln,
        Function::Sqrt,
        Function::Exp,
        Function::Abs,
        Function::Ceil,
        Function::Floor,
        Function::Round,
        Function::Fact,
        Function::Cbrt,
        Function::Deg,
        Function::Rad,
    ];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(f) = BY_NAME.get(name) {
            return Some(*f);
        }
        BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Returns true if `name` names a function, ignoring case.
    pub fn is_function(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Lowercase spelling.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Log => "log",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Exp => "exp",
            Function::Abs => "abs",
            Function::Ceil => "ceil",
            Function::Floor => "floor",
            Function::Round => "round",
            Function::Fact => "fact",
            Function::Cbrt => "cbrt",
            Function::Deg => "deg",
            Function::Rad => "rad",
        }
    }

    /// Applies the function to its single argument.
    pub fn apply(self, x: f64) -> OpResult {
        match self {
            Function::Sin => Ok(x.sin()),
            Function::Cos => Ok(x.cos()),
            Function::Tan => Ok(x.tan()),
            Function::Asin => Ok(x.asin()),
            Function::Acos => Ok(x.acos()),
            Function::Atan => Ok(x.atan()),
            Function::Sinh => Ok(x.sinh()),
            Function::Cosh => Ok(x.cosh()),
            Function::Tanh => Ok(x.tanh()),
            Function::Log | Function::Ln => math::ln(x),
            Function::Sqrt => math::sqrt(x),
            Function::Exp => Ok(x.exp()),
            Function::Abs => Ok(x.abs()),
            Function::Ceil => Ok(x.ceil()),
            Function::Floor => Ok(x.floor()),
            Function::Round => Ok(math::round2(x)),
            Function::Fact => math::factorial(x),
            Function::Cbrt => Ok(x.cbrt()),
            Function::Deg => Ok(x.to_degrees()),
            Function::Rad => Ok(x.to_radians()),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
