use std::fmt;

use crate::{math, OpResult};

/// Grouping rule for a run of operators that share a precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`
    #[default]
    Left,
    /// `a op b op c` groups as `a op (b op c)`
    Right,
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`, also spelled `**`
    Pow,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Mod,
        Operator::Pow,
    ];

    /// Characters that form an operator on their own.
    pub const CHARS: &'static str = "+-*/%^";

    /// Looks up an operator by its source spelling.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "%" => Some(Operator::Mod),
            "^" | "**" => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Looks up a single-character operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Mod),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Returns true if `c` is one of [`Operator::CHARS`].
    pub fn is_operator_char(c: char) -> bool {
        Self::CHARS.contains(c)
    }

    /// Canonical spelling.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Pow => "^",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div | Operator::Mod => 2,
            Operator::Pow => 3,
        }
    }

    /// Conventional mathematical grouping for this operator.
    ///
    /// The converter only honours [`Associativity::Right`] when it is asked
    /// to; by default every operator is grouped left to right.
    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operator to `a op b`.
    pub fn apply(self, a: f64, b: f64) -> OpResult {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => math::divide(a, b),
            Operator::Mod => math::modulo(a, b),
            Operator::Pow => math::power(a, b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
