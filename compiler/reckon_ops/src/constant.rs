use std::fmt;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Every constant, in table order.
    pub const ALL: [Constant; 2] = [Constant::Pi, Constant::E];

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("pi") {
            Some(Constant::Pi)
        } else if name.eq_ignore_ascii_case("e") {
            Some(Constant::E)
        } else {
            None
        }
    }

    /// Lowercase spelling.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Double-precision value.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
