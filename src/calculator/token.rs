//! Token vocabulary and precedence table.

use std::fmt;

/// Binary operators, in the characters the keypad produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "x" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "x",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Binding strength. Ties resolve left-to-right, `^` included.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Combine `lhs OP rhs`, where `lhs` is the operand pushed first.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

/// The fixed set of single-argument functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Log,
    Sqrt,
}

/// Every function with its keypad name.
pub const FUNCTIONS: &[(&str, Function)] = &[
    ("sin", Function::Sin),
    ("cos", Function::Cos),
    ("tan", Function::Tan),
    ("cot", Function::Cot),
    ("sec", Function::Sec),
    ("csc", Function::Csc),
    ("log", Function::Log),
    ("sqrt", Function::Sqrt),
];

impl Function {
    pub fn from_name(name: &str) -> Option<Self> {
        FUNCTIONS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, func)| *func)
    }

    pub fn name(self) -> &'static str {
        FUNCTIONS
            .iter()
            .find(|(_, func)| *func == self)
            .map(|(name, _)| *name)
            .unwrap_or("?")
    }

    /// Apply the function. Trigonometric arguments are in degrees.
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sin => arg.to_radians().sin(),
            Self::Cos => arg.to_radians().cos(),
            Self::Tan => arg.to_radians().tan(),
            Self::Cot => 1.0 / arg.to_radians().tan(),
            Self::Sec => 1.0 / arg.to_radians().cos(),
            Self::Csc => 1.0 / arg.to_radians().sin(),
            Self::Log => arg.log10(),
            Self::Sqrt => arg.sqrt(),
        }
    }
}

/// A classified lexical unit of an infix expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    Function(Function),
    LeftParen,
    RightParen,
}

/// A token of the postfix output queue. Parentheses cannot appear here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PostfixToken {
    Number(f64),
    Operator(Operator),
    Function(Function),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Operator(op) => f.write_str(op.symbol()),
            Self::Function(func) => f.write_str(func.name()),
        }
    }
}
