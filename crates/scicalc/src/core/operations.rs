//! Binary operators, scientific functions and constants
//!
//! Closed enums replace string selectors, so an unknown operator or function
//! cannot reach the engine.

use serde::{Deserialize, Serialize};
use std::f64::consts;

/// Binary operator selected on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Power (^)
    Power,
    /// Terminal operator (=): resolves the pending pair, queues nothing
    Equals,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Equals,
    ];

    /// Returns the operator symbol used in history entries
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
            Self::Equals => "=",
        }
    }

    /// Looks up an operator by symbol, accepting ASCII aliases
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            "=" => Some(Self::Equals),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies a binary operator to two operands.
///
/// Division by zero yields `0`. `Equals` returns the second operand, which
/// is what makes a repeated `=` inert.
#[must_use]
pub fn apply(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
        Operator::Power => a.powf(b),
        Operator::Equals => b,
    }
}

/// Interpretation of trigonometric inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    /// Inputs are radians
    #[default]
    Radians,
    /// Inputs are degrees
    Degrees,
}

impl AngleMode {
    /// Short label shown next to the display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Radians => "RAD",
            Self::Degrees => "DEG",
        }
    }

    /// Returns the other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Radians => Self::Degrees,
            Self::Degrees => Self::Radians,
        }
    }

    /// Converts an input in this mode to radians
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Radians => value,
            Self::Degrees => (value * consts::PI) / 180.0,
        }
    }
}

/// Unary scientific function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    /// Sine (angle-aware)
    Sin,
    /// Cosine (angle-aware)
    Cos,
    /// Tangent (angle-aware)
    Tan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    /// Square root
    Sqrt,
    /// x²
    Square,
    /// 1/x
    Inverse,
    /// n!
    Factorial,
    /// |x|
    Abs,
}

impl ScientificFn {
    /// All functions in keypad order
    pub const ALL: [Self; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::Ln,
        Self::Sqrt,
        Self::Square,
        Self::Inverse,
        Self::Factorial,
        Self::Abs,
    ];

    /// Name used in history entries, e.g. `sqrt(9) = 3`
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Inverse => "inverse",
            Self::Factorial => "factorial",
            Self::Abs => "abs",
        }
    }

    /// Looks up a function by its history name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Returns true for sin, cos and tan
    #[must_use]
    pub const fn is_trigonometric(&self) -> bool {
        matches!(self, Self::Sin | Self::Cos | Self::Tan)
    }

    /// Evaluates the function. May return NaN or an infinity; the caller
    /// decides what to do with those.
    #[must_use]
    pub fn evaluate(self, x: f64, mode: AngleMode) -> f64 {
        match self {
            Self::Sin => mode.to_radians(x).sin(),
            Self::Cos => mode.to_radians(x).cos(),
            Self::Tan => mode.to_radians(x).tan(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
            Self::Square => x * x,
            Self::Inverse => 1.0 / x,
            Self::Factorial => factorial(x),
            Self::Abs => x.abs(),
        }
    }
}

impl std::fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// n! for non-negative integers, NaN otherwise.
///
/// Overflow is left to `f64`: the product saturates to infinity, at which
/// point the loop stops.
#[must_use]
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 || n.fract() != 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        result *= i;
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}

/// Mathematical constant that can be inserted into the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number
    E,
}

impl Constant {
    /// Every constant on the keypad
    pub const ALL: [Self; 2] = [Self::Pi, Self::E];

    /// Looks up a constant by its keypad label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Numeric value
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Pi => consts::PI,
            Self::E => consts::E,
        }
    }

    /// Keypad label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pi => "π",
            Self::E => "e",
        }
    }
}
