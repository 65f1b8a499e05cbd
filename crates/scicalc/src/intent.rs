//! Intents: the discrete user actions the engine understands
//!
//! A presentation layer maps its buttons or keys to [`Intent`] values and
//! hands them to [`crate::CalculatorEngine::dispatch`]. The token parser
//! below is the text form used by scripts and the command line.

use crate::core::{CalcError, CalcResult, Constant, Operator, ScientificFn};
use serde::{Deserialize, Serialize};

/// A decimal digit, 0 through 9.
///
/// The field is private: a `Digit` only comes from [`Digit::new`], one of the
/// `TryFrom` impls, or [`Digit::ALL`], so it is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Every digit, in keypad order 0-9
    pub const ALL: [Self; 10] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Checked constructor
    pub fn new(value: u8) -> CalcResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(CalcError::InvalidDigit(value))
        }
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The character appended to the display
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

/// A character accepted by digit entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKey {
    /// Digit 0-9
    Digit(Digit),
    /// `(` - collected into the display, never evaluated
    OpenParen,
    /// `)` - collected into the display, never evaluated
    CloseParen,
}

impl EntryKey {
    /// Digit key for `value`; fails outside 0-9
    pub fn digit(value: u8) -> CalcResult<Self> {
        Digit::new(value).map(Self::Digit)
    }

    /// The character appended to the display
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::OpenParen => '(',
            Self::CloseParen => ')',
        }
    }
}

impl TryFrom<char> for EntryKey {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        match c {
            '0'..='9' => Ok(Self::Digit(Digit(c as u8 - b'0'))),
            '(' => Ok(Self::OpenParen),
            ')' => Ok(Self::CloseParen),
            other => Err(CalcError::InvalidKey(other)),
        }
    }
}

/// One discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Digit or parenthesis entry
    Key(EntryKey),
    /// Decimal point
    Decimal,
    /// C: reset display and pending computation
    Clear,
    /// CE: reset display only
    ClearEntry,
    /// Binary operator or `=`
    Operation(Operator),
    /// Unary scientific function
    Function(ScientificFn),
    /// M+
    MemoryAdd,
    /// M-
    MemorySubtract,
    /// MR
    MemoryRecall,
    /// MC
    MemoryClear,
    /// RAD/DEG switch
    ToggleAngleMode,
    /// Empty the history log
    ClearHistory,
    /// π or e
    Constant(Constant),
    /// ±
    ToggleSign,
}

/// Parses one whitespace-free token into intents.
///
/// Runs of digits, `.` and parentheses expand to one intent per character,
/// so `"1.5"` becomes `1`, `.`, `5`. Everything else is a single keyword or
/// symbol (case-insensitive).
pub fn parse_token(token: &str) -> CalcResult<Vec<Intent>> {
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit() || "().".contains(c)) {
        return token
            .chars()
            .map(|c| {
                if c == '.' {
                    Ok(Intent::Decimal)
                } else {
                    EntryKey::try_from(c).map(Intent::Key)
                }
            })
            .collect();
    }

    if let Some(op) = Operator::from_symbol(token) {
        return Ok(vec![Intent::Operation(op)]);
    }

    let lower = token.to_lowercase();
    if let Some(func) = ScientificFn::from_name(&lower) {
        return Ok(vec![Intent::Function(func)]);
    }
    if let Some(constant) = Constant::from_label(&lower) {
        return Ok(vec![Intent::Constant(constant)]);
    }

    let intent = match lower.as_str() {
        "√" => Intent::Function(ScientificFn::Sqrt),
        "x²" | "sq" => Intent::Function(ScientificFn::Square),
        "1/x" | "inv" => Intent::Function(ScientificFn::Inverse),
        "n!" | "!" | "fact" => Intent::Function(ScientificFn::Factorial),
        "|x|" => Intent::Function(ScientificFn::Abs),
        "c" | "clear" => Intent::Clear,
        "ce" => Intent::ClearEntry,
        "m+" => Intent::MemoryAdd,
        "m-" => Intent::MemorySubtract,
        "mr" => Intent::MemoryRecall,
        "mc" => Intent::MemoryClear,
        "mode" | "drg" | "rad" | "deg" => Intent::ToggleAngleMode,
        "ch" | "clear-history" => Intent::ClearHistory,
        "pi" => Intent::Constant(Constant::Pi),
        "neg" | "±" | "+/-" => Intent::ToggleSign,
        _ => return Err(CalcError::UnknownIntent(token.to_string())),
    };
    Ok(vec![intent])
}

/// Parses whitespace-separated tokens. `#` starts a comment running to the
/// end of the line.
pub fn parse_script(script: &str) -> CalcResult<Vec<Intent>> {
    let mut intents = Vec::new();
    for line in script.lines() {
        let code = line.split_once('#').map_or(line, |(code, _)| code);
        for token in code.split_whitespace() {
            intents.extend(parse_token(token)?);
        }
    }
    Ok(intents)
}
