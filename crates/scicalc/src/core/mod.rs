//! Core calculator types: operators, scientific functions, history and
//! number rendering.
//!
//! Everything here is pure data or pure functions; the stateful part lives in
//! [`crate::engine`].

pub mod history;
pub mod number;
mod operations;

pub use operations::{apply, factorial, AngleMode, Constant, Operator, ScientificFn};

use thiserror::Error;

/// Result type for the intent layer
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while turning external input into intents.
///
/// The engine itself never fails: invalid numeric results surface as the
/// `"Error"` display, not as a `CalcError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Token does not name any intent
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
    /// Character is not accepted by digit entry
    #[error("Invalid key: {0:?}")]
    InvalidKey(char),
    /// Value outside 0-9 offered as a digit
    #[error("Invalid digit: {0}")]
    InvalidDigit(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display_unknown_intent() {
        let err = CalcError::UnknownIntent("foo".into());
        assert_eq!(format!("{err}"), "Unknown intent: foo");
    }

    #[test]
    fn test_calc_error_display_invalid_key() {
        let err = CalcError::InvalidKey('z');
        assert_eq!(format!("{err}"), "Invalid key: 'z'");
    }

    #[test]
    fn test_calc_error_display_invalid_digit() {
        let err = CalcError::InvalidDigit(42);
        assert_eq!(format!("{err}"), "Invalid digit: 42");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::InvalidKey('?'));
        assert!(err.to_string().contains("Invalid key"));
    }
}
