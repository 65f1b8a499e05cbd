//! scicalc - scientific calculator evaluation engine
//!
//! Turns a sequence of keypad intents (digits, decimal point, operators,
//! scientific functions, memory keys, clear/equals) into a running display
//! value and a textual history of completed operations.
//!
//! - Chains evaluate strictly left to right, without precedence
//! - Division by zero yields `0`
//! - Invalid function results (`ln(-1)`, `170.5!`) show `Error` and never
//!   reach the history
//!
//! # Example
//!
//! ```rust
//! use scicalc::prelude::*;
//!
//! let mut engine = CalculatorEngine::new();
//! engine.dispatch_all(parse_script("2 + 3 × 4 =").unwrap());
//! assert_eq!(engine.display(), "20");
//!
//! engine.input_digit(EntryKey::digit(9).unwrap());
//! engine.perform_scientific_operation(ScientificFn::Sqrt);
//! assert_eq!(engine.display(), "3");
//! assert_eq!(engine.history().last().unwrap().display(), "sqrt(9) = 3");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod engine;
pub mod intent;

pub use crate::core::{CalcError, CalcResult};
pub use engine::{CalculatorEngine, EngineConfig, EngineSnapshot, ERROR_DISPLAY};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::number::{format_number, parse_display};
    pub use crate::core::{
        apply, factorial, AngleMode, CalcError, CalcResult, Constant, Operator, ScientificFn,
    };
    pub use crate::engine::{CalculatorEngine, EngineConfig, EngineSnapshot, ERROR_DISPLAY};
    pub use crate::intent::{parse_script, parse_token, Digit, EntryKey, Intent};
}
