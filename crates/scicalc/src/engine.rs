//! Calculator engine state machine
//!
//! [`CalculatorEngine`] owns every piece of mutable calculator state and
//! changes it one intent at a time. Each method runs to completion under
//! `&mut self`, so a host that shares the engine across threads wraps the
//! whole struct in a single lock.

use crate::core::history::{History, HistoryEntry};
use crate::core::number::{format_number, parse_display};
use crate::core::{apply, AngleMode, Constant, Operator, ScientificFn};
use crate::intent::{EntryKey, Intent};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Marker shown when a scientific function produced NaN or an infinity
pub const ERROR_DISPLAY: &str = "Error";

/// The visual buffer
#[derive(Debug, Clone, PartialEq, Eq)]
enum DisplayBuffer {
    Text(String),
    Error,
}

impl DisplayBuffer {
    fn zero() -> Self {
        Self::Text("0".to_string())
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Error => ERROR_DISPLAY,
        }
    }
}

/// Settings applied when an engine is created or reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Angle mode at session start
    pub angle_mode: AngleMode,
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial angle mode
    #[must_use]
    pub const fn with_angle_mode(mut self, angle_mode: AngleMode) -> Self {
        self.angle_mode = angle_mode;
        self
    }
}

/// Calculator evaluation engine
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    config: EngineConfig,
    display: DisplayBuffer,
    previous_value: Option<f64>,
    operation: Option<Operator>,
    waiting_for_operand: bool,
    memory: f64,
    angle_mode: AngleMode,
    history: History,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates an engine with the given settings
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            display: DisplayBuffer::zero(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            memory: 0.0,
            angle_mode: config.angle_mode,
            history: History::new(),
        }
    }

    // ===== Queries =====

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.display.as_str()
    }

    /// True while the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == DisplayBuffer::Error
    }

    /// Memory register
    #[must_use]
    pub fn memory(&self) -> f64 {
        self.memory
    }

    /// Memory as shown next to the display: `Empty` when zero
    #[must_use]
    pub fn memory_label(&self) -> String {
        if self.memory == 0.0 {
            "Empty".to_string()
        } else {
            format_number(self.memory)
        }
    }

    /// Current angle mode
    #[must_use]
    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Completed operations, oldest first
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// First operand of the pending computation
    #[must_use]
    pub fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    /// Operator waiting for its second operand
    #[must_use]
    pub fn pending_operation(&self) -> Option<Operator> {
        self.operation
    }

    /// True when the next digit starts a new operand
    #[must_use]
    pub fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Settings this engine was created with
    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Serializable copy of the observable state
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            display: self.display().to_string(),
            memory: self.memory,
            memory_label: self.memory_label(),
            angle_mode: self.angle_mode.label().to_string(),
            previous_value: self.previous_value,
            pending_operation: self.operation.map(|op| op.symbol().to_string()),
            waiting_for_operand: self.waiting_for_operand,
            history: self.history.lines(),
        }
    }

    // ===== Intents =====

    /// Routes an intent to the matching operation
    pub fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Key(key) => self.input_digit(key),
            Intent::Decimal => self.input_decimal(),
            Intent::Clear => self.clear(),
            Intent::ClearEntry => self.clear_entry(),
            Intent::Operation(op) => self.perform_operation(op),
            Intent::Function(func) => self.perform_scientific_operation(func),
            Intent::MemoryAdd => self.memory_add(),
            Intent::MemorySubtract => self.memory_subtract(),
            Intent::MemoryRecall => self.memory_recall(),
            Intent::MemoryClear => self.memory_clear(),
            Intent::ToggleAngleMode => self.toggle_angle_mode(),
            Intent::ClearHistory => self.clear_history(),
            Intent::Constant(constant) => self.insert_constant(constant),
            Intent::ToggleSign => self.toggle_sign(),
        }
    }

    /// Dispatches every intent in order
    pub fn dispatch_all<I>(&mut self, intents: I)
    where
        I: IntoIterator<Item = Intent>,
    {
        for intent in intents {
            self.dispatch(intent);
        }
    }

    /// Digit (or parenthesis) entry
    pub fn input_digit(&mut self, key: EntryKey) {
        if self.blocked_by_error("input_digit") {
            return;
        }
        let c = key.as_char();
        trace!(key = %c, waiting = self.waiting_for_operand, "key entry");

        if self.waiting_for_operand {
            self.display = DisplayBuffer::Text(c.to_string());
            self.waiting_for_operand = false;
        } else if let DisplayBuffer::Text(text) = &mut self.display {
            if text == "0" {
                *text = c.to_string();
            } else {
                text.push(c);
            }
        }
    }

    /// Decimal point entry; never adds a second point to an operand
    pub fn input_decimal(&mut self) {
        if self.blocked_by_error("input_decimal") {
            return;
        }
        if self.waiting_for_operand {
            self.display = DisplayBuffer::Text("0.".to_string());
            self.waiting_for_operand = false;
        } else if let DisplayBuffer::Text(text) = &mut self.display {
            if !text.contains('.') {
                text.push('.');
            }
        }
    }

    /// C: resets display and pending computation, keeps memory and history
    pub fn clear(&mut self) {
        self.display = DisplayBuffer::zero();
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = false;
    }

    /// CE: resets the display only, so a chain can continue
    pub fn clear_entry(&mut self) {
        self.display = DisplayBuffer::zero();
    }

    /// Full reset to a fresh session with the same config
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    /// Selects a binary operator, resolving any pending one first.
    ///
    /// Chains evaluate strictly left to right: `2 + 3 × 4 =` gives 20.
    pub fn perform_operation(&mut self, next: Operator) {
        if self.blocked_by_error("perform_operation") {
            return;
        }
        let input_value = self.input_value();

        match (self.previous_value, self.operation) {
            (None, _) => self.previous_value = Some(input_value),
            (Some(previous), Some(op)) => {
                let current = if previous.is_nan() { 0.0 } else { previous };
                let result = apply(current, input_value, op);
                let entry = HistoryEntry::binary(current, op, input_value, result);
                debug!(entry = %entry, "resolved binary operation");

                self.display = DisplayBuffer::Text(format_number(result));
                self.history.push(entry);
                self.previous_value = Some(result);
            }
            (Some(_), None) => {}
        }

        self.waiting_for_operand = true;
        self.operation = Some(next);
    }

    /// Applies a unary function to the display.
    ///
    /// NaN or infinite results put the display into the error state and
    /// leave history, pending computation and operand flag untouched.
    pub fn perform_scientific_operation(&mut self, func: ScientificFn) {
        if self.blocked_by_error("perform_scientific_operation") {
            return;
        }
        let input_value = self.input_value();
        let result = func.evaluate(input_value, self.angle_mode);

        if !result.is_finite() {
            debug!(function = %func, input = input_value, "invalid result, showing error");
            self.display = DisplayBuffer::Error;
            return;
        }

        let entry = HistoryEntry::function(func, input_value, result);
        if func.is_trigonometric() {
            debug!(entry = %entry, mode = self.angle_mode.label(), "applied function");
        } else {
            debug!(entry = %entry, "applied function");
        }
        self.display = DisplayBuffer::Text(format_number(result));
        self.history.push(entry);
        self.waiting_for_operand = true;
    }

    /// M+
    pub fn memory_add(&mut self) {
        if self.blocked_by_error("memory_add") {
            return;
        }
        self.memory += self.input_value();
    }

    /// M-
    pub fn memory_subtract(&mut self) {
        if self.blocked_by_error("memory_subtract") {
            return;
        }
        self.memory -= self.input_value();
    }

    /// MR: copies memory to the display and starts a fresh operand
    pub fn memory_recall(&mut self) {
        self.display = DisplayBuffer::Text(format_number(self.memory));
        self.waiting_for_operand = true;
    }

    /// MC
    pub fn memory_clear(&mut self) {
        self.memory = 0.0;
    }

    /// Switches between radians and degrees
    pub fn toggle_angle_mode(&mut self) {
        self.angle_mode = self.angle_mode.toggled();
        debug!(mode = self.angle_mode.label(), "angle mode toggled");
    }

    /// Empties the history log
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Writes π or e to the display.
    ///
    /// The operand flag is left alone, so a following digit appends to the
    /// constant's digits.
    pub fn insert_constant(&mut self, constant: Constant) {
        self.display = DisplayBuffer::Text(format_number(constant.value()));
    }

    /// ±: toggles a leading minus on the display text
    pub fn toggle_sign(&mut self) {
        if self.blocked_by_error("toggle_sign") {
            return;
        }
        if let DisplayBuffer::Text(text) = &mut self.display {
            if text.starts_with('-') {
                text.remove(0);
            } else {
                text.insert(0, '-');
            }
        }
    }

    fn input_value(&self) -> f64 {
        parse_display(self.display.as_str())
    }

    fn blocked_by_error(&self, intent: &'static str) -> bool {
        let blocked = self.is_error();
        if blocked {
            debug!(intent, "ignored while display shows error");
        }
        blocked
    }
}

/// Observable engine state, for rendering or JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    /// Display text
    pub display: String,
    /// Memory register
    pub memory: f64,
    /// Memory as rendered (`Empty` when zero)
    pub memory_label: String,
    /// `RAD` or `DEG`
    pub angle_mode: String,
    /// First operand of the pending computation
    pub previous_value: Option<f64>,
    /// Pending operator symbol
    pub pending_operation: Option<String>,
    /// Whether the next digit starts a new operand
    pub waiting_for_operand: bool,
    /// History lines, oldest first
    pub history: Vec<String>,
}

impl EngineSnapshot {
    /// Serializes the snapshot to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
