//! The calculator state machine.
//!
//! [`Calculator`] owns the display buffer, the pending binary operation, the
//! edit sub-state and the history log. Every input event maps to one method;
//! each runs to completion and leaves the state consistent.

use super::format::{format_number, parse_number};
use super::input::{Digit, Input};
use super::operation::{BinaryOp, UnaryFunction};
use crate::history::{HistoryEntry, HistoryId, HistoryLog};
use serde::Serialize;
use tracing::{debug, info, warn};

/// A binary operation waiting for its right operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingOperation {
    /// The left operand.
    pub operand: f64,
    pub operator: BinaryOp,
}

/// Whether the display is showing a value or being edited as free text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryMode {
    Display,
    /// Raw text typed by the user; only parsed on commit.
    Editing(String),
}

/// Everything a view needs to render the calculator.
#[derive(Clone, Debug, Serialize)]
pub struct Snapshot {
    /// The shown text: the raw edit buffer while editing, otherwise the value.
    pub display: String,
    pub pending: Option<PendingSnapshot>,
    /// `"<operand> <operator>"` while an operation is pending.
    pub running_expression: Option<String>,
    pub edit_mode: bool,
    pub history: Vec<HistoryEntry>,
}

#[derive(Clone, Debug, Serialize)]
pub struct PendingSnapshot {
    pub operand: String,
    pub operator: &'static str,
}

/// Basic/scientific calculator with history.
#[derive(Clone, Debug)]
pub struct Calculator {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_new_operand: bool,
    mode: EntryMode,
    history: HistoryLog,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history(HistoryLog::new())
    }

    pub fn with_history(history: HistoryLog) -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_new_operand: false,
            mode: EntryMode::Display,
            history,
        }
    }

    /// The shown text (raw edit buffer while editing).
    pub fn display(&self) -> &str {
        match &self.mode {
            EntryMode::Editing(raw) => raw,
            EntryMode::Display => &self.display,
        }
    }

    /// The last committed value text, ignoring any edit in progress.
    pub fn committed_display(&self) -> &str {
        &self.display
    }

    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// The left operand of the pending operation.
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    pub fn pending_operator(&self) -> Option<BinaryOp> {
        self.pending.map(|p| p.operator)
    }

    pub fn is_awaiting_new_operand(&self) -> bool {
        self.awaiting_new_operand
    }

    pub fn mode(&self) -> &EntryMode {
        &self.mode
    }

    pub fn edit_mode(&self) -> bool {
        matches!(self.mode, EntryMode::Editing(_))
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Secondary readout such as `"3 +"` while an operation is pending.
    pub fn running_expression(&self) -> Option<String> {
        self.pending
            .map(|p| format!("{} {}", format_number(p.operand), p.operator))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display().to_string(),
            pending: self.pending.map(|p| PendingSnapshot {
                operand: format_number(p.operand),
                operator: p.operator.symbol(),
            }),
            running_expression: self.running_expression(),
            edit_mode: self.edit_mode(),
            history: self.history.iter().cloned().collect(),
        }
    }

    /// Dispatch one input event.
    pub fn apply(&mut self, input: &Input) {
        debug!(?input, "applying input");
        match input {
            Input::Digit(d) => self.input_digit(*d),
            Input::DecimalPoint => self.input_decimal_point(),
            Input::Clear => self.clear(),
            Input::Operator(op) => self.apply_binary_operator(*op),
            Input::Equals => self.apply_equals(),
            Input::Function(f) => self.apply_unary_function(*f),
            Input::ToggleSign => self.toggle_sign(),
            Input::Percent => self.apply_percent(),
            Input::ToggleEdit => self.toggle_edit_mode(),
            Input::SetEditText(text) => self.set_edit_text(text),
            Input::CommitEdit => self.commit_edit(),
            Input::CancelEdit => self.cancel_edit(),
            Input::RecallHistory(index) => {
                self.recall_history(*index);
            }
            Input::ClearHistory => self.clear_history(),
        }
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.finish_edit();
        let c = digit.as_char();

        if self.awaiting_new_operand {
            self.display = c.to_string();
            self.awaiting_new_operand = false;
        } else if self.display == "0" {
            self.display = c.to_string();
        } else {
            self.display.push(c);
        }
    }

    pub fn input_decimal_point(&mut self) {
        self.finish_edit();

        if self.awaiting_new_operand {
            self.display = "0.".to_string();
            self.awaiting_new_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Reset everything except the history.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.awaiting_new_operand = false;
        self.mode = EntryMode::Display;
    }

    pub fn apply_binary_operator(&mut self, operator: BinaryOp) {
        self.finish_edit();
        let current = self.current_operand();

        let operand = match self.pending {
            None => current,
            Some(pending) => {
                let result = pending.operator.combine(pending.operand, current);
                self.display = format_number(result);
                result
            }
        };

        self.pending = Some(PendingOperation { operand, operator });
        self.awaiting_new_operand = true;
    }

    /// Complete the pending operation and record it. No-op without one.
    pub fn apply_equals(&mut self) {
        self.finish_edit();
        let Some(pending) = self.pending else {
            return;
        };

        let current = self.current_operand();
        let result = format_number(pending.operator.combine(pending.operand, current));
        let expression = format!(
            "{} {} {}",
            format_number(pending.operand),
            pending.operator,
            format_number(current)
        );

        self.history.append(expression, result.clone());
        self.display = result;
        self.pending = None;
        self.awaiting_new_operand = true;
    }

    /// Apply a scientific function to the displayed value and record it.
    /// A pending binary operation is left as is.
    pub fn apply_unary_function(&mut self, function: UnaryFunction) {
        self.finish_edit();
        let operand = self.current_operand();
        let result = format_number(function.apply(operand));
        let expression = format!("{}({})", function, format_number(operand));

        self.history.append(expression, result.clone());
        self.display = result;
        self.awaiting_new_operand = true;
    }

    /// Negate the displayed value, keeping partial entries like `5.` intact.
    /// `NaN` has no sign and is left alone.
    pub fn toggle_sign(&mut self) {
        self.finish_edit();

        if parse_number(&self.display).is_some_and(f64::is_nan) {
            return;
        }
        if let Some(positive) = self.display.strip_prefix('-') {
            self.display = positive.to_string();
        } else if self.display != "0" {
            self.display.insert(0, '-');
        }
    }

    /// Divide the displayed value by 100.
    pub fn apply_percent(&mut self) {
        self.finish_edit();
        self.display = format_number(self.current_operand() / 100.0);
        self.awaiting_new_operand = true;
    }

    /// Enter edit mode with the current display as raw text, or commit the
    /// edit in progress.
    pub fn toggle_edit_mode(&mut self) {
        match self.mode {
            EntryMode::Display => self.mode = EntryMode::Editing(self.display.clone()),
            EntryMode::Editing(_) => self.commit_edit(),
        }
    }

    /// Replace the raw text. Ignored outside edit mode.
    pub fn set_edit_text(&mut self, text: &str) {
        if let EntryMode::Editing(raw) = &mut self.mode {
            text.clone_into(raw);
        }
    }

    /// Leave edit mode, keeping the edited value if it parses.
    ///
    /// Text that is not a finite number (including `nan` and `inf`) is
    /// rejected and the previous display value is kept. A value shown in
    /// exponent form cannot be extended, so the next digit starts a new
    /// operand.
    pub fn commit_edit(&mut self) {
        let EntryMode::Editing(raw) = std::mem::replace(&mut self.mode, EntryMode::Display) else {
            return;
        };

        match parse_number(&raw).filter(|value| value.is_finite()) {
            Some(value) => {
                self.display = format_number(value);
                if self.display.contains('e') {
                    self.awaiting_new_operand = true;
                }
            }
            None => warn!(text = %raw, "rejected non-numeric edit"),
        }
    }

    /// Leave edit mode discarding the raw text.
    pub fn cancel_edit(&mut self) {
        self.mode = EntryMode::Display;
    }

    /// Load a history entry's result as a fresh operand.
    ///
    /// Returns `false` if no entry has this id.
    pub fn select_history(&mut self, id: HistoryId) -> bool {
        let Some(result) = self.history.select(id).map(|e| e.result.clone()) else {
            return false;
        };
        self.load_result(result);
        true
    }

    /// Like [`select_history`](Self::select_history), by position (0 is the
    /// newest entry).
    pub fn recall_history(&mut self, index: usize) -> bool {
        let Some(result) = self.history.get(index).map(|e| e.result.clone()) else {
            return false;
        };
        self.load_result(result);
        true
    }

    pub fn clear_history(&mut self) {
        info!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }

    fn load_result(&mut self, result: String) {
        self.mode = EntryMode::Display;
        self.display = result;
        self.pending = None;
        self.awaiting_new_operand = true;
    }

    /// Commit an edit left open before a non-edit input.
    fn finish_edit(&mut self) {
        if self.edit_mode() {
            self.commit_edit();
        }
    }

    fn current_operand(&self) -> f64 {
        parse_number(&self.display).unwrap_or_else(|| {
            warn!(display = %self.display, "display is not a number, using 0");
            0.0
        })
    }
}
