//! Calculator engine.
//!
//! This module provides:
//! - The input-driven calculator state machine and its snapshot read model
//! - Binary operators and degree-based scientific functions
//! - Key parsing for keypad, keyboard and command-line input
//! - Display number formatting
//! - Copying results to the clipboard

mod clipboard;
mod engine;
mod format;
mod input;
mod operation;

pub use clipboard::copy_to_clipboard;
pub use engine::{Calculator, EntryMode, PendingOperation, PendingSnapshot, Snapshot};
pub use format::{format_number, group_digits, parse_number};
pub use input::{Digit, Input, parse_inputs};
pub use operation::{BinaryOp, UnaryFunction};
