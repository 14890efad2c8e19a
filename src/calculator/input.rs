//! Input events and key parsing.
//!
//! Every way of driving the calculator (keypad buttons, window keystrokes,
//! key strings on the command line) is turned into [`Input`] values.

use super::operation::{BinaryOp, UnaryFunction};
use crate::error::InputError;
use lazy_static::lazy_static;
use regex::Regex;

/// A single decimal digit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit(c))
    }
}

/// One input event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Digit(Digit),
    DecimalPoint,
    Clear,
    Operator(BinaryOp),
    Equals,
    Function(UnaryFunction),
    ToggleSign,
    Percent,
    ToggleEdit,
    /// Replace the raw text while editing.
    SetEditText(String),
    CommitEdit,
    CancelEdit,
    /// Recall the history entry at this position (0 is the newest).
    RecallHistory(usize),
    ClearHistory,
}

impl Input {
    /// Map a window keystroke (as reported by the key event) to an input.
    ///
    /// Only keys that make sense outside of edit mode are mapped.
    pub fn from_keystroke(key: &str) -> Option<Self> {
        match key {
            "enter" | "=" => Some(Self::Equals),
            "escape" => Some(Self::Clear),
            "." | "," => Some(Self::DecimalPoint),
            "+" => Some(Self::Operator(BinaryOp::Add)),
            "-" => Some(Self::Operator(BinaryOp::Subtract)),
            "*" => Some(Self::Operator(BinaryOp::Multiply)),
            "/" => Some(Self::Operator(BinaryOp::Divide)),
            "%" => Some(Self::Percent),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Digit::try_from(c).ok().map(Self::Digit),
                    _ => None,
                }
            }
        }
    }
}

lazy_static! {
    /// One key token: an `edit:`/`recall:` command, the sign toggle, a word,
    /// a single digit or a single symbol.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"edit:\S*|recall:\S*|\+/-|[A-Za-z²√]+|[0-9]|[.+\-−*×/÷=%]"
    ).unwrap();
}

/// Parse a key string such as `"3 + 4 + 5 ="` or `"30 sin"` into inputs.
///
/// Digits and symbols do not need separating whitespace (`"12+3="` works);
/// words do.
pub fn parse_inputs(text: &str) -> Result<Vec<Input>, InputError> {
    let mut inputs = Vec::new();
    let mut last_end = 0;

    for token in KEY_TOKEN.find_iter(text) {
        check_gap(&text[last_end..token.start()])?;
        last_end = token.end();
        push_token(token.as_str(), &mut inputs)?;
    }
    check_gap(&text[last_end..])?;

    Ok(inputs)
}

/// Anything between two tokens must be whitespace.
fn check_gap(gap: &str) -> Result<(), InputError> {
    let unknown = gap.trim();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(InputError::UnknownKey(unknown.to_string()))
    }
}

fn push_token(token: &str, inputs: &mut Vec<Input>) -> Result<(), InputError> {
    if let Some(text) = token.strip_prefix("edit:") {
        inputs.push(Input::ToggleEdit);
        inputs.push(Input::SetEditText(text.to_string()));
        inputs.push(Input::CommitEdit);
        return Ok(());
    }

    if let Some(position) = token.strip_prefix("recall:") {
        let index = position
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| InputError::InvalidRecall(position.to_string()))?;
        inputs.push(Input::RecallHistory(index));
        return Ok(());
    }

    let input = match token.to_lowercase().as_str() {
        "." => Input::DecimalPoint,
        "+" => Input::Operator(BinaryOp::Add),
        "-" | "−" => Input::Operator(BinaryOp::Subtract),
        "*" | "×" | "x" => Input::Operator(BinaryOp::Multiply),
        "/" | "÷" => Input::Operator(BinaryOp::Divide),
        "=" => Input::Equals,
        "%" => Input::Percent,
        "+/-" | "neg" => Input::ToggleSign,
        "c" | "ac" | "clear" => Input::Clear,
        "hc" => Input::ClearHistory,
        "sin" => Input::Function(UnaryFunction::Sin),
        "cos" => Input::Function(UnaryFunction::Cos),
        "tan" => Input::Function(UnaryFunction::Tan),
        "log" | "log10" => Input::Function(UnaryFunction::Log10),
        "ln" => Input::Function(UnaryFunction::Ln),
        "sqrt" | "√" => Input::Function(UnaryFunction::Sqrt),
        "sq" | "square" | "x²" => Input::Function(UnaryFunction::Square),
        "inv" | "inverse" | "reciprocal" => Input::Function(UnaryFunction::Reciprocal),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Input::Digit(Digit::try_from(c)?),
                _ => return Err(InputError::UnknownKey(token.to_string())),
            }
        }
    };

    inputs.push(input);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Input {
        Input::Digit(Digit::new(d).unwrap())
    }

    #[test]
    fn test_digit_conversion() {
        assert_eq!(Digit::try_from('7').map(Digit::value), Ok(7));
        assert_eq!(Digit::try_from('a'), Err(InputError::InvalidDigit('a')));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::new(3).map(Digit::as_char), Some('3'));
    }

    #[test]
    fn test_parse_compact_arithmetic() {
        let inputs = parse_inputs("12+3=").unwrap();
        assert_eq!(
            inputs,
            vec![
                digit(1),
                digit(2),
                Input::Operator(BinaryOp::Add),
                digit(3),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_symbols() {
        let inputs = parse_inputs("÷ × − - * / x % +/- .").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::Operator(BinaryOp::Divide),
                Input::Operator(BinaryOp::Multiply),
                Input::Operator(BinaryOp::Subtract),
                Input::Operator(BinaryOp::Subtract),
                Input::Operator(BinaryOp::Multiply),
                Input::Operator(BinaryOp::Divide),
                Input::Operator(BinaryOp::Multiply),
                Input::Percent,
                Input::ToggleSign,
                Input::DecimalPoint,
            ]
        );
    }

    #[test]
    fn test_parse_words() {
        let inputs = parse_inputs("30 SIN sqrt √ inv AC hc").unwrap();
        assert_eq!(
            inputs,
            vec![
                digit(3),
                digit(0),
                Input::Function(UnaryFunction::Sin),
                Input::Function(UnaryFunction::Sqrt),
                Input::Function(UnaryFunction::Sqrt),
                Input::Function(UnaryFunction::Reciprocal),
                Input::Clear,
                Input::ClearHistory,
            ]
        );
    }

    #[test]
    fn test_parse_edit_and_recall() {
        let inputs = parse_inputs("edit:12.5 recall:2").unwrap();
        assert_eq!(
            inputs,
            vec![
                Input::ToggleEdit,
                Input::SetEditText("12.5".to_string()),
                Input::CommitEdit,
                Input::RecallHistory(1),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            parse_inputs("3 + foo"),
            Err(InputError::UnknownKey("foo".to_string()))
        );
        assert_eq!(
            parse_inputs("3 & 4"),
            Err(InputError::UnknownKey("&".to_string()))
        );
        assert_eq!(
            parse_inputs("recall:0"),
            Err(InputError::InvalidRecall("0".to_string()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_inputs("   "), Ok(Vec::new()));
    }

    #[test]
    fn test_from_keystroke() {
        assert_eq!(Input::from_keystroke("5"), Some(digit(5)));
        assert_eq!(Input::from_keystroke("enter"), Some(Input::Equals));
        assert_eq!(
            Input::from_keystroke("*"),
            Some(Input::Operator(BinaryOp::Multiply))
        );
        assert_eq!(Input::from_keystroke("escape"), Some(Input::Clear));
        assert_eq!(Input::from_keystroke("a"), None);
        assert_eq!(Input::from_keystroke("backspace"), None);
    }
}
