//! Keypad layout and button rendering.

use crate::calculator::{BinaryOp, Digit, Input, UnaryFunction};
use crate::ui::theme::theme;
use gpui::{
    App, ClickEvent, Div, ElementId, FontWeight, SharedString, Stateful, Window, div, prelude::*,
    relative,
};

/// Visual style of a keypad button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyKind {
    Number,
    Function,
    Operator,
}

/// One keypad button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeypadKey {
    pub label: &'static str,
    pub input: Input,
    pub kind: KeyKind,
    /// Number of grid columns the button spans.
    pub span: usize,
}

impl KeypadKey {
    fn new(label: &'static str, input: Input, kind: KeyKind) -> Self {
        Self {
            label,
            input,
            kind,
            span: 1,
        }
    }

    /// Number keys for `values`; anything above 9 is skipped.
    fn digits(values: &[u8]) -> Vec<Self> {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        values
            .iter()
            .filter_map(|&value| Digit::new(value))
            .map(|digit| {
                Self::new(
                    LABELS[digit.value() as usize],
                    Input::Digit(digit),
                    KeyKind::Number,
                )
            })
            .collect()
    }

    fn operator(op: BinaryOp) -> Self {
        Self::new(op.key_label(), Input::Operator(op), KeyKind::Operator)
    }

    fn function(f: UnaryFunction) -> Self {
        Self::new(f.key_label(), Input::Function(f), KeyKind::Function)
    }

    fn wide(mut self) -> Self {
        self.span = 2;
        self
    }
}

/// Columns in every keypad row.
pub const COLUMNS: usize = 4;

/// The two rows of scientific functions.
pub fn scientific_rows() -> Vec<Vec<KeypadKey>> {
    UnaryFunction::ALL
        .chunks(COLUMNS)
        .map(|row| row.iter().copied().map(KeypadKey::function).collect())
        .collect()
}

/// The basic keypad, top to bottom.
pub fn basic_rows() -> Vec<Vec<KeypadKey>> {
    vec![
        vec![
            KeypadKey::new("AC", Input::Clear, KeyKind::Function),
            KeypadKey::new("+/-", Input::ToggleSign, KeyKind::Function),
            KeypadKey::new("%", Input::Percent, KeyKind::Function),
            KeypadKey::operator(BinaryOp::Divide),
        ],
        [
            KeypadKey::digits(&[7, 8, 9]),
            vec![KeypadKey::operator(BinaryOp::Multiply)],
        ]
        .concat(),
        [
            KeypadKey::digits(&[4, 5, 6]),
            vec![KeypadKey::operator(BinaryOp::Subtract)],
        ]
        .concat(),
        [
            KeypadKey::digits(&[1, 2, 3]),
            vec![KeypadKey::operator(BinaryOp::Add)],
        ]
        .concat(),
        [
            KeypadKey::digits(&[0]).into_iter().map(KeypadKey::wide).collect(),
            vec![
                KeypadKey::new(".", Input::DecimalPoint, KeyKind::Number),
                KeypadKey::new("=", Input::Equals, KeyKind::Operator),
            ],
        ]
        .concat(),
    ]
}

/// Render one keypad button.
///
/// `active` highlights an operator key while its operation is pending.
pub fn render_key(
    key: &KeypadKey,
    id: impl Into<ElementId>,
    active: bool,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Stateful<Div> {
    let t = theme();

    let background = match key.kind {
        KeyKind::Number => t.key_number_background,
        KeyKind::Function => t.key_function_background,
        KeyKind::Operator if active => t.key_operator_active_background,
        KeyKind::Operator => t.key_operator_background,
    };

    let mut button = div()
        .id(id.into())
        .h(t.key_height)
        .flex()
        .items_center()
        .justify_center()
        .bg(background)
        .rounded(t.key_border_radius)
        .text_color(t.key_text_color)
        .font_weight(FontWeight::SEMIBOLD)
        .cursor_pointer()
        .hover(|style| style.opacity(0.85))
        .active(|style| style.opacity(0.7))
        .on_click(on_click)
        .child(SharedString::from(key.label));

    button = if key.kind == KeyKind::Function {
        button.text_sm()
    } else {
        button.text_xl()
    };

    // Cells share the row by flex weight so wide keys take two columns.
    button = button.flex_basis(relative(0.0));
    button.style().flex_grow = Some(key.span as f32);
    button
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fill_all_columns() {
        for row in basic_rows().iter().chain(scientific_rows().iter()) {
            let width: usize = row.iter().map(|key| key.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn test_every_digit_present_once() {
        let digits: Vec<u8> = basic_rows()
            .into_iter()
            .flatten()
            .filter_map(|key| match key.input {
                Input::Digit(d) => Some(d.value()),
                _ => None,
            })
            .collect();
        let mut sorted = digits.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn test_scientific_rows_cover_all_functions() {
        let functions: Vec<UnaryFunction> = scientific_rows()
            .into_iter()
            .flatten()
            .filter_map(|key| match key.input {
                Input::Function(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(functions, UnaryFunction::ALL);
    }

    #[test]
    fn test_labels() {
        let rows = basic_rows();
        assert_eq!(rows[0][3].label, "÷");
        assert_eq!(rows[2][3].label, "−");
        assert_eq!(rows[4][0].label, "0");
        assert_eq!(scientific_rows()[1][1].label, "√");
    }
}
