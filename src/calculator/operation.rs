//! Binary operators and unary scientific functions.

use std::f64::consts::PI;
use std::fmt;

/// A binary operator awaiting its right operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Combine two operands.
    ///
    /// Division by exactly zero yields `0` rather than an infinity or `NaN`.
    pub fn combine(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    lhs / rhs
                }
            }
        }
    }

    /// Symbol used in history expressions and the running-expression readout.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Label shown on the keypad button.
    pub fn key_label(self) -> &'static str {
        match self {
            Self::Subtract => "−",
            other => other.symbol(),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A unary scientific function applied to the displayed value.
///
/// Trigonometric functions take their argument in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Square,
    Reciprocal,
}

impl UnaryFunction {
    /// All functions in keypad order.
    pub const ALL: [UnaryFunction; 8] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log10,
        Self::Ln,
        Self::Sqrt,
        Self::Square,
        Self::Reciprocal,
    ];

    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sin => (x * PI / 180.0).sin(),
            Self::Cos => (x * PI / 180.0).cos(),
            Self::Tan => (x * PI / 180.0).tan(),
            Self::Log10 => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
            Self::Square => x * x,
            Self::Reciprocal => 1.0 / x,
        }
    }

    /// Name used in history expressions, e.g. `sin(30)`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Square => "square",
            Self::Reciprocal => "inverse",
        }
    }

    /// Label shown on the keypad button.
    pub fn key_label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Square => "x²",
            Self::Reciprocal => "1/x",
            other => other.name(),
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_combine_arithmetic() {
        assert_eq!(BinaryOp::Add.combine(3.0, 4.0), 7.0);
        assert_eq!(BinaryOp::Subtract.combine(3.0, 4.0), -1.0);
        assert_eq!(BinaryOp::Multiply.combine(3.0, 4.0), 12.0);
        assert_eq!(BinaryOp::Divide.combine(3.0, 4.0), 0.75);
    }

    #[test]
    fn test_divide_by_zero_is_zero() {
        assert_eq!(BinaryOp::Divide.combine(5.0, 0.0), 0.0);
        assert_eq!(BinaryOp::Divide.combine(-5.0, -0.0), 0.0);
        assert_eq!(BinaryOp::Divide.combine(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!(approx(UnaryFunction::Sin.apply(30.0), 0.5));
        assert!(approx(UnaryFunction::Cos.apply(60.0), 0.5));
        assert!(approx(UnaryFunction::Tan.apply(45.0), 1.0));
        assert!(approx(UnaryFunction::Sin.apply(0.0), 0.0));
    }

    #[test]
    fn test_other_functions() {
        assert!(approx(UnaryFunction::Log10.apply(1000.0), 3.0));
        assert!(approx(UnaryFunction::Ln.apply(std::f64::consts::E), 1.0));
        assert_eq!(UnaryFunction::Sqrt.apply(16.0), 4.0);
        assert_eq!(UnaryFunction::Square.apply(-3.0), 9.0);
        assert_eq!(UnaryFunction::Reciprocal.apply(4.0), 0.25);
    }

    #[test]
    fn test_degenerate_inputs_are_not_finite() {
        assert!(UnaryFunction::Sqrt.apply(-1.0).is_nan());
        assert_eq!(UnaryFunction::Reciprocal.apply(0.0), f64::INFINITY);
        assert_eq!(UnaryFunction::Log10.apply(0.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_symbols_and_labels() {
        assert_eq!(BinaryOp::Divide.to_string(), "÷");
        assert_eq!(BinaryOp::Subtract.symbol(), "-");
        assert_eq!(BinaryOp::Subtract.key_label(), "−");
        assert_eq!(UnaryFunction::Log10.to_string(), "log");
        assert_eq!(UnaryFunction::Reciprocal.key_label(), "1/x");
    }
}
