//! The correct ("golden") evaluation path: expression building, evaluation
//! and result formatting.
//!
//! Building and evaluating are split so that input validation (arity, operand
//! parsing) is finished before any arithmetic runs; the evaluator only deals
//! with domain conditions (zero divisors, negative roots, non-finite results).

use super::{Calculator, Error, Operator};

/// A concrete arithmetic computation, ready to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr {
    Add(f64, f64),
    Subtract(f64, f64),
    Multiply(f64, f64),
    Divide(f64, f64),
    /// Base and exponent. Negative exponents are valid.
    Power(f64, f64),
    Square(f64),
    SquareRoot(f64),
}

/// Map an operator and its raw operands to a concrete expression.
///
/// Enforces arity exactly and parses every operand as a finite real number.
/// Deterministic, no side effects.
pub fn build(operator: Operator, operands: &[String]) -> Result<Expr, Error> {
    let values = parse_operands(operator, operands)?;

    let expr = match operator {
        Operator::Add => Expr::Add(values[0], values[1]),
        Operator::Subtract => Expr::Subtract(values[0], values[1]),
        Operator::Multiply => Expr::Multiply(values[0], values[1]),
        Operator::Divide => Expr::Divide(values[0], values[1]),
        Operator::Power => Expr::Power(values[0], values[1]),
        Operator::Square => Expr::Square(values[0]),
        Operator::SquareRoot => Expr::SquareRoot(values[0]),
    };

    Ok(expr)
}

fn parse_operands(operator: Operator, operands: &[String]) -> Result<Vec<f64>, Error> {
    let expected = operator.arity();
    if operands.len() != expected {
        return Err(Error::ArityMismatch {
            operator,
            expected,
            actual: operands.len(),
        });
    }

    operands
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let value: f64 = raw.trim().parse().map_err(|_| Error::OperandParse {
                position: index + 1,
                value: raw.clone(),
            })?;
            // "inf" and "NaN" parse as f64 but are not real numbers.
            if !value.is_finite() {
                return Err(Error::OperandParse {
                    position: index + 1,
                    value: raw.clone(),
                });
            }
            Ok(value)
        })
        .collect()
}

/// Evaluate an expression in double precision.
///
/// Domain conditions are explicit branches; a bare `NaN` or infinity is never
/// returned as a success value.
pub fn eval(expr: Expr) -> Result<f64, Error> {
    let value = match expr {
        Expr::Add(a, b) => a + b,
        Expr::Subtract(a, b) => a - b,
        Expr::Multiply(a, b) => a * b,
        Expr::Divide(a, b) => {
            if b == 0.0 {
                return Err(Error::Domain(format!("division of {a} by zero")));
            }
            a / b
        }
        Expr::Power(base, exponent) => base.powf(exponent),
        Expr::Square(a) => a * a,
        Expr::SquareRoot(a) => {
            if a < 0.0 {
                return Err(Error::Domain(format!(
                    "square root of negative number {a}"
                )));
            }
            a.sqrt()
        }
    };

    if !value.is_finite() {
        return Err(Error::Domain("result is not a finite number".to_string()));
    }

    Ok(value)
}

/// Stringify a result value for the response envelope.
///
/// Integral values keep a trailing `.0` (`5.0`, `-1.0`); everything else uses
/// the shortest round-trip form (`0.5`). Very large magnitudes fall back to
/// scientific notation rather than spelling out hundreds of digits.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        if value.abs() < 1e15 {
            format!("{value:.1}")
        } else {
            format!("{value:e}")
        }
    } else {
        value.to_string()
    }
}

/// The correct calculation engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct Engine;

impl Calculator for Engine {
    fn calculate(&self, operator: &str, operands: &[String]) -> Result<f64, Error> {
        let operator = Operator::parse(operator)?;
        let expr = build(operator, operands)?;
        eval(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operands(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn calculate(operator: &str, raw: &[&str]) -> Result<f64, Error> {
        Engine.calculate(operator, &operands(raw))
    }

    #[test]
    fn test_add() {
        assert_eq!(calculate("ADD", &["2", "3"]).unwrap(), 5.0);
    }

    #[test]
    fn test_subtract_keeps_operand_order() {
        assert_eq!(calculate("SUBTRACT", &["5", "3"]).unwrap(), 2.0);
        assert_eq!(calculate("SUBTRACT", &["2", "3"]).unwrap(), -1.0);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(calculate("MULTIPLY", &["4", "2.5"]).unwrap(), 10.0);
    }

    #[test]
    fn test_divide_keeps_operand_order() {
        assert_eq!(calculate("DIVIDE", &["10", "2"]).unwrap(), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_a_domain_error() {
        let err = calculate("DIVIDE", &["5", "0"]).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
        assert!(err.is_client_fault());
    }

    #[test]
    fn test_square() {
        assert_eq!(calculate("SQUARE", &["-3"]).unwrap(), 9.0);
    }

    #[test]
    fn test_square_root() {
        assert_eq!(calculate("SQUARE_ROOT", &["9"]).unwrap(), 3.0);
    }

    #[test]
    fn test_negative_square_root_is_a_domain_error() {
        let err = calculate("SQUARE_ROOT", &["-4"]).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
    }

    #[test]
    fn test_power_with_negative_exponent() {
        assert_eq!(calculate("POWER", &["2", "-1"]).unwrap(), 0.5);
    }

    #[test]
    fn test_power_overflow_is_a_domain_error() {
        let err = calculate("POWER", &["10", "400"]).unwrap_err();
        assert_eq!(err, Error::Domain("result is not a finite number".to_string()));
    }

    #[test]
    fn test_arity_too_few_operands() {
        let err = calculate("ADD", &["1"]).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                operator: Operator::Add,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_arity_too_many_operands() {
        let err = calculate("ADD", &["1", "2", "3"]).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                operator: Operator::Add,
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn test_unary_arity() {
        let err = calculate("SQUARE_ROOT", &["4", "9"]).unwrap_err();
        assert_eq!(
            err,
            Error::ArityMismatch {
                operator: Operator::SquareRoot,
                expected: 1,
                actual: 2
            }
        );
    }

    #[test]
    fn test_non_numeric_operand_reports_position() {
        let err = calculate("ADD", &["x", "3"]).unwrap_err();
        assert_eq!(
            err,
            Error::OperandParse {
                position: 1,
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_operand_literal_is_rejected() {
        assert!(matches!(
            calculate("ADD", &["inf", "3"]).unwrap_err(),
            Error::OperandParse { position: 1, .. }
        ));
        assert!(matches!(
            calculate("ADD", &["2", "NaN"]).unwrap_err(),
            Error::OperandParse { position: 2, .. }
        ));
    }

    #[test]
    fn test_operands_may_carry_whitespace() {
        assert_eq!(calculate("ADD", &[" 2 ", "3"]).unwrap(), 5.0);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let first = calculate("POWER", &["2", "10"]).unwrap();
        let second = calculate("POWER", &["2", "10"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(5.0), "5.0");
        assert_eq!(format_value(-1.0), "-1.0");
        assert_eq!(format_value(0.5), "0.5");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(1e300), "1e300");
    }
}
