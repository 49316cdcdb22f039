//! Deliberately faulty engines.
//!
//! These exist so that a test harness pointed at the service has known-bad
//! behavior to detect. Every deviation from [`super::Engine`] here is
//! intentional; do not "fix" them.

use super::{Calculator, Error, Operator};

/// Faulty engine modeled on a string-splicing evaluator.
///
/// It performs no arity or operand validation of its own: a missing or
/// unparsable operand surfaces as an [`Error::Engine`] fault, the way an
/// uncaught scripting exception would. On top of that it computes
/// `SUBTRACT` and `DIVIDE` with the operand order swapped, strips the sign
/// off a `SQUARE_ROOT` operand and strips the sign off a `POWER` exponent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwappedEngine;

impl SwappedEngine {
    fn operand(&self, operands: &[String], index: usize) -> Result<f64, Error> {
        let raw = operands
            .get(index)
            .ok_or_else(|| Error::Engine(format!("missing operand #{}", index + 1)))?;
        raw.trim()
            .parse()
            .map_err(|_| Error::Engine(format!("operand {raw:?} broke the evaluator")))
    }
}

impl Calculator for SwappedEngine {
    fn calculate(&self, operator: &str, operands: &[String]) -> Result<f64, Error> {
        let operator = Operator::parse(operator)?;
        let a = self.operand(operands, 0)?;

        let value = match operator {
            Operator::Add => a + self.operand(operands, 1)?,
            // wrong operand order, on purpose
            Operator::Subtract => self.operand(operands, 1)? - a,
            Operator::Multiply => a * self.operand(operands, 1)?,
            // wrong operand order, on purpose
            Operator::Divide => self.operand(operands, 1)? / a,
            // exponent sign dropped, on purpose
            Operator::Power => a.powf(self.operand(operands, 1)?.abs()),
            Operator::Square => a * a,
            // operand sign dropped, on purpose
            Operator::SquareRoot => a.abs().sqrt(),
        };

        Ok(value)
    }
}

/// Faulty engine that returns zero for every calculation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroEngine;

impl Calculator for ZeroEngine {
    fn calculate(&self, _operator: &str, _operands: &[String]) -> Result<f64, Error> {
        Ok(0.0)
    }
}
