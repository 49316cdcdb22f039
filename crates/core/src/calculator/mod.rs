//! Calculator domain: operators, the wire envelope, the error taxonomy and
//! the evaluation engines.
//!
//! The wire request keeps the operator as a raw string so that a request with
//! an unknown operator can still be echoed back verbatim inside the response
//! envelope; [`Operator::parse`] turns it into a classified error instead of a
//! deserialization failure.

mod engine;
mod faulty;

pub use engine::{build, eval, format_value, Engine, Expr};
pub use faulty::{SwappedEngine, ZeroEngine};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Square,
    SquareRoot,
}

impl Operator {
    /// Resolve a wire name (`"ADD"`, `"SQUARE_ROOT"`, ...) to an operator.
    pub fn parse(name: &str) -> Result<Operator, Error> {
        match name {
            "ADD" => Ok(Operator::Add),
            "SUBTRACT" => Ok(Operator::Subtract),
            "MULTIPLY" => Ok(Operator::Multiply),
            "DIVIDE" => Ok(Operator::Divide),
            "POWER" => Ok(Operator::Power),
            "SQUARE" => Ok(Operator::Square),
            "SQUARE_ROOT" => Ok(Operator::SquareRoot),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }

    /// The wire name of the operator.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Add => "ADD",
            Operator::Subtract => "SUBTRACT",
            Operator::Multiply => "MULTIPLY",
            Operator::Divide => "DIVIDE",
            Operator::Power => "POWER",
            Operator::Square => "SQUARE",
            Operator::SquareRoot => "SQUARE_ROOT",
        }
    }

    /// Required operand count: 2 for binary operators, 1 for unary ones.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Square | Operator::SquareRoot => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single calculation request as received on the wire.
///
/// Transient: constructed per call, never persisted, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub operator: String,
    pub operands: Vec<String>,
}

/// The uniform response envelope.
///
/// Carries both outcomes in a single type: on success `result` holds the
/// stringified value, on failure it holds `"ERROR: <details>"`. The `request`
/// field always echoes the caller's original request, unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    pub request: CalculationRequest,
    pub result: String,
}

impl CalculationResponse {
    pub fn success(request: CalculationRequest, value: f64) -> Self {
        CalculationResponse {
            request,
            result: format_value(value),
        }
    }

    pub fn failure(request: CalculationRequest, details: impl fmt::Display) -> Self {
        CalculationResponse {
            request,
            result: format!("ERROR: {details}"),
        }
    }

    /// Whether this envelope carries a failure message.
    pub fn is_failure(&self) -> bool {
        self.result.starts_with("ERROR:")
    }
}

/// The calculator failure taxonomy.
///
/// Everything except [`Error::Engine`] is the caller's fault and maps to a
/// 400 at the HTTP boundary; engine faults map to a 500.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown operator: {0}")]
    InvalidOperator(String),

    #[error("{operator} takes exactly {expected} operand(s), got {actual}")]
    ArityMismatch {
        operator: Operator,
        expected: usize,
        actual: usize,
    },

    #[error("operand #{position} ({value:?}) is not a number")]
    OperandParse { position: usize, value: String },

    #[error("{0}")]
    Domain(String),

    #[error("engine failure: {0}")]
    Engine(String),
}

impl Error {
    /// Whether the caller's input, rather than the service, is at fault.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, Error::Engine(_))
    }
}

/// A calculation engine.
///
/// Implementations must be stateless and safe to share across concurrent
/// requests. Evaluation is all-or-nothing: either a single numeric value or a
/// classified [`Error`], never a partial result.
pub trait Calculator: Send + Sync {
    fn calculate(&self, operator: &str, operands: &[String]) -> Result<f64, Error>;
}

/// The competing engine implementations, selected by configuration at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The correct implementation.
    Golden,
    /// Faulty: swapped operand order, sign-stripping, no input validation.
    Swapped,
    /// Faulty: every calculation returns zero.
    Zero,
}

impl Variant {
    pub fn engine(self) -> Box<dyn Calculator> {
        match self {
            Variant::Golden => Box::new(Engine),
            Variant::Swapped => Box::new(SwappedEngine),
            Variant::Zero => Box::new(ZeroEngine),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "golden" => Ok(Variant::Golden),
            "swapped" => Ok(Variant::Swapped),
            "zero" => Ok(Variant::Zero),
            other => Err(format!(
                "unknown engine variant: {other} (expected golden, swapped or zero)"
            )),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Golden => "golden",
            Variant::Swapped => "swapped",
            Variant::Zero => "zero",
        };
        f.write_str(name)
    }
}
