//! Core library for miscalc
//!
//! This crate implements the **Functional Core** of the miscalc application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The miscalc project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`miscalc_core`** (this crate): Pure evaluation functions with zero I/O
//! - **`miscalc`**: CLI, HTTP serving and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Behavior is predictable and reproducible
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`calculator`]: Operators, the request/response envelope, the error
//!   taxonomy and the competing evaluation engines. One engine is correct;
//!   the rest are deliberately faulty fixtures for calibrating external test
//!   harnesses that must tell passing behavior from failing behavior.
//!
//! # Example Usage
//!
//! ```rust
//! use miscalc_core::calculator::{Calculator, Variant};
//!
//! let engine = Variant::Golden.engine();
//! let operands = vec!["2".to_string(), "3".to_string()];
//!
//! let value = engine.calculate("ADD", &operands).unwrap();
//! assert_eq!(value, 5.0);
//! ```

pub mod calculator;
