#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for the xpr expression parser.
//!
//! Passive definitions shared by the parser and its consumers:
//! - **AST**: the [`Expr`] node catalogue and literal [`Value`]s
//! - **Errors**: the positioned [`ParseError`]
//! - **Printer**: an indented tree dump for inspection and snapshot tests

pub mod ast;
pub mod error;
pub mod printer;


pub use ast::{Expr, Value};
pub use error::ParseError;
pub use printer::AstPrinter;
