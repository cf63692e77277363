//! Precedence-climbing expression parser.
//!
//! # Architecture
//!
//! The parser walks the input one character at a time. There is no separate
//! lexer: operators come from the [`Engine`](crate::Engine) tables at run time,
//! so tokens are recognised by longest match against those tables.
//!
//! - Binary expressions use an operand stack and an operator stack and reduce
//!   by precedence (shunting-yard style), honouring right associativity.
//! - Tokens (literals, identifiers, unary chains, groups, arrays) are followed
//!   by any number of member, call and optional-chaining links.
//! - Hooks run at fixed points (see [`HookPoint`](crate::HookPoint)) and may
//!   consume input or replace nodes.
//!
//! Parsing stops at the first error; there is no recovery. Nesting depth is
//! bounded by the engine's recursion limit.

mod core;
mod grammar;
mod literals;

#[cfg(test)]
mod tests;

pub use core::Parser;
