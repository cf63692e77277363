//! xpr: an embeddable expression parser with a run-time configurable grammar.
//!
//! # Example
//!
//! ```
//! use xpr_lib::Engine;
//!
//! let mut engine = Engine::new();
//! engine.add_binary_op("**", 11, true);
//!
//! let ast = engine.parse("2 ** 3 ** 4").unwrap().unwrap();
//! print!("{}", ast.dump());
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod hooks;
pub mod parser;
pub mod plugins;

#[cfg(test)]
mod hooks_tests;

pub use diagnostics::{ErrorPrinter, ParseErrorExt};
pub use engine::Engine;
pub use hooks::{Hook, HookEnv, HookPoint, Hooks};
pub use parser::Parser;
pub use plugins::{FnPlugin, Plugin, PluginError, Plugins};
pub use xpr_core::{AstPrinter, Expr, ParseError, Value};

/// Errors surfaced by the engine.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The input is not a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A plugin was malformed at registration time.
    #[error(transparent)]
    Plugin(#[from] PluginError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
