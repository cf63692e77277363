//! Turns the shared grammar flags into a configured [`Engine`].

use std::str::FromStr;

use xpr_lib::Engine;
use xpr_lib::plugins::{Comments, Ternary};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("expected OP:PREC[:right], got `{0}`")]
    MissingPrecedence(String),

    #[error("operator is empty")]
    EmptyOperator,

    #[error("invalid precedence `{0}`")]
    InvalidPrecedence(String),

    #[error("unknown plugin `{0}`")]
    UnknownPlugin(String),

    #[error(transparent)]
    Plugin(#[from] xpr_lib::PluginError),
}

/// A `--binary-op` value: `OP:PREC` or `OP:PREC:right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOpSpec {
    pub op: String,
    pub precedence: u32,
    pub right_associative: bool,
}

impl FromStr for BinaryOpSpec {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rest, right_associative) = match s.strip_suffix(":right") {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let (op, precedence) = rest
            .rsplit_once(':')
            .ok_or_else(|| GrammarError::MissingPrecedence(s.to_string()))?;
        if op.is_empty() {
            return Err(GrammarError::EmptyOperator);
        }
        let precedence = precedence
            .parse()
            .map_err(|_| GrammarError::InvalidPrecedence(precedence.to_string()))?;

        Ok(Self {
            op: op.to_string(),
            precedence,
            right_associative,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct GrammarArgs {
    pub binary_ops: Vec<BinaryOpSpec>,
    pub unary_ops: Vec<String>,
    pub ident_chars: Vec<char>,
    pub no_defaults: bool,
    pub plugins: Vec<String>,
}

impl GrammarArgs {
    pub fn build_engine(&self) -> Result<Engine, GrammarError> {
        let mut engine = Engine::new();

        if self.no_defaults {
            engine
                .remove_all_binary_ops()
                .remove_all_unary_ops()
                .remove_all_literals();
        }

        for spec in &self.binary_ops {
            engine.add_binary_op(spec.op.as_str(), spec.precedence, spec.right_associative);
        }
        for op in &self.unary_ops {
            engine.add_unary_op(op.as_str());
        }
        for &ch in &self.ident_chars {
            engine.add_identifier_char(ch);
        }

        for name in &self.plugins {
            match name.as_str() {
                Ternary::NAME => engine.register_plugin(&Ternary)?,
                Comments::NAME => engine.register_plugin(&Comments)?,
                other => return Err(GrammarError::UnknownPlugin(other.to_string())),
            };
        }

        Ok(engine)
    }
}
