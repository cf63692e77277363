//! Grammar configuration.
//!
//! An [`Engine`] owns the operator, literal and identifier tables plus the hook
//! and plugin registries. It is configured once and reused across parses; each
//! [`Engine::parse`] call creates a fresh [`Parser`] holding a shared borrow of
//! the tables, so the tables cannot change while a parse is running.
//!
//! The cached maximum operator lengths drive longest-match scanning. They are
//! only touched by the mutators below, which keep them equal to the longest
//! key of the corresponding table.

use indexmap::{IndexMap, IndexSet};
use tracing::trace;
use xpr_core::{Expr, ParseError, Value};

use crate::hooks::Hooks;
use crate::parser::Parser;
use crate::plugins::Plugins;

const DEFAULT_RECURSION_LIMIT: u32 = 256;

const DEFAULT_UNARY_OPS: &[&str] = &["-", "!", "~", "+"];

/// Higher precedence binds tighter.
const DEFAULT_BINARY_OPS: &[(&str, u32)] = &[
    ("||", 1),
    ("&&", 2),
    ("|", 3),
    ("^", 4),
    ("&", 5),
    ("==", 6),
    ("!=", 6),
    ("===", 6),
    ("!==", 6),
    ("<", 7),
    (">", 7),
    ("<=", 7),
    (">=", 7),
    ("<<", 8),
    (">>", 8),
    (">>>", 8),
    ("+", 9),
    ("-", 9),
    ("*", 10),
    ("/", 10),
    ("%", 10),
];

const DEFAULT_IDENTIFIER_CHARS: &[char] = &['$', '_'];

const DEFAULT_THIS_KEYWORD: &str = "this";

#[derive(Debug, Clone)]
pub struct Engine {
    unary_ops: IndexSet<String>,
    binary_ops: IndexMap<String, u32>,
    right_associative: IndexSet<String>,
    /// Characters allowed in identifiers besides ASCII letters and digits.
    identifier_chars: IndexSet<char>,
    literals: IndexMap<String, Value>,
    this_keyword: String,
    max_unary_op_len: usize,
    max_binary_op_len: usize,
    recursion_limit: Option<u32>,
    hooks: Hooks,
    plugins: Plugins,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine with the standard operator set and the `true`/`false`/`null` literals.
    pub fn new() -> Self {
        let unary_ops: IndexSet<String> = DEFAULT_UNARY_OPS.iter().map(|op| op.to_string()).collect();
        let binary_ops: IndexMap<String, u32> = DEFAULT_BINARY_OPS
            .iter()
            .map(|&(op, prec)| (op.to_string(), prec))
            .collect();
        let literals = IndexMap::from([
            ("true".to_string(), Value::Bool(true)),
            ("false".to_string(), Value::Bool(false)),
            ("null".to_string(), Value::Null),
        ]);

        Self {
            max_unary_op_len: max_key_len(unary_ops.iter()),
            max_binary_op_len: max_key_len(binary_ops.keys()),
            unary_ops,
            binary_ops,
            right_associative: IndexSet::new(),
            identifier_chars: DEFAULT_IDENTIFIER_CHARS.iter().copied().collect(),
            literals,
            this_keyword: DEFAULT_THIS_KEYWORD.to_string(),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            hooks: Hooks::new(),
            plugins: Plugins::new(),
        }
    }

    /// Nesting guard. `None` disables it.
    ///
    /// Every expression and every token entered counts one level, so each
    /// nested `(`, `[`, `a[` or `f(` costs two and each unary operator one.
    /// The default of 256 allows 127 nested brackets.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    pub fn add_unary_op(&mut self, op: impl Into<String>) -> &mut Self {
        let op = op.into();
        trace!(op = %op, "adding unary operator");
        self.max_unary_op_len = self.max_unary_op_len.max(op.chars().count());
        self.unary_ops.insert(op);
        self
    }

    pub fn remove_unary_op(&mut self, op: &str) -> &mut Self {
        trace!(op, "removing unary operator");
        self.unary_ops.shift_remove(op);
        if op.chars().count() == self.max_unary_op_len {
            self.max_unary_op_len = max_key_len(self.unary_ops.iter());
        }
        self
    }

    pub fn remove_all_unary_ops(&mut self) -> &mut Self {
        self.unary_ops.clear();
        self.max_unary_op_len = 0;
        self
    }

    /// Registers `op`, or updates its precedence and associativity if present.
    ///
    /// Associativity always follows `right_associative`, so re-adding an
    /// operator with `false` makes it left-associative again.
    pub fn add_binary_op(
        &mut self,
        op: impl Into<String>,
        precedence: u32,
        right_associative: bool,
    ) -> &mut Self {
        let op = op.into();
        trace!(op = %op, precedence, right_associative, "adding binary operator");
        self.max_binary_op_len = self.max_binary_op_len.max(op.chars().count());
        if right_associative {
            self.right_associative.insert(op.clone());
        } else {
            self.right_associative.shift_remove(&op);
        }
        self.binary_ops.insert(op, precedence);
        self
    }

    pub fn remove_binary_op(&mut self, op: &str) -> &mut Self {
        trace!(op, "removing binary operator");
        self.binary_ops.shift_remove(op);
        self.right_associative.shift_remove(op);
        if op.chars().count() == self.max_binary_op_len {
            self.max_binary_op_len = max_key_len(self.binary_ops.keys());
        }
        self
    }

    pub fn remove_all_binary_ops(&mut self) -> &mut Self {
        self.binary_ops.clear();
        self.right_associative.clear();
        self.max_binary_op_len = 0;
        self
    }

    pub fn add_identifier_char(&mut self, ch: char) -> &mut Self {
        self.identifier_chars.insert(ch);
        self
    }

    pub fn remove_identifier_char(&mut self, ch: char) -> &mut Self {
        self.identifier_chars.shift_remove(&ch);
        self
    }

    /// Makes the bare identifier `name` parse as a literal carrying `value`.
    pub fn add_literal(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.literals.insert(name.into(), value.into());
        self
    }

    pub fn remove_literal(&mut self, name: &str) -> &mut Self {
        self.literals.shift_remove(name);
        self
    }

    pub fn remove_all_literals(&mut self) -> &mut Self {
        self.literals.clear();
        self
    }

    /// Identifier that parses as [`Expr::ThisExpression`].
    pub fn set_this_keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.this_keyword = keyword.into();
        self
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut Hooks {
        &mut self.hooks
    }

    pub fn plugins(&self) -> &Plugins {
        &self.plugins
    }

    pub(crate) fn plugins_mut(&mut self) -> &mut Plugins {
        &mut self.plugins
    }

    // ------------------------------------------------------------------
    // Parsing
    // ------------------------------------------------------------------

    /// Parses `text` into a tree.
    ///
    /// Returns `Ok(None)` when the input holds no expression at all, e.g. an
    /// empty string or only separators.
    pub fn parse(&self, text: &str) -> Result<Option<Expr>, ParseError> {
        trace!(len = text.len(), "parsing expression");
        let result = Parser::new(self, text).parse();
        if let Err(err) = &result {
            trace!(%err, "parse failed");
        }
        result
    }

    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn unary_ops(&self) -> impl Iterator<Item = &str> {
        self.unary_ops.iter().map(String::as_str)
    }

    pub fn binary_ops(&self) -> impl Iterator<Item = (&str, u32)> {
        self.binary_ops.iter().map(|(op, &prec)| (op.as_str(), prec))
    }

    pub fn literals(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.literals.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn identifier_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.identifier_chars.iter().copied()
    }

    pub fn is_unary_op(&self, op: &str) -> bool {
        self.unary_ops.contains(op)
    }

    pub fn is_binary_op(&self, op: &str) -> bool {
        self.binary_ops.contains_key(op)
    }

    pub fn is_right_associative(&self, op: &str) -> bool {
        self.right_associative.contains(op)
    }

    /// Precedence of `op`, or `0` if it is not a binary operator.
    pub fn binary_precedence(&self, op: &str) -> u32 {
        self.binary_ops.get(op).copied().unwrap_or(0)
    }

    pub fn literal(&self, name: &str) -> Option<&Value> {
        self.literals.get(name)
    }

    pub fn this_keyword(&self) -> &str {
        &self.this_keyword
    }

    pub fn max_unary_op_len(&self) -> usize {
        self.max_unary_op_len
    }

    pub fn max_binary_op_len(&self) -> usize {
        self.max_binary_op_len
    }

    pub fn recursion_limit(&self) -> Option<u32> {
        self.recursion_limit
    }

    // ------------------------------------------------------------------
    // Character classes
    // ------------------------------------------------------------------

    pub fn is_decimal_digit(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    /// ASCII letters, configured identifier characters, and any non-ASCII
    /// character that is not itself a binary operator (so `×` can be an
    /// operator while `Δ` stays a letter).
    pub fn is_identifier_start(&self, ch: char) -> bool {
        if ch.is_ascii_alphabetic() || self.identifier_chars.contains(&ch) {
            return true;
        }
        if ch.is_ascii() {
            return false;
        }
        let mut buf = [0u8; 4];
        !self.binary_ops.contains_key(&*ch.encode_utf8(&mut buf))
    }

    pub fn is_identifier_part(&self, ch: char) -> bool {
        self.is_identifier_start(ch) || self.is_decimal_digit(ch)
    }
}

fn max_key_len<'a>(keys: impl Iterator<Item = &'a String>) -> usize {
    keys.map(|k| k.chars().count()).max().unwrap_or(0)
}
