//! Parser state, cursor operations and hook dispatch.

use xpr_core::{Expr, ParseError};

use crate::engine::Engine;
use crate::hooks::{HookEnv, HookPoint};

/// Single-use cursor over one input, bound to an [`Engine`].
///
/// Offsets are character offsets, not byte offsets. Hooks receive the parser
/// through [`HookEnv`] and may inspect and advance the cursor or call back into
/// the grammar.
pub struct Parser<'a> {
    pub(super) engine: &'a Engine,
    pub(super) source: &'a str,
    pub(super) chars: Vec<char>,
    pub(super) index: usize,
    depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(engine: &'a Engine, source: &'a str) -> Self {
        Self {
            engine,
            source,
            chars: source.chars().collect(),
            index: 0,
            depth: 0,
        }
    }

    /// Parses the whole input.
    ///
    /// A single expression is returned as is; several become a `Compound`.
    pub fn parse(mut self) -> Result<Option<Expr>, ParseError> {
        self.run_hook(HookPoint::BeforeAll, None)?;
        let mut nodes = self.gobble_expressions(None)?;
        let node = match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(Expr::Compound { body: nodes }),
        };
        self.run_hook(HookPoint::AfterAll, node)
    }

    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Characters left after the cursor.
    pub fn remaining(&self) -> usize {
        self.chars.len().saturating_sub(self.index)
    }

    pub fn is_eof(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn current(&self) -> Option<char> {
        self.char_at(self.index)
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.char_at(self.index + offset)
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Whether the input at the cursor starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        prefix
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.peek(offset) == Some(ch))
    }

    /// Moves the cursor forward by `n` characters, stopping at end of input.
    pub fn advance(&mut self, n: usize) {
        self.index = (self.index + n).min(self.chars.len());
    }

    /// Source text between two character offsets.
    pub fn slice(&self, start: usize, end: usize) -> String {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Parse error positioned at the cursor.
    pub fn error(&self, description: impl Into<String>) -> ParseError {
        ParseError::new(description, self.index)
    }

    /// Skips whitespace and runs the `gobble-spaces` hooks until neither
    /// consumes anything.
    pub fn gobble_spaces(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.current(), Some(' ' | '\t' | '\n' | '\r')) {
                self.index += 1;
            }
            let before = self.index;
            self.run_hook(HookPoint::GobbleSpaces, None)?;
            if self.index == before {
                return Ok(());
            }
        }
    }

    pub(super) fn run_hook(
        &mut self,
        point: HookPoint,
        node: Option<Expr>,
    ) -> Result<Option<Expr>, ParseError> {
        let engine = self.engine;
        if engine.hooks().get(point).is_empty() {
            return Ok(node);
        }
        let mut env = HookEnv { parser: self, node };
        engine.hooks().run(point, &mut env)?;
        Ok(env.node)
    }

    /// Runs the callbacks of `point` until one of them supplies a node.
    pub(super) fn search_hook(&mut self, point: HookPoint) -> Result<Option<Expr>, ParseError> {
        let engine = self.engine;
        let hooks = engine.hooks().get(point);
        if hooks.is_empty() {
            return Ok(None);
        }
        let mut env = HookEnv {
            parser: self,
            node: None,
        };
        for hook in hooks {
            hook.call(&mut env)?;
            if env.node.is_some() {
                break;
            }
        }
        Ok(env.node)
    }

    pub(super) fn enter_recursion(&mut self) -> Result<(), ParseError> {
        if let Some(limit) = self.engine.recursion_limit()
            && self.depth >= limit
        {
            return Err(self.error("Recursion limit exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
