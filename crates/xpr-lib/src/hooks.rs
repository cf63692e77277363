//! Named extension points invoked synchronously during a parse.
//!
//! Callbacks receive a [`HookEnv`]: the running [`Parser`] (cursor access and
//! grammar entry points) plus a node slot they may read or overwrite.
//!
//! Two invocation modes exist:
//! - **notify**: every callback runs in registration order, each seeing the node
//!   left by the previous one ([`Hooks::run`]).
//! - **search**: callbacks run until one fills the node slot. The parser uses
//!   this for [`HookPoint::GobbleExpression`] and [`HookPoint::GobbleToken`].

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use xpr_core::{Expr, ParseError};

use crate::parser::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookPoint {
    /// Before anything is parsed.
    BeforeAll,
    /// After the whole input; may replace the final node.
    AfterAll,
    /// After the default whitespace skip; may consume more (e.g. comments).
    GobbleSpaces,
    /// Search hook that may supply a whole expression.
    GobbleExpression,
    /// After each expression; may replace it.
    AfterExpression,
    /// Search hook that may supply a token.
    GobbleToken,
    /// After each token, including tokens supplied by hooks.
    AfterToken,
}

impl HookPoint {
    pub const ALL: [HookPoint; 7] = [
        HookPoint::BeforeAll,
        HookPoint::AfterAll,
        HookPoint::GobbleSpaces,
        HookPoint::GobbleExpression,
        HookPoint::AfterExpression,
        HookPoint::GobbleToken,
        HookPoint::AfterToken,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HookPoint::BeforeAll => "before-all",
            HookPoint::AfterAll => "after-all",
            HookPoint::GobbleSpaces => "gobble-spaces",
            HookPoint::GobbleExpression => "gobble-expression",
            HookPoint::AfterExpression => "after-expression",
            HookPoint::GobbleToken => "gobble-token",
            HookPoint::AfterToken => "after-token",
        }
    }

    /// Whether the parser stops at the first callback that supplies a node.
    pub fn is_search(self) -> bool {
        matches!(self, HookPoint::GobbleExpression | HookPoint::GobbleToken)
    }
}

impl fmt::Display for HookPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hook `{0}`")]
pub struct UnknownHookPoint(pub String);

impl FromStr for HookPoint {
    type Err = UnknownHookPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HookPoint::ALL
            .into_iter()
            .find(|point| point.as_str() == s)
            .ok_or_else(|| UnknownHookPoint(s.to_string()))
    }
}

/// Context handed to every callback.
pub struct HookEnv<'p, 'a> {
    pub parser: &'p mut Parser<'a>,
    pub node: Option<Expr>,
}

type HookFn = dyn Fn(&mut HookEnv<'_, '_>) -> Result<(), ParseError> + Send + Sync;

/// A registered callback. Cloning shares the same callback value.
#[derive(Clone)]
pub struct Hook(Arc<HookFn>);

impl Hook {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut HookEnv<'_, '_>) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        Self(Arc::new(callback))
    }

    pub fn call(&self, env: &mut HookEnv<'_, '_>) -> Result<(), ParseError> {
        (self.0)(env)
    }

    /// Whether both handles point at the same callback value.
    pub fn ptr_eq(&self, other: &Hook) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Hook name to ordered callback list.
#[derive(Clone, Default)]
pub struct Hooks {
    hooks: IndexMap<HookPoint, Vec<Hook>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `callback` to the callbacks of `point`.
    pub fn add<F>(&mut self, point: HookPoint, callback: F) -> &mut Self
    where
        F: Fn(&mut HookEnv<'_, '_>) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.add_hook(point, Hook::new(callback))
    }

    /// Prepends `callback`, so it runs before everything registered so far.
    pub fn add_first<F>(&mut self, point: HookPoint, callback: F) -> &mut Self
    where
        F: Fn(&mut HookEnv<'_, '_>) -> Result<(), ParseError> + Send + Sync + 'static,
    {
        self.add_hook_first(point, Hook::new(callback))
    }

    pub fn add_hook(&mut self, point: HookPoint, hook: Hook) -> &mut Self {
        tracing::trace!(%point, "adding hook");
        self.hooks.entry(point).or_default().push(hook);
        self
    }

    pub fn add_hook_first(&mut self, point: HookPoint, hook: Hook) -> &mut Self {
        tracing::trace!(%point, "adding hook at front");
        self.hooks.entry(point).or_default().insert(0, hook);
        self
    }

    /// Registers several hooks at once, appending each in iteration order.
    pub fn extend(&mut self, hooks: impl IntoIterator<Item = (HookPoint, Hook)>) -> &mut Self {
        for (point, hook) in hooks {
            self.add_hook(point, hook);
        }
        self
    }

    /// Callbacks for `point` in invocation order; empty if none.
    pub fn get(&self, point: HookPoint) -> &[Hook] {
        self.hooks.get(&point).map_or(&[], Vec::as_slice)
    }

    /// Total number of registered callbacks.
    pub fn len(&self) -> usize {
        self.hooks.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notify-all: invokes every callback of `point` with the same `env`.
    ///
    /// The first callback error aborts the run and is returned.
    pub fn run(&self, point: HookPoint, env: &mut HookEnv<'_, '_>) -> Result<(), ParseError> {
        for hook in self.get(point) {
            hook.call(env)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.hooks.iter().map(|(point, hooks)| (point.as_str(), hooks.len())))
            .finish()
    }
}
