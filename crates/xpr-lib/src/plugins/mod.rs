//! Named, idempotently registered bundles of engine configuration.
//!
//! A plugin receives the [`Engine`] once and may change anything reachable
//! through its public API: operators, literals, hooks. Registering the same
//! name twice is a no-op.

mod comments;
mod ternary;

#[cfg(test)]
mod comments_tests;

pub use comments::Comments;
pub use ternary::Ternary;

use indexmap::IndexSet;
use tracing::debug;

use crate::engine::Engine;

pub trait Plugin {
    /// Registration key. Must not be empty.
    fn name(&self) -> &str;

    /// Applies the plugin's configuration. Runs at most once per engine.
    fn init(&self, engine: &mut Engine);
}

/// Plugin backed by a closure.
pub struct FnPlugin<F> {
    name: String,
    init: F,
}

impl<F> FnPlugin<F>
where
    F: Fn(&mut Engine),
{
    pub fn new(name: impl Into<String>, init: F) -> Self {
        Self {
            name: name.into(),
            init,
        }
    }
}

impl<F> Plugin for FnPlugin<F>
where
    F: Fn(&mut Engine),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&self, engine: &mut Engine) {
        (self.init)(engine)
    }
}

/// Malformed plugin, reported at registration time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PluginError {
    #[error("plugin has no name")]
    MissingName,
}

/// Names of the plugins applied to an engine, in registration order.
#[derive(Debug, Clone, Default)]
pub struct Plugins {
    registered: IndexSet<String>,
}

impl Plugins {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.registered.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub(crate) fn insert(&mut self, name: &str) {
        self.registered.insert(name.to_string());
    }
}

impl Engine {
    /// Runs `plugin`'s initializer unless a plugin with the same name was
    /// registered before.
    pub fn register_plugin(&mut self, plugin: &dyn Plugin) -> Result<&mut Self, PluginError> {
        self.register_plugins(&[plugin])
    }

    /// Registers `plugins` in order.
    ///
    /// Every plugin is validated before any initializer runs, so a malformed
    /// entry leaves the engine untouched.
    pub fn register_plugins(&mut self, plugins: &[&dyn Plugin]) -> Result<&mut Self, PluginError> {
        if plugins.iter().any(|plugin| plugin.name().is_empty()) {
            return Err(PluginError::MissingName);
        }

        for plugin in plugins {
            let name = plugin.name();
            if self.plugins().is_registered(name) {
                debug!(plugin = name, "plugin already registered, skipping");
                continue;
            }
            debug!(plugin = name, "registering plugin");
            plugin.init(self);
            self.plugins_mut().insert(name);
        }

        Ok(self)
    }
}
