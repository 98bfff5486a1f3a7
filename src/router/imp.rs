use super::scope::{DefaultsGuard, PrefixGuard, Scope};
use super::{Node, Router, RouterError, SearchResult};
use crate::shortcut::ShortRegex;
use crate::value::Value;

use std::collections::HashMap;

impl Router {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            shortcuts: HashMap::new(),
            scope: Scope::default(),
        }
    }

    /// Registers a shortcut matcher, usable in patterns as `{name:|key}`.
    ///
    /// A shortcut must be registered before any route that references it.
    pub fn register_shortcut(
        &mut self,
        key: &str,
        sreg: impl ShortRegex + Send + Sync + 'static,
    ) -> &mut Self {
        self.shortcuts.insert(key.into(), Box::new(sreg));
        self
    }

    /// Adds a routing rule for every method in `methods`.
    ///
    /// Methods are uppercased and de-duplicated. Registering a method again
    /// on the same pattern replaces its parameter set; there is no
    /// duplicate-route detection.
    pub fn add_route(
        &mut self,
        methods: &[&str],
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<&mut Self, RouterError> {
        self.insert_route(methods, pattern, params)?;
        Ok(self)
    }

    pub fn get(
        &mut self,
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(&["GET"], pattern, params)
    }

    pub fn post(
        &mut self,
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(&["POST"], pattern, params)
    }

    pub fn put(
        &mut self,
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(&["PUT"], pattern, params)
    }

    pub fn delete(
        &mut self,
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<&mut Self, RouterError> {
        self.add_route(&["DELETE"], pattern, params)
    }

    /// Runs `f` with `prefix` appended to the current path prefix.
    ///
    /// The previous prefix is restored when `f` returns, errors or panics.
    pub fn make_path_group<F>(&mut self, prefix: &str, f: F) -> Result<&mut Self, RouterError>
    where
        F: FnOnce(&mut Self) -> Result<(), RouterError>,
    {
        let mut guard = PrefixGuard::push(self, prefix);
        f(&mut *guard.router)?;
        drop(guard);
        Ok(self)
    }

    /// Runs `f` with `params` merged into the current group defaults,
    /// restoring the previous defaults afterwards like [`Self::make_path_group`].
    pub fn make_params_group<F>(
        &mut self,
        params: Vec<(Box<str>, Value)>,
        f: F,
    ) -> Result<&mut Self, RouterError>
    where
        F: FnOnce(&mut Self) -> Result<(), RouterError>,
    {
        let mut guard = DefaultsGuard::push(self, params);
        f(&mut *guard.router)?;
        drop(guard);
        Ok(self)
    }

    /// Matches `method` and `path` against the registered routes.
    ///
    /// The method comparison ignores ASCII case. `search` never mutates the
    /// trie, so a built router can be queried from multiple threads.
    pub fn search(&self, method: &str, path: &str) -> SearchResult {
        self.do_search(method, path)
    }
}
