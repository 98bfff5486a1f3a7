mod core;
mod error;
mod imp;
mod params_macro;
mod result;
mod scope;

pub use self::error::RouterError;
pub use self::result::{Outcome, Params, SearchResult};

use self::scope::Scope;
use crate::shortcut::ShortRegex;
use crate::value::Value;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;

/// A method-and-path routing trie: built up by registration calls, then
/// queried read-only via [`Router::search`].
pub struct Router {
    nodes: Vec<Node>,
    // Send + Sync so a built router can be shared across threads
    shortcuts: HashMap<Box<str>, Box<dyn ShortRegex + Send + Sync>>,
    scope: Scope,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

impl NodeId {
    const ROOT: Self = NodeId(0);
}

#[derive(Debug, Default)]
struct Node {
    statics: HashMap<Box<str>, NodeId>,
    // insertion order decides which shortcut/regex child is tried first
    shortcuts: Vec<(Box<str>, NodeId)>,
    regexps: Vec<RegexEdge>,
    handlers: Vec<MethodEntry>,
}

#[derive(Debug)]
struct RegexEdge {
    source: Box<str>,
    regex: Regex,
    next: NodeId,
}

#[derive(Debug)]
struct MethodEntry {
    method: Box<str>,
    params: Vec<(Box<str>, ParamSpec)>,
}

#[derive(Debug, Clone)]
enum ParamSpec {
    Literal(Value),
    /// 1-based position of the path segment whose runtime value is
    /// substituted at match time.
    Capture(usize),
}

fn upsert<V>(list: &mut Vec<(Box<str>, V)>, key: Box<str>, value: V) {
    match list.iter_mut().find(|(k, _)| *k == key) {
        Some((_, slot)) => *slot = value,
        None => list.push((key, value)),
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("nodes", &self.nodes)
            .field("shortcuts", &self.shortcuts.keys())
            .field("scope", &self.scope)
            .finish()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
