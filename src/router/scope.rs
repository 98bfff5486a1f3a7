use super::{upsert, Router};
use crate::value::Value;

use std::mem;

/// Registration-time grouping state: the concatenated prefix of all
/// enclosing path groups and the merged defaults of all enclosing param
/// groups.
#[derive(Debug, Default)]
pub(super) struct Scope {
    pub(super) prefix: String,
    pub(super) defaults: Vec<(Box<str>, Value)>,
}

/// Restores the scope prefix on drop, so a panicking or erroring group body
/// cannot leak its prefix into later registrations.
pub(super) struct PrefixGuard<'a> {
    pub(super) router: &'a mut Router,
    len: usize,
}

impl<'a> PrefixGuard<'a> {
    pub(super) fn push(router: &'a mut Router, prefix: &str) -> Self {
        let len = router.scope.prefix.len();
        router.scope.prefix.push_str(prefix);
        Self { router, len }
    }
}

impl Drop for PrefixGuard<'_> {
    fn drop(&mut self) {
        self.router.scope.prefix.truncate(self.len);
    }
}

/// Same discipline as [`PrefixGuard`], for group default parameters.
/// Inner groups override outer ones on key collision.
pub(super) struct DefaultsGuard<'a> {
    pub(super) router: &'a mut Router,
    saved: Vec<(Box<str>, Value)>,
}

impl<'a> DefaultsGuard<'a> {
    pub(super) fn push(router: &'a mut Router, params: Vec<(Box<str>, Value)>) -> Self {
        let saved = router.scope.defaults.clone();
        for (key, value) in params {
            upsert(&mut router.scope.defaults, key, value);
        }
        Self { router, saved }
    }
}

impl Drop for DefaultsGuard<'_> {
    fn drop(&mut self) {
        self.router.scope.defaults = mem::take(&mut self.saved);
    }
}
