use crate::value::Value;

use std::ops::Deref;

use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
    MethodNotAllowed,
}

/// The outcome of a [`super::Router::search`] call.
#[derive(Debug)]
pub struct SearchResult {
    outcome: Outcome,
    allowed: Vec<Box<str>>,
    params: Params,
}

impl SearchResult {
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_found(&self) -> bool {
        self.outcome == Outcome::Found
    }

    /// Methods registered on the matched node, in registration order.
    /// Empty when no node matched the path.
    pub fn allowed(&self) -> &[Box<str>] {
        &self.allowed
    }

    /// Resolved routing parameters.
    ///
    /// # Panics
    ///
    /// Panics unless the outcome is [`Outcome::Found`]: reading parameters
    /// off a miss is a caller bug, not a runtime condition.
    pub fn params(&self) -> &Params {
        match self.outcome {
            Outcome::Found => &self.params,
            _ => panic!("routing parameters are only available on a Found result"),
        }
    }

    /// Shorthand for `params().get(name)`; same precondition as [`Self::params`].
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.params().get(name)
    }

    /// Shorthand for `params().get(name).is_some()`; same precondition as
    /// [`Self::params`].
    pub fn has(&self, name: &str) -> bool {
        self.params().get(name).is_some()
    }
}

impl SearchResult {
    pub(super) fn found(params: Params, allowed: Vec<Box<str>>) -> Self {
        Self {
            outcome: Outcome::Found,
            allowed,
            params,
        }
    }

    pub(super) fn not_found() -> Self {
        Self {
            outcome: Outcome::NotFound,
            allowed: Vec::new(),
            params: Params::new(),
        }
    }

    pub(super) fn method_not_allowed(allowed: Vec<Box<str>>) -> Self {
        Self {
            outcome: Outcome::MethodNotAllowed,
            allowed,
            params: Params::new(),
        }
    }
}

/// Resolved parameters of a found route.
#[derive(Debug, Default)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Value); 8]>,
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == &**k { Some(v) } else { None })
    }
}

impl Deref for Params {
    type Target = [(Box<str>, Value)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl Params {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn push(&mut self, name: Box<str>, value: Value) {
        self.buf.push((name, value));
    }
}
