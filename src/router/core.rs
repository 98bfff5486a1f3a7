use super::{upsert, MethodEntry, Node, NodeId, ParamSpec, RegexEdge, Router, RouterError};
use super::{Params, SearchResult};
use crate::parser::{parse_pattern, split_path, Segment};
use crate::value::Value;

use regex::Regex;
use smallvec::{smallvec, SmallVec};

/// A validated pattern segment, ready to be inserted. Built in full before
/// the trie is touched: a rejected route must never leave partial nodes
/// behind.
enum PlannedEdge {
    Literal(Box<str>),
    Shortcut { name: Box<str>, key: Box<str> },
    Regex { name: Box<str>, source: Box<str>, regex: Regex },
}

impl Router {
    pub(super) fn insert_route(
        &mut self,
        methods: &[&str],
        pattern: &str,
        params: Vec<(Box<str>, Value)>,
    ) -> Result<(), RouterError> {
        let methods = normalize_methods(methods)?;

        let full = format!("{}{}", self.scope.prefix, pattern);

        let mut plan: SmallVec<[PlannedEdge; 8]> = SmallVec::new();
        for record in parse_pattern(&full) {
            let edge = match record {
                Segment::Literal(text) => PlannedEdge::Literal(text),
                Segment::Shortcut { name, key } => {
                    if !self.shortcuts.contains_key(&*key) {
                        return Err(RouterError::UnknownShortcut { key: key.into() });
                    }
                    PlannedEdge::Shortcut { name, key }
                }
                Segment::Regex { name, source } => {
                    let regex = match compile_anchored(&source) {
                        Ok(regex) => regex,
                        Err(error) => {
                            return Err(RouterError::InvalidRegex {
                                regex: source.into(),
                                error,
                            })
                        }
                    };
                    PlannedEdge::Regex {
                        name,
                        source,
                        regex,
                    }
                }
                Segment::Malformed { raw } => {
                    return Err(RouterError::MalformedSegment {
                        pattern: full,
                        segment: raw.into(),
                    })
                }
            };
            plan.push(edge);
        }

        let mut captures: Vec<(Box<str>, usize)> = Vec::new();
        let mut cur = NodeId::ROOT;
        for (i, edge) in plan.into_iter().enumerate() {
            let pos = i + 1;
            cur = match edge {
                PlannedEdge::Literal(text) => self.descend_static(cur, text),
                PlannedEdge::Shortcut { name, key } => {
                    upsert(&mut captures, name, pos);
                    self.descend_shortcut(cur, key)
                }
                PlannedEdge::Regex {
                    name,
                    source,
                    regex,
                } => {
                    upsert(&mut captures, name, pos);
                    self.descend_regex(cur, source, regex)
                }
            };
        }

        // capture > explicit param > group default on key collision
        let mut specs: Vec<(Box<str>, ParamSpec)> = Vec::new();
        for (key, value) in &self.scope.defaults {
            upsert(&mut specs, key.clone(), ParamSpec::Literal(value.clone()));
        }
        for (key, value) in params {
            upsert(&mut specs, key, ParamSpec::Literal(value));
        }
        for (name, pos) in captures {
            upsert(&mut specs, name, ParamSpec::Capture(pos));
        }

        let node = &mut self.nodes[cur.0];
        for method in methods {
            if let Some(entry) = node.handlers.iter_mut().find(|e| e.method == method) {
                entry.params = specs.clone();
            } else {
                node.handlers.push(MethodEntry {
                    method,
                    params: specs.clone(),
                });
            }
        }

        Ok(())
    }

    fn descend_static(&mut self, at: NodeId, text: Box<str>) -> NodeId {
        if let Some(&next) = self.nodes[at.0].statics.get(&text) {
            return next;
        }
        let next = self.alloc_node();
        self.nodes[at.0].statics.insert(text, next);
        next
    }

    fn descend_shortcut(&mut self, at: NodeId, key: Box<str>) -> NodeId {
        let found = self.nodes[at.0]
            .shortcuts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|&(_, next)| next);
        if let Some(next) = found {
            return next;
        }
        let next = self.alloc_node();
        self.nodes[at.0].shortcuts.push((key, next));
        next
    }

    fn descend_regex(&mut self, at: NodeId, source: Box<str>, regex: Regex) -> NodeId {
        let found = self.nodes[at.0]
            .regexps
            .iter()
            .find(|e| e.source == source)
            .map(|e| e.next);
        if let Some(next) = found {
            return next;
        }
        let next = self.alloc_node();
        self.nodes[at.0].regexps.push(RegexEdge {
            source,
            regex,
            next,
        });
        next
    }

    fn alloc_node(&mut self) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::default());
        id
    }
}

impl Router {
    pub(super) fn do_search(&self, method: &str, path: &str) -> SearchResult {
        let tokens = split_path(path);

        // tokens consumed by a shortcut keep their converted value here
        let mut converted: SmallVec<[Option<Value>; 8]> = smallvec![None; tokens.len()];

        let mut cur = NodeId::ROOT;
        'tokens: for (i, &token) in tokens.iter().enumerate() {
            let node = &self.nodes[cur.0];

            if let Some(&next) = node.statics.get(token) {
                cur = next;
                continue;
            }

            for (key, next) in &node.shortcuts {
                if let Some(sreg) = self.shortcuts.get(&**key) {
                    if sreg.matches(token) {
                        converted[i] = Some(sreg.convert(token));
                        cur = *next;
                        continue 'tokens;
                    }
                }
            }

            for edge in &node.regexps {
                if edge.regex.is_match(token) {
                    cur = edge.next;
                    continue 'tokens;
                }
            }

            return SearchResult::not_found();
        }

        let node = &self.nodes[cur.0];
        if node.handlers.is_empty() {
            return SearchResult::not_found();
        }

        let allowed: Vec<Box<str>> = node.handlers.iter().map(|e| e.method.clone()).collect();

        let entry = match node
            .handlers
            .iter()
            .find(|e| e.method.eq_ignore_ascii_case(method))
        {
            Some(entry) => entry,
            None => return SearchResult::method_not_allowed(allowed),
        };

        let mut params = Params::new();
        for (name, spec) in &entry.params {
            let value = match spec {
                ParamSpec::Literal(value) => value.clone(),
                // capture positions are 1-based and never exceed the token
                // count of a path that reached this node
                ParamSpec::Capture(pos) => match converted[pos - 1].clone() {
                    Some(value) => value,
                    None => Value::Str(tokens[pos - 1].into()),
                },
            };
            params.push(name.clone(), value);
        }

        SearchResult::found(params, allowed)
    }
}

fn normalize_methods(methods: &[&str]) -> Result<SmallVec<[Box<str>; 4]>, RouterError> {
    let mut out: SmallVec<[Box<str>; 4]> = SmallVec::new();
    for method in methods {
        if method.is_empty() {
            continue;
        }
        let upper = method.to_ascii_uppercase();
        if out.iter().all(|m| **m != *upper) {
            out.push(upper.into());
        }
    }
    if out.is_empty() {
        return Err(RouterError::EmptyMethods);
    }
    Ok(out)
}

// Segment regexes must cover the whole token, never a substring of it.
fn compile_anchored(source: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{})\z", source))
}
