//! JSON path dialect
//!
//! A subset of the usual JSONPath notation:
//! - `$` is the root marker; expressions without it resolve relative to the
//!   context node
//! - `.name` member access, `*` every member
//! - `[*]` every element of an array (or value of an object), `[n]` an
//!   array index
//!
//! Wildcards over objects visit members in document order, which requires
//! `serde_json` with `preserve_order`.
//!
//! Unlike the XML dialect, malformed expressions are reported as
//! [`PathError`] so callers can log them and degrade the affected field to
//! null. Scalar values stringify to their JSON text; `null` carries no
//! value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::document::JsonDocument;

use super::{PathError, PathMatch, PathResolver};

static BRACKET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(\*|\d+)\]").unwrap());

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    /// `.name`, with `*` selecting every member.
    Member(String),
    /// `[*]`
    Wildcard,
    /// `[n]`
    Index(usize),
}

fn parse_path(path: &str) -> Result<(bool, Vec<Segment>), PathError> {
    let absolute = path.starts_with('$');
    let mut rest = if absolute { &path[1..] } else { path };
    rest = rest.strip_prefix('.').unwrap_or(rest);

    let mut segments = Vec::new();
    if rest.is_empty() {
        return Ok((absolute, segments));
    }

    for chunk in rest.split('.') {
        let bracket_start = chunk.find('[').unwrap_or(chunk.len());
        let (member, mut brackets) = chunk.split_at(bracket_start);

        if member.is_empty() && brackets.is_empty() {
            return Err(PathError::new(path, "empty member name"));
        }
        if member.contains(']') {
            return Err(PathError::new(path, "unexpected `]`"));
        }
        if !member.is_empty() {
            segments.push(Segment::Member(member.to_string()));
        }

        while !brackets.is_empty() {
            let captures = BRACKET
                .captures(brackets)
                .ok_or_else(|| PathError::new(path, format!("invalid bracket `{}`", brackets)))?;
            let token = &captures[1];
            if token == "*" {
                segments.push(Segment::Wildcard);
            } else {
                let index = token
                    .parse()
                    .map_err(|_| PathError::new(path, format!("invalid index `{}`", token)))?;
                segments.push(Segment::Index(index));
            }
            brackets = &brackets[captures[0].len()..];
        }
    }

    Ok((absolute, segments))
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Resolver over one parsed [`JsonDocument`].
pub struct JsonPathResolver<'a> {
    root: &'a Value,
}

impl<'a> JsonPathResolver<'a> {
    pub fn new(doc: &'a JsonDocument) -> Self {
        Self { root: doc.root() }
    }

    pub fn from_value(root: &'a Value) -> Self {
        Self { root }
    }
}

impl<'a> PathResolver for JsonPathResolver<'a> {
    type Node = &'a Value;

    fn root(&self) -> &'a Value {
        self.root
    }

    fn is_absolute(&self, path: &str) -> bool {
        path.starts_with('$')
    }

    fn resolve(
        &self,
        context: &&'a Value,
        path: &str,
    ) -> Result<Vec<PathMatch<&'a Value>>, PathError> {
        let (absolute, segments) = parse_path(path)?;
        let start = if absolute { self.root } else { *context };

        let mut frontier: Vec<&'a Value> = vec![start];
        for segment in &segments {
            let mut next = Vec::new();
            for value in frontier {
                match segment {
                    Segment::Member(name) if name == "*" => match value {
                        Value::Object(map) => next.extend(map.values()),
                        Value::Array(items) => next.extend(items.iter()),
                        _ => {}
                    },
                    Segment::Member(name) => {
                        if let Value::Object(map) = value {
                            if let Some(child) = map.get(name) {
                                next.push(child);
                            }
                        }
                    }
                    Segment::Wildcard => match value {
                        Value::Array(items) => next.extend(items.iter()),
                        Value::Object(map) => next.extend(map.values()),
                        _ => {}
                    },
                    Segment::Index(index) => {
                        if let Value::Array(items) = value {
                            if let Some(child) = items.get(*index) {
                                next.push(child);
                            }
                        }
                    }
                }
            }
            frontier = next;
            if frontier.is_empty() {
                break;
            }
        }

        Ok(frontier
            .into_iter()
            .map(|value| PathMatch {
                node: value,
                value: value_text(value),
            })
            .collect())
    }
}
