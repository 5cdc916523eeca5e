//! Nested-field resolution
//!
//! Child collections under a row produce dynamically named columns: every
//! qualifying candidate contributes `prefix + id` = value, plus optional
//! statically named companion fields. Duplicate keys keep the first value
//! seen, so a repeated time-band never overwrites an earlier one.

use indexmap::IndexMap;
use tracing::warn;

use crate::config::NestedField;
use crate::path::{PathMatch, PathResolver};

/// Resolve one nested rule against a row context.
///
/// Candidates come from `child_path` in document order. A candidate
/// contributes only when every condition holds and both `id_field` and
/// `value_field` yield a value. A condition whose path does not resolve is
/// not satisfied.
pub fn resolve_nested<R: PathResolver>(
    resolver: &R,
    context: &R::Node,
    rule: &NestedField,
) -> IndexMap<String, String> {
    let mut fields = IndexMap::new();

    let candidates = match resolver.resolve(context, &rule.child_path) {
        Ok(candidates) => candidates,
        Err(e) => {
            warn!("Skipping nested rule `{}{}`: {}", rule.prefix, rule.id_field, e);
            return fields;
        }
    };

    for candidate in candidates {
        if !conditions_hold(resolver, &candidate, rule) {
            continue;
        }
        let id = first_value(resolver, &candidate.node, &rule.id_field);
        let value = first_value(resolver, &candidate.node, &rule.value_field);
        let (Some(id), Some(value)) = (id, value) else {
            continue;
        };

        fields
            .entry(format!("{}{}", rule.prefix, id))
            .or_insert(value);

        for (name, path) in &rule.additional_fields {
            let key = format!("{}{}", rule.prefix, name);
            if fields.contains_key(&key) {
                continue;
            }
            if let Some(extra) = first_value(resolver, &candidate.node, path) {
                fields.insert(key, extra);
            }
        }
    }

    fields
}

fn conditions_hold<R: PathResolver>(
    resolver: &R,
    candidate: &PathMatch<R::Node>,
    rule: &NestedField,
) -> bool {
    rule.conditions.iter().all(|condition| {
        first_value(resolver, &candidate.node, &condition.path).as_deref()
            == Some(condition.value.as_str())
    })
}

fn first_value<R: PathResolver>(resolver: &R, context: &R::Node, path: &str) -> Option<String> {
    resolver
        .resolve(context, path)
        .ok()?
        .into_iter()
        .next()?
        .value
}
