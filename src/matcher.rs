//! Evaluates one block's tag set against a parsed query.

use crate::query::{Combinator, Query, ScopeRequirement};
use crate::types::TagSet;

/// Does a block with these tags satisfy the query?
///
/// Within a requirement the semantics are always OR over the alternative
/// values, independent of the global combinator. A query with zero
/// requirements matches unconditionally.
pub fn matches(tags: &TagSet, query: &Query) -> bool {
    if query.is_match_all() {
        return true;
    }
    match query.combinator {
        Combinator::And => query.requirements.iter().all(|req| satisfies(tags, req)),
        Combinator::Or => query.requirements.iter().any(|req| satisfies(tags, req)),
    }
}

fn satisfies(tags: &TagSet, requirement: &ScopeRequirement) -> bool {
    tags.get(&requirement.scope)
        .map(|declared| {
            declared
                .iter()
                .any(|value| requirement.alternatives.iter().any(|alt| alt == value))
        })
        .unwrap_or(false)
}
