//! The query language: bracketed scope requirements combined by a single
//! global operator.
//!
//! `[feature:auth]&[layer:service]` requires both scopes; `|` requires
//! either. The combinator is global, not per pair: mixed AND/OR across
//! scopes is inexpressible. A query mixing both separators is an
//! unsupported expression shape and degrades to OR rather than guessing
//! per-scope precedence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tags::split_tag_list;

static BRACKET_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]").expect("bracket group pattern"));

/// The single boolean operator applied across all scope requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

/// One `[scope:alt1,alt2]` requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeRequirement {
    pub scope: String,
    /// A block satisfies the requirement when it declares the scope with
    /// at least one of these values.
    pub alternatives: Vec<String>,
}

/// A parsed query expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub requirements: Vec<ScopeRequirement>,
    pub combinator: Combinator,
}

impl Query {
    /// Parse a raw query string.
    ///
    /// Parsing is tolerant: groups without a `:` are skipped, and a
    /// query with no bracket groups at all matches every block.
    pub fn parse(raw: &str) -> Self {
        let combinator = if raw.contains('&') && !raw.contains('|') {
            Combinator::And
        } else {
            Combinator::Or
        };

        let mut requirements = Vec::new();
        for caps in BRACKET_GROUP.captures_iter(raw) {
            let group = &caps[1];
            let Some((scope, rest)) = group.split_once(':') else {
                continue;
            };
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }
            requirements.push(ScopeRequirement {
                scope: scope.to_string(),
                alternatives: split_tag_list(rest),
            });
        }

        Query {
            requirements,
            combinator,
        }
    }

    /// True when the expression carries no scope requirements and so
    /// matches unconditionally.
    pub fn is_match_all(&self) -> bool {
        self.requirements.is_empty()
    }
}
