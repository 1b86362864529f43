//! The tag annotation grammar.
//!
//! A comment line carries at most one annotation of the form
//! `[scope:tag1,tag2,...]`, where `|` or `&` are accepted in place of `,`
//! as the inner separator. Parsing is tolerant: text that does not match
//! the grammar is simply not an annotation, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([A-Za-z0-9_-]+):([^\]]+)\]").expect("tag annotation pattern"));

/// Parse the annotation out of one comment line, if any.
///
/// Returns the scope name and its tag values. Only the first annotation
/// on a line is recognized.
pub fn parse_annotation(line: &str) -> Option<(String, Vec<String>)> {
    let caps = TAG_ANNOTATION.captures(line)?;
    let scope = caps[1].to_string();
    let values = split_tag_list(&caps[2]);
    Some((scope, values))
}

/// Split a tag list on `,`, `|`, or `&`, trimming whitespace and dropping
/// empty entries. Shared with the query parser, whose alternatives use
/// the same separators.
pub fn split_tag_list(raw: &str) -> Vec<String> {
    raw.split(|c| c == ',' || c == '|' || c == '&')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_annotation() {
        let (scope, values) = parse_annotation("// [feature:auth]").unwrap();
        assert_eq!(scope, "feature");
        assert_eq!(values, vec!["auth"]);
    }

    #[test]
    fn test_parse_multi_value_annotation() {
        let (scope, values) = parse_annotation("# [layer:service, db]").unwrap();
        assert_eq!(scope, "layer");
        assert_eq!(values, vec!["service", "db"]);
    }

    #[test]
    fn test_pipe_and_ampersand_separators() {
        let (_, values) = parse_annotation("// [feature:auth|payment]").unwrap();
        assert_eq!(values, vec!["auth", "payment"]);

        let (_, values) = parse_annotation("// [feature:auth&payment]").unwrap();
        assert_eq!(values, vec!["auth", "payment"]);
    }

    #[test]
    fn test_scope_name_charset() {
        let (scope, _) = parse_annotation("* [my-scope_2:x]").unwrap();
        assert_eq!(scope, "my-scope_2");

        // Invalid scope characters do not match.
        assert!(parse_annotation("// [my scope:x]").is_none());
    }

    #[test]
    fn test_malformed_lines_are_not_annotations() {
        assert!(parse_annotation("// plain comment").is_none());
        assert!(parse_annotation("// [feature]").is_none());
        assert!(parse_annotation("// [feature:]").is_none());
        assert!(parse_annotation("const arr = [1, 2];").is_none());
    }

    #[test]
    fn test_only_first_annotation_recognized() {
        let (scope, values) = parse_annotation("// [a:x] [b:y]").unwrap();
        assert_eq!(scope, "a");
        assert_eq!(values, vec!["x"]);
    }

    #[test]
    fn test_empty_entries_dropped() {
        assert_eq!(split_tag_list("a,,b, ,c"), vec!["a", "b", "c"]);
        assert!(split_tag_list("  ,  ").is_empty());
    }
}
