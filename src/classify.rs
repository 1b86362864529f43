//! Line-level classification: comment lines, decorator lines, and
//! construct-start lines.
//!
//! Construct detection is a prioritized set of pattern matchers over
//! arbitrary C-family/script-like syntax, not a grammar. It trades
//! precision for speed and language-agnosticism: it will miss unusually
//! formatted declarations and will fire on look-alike text inside string
//! literals or multi-line expressions. Callers must not tighten it; a
//! higher-fidelity replacement would be a per-language tokenizer behind
//! the same boolean interface.

use once_cell::sync::Lazy;
use regex::Regex;

/// Line starts that mark a comment in the supported comment styles.
const COMMENT_MARKERS: &[&str] = &["//", "/*", "*", "#"];

static CONSTRUCT_STARTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // function declarations, optionally exported/defaulted/async,
        // optionally behind a visibility-like modifier
        r"^(?:export\s+)?(?:default\s+)?(?:public\s+|private\s+|protected\s+|static\s+)*(?:async\s+)?function\b",
        // class declarations, including modifier keywords
        r"^(?:export\s+)?(?:default\s+)?(?:public\s+|private\s+|protected\s+)?(?:abstract\s+|final\s+|sealed\s+|base\s+)?class\b",
        // other type-introducing keywords
        r"^(?:export\s+)?(?:public\s+|private\s+|internal\s+)?(?:interface|enum|namespace|module)\b",
        r"^(?:export\s+)?type\s+[A-Za-z0-9_$]+",
        r"^(?:export\s+)?mixin\b",
        r"^extension\b",
        // const/let/var binding whose initializer is an arrow function
        // or a function expression
        r"^(?:export\s+)?(?:const|let|var)\s+[A-Za-z0-9_$]+[^=]*=\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?:[^=>{]+)?=>|[A-Za-z0-9_$]+\s*=>)",
        // export default arrow / function expression
        r"^export\s+default\s+(?:async\s+)?(?:function\b|\()",
        // object-literal property whose value is a function or arrow
        r#"^['"]?[A-Za-z0-9_$-]+['"]?\s*:\s*(?:async\s+)?(?:function\b|\([^)]*\)\s*(?:[^=>{]+)?=>)"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("construct pattern"))
    .collect()
});

/// A line starting (after whitespace) with `//`, `/*`, `*`, or `#`.
pub fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    COMMENT_MARKERS.iter().any(|marker| trimmed.starts_with(marker))
}

/// A line starting (after whitespace) with `@`.
///
/// Decorator lines only extend a pending annotation run; the extractor
/// decides that based on its own state.
pub fn is_decorator_line(line: &str) -> bool {
    line.trim_start().starts_with('@')
}

/// Does this line begin a taggable code construct?
pub fn is_construct_start(line: &str) -> bool {
    let trimmed = line.trim_start();
    CONSTRUCT_STARTS.iter().any(|pattern| pattern.is_match(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_lines() {
        assert!(is_comment_line("// slash comment"));
        assert!(is_comment_line("  /* block comment"));
        assert!(is_comment_line(" * continuation"));
        assert!(is_comment_line("# hash comment"));
        assert!(!is_comment_line("function f() {}"));
        assert!(!is_comment_line("const x = 1; // trailing"));
    }

    #[test]
    fn test_decorator_lines() {
        assert!(is_decorator_line("@Injectable()"));
        assert!(is_decorator_line("  @override"));
        assert!(!is_decorator_line("email@example.com"));
    }

    #[test]
    fn test_function_declarations() {
        assert!(is_construct_start("function f() {}"));
        assert!(is_construct_start("async function load() {"));
        assert!(is_construct_start("export function f() {}"));
        assert!(is_construct_start("export default async function main() {"));
        assert!(is_construct_start("  function indented() {}"));
    }

    #[test]
    fn test_class_declarations() {
        assert!(is_construct_start("class Foo {"));
        assert!(is_construct_start("export class Foo {"));
        assert!(is_construct_start("export default class Foo {"));
        assert!(is_construct_start("abstract class Base {"));
        assert!(is_construct_start("export abstract class Base {"));
        assert!(is_construct_start("final class Closed {"));
        assert!(is_construct_start("sealed class Variant {"));
        assert!(is_construct_start("base class Root {"));
    }

    #[test]
    fn test_type_keywords() {
        assert!(is_construct_start("interface Shape {"));
        assert!(is_construct_start("export interface Shape {"));
        assert!(is_construct_start("enum Color { Red }"));
        assert!(is_construct_start("type Handler = (e: Event) => void"));
        assert!(is_construct_start("namespace Geometry {"));
        assert!(is_construct_start("module Billing"));
        assert!(is_construct_start("mixin Walkable {"));
        assert!(is_construct_start("extension StringX on String {"));
    }

    #[test]
    fn test_arrow_bindings() {
        assert!(is_construct_start("const f = () => 1"));
        assert!(is_construct_start("const f = (a, b) => a + b"));
        assert!(is_construct_start("let g = async (req) => {"));
        assert!(is_construct_start("var h = x => x * 2"));
        assert!(is_construct_start("export const handler = async () => {"));
        assert!(is_construct_start("const cb = function () {}"));
        assert!(is_construct_start("const typed: Handler = (e) => e"));
    }

    #[test]
    fn test_object_properties() {
        assert!(is_construct_start("onSave: function () {"));
        assert!(is_construct_start("onSave: async () => {"));
        assert!(is_construct_start("'on-save': (e) => handle(e),"));
    }

    #[test]
    fn test_non_constructs() {
        assert!(!is_construct_start("const x = 5;"));
        assert!(!is_construct_start("let name = \"function\";"));
        assert!(!is_construct_start("return a + b;"));
        assert!(!is_construct_start("if (condition) {"));
        assert!(!is_construct_start("// function f() {}"));
    }

    #[test]
    fn test_permissive_by_design() {
        // Look-alike text is accepted on purpose: callers must tolerate
        // false positives rather than tightening the patterns.
        assert!(is_construct_start("function(shaped, like, a, call)"));
    }
}
