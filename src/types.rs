use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scope name -> ordered tag values declared for that scope on one block.
///
/// Keys are unique per block. A scope re-declared by a later comment line
/// within the same comment run replaces the earlier declaration.
pub type TagSet = HashMap<String, Vec<String>>;

/// One extracted, tagged code block.
///
/// `code` holds the verbatim comment run plus the construct's following
/// lines, trimmed of leading and trailing blank lines. `tags` is never
/// empty: constructs without tags are not emitted at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeBlock {
    pub code: String,
    pub tags: TagSet,
    /// 1-based line where the attributed comment run begins, or the
    /// construct line if no comment preceded it.
    pub start_line: usize,
}

/// A block that matched a query, together with the file it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedBlock {
    /// Path relative to the scan root, `/`-separated.
    pub file_path: String,
    pub block: CodeBlock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_block_serialization() {
        let mut tags = TagSet::new();
        tags.insert("feature".to_string(), vec!["auth".to_string()]);

        let block = CodeBlock {
            code: "// [feature:auth]\nfunction f() {}".to_string(),
            tags,
            start_line: 1,
        };

        let json = serde_json::to_string(&block).unwrap();
        let back: CodeBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert_eq!(back.tags["feature"], vec!["auth"]);
    }
}
