//! The tagging-contract document: a fixed template materialized at the
//! project root, plus the usage guidance returned to callers.
//!
//! The vocabulary documented here is exactly what the tag grammar and
//! matcher operate on. There is no enforced schema; any scope and tag
//! strings work.

use std::path::Path;

use tracing::info;

use crate::error::{Result, TagGrepError};

/// File name of the tagging contract document.
pub const INSTRUCTIONS_FILE: &str = "CODE_TAGS.md";

const INSTRUCTIONS_TEMPLATE: &str = r#"# Code Tags

This project annotates code constructs with metadata tags so tools can
locate code by intent instead of by text search. Tags live in the
comment block directly above a construct:

```ts
// [feature:auth]
// [layer:service]
export function login(credentials: Credentials) {
  // ...
}
```

## Annotation format

- One annotation per comment line: `[scope:tag]` or `[scope:tag1,tag2]`.
  `|` and `&` also work as separators inside the brackets.
- A scope is a named axis of classification (`feature`, `layer`,
  `domain`, ...). Any name matching `[A-Za-z0-9_-]+` works; there is no
  fixed vocabulary.
- Re-declaring a scope on a later line of the same comment block
  replaces the earlier declaration.
- Tags apply only to the construct immediately below the comment block.
  Decorator lines (`@...`) between the comments and the construct are
  fine; any other code line breaks the association.
- All common comment styles are recognized: `//`, `/*`, `*`, and `#`.

## Querying

Use the `extract_tagged_blocks` tool (or `taggrep extract`) with a query:

- `[feature:auth]` — blocks tagged `auth` in the `feature` scope.
- `[feature:auth]&[layer:service]` — blocks carrying both.
- `[feature:auth]|[feature:payment]` — blocks carrying either.
- `[feature:auth,payment]` — alternatives within one scope (always OR).
- An empty query returns every tagged block.

Do not mix `&` and `|` between scopes in one query; mixed queries fall
back to OR matching.

## Suggested scopes

| Scope     | Purpose                         | Example tags               |
| --------- | ------------------------------- | -------------------------- |
| `feature` | Product capability              | `auth`, `payment`, `search`|
| `layer`   | Architectural layer             | `api`, `service`, `db`     |
| `domain`  | Business domain                 | `billing`, `identity`      |
| `status`  | Lifecycle                       | `stable`, `deprecated`     |

Keep this file at the project root and extend the scope table as the
codebase grows; it is yours to edit and will not be overwritten.
"#;

/// Ensure the tagging contract exists at `root` and return usage
/// guidance. An existing document is left untouched so developer edits
/// survive.
pub async fn ensure_instructions(root: &Path) -> Result<String> {
    if !root.is_dir() {
        return Err(TagGrepError::InvalidRoot(root.display().to_string()));
    }

    let target = root.join(INSTRUCTIONS_FILE);
    let created = if target.exists() {
        false
    } else {
        tokio::fs::write(&target, INSTRUCTIONS_TEMPLATE).await?;
        info!("Created tagging instructions at {}", target.display());
        true
    };

    Ok(guidance(&target, created))
}

fn guidance(target: &Path, created: bool) -> String {
    let status = if created {
        "A tagging guide was created at"
    } else {
        "A tagging guide already exists at"
    };
    format!(
        "{status} {}.\n\n\
         Annotate constructs by placing `[scope:tag]` lines in the comment \
         block directly above them, then query with `extract_tagged_blocks` \
         (for example `[feature:auth]&[layer:service]`). See the guide for \
         the full annotation and query syntax.",
        target.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_creates_document_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        let guidance = ensure_instructions(temp_dir.path()).await.unwrap();

        let target = temp_dir.path().join(INSTRUCTIONS_FILE);
        assert!(target.exists());
        assert!(guidance.contains("was created"));

        let content = fs::read_to_string(target).unwrap();
        assert!(content.contains("[scope:tag]"));
        assert!(content.contains("extract_tagged_blocks"));
    }

    #[tokio::test]
    async fn test_existing_document_left_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join(INSTRUCTIONS_FILE);
        fs::write(&target, "# My edited contract\n").unwrap();

        let guidance = ensure_instructions(temp_dir.path()).await.unwrap();
        assert!(guidance.contains("already exists"));
        assert_eq!(fs::read_to_string(target).unwrap(), "# My edited contract\n");
    }

    #[tokio::test]
    async fn test_invalid_root_is_an_error() {
        let result = ensure_instructions(Path::new("/nonexistent/taggrep/root")).await;
        assert!(matches!(result, Err(TagGrepError::InvalidRoot(_))));
    }
}
