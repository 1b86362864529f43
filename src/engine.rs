//! The extraction orchestrator: walks candidate files, extracts tagged
//! blocks, and keeps the ones matching a query.
//!
//! Every invocation rescans from scratch; there is no index and no
//! cache. Files are read and processed to completion one at a time, and
//! a failed read simply contributes zero blocks.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, TagGrepError};
use crate::extractor::BlockExtractor;
use crate::matcher;
use crate::query::Query;
use crate::scanner::{collect_source_files, IgnoreRules, SOURCE_EXTENSIONS};
use crate::types::MatchedBlock;

/// Rendered result when a query matches nothing anywhere in the tree.
/// Callers can rely on this sentinel to distinguish "ran successfully,
/// nothing found" from a hard failure.
pub const NO_MATCHES: &str = "No tagged code blocks matched the query.";

const BLOCK_DELIMITER: &str = "\n\n---\n\n";

/// Per-invocation extraction context. Holds only configuration; all scan
/// state lives in locals, so engines are safe to share across queries.
#[derive(Debug, Clone)]
pub struct ExtractionEngine {
    extensions: Vec<String>,
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionEngine {
    pub fn new() -> Self {
        Self {
            extensions: SOURCE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Extend the extension allow-list (lowercase, without the dot).
    pub fn with_extra_extensions(mut self, extra: Vec<String>) -> Self {
        for ext in extra {
            let lowered = ext.to_ascii_lowercase();
            if !self.extensions.contains(&lowered) {
                self.extensions.push(lowered);
            }
        }
        self
    }

    /// Scan `folder`, extract tagged blocks, and return those matching
    /// `query`, in walker order with per-file source order preserved.
    pub async fn extract(
        &self,
        folder: &Path,
        query: &str,
        respect_gitignore: bool,
    ) -> Result<Vec<MatchedBlock>> {
        if !folder.is_dir() {
            return Err(TagGrepError::InvalidRoot(folder.display().to_string()));
        }

        let query = Query::parse(query);
        debug!(
            "Parsed query: {} requirement(s), combinator {:?}",
            query.requirements.len(),
            query.combinator
        );

        // The ignore rules are read once per invocation.
        let rules = if respect_gitignore {
            Some(IgnoreRules::load(folder).await)
        } else {
            None
        };

        let files = collect_source_files(folder, rules.as_ref(), &self.extensions);
        info!("Scanning {} candidate file(s) under {}", files.len(), folder.display());

        let mut matches = Vec::new();
        for (path, relative) in files {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(err) => {
                    debug!("Skipping unreadable file {}: {}", relative, err);
                    continue;
                }
            };
            for block in BlockExtractor::extract(&content) {
                if matcher::matches(&block.tags, &query) {
                    matches.push(MatchedBlock {
                        file_path: relative.clone(),
                        block,
                    });
                }
            }
        }

        Ok(matches)
    }
}

/// Render matches as the per-block-delimited text callers consume, or
/// the no-match sentinel when there are none.
pub fn render_matches(matches: &[MatchedBlock]) -> String {
    if matches.is_empty() {
        return NO_MATCHES.to_string();
    }
    matches
        .iter()
        .map(|matched| format!("File: {}\n{}", matched.file_path, matched.block.code))
        .collect::<Vec<_>>()
        .join(BLOCK_DELIMITER)
}
