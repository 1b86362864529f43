//! The per-file block extractor.
//!
//! A line-driven state machine assembles pending comment runs (and their
//! tags) into captured code blocks. Adjacency is strict: tags apply only
//! to the construct immediately following their comment run, with
//! decorator lines tolerated in between once a pending run exists. Any
//! other non-blank line discards the pending run.

use std::mem;

use tracing::trace;

use crate::classify::{is_comment_line, is_construct_start, is_decorator_line};
use crate::tags::parse_annotation;
use crate::types::{CodeBlock, TagSet};

/// Scan phase of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Nothing pending, no open block.
    Idle,
    /// Accumulating a comment run and its tags.
    Comment,
    /// Pending run extended by decorator lines.
    Decorator,
    /// A tagged construct is being captured.
    Open,
}

/// Extracts tagged code blocks from one file's text.
pub struct BlockExtractor {
    state: ScanState,
    pending_lines: Vec<String>,
    pending_tags: TagSet,
    pending_start: Option<usize>,
    block_lines: Vec<String>,
    block_tags: TagSet,
    block_start: usize,
    blocks: Vec<CodeBlock>,
}

impl Default for BlockExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockExtractor {
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            pending_lines: Vec::new(),
            pending_tags: TagSet::new(),
            pending_start: None,
            block_lines: Vec::new(),
            block_tags: TagSet::new(),
            block_start: 0,
            blocks: Vec::new(),
        }
    }

    /// Extract all tagged blocks from `content`, in source order.
    ///
    /// Constructs without tags produce no block. A block closes on the
    /// next construct-start line or end of file.
    pub fn extract(content: &str) -> Vec<CodeBlock> {
        let mut extractor = Self::new();
        for (index, line) in content.lines().enumerate() {
            extractor.feed(index + 1, line);
        }
        extractor.finish()
    }

    fn feed(&mut self, line_no: usize, line: &str) {
        if self.state == ScanState::Open {
            if !line.trim().is_empty() && is_construct_start(line) {
                self.close_block();
                // Close-then-reopen is atomic: the same line is
                // re-evaluated against the now-empty pending state.
                self.feed_pending(line_no, line);
            } else {
                self.block_lines.push(line.to_string());
            }
            return;
        }
        self.feed_pending(line_no, line);
    }

    fn feed_pending(&mut self, line_no: usize, line: &str) {
        // Blank lines neither accumulate nor break adjacency.
        if line.trim().is_empty() {
            return;
        }
        if is_comment_line(line) {
            if self.pending_start.is_none() {
                self.pending_start = Some(line_no);
            }
            if let Some((scope, values)) = parse_annotation(line) {
                // Last-write-wins for a scope re-declared within the run.
                self.pending_tags.insert(scope, values);
            }
            self.pending_lines.push(line.to_string());
            self.state = ScanState::Comment;
            return;
        }
        if is_decorator_line(line) && self.has_pending() {
            self.pending_lines.push(line.to_string());
            self.state = ScanState::Decorator;
            return;
        }
        if is_construct_start(line) {
            if self.pending_tags.is_empty() {
                // Stray comments without tags are discarded.
                self.clear_pending();
            } else {
                self.open_block(line_no, line);
            }
            return;
        }
        // Any other non-blank line breaks adjacency.
        self.clear_pending();
    }

    fn has_pending(&self) -> bool {
        !self.pending_lines.is_empty() || !self.pending_tags.is_empty()
    }

    fn open_block(&mut self, line_no: usize, line: &str) {
        self.block_lines = mem::take(&mut self.pending_lines);
        self.block_lines.push(line.to_string());
        self.block_tags = mem::take(&mut self.pending_tags);
        self.block_start = self.pending_start.take().unwrap_or(line_no);
        self.state = ScanState::Open;
    }

    fn close_block(&mut self) {
        let lines = mem::take(&mut self.block_lines);
        let tags = mem::take(&mut self.block_tags);
        let code = trim_blank_edges(&lines).join("\n");
        trace!(
            "closed block at line {} with {} scope(s)",
            self.block_start,
            tags.len()
        );
        self.blocks.push(CodeBlock {
            code,
            tags,
            start_line: self.block_start,
        });
        self.state = ScanState::Idle;
    }

    fn clear_pending(&mut self) {
        self.pending_lines.clear();
        self.pending_tags.clear();
        self.pending_start = None;
        self.state = ScanState::Idle;
    }

    fn finish(mut self) -> Vec<CodeBlock> {
        if self.state == ScanState::Open {
            self.close_block();
        }
        self.blocks
    }
}

fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);
    &lines[start..end]
}
