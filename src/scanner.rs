//! File discovery: recursive traversal with a source-extension
//! allow-list, fixed directory exclusions, and a simplified `.gitignore`
//! rule set.
//!
//! The ignore matching is a deliberate approximation, not full gitignore
//! semantics: no negation, no anchoring to `/`, and the only
//! directory-vs-file distinction is a trailing slash. Patterns are
//! matched against each candidate path's root-relative, `/`-separated
//! form.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// File extensions eligible for extraction.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "vue", "svelte", "py", "dart", "java", "kt", "cs",
    "go", "rb", "php", "swift", "scala",
];

/// Directories never traversed, regardless of ignore configuration.
/// Dot-directories are excluded as well.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build"];

#[derive(Debug)]
enum IgnorePattern {
    /// Trailing-`/` pattern: matches as a path prefix or path segment.
    Dir(String),
    /// Pattern containing `*`, compiled to a permissive unanchored
    /// wildcard where each `*` matches any substring. The raw pattern is
    /// kept for the full-path equality fallback.
    Wildcard(String, Regex),
    /// Anything else: exact relative-path equality or a path segment
    /// anywhere in the path.
    Literal(String),
}

impl IgnorePattern {
    fn compile(raw: &str) -> Option<Self> {
        if let Some(dir) = raw.strip_suffix('/') {
            return Some(IgnorePattern::Dir(dir.to_string()));
        }
        if raw.contains('*') {
            let translated = raw
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            // An uncompilable pattern contributes nothing rather than
            // failing the scan.
            let regex = Regex::new(&translated).ok()?;
            return Some(IgnorePattern::Wildcard(raw.to_string(), regex));
        }
        Some(IgnorePattern::Literal(raw.to_string()))
    }

    fn matches(&self, relative: &str) -> bool {
        match self {
            IgnorePattern::Dir(dir) => {
                relative == dir
                    || relative.starts_with(&format!("{dir}/"))
                    || relative.split('/').any(|segment| segment == dir)
            }
            IgnorePattern::Wildcard(raw, regex) => relative == raw || regex.is_match(relative),
            IgnorePattern::Literal(literal) => {
                relative == literal || relative.split('/').any(|segment| segment == literal)
            }
        }
    }
}

/// The ignore rules loaded from `.gitignore` at the scan root.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRules {
    /// Load `.gitignore` from `root`. A missing or unreadable file
    /// yields an empty rule set.
    pub async fn load(root: &Path) -> Self {
        match tokio::fs::read_to_string(root.join(".gitignore")).await {
            Ok(content) => Self::from_content(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse rule lines: blank lines and `#` comment lines are skipped.
    pub fn from_content(content: &str) -> Self {
        let patterns = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(IgnorePattern::compile)
            .collect();
        Self { patterns }
    }

    pub fn is_ignored(&self, relative: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(relative))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Collect candidate source files under `root` in walker order.
///
/// Returns `(absolute path, root-relative display path)` pairs.
/// Unreadable directories are skipped silently and contribute no files.
pub fn collect_source_files(
    root: &Path,
    rules: Option<&IgnoreRules>,
    extensions: &[String],
) -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep_entry);

    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_allowed_extension(path, extensions) {
            continue;
        }
        let relative = relative_display(root, path);
        if let Some(rules) = rules {
            if rules.is_ignored(&relative) {
                debug!("Ignoring {} per .gitignore rules", relative);
                continue;
            }
        }
        files.push((path.to_path_buf(), relative));
    }
    files
}

fn keep_entry(entry: &DirEntry) -> bool {
    // The root itself is always entered, even when the scan is rooted at
    // a dot-directory like ".".
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !(name.starts_with('.') || EXCLUDED_DIRS.contains(&name.as_ref()))
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lowered = ext.to_ascii_lowercase();
            extensions.iter().any(|allowed| allowed == &lowered)
        })
        .unwrap_or(false)
}

fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
