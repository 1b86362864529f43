pub mod types;
pub mod tags;
pub mod classify;
pub mod extractor;
pub mod query;
pub mod matcher;
pub mod scanner;
pub mod engine;
pub mod instructions;
pub mod ai_tools;
pub mod error;
pub mod cli;
pub mod cli_types;

// Re-export commonly used types
pub use types::{CodeBlock, MatchedBlock, TagSet};
pub use extractor::BlockExtractor;
pub use query::{Combinator, Query};
pub use engine::{render_matches, ExtractionEngine, NO_MATCHES};
pub use instructions::INSTRUCTIONS_FILE;
pub use ai_tools::{LocalExtractionTools, ToolResult, ToolSchema};
pub use error::{Result, TagGrepError};
pub use cli::CliApp;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The public facade: an extraction engine wired to the tool surface,
/// for embedding in AI assistants and other hosts.
///
/// ```no_run
/// use serde_json::json;
/// use taggrep::TagGrep;
///
/// # async fn run() -> taggrep::Result<()> {
/// let taggrep = TagGrep::builder().build()?;
/// let result = taggrep
///     .execute_tool(
///         "extract_tagged_blocks",
///         json!({"folder_path": "/my/project", "query": "[feature:auth]"}),
///     )
///     .await?;
/// println!("{}", result.data["content"]);
/// # Ok(())
/// # }
/// ```
pub struct TagGrep {
    tools: LocalExtractionTools,
}

impl TagGrep {
    pub fn builder() -> TagGrepBuilder {
        TagGrepBuilder::default()
    }

    /// Tool schemas for registration with an LLM integration.
    pub fn get_tool_definitions() -> Vec<ToolSchema> {
        LocalExtractionTools::get_tool_schemas()
    }

    /// Execute a tool by name. Unknown tools and recoverable failures
    /// come back as error-shaped `ToolResult`s, not `Err`.
    pub async fn execute_tool(&self, tool_name: &str, input: serde_json::Value) -> Result<ToolResult> {
        self.tools
            .execute_tool(tool_name, input)
            .await
            .map_err(|e| TagGrepError::ToolError(e.to_string()))
    }
}

/// Builder for [`TagGrep`].
#[derive(Debug, Default)]
pub struct TagGrepBuilder {
    extra_extensions: Vec<String>,
}

impl TagGrepBuilder {
    /// Add file extensions (without the dot) to the built-in allow-list.
    pub fn extra_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extra_extensions.extend(extensions);
        self
    }

    pub fn build(self) -> Result<TagGrep> {
        let engine = ExtractionEngine::new().with_extra_extensions(self.extra_extensions);
        Ok(TagGrep {
            tools: LocalExtractionTools::new(engine),
        })
    }
}
