use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::engine::{render_matches, ExtractionEngine};
use crate::instructions;

/// Schema describing one tool to an LLM integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// The local tool surface: tag-driven extraction plus the tagging
/// instructions contract, dispatched by tool name.
pub struct LocalExtractionTools {
    engine: ExtractionEngine,
}

impl LocalExtractionTools {
    pub fn new(engine: ExtractionEngine) -> Self {
        Self { engine }
    }

    pub fn get_tool_schemas() -> Vec<ToolSchema> {
        vec![
            ToolSchema {
                name: "extract_tagged_blocks".to_string(),
                description: "Extract code blocks annotated with [scope:tag] comment tags from a project tree, filtered by a boolean tag query".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "folder_path": {
                            "type": "string",
                            "description": "Absolute path to the directory to scan"
                        },
                        "query": {
                            "type": "string",
                            "description": "Tag query, e.g. '[feature:auth]&[layer:service]'. Empty matches every tagged block."
                        },
                        "respect_gitignore": {
                            "type": "boolean",
                            "description": "Whether to honor .gitignore rules at the scan root",
                            "default": true
                        }
                    },
                    "required": ["folder_path", "query"]
                }),
            },
            ToolSchema {
                name: "get_tagging_instructions".to_string(),
                description: "Ensure the tagging contract document exists at the project root and return guidance on annotating and querying tagged code".to_string(),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "root_path": {
                            "type": "string",
                            "description": "Absolute path to the project root"
                        }
                    },
                    "required": ["root_path"]
                }),
            },
        ]
    }

    pub async fn execute_tool(&self, tool_name: &str, input: Value) -> Result<ToolResult> {
        match tool_name {
            "extract_tagged_blocks" => self.extract_tagged_blocks(input).await,
            "get_tagging_instructions" => self.get_tagging_instructions(input).await,
            _ => Ok(ToolResult::error(format!("Unknown tool: {}", tool_name))),
        }
    }

    async fn extract_tagged_blocks(&self, input: Value) -> Result<ToolResult> {
        let extract_input: ExtractInput = serde_json::from_value(input)
            .context("Invalid extract_tagged_blocks input")?;

        let respect_gitignore = extract_input.respect_gitignore.unwrap_or(true);
        let folder = Path::new(&extract_input.folder_path);

        match self
            .engine
            .extract(folder, &extract_input.query, respect_gitignore)
            .await
        {
            Ok(matches) => {
                let result = json!({
                    "status": "success",
                    "folder_path": extract_input.folder_path,
                    "query": extract_input.query,
                    "matches": matches.len(),
                    "content": render_matches(&matches),
                });
                Ok(ToolResult::success(result))
            }
            Err(e) => {
                let result = json!({
                    "status": "error",
                    "folder_path": extract_input.folder_path,
                    "error": format!("Extraction failed: {}", e),
                });
                Ok(ToolResult::error_with_data(result))
            }
        }
    }

    async fn get_tagging_instructions(&self, input: Value) -> Result<ToolResult> {
        let instructions_input: InstructionsInput = serde_json::from_value(input)
            .context("Invalid get_tagging_instructions input")?;

        match instructions::ensure_instructions(Path::new(&instructions_input.root_path)).await {
            Ok(guidance) => {
                let result = json!({
                    "status": "success",
                    "root_path": instructions_input.root_path,
                    "guidance": guidance,
                });
                Ok(ToolResult::success(result))
            }
            Err(e) => {
                let result = json!({
                    "status": "error",
                    "root_path": instructions_input.root_path,
                    "error": format!("Failed to prepare instructions: {}", e),
                });
                Ok(ToolResult::error_with_data(result))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub data: Value,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: json!({}),
            error: Some(message),
        }
    }

    pub fn error_with_data(data: Value) -> Self {
        Self {
            success: false,
            data,
            error: None,
        }
    }
}

// Input types for tool functions
#[derive(Debug, Deserialize)]
struct ExtractInput {
    folder_path: String,
    query: String,
    respect_gitignore: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct InstructionsInput {
    root_path: String,
}
