use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::{
    cli_types::{ExtractArgs, InstructionsArgs},
    engine::{render_matches, ExtractionEngine},
    instructions,
    query::{Combinator, Query},
};

pub struct CliApp {
    engine: ExtractionEngine,
    verbose: bool,
}

impl CliApp {
    pub fn new(verbose: bool, colors_enabled: bool) -> Self {
        info!("Initializing taggrep CLI");
        if !colors_enabled {
            colored::control::set_override(false);
        }
        Self {
            engine: ExtractionEngine::new(),
            verbose,
        }
    }

    pub async fn extract(&self, args: ExtractArgs) -> Result<()> {
        let start_time = Instant::now();

        if self.verbose {
            self.print_info(&format!("Scanning directory: {}", args.path.display()));
            let parsed = Query::parse(&args.query);
            let combinator = match parsed.combinator {
                Combinator::And => "AND",
                Combinator::Or => "OR",
            };
            self.print_info(&format!(
                "Query: {:?} ({} scope requirement(s), combinator {})",
                args.query,
                parsed.requirements.len(),
                combinator
            ));
            if !args.no_gitignore {
                self.print_info("Honoring .gitignore at the scan root");
            }
        }

        let folder = args
            .path
            .canonicalize()
            .with_context(|| format!("Invalid path: {}", args.path.display()))?;

        let matches = self
            .engine
            .extract(&folder, &args.query, !args.no_gitignore)
            .await
            .with_context(|| format!("Failed to extract from {:?}", args.path))?;

        println!("{}", render_matches(&matches));

        if self.verbose {
            self.print_success(&format!(
                "{} matching block(s) in {:?}",
                matches.len(),
                start_time.elapsed()
            ));
        }

        Ok(())
    }

    pub async fn instructions(&self, args: InstructionsArgs) -> Result<()> {
        let guidance = instructions::ensure_instructions(&args.path)
            .await
            .with_context(|| format!("Failed to prepare instructions in {:?}", args.path))?;

        println!("{}", guidance);
        Ok(())
    }

    // Utility methods for consistent output formatting
    fn print_info(&self, message: &str) {
        eprintln!("{} {}", "info:".blue().bold(), message);
    }

    fn print_success(&self, message: &str) {
        eprintln!("{} {}", "ok:".green().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_source_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    #[tokio::test]
    async fn test_extract_command() {
        let temp_dir = TempDir::new().unwrap();
        create_test_source_file(
            &temp_dir,
            "auth.ts",
            "// [feature:auth]\nfunction login() {}",
        );

        let app = CliApp::new(false, false);
        let args = ExtractArgs {
            path: temp_dir.path().to_path_buf(),
            query: "[feature:auth]".to_string(),
            no_gitignore: false,
        };

        let result = app.extract(args).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_extract_nonexistent_path_fails_with_context() {
        let app = CliApp::new(false, false);
        let args = ExtractArgs {
            path: PathBuf::from("/nonexistent/taggrep/root"),
            query: String::new(),
            no_gitignore: false,
        };

        let result = app.extract(args).await;
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Invalid path"));
    }

    #[tokio::test]
    async fn test_instructions_command() {
        let temp_dir = TempDir::new().unwrap();

        let app = CliApp::new(true, false);
        let args = InstructionsArgs {
            path: temp_dir.path().to_path_buf(),
        };

        let result = app.instructions(args).await;
        assert!(result.is_ok());
        assert!(temp_dir.path().join("CODE_TAGS.md").exists());
    }
}
