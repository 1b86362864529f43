use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TagGrepError>;

/// Errors surfaced across the public API boundary.
///
/// Most failure modes inside the engine degrade to "fewer results"
/// instead of erroring: a missing `.gitignore` becomes an empty rule set,
/// an unreadable file contributes no blocks, and a query with no bracket
/// groups matches everything. The variants here cover what remains.
#[derive(Debug, Error)]
pub enum TagGrepError {
    #[error("invalid root path: {0}")]
    InvalidRoot(String),

    #[error("tool error: {0}")]
    ToolError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_variants() {
        let error = TagGrepError::InvalidRoot("/missing".to_string());
        match error {
            TagGrepError::InvalidRoot(path) => assert_eq!(path, "/missing"),
            _ => panic!("Unexpected error type"),
        }

        let error = TagGrepError::ToolError("test".to_string());
        match error {
            TagGrepError::ToolError(msg) => assert_eq!(msg, "test"),
            _ => panic!("Unexpected error type"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = TagGrepError::InvalidRoot("/missing".to_string());
        assert_eq!(error.to_string(), "invalid root path: /missing");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: TagGrepError = io.into();
        assert!(matches!(error, TagGrepError::Io(_)));
    }
}
