//! Error types for scene file generation

/// Errors produced while loading profiles or writing scene files
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile parse error
    #[error("Profile parse error: {0}")]
    Parse(String),

    /// Unsupported profile format
    #[error("Unsupported profile format: {0}")]
    UnsupportedFormat(String),
}
