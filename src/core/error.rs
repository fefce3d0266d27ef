use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI rendering error: {0}")]
    Render(String),

    #[error("Terminal UI error: {0}")]
    Terminal(String),

    #[error("Invalid project data: {0}")]
    InvalidProject(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Async task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Creates a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a new render error
    pub fn render<S: Into<String>>(msg: S) -> Self {
        Self::Render(msg.into())
    }

    /// Creates a new terminal error
    pub fn terminal<S: Into<String>>(msg: S) -> Self {
        Self::Terminal(msg.into())
    }

    /// Creates a new export error
    pub fn export<S: Into<String>>(msg: S) -> Self {
        Self::Export(msg.into())
    }

    /// Returns the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Render(_) | Self::Terminal(_) => "ui",
            Self::InvalidProject(_) => "validation",
            Self::Export(_) => "export",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Join(_) => "async",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DashError::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(DashError::render("bad frame").category(), "ui");
        assert_eq!(
            DashError::InvalidProject("empty name".to_string()).category(),
            "validation"
        );
        assert_eq!(DashError::export("no rows").category(), "export");
    }

    #[test]
    fn test_terminal_error() {
        let err = DashError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal UI error: raw mode unavailable");
        assert_eq!(err.category(), "ui");
    }

    #[test]
    fn test_anyhow_context_preserves_source() {
        use anyhow::Context;

        let result: std::result::Result<(), DashError> =
            Err(DashError::terminal("raw mode unavailable"));
        let err = result.context("resdash exited with an error").unwrap_err();
        assert_eq!(format!("{}", err), "resdash exited with an error");
        assert!(format!("{:#}", err).contains("Terminal UI error"));
    }
}
