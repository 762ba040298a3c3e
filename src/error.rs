use miette::Diagnostic;
use thiserror::Error;

/// Result type for deobfuscator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Custom error types for the autorun.inf deobfuscator
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum Error {
    #[error("I/O error: {0}")]
    #[diagnostic(code(autorun_inf::io_error))]
    Io(String),

    #[error("Failed to load {path}: {message}")]
    #[diagnostic(code(autorun_inf::load_error))]
    Load { path: String, message: String },

    #[error("Parse error at line {line}: {message}")]
    #[diagnostic(code(autorun_inf::parse_error))]
    Parse { line: usize, message: String },
}

impl Error {
    /// Create a load error for the given input path
    pub fn load(path: &std::path::Path, message: impl Into<String>) -> Self {
        Error::Load {
            path: path.display().to_string(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
