use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dpx operations
#[derive(Error, Diagnostic, Debug)]
pub enum DpxError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dpx::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dpx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unknown density tier '{name}'")]
    #[diagnostic(code(dpx::density))]
    InvalidDensity {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("'{name}' is fully transparent; trimming leaves an empty canvas")]
    #[diagnostic(code(dpx::trim))]
    EmptyArtwork { name: String },

    #[error("Failed to create directory {path}: {message}")]
    #[diagnostic(code(dpx::writer))]
    DirectoryCreate {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to write {path}: {message}")]
    #[diagnostic(code(dpx::writer))]
    EncodeWrite {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("No artwork selected: {message}")]
    #[diagnostic(code(dpx::source))]
    NoSelection {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(dpx::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dpx::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Export error: {message}")]
    #[diagnostic(code(dpx::export))]
    Export {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DpxError>;
