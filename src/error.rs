use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mapgeom operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mapgeom::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mapgeom::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Decode error with {path}: {message}")]
    #[diagnostic(code(mapgeom::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mapgeom::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Convert error: {message}")]
    #[diagnostic(code(mapgeom::convert))]
    Convert {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
