use miette::Diagnostic;
use thiserror::Error;

/// Main error type for brandframe operations
#[derive(Error, Diagnostic, Debug)]
pub enum BrandError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(brandframe::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Input file not found: {path}")]
    #[diagnostic(code(brandframe::input), help("Check the path and try again"))]
    InputNotFound { path: std::path::PathBuf },

    #[error("Colour '{name}' not found. Available: {}", .valid.join(", "))]
    #[diagnostic(code(brandframe::colour))]
    InvalidColour { name: String, valid: Vec<String> },

    #[error("Image error with {path}: {message}")]
    #[diagnostic(code(brandframe::image))]
    Image {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Unsupported output format for {path}")]
    #[diagnostic(code(brandframe::format))]
    UnsupportedFormat {
        path: std::path::PathBuf,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(brandframe::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(brandframe::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, BrandError>;
