use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// The two ways a stretch of source text can fail to scan.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// Digits running straight into letters, like `123abc`.
    #[error("Invalid Identifier")]
    InvalidIdentifier,
    /// A single character no token pattern accepts.
    #[error("Unknown Token")]
    UnknownToken,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalError {
    pub line: u32,
    pub text: String,
    pub kind: LexicalErrorKind,
}

impl LexicalError {
    pub fn new(kind: LexicalErrorKind, text: String, line: u32) -> Self {
        LexicalError { line, text, kind }
    }
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line: {} Error in Token Text: {} Token Type: {}",
            self.line, self.text, self.kind
        )
    }
}

/// A diagnostic produced by the parser, anchored to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    internal_error: ErrorImpl,
    line: u32,
}

impl ParseError {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        ParseError {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingConstruct { .. } => "MissingConstruct",
            ErrorImpl::UnexpectedEnd => "UnexpectedEnd",
        }
    }

    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line: {} Error: {}", self.line, self.internal_error)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("Invalid identifier \"{text}\"")]
    InvalidIdentifier { text: String },
    #[error("Unexpected token \"{token}\"")]
    UnexpectedToken { token: String },
    #[error("Missing {construct}")]
    MissingConstruct { construct: String },
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

/// Failures of the command-line driver, outside the scanner and parser.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("File '{}' not found", path.display())]
    FileNotFound { path: PathBuf },
    #[error("could not read '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("could not read file name from stdin: {0}")]
    Prompt(#[from] io::Error),
}

impl DriverError {
    pub fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            DriverError::FileNotFound { path }
        } else {
            DriverError::Io { path, source }
        }
    }
}
