//! Core error types for wgslc-util crate
//!
//! This module defines error types used throughout the util crate.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for source file and source map operations
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading a file from disk failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File id not registered in the source map
    #[error("File not found: id {0}")]
    FileNotFound(usize),

    /// Range whose end lies before its begin
    #[error("Invalid range: {begin_line}:{begin_column} is after {end_line}:{end_column}")]
    InvalidRange {
        /// Line of the range begin
        begin_line: u32,
        /// Column of the range begin
        begin_column: u32,
        /// Line of the range end
        end_line: u32,
        /// Column of the range end
        end_column: u32,
    },

    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber {
        /// Requested 1-based line
        line: usize,
        /// Number of lines in the file
        max_lines: usize,
    },
}

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
