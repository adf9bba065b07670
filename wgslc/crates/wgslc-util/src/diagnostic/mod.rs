//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! front-end diagnostics (errors, warnings and notes).
//!
//! # Examples
//!
//! ```
//! use wgslc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use wgslc_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unterminated block comment")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use codes::{
    E_LEXER_INVALID_CHARACTER, E_LEXER_INVALID_ENCODING, E_LEXER_INVALID_TOKEN,
    E_LEXER_MALFORMED_NUMBER, E_LEXER_NUMBER_OUT_OF_RANGE, E_LEXER_UNTERMINATED_COMMENT,
};

use crate::span::{SourceMap, Span};
use parking_lot::Mutex;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use wgslc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that stops compilation
    Error,
    /// A warning that doesn't stop compilation
    Warning,
    /// Additional information about a diagnostic
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Render the diagnostic for a terminal.
    ///
    /// The header names the file when `sources` knows the span's file id.
    /// Snippets, notes and helps follow on their own lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use wgslc_util::diagnostic::Diagnostic;
    /// use wgslc_util::span::{SourceLocation, SourceMap, Span};
    ///
    /// let mut sources = SourceMap::new();
    /// let id = sources.add_file("a.wgsl", "let $;");
    /// let span = Span::new(id, SourceLocation::new(1, 5), SourceLocation::new(1, 6));
    /// let text = Diagnostic::error("invalid character found", span).render(&sources);
    /// assert!(text.starts_with("a.wgsl:1:5: error: invalid character found"));
    /// ```
    pub fn render(&self, sources: &SourceMap) -> String {
        let mut out = String::new();
        if let Some(file) = sources.get(self.span.file_id) {
            out.push_str(&format!("{}:{}: ", file.name(), self.span.begin()));
        }
        match self.code {
            Some(code) => out.push_str(&format!("{}[{}]: {}", self.level, code, self.message)),
            None => out.push_str(&format!("{}: {}", self.level, self.message)),
        }
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str(&format!("\n  = note: {}", note));
        }
        for help in &self.helps {
            out.push_str(&format!("\n  = help: {}", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.span.file_id.index(), self.span.begin())?;
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. It is `Sync`, so several lexers running on different threads
/// may report into one handler.
///
/// # Examples
///
/// ```
/// use wgslc_util::diagnostic::{Diagnostic, Handler};
/// use wgslc_util::span::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("invalid UTF-8", Span::DUMMY));
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Mutex<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level == Level::Error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        log::debug!("diagnostic emitted: {}", diagnostic);
        self.diagnostics.lock().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.lock().iter().any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.lock().iter().filter(|d| d.level == Level::Error).count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics.lock().iter().filter(|d| d.level == Level::Warning).count()
    }

    /// Get a copy of all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Remove and return all diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.lock().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(Handler: Send, Sync);
