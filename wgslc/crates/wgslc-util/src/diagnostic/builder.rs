//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for attaching the
//! offending source line.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the columns of
/// the highlighted range.
///
/// # Examples
///
/// ```
/// use wgslc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("let x = 1;", 1, 5, 6, Some("here"));
/// assert_eq!(snippet.format(), "  1 | let x = 1;\n    |     ^ here");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column just past the issue (1-based)
    pub end_column: usize,
    /// Optional label to display under the highlighted range
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Create a snippet that highlights a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column: column,
            end_column: column,
            label: None,
        }
    }

    /// Create a snippet for the first line of `span` in `file`.
    ///
    /// A span on a line the file does not have yields an empty line (this is
    /// the case for an end-of-file location in an empty file). When the span
    /// continues onto later lines, the highlight runs to the end of the first
    /// line.
    pub fn from_file(file: &SourceFile, span: Span) -> Self {
        let begin = span.begin();
        let end = span.end();
        let line = (begin.line as usize)
            .checked_sub(1)
            .and_then(|index| file.line_text(index))
            .map(|text| text.into_owned())
            .unwrap_or_default();

        let start_column = begin.column as usize;
        let end_column = if end.line == begin.line {
            end.column as usize
        } else {
            line.len() + 1
        };

        Self {
            line,
            line_number: begin.line as usize,
            start_column,
            end_column: end_column.max(start_column),
            label: None,
        }
    }

    /// Set the label for this snippet
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Format the snippet for display
    ///
    /// Returns the source line followed by a caret (^) line under the
    /// highlighted columns. An empty range still gets one caret.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = String::new();

        result.push_str(&format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push_str(&format!(" {}", label));
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use wgslc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use wgslc_util::span::Span;
///
/// let diag = DiagnosticBuilder::error("invalid character found")
///     .code(DiagnosticCode::E_LEXER_INVALID_CHARACTER)
///     .span(Span::DUMMY)
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::{FileId, SourceLocation};

    #[test]
    fn test_source_snippet_point() {
        let snippet = SourceSnippet::point("let x = 42;", 1, 5);
        assert_eq!(snippet.start_column, 5);
        assert_eq!(snippet.end_column, 5);
        assert_eq!(snippet.label, None);
    }

    #[test]
    fn test_source_snippet_with_label() {
        let snippet = SourceSnippet::point("x", 1, 1).with_label("here");
        assert_eq!(snippet.label.as_deref(), Some("here"));
    }

    #[test]
    fn test_source_snippet_format_range() {
        let snippet = SourceSnippet::new("var<private> v : f32;", 12, 18, 21, None::<String>);
        let expected = format!(" 12 | var<private> v : f32;\n    | {}^^^", " ".repeat(17));
        assert_eq!(snippet.format(), expected);
    }

    #[test]
    fn test_source_snippet_format_empty_range() {
        let snippet = SourceSnippet::point("abc", 1, 4);
        assert!(snippet.format().ends_with("   ^"));
    }

    #[test]
    fn test_from_file_single_line() {
        let file = SourceFile::new(0, "a.wgsl", "fn f() {}\nlet y = 0x;");
        let span = Span::new(FileId(0), SourceLocation::new(2, 9), SourceLocation::new(2, 11));
        let snippet = SourceSnippet::from_file(&file, span);
        assert_eq!(snippet.line, "let y = 0x;");
        assert_eq!(snippet.line_number, 2);
        assert_eq!(snippet.start_column, 9);
        assert_eq!(snippet.end_column, 11);
    }

    #[test]
    fn test_from_file_multi_line_span() {
        let file = SourceFile::new(0, "a.wgsl", "x /* open\nstill open");
        let span = Span::new(FileId(0), SourceLocation::new(1, 3), SourceLocation::new(2, 11));
        let snippet = SourceSnippet::from_file(&file, span);
        assert_eq!(snippet.line, "x /* open");
        assert_eq!(snippet.end_column, 10);
    }

    #[test]
    fn test_from_file_missing_line() {
        let file = SourceFile::new(0, "empty.wgsl", "");
        let span = Span::point(FileId(0), SourceLocation::new(1, 1));
        let snippet = SourceSnippet::from_file(&file, span);
        assert_eq!(snippet.line, "");
        assert_eq!(snippet.start_column, 1);
    }

    #[test]
    fn test_builder_fluent() {
        let snippet = SourceSnippet::new("fn main() {", 1, 1, 3, Some("here"));

        let diag = DiagnosticBuilder::error("unexpected token")
            .code(DiagnosticCode::E_LEXER_INVALID_TOKEN)
            .span(Span::new(FileId(1), SourceLocation::new(1, 1), SourceLocation::new(1, 3)))
            .note("lexing stopped here")
            .help("try checking the syntax")
            .snippet(snippet)
            .build();

        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(DiagnosticCode::E_LEXER_INVALID_TOKEN));
        assert_eq!(diag.span.file_id, FileId(1));
        assert_eq!(diag.notes, vec!["lexing stopped here"]);
        assert_eq!(diag.helps, vec!["try checking the syntax"]);
        assert_eq!(diag.snippets.len(), 1);
    }

    #[test]
    fn test_builder_warning() {
        let diag = DiagnosticBuilder::warning("test warning").build();
        assert_eq!(diag.level, Level::Warning);
        assert_eq!(diag.span, Span::DUMMY);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::error("type error")
            .code(DiagnosticCode::E_LEXER_MALFORMED_NUMBER)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(DiagnosticCode::E_LEXER_MALFORMED_NUMBER));
    }
}
