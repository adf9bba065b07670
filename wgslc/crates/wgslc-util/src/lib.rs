//! wgslc-util - Core Utilities and Foundation Types
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! This crate provides the foundation types shared by every phase of the
//! wgslc shader front-end: where a piece of text came from, how to report a
//! problem with it, and the error types for the operations that can fail
//! outside of the compilation pipeline itself (loading files, looking up
//! file ids).
//!
//! DESIGN PRINCIPLES:
//! ------------------
//! 1. IMMUTABLE INPUT
//!    A [`SourceFile`] is built once per compilation unit and never mutated.
//!    Phases borrow it; nothing inside the front-end owns a copy.
//!
//! 2. LINE-ORIENTED LOCATIONS
//!    Every location is a 1-based (line, column) pair. Columns count bytes,
//!    not characters, so a location can be mapped back to the raw buffer
//!    without decoding anything.
//
// ============================================================================
// SOURCE LOCATIONS
// ============================================================================
//
// LAYOUT:
// -------
// ```
// SourceFile
// ┌───────────────────────────────────────────────┐
// │ content: "fn main() {\n  let x = 1;\n}\n"      │
// │ lines:   [0..11] [12..24] [25..26]            │
// └───────────────────────────────────────────────┘
//
// Span
// ┌──────────┬──────────────────────────────────┐
// │ file_id  │ range: begin (line, col)          │
// │          │        end   (line, col)          │
// └──────────┴──────────────────────────────────┘
// ```
//
// The end of a range is the location immediately after the last byte of the
// lexeme, so an empty range has `begin == end`.
//
// ============================================================================
// DIAGNOSTICS
// ============================================================================
//
// Phases never print. They build a [`Diagnostic`] (usually through a
// [`DiagnosticBuilder`]) and hand it to a [`Handler`], which collects them
// for the driver to render.

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult, SourceError, SourceResult};
pub use span::{FileId, SourceFile, SourceLocation, SourceMap, SourceRange, Span};

// Re-export commonly used types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;

static_assertions::assert_impl_all!(SourceFile: Send, Sync);
static_assertions::assert_impl_all!(Span: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_are_usable() {
        let mut map: FxHashMap<&str, FileId> = FxHashMap::default();
        map.insert("main.wgsl", FileId(0));
        assert_eq!(map.get("main.wgsl"), Some(&FileId(0)));

        let mut set: FxHashSet<u32> = FxHashSet::default();
        assert!(set.insert(1));
        assert!(!set.insert(1));
    }

    #[test]
    fn test_diagnostic_against_source_file() {
        let file = SourceFile::new(3, "shader.wgsl", "let x = 1;\nlet $ = 2;");
        let span = Span::new(FileId(3), SourceLocation::new(2, 5), SourceLocation::new(2, 6));
        let handler = Handler::new();

        DiagnosticBuilder::error("invalid character found")
            .span(span)
            .snippet(SourceSnippet::from_file(&file, span))
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].snippets[0].line, "let $ = 2;");
        assert_eq!(diags[0].snippets[0].start_column, 5);
    }
}
