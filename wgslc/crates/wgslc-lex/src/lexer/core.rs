//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, the scanner dispatch and the span
//! helpers shared by the scanners.

use wgslc_util::{FileId, SourceFile, SourceLocation, Span};

use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for WGSL source.
///
/// The lexer pulls one token at a time from a [`SourceFile`]. Scanners are
/// tried in a fixed order and the first to match wins: hex float, hex integer,
/// decimal float, decimal integer, identifier or keyword, punctuation.
///
/// # Example
///
/// ```
/// use wgslc_lex::{Lexer, TokenKind};
/// use wgslc_util::SourceFile;
///
/// let file = SourceFile::new(0, "a.wgsl", "let x = 0x1p4;");
/// let kinds: Vec<_> = Lexer::new(&file).map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Let,
///         TokenKind::Identifier,
///         TokenKind::Equal,
///         TokenKind::FloatLiteral,
///         TokenKind::Semicolon,
///     ]
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    /// Line cursor for source traversal.
    pub(super) cursor: Cursor<'a>,

    /// File id stamped on every span.
    file_id: FileId,

    /// Error behind the most recent error token.
    last_error: Option<LexError>,

    /// Set once the iterator has yielded end of file or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `file`.
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            cursor: Cursor::new(file),
            file_id: file.id(),
            last_error: None,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// At end of input this returns an end-of-file token, and keeps returning
    /// one on later calls. After an error token the position is unspecified
    /// and callers should stop.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = self.scan();
        log::trace!("{}: {:?} {:?}", token.span(), token.kind(), token.value());
        token
    }

    fn scan(&mut self) -> Token<'a> {
        if let Some(token) = self.skip_blankspace_and_comments() {
            return token;
        }

        let token = self
            .try_hex_float()
            .or_else(|| self.try_hex_integer())
            .or_else(|| self.try_float())
            .or_else(|| self.try_integer())
            .or_else(|| self.try_ident())
            .or_else(|| self.try_punctuation());
        if let Some(token) = token {
            return token;
        }

        let error = if self.cursor.is_null() {
            LexError::NullCharacter
        } else {
            LexError::InvalidCharacter
        };
        self.error_at_cursor(error)
    }

    /// Returns the file being lexed.
    #[inline]
    pub fn file(&self) -> &'a SourceFile {
        self.cursor.file()
    }

    /// Returns the location of the next unread byte.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        self.cursor.location()
    }

    /// Returns the error behind the most recent error token, if any.
    #[inline]
    pub fn last_error(&self) -> Option<&LexError> {
        self.last_error.as_ref()
    }

    /// A span from `begin` to the cursor.
    #[inline]
    pub(super) fn span_from(&self, begin: SourceLocation) -> Span {
        self.span_between(begin, self.cursor.location())
    }

    #[inline]
    pub(super) fn span_between(&self, begin: SourceLocation, end: SourceLocation) -> Span {
        Span::new(self.file_id, begin, end)
    }

    /// A zero-width span at `at`.
    #[inline]
    pub(super) fn point_span(&self, at: SourceLocation) -> Span {
        Span::point(self.file_id, at)
    }

    /// Records `error` and turns it into an error token covering `span`.
    pub(super) fn error_token(&mut self, span: Span, error: LexError) -> Token<'a> {
        log::debug!("{span}: {error}");
        let token = Token::error(span, error.to_string());
        self.last_error = Some(error);
        token
    }

    /// An error token pointing at the cursor.
    pub(super) fn error_at_cursor(&mut self, error: LexError) -> Token<'a> {
        let span = self.point_span(self.cursor.location());
        self.error_token(span, error)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields tokens up to, but not including, end of file.
    ///
    /// An error token is yielded once and ends the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        match token.kind() {
            TokenKind::Eof => {
                self.finished = true;
                None
            },
            TokenKind::Error => {
                self.finished = true;
                Some(token)
            },
            _ => Some(token),
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use wgslc_util::FileId;

    fn loc(line: u32, column: u32) -> SourceLocation {
        SourceLocation::new(line, column)
    }

    #[test]
    fn test_empty_source_is_eof() {
        let file = SourceFile::new(0, "empty.wgsl", "");
        let mut lexer = Lexer::new(&file);
        let token = lexer.next_token();
        assert!(token.is_eof());
        assert_eq!(token.range().begin, loc(1, 1));
        assert_eq!(token.range().end, loc(1, 1));
        assert!(lexer.next_token().is_eof());
    }

    #[test]
    fn test_eof_after_trailing_blankspace() {
        let file = SourceFile::new(0, "a.wgsl", "a \t\n  ");
        let mut lexer = Lexer::new(&file);
        assert!(lexer.next_token().is_identifier());
        let eof = lexer.next_token();
        assert!(eof.is_eof());
        assert_eq!(eof.range().begin, loc(2, 3));
    }

    #[test]
    fn test_invalid_character() {
        let file = SourceFile::new(0, "a.wgsl", "  $");
        let mut lexer = Lexer::new(&file);
        let token = lexer.next_token();
        assert!(token.is_error());
        assert_eq!(token.to_str(), "invalid character found");
        assert_eq!(token.range().begin, loc(1, 3));
        assert_eq!(token.range().end, loc(1, 3));
        assert_eq!(lexer.last_error(), Some(&LexError::InvalidCharacter));
    }

    #[test]
    fn test_null_character() {
        let file = SourceFile::new(0, "a.wgsl", "a\0b");
        let mut lexer = Lexer::new(&file);
        assert!(lexer.next_token().is_identifier());
        let token = lexer.next_token();
        assert_eq!(token.to_str(), "null character found");
        assert_eq!(token.range().begin, loc(1, 2));
    }

    #[test]
    fn test_spans_carry_file_id() {
        let file = SourceFile::new(7, "a.wgsl", "x");
        let token = Lexer::new(&file).next_token();
        assert_eq!(token.span().file_id, FileId(7));
    }

    #[test]
    fn test_iterator_excludes_eof() {
        let file = SourceFile::new(0, "a.wgsl", "a b");
        let tokens: Vec<_> = Lexer::new(&file).collect();
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let file = SourceFile::new(0, "a.wgsl", "a $ b");
        let mut lexer = Lexer::new(&file);
        assert!(lexer.next().is_some_and(|t| t.is_identifier()));
        assert!(lexer.next().is_some_and(|t| t.is_error()));
        assert!(lexer.next().is_none());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_location_tracks_cursor() {
        let file = SourceFile::new(0, "a.wgsl", "ab\n  cd");
        let mut lexer = Lexer::new(&file);
        assert_eq!(lexer.location(), loc(1, 1));
        lexer.next_token();
        assert_eq!(lexer.location(), loc(1, 3));
        lexer.next_token();
        assert_eq!(lexer.location(), loc(2, 5));
        assert_eq!(lexer.file().name(), "a.wgsl");
    }
}
