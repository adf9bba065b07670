//! Blankspace and comment skipping.
//!
//! Block comments nest. A line comment runs to the end of its line. Both
//! reject embedded NUL bytes.

use wgslc_util::SourceLocation;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{decode_utf8, is_blankspace};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips blankspace, line breaks and comments.
    ///
    /// Returns an end-of-file token once the input is exhausted, an error
    /// token on malformed input, or `None` when a token starts at the cursor.
    pub(super) fn skip_blankspace_and_comments(&mut self) -> Option<Token<'a>> {
        loop {
            let before = self.cursor.location();
            while !self.cursor.is_eof() {
                if self.cursor.is_eol() {
                    self.cursor.advance_line();
                    continue;
                }

                let Some((c, width)) = decode_utf8(self.cursor.rest()) else {
                    return Some(self.error_at_cursor(LexError::InvalidUtf8));
                };
                if !is_blankspace(c) {
                    break;
                }
                self.cursor.advance(width);
            }

            if let Some(error) = self.skip_comment() {
                return Some(error);
            }

            if self.cursor.location() == before {
                break;
            }
        }

        if self.cursor.is_eof() {
            let span = self.point_span(self.cursor.location());
            return Some(Token::new(TokenKind::Eof, span));
        }
        None
    }

    /// Skips one comment at the cursor, if there is one.
    fn skip_comment(&mut self) -> Option<Token<'a>> {
        let pos = self.cursor.pos();

        if self.cursor.matches(pos, b"//") {
            while !self.cursor.is_eol() {
                if self.cursor.is_null() {
                    return Some(self.error_at_cursor(LexError::NullCharacter));
                }
                self.cursor.advance(1);
            }
            return None;
        }

        if !self.cursor.matches(pos, b"/*") {
            return None;
        }

        // Unterminated comments are reported at the opening `/*`
        let begin = self.cursor.location();
        let opening = self.span_between(begin, SourceLocation::new(begin.line, begin.column + 1));

        self.cursor.advance(2);
        let mut depth = 1usize;
        while !self.cursor.is_eof() && depth > 0 {
            let pos = self.cursor.pos();
            if self.cursor.matches(pos, b"/*") {
                self.cursor.advance(2);
                depth += 1;
            } else if self.cursor.matches(pos, b"*/") {
                self.cursor.advance(2);
                depth -= 1;
            } else if self.cursor.is_eol() {
                self.cursor.advance_line();
            } else if self.cursor.is_null() {
                return Some(self.error_at_cursor(LexError::NullCharacter));
            } else {
                self.cursor.advance(1);
            }
        }

        if depth > 0 {
            return Some(self.error_token(opening, LexError::UnterminatedBlockComment));
        }
        None
    }
}
