//! Identifier and keyword lexing.
//!
//! Identifiers are Unicode: an `XID_Start` code point or `_`, followed by
//! `XID_Continue` code points. `_` on its own is punctuation and identifiers
//! may not start with `__`.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{decode_utf8, is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Identifier tokens borrow their text from the source line. After
    /// reading the identifier, checks if it matches a reserved keyword.
    pub(crate) fn try_ident(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let start = self.cursor.pos();
        if self.cursor.is_eol() {
            return None;
        }

        let Some((c, width)) = decode_utf8(self.cursor.rest()) else {
            self.cursor.advance(1);
            return Some(self.error_token(self.point_span(begin), LexError::InvalidUtf8));
        };
        if !is_ident_start(c) {
            return None;
        }
        self.cursor.advance(width);

        while !self.cursor.is_eol() {
            let Some((c, width)) = decode_utf8(self.cursor.rest()) else {
                self.cursor.advance(1);
                return Some(self.error_token(self.point_span(begin), LexError::InvalidUtf8));
            };
            if !is_ident_continue(c) {
                break;
            }
            self.cursor.advance(width);
        }

        if self.cursor.at(start) == b'_'
            && (self.cursor.pos() == start + 1 || self.cursor.at(start + 1) == b'_')
        {
            self.cursor.set_pos(start);
            return None;
        }

        let span = self.span_from(begin);
        let bytes = &self.cursor.current_line()[start..self.cursor.pos()];
        let Ok(text) = std::str::from_utf8(bytes) else {
            return Some(self.error_token(span, LexError::InvalidUtf8));
        };

        let token = TokenKind::from_keyword(text)
            .map(|kind| Token::keyword(kind, span))
            .unwrap_or_else(|| Token::identifier(span, text));
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use wgslc_util::{SourceFile, SourceLocation};

    fn lex_all(source: &str) -> Vec<Token<'static>> {
        let file = SourceFile::new(0, "test.wgsl", source);
        Lexer::new(&file).map(Token::into_owned).collect()
    }

    fn lex_one(source: &str) -> Token<'static> {
        let tokens = lex_all(source);
        assert_eq!(tokens.len(), 1, "{source}: {tokens:?}");
        tokens.into_iter().next().unwrap()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_one("foo_bar_123");
        assert!(token.is_identifier());
        assert_eq!(token.to_str(), "foo_bar_123");
        assert_eq!(token.range().end, SourceLocation::new(1, 12));
    }

    #[test]
    fn test_unicode_identifiers() {
        for source in ["αβγ", "𝖋𝖔𝖔", "привет", "d\u{300}"] {
            let token = lex_one(source);
            assert!(token.is_identifier(), "{source}");
            assert_eq!(token.to_str(), source);
            assert_eq!(token.range().end.column as usize, source.len() + 1);
        }
    }

    #[test]
    fn test_keywords() {
        assert_eq!(lex_one("fn").kind(), TokenKind::Fn);
        assert_eq!(lex_one("f32").kind(), TokenKind::F32);
        assert_eq!(
            lex_one("texture_depth_multisampled_2d").kind(),
            TokenKind::TextureDepthMultisampled2d
        );
        assert_eq!(lex_one("sampler_comparison").kind(), TokenKind::ComparisonSampler);
    }

    #[test]
    fn test_static_assert_is_reserved() {
        let token = lex_one("static_assert");
        assert_eq!(token.kind(), TokenKind::StaticAssert);
        assert_eq!(token.to_str(), "static_assert");
        assert!(lex_one("static_asserts").is_identifier());
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let token = lex_one("f32x");
        assert!(token.is_identifier());
        assert_eq!(token.to_str(), "f32x");
        assert!(lex_one("letx").is_identifier());
    }

    #[test]
    fn test_storage_buffer_alias() {
        let token = lex_one("storage_buffer");
        assert_eq!(token.kind(), TokenKind::Storage);
        assert_eq!(token.to_str(), "storage");
        assert_eq!(token.range().end, SourceLocation::new(1, 15));
    }

    #[test]
    fn test_underscore_alone_is_punctuation() {
        assert_eq!(lex_one("_").kind(), TokenKind::Underscore);
    }

    #[test]
    fn test_leading_underscore() {
        let token = lex_one("_x");
        assert!(token.is_identifier());
        assert_eq!(token.to_str(), "_x");
    }

    #[test]
    fn test_double_underscore_splits() {
        let tokens = lex_all("__x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind(), TokenKind::Underscore);
        assert_eq!(tokens[1].to_str(), "_x");
        assert_eq!(tokens[1].range().begin, SourceLocation::new(1, 2));
    }

    #[test]
    fn test_inner_double_underscore_allowed() {
        assert_eq!(lex_one("a__b").to_str(), "a__b");
    }

    #[test]
    fn test_digit_cannot_start_identifier() {
        let tokens = lex_all("1abc");
        assert_eq!(tokens[0].kind(), TokenKind::IntLiteral);
        assert_eq!(tokens[1].to_str(), "abc");
    }

    #[test]
    fn test_invalid_utf8_in_identifier() {
        let file = SourceFile::new(0, "test.wgsl", b"ab\xffc".to_vec());
        let mut lexer = Lexer::new(&file);
        let token = lexer.next_token();
        assert_eq!(token.to_str(), "invalid UTF-8");
        assert_eq!(token.range().begin, SourceLocation::new(1, 1));
        assert_eq!(token.range().end, SourceLocation::new(1, 1));
        assert_eq!(lexer.location(), SourceLocation::new(1, 4));
    }

    #[test]
    fn test_identifier_borrows_source() {
        let file = SourceFile::new(0, "test.wgsl", "name");
        let token = Lexer::new(&file).next_token();
        match token.value() {
            crate::TokenValue::Text(std::borrow::Cow::Borrowed(text)) => assert_eq!(*text, "name"),
            other => panic!("expected borrowed text, got {other:?}"),
        }
    }
}
