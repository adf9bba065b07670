//! Operator and punctuation lexing.
//!
//! Punctuation is matched against a table in priority order. Longer lexemes
//! come before their prefixes, so the first match is the longest one. The
//! compound shift assignments are not in the table: `>>=` lexes as `>>` `=`.

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Punctuation in match order. Each lexeme is the kind's name.
const PUNCTUATION: &[TokenKind] = &[
    TokenKind::Attr,
    TokenKind::ParenLeft,
    TokenKind::ParenRight,
    TokenKind::BracketLeft,
    TokenKind::BracketRight,
    TokenKind::BraceLeft,
    TokenKind::BraceRight,
    TokenKind::AndAnd,
    TokenKind::AndEqual,
    TokenKind::And,
    TokenKind::DivisionEqual,
    TokenKind::ForwardSlash,
    TokenKind::NotEqual,
    TokenKind::Bang,
    TokenKind::Colon,
    TokenKind::Comma,
    TokenKind::EqualEqual,
    TokenKind::Equal,
    TokenKind::GreaterThanEqual,
    TokenKind::ShiftRight,
    TokenKind::GreaterThan,
    TokenKind::LessThanEqual,
    TokenKind::ShiftLeft,
    TokenKind::LessThan,
    TokenKind::ModuloEqual,
    TokenKind::Mod,
    TokenKind::Arrow,
    TokenKind::MinusMinus,
    TokenKind::MinusEqual,
    TokenKind::Minus,
    TokenKind::Period,
    TokenKind::PlusPlus,
    TokenKind::PlusEqual,
    TokenKind::Plus,
    TokenKind::OrOr,
    TokenKind::OrEqual,
    TokenKind::Or,
    TokenKind::Semicolon,
    TokenKind::TimesEqual,
    TokenKind::Star,
    TokenKind::Tilde,
    TokenKind::Underscore,
    TokenKind::XorEqual,
    TokenKind::Xor,
];

impl<'a> Lexer<'a> {
    /// Lexes punctuation or an operator.
    ///
    /// Handles every lexeme in the punctuation table, longest first.
    pub(crate) fn try_punctuation(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let pos = self.cursor.pos();

        let kind = PUNCTUATION
            .iter()
            .copied()
            .find(|kind| self.cursor.matches(pos, kind.name().as_bytes()))?;

        self.cursor.advance(kind.name().len());
        Some(Token::new(kind, self.span_from(begin)))
    }
}

#[cfg(test)]
mod tests {
    use super::PUNCTUATION;
    use crate::{Lexer, TokenKind};
    use wgslc_util::{SourceFile, SourceLocation};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let file = SourceFile::new(0, "test.wgsl", source);
        Lexer::new(&file).map(|t| t.kind()).collect()
    }

    #[test]
    fn test_table_covers_all_punctuation() {
        for kind in PUNCTUATION {
            assert!(kind.is_punctuation(), "{kind:?}");
        }
        // Everything except `>>=` and `<<=`
        let count = (TokenKind::ShiftLeftEqual as u8 - TokenKind::And as u8 + 1) as usize;
        assert_eq!(PUNCTUATION.len(), count - 2);
        assert!(!PUNCTUATION.contains(&TokenKind::ShiftRightEqual));
        assert!(!PUNCTUATION.contains(&TokenKind::ShiftLeftEqual));
    }

    #[test]
    fn test_longer_lexemes_come_first() {
        for (i, earlier) in PUNCTUATION.iter().enumerate() {
            for later in &PUNCTUATION[i + 1..] {
                assert!(
                    !later.name().starts_with(earlier.name()),
                    "{earlier:?} shadows {later:?}"
                );
            }
        }
    }

    #[test]
    fn test_every_lexeme_round_trips() {
        for &kind in PUNCTUATION {
            assert_eq!(kinds(kind.name()), [kind], "{}", kind.name());
        }
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(kinds(">>="), [TokenKind::ShiftRight, TokenKind::Equal]);
        assert_eq!(kinds("<<="), [TokenKind::ShiftLeft, TokenKind::Equal]);
        assert_eq!(
            kinds("a >>= b"),
            [
                TokenKind::Identifier,
                TokenKind::ShiftRight,
                TokenKind::Equal,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(kinds("&&&"), [TokenKind::AndAnd, TokenKind::And]);
        assert_eq!(kinds("->>"), [TokenKind::Arrow, TokenKind::GreaterThan]);
        assert_eq!(kinds("!=="), [TokenKind::NotEqual, TokenKind::Equal]);
        assert_eq!(kinds("+++"), [TokenKind::PlusPlus, TokenKind::Plus]);
    }

    #[test]
    fn test_template_close() {
        assert_eq!(
            kinds("vec2<vec2<f32>>"),
            [
                TokenKind::Vec2,
                TokenKind::LessThan,
                TokenKind::Vec2,
                TokenKind::LessThan,
                TokenKind::F32,
                TokenKind::ShiftRight,
            ]
        );
    }

    #[test]
    fn test_punctuation_span() {
        let file = SourceFile::new(0, "test.wgsl", "a <<= b");
        let token = Lexer::new(&file).nth(1).unwrap();
        assert_eq!(token.kind(), TokenKind::ShiftLeft);
        assert_eq!(token.range().begin, SourceLocation::new(1, 3));
        assert_eq!(token.range().end, SourceLocation::new(1, 5));
    }
}
