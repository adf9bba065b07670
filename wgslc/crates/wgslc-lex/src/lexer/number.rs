//! Decimal float and integer literal lexing.
//!
//! This module handles decimal floats, decimal integers and hexadecimal
//! integers. Hexadecimal floats live in `hex_float`.
//!
//! # Literal Formats
//!
//! - Float: `1.5`, `.5`, `1.`, `2e10`, `1.5e-3f`, `1h`
//! - Integer: `0`, `42`, `-7i`, `4294967295u`
//! - Hexadecimal integer: `0x1F`, `-0XaBu`
//!
//! A leading `-` is part of the literal.

use wgslc_util::SourceLocation;

use crate::error::{LexError, NumericType};
use crate::float::{checked_f16, checked_f32};
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a decimal float literal.
    ///
    /// Returns `None` when the text at the cursor is not a float, including
    /// plain digit runs, which are left for [`Lexer::try_integer`].
    pub(crate) fn try_float(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let start = self.cursor.pos();
        let line = self.cursor.current_line();
        let len = line.len();
        let at = |i: usize| line.get(i).copied().unwrap_or(0);
        let mut end = start;

        if self.cursor.matches(end, b"-") {
            end += 1;
        }

        let mut has_mantissa_digits = false;
        while end < len && at(end).is_ascii_digit() {
            has_mantissa_digits = true;
            end += 1;
        }

        let mut has_point = false;
        if end < len && at(end) == b'.' {
            has_point = true;
            end += 1;
        }

        while end < len && at(end).is_ascii_digit() {
            has_mantissa_digits = true;
            end += 1;
        }

        if !has_mantissa_digits {
            return None;
        }

        let mut has_exponent = false;
        if end < len && matches!(at(end), b'e' | b'E') {
            end += 1;
            if end < len && matches!(at(end), b'+' | b'-') {
                end += 1;
            }
            while end < len && at(end).is_ascii_digit() {
                has_exponent = true;
                end += 1;
            }
            if !has_exponent {
                let text = String::from_utf8_lossy(self.cursor.substr(start, end - start));
                let error = LexError::IncompleteExponent(text.into_owned());
                return Some(self.error_token(self.point_span(begin), error));
            }
        }

        let suffix = match at(end) {
            b'f' if end < len => Some(NumericType::F32),
            b'h' if end < len => Some(NumericType::F16),
            _ => None,
        };

        if !has_point && !has_exponent && suffix.is_none() {
            return None;
        }

        let digits = self.cursor.substr(start, end - start);
        if suffix.is_some() {
            end += 1;
        }
        self.cursor.advance(end - start);
        let span = self.span_from(begin);

        // Out-of-range text parses to infinity
        let value = std::str::from_utf8(digits)
            .ok()
            .and_then(|text| text.parse::<f64>().ok());

        let token = match (suffix, value) {
            (Some(NumericType::F32), Some(value)) => checked_f32(value)
                .map(|v| Token::float(TokenKind::FloatLiteralF, span, v))
                .ok_or(NumericType::F32),
            (Some(NumericType::F16), Some(value)) => checked_f16(value)
                .map(|v| Token::float(TokenKind::FloatLiteralH, span, v))
                .ok_or(NumericType::F16),
            (_, Some(value)) if value.is_finite() => {
                Ok(Token::float(TokenKind::FloatLiteral, span, value))
            },
            (suffix, _) => Err(suffix.unwrap_or(NumericType::AbstractFloat)),
        };

        Some(token.unwrap_or_else(|ty| self.error_token(span, LexError::NotRepresentable(ty))))
    }

    /// Lexes a hexadecimal integer literal.
    ///
    /// Runs after [`Lexer::try_hex_float`], so any `0x` prefix that reaches
    /// here is an integer or malformed.
    pub(crate) fn try_hex_integer(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let start = self.cursor.pos();
        let mut curr = start;

        if self.cursor.matches(curr, b"-") {
            curr += 1;
        }

        if self.cursor.matches(curr, b"0x") || self.cursor.matches(curr, b"0X") {
            curr += 2;
        } else {
            return None;
        }

        if !self.cursor.at(curr).is_ascii_hexdigit() {
            return Some(self.error_token(self.point_span(begin), LexError::HexNoSignificantDigits));
        }

        Some(self.build_int(begin, start, 16))
    }

    /// Lexes a decimal integer literal.
    pub(crate) fn try_integer(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let start = self.cursor.pos();
        let mut curr = start;

        if self.cursor.matches(curr, b"-") {
            curr += 1;
        }

        if curr >= self.cursor.line_len() || !self.cursor.at(curr).is_ascii_digit() {
            return None;
        }

        let next = curr + 1;
        if next < self.cursor.line_len()
            && self.cursor.at(curr) == b'0'
            && self.cursor.at(next).is_ascii_digit()
        {
            return Some(self.error_token(self.point_span(begin), LexError::LeadingZeros));
        }

        Some(self.build_int(begin, start, 10))
    }

    /// Reads the integer starting at `start` and any `i`/`u` suffix.
    ///
    /// The text is an optional `-`, a `0x` prefix when `radix` is 16, then at
    /// least one digit. Values beyond the 64-bit signed range saturate and
    /// are reported as not representable.
    fn build_int(&mut self, begin: SourceLocation, start: usize, radix: u32) -> Token<'a> {
        let len = self.cursor.line_len();
        let mut end = start;

        let negative = self.cursor.matches(end, b"-");
        if negative {
            end += 1;
        }
        if radix == 16 {
            end += 2;
        }

        let mut magnitude: u64 = 0;
        let mut overflow = false;
        while end < len {
            let Some(digit) = (self.cursor.at(end) as char).to_digit(radix) else {
                break;
            };
            match magnitude
                .checked_mul(radix as u64)
                .and_then(|m| m.checked_add(digit as u64))
            {
                Some(m) => magnitude = m,
                None => overflow = true,
            }
            end += 1;
        }

        let limit = if negative { i64::MIN.unsigned_abs() } else { i64::MAX as u64 };
        overflow |= magnitude > limit;
        let value = match (overflow, negative) {
            (true, true) => i64::MIN,
            (true, false) => i64::MAX,
            (false, true) => magnitude.wrapping_neg() as i64,
            (false, false) => magnitude as i64,
        };

        self.cursor.advance(end - start);

        let suffixed = match self.cursor.at(self.cursor.pos()) {
            b'u' if !self.cursor.is_eol() => Some((TokenKind::IntLiteralU, NumericType::U32)),
            b'i' if !self.cursor.is_eol() => Some((TokenKind::IntLiteralI, NumericType::I32)),
            _ => None,
        };

        if let Some((kind, ty)) = suffixed {
            let fits = match ty {
                NumericType::U32 => u32::try_from(value).is_ok(),
                _ => i32::try_from(value).is_ok(),
            };
            if overflow || !fits {
                return self.error_token(self.point_span(begin), LexError::NotRepresentable(ty));
            }
            self.cursor.advance(1);
            return Token::int(kind, self.span_from(begin), value);
        }

        let span = self.span_from(begin);
        if overflow {
            return self.error_token(span, LexError::NotRepresentable(NumericType::AbstractInt));
        }
        Token::int(TokenKind::IntLiteral, span, value)
    }
}
