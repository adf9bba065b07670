//! Hexadecimal float literal lexing.
//!
//! A hex float is `-?0[xX]`, hex digits with a `.` or a binary exponent
//! `[pP][+-]?[0-9]+`, and an optional `f` or `h` suffix after the exponent.
//! The value is assembled bit by bit into an IEEE-754 double. Significant
//! bits beyond the 52-bit mantissa are an error rather than being rounded.

use wgslc_util::SourceLocation;

use crate::error::{LexError, NumericType};
use crate::float::{
    F16_HIGHEST, F16_LOWEST, F16_SMALLEST, F16_SMALLEST_SUBNORMAL, F32_HIGHEST, F32_LOWEST,
    F32_SMALLEST, F32_SMALLEST_SUBNORMAL,
};
use crate::token::{Token, TokenKind};
use crate::unicode::{dec_value, hex_value};
use crate::Lexer;

const TOTAL_MSB: u64 = 63;
const MANTISSA_BITS: u64 = 52;
const MANTISSA_MSB: u64 = MANTISSA_BITS - 1;
const MANTISSA_SHIFT_RIGHT: u64 = TOTAL_MSB + 1 - MANTISSA_BITS;
const DROPPED_BITS_MASK: u64 = (1 << MANTISSA_SHIFT_RIGHT) - 1;
const EXPONENT_BIAS: i64 = 1023;
const EXPONENT_MASK: u64 = 0x7ff;
const EXPONENT_MAX: i64 = EXPONENT_MASK as i64;
const SIGN_BIT: u64 = 63;

/// Accumulates significant bits from the most significant end.
///
/// The leading one bit of the value is never written; it becomes the implicit
/// bit of the double.
struct MantissaWriter {
    bits: u64,
    /// Next bit to write; wraps past zero once all 64 bits are used
    next_bit: u64,
}

impl MantissaWriter {
    fn new() -> Self {
        Self {
            bits: 0,
            next_bit: TOTAL_MSB,
        }
    }

    /// Writes the next bit. Fails once the 64 bits are exhausted.
    ///
    /// Trailing zero bits of the fraction are dropped instead of failing.
    fn push(&mut self, set: bool, integer_part: bool) -> bool {
        if (integer_part || set) && self.next_bit > TOTAL_MSB {
            return false;
        }
        if set {
            self.bits |= 1u64 << self.next_bit;
        }
        self.next_bit = self.next_bit.wrapping_sub(1);
        true
    }
}

/// Precision limits of a narrow float type.
struct Narrow {
    ty: NumericType,
    kind: TokenKind,
    lowest: f64,
    highest: f64,
    smallest: f64,
    smallest_subnormal: f64,
    mantissa_bits: i64,
    /// Negated exponent of `smallest_subnormal`
    subnormal_shift: i64,
}

const F32: Narrow = Narrow {
    ty: NumericType::F32,
    kind: TokenKind::FloatLiteralF,
    lowest: F32_LOWEST,
    highest: F32_HIGHEST,
    smallest: F32_SMALLEST,
    smallest_subnormal: F32_SMALLEST_SUBNORMAL,
    mantissa_bits: 23,
    subnormal_shift: 149,
};

const F16: Narrow = Narrow {
    ty: NumericType::F16,
    kind: TokenKind::FloatLiteralH,
    lowest: F16_LOWEST,
    highest: F16_HIGHEST,
    smallest: F16_SMALLEST,
    smallest_subnormal: F16_SMALLEST_SUBNORMAL,
    mantissa_bits: 10,
    subnormal_shift: 24,
};

impl Narrow {
    /// Checks that the double with bit pattern `bits` and biased exponent
    /// `biased_exponent` is exactly representable in this type.
    fn check(&self, bits: u64, biased_exponent: i64) -> Result<f64, LexError> {
        let value = f64::from_bits(bits);
        if value < self.lowest || value > self.highest {
            return Err(LexError::NotRepresentable(self.ty));
        }

        let magnitude = value.abs();
        let valid_bits = if magnitude >= self.smallest {
            self.mantissa_bits
        } else if magnitude >= self.smallest_subnormal {
            biased_exponent - EXPONENT_BIAS + self.subnormal_shift
        } else if magnitude != 0.0 {
            return Err(LexError::NotExactlyRepresentable(self.ty));
        } else {
            0
        };

        let dropped = (1u64 << (MANTISSA_BITS as i64 - valid_bits)) - 1;
        if bits & dropped != 0 {
            return Err(LexError::NotExactlyRepresentable(self.ty));
        }
        Ok(value)
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a hexadecimal float literal.
    ///
    /// Returns `None` for hex integers and anything without a `0x` prefix.
    pub(crate) fn try_hex_float(&mut self) -> Option<Token<'a>> {
        let begin = self.cursor.location();
        let start = self.cursor.pos();
        let line = self.cursor.current_line();
        let len = line.len();
        let at = |i: usize| line.get(i).copied().unwrap_or(0);
        let mut end = start;

        let mut sign_bit = 0u64;
        if self.cursor.matches(end, b"-") {
            sign_bit = 1;
            end += 1;
        }

        if self.cursor.matches(end, b"0x") || self.cursor.matches(end, b"0X") {
            end += 2;
        } else {
            return None;
        }

        let integer_start = end;
        while end < len && at(end).is_ascii_hexdigit() {
            end += 1;
        }
        let integer_range = integer_start..end;

        let has_point = self.cursor.matches(end, b".");
        if has_point {
            end += 1;
        }

        let fraction_start = end;
        while end < len && at(end).is_ascii_hexdigit() {
            end += 1;
        }
        let fraction_range = fraction_start..end;

        if integer_range.is_empty() && fraction_range.is_empty() {
            return None;
        }

        let has_exponent = self.cursor.matches(end, b"p") || self.cursor.matches(end, b"P");
        if has_exponent {
            end += 1;
        }
        if !has_exponent && !has_point {
            return None;
        }

        // From here on the text is a hex float or an error
        let mut mantissa = MantissaWriter::new();
        // Bits written past the leading one; negative for leading fraction zeros
        let mut exponent = 0i64;

        let mut has_zero_integer = true;
        let mut seen_one = false;
        for i in integer_range {
            let nibble = hex_value(at(i));
            if nibble != 0 {
                has_zero_integer = false;
            }
            for bit in (0..4).rev() {
                let set = (nibble >> bit) & 1 == 1;
                if seen_one {
                    if !mantissa.push(set, true) {
                        return Some(self.hex_float_error(begin, LexError::HexFloatMantissaTooLarge));
                    }
                    exponent += 1;
                } else if set {
                    seen_one = true;
                }
            }
        }

        for i in fraction_range {
            let nibble = hex_value(at(i));
            for bit in (0..4).rev() {
                let set = (nibble >> bit) & 1 == 1;
                seen_one |= set;
                if !seen_one {
                    exponent -= 1;
                } else if !mantissa.push(set, false) {
                    return Some(self.hex_float_error(begin, LexError::HexFloatMantissaTooLarge));
                }
            }
        }

        let is_zero = !seen_one;
        debug_assert!(!is_zero || mantissa.bits == 0);

        let mut input_exponent = 0u64;
        let mut exponent_sign = 1i64;
        let mut suffix = None;
        if has_exponent {
            if self.cursor.matches(end, b"+") {
                end += 1;
            } else if self.cursor.matches(end, b"-") {
                exponent_sign = -1;
                end += 1;
            }

            let mut has_digits = false;
            while end < len && at(end).is_ascii_digit() {
                has_digits = true;
                let digit = dec_value(at(end)) as u64;
                // A zero magnitude ignores its exponent, so wrapping is harmless
                input_exponent = if is_zero {
                    input_exponent.wrapping_mul(10).wrapping_add(digit)
                } else {
                    match input_exponent.checked_mul(10).and_then(|e| e.checked_add(digit)) {
                        Some(e) => e,
                        None => {
                            return Some(
                                self.hex_float_error(begin, LexError::HexFloatExponentTooLarge),
                            );
                        },
                    }
                };
                end += 1;
            }

            if end < len && at(end) == b'f' {
                suffix = Some(F32);
                end += 1;
            } else if end < len && at(end) == b'h' {
                suffix = Some(F16);
                end += 1;
            }

            if !has_digits {
                return Some(self.hex_float_error(begin, LexError::HexFloatMissingExponent));
            }
        }

        self.cursor.advance(end - start);
        let span = self.span_from(begin);

        let mut mantissa = mantissa.bits;
        let mut signed_exponent = 0i64;
        if !is_zero {
            // The leading one was never written; a fractional value's first
            // written bit is that one, so drop it too.
            let leading_one = if has_zero_integer {
                mantissa <<= 1;
                1
            } else {
                0
            };

            let biased = i64::try_from(input_exponent)
                .ok()
                .filter(|&e| e <= i64::MAX - EXPONENT_BIAS)
                .and_then(|e| (e * exponent_sign).checked_add(exponent))
                .and_then(|e| e.checked_add(EXPONENT_BIAS))
                .and_then(|e| e.checked_sub(leading_one));
            let Some(biased) = biased else {
                return Some(self.error_token(span, LexError::HexFloatExponentTooLarge));
            };
            signed_exponent = biased;
        }

        if mantissa & DROPPED_BITS_MASK != 0 {
            return Some(self.error_token(span, LexError::HexFloatMantissaTooLarge));
        }
        mantissa >>= MANTISSA_SHIFT_RIGHT;

        if !is_zero {
            // Subnormal: restore the implicit one and shift down to exponent 0
            if signed_exponent <= 0 {
                mantissa >>= 1;
                mantissa |= 1u64 << MANTISSA_MSB;
            }
            while signed_exponent < 0 {
                mantissa >>= 1;
                signed_exponent += 1;
                if mantissa == 0 {
                    signed_exponent = 0;
                }
            }
        }

        if signed_exponent >= EXPONENT_MAX {
            let ty = suffix.as_ref().map_or(NumericType::AbstractFloat, |narrow| narrow.ty);
            return Some(self.error_token(span, LexError::NotRepresentable(ty)));
        }

        let bits = (sign_bit << SIGN_BIT)
            | mantissa
            | ((signed_exponent as u64 & EXPONENT_MASK) << MANTISSA_BITS);

        let token = match suffix {
            Some(narrow) => match narrow.check(bits, signed_exponent) {
                Ok(value) => Token::float(narrow.kind, span, value),
                Err(error) => self.error_token(span, error),
            },
            None => Token::float(TokenKind::FloatLiteral, span, f64::from_bits(bits)),
        };
        Some(token)
    }

    /// Errors found before the literal is consumed point at its start.
    fn hex_float_error(&mut self, begin: SourceLocation, error: LexError) -> Token<'a> {
        self.error_token(self.point_span(begin), error)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use wgslc_util::{SourceFile, SourceLocation};

    fn first(source: &str) -> Token<'static> {
        let file = SourceFile::new(0, "test.wgsl", source);
        Lexer::new(&file).next_token().into_owned()
    }

    fn assert_hex_float(source: &str, kind: TokenKind, value: f64) {
        let token = first(source);
        assert_eq!(token.kind(), kind, "{source}: {token:?}");
        assert_eq!(token.to_f64().to_bits(), value.to_bits(), "{source}: {}", token.to_f64());
        let end = SourceLocation::new(1, source.len() as u32 + 1);
        assert_eq!(token.range().end, end, "{source}");
    }

    fn assert_error(source: &str, message: &str) {
        let token = first(source);
        assert!(token.is_error(), "{source}: {token:?}");
        assert_eq!(token.to_str(), message, "{source}");
    }

    #[test]
    fn test_basic_values() {
        assert_hex_float("0x1p0", TokenKind::FloatLiteral, 1.0);
        assert_hex_float("0x1p4", TokenKind::FloatLiteral, 16.0);
        assert_hex_float("0x1p-1", TokenKind::FloatLiteral, 0.5);
        assert_hex_float("0X1P+2", TokenKind::FloatLiteral, 4.0);
        assert_hex_float("0xa.8p0", TokenKind::FloatLiteral, 10.5);
        assert_hex_float("-0x1.8p1", TokenKind::FloatLiteral, -3.0);
        assert_hex_float("0x.1p4", TokenKind::FloatLiteral, 1.0);
        assert_hex_float("0x.01p0", TokenKind::FloatLiteral, 1.0 / 256.0);
        assert_hex_float("0x0.8p0", TokenKind::FloatLiteral, 0.5);
        assert_hex_float("0x1.", TokenKind::FloatLiteral, 1.0);
        assert_hex_float("0x1.8", TokenKind::FloatLiteral, 1.5);
        assert_hex_float("0xff.ffp0", TokenKind::FloatLiteral, 255.0 + 255.0 / 256.0);
    }

    #[test]
    fn test_zero() {
        assert_hex_float("0x0p0", TokenKind::FloatLiteral, 0.0);
        assert_hex_float("0x0.0p0", TokenKind::FloatLiteral, 0.0);
        assert_hex_float("-0x0p0", TokenKind::FloatLiteral, -0.0);
        // The exponent of a zero is ignored, even when it overflows
        assert_hex_float("0x0p99999999999999999999999", TokenKind::FloatLiteral, 0.0);
    }

    #[test]
    fn test_extremes() {
        assert_hex_float("0x1.fffffffffffffp1023", TokenKind::FloatLiteral, f64::MAX);
        assert_hex_float("0x1p-1022", TokenKind::FloatLiteral, f64::MIN_POSITIVE);
        assert_hex_float("0x1p-1074", TokenKind::FloatLiteral, f64::from_bits(1));
        assert_hex_float("0x1p-1075", TokenKind::FloatLiteral, 0.0);
    }

    #[test]
    fn test_suffixes() {
        assert_hex_float("0x1.8p0f", TokenKind::FloatLiteralF, 1.5);
        assert_hex_float("0x1p-149f", TokenKind::FloatLiteralF, 2f64.powi(-149));
        assert_hex_float("0x1.fffffep127f", TokenKind::FloatLiteralF, f32::MAX as f64);
        assert_hex_float("0x1.004p0h", TokenKind::FloatLiteralH, 1.0 + 2f64.powi(-10));
        assert_hex_float("0x1p-24h", TokenKind::FloatLiteralH, 2f64.powi(-24));
        assert_hex_float("0x1.ffcp15h", TokenKind::FloatLiteralH, 65504.0);
    }

    #[test]
    fn test_not_exactly_representable() {
        assert_error("0x1.002p0h", "value cannot be exactly represented as 'f16'");
        assert_error("0x1p-25h", "value cannot be exactly represented as 'f16'");
        assert_error("0x1.000001p0f", "value cannot be exactly represented as 'f32'");
        assert_error("0x1p-150f", "value cannot be exactly represented as 'f32'");
        assert_error("0x1.8p-149f", "value cannot be exactly represented as 'f32'");
    }

    #[test]
    fn test_not_representable() {
        assert_error("0x1p128f", "value cannot be represented as 'f32'");
        assert_error("0x1p16h", "value cannot be represented as 'f16'");
        assert_error("0x1p1024", "value cannot be represented as 'abstract-float'");
    }

    #[test]
    fn test_malformed() {
        assert_error("0x1p", "expected an exponent value for hex float");
        assert_error("0x1p-", "expected an exponent value for hex float");
        assert_error("0x1pf", "expected an exponent value for hex float");
        assert_error("0x1p99999999999999999999", "exponent is too large for hex float");

        // 68 bits after the leading one
        let wide = format!("0x1{}p0", "0".repeat(17));
        assert_error(&wide, "mantissa is too large for hex float");
        // 1 + 2^-53 needs 53 mantissa bits
        assert_error("0x1.00000000000008p0", "mantissa is too large for hex float");
        assert_error("0x1.00000000000008p0f", "mantissa is too large for hex float");
        assert_error("0x0.100000000000008p0", "mantissa is too large for hex float");
        assert_hex_float("0x1.0000000000001p0", TokenKind::FloatLiteral, 1.0 + f64::EPSILON);
        // Trailing fractional zeros never overflow
        let zeros = format!("0x1.{}p0", "0".repeat(20));
        assert_hex_float(&zeros, TokenKind::FloatLiteral, 1.0);
    }

    #[test]
    fn test_exponent_overflow_after_adjustment() {
        // The integer part adds 8 to an exponent already at the limit
        assert_error("0x1ffp9223372036854774784", "exponent is too large for hex float");
        assert_error("0x1p-9223372036854775807", "exponent is too large for hex float");
        assert_error("0x1p9223372036854774784", "value cannot be represented as 'abstract-float'");
        // Leading fraction zeros move a huge negative exponent further down
        assert_hex_float("0x0.01p-9223372036854774784", TokenKind::FloatLiteral, 0.0);
    }

    #[test]
    fn test_error_span_before_consumption_is_point() {
        let token = first("  0x1p");
        assert_eq!(token.range().begin, SourceLocation::new(1, 3));
        assert_eq!(token.range().end, SourceLocation::new(1, 3));
    }

    #[test]
    fn test_hex_integers_are_not_hex_floats() {
        assert_eq!(first("0x1f").kind(), TokenKind::IntLiteral);
        assert_eq!(first("0x10u").kind(), TokenKind::IntLiteralU);
    }
}
