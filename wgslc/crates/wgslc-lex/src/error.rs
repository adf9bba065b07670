//! Lexical error kinds.
//!
//! The lexer never returns these through a `Result`: each one becomes the
//! message of an error token. Keeping them in one enum keeps the message texts
//! in one place and lets drivers map an error to a [`DiagnosticCode`].

use std::fmt;

use thiserror::Error;
use wgslc_util::DiagnosticCode;

/// The numeric types a literal can fail to fit
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericType {
    /// Unsuffixed integer (64-bit signed)
    AbstractInt,
    /// `i`-suffixed integer
    I32,
    /// `u`-suffixed integer
    U32,
    /// Unsuffixed float (double precision)
    AbstractFloat,
    /// `f`-suffixed float
    F32,
    /// `h`-suffixed float
    F16,
}

impl NumericType {
    /// The spelling used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            NumericType::AbstractInt => "abstract-int",
            NumericType::I32 => "i32",
            NumericType::U32 => "u32",
            NumericType::AbstractFloat => "abstract-float",
            NumericType::F32 => "f32",
            NumericType::F16 => "f16",
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every way a call to the lexer can fail
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A byte sequence that is not UTF-8
    #[error("invalid UTF-8")]
    InvalidUtf8,

    /// An embedded NUL byte
    #[error("null character found")]
    NullCharacter,

    /// A character that starts no token
    #[error("invalid character found")]
    InvalidCharacter,

    /// `/*` without a matching `*/`
    #[error("unterminated block comment")]
    UnterminatedBlockComment,

    /// `e` or `E` not followed by digits; carries the literal text so far
    #[error("incomplete exponent for floating point literal: {0}")]
    IncompleteExponent(String),

    /// Literal value outside the range of its type
    #[error("value cannot be represented as '{0}'")]
    NotRepresentable(NumericType),

    /// Hex float with more precision than its type holds
    #[error("value cannot be exactly represented as '{0}'")]
    NotExactlyRepresentable(NumericType),

    /// Hex float with more than 64 significant bits
    #[error("mantissa is too large for hex float")]
    HexFloatMantissaTooLarge,

    /// Hex float exponent that overflows the accumulator
    #[error("exponent is too large for hex float")]
    HexFloatExponentTooLarge,

    /// `p` or `P` not followed by digits
    #[error("expected an exponent value for hex float")]
    HexFloatMissingExponent,

    /// `0x` not followed by a hex digit
    #[error("integer or float hex literal has no significant digits")]
    HexNoSignificantDigits,

    /// Decimal integer starting with `0` followed by another digit
    #[error("integer literal cannot have leading 0s")]
    LeadingZeros,
}

impl LexError {
    /// The diagnostic code a driver should attach to this error
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::InvalidUtf8 | LexError::NullCharacter => {
                DiagnosticCode::E_LEXER_INVALID_ENCODING
            },
            LexError::InvalidCharacter => DiagnosticCode::E_LEXER_INVALID_CHARACTER,
            LexError::UnterminatedBlockComment => DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            LexError::IncompleteExponent(_)
            | LexError::HexFloatMissingExponent
            | LexError::HexNoSignificantDigits
            | LexError::LeadingZeros => DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            LexError::NotRepresentable(_)
            | LexError::NotExactlyRepresentable(_)
            | LexError::HexFloatMantissaTooLarge
            | LexError::HexFloatExponentTooLarge => DiagnosticCode::E_LEXER_NUMBER_OUT_OF_RANGE,
        }
    }
}
