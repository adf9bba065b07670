//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so that tooling can match on a stable code instead of
//! on the message text.
//!
//! Codes are grouped by phase: `E1xxx` for the lexer, `E2xxx` reserved for
//! the parser.
//!
//! # Examples
//!
//! ```
//! use wgslc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_INVALID_CHARACTER;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::str::FromStr;

use crate::error::{DiagnosticError, DiagnosticResult};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// Parse a code from its textual form
    ///
    /// # Errors
    ///
    /// Returns [`DiagnosticError::InvalidCode`] unless the text is `E` or `W`
    /// followed by one to four decimal digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use wgslc_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::parse("E1003").unwrap();
    /// assert_eq!(code, DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT);
    /// assert!(DiagnosticCode::parse("X1").is_err());
    /// ```
    pub fn parse(text: &str) -> DiagnosticResult<Self> {
        let invalid = || DiagnosticError::InvalidCode(text.to_string());

        let prefix = match text.get(..1) {
            Some("E") => "E",
            Some("W") => "W",
            _ => return Err(invalid()),
        };
        let digits = &text[1..];
        if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let number = digits.parse().map_err(|_| invalid())?;
        Ok(Self::new(prefix, number))
    }

    // =========================================================================
    // LEXER ERROR CODES (E1000-E1999)
    // =========================================================================

    /// E1000: Lexer - Invalid token (no more specific code applies)
    pub const E_LEXER_INVALID_TOKEN: Self = Self::new("E", 1000);
    /// E1001: Lexer - Malformed UTF-8 or embedded NUL
    pub const E_LEXER_INVALID_ENCODING: Self = Self::new("E", 1001);
    /// E1002: Lexer - Character that starts no token
    pub const E_LEXER_INVALID_CHARACTER: Self = Self::new("E", 1002);
    /// E1003: Lexer - Block comment without closing `*/`
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: Lexer - Numeric literal that does not follow the grammar
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1004);
    /// E1005: Lexer - Numeric literal outside the range of its type
    pub const E_LEXER_NUMBER_OUT_OF_RANGE: Self = Self::new("E", 1005);
}

impl FromStr for DiagnosticCode {
    type Err = DiagnosticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience
pub const E_LEXER_INVALID_TOKEN: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_TOKEN;
pub const E_LEXER_INVALID_ENCODING: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_ENCODING;
pub const E_LEXER_INVALID_CHARACTER: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_CHARACTER;
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
pub const E_LEXER_MALFORMED_NUMBER: DiagnosticCode = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
pub const E_LEXER_NUMBER_OUT_OF_RANGE: DiagnosticCode =
    DiagnosticCode::E_LEXER_NUMBER_OUT_OF_RANGE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::E_LEXER_NUMBER_OUT_OF_RANGE.as_str(), "E1005");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_INVALID_ENCODING;
        assert_eq!(format!("{}", code), "E1001");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1001)");
    }

    #[test]
    fn test_lexer_codes_are_distinct() {
        let codes = [
            E_LEXER_INVALID_TOKEN,
            E_LEXER_INVALID_ENCODING,
            E_LEXER_INVALID_CHARACTER,
            E_LEXER_UNTERMINATED_COMMENT,
            E_LEXER_MALFORMED_NUMBER,
            E_LEXER_NUMBER_OUT_OF_RANGE,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        let code = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
        assert_eq!(code.as_str().parse::<DiagnosticCode>().unwrap(), code);
        assert_eq!(DiagnosticCode::parse("W7").unwrap(), DiagnosticCode::new("W", 7));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "E", "e1001", "E10010", "E1a", "W-1", "é1"] {
            assert!(
                matches!(DiagnosticCode::parse(bad), Err(DiagnosticError::InvalidCode(ref s)) if s == bad),
                "{bad:?} should be rejected"
            );
        }
    }
}
