//! Unicode utilities for the WGSL lexer.
//!
//! Source lines are raw bytes. This module decodes one code point at a time
//! and classifies code points for blankspace and identifiers.

use unicode_ident::{is_xid_continue, is_xid_start};

/// Decodes the code point at the start of `bytes`.
///
/// Returns the code point and its width in bytes, or `None` if `bytes` is
/// empty or does not start with a well-formed UTF-8 sequence (overlong forms,
/// surrogates and truncated sequences are all rejected).
///
/// # Example
///
/// ```
/// use wgslc_lex::unicode::decode_utf8;
///
/// assert_eq!(decode_utf8(b"a+"), Some(('a', 1)));
/// assert_eq!(decode_utf8("é".as_bytes()), Some(('é', 2)));
/// assert_eq!(decode_utf8(&[0xc3]), None);
/// assert_eq!(decode_utf8(&[]), None);
/// ```
pub fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let width = match *bytes.first()? {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return None,
    };
    let encoded = bytes.get(..width)?;
    let c = std::str::from_utf8(encoded).ok()?.chars().next()?;
    Some((c, width))
}

/// Checks if a code point is WGSL blankspace.
///
/// Only space, horizontal tab, and the two directional marks count. Line
/// breaks never reach the lexer because the source is split into lines.
pub fn is_blankspace(c: char) -> bool {
    matches!(c, '\u{0020}' | '\u{0009}' | '\u{200e}' | '\u{200f}')
}

/// Checks if a code point may start an identifier.
///
/// # Example
///
/// ```
/// use wgslc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
pub fn is_ident_start(c: char) -> bool {
    c == '_' || is_xid_start(c)
}

/// Checks if a code point may continue an identifier.
pub fn is_ident_continue(c: char) -> bool {
    is_xid_continue(c)
}

/// Value of an ASCII hex digit, or 0 for anything else.
#[inline]
pub fn hex_value(b: u8) -> u32 {
    match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'a'..=b'f' => (b - b'a') as u32 + 10,
        b'A'..=b'F' => (b - b'A') as u32 + 10,
        _ => 0,
    }
}

/// Value of an ASCII decimal digit, or 0 for anything else.
#[inline]
pub fn dec_value(b: u8) -> u32 {
    if b.is_ascii_digit() {
        (b - b'0') as u32
    } else {
        0
    }
}
