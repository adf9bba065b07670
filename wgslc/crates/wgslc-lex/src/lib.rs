//! wgslc-lex - Lexical Analyzer for WGSL
//!
//! This crate provides the lexer (tokenizer) for the WebGPU Shading Language.
//! It turns a [`SourceFile`] into a stream of tokens that can be consumed by a
//! parser.
//!
//! # Example Usage
//!
//! ```
//! use wgslc_lex::{Lexer, TokenKind};
//! use wgslc_util::SourceFile;
//!
//! let file = SourceFile::new(0, "shader.wgsl", "var<private> x : f32 = 1.5f;");
//!
//! // Iterate through tokens
//! for token in Lexer::new(&file) {
//!     println!("{:?}", token);
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(&file);
//! assert_eq!(lexer.next_token().kind(), TokenKind::Var);
//! assert_eq!(lexer.next_token().kind(), TokenKind::LessThan);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, payloads and classification predicates
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Line cursor for source traversal
//! - [`unicode`] - UTF-8 decoding and code point classes
//! - [`float`] - `f32`/`f16` range checks and rounding
//! - [`error`] - Lexical error kinds
//!
//! # Token Categories
//!
//! ## Literals
//!
//! - **Integer**: `42`, `-7i`, `4294967295u`, `0x1F`
//! - **Float**: `1.5`, `.5`, `1e-3f`, `2h`
//! - **Hex float**: `0x1.8p3`, `0x1p-24h`
//!
//! A leading `-` belongs to the literal.
//!
//! ## Identifiers and Keywords
//!
//! Identifiers are Unicode (`XID_Start`/`XID_Continue`). Keywords include the
//! scalar, vector, matrix, sampler and texture type names as well as control
//! flow and declaration words.
//!
//! ## Punctuation
//!
//! Matched longest first, so `>>` is one token and `>>=` is `>>` then `=`.
//! Parsers that need `>` `>` from `>>` use [`Token::split_token`].
//!
//! ## Errors
//!
//! Lexing never fails with a `Result`. Malformed input produces a single
//! [`TokenKind::Error`] token whose text is the message, and the matching
//! [`LexError`] is available from [`Lexer::last_error`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod float;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, CursorSnapshot};
pub use error::{LexError, NumericType};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenValue, KEYWORDS};

use wgslc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, SourceSnippet};

/// Lexes a whole file, reporting any error to `handler`.
///
/// Tokens are returned up to and including the terminating end-of-file or
/// error token. An error token is also emitted as an error diagnostic with
/// its span, a snippet of the offending line and a lexer error code.
///
/// # Example
///
/// ```
/// use wgslc_lex::{tokenize, TokenKind};
/// use wgslc_util::{Handler, SourceFile};
///
/// let handler = Handler::new();
/// let file = SourceFile::new(0, "a.wgsl", "let x = 01;");
/// let tokens = tokenize(&file, &handler);
///
/// assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Error));
/// assert_eq!(handler.error_count(), 1);
/// ```
pub fn tokenize<'a>(file: &'a SourceFile, handler: &Handler) -> Vec<Token<'a>> {
    let mut lexer = Lexer::new(file);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let done = token.is_eof() || token.is_error();

        if token.is_error() {
            let code = lexer
                .last_error()
                .map_or(DiagnosticCode::E_LEXER_INVALID_TOKEN, LexError::code);
            DiagnosticBuilder::error(token.to_str())
                .code(code)
                .span(token.span())
                .snippet(SourceSnippet::from_file(file, token.span()))
                .emit(handler);
        }

        tokens.push(token);
        if done {
            break;
        }
    }

    log::debug!("{}: {} tokens", file.name(), tokens.len());
    tokens
}
