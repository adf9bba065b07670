//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and scanner dispatch
//! - `comment` - Blankspace and comment skipping
//! - `hex_float` - Hexadecimal float literals
//! - `number` - Decimal float and integer literals
//! - `identifier` - Identifier and keyword lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod hex_float;
mod identifier;
mod number;
mod operator;

pub use core::Lexer;
