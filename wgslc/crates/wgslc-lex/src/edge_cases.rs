//! Edge case tests for wgslc-lex
