//! Line cursor for traversing a source file.
//!
//! This module provides the `Cursor` struct which tracks a (line, column)
//! position inside a [`SourceFile`]. All access is relative to the current
//! line; moving between lines is always explicit.

use wgslc_util::{SourceFile, SourceLocation};

/// A cursor over the lines of a source file.
///
/// Columns are 1-based byte offsets and stay within `[1, line_len + 1]` as
/// long as callers only advance over bytes they have looked at. Column
/// `line_len + 1` is the end of the line.
///
/// # Example
///
/// ```
/// use wgslc_lex::cursor::Cursor;
/// use wgslc_util::SourceFile;
///
/// let file = SourceFile::new(0, "a.wgsl", "let x\nvar");
/// let mut cursor = Cursor::new(&file);
///
/// assert_eq!(cursor.at(0), b'l');
/// cursor.advance(5);
/// assert!(cursor.is_eol());
/// cursor.advance_line();
/// assert_eq!(cursor.current_line(), b"var");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The file being traversed.
    file: &'a SourceFile,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at line 1, column 1.
    pub fn new(file: &'a SourceFile) -> Self {
        Self {
            file,
            line: 1,
            column: 1,
        }
    }

    /// Returns the file being traversed.
    #[inline]
    pub fn file(&self) -> &'a SourceFile {
        self.file
    }

    /// Returns the bytes of the current line.
    ///
    /// Empty if the file has no lines.
    #[inline]
    pub fn current_line(&self) -> &'a [u8] {
        (self.line as usize)
            .checked_sub(1)
            .and_then(|index| self.file.line(index))
            .unwrap_or(&[])
    }

    /// Returns the 0-based byte offset of the cursor within the line.
    #[inline]
    pub fn pos(&self) -> usize {
        self.column as usize - 1
    }

    /// Returns the length of the current line in bytes.
    #[inline]
    pub fn line_len(&self) -> usize {
        self.current_line().len()
    }

    /// Returns the byte at a 0-based offset into the current line.
    ///
    /// Offsets at or past the end of the line read as `0`, so lookahead
    /// needs no bounds check.
    #[inline]
    pub fn at(&self, offset: usize) -> u8 {
        self.current_line().get(offset).copied().unwrap_or(0)
    }

    /// Returns up to `count` bytes of the current line starting at `offset`.
    pub fn substr(&self, offset: usize, count: usize) -> &'a [u8] {
        let line = self.current_line();
        let start = offset.min(line.len());
        let end = offset.saturating_add(count).min(line.len());
        &line[start..end]
    }

    /// Returns the rest of the current line from the cursor.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        let line = self.current_line();
        &line[self.pos().min(line.len())..]
    }

    /// Moves the cursor forward by `count` bytes on the current line.
    #[inline]
    pub fn advance(&mut self, count: usize) {
        self.column += count as u32;
    }

    /// Moves the cursor to a 0-based offset on the current line.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        self.column = pos as u32 + 1;
    }

    /// Moves the cursor to the start of the next line.
    #[inline]
    pub fn advance_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Returns true once the cursor is at the end of the last line.
    ///
    /// A file with no lines is always at end of file.
    pub fn is_eof(&self) -> bool {
        self.line as usize >= self.file.line_count() && self.pos() >= self.line_len()
    }

    /// Returns true if the cursor is at or past the end of the current line.
    #[inline]
    pub fn is_eol(&self) -> bool {
        self.pos() >= self.line_len()
    }

    /// Returns true if the byte under the cursor is an embedded NUL.
    ///
    /// The end-of-line sentinel returned by [`Cursor::at`] does not count.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.pos() < self.line_len() && self.at(self.pos()) == 0
    }

    /// Returns true if the current line has `expected` at offset `pos`.
    ///
    /// Always false when `pos` is at or past the end of the line.
    pub fn matches(&self, pos: usize, expected: &[u8]) -> bool {
        if pos >= self.line_len() {
            return false;
        }
        self.substr(pos, expected.len()) == expected
    }

    /// Returns the current location.
    #[inline]
    pub fn location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Creates a snapshot of the current cursor state.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    #[inline]
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
