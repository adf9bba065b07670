//! Source map for managing source files and resolving source locations.
//!
//! This module provides the [`SourceFile`] type, an immutable byte buffer
//! split into lines, and the [`SourceMap`] registry that hands out
//! [`FileId`]s.

use std::borrow::Cow;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;

use super::{FileId, SourceLocation, SourceRange, Span};
use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// The content is kept as raw bytes. Nothing here requires it to be valid
/// UTF-8; the lexer reports malformed sequences where it meets them.
///
/// # Examples
///
/// ```
/// use wgslc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.wgsl", "fn main() {}\n");
/// assert_eq!(file.name(), "main.wgsl");
/// assert_eq!(file.line_count(), 1);
/// assert_eq!(file.line(0), Some(&b"fn main() {}"[..]));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Unique file identifier
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Byte range of each line, terminators excluded
    lines: Arc<[Range<usize>]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `id` - Unique file identifier
    /// * `name` - File name or path
    /// * `content` - File content, as text or raw bytes
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let content: Arc<[u8]> = content.into().into();
        let lines = Self::split_lines(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            lines,
        }
    }

    /// Read a source file from disk
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read.
    pub fn load(id: usize, path: impl AsRef<Path>) -> SourceResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(id, path.display().to_string(), bytes))
    }

    /// Split content on `\n`, dropping a `\r` that precedes it.
    ///
    /// A trailing newline does not open an extra line.
    fn split_lines(content: &[u8]) -> Arc<[Range<usize>]> {
        let mut lines = Vec::new();
        let mut start = 0;

        while start < content.len() {
            let end = content[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(content.len(), |i| start + i);
            let next = end + 1;

            let mut trimmed = end;
            if end < content.len() && trimmed > start && content[trimmed - 1] == b'\r' {
                trimmed -= 1;
            }
            lines.push(start..trimmed);
            start = next;
        }

        lines.into()
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use wgslc_util::span::SourceFile;
    ///
    /// assert_eq!(SourceFile::new(0, "a.wgsl", "").line_count(), 0);
    /// assert_eq!(SourceFile::new(0, "a.wgsl", "a\nb").line_count(), 2);
    /// assert_eq!(SourceFile::new(0, "a.wgsl", "a\nb\n").line_count(), 2);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by its 0-based index, without its terminator
    #[inline]
    pub fn line(&self, index: usize) -> Option<&[u8]> {
        self.lines.get(index).map(|r| &self.content[r.clone()])
    }

    /// Get a line by its 0-based index as text.
    ///
    /// Malformed UTF-8 is replaced with U+FFFD.
    pub fn line_text(&self, index: usize) -> Option<Cow<'_, str>> {
        self.line(index).map(String::from_utf8_lossy)
    }

    /// Iterate over all lines in order
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.lines.iter().map(|r| &self.content[r.clone()])
    }

    /// Byte offset of a 1-based location.
    ///
    /// Columns past the end of the line are clamped to the line end.
    fn offset_of(&self, location: SourceLocation) -> SourceResult<usize> {
        let line = location.line as usize;
        let range = line
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .ok_or(SourceError::InvalidLineNumber {
                line,
                max_lines: self.lines.len(),
            })?;
        let column = (location.column as usize).saturating_sub(1);
        Ok((range.start + column).min(range.end))
    }

    /// Extract the bytes covered by a range
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidRange`] if `end` lies before `begin`,
    /// or [`SourceError::InvalidLineNumber`] if either line does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use wgslc_util::span::{SourceFile, SourceLocation, SourceRange};
    ///
    /// let file = SourceFile::new(0, "main.wgsl", "let x = 1;");
    /// let range = SourceRange::new(SourceLocation::new(1, 5), SourceLocation::new(1, 6));
    /// assert_eq!(file.extract(range).unwrap(), b"x");
    /// ```
    pub fn extract(&self, range: SourceRange) -> SourceResult<&[u8]> {
        if range.end < range.begin {
            return Err(SourceError::InvalidRange {
                begin_line: range.begin.line,
                begin_column: range.begin.column,
                end_line: range.end.line,
                end_column: range.end.column,
            });
        }
        let start = self.offset_of(range.begin)?;
        let end = self.offset_of(range.end)?;
        Ok(&self.content[start..end])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// A source map managing multiple source files
///
/// # Examples
///
/// ```
/// use wgslc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file_id = map.add_file("main.wgsl", "fn main() {}");
/// let file = map.get(file_id).unwrap();
/// assert_eq!(file.name(), "main.wgsl");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file
    ///
    /// Returns the [`FileId`] for the added file.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Vec<u8>>) -> FileId {
        let id = self.files.len();
        let file = SourceFile::new(id, name, content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        file_id
    }

    /// Read a file from disk and add it
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read. The map is
    /// left unchanged in that case.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> SourceResult<FileId> {
        let file = SourceFile::load(self.files.len(), path)?;
        let file_id = file.id();
        self.files.push(Arc::new(file));
        Ok(file_id)
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Get a source file by its ID with error handling
    ///
    /// # Returns
    ///
    /// * `Ok(Arc<SourceFile>)` - The source file
    /// * `Err(SourceError)` - File not found
    pub fn get_file(&self, id: FileId) -> SourceResult<Arc<SourceFile>> {
        self.files
            .get(id.0)
            .cloned()
            .ok_or(SourceError::FileNotFound(id.0))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Convert a span to a human-readable string with source context
    ///
    /// Only the first line of a multi-line span is shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use wgslc_util::span::{SourceLocation, SourceMap, Span};
    ///
    /// let mut map = SourceMap::new();
    /// let file_id = map.add_file("main.wgsl", "let x = 1;");
    /// let span = Span::new(file_id, SourceLocation::new(1, 5), SourceLocation::new(1, 6));
    /// let formatted = map.format_span(span).unwrap();
    /// assert!(formatted.starts_with("--> main.wgsl:1:5"));
    /// ```
    pub fn format_span(&self, span: Span) -> Option<String> {
        let file = self.get(span.file_id)?;
        let begin = span.begin();
        let end = span.end();

        let line = file.line_text((begin.line as usize).checked_sub(1)?)?;
        let line_num_width = file.line_count().to_string().len().max(3);

        let mut result = String::new();
        result.push_str(&format!(
            "--> {}:{}:{}\n",
            file.name(),
            begin.line,
            begin.column
        ));
        result.push_str(&format!(
            "{:>width$} | {}\n",
            begin.line,
            line,
            width = line_num_width
        ));
        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = (begin.column as usize).saturating_sub(1);
        let underline_len = if end.line == begin.line {
            (end.column.saturating_sub(begin.column) as usize).max(1)
        } else {
            line.len().saturating_sub(underline_start).max(1)
        };

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_source_file_new() {
        let file = SourceFile::new(4, "test.wgsl", "fn main() {}");
        assert_eq!(file.id(), FileId(4));
        assert_eq!(file.name(), "test.wgsl");
        assert_eq!(file.content(), b"fn main() {}");
    }

    #[test]
    fn test_source_file_line_count() {
        let file = SourceFile::new(0, "test.wgsl", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let file = SourceFile::new(0, "empty.wgsl", "");
        assert_eq!(file.line_count(), 0);
        assert_eq!(file.line(0), None);
    }

    #[test]
    fn test_trailing_newline() {
        let file = SourceFile::new(0, "test.wgsl", "a\n");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line(0), Some(&b"a"[..]));
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let file = SourceFile::new(0, "test.wgsl", "a\n\nb");
        let lines: Vec<&[u8]> = file.lines().collect();
        assert_eq!(lines, vec![&b"a"[..], &b""[..], &b"b"[..]]);
    }

    #[test]
    fn test_crlf_is_stripped() {
        let file = SourceFile::new(0, "test.wgsl", "a\r\nb\r\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line(0), Some(&b"a"[..]));
        assert_eq!(file.line(1), Some(&b"b"[..]));
    }

    #[test]
    fn test_lone_cr_is_content() {
        let file = SourceFile::new(0, "test.wgsl", "a\rb");
        assert_eq!(file.line(0), Some(&b"a\rb"[..]));
    }

    #[test]
    fn test_invalid_utf8_is_preserved() {
        let file = SourceFile::new(0, "bad.wgsl", vec![b'a', 0xff, b'b']);
        assert_eq!(file.line(0), Some(&[b'a', 0xff, b'b'][..]));
        assert_eq!(file.line_text(0).unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_extract_single_line() {
        let file = SourceFile::new(0, "test.wgsl", "fn main() {}");
        let range = SourceRange::new(SourceLocation::new(1, 4), SourceLocation::new(1, 8));
        assert_eq!(file.extract(range).unwrap(), b"main");
    }

    #[test]
    fn test_extract_multi_line() {
        let file = SourceFile::new(0, "test.wgsl", "/* a\nb */");
        let range = SourceRange::new(SourceLocation::new(1, 1), SourceLocation::new(2, 5));
        assert_eq!(file.extract(range).unwrap(), b"/* a\nb */");
    }

    #[test]
    fn test_extract_reversed_range() {
        let file = SourceFile::new(0, "test.wgsl", "fn main() {}");
        let range = SourceRange::new(SourceLocation::new(1, 5), SourceLocation::new(1, 2));
        assert!(matches!(
            file.extract(range),
            Err(SourceError::InvalidRange { begin_column: 5, end_column: 2, .. })
        ));
    }

    #[test]
    fn test_extract_bad_line() {
        let file = SourceFile::new(0, "test.wgsl", "x");
        let range = SourceRange::new(SourceLocation::new(1, 1), SourceLocation::new(3, 1));
        assert!(matches!(
            file.extract(range),
            Err(SourceError::InvalidLineNumber { line: 3, max_lines: 1 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SourceFile::load(0, "/definitely/not/here.wgsl").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn test_load_file_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("shader.wgsl");
        std::fs::write(&path, "var<private> v : f32;\n").unwrap();

        let mut map = SourceMap::new();
        let id = map.load_file(&path).unwrap();
        let file = map.get_file(id).unwrap();
        assert_eq!(file.line_count(), 1);
        assert!(file.name().ends_with("shader.wgsl"));
    }

    #[test]
    fn test_source_map_add_file() {
        let mut map = SourceMap::new();
        assert_eq!(map.add_file("a.wgsl", "").0, 0);
        assert_eq!(map.add_file("b.wgsl", "").0, 1);
        assert_eq!(map.file_count(), 2);
    }

    #[test]
    fn test_source_map_get_file_not_found() {
        let map = SourceMap::new();
        assert!(map.get(FileId(0)).is_none());
        assert!(matches!(
            map.get_file(FileId(0)),
            Err(SourceError::FileNotFound(0))
        ));
    }

    #[test]
    fn test_source_map_format_span() {
        let mut map = SourceMap::new();
        let file_id = map.add_file("main.wgsl", "let x = 1;");
        let span = Span::new(file_id, SourceLocation::new(1, 5), SourceLocation::new(1, 6));
        let formatted = map.format_span(span).unwrap();
        assert_eq!(
            formatted,
            "--> main.wgsl:1:5\n  1 | let x = 1;\n    |     ^"
        );
    }

    #[test]
    fn test_source_map_format_span_unknown_file() {
        let map = SourceMap::new();
        assert!(map.format_span(Span::DUMMY).is_none());
    }

    #[quickcheck]
    fn prop_lines_rejoin_to_content(s: String) -> TestResult {
        if s.contains('\r') {
            return TestResult::discard();
        }
        let file = SourceFile::new(0, "prop.wgsl", s.as_str());
        let joined = file.lines().collect::<Vec<_>>().join(&b'\n');
        let expected = s.strip_suffix('\n').unwrap_or(&s);
        TestResult::from_bool(joined == expected.as_bytes())
    }

    #[quickcheck]
    fn prop_no_line_contains_newline(s: String) -> bool {
        let file = SourceFile::new(0, "prop.wgsl", s);
        let ok = file.lines().all(|line| !line.contains(&b'\n'));
        ok
    }
}
