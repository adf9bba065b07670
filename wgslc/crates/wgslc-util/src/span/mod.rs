//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! 1-based (line, column) pairs, ranges of them, and file identification.
//!
//! # Examples
//!
//! ```
//! use wgslc_util::span::{FileId, SourceLocation, Span};
//!
//! // A span covering `fn` at the start of line 3
//! let span = Span::new(FileId(0), SourceLocation::new(3, 1), SourceLocation::new(3, 3));
//! assert_eq!(span.begin().line, 3);
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

use std::fmt;

/// A unique identifier for a source file
///
/// FileIds are assigned sequentially as files are added to the [`SourceMap`].
///
/// # Examples
///
/// ```
/// use wgslc_util::span::FileId;
///
/// let id = FileId(0);
/// assert_eq!(id.0, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Create a new FileId
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// Get the raw index value
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// A dummy FileId for testing
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// A position in a source file.
///
/// Both fields are 1-based. `column` counts bytes within the line, so
/// `column == line_length + 1` is the position just past the last byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
}

impl SourceLocation {
    /// Create a location
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range of source locations.
///
/// `end` is the location immediately after the last byte of the lexeme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceRange {
    /// First location covered by the range
    pub begin: SourceLocation,
    /// Location just past the range
    pub end: SourceLocation,
}

impl SourceRange {
    /// Create a range
    #[inline]
    pub const fn new(begin: SourceLocation, end: SourceLocation) -> Self {
        Self { begin, end }
    }

    /// Create an empty range at a single location
    #[inline]
    pub const fn point(at: SourceLocation) -> Self {
        Self { begin: at, end: at }
    }

    /// Returns true if the range covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns true if `location` lies inside the range
    pub fn contains(&self, location: SourceLocation) -> bool {
        self.begin <= location && location < self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin, self.end)
    }
}

/// Source location span
///
/// A `Span` is a [`SourceRange`] stamped with the [`FileId`] of the file it
/// was taken from.
///
/// # Examples
///
/// ```
/// use wgslc_util::span::{FileId, SourceLocation, Span};
///
/// let point = Span::point(FileId(1), SourceLocation::new(1, 5));
/// assert!(point.range.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// File identifier
    pub file_id: FileId,
    /// Covered range
    pub range: SourceRange,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        file_id: FileId::DUMMY,
        range: SourceRange::point(SourceLocation::new(1, 1)),
    };

    /// Create a span
    #[inline]
    pub const fn new(file_id: FileId, begin: SourceLocation, end: SourceLocation) -> Self {
        Self {
            file_id,
            range: SourceRange::new(begin, end),
        }
    }

    /// Create an empty span at a single location
    #[inline]
    pub const fn point(file_id: FileId, at: SourceLocation) -> Self {
        Self {
            file_id,
            range: SourceRange::point(at),
        }
    }

    /// First location of the span
    #[inline]
    pub fn begin(&self) -> SourceLocation {
        self.range.begin
    }

    /// Location just past the span
    #[inline]
    pub fn end(&self) -> SourceLocation {
        self.range.end
    }

    /// Smallest span covering both spans.
    ///
    /// The file id of `self` is kept.
    pub fn merge(self, other: Span) -> Span {
        Span {
            file_id: self.file_id,
            range: SourceRange::new(
                self.range.begin.min(other.range.begin),
                self.range.end.max(other.range.end),
            ),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_id_new() {
        let id = FileId::new(42);
        assert_eq!(id.0, 42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn test_file_id_default() {
        assert_eq!(FileId::default(), FileId::DUMMY);
    }

    #[test]
    fn test_location_ordering() {
        assert!(SourceLocation::new(1, 9) < SourceLocation::new(2, 1));
        assert!(SourceLocation::new(2, 1) < SourceLocation::new(2, 2));
    }

    #[test]
    fn test_location_display() {
        assert_eq!(SourceLocation::new(3, 14).to_string(), "3:14");
    }

    #[test]
    fn test_range_is_empty() {
        let at = SourceLocation::new(1, 4);
        assert!(SourceRange::point(at).is_empty());
        assert!(!SourceRange::new(at, SourceLocation::new(1, 5)).is_empty());
    }

    #[test]
    fn test_range_contains() {
        let range = SourceRange::new(SourceLocation::new(1, 2), SourceLocation::new(1, 5));
        assert!(range.contains(SourceLocation::new(1, 2)));
        assert!(range.contains(SourceLocation::new(1, 4)));
        assert!(!range.contains(SourceLocation::new(1, 5)));
        assert!(!range.contains(SourceLocation::new(2, 1)));
    }

    #[test]
    fn test_span_accessors() {
        let span = Span::new(FileId(2), SourceLocation::new(1, 1), SourceLocation::new(1, 4));
        assert_eq!(span.file_id, FileId(2));
        assert_eq!(span.begin(), SourceLocation::new(1, 1));
        assert_eq!(span.end(), SourceLocation::new(1, 4));
        assert_eq!(span.to_string(), "1:1-1:4");
    }

    #[test]
    fn test_span_merge() {
        let a = Span::new(FileId(0), SourceLocation::new(1, 1), SourceLocation::new(1, 3));
        let b = Span::new(FileId(0), SourceLocation::new(2, 2), SourceLocation::new(2, 7));
        let merged = a.merge(b);
        assert_eq!(merged.begin(), SourceLocation::new(1, 1));
        assert_eq!(merged.end(), SourceLocation::new(2, 7));
    }

    #[test]
    fn test_span_dummy() {
        assert_eq!(Span::DUMMY, Span::default());
    }
}
