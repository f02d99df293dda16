//! Error type definitions for playlist parsing
//!
//! The parser has exactly one structural precondition (the playlist header
//! line), so the error surface is deliberately small: either the source text
//! had no lines at all, or its first line did not carry the expected header
//! attributes. Everything else degrades by omission rather than failing.

use thiserror::Error;

/// Errors returned by the playlist parser
///
/// Body irregularities (an odd trailing line, attributes that do not match)
/// never raise; they are dropped from the output instead. Guide generation
/// has no failure modes at all, so this enum is the complete failure surface
/// of the crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The source text contained no lines, so no header could be read
    #[error("playlist source is empty")]
    EmptySource,

    /// The first line did not match the
    /// `#EXTM3U url-tvg="..." x-tvg-url="..."` header shape
    #[error("malformed playlist header: {line:?}")]
    MalformedHeader {
        /// The header line as it appeared in the source
        line: String,
    },
}

impl FormatError {
    /// Create a malformed-header error from the offending line
    pub fn malformed_header<S: Into<String>>(line: S) -> Self {
        Self::MalformedHeader { line: line.into() }
    }
}
