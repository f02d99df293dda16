//! Centralized error handling for playlist parsing
//!
//! This module provides the error types raised while interpreting playlist
//! text. Parsing fails fast on exactly one structural precondition (the
//! header line); every other input irregularity degrades by omission, and
//! guide generation never fails at all, so the taxonomy stays intentionally
//! flat.
//!
//! # Usage
//!
//! ```rust
//! use m3u_epg::errors::{FormatError, FormatResult};
//!
//! fn reject_blank(source: &str) -> FormatResult<()> {
//!     if source.is_empty() {
//!         return Err(FormatError::EmptySource);
//!     }
//!     Ok(())
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using FormatError
pub type FormatResult<T> = Result<T, FormatError>;
