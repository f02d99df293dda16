//! Utility modules shared across the crate
//!
//! Small reusable helpers that belong to neither the parser nor the
//! generator alone.

pub mod url;
