//! Shared record model for playlist parsing and guide generation
//!
//! The parser writes these shapes and the guide generator reads them; the
//! two components never call each other, so this module is the only coupling
//! between them.

pub mod epg;
pub mod playlist;

// Re-export commonly used types for convenience
pub use epg::*;
pub use playlist::*;
