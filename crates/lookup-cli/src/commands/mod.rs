//! CLI command handlers.
//!
//! Each handler returns the text to print; errors carry user-facing messages.

pub mod format;
pub mod lookup;
pub mod status;
pub mod waitlist;
