//! Utility modules for the listing tool.

pub mod date;
pub mod log;
pub mod slug;
